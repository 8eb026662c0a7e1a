use serde::{Deserialize, Serialize};

/// Course difficulty level
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    /// Display label shown to learners
    pub fn label(&self) -> &'static str {
        match self {
            Level::Beginner => "Cơ bản",
            Level::Intermediate => "Trung cấp",
            Level::Advanced => "Nâng cao",
        }
    }
}

/// Catalog category a course belongs to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Programming,
    Language,
    Marketing,
    Design,
    DataScience,
    Business,
}

impl Category {
    /// Display label shown to learners
    pub fn label(&self) -> &'static str {
        match self {
            Category::Programming => "Lập trình",
            Category::Language => "Ngoại ngữ",
            Category::Marketing => "Marketing",
            Category::Design => "Thiết kế",
            Category::DataScience => "Khoa học dữ liệu",
            Category::Business => "Kinh doanh",
        }
    }
}

/// A course in the storefront catalog
///
/// Prices are VND amounts. `price <= original_price` whenever a strike-through
/// original price is present.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: String,
    pub title: String,
    pub instructor: String,
    pub price: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<u64>,
    pub description: String,
    pub rating: f64,
    pub students: u64,
    pub duration: String,
    pub level: Level,
    pub category: Category,
    pub tags: Vec<String>,
    #[serde(default)]
    pub is_favorite: bool,
}

impl Course {
    /// True when the course is listed below its original price
    pub fn is_discounted(&self) -> bool {
        self.original_price.is_some_and(|original| original > self.price)
    }

    /// Case-folded tag membership test
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }
}
