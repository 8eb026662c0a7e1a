use serde::{Deserialize, Serialize};

use super::{Category, Course};

/// Ephemeral snapshot of a user's favorite/cart activity
///
/// Derived from the catalog and cart stores, or deserialized from the
/// `behavior` query parameter of the suggestion endpoint. All fields default
/// to empty so partial payloads validate at the boundary. Never persisted.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct UserBehavior {
    pub favorite_courses: Vec<String>,
    pub viewed_courses: Vec<String>,
    pub cart_courses: Vec<String>,
    pub favorite_categories: Vec<Category>,
    pub favorite_instructors: Vec<String>,
}

impl UserBehavior {
    pub fn is_empty(&self) -> bool {
        self.favorite_courses.is_empty()
            && self.viewed_courses.is_empty()
            && self.cart_courses.is_empty()
            && self.favorite_categories.is_empty()
            && self.favorite_instructors.is_empty()
    }

    /// Whether the user has favorited the given course id
    pub fn has_favorited(&self, course_id: &str) -> bool {
        self.favorite_courses.iter().any(|id| id == course_id)
    }

    /// Whether the course category is one of the user's favorite categories
    pub fn likes_category(&self, category: Category) -> bool {
        self.favorite_categories.contains(&category)
    }

    /// Case-folded substring match of the course instructor against the
    /// user's favorite instructors
    pub fn likes_instructor(&self, instructor: &str) -> bool {
        let instructor = instructor.to_lowercase();
        self.favorite_instructors
            .iter()
            .any(|favorite| instructor.contains(&favorite.to_lowercase()))
    }
}

/// Summary of the behavior snapshot echoed back by the suggestion endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BehaviorAnalysis {
    pub total_favorites: usize,
    pub favorite_categories: Vec<Category>,
    pub favorite_instructors: Vec<String>,
    pub view_history: usize,
}

impl From<&UserBehavior> for BehaviorAnalysis {
    fn from(behavior: &UserBehavior) -> Self {
        Self {
            total_favorites: behavior.favorite_courses.len(),
            favorite_categories: behavior.favorite_categories.clone(),
            favorite_instructors: behavior.favorite_instructors.clone(),
            view_history: behavior.viewed_courses.len(),
        }
    }
}

/// Standard success/failure envelope used by the suggestion endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
        }
    }
}

/// Payload of a successful suggestion response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionResponse {
    pub suggestions: Vec<Course>,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub behavior_analysis: Option<BehaviorAnalysis>,
}
