use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::models::{CartItem, Course, UserBehavior};
use crate::storage::{self, StorageBackend, FAVORITES_KEY};

use super::CourseLookup;

/// Price buckets used by the catalog listing filter
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PriceFilter {
    #[serde(rename = "all")]
    All,
    #[serde(rename = "under500k")]
    Under500k,
    #[serde(rename = "500k-1m")]
    Between500kAnd1m,
    #[serde(rename = "over1m")]
    Over1m,
}

impl PriceFilter {
    fn matches(&self, price: u64) -> bool {
        match self {
            PriceFilter::All => true,
            PriceFilter::Under500k => price < 500_000,
            PriceFilter::Between500kAnd1m => (500_000..=1_000_000).contains(&price),
            PriceFilter::Over1m => price > 1_000_000,
        }
    }

    fn key(&self) -> &'static str {
        match self {
            PriceFilter::All => "all",
            PriceFilter::Under500k => "under500k",
            PriceFilter::Between500kAnd1m => "500k-1m",
            PriceFilter::Over1m => "over1m",
        }
    }

    const ALL: [PriceFilter; 4] = [
        PriceFilter::All,
        PriceFilter::Under500k,
        PriceFilter::Between500kAnd1m,
        PriceFilter::Over1m,
    ];
}

/// Owns the course list and the persisted favorite id set
///
/// Courses are static seed data; the only runtime mutation is the favorite
/// flag, which is written through to the storage port on every toggle.
pub struct CatalogStore {
    courses: Vec<Course>,
    storage: Arc<dyn StorageBackend>,
}

impl CatalogStore {
    /// Builds the store, applying persisted favorite ids onto the seed list
    ///
    /// Favorite ids that no longer resolve to a course are dropped silently.
    pub async fn load(seed: Vec<Course>, storage: Arc<dyn StorageBackend>) -> Self {
        let favorite_ids: Vec<String> = storage::load_or_default(storage.as_ref(), FAVORITES_KEY).await;

        let mut courses = seed;
        for course in &mut courses {
            course.is_favorite = favorite_ids.contains(&course.id);
        }

        Self { courses, storage }
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Courses the user has marked as favorite
    pub fn favorites(&self) -> Vec<Course> {
        self.courses.iter().filter(|c| c.is_favorite).cloned().collect()
    }

    pub fn favorite_count(&self) -> usize {
        self.courses.iter().filter(|c| c.is_favorite).count()
    }

    /// Flips the favorite flag and persists the id set
    ///
    /// Returns the new flag state, or `None` for an unknown course id.
    pub async fn toggle_favorite(&mut self, course_id: &str) -> Option<bool> {
        let course = self.courses.iter_mut().find(|c| c.id == course_id)?;
        course.is_favorite = !course.is_favorite;
        let state = course.is_favorite;

        let favorite_ids: Vec<&str> = self
            .courses
            .iter()
            .filter(|c| c.is_favorite)
            .map(|c| c.id.as_str())
            .collect();
        storage::save(self.storage.as_ref(), FAVORITES_KEY, &favorite_ids).await;

        tracing::debug!(course_id, favorite = state, "Toggled favorite");
        Some(state)
    }

    /// Case-folded substring search over title, instructor, category and tags
    pub fn search(&self, term: &str) -> Vec<Course> {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return self.courses.clone();
        }

        self.courses
            .iter()
            .filter(|course| {
                course.title.to_lowercase().contains(&term)
                    || course.instructor.to_lowercase().contains(&term)
                    || course.category.label().to_lowercase().contains(&term)
                    || course.tags.iter().any(|tag| tag.to_lowercase().contains(&term))
            })
            .cloned()
            .collect()
    }

    /// Applies the price bucket filter to an already-searched list
    pub fn filter_by_price(courses: Vec<Course>, filter: PriceFilter) -> Vec<Course> {
        courses
            .into_iter()
            .filter(|course| filter.matches(course.price))
            .collect()
    }

    /// Course count per price bucket, for the filter UI
    pub fn filter_counts(&self) -> BTreeMap<&'static str, usize> {
        PriceFilter::ALL
            .iter()
            .map(|filter| {
                let count = self.courses.iter().filter(|c| filter.matches(c.price)).count();
                (filter.key(), count)
            })
            .collect()
    }

    /// Derives the ephemeral behavior snapshot recommendations run against
    pub fn behavior_snapshot(&self, cart_items: &[CartItem]) -> UserBehavior {
        let favorites: Vec<&Course> = self.courses.iter().filter(|c| c.is_favorite).collect();

        let mut favorite_categories = Vec::new();
        let mut favorite_instructors = Vec::new();
        for course in &favorites {
            if !favorite_categories.contains(&course.category) {
                favorite_categories.push(course.category);
            }
            if !favorite_instructors.contains(&course.instructor) {
                favorite_instructors.push(course.instructor.clone());
            }
        }

        UserBehavior {
            favorite_courses: favorites.iter().map(|c| c.id.clone()).collect(),
            viewed_courses: Vec::new(),
            cart_courses: cart_items.iter().map(|i| i.course_id.clone()).collect(),
            favorite_categories,
            favorite_instructors,
        }
    }
}

impl CourseLookup for CatalogStore {
    fn course(&self, id: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;
    use crate::storage::{MemoryStorage, MockStorageBackend};

    async fn seeded_store() -> CatalogStore {
        CatalogStore::load(seed::courses(), Arc::new(MemoryStorage::new())).await
    }

    #[tokio::test]
    async fn test_toggle_favorite_twice_restores_state() {
        let mut store = seeded_store().await;
        assert_eq!(store.toggle_favorite("2").await, Some(true));
        assert_eq!(store.toggle_favorite("2").await, Some(false));
        assert_eq!(store.favorite_count(), 0);
    }

    #[tokio::test]
    async fn test_toggle_favorite_unknown_id() {
        let mut store = seeded_store().await;
        assert_eq!(store.toggle_favorite("nope").await, None);
    }

    #[tokio::test]
    async fn test_favorites_survive_reload() {
        let storage = Arc::new(MemoryStorage::new());
        let mut store = CatalogStore::load(seed::courses(), storage.clone()).await;
        store.toggle_favorite("1").await;
        store.toggle_favorite("5").await;

        let reloaded = CatalogStore::load(seed::courses(), storage).await;
        let favorites = reloaded.favorites();
        let ids: Vec<&str> = favorites.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "5"]);
    }

    #[tokio::test]
    async fn test_stale_favorite_ids_are_dropped() {
        let storage = Arc::new(MemoryStorage::new());
        storage
            .put(FAVORITES_KEY, r#"["1","deleted-course"]"#)
            .await
            .unwrap();

        let store = CatalogStore::load(seed::courses(), storage).await;
        assert_eq!(store.favorite_count(), 1);
    }

    #[tokio::test]
    async fn test_toggle_writes_through_storage_port() {
        let mut mock = MockStorageBackend::new();
        mock.expect_get().returning(|_| Ok(None));
        mock.expect_put()
            .withf(|key, value| key == FAVORITES_KEY && value == r#"["3"]"#)
            .times(1)
            .returning(|_, _| Ok(()));

        let mut store = CatalogStore::load(seed::courses(), Arc::new(mock)).await;
        store.toggle_favorite("3").await;
    }

    #[tokio::test]
    async fn test_search_matches_tags_case_insensitively() {
        let store = seeded_store().await;
        let hits = store.search("react");
        assert!(hits.iter().any(|c| c.id == "2"));
        assert!(hits.iter().all(|c| c.has_tag("React") || c.title.to_lowercase().contains("react")));
    }

    #[tokio::test]
    async fn test_blank_search_returns_everything() {
        let store = seeded_store().await;
        assert_eq!(store.search("   ").len(), store.courses().len());
    }

    #[tokio::test]
    async fn test_filter_counts_partition_catalog() {
        let store = seeded_store().await;
        let counts = store.filter_counts();
        let total = counts["under500k"] + counts["500k-1m"] + counts["over1m"];
        assert_eq!(counts["all"], store.courses().len());
        assert_eq!(total, counts["all"]);
    }

    #[tokio::test]
    async fn test_behavior_snapshot_dedupes_categories() {
        let mut store = seeded_store().await;
        store.toggle_favorite("2").await; // programming
        store.toggle_favorite("7").await; // programming
        let snapshot = store.behavior_snapshot(&[]);
        assert_eq!(snapshot.favorite_courses.len(), 2);
        assert_eq!(snapshot.favorite_categories.len(), 1);
        assert_eq!(snapshot.favorite_instructors.len(), 2);
    }
}
