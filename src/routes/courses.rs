use std::collections::BTreeMap;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::{
    error::{AppError, AppResult},
    models::Course,
    services::recommendations,
    state::AppState,
    stores::{CatalogStore, PriceFilter},
};

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub search: Option<String>,
    pub price: Option<PriceFilter>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteResponse {
    pub course_id: String,
    pub is_favorite: bool,
}

/// Lists the catalog, optionally narrowed by search term and price bucket
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Json<Vec<Course>> {
    let inner = state.inner.read().await;

    let mut courses = match query.search.as_deref() {
        Some(term) => inner.catalog.search(term),
        None => inner.catalog.courses().to_vec(),
    };
    if let Some(filter) = query.price {
        courses = CatalogStore::filter_by_price(courses, filter);
    }

    Json(courses)
}

/// Course counts per price bucket
pub async fn filter_counts(
    State(state): State<AppState>,
) -> Json<BTreeMap<&'static str, usize>> {
    let inner = state.inner.read().await;
    Json(inner.catalog.filter_counts())
}

/// Toggles the favorite flag on a course
pub async fn toggle_favorite(
    State(state): State<AppState>,
    Path(course_id): Path<String>,
) -> AppResult<Json<FavoriteResponse>> {
    let mut inner = state.inner.write().await;

    match inner.catalog.toggle_favorite(&course_id).await {
        Some(is_favorite) => Ok(Json(FavoriteResponse {
            course_id,
            is_favorite,
        })),
        None => Err(AppError::NotFound(format!("Course {course_id} not found"))),
    }
}

/// Lists the user's favorite courses
pub async fn favorites(State(state): State<AppState>) -> Json<Vec<Course>> {
    let inner = state.inner.read().await;
    Json(inner.catalog.favorites())
}

/// Trending ranking: high rating, high student count, favorites excluded
pub async fn trending(State(state): State<AppState>) -> Json<Vec<Course>> {
    let inner = state.inner.read().await;
    let behavior = inner.catalog.behavior_snapshot(inner.cart.items());
    Json(recommendations::trending(inner.catalog.courses(), &behavior))
}

/// Courses similar to the favorite set by category or instructor
pub async fn similar(State(state): State<AppState>) -> Json<Vec<Course>> {
    let inner = state.inner.read().await;
    let behavior = inner.catalog.behavior_snapshot(inner.cart.items());
    Json(recommendations::similar_to_favorites(
        inner.catalog.courses(),
        &behavior,
    ))
}
