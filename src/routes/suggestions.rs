use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    models::{ApiResponse, SuggestionResponse},
    services::suggestions,
    state::AppState,
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionQuery {
    #[allow(dead_code)] // Carried for parity with the browser client; no per-user state yet
    pub user_id: Option<String>,
    /// URL-encoded JSON behavior snapshot
    pub behavior: Option<String>,
}

/// Mock AI suggestion endpoint with injected failures
///
/// A small share of calls fails with a 500 envelope so clients exercise
/// their degradation path; everything else is deterministic.
pub async fn suggestions(
    State(state): State<AppState>,
    Query(query): Query<SuggestionQuery>,
) -> impl IntoResponse {
    if state.faults.should_fail() {
        tracing::warn!("Injected suggestion endpoint failure");
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<SuggestionResponse>::failure("Lỗi server nội bộ")),
        );
    }

    let inner = state.inner.read().await;
    let response = suggestions::build(inner.catalog.courses(), query.behavior.as_deref());

    (StatusCode::OK, Json(ApiResponse::ok(response)))
}
