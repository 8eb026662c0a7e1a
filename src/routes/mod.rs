use axum::{
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;

pub mod cart;
pub mod chat;
pub mod courses;
pub mod suggestions;

/// Creates the application router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .nest("/api/v1", api_routes())
        // The mock suggestion endpoint keeps its browser-era path
        .route("/api/suggestions", get(suggestions::suggestions))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// API routes under /api/v1
fn api_routes() -> Router<AppState> {
    Router::new()
        // Catalog
        .route("/courses", get(courses::list))
        .route("/courses/counts", get(courses::filter_counts))
        .route("/courses/:id/favorite", post(courses::toggle_favorite))
        .route("/favorites", get(courses::favorites))
        // Cart
        .route("/cart", get(cart::view))
        .route("/cart", delete(cart::clear))
        .route("/cart/items", post(cart::add_item))
        .route("/cart/items/:id", put(cart::update_quantity))
        .route("/cart/items/:id", delete(cart::remove_item))
        .route("/cart/coupon", post(cart::apply_coupon))
        .route("/cart/coupon", delete(cart::remove_coupon))
        // Recommendations
        .route("/recommendations/trending", get(courses::trending))
        .route("/recommendations/similar", get(courses::similar))
        // Chat assistant
        .route("/chat", post(chat::send_message))
        .route("/chat/starters", get(chat::starters))
}

/// Health check endpoint
async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}
