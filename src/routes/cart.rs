use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::{
    error::{AppError, AppResult},
    models::{CartView, Coupon},
    state::{AppState, AppStateInner},
    stores::CourseLookup,
};

fn default_quantity() -> u32 {
    1
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddItemRequest {
    pub course_id: String,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

#[derive(Debug, Deserialize)]
pub struct UpdateQuantityRequest {
    pub quantity: u32,
}

#[derive(Debug, Deserialize)]
pub struct ApplyCouponRequest {
    pub code: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CouponApplied {
    pub coupon: Coupon,
    pub discount: u64,
}

/// Returns the cart joined against the catalog, with totals
pub async fn view(State(state): State<AppState>) -> Json<CartView> {
    let inner = state.inner.read().await;
    Json(inner.cart.view(&inner.catalog))
}

/// Adds a course to the cart
pub async fn add_item(
    State(state): State<AppState>,
    Json(request): Json<AddItemRequest>,
) -> AppResult<(StatusCode, Json<CartView>)> {
    if request.quantity == 0 {
        return Err(AppError::InvalidInput(
            "Quantity must be at least 1".to_string(),
        ));
    }

    let mut inner = state.inner.write().await;
    let AppStateInner { catalog, cart, .. } = &mut *inner;

    if catalog.course(&request.course_id).is_none() {
        return Err(AppError::NotFound(format!(
            "Course {} not found",
            request.course_id
        )));
    }

    cart.add_item(&request.course_id, request.quantity).await;
    Ok((StatusCode::CREATED, Json(cart.view(&*catalog))))
}

/// Replaces an entry's quantity; zero removes the entry
pub async fn update_quantity(
    State(state): State<AppState>,
    Path(course_id): Path<String>,
    Json(request): Json<UpdateQuantityRequest>,
) -> Json<CartView> {
    let mut inner = state.inner.write().await;
    let AppStateInner { catalog, cart, .. } = &mut *inner;

    cart.update_quantity(&course_id, request.quantity).await;
    Json(cart.view(&*catalog))
}

/// Removes one entry from the cart
pub async fn remove_item(
    State(state): State<AppState>,
    Path(course_id): Path<String>,
) -> Json<CartView> {
    let mut inner = state.inner.write().await;
    let AppStateInner { catalog, cart, .. } = &mut *inner;

    cart.remove_item(&course_id).await;
    Json(cart.view(&*catalog))
}

/// Empties the cart, resetting any applied coupon
pub async fn clear(State(state): State<AppState>) -> Json<CartView> {
    let mut inner = state.inner.write().await;
    let AppStateInner { catalog, cart, .. } = &mut *inner;

    cart.clear().await;
    Json(cart.view(&*catalog))
}

/// Applies a coupon code against the current subtotal
///
/// Validation failures surface as an inline message with a 422 status.
pub async fn apply_coupon(
    State(state): State<AppState>,
    Json(request): Json<ApplyCouponRequest>,
) -> AppResult<Json<CouponApplied>> {
    let mut inner = state.inner.write().await;
    let AppStateInner {
        catalog,
        cart,
        coupons,
    } = &mut *inner;

    let discount = cart.apply_coupon(&request.code, coupons, &*catalog, Utc::now())?;
    let coupon = cart
        .coupon()
        .cloned()
        .ok_or_else(|| AppError::Internal("Coupon vanished after apply".to_string()))?;

    Ok(Json(CouponApplied { coupon, discount }))
}

/// Removes the applied coupon
pub async fn remove_coupon(State(state): State<AppState>) -> Json<CartView> {
    let mut inner = state.inner.write().await;
    let AppStateInner { catalog, cart, .. } = &mut *inner;

    cart.remove_coupon();
    Json(cart.view(&*catalog))
}
