use serde::{Deserialize, Serialize};

use super::{Coupon, Course};

/// One line of the cart: a course reference plus a quantity
///
/// Persisted as `{courseId, quantity}`, the same shape the browser client
/// keeps under its `cart` storage key. The unit price is never cached here;
/// it is re-joined from the catalog on every read.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub course_id: String,
    pub quantity: u32,
}

/// Fully joined view of the cart returned to clients
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    pub items: Vec<CartLine>,
    pub count: u32,
    pub subtotal: u64,
    pub discount: u64,
    pub total: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coupon: Option<Coupon>,
}

/// A cart entry joined against the catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub course: Course,
    pub quantity: u32,
    pub line_total: u64,
}
