use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::models::{CartItem, CartLine, CartView, Coupon};
use crate::storage::{self, StorageBackend, CART_KEY};

use super::CourseLookup;

/// Why a coupon code could not be applied
///
/// Rendered as an inline user-facing message, never a fault.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CouponError {
    #[error("Mã giảm giá không hợp lệ hoặc đã hết hạn")]
    UnknownCode,

    #[error("Đơn hàng tối thiểu {min} VNĐ để áp dụng mã này")]
    BelowMinimum { min: u64 },
}

/// Owns the cart entries, the applied coupon and its computed discount
///
/// Entries are written through to the storage port on every mutation. The
/// coupon and discount are session state and are not persisted, matching the
/// browser storefront.
pub struct CartStore {
    items: Vec<CartItem>,
    coupon: Option<Coupon>,
    discount: u64,
    storage: Arc<dyn StorageBackend>,
}

impl CartStore {
    /// Builds the store, rehydrating entries persisted under the `cart` key
    pub async fn load(storage: Arc<dyn StorageBackend>) -> Self {
        let items: Vec<CartItem> = storage::load_or_default(storage.as_ref(), CART_KEY).await;
        Self {
            items,
            coupon: None,
            discount: 0,
            storage,
        }
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn coupon(&self) -> Option<&Coupon> {
        self.coupon.as_ref()
    }

    pub fn discount(&self) -> u64 {
        self.discount
    }

    /// Total quantity across all entries
    pub fn count(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    /// Adds a course, incrementing the quantity when it is already present
    pub async fn add_item(&mut self, course_id: &str, quantity: u32) {
        match self.items.iter_mut().find(|item| item.course_id == course_id) {
            Some(item) => item.quantity += quantity,
            None => self.items.push(CartItem {
                course_id: course_id.to_string(),
                quantity,
            }),
        }
        self.persist().await;
    }

    /// Replaces an entry's quantity; zero removes the entry
    pub async fn update_quantity(&mut self, course_id: &str, quantity: u32) {
        if quantity == 0 {
            self.remove_item(course_id).await;
            return;
        }

        if let Some(item) = self.items.iter_mut().find(|item| item.course_id == course_id) {
            item.quantity = quantity;
        }
        self.persist().await;
    }

    pub async fn remove_item(&mut self, course_id: &str) {
        self.items.retain(|item| item.course_id != course_id);
        self.persist().await;
    }

    /// Empties the cart and resets any applied coupon
    pub async fn clear(&mut self) {
        self.items.clear();
        self.coupon = None;
        self.discount = 0;
        self.persist().await;
    }

    /// Sum of `unit price * quantity`, re-joined against the catalog
    ///
    /// Entries whose course id no longer resolves contribute nothing.
    pub fn subtotal(&self, lookup: &dyn CourseLookup) -> u64 {
        self.items
            .iter()
            .filter_map(|item| {
                lookup
                    .course(&item.course_id)
                    .map(|course| course.price * u64::from(item.quantity))
            })
            .sum()
    }

    /// Applies a coupon code against the current subtotal
    ///
    /// The code is upper-normalized before matching. On success the coupon
    /// and its discount are stored and the discount is returned.
    pub fn apply_coupon(
        &mut self,
        code: &str,
        coupons: &[Coupon],
        lookup: &dyn CourseLookup,
        now: DateTime<Utc>,
    ) -> Result<u64, CouponError> {
        let code = code.trim().to_uppercase();
        let coupon = coupons
            .iter()
            .find(|c| c.code == code && c.is_usable(now))
            .ok_or(CouponError::UnknownCode)?;

        let subtotal = self.subtotal(lookup);
        if subtotal < coupon.min_amount {
            return Err(CouponError::BelowMinimum {
                min: coupon.min_amount,
            });
        }

        let discount = coupon.discount_for(subtotal);
        self.coupon = Some(coupon.clone());
        self.discount = discount;

        tracing::info!(code = %coupon.code, discount, "Applied coupon");
        Ok(discount)
    }

    /// Clears the applied coupon, resetting the discount to exactly zero
    pub fn remove_coupon(&mut self) {
        self.coupon = None;
        self.discount = 0;
    }

    /// Final amount: subtotal minus discount, never negative
    pub fn total(&self, lookup: &dyn CourseLookup) -> u64 {
        self.subtotal(lookup).saturating_sub(self.discount)
    }

    /// Joins the entries against the catalog into a client-facing view
    ///
    /// Entries whose course has left the catalog are filtered out silently.
    pub fn view(&self, lookup: &dyn CourseLookup) -> CartView {
        let items: Vec<CartLine> = self
            .items
            .iter()
            .filter_map(|item| {
                lookup.course(&item.course_id).map(|course| CartLine {
                    course: course.clone(),
                    quantity: item.quantity,
                    line_total: course.price * u64::from(item.quantity),
                })
            })
            .collect();

        CartView {
            count: self.count(),
            subtotal: self.subtotal(lookup),
            discount: self.discount,
            total: self.total(lookup),
            coupon: self.coupon.clone(),
            items,
        }
    }

    async fn persist(&self) {
        storage::save(self.storage.as_ref(), CART_KEY, &self.items).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Course, Level};
    use crate::seed;
    use crate::storage::MemoryStorage;
    use chrono::TimeZone;

    fn catalog() -> Vec<Course> {
        vec![
            course("a", 800_000),
            course("b", 1_200_000),
            course("c", 40_000),
        ]
    }

    fn course(id: &str, price: u64) -> Course {
        Course {
            id: id.to_string(),
            title: format!("Course {id}"),
            instructor: "Instructor".to_string(),
            price,
            original_price: None,
            description: String::new(),
            rating: 4.0,
            students: 100,
            duration: "8 tuần".to_string(),
            level: Level::Beginner,
            category: Category::Programming,
            tags: Vec::new(),
            is_favorite: false,
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 6, 1, 12, 0, 0).unwrap()
    }

    async fn empty_cart() -> CartStore {
        CartStore::load(Arc::new(MemoryStorage::new())).await
    }

    #[tokio::test]
    async fn test_add_item_increments_existing_entry() {
        let mut cart = empty_cart().await;
        cart.add_item("a", 1).await;
        cart.add_item("a", 2).await;
        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.count(), 3);
    }

    #[tokio::test]
    async fn test_update_quantity_zero_equals_remove() {
        let mut cart = empty_cart().await;
        cart.add_item("a", 2).await;
        cart.add_item("b", 1).await;
        cart.update_quantity("a", 0).await;

        let mut reference = empty_cart().await;
        reference.add_item("a", 2).await;
        reference.add_item("b", 1).await;
        reference.remove_item("a").await;

        assert_eq!(cart.items(), reference.items());
    }

    #[tokio::test]
    async fn test_subtotal_joins_catalog_prices() {
        let mut cart = empty_cart().await;
        cart.add_item("a", 2).await;
        cart.add_item("b", 1).await;
        assert_eq!(cart.subtotal(&catalog()), 2 * 800_000 + 1_200_000);
    }

    #[tokio::test]
    async fn test_subtotal_skips_stale_course_ids() {
        let mut cart = empty_cart().await;
        cart.add_item("a", 1).await;
        cart.add_item("gone", 5).await;
        assert_eq!(cart.subtotal(&catalog()), 800_000);
    }

    #[tokio::test]
    async fn test_apply_welcome10_caps_discount() {
        // Subtotal 3,000,000: 10% would be 300,000, capped at 200,000
        let mut cart = empty_cart().await;
        cart.add_item("a", 3).await;
        cart.add_item("c", 15).await;
        assert_eq!(cart.subtotal(&catalog()), 3_000_000);

        let discount = cart
            .apply_coupon("WELCOME10", &seed::coupons(), &catalog(), now())
            .unwrap();
        assert_eq!(discount, 200_000);
        assert_eq!(cart.total(&catalog()), 2_800_000);
    }

    #[tokio::test]
    async fn test_apply_coupon_below_minimum_leaves_discount_at_zero() {
        let mut cart = empty_cart().await;
        cart.add_item("c", 10).await; // 400,000, below WELCOME10's 500,000 floor
        let result = cart.apply_coupon("WELCOME10", &seed::coupons(), &catalog(), now());
        assert_eq!(result, Err(CouponError::BelowMinimum { min: 500_000 }));
        assert_eq!(cart.discount(), 0);
        assert!(cart.coupon().is_none());
    }

    #[tokio::test]
    async fn test_apply_coupon_normalizes_code_case() {
        let mut cart = empty_cart().await;
        cart.add_item("b", 1).await;
        let discount = cart
            .apply_coupon("welcome10", &seed::coupons(), &catalog(), now())
            .unwrap();
        assert_eq!(discount, 120_000);
    }

    #[tokio::test]
    async fn test_apply_unknown_code_fails() {
        let mut cart = empty_cart().await;
        cart.add_item("b", 1).await;
        let result = cart.apply_coupon("NOPE", &seed::coupons(), &catalog(), now());
        assert_eq!(result, Err(CouponError::UnknownCode));
    }

    #[tokio::test]
    async fn test_expired_coupon_is_rejected() {
        let mut cart = empty_cart().await;
        cart.add_item("b", 1).await;
        let late = Utc.with_ymd_and_hms(2031, 1, 1, 0, 0, 0).unwrap();
        let result = cart.apply_coupon("WELCOME10", &seed::coupons(), &catalog(), late);
        assert_eq!(result, Err(CouponError::UnknownCode));
    }

    #[tokio::test]
    async fn test_fixed_coupon_can_exceed_subtotal_but_total_clamps() {
        let mut cart = empty_cart().await;
        cart.add_item("b", 1).await; // 1,200,000 meets SAVE100K's floor
        cart.apply_coupon("SAVE100K", &seed::coupons(), &catalog(), now())
            .unwrap();

        // Shrink the cart after applying; the stored discount now exceeds the subtotal
        cart.update_quantity("b", 0).await;
        cart.add_item("c", 1).await; // 40,000
        assert_eq!(cart.discount(), 100_000);
        assert_eq!(cart.total(&catalog()), 0);
    }

    #[tokio::test]
    async fn test_remove_coupon_resets_discount_to_zero() {
        let mut cart = empty_cart().await;
        cart.add_item("b", 1).await;
        cart.apply_coupon("WELCOME10", &seed::coupons(), &catalog(), now())
            .unwrap();
        assert!(cart.discount() > 0);

        cart.remove_coupon();
        assert_eq!(cart.discount(), 0);
        assert!(cart.coupon().is_none());
        assert_eq!(cart.total(&catalog()), cart.subtotal(&catalog()));
    }

    #[tokio::test]
    async fn test_clear_resets_items_and_coupon() {
        let mut cart = empty_cart().await;
        cart.add_item("b", 2).await;
        cart.apply_coupon("STUDENT20", &seed::coupons(), &catalog(), now())
            .unwrap();

        cart.clear().await;
        assert!(cart.items().is_empty());
        assert!(cart.coupon().is_none());
        assert_eq!(cart.discount(), 0);
    }

    #[tokio::test]
    async fn test_cart_survives_reload() {
        let storage = Arc::new(MemoryStorage::new());
        let mut cart = CartStore::load(storage.clone()).await;
        cart.add_item("a", 2).await;

        let reloaded = CartStore::load(storage).await;
        assert_eq!(reloaded.items(), cart.items());
    }

    #[tokio::test]
    async fn test_view_filters_stale_entries() {
        let mut cart = empty_cart().await;
        cart.add_item("a", 1).await;
        cart.add_item("gone", 1).await;
        let view = cart.view(&catalog());
        assert_eq!(view.items.len(), 1);
        assert_eq!(view.subtotal, 800_000);
    }
}
