use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How a coupon reduces the order amount
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DiscountKind {
    /// `value` is a percentage of the subtotal, 0 < value <= 100
    Percentage,
    /// `value` is a flat VND amount
    Fixed,
}

/// A named discount rule with eligibility constraints
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Coupon {
    pub id: String,
    pub code: String,
    pub kind: DiscountKind,
    pub value: u64,
    pub description: String,
    /// Minimum subtotal required before the coupon applies
    #[serde(default)]
    pub min_amount: u64,
    /// Cap on the computed discount, percentage coupons only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_discount: Option<u64>,
    pub expires_at: DateTime<Utc>,
    pub is_active: bool,
}

impl Coupon {
    /// Whether the coupon can be redeemed at `now`, ignoring the order amount
    pub fn is_usable(&self, now: DateTime<Utc>) -> bool {
        self.is_active && now <= self.expires_at
    }

    /// Discount amount for the given subtotal
    ///
    /// Fixed coupons are not capped by the subtotal; the cart total clamps at
    /// zero instead.
    pub fn discount_for(&self, subtotal: u64) -> u64 {
        match self.kind {
            DiscountKind::Percentage => {
                let discount = subtotal * self.value / 100;
                match self.max_discount {
                    Some(cap) => discount.min(cap),
                    None => discount,
                }
            }
            DiscountKind::Fixed => self.value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn welcome10() -> Coupon {
        Coupon {
            id: "1".to_string(),
            code: "WELCOME10".to_string(),
            kind: DiscountKind::Percentage,
            value: 10,
            description: "Giảm 10% cho đơn hàng đầu tiên".to_string(),
            min_amount: 500_000,
            max_discount: Some(200_000),
            expires_at: Utc.with_ymd_and_hms(2030, 12, 31, 23, 59, 59).unwrap(),
            is_active: true,
        }
    }

    #[test]
    fn test_percentage_discount_capped_by_max() {
        // 10% of 3,000,000 is 300,000, capped at 200,000
        assert_eq!(welcome10().discount_for(3_000_000), 200_000);
    }

    #[test]
    fn test_percentage_discount_below_cap() {
        assert_eq!(welcome10().discount_for(1_000_000), 100_000);
    }

    #[test]
    fn test_percentage_discount_without_cap() {
        let mut coupon = welcome10();
        coupon.max_discount = None;
        assert_eq!(coupon.discount_for(3_000_000), 300_000);
    }

    #[test]
    fn test_fixed_discount_not_capped_by_subtotal() {
        let coupon = Coupon {
            kind: DiscountKind::Fixed,
            value: 100_000,
            max_discount: None,
            ..welcome10()
        };
        assert_eq!(coupon.discount_for(50_000), 100_000);
    }

    #[test]
    fn test_is_usable_respects_expiry() {
        let coupon = welcome10();
        let before = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        let after = Utc.with_ymd_and_hms(2031, 1, 1, 0, 0, 0).unwrap();
        assert!(coupon.is_usable(before));
        assert!(!coupon.is_usable(after));
    }

    #[test]
    fn test_is_usable_respects_active_flag() {
        let mut coupon = welcome10();
        coupon.is_active = false;
        let now = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        assert!(!coupon.is_usable(now));
    }
}
