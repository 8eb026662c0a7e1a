pub mod cart;
pub mod catalog;

pub use cart::{CartStore, CouponError};
pub use catalog::{CatalogStore, PriceFilter};

use crate::models::Course;

/// Seam the cart re-joins course prices through
///
/// Implemented by the catalog store; plain course lists satisfy it in tests.
pub trait CourseLookup {
    fn course(&self, id: &str) -> Option<&Course>;
}

impl CourseLookup for Vec<Course> {
    fn course(&self, id: &str) -> Option<&Course> {
        self.iter().find(|c| c.id == id)
    }
}
