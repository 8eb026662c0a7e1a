use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::Coupon;
use crate::seed;
use crate::services::fault::FaultInjector;
use crate::storage::StorageBackend;
use crate::stores::{CartStore, CatalogStore};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub inner: Arc<RwLock<AppStateInner>>,
    pub faults: Arc<dyn FaultInjector>,
}

/// Inner state behind the lock; stores are mutated by handlers
pub struct AppStateInner {
    pub catalog: CatalogStore,
    pub cart: CartStore,
    pub coupons: Vec<Coupon>,
}

impl AppState {
    /// Builds the state from seed data, rehydrating persisted favorites/cart
    pub async fn new(storage: Arc<dyn StorageBackend>, faults: Arc<dyn FaultInjector>) -> Self {
        let catalog = CatalogStore::load(seed::courses(), storage.clone()).await;
        let cart = CartStore::load(storage).await;

        Self {
            inner: Arc::new(RwLock::new(AppStateInner {
                catalog,
                cart,
                coupons: seed::coupons(),
            })),
            faults,
        }
    }
}
