//! Persistence port for client-side state.
//!
//! The browser storefront kept two independent JSON values under the
//! `favorites` and `cart` local-storage keys. The same contract is modeled
//! here as a key/value port so the stores can be tested against an in-memory
//! fake. Values are opaque JSON strings with no schema versioning; callers
//! treat anything malformed as empty.

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use crate::error::AppResult;

/// Storage key for the favorite course id set
pub const FAVORITES_KEY: &str = "favorites";
/// Storage key for the cart item list
pub const CART_KEY: &str = "cart";

/// Key/value persistence port, last write wins
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait StorageBackend: Send + Sync {
    /// Returns the raw value stored under `key`, if any
    async fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Replaces the value stored under `key`
    async fn put(&self, key: &str, value: &str) -> AppResult<()>;
}

/// Loads and deserializes the value under `key`, degrading to `T::default()`
///
/// A missing key, an unreadable backend, or a malformed value all produce the
/// default; failures are logged, never surfaced.
pub async fn load_or_default<T>(storage: &dyn StorageBackend, key: &str) -> T
where
    T: serde::de::DeserializeOwned + Default,
{
    match storage.get(key).await {
        Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
            tracing::warn!(key, error = %e, "Discarding malformed persisted state");
            T::default()
        }),
        Ok(None) => T::default(),
        Err(e) => {
            tracing::warn!(key, error = %e, "Failed to read persisted state");
            T::default()
        }
    }
}

/// Serializes and stores `value` under `key`, logging on failure
pub async fn save<T: serde::Serialize>(storage: &dyn StorageBackend, key: &str, value: &T) {
    let json = match serde_json::to_string(value) {
        Ok(json) => json,
        Err(e) => {
            tracing::error!(key, error = %e, "Failed to serialize state");
            return;
        }
    };

    if let Err(e) = storage.put(key, &json).await {
        tracing::error!(key, error = %e, "Failed to persist state");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_load_or_default_on_missing_key() {
        let storage = MemoryStorage::new();
        let loaded: Vec<String> = load_or_default(&storage, FAVORITES_KEY).await;
        assert!(loaded.is_empty());
    }

    #[tokio::test]
    async fn test_load_or_default_on_malformed_value() {
        let storage = MemoryStorage::new();
        storage.put(CART_KEY, "{not json").await.unwrap();
        let loaded: Vec<String> = load_or_default(&storage, CART_KEY).await;
        assert!(loaded.is_empty());
    }

    #[tokio::test]
    async fn test_save_then_load_round_trip() {
        let storage = MemoryStorage::new();
        let ids = vec!["1".to_string(), "4".to_string()];
        save(&storage, FAVORITES_KEY, &ids).await;
        let loaded: Vec<String> = load_or_default(&storage, FAVORITES_KEY).await;
        assert_eq!(loaded, ids);
    }
}
