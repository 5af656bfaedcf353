//! Token storage backed by browser `localStorage`.
//!
//! TRADE-OFFS
//! ==========
//! Storage access is browser-only behavior; non-hydrate builds are inert so
//! server rendering stays deterministic. Failures are surfaced, not retried;
//! the caller decides what a broken storage backend means for the UI.

#[cfg(test)]
#[path = "token_store_test.rs"]
mod token_store_test;

/// Well-known storage key the host application persists the token under.
pub const TOKEN_STORAGE_KEY: &str = "authToken";

/// Error reading or mutating the token store.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// No `localStorage` is reachable (no window, or access is denied).
    #[error("browser localStorage is unavailable")]
    Unavailable,
    /// The storage backend rejected the operation.
    #[error("storage backend rejected the operation: {0}")]
    Backend(String),
}

/// Key-value access to wherever the issued token is persisted.
///
/// Futures are `?Send`: callers run on the single-threaded browser event
/// loop.
#[async_trait::async_trait(?Send)]
pub trait TokenStore {
    /// Read the value stored under `key`, if any.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    /// Remove the value stored under `key`. Removing an absent key is not an
    /// error.
    async fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// [`TokenStore`] over the browser's `localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalTokenStore;

#[async_trait::async_trait(?Send)]
impl TokenStore for LocalTokenStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "hydrate")]
        {
            browser_storage()?.get_item(key).map_err(js_error)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Ok(None)
        }
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            browser_storage()?.remove_item(key).map_err(js_error)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Ok(())
        }
    }
}

#[cfg(feature = "hydrate")]
fn browser_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(StorageError::Unavailable)
}

#[cfg(feature = "hydrate")]
fn js_error(value: wasm_bindgen::JsValue) -> StorageError {
    StorageError::Backend(format!("{value:?}"))
}
