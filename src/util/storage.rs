//! Durable key/value storage behind the session store.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser build persists to `localStorage`; tests and the SSR build use
//! an in-process map. Both sit behind [`DurableStorage`] so the session store
//! never touches web-sys glue directly.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Error returned by [`DurableStorage`] operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// No storage backend is reachable (no window, storage disabled, SSR).
    #[error("durable storage unavailable")]
    Unavailable,
    /// The backend rejected the operation (quota exceeded, security error).
    #[error("storage access failed: {0}")]
    Access(String),
    /// A stored value could not be decoded into the requested type.
    #[error("stored value is malformed: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Origin-scoped string storage that survives page reloads.
pub trait DurableStorage {
    /// Read the raw value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be reached.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the write.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Removing a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be reached.
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

/// Load a JSON value stored under `key`.
///
/// # Errors
///
/// Returns [`StorageError::Decode`] when the stored text is not valid JSON for
/// `T`, or the backend's error when it cannot be read.
pub fn load_json<T: DeserializeOwned>(
    storage: &impl DurableStorage,
    key: &str,
) -> Result<Option<T>, StorageError> {
    let Some(raw) = storage.get_item(key)? else {
        return Ok(None);
    };
    Ok(Some(serde_json::from_str(&raw)?))
}

/// Save a JSON value under `key`.
///
/// # Errors
///
/// Returns an error if serialization fails or the backend rejects the write.
pub fn save_json<T: Serialize>(
    storage: &impl DurableStorage,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let raw = serde_json::to_string(value)?;
    storage.set_item(key, &raw)
}

/// Browser `window.localStorage`.
///
/// The handle is looked up on every call so the type stays `Send + Sync` and
/// can live inside a reactive signal. Outside the `hydrate` build every call
/// reports [`StorageError::Unavailable`].
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

#[cfg(feature = "hydrate")]
fn browser_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .ok_or(StorageError::Unavailable)?
        .local_storage()
        .map_err(|e| StorageError::Access(format!("{e:?}")))?
        .ok_or(StorageError::Unavailable)
}

impl DurableStorage for LocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "hydrate")]
        {
            browser_storage()?
                .get_item(key)
                .map_err(|e| StorageError::Access(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            browser_storage()?
                .set_item(key, value)
                .map_err(|e| StorageError::Access(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            browser_storage()?
                .remove_item(key)
                .map_err(|e| StorageError::Access(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }
}

#[derive(Debug, Default)]
struct MemoryInner {
    items: BTreeMap<String, String>,
    reject_writes: bool,
}

/// In-process storage map.
///
/// Clones share the same map, so a test can hold one handle while the store
/// owns another and tamper with persisted entries in between calls.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    inner: Arc<Mutex<MemoryInner>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make subsequent `set_item` calls fail, as a full or disabled
    /// `localStorage` would.
    pub fn reject_writes(&self, reject: bool) {
        if let Ok(mut inner) = self.inner.lock() {
            inner.reject_writes = reject;
        }
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> usize {
        self.inner.lock().map_or(0, |inner| inner.items.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn with_inner<R>(&self, f: impl FnOnce(&mut MemoryInner) -> R) -> Result<R, StorageError> {
        let mut inner = self
            .inner
            .lock()
            .map_err(|_| StorageError::Access("memory storage lock poisoned".to_owned()))?;
        Ok(f(&mut inner))
    }
}

impl DurableStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.with_inner(|inner| inner.items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.with_inner(|inner| {
            if inner.reject_writes {
                return Err(StorageError::Access("quota exceeded".to_owned()));
            }
            inner.items.insert(key.to_owned(), value.to_owned());
            Ok(())
        })?
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.with_inner(|inner| {
            inner.items.remove(key);
        })
    }
}
