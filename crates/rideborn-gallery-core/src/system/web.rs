use tracing::warn;

use super::Persistence;
use crate::error::CoreError;

/// Browser `window.localStorage`.
pub struct LocalStorage {
    storage: web_sys::Storage,
}

impl LocalStorage {
    /// Returns `None` outside a window context or when the browser denies
    /// storage access (e.g. some private browsing modes).
    pub fn open() -> Option<Self> {
        let window = web_sys::window()?;
        match window.local_storage() {
            Ok(Some(storage)) => Some(Self { storage }),
            Ok(None) => None,
            Err(e) => {
                warn!("localStorage unavailable: {e:?}");
                None
            }
        }
    }
}

impl Persistence for LocalStorage {
    fn load(&self, key: &str) -> Option<String> {
        match self.storage.get_item(key) {
            Ok(value) => value,
            Err(e) => {
                warn!(key, "localStorage read failed: {e:?}");
                None
            }
        }
    }

    fn save(&mut self, key: &str, data: &str) -> Result<(), CoreError> {
        self.storage
            .set_item(key, data)
            .map_err(|e| CoreError::Storage {
                key: key.to_string(),
                message: format!("{e:?}"),
            })
    }

    fn remove(&mut self, key: &str) -> Result<(), CoreError> {
        self.storage
            .remove_item(key)
            .map_err(|e| CoreError::Storage {
                key: key.to_string(),
                message: format!("{e:?}"),
            })
    }
}
