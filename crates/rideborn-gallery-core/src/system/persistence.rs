use std::collections::HashMap;

use crate::error::CoreError;

/// Persistence platform trait — key-value string storage.
///
/// The platform interface stores raw strings, the way browser `localStorage`
/// does. Encoding gallery state as JSON is the store's job, not the
/// platform's.
///
/// Implementations: [`MemoryStorage`], [`super::FileStorage`], and
/// `LocalStorage` on wasm32 with the `web` feature.
pub trait Persistence {
    /// Read a string value by key. Returns None if not found.
    ///
    /// Backends that fail to read report the key as absent.
    fn load(&self, key: &str) -> Option<String>;

    /// Write a string value under key, replacing any previous value.
    fn save(&mut self, key: &str, data: &str) -> Result<(), CoreError>;

    /// Remove a key from storage. Removing an absent key is not an error.
    fn remove(&mut self, key: &str) -> Result<(), CoreError>;
}

impl<P: Persistence + ?Sized> Persistence for &mut P {
    fn load(&self, key: &str) -> Option<String> {
        (**self).load(key)
    }

    fn save(&mut self, key: &str, data: &str) -> Result<(), CoreError> {
        (**self).save(key, data)
    }

    fn remove(&mut self, key: &str) -> Result<(), CoreError> {
        (**self).remove(key)
    }
}

/// In-process storage. Nothing survives the value being dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a storage with raw entries, e.g. to simulate a returning visitor.
    pub fn with_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }
}

impl Persistence for MemoryStorage {
    fn load(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn save(&mut self, key: &str, data: &str) -> Result<(), CoreError> {
        self.entries.insert(key.to_string(), data.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), CoreError> {
        self.entries.remove(key);
        Ok(())
    }
}
