/// Storage key for the persisted display order.
pub const ORDER_KEY: &str = "gallery-order";

/// Storage key for the persisted pin set.
pub const PINNED_KEY: &str = "pinned-cards";

/// The pair of keys a gallery persists under.
///
/// The default keys match what the live site writes to `localStorage`.
/// Site variants that share one origin use [`StorageKeys::namespaced`] so
/// each keeps its own order and pins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKeys {
    pub order: String,
    pub pinned: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            order: ORDER_KEY.to_string(),
            pinned: PINNED_KEY.to_string(),
        }
    }
}

impl StorageKeys {
    /// Keys prefixed with `"{namespace}:"`.
    ///
    /// Surrounding whitespace is ignored; an empty namespace gives the
    /// default keys, so existing visitors keep their saved state.
    pub fn namespaced(namespace: &str) -> Self {
        let namespace = namespace.trim();
        if namespace.is_empty() {
            return Self::default();
        }
        Self {
            order: format!("{namespace}:{ORDER_KEY}"),
            pinned: format!("{namespace}:{PINNED_KEY}"),
        }
    }

    /// Both keys, order first.
    pub fn all(&self) -> [&str; 2] {
        [&self.order, &self.pinned]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_keys() {
        let keys = StorageKeys::default();
        assert_eq!(keys.order, "gallery-order");
        assert_eq!(keys.pinned, "pinned-cards");
    }

    #[test]
    fn namespaced_keys() {
        let keys = StorageKeys::namespaced("ride-born-v2");
        assert_eq!(keys.order, "ride-born-v2:gallery-order");
        assert_eq!(keys.pinned, "ride-born-v2:pinned-cards");
        assert_ne!(keys, StorageKeys::default());
    }

    #[test]
    fn blank_namespace_is_default() {
        assert_eq!(StorageKeys::namespaced(""), StorageKeys::default());
        assert_eq!(StorageKeys::namespaced("  "), StorageKeys::default());
    }

    #[test]
    fn namespace_is_trimmed() {
        assert_eq!(
            StorageKeys::namespaced(" alt ").order,
            "alt:gallery-order"
        );
    }
}
