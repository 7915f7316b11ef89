//! Gateway contract for saving and loading persisted values.

use std::sync::Arc;

use super::Result;

/// Key/value persistence used by the saved template registry.
///
/// Values are opaque strings; callers own the encoding. Implementations must
/// apply writes in call order so the last save for a key wins.
pub trait PersistenceGateway: Send + Sync {
    /// Load the value stored under `key`, if any.
    fn load(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn save(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`. Clearing an absent key is not an error.
    fn clear(&self, key: &str) -> Result<()>;

    /// Check if a value exists under `key`.
    fn exists(&self, key: &str) -> bool {
        matches!(self.load(key), Ok(Some(_)))
    }
}

impl<G: PersistenceGateway + ?Sized> PersistenceGateway for Box<G> {
    fn load(&self, key: &str) -> Result<Option<String>> {
        (**self).load(key)
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        (**self).save(key, value)
    }

    fn clear(&self, key: &str) -> Result<()> {
        (**self).clear(key)
    }

    fn exists(&self, key: &str) -> bool {
        (**self).exists(key)
    }
}

impl<G: PersistenceGateway + ?Sized> PersistenceGateway for Arc<G> {
    fn load(&self, key: &str) -> Result<Option<String>> {
        (**self).load(key)
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        (**self).save(key, value)
    }

    fn clear(&self, key: &str) -> Result<()> {
        (**self).clear(key)
    }

    fn exists(&self, key: &str) -> bool {
        (**self).exists(key)
    }
}
