use std::collections::HashMap;
use std::sync::RwLock;

use crate::repository::{PersistenceGateway, RepositoryError, Result};

/// In-memory implementation of PersistenceGateway.
///
/// Values live only as long as the gateway; nothing touches the disk.
pub struct InMemoryGateway {
    values: RwLock<HashMap<String, String>>,
}

impl InMemoryGateway {
    /// Create a new empty in-memory gateway.
    pub fn new() -> Self {
        Self {
            values: RwLock::new(HashMap::new()),
        }
    }

    /// Create with a single pre-seeded value.
    pub fn with_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut values = HashMap::new();
        values.insert(key.into(), value.into());
        Self {
            values: RwLock::new(values),
        }
    }
}

impl Default for InMemoryGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl PersistenceGateway for InMemoryGateway {
    fn load(&self, key: &str) -> Result<Option<String>> {
        let values = self
            .values
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(values.get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        let mut values = self
            .values
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn clear(&self, key: &str) -> Result<()> {
        let mut values = self
            .values
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        values.remove(key);
        Ok(())
    }

    fn exists(&self, key: &str) -> bool {
        self.values
            .read()
            .map(|values| values.contains_key(key))
            .unwrap_or(false)
    }
}
