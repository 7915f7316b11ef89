use std::fs;
use std::path::{Path, PathBuf};

use crate::repository::{PersistenceGateway, RepositoryError, Result};

/// File-based implementation of PersistenceGateway.
///
/// # File Format
///
/// Each key is stored as `{key}.json` under the base directory, holding the
/// value verbatim. Writes go to a temp file first and are renamed into place.
pub struct FileGateway {
    base_dir: PathBuf,
}

impl FileGateway {
    /// Create a new file-based gateway, creating `base_dir` if needed.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir)?;
        Ok(Self { base_dir })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to a value file.
    fn value_path(&self, key: &str) -> Result<PathBuf> {
        validate_key(key)?;
        Ok(self.base_dir.join(format!("{key}.json")))
    }
}

/// Keys must be plain file stems: non-empty, ASCII alphanumerics, `_` or `-`.
pub fn validate_key(key: &str) -> Result<()> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(RepositoryError::InvalidKey(key.to_string()))
    }
}

impl PersistenceGateway for FileGateway {
    fn load(&self, key: &str) -> Result<Option<String>> {
        let path = self.value_path(key)?;

        if !path.exists() {
            return Ok(None);
        }

        let value = fs::read_to_string(&path)?;
        tracing::debug!("Loaded {} from {}", key, path.display());

        Ok(Some(value))
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        let path = self.value_path(key)?;
        let temp_path = path.with_extension("json.tmp");

        fs::write(&temp_path, value)?;
        fs::rename(&temp_path, &path)?;

        tracing::debug!("Saved {} to {}", key, path.display());

        Ok(())
    }

    fn clear(&self, key: &str) -> Result<()> {
        let path = self.value_path(key)?;

        if path.exists() {
            fs::remove_file(&path)?;
            tracing::debug!("Cleared {}", key);
        }

        Ok(())
    }

    fn exists(&self, key: &str) -> bool {
        self.value_path(key).is_ok_and(|path| path.exists())
    }
}
