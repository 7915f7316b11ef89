//! Runtime configuration structures and loaders.
use std::env;
use std::path::PathBuf;

use crate::repository::{
    FileGateway, InMemoryGateway, PersistenceGateway, Result, SAVED_ACTORS_KEY, TemplateStore,
    validate_key,
};
use crate::session::Session;

/// Configuration required to open an encounter session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub enable_persistence: bool,
    pub data_dir: PathBuf,
    pub storage_key: String,
}

impl RuntimeConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            enable_persistence: true,
            data_dir: data_dir.into(),
            storage_key: SAVED_ACTORS_KEY.to_string(),
        }
    }

    /// In-memory configuration; nothing is written to disk.
    pub fn ephemeral() -> Self {
        Self {
            enable_persistence: false,
            ..Self::default()
        }
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `TRACKER_PERSISTENCE` - Persist saved actors to disk (default: true)
    /// - `TRACKER_DATA_DIR` - Directory for saved data (default: platform-specific)
    /// - `TRACKER_STORAGE_KEY` - Key for the saved actor list (default: `savedActors`)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(enable) = read_env::<bool>("TRACKER_PERSISTENCE") {
            config.enable_persistence = enable;
        } else if env::var("TRACKER_PERSISTENCE").is_ok() {
            // Also accept just setting the variable without value as "true"
            config.enable_persistence = true;
        }

        if let Ok(dir) = env::var("TRACKER_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }

        if let Ok(key) = env::var("TRACKER_STORAGE_KEY")
            && !key.trim().is_empty()
        {
            config.storage_key = key;
        }

        config
    }

    /// Builds the gateway this configuration selects.
    ///
    /// Fails with `InvalidKey` when the storage key is not a plain file stem,
    /// whichever gateway is selected.
    pub fn open_gateway(&self) -> Result<Box<dyn PersistenceGateway>> {
        validate_key(&self.storage_key)?;
        let gateway: Box<dyn PersistenceGateway> = if self.enable_persistence {
            tracing::info!("Persisting saved actors in {}", self.data_dir.display());
            Box::new(FileGateway::new(&self.data_dir)?)
        } else {
            tracing::info!("Persistence disabled; saved actors live in memory");
            Box::new(InMemoryGateway::new())
        };
        Ok(gateway)
    }

    /// Opens a session on the configured gateway and key.
    pub fn open_session(&self) -> Result<Session<Box<dyn PersistenceGateway>>> {
        let gateway = self.open_gateway()?;
        Ok(Session::with_store(TemplateStore::with_key(
            gateway,
            self.storage_key.clone(),
        )))
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self::new(default_data_dir())
    }
}

/// Get the platform-specific data directory for saved actors.
///
/// Follows platform conventions:
/// - macOS: `~/Library/Application Support/turn-tracker`
/// - Linux: `~/.local/share/turn-tracker` (or `$XDG_DATA_HOME/turn-tracker`)
/// - Windows: `%APPDATA%\turn-tracker`
/// - Fallback: `./save_data`
pub fn default_data_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "turn-tracker")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("./save_data"))
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
