//! Error types raised by persistence gateways.

use thiserror::Error;

/// Errors surfaced by gateway implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("gateway lock was poisoned")]
    LockPoisoned,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid storage key {0:?}")]
    InvalidKey(String),
}

pub type Result<T> = std::result::Result<T, RepositoryError>;
