//! Persistence and session plumbing around `tracker-core`.
//!
//! The runtime couples the pure encounter [`Tracker`](tracker_core::Tracker)
//! with a [`PersistenceGateway`] so saved actor templates survive restarts.
//! Roster and row state are never persisted.

pub mod config;
pub mod repository;
pub mod session;

pub use config::{RuntimeConfig, default_data_dir};
pub use repository::{
    FileGateway, InMemoryGateway, PersistenceGateway, RepositoryError, SAVED_ACTORS_KEY,
    TemplateStore,
};
pub use session::Session;
