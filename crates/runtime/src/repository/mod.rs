//! Persistence layer for data that outlives an encounter.
//!
//! Only the saved actor templates are persisted. Gateways store opaque string
//! values by key; [`TemplateStore`] owns the JSON encoding on top of them.

mod error;
mod file;
mod memory;
mod templates;
mod traits;

pub use error::{RepositoryError, Result};
pub use file::{FileGateway, validate_key};
pub use memory::InMemoryGateway;
pub use templates::{SAVED_ACTORS_KEY, TemplateStore, decode, encode};
pub use traits::PersistenceGateway;
