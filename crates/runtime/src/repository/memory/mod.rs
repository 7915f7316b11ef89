//! In-memory gateway implementation for tests and ephemeral sessions.

mod gateway;

pub use gateway::InMemoryGateway;
