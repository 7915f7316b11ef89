//! File-based gateway implementation.

mod gateway;

pub use gateway::{FileGateway, validate_key};
