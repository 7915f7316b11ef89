//! Error infrastructure for tracker-core.
//!
//! Every public operation either runs to completion or returns a
//! [`TrackerError`] without touching state. Soft failures described by the
//! tracker's policies (duplicate names collapsing, orphaned rows during sort)
//! are not errors and never surface here.

use crate::state::{ActorId, RowId};

/// Severity level of an error, used for categorization by callers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorSeverity {
    /// Invalid input; the caller should change the request before retrying.
    Validation,

    /// The request conflicts with an invariant of the live encounter.
    ///
    /// Examples: a second instance of a unique template, renaming a locked actor.
    Conflict,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Conflict => "conflict",
        }
    }
}

/// Errors surfaced by [`crate::engine::Tracker`] operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TrackerError {
    #[error("no actor named {name:?} in the roster")]
    UnknownActor { name: String },

    #[error("{id} is not in the roster")]
    UnknownActorId { id: ActorId },

    #[error("{id} does not exist")]
    UnknownRow { id: RowId },

    #[error("template index {index} is out of range for {len} templates")]
    TemplateIndexOutOfRange { index: usize, len: usize },

    #[error("unknown field {field:?}")]
    UnknownField { field: String },

    #[error("{value:?} is not a valid value for {field}")]
    InvalidValue { field: String, value: String },

    #[error("actor {name:?} is bound to a unique template; rename the template instead")]
    NameLocked { name: String },

    #[error("a unique template already has a live actor named {name:?}")]
    UniqueConflict { name: String },

    #[error("template {name:?} cannot be activated right now")]
    TemplateUnavailable { name: String },
}

impl TrackerError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NameLocked { .. }
            | Self::UniqueConflict { .. }
            | Self::TemplateUnavailable { .. } => ErrorSeverity::Conflict,
            _ => ErrorSeverity::Validation,
        }
    }

    /// Stable identifier for the error variant.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownActor { .. } => "unknown_actor",
            Self::UnknownActorId { .. } => "unknown_actor_id",
            Self::UnknownRow { .. } => "unknown_row",
            Self::TemplateIndexOutOfRange { .. } => "template_index_out_of_range",
            Self::UnknownField { .. } => "unknown_field",
            Self::InvalidValue { .. } => "invalid_value",
            Self::NameLocked { .. } => "name_locked",
            Self::UniqueConflict { .. } => "unique_conflict",
            Self::TemplateUnavailable { .. } => "template_unavailable",
        }
    }
}

pub type Result<T> = std::result::Result<T, TrackerError>;
