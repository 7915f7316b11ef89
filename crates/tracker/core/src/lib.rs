//! Deterministic turn-tracking logic for tabletop combat encounters.
//!
//! `tracker-core` defines the canonical rules (roster, derived action rows,
//! turn ordering, saved actor templates) and exposes pure, I/O-free APIs that
//! persistence and presentation layers build on. All state mutation flows
//! through [`engine::Tracker`]; supporting crates depend on the types
//! re-exported here.
pub mod engine;
pub mod error;
pub mod registry;
pub mod state;

pub use engine::{Tracker, TurnKey, reconcile, sort_rows, sorted, turn_order};
pub use error::{ErrorSeverity, Result, TrackerError};
pub use registry::{RegisteredTemplate, TemplateRegistry};
pub use state::{
    ActionRow, Actor, ActorId, ActorKind, Hostility, Initiative, InitiativeOutOfRange, MoveState,
    Roster, RowField, RowId, RowUpdate, SavedActorTemplate, Speed, TemplateField, TemplateId,
    TemplateUpdate, active_name,
};
