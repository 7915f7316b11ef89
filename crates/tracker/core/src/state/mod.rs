//! Encounter state representation.
//!
//! This module owns the roster, the derived action rows, and the saved actor
//! templates. Callers read this state freely but mutate it exclusively through
//! [`crate::engine::Tracker`].
pub mod types;

pub use types::{
    ActionRow, Actor, ActorId, ActorKind, Hostility, Initiative, InitiativeOutOfRange, MoveState,
    Roster, RowField, RowId, RowUpdate, SavedActorTemplate, Speed, TemplateField, TemplateId,
    TemplateUpdate, active_name,
};
pub(crate) use types::IdMinter;
