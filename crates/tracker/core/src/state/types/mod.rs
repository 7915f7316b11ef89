mod common;
mod roster;
mod row;
mod template;

pub(crate) use common::IdMinter;
pub use common::{
    ActorId, ActorKind, Hostility, Initiative, InitiativeOutOfRange, MoveState, RowId, Speed,
    TemplateId,
};
pub use roster::{Actor, Roster, active_name};
pub use row::{ActionRow, RowField, RowUpdate};
pub use template::{SavedActorTemplate, TemplateField, TemplateUpdate};
