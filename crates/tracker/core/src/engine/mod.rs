//! Encounter reducer.
//!
//! The [`Tracker`] owns the roster, the derived action rows, and the template
//! registry. Every public operation runs to completion synchronously and
//! leaves the rows reconciled with the roster; a failed operation leaves all
//! state untouched.

mod order;
mod roster;
mod sync;
mod templates;

pub use order::{TurnKey, sort_rows, sorted, turn_order};
pub use sync::reconcile;

use crate::error::{Result, TrackerError};
use crate::registry::TemplateRegistry;
use crate::state::{ActionRow, ActorKind, IdMinter, Roster, RowId, RowUpdate};

/// Single-owner encounter state and the operations that mutate it.
#[derive(Clone, Debug, Default)]
pub struct Tracker {
    roster: Roster,
    rows: Vec<ActionRow>,
    registry: TemplateRegistry,
    actor_ids: IdMinter,
    row_ids: IdMinter,
}

impl Tracker {
    /// Creates an empty encounter with an empty template registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty encounter around previously loaded templates.
    pub fn with_registry(registry: TemplateRegistry) -> Self {
        Self {
            registry,
            ..Self::default()
        }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Action rows in their current display order.
    pub fn rows(&self) -> &[ActionRow] {
        &self.rows
    }

    pub fn row(&self, id: RowId) -> Option<&ActionRow> {
        self.rows.iter().find(|row| row.id == id)
    }

    pub fn templates(&self) -> &TemplateRegistry {
        &self.registry
    }

    /// Kind of the actor behind a row, or `None` for an orphaned row.
    pub fn actor_kind_of(&self, id: RowId) -> Option<ActorKind> {
        let row = self.row(id)?;
        self.roster.find_by_name(&row.actor_name).map(|actor| actor.kind)
    }

    /// Applies a typed edit to one row.
    pub fn update_row(&mut self, id: RowId, update: RowUpdate) -> Result<()> {
        let row = self
            .rows
            .iter_mut()
            .find(|row| row.id == id)
            .ok_or(TrackerError::UnknownRow { id })?;
        row.apply(update);
        Ok(())
    }

    /// Parses and applies an untyped `(field, value)` edit to one row.
    pub fn update_row_field(&mut self, id: RowId, field: &str, value: &str) -> Result<()> {
        if self.row(id).is_none() {
            return Err(TrackerError::UnknownRow { id });
        }
        let update = RowUpdate::parse(field, value)?;
        self.update_row(id, update)
    }

    /// Reorders the rows into turn order. Only ever runs on request.
    pub fn sort_rows(&mut self) {
        sort_rows(&mut self.rows, &self.roster);
    }

    /// Reconciles the rows with the current roster.
    fn resync(&mut self) {
        let Self {
            roster,
            rows,
            row_ids,
            ..
        } = self;
        let current = std::mem::take(rows);
        *rows = reconcile(roster, current, || RowId(row_ids.mint()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Initiative, Speed};

    #[test]
    fn update_row_rejects_unknown_ids() {
        let mut tracker = Tracker::new();
        assert_eq!(
            tracker.update_row(RowId(99), RowUpdate::Speed(Speed::Fast)),
            Err(TrackerError::UnknownRow { id: RowId(99) })
        );
    }

    #[test]
    fn update_row_field_parses_presentation_values() {
        let mut tracker = Tracker::new();
        let actor = tracker.add_actor();
        tracker.rename_actor_by_id(actor, "Alice").unwrap();
        let row = tracker.rows()[0].id;

        tracker.update_row_field(row, "initiative", "3").unwrap();
        tracker.update_row_field(row, "speed", "slow").unwrap();

        let row = tracker.row(row).unwrap();
        assert_eq!(row.initiative, Initiative::MAX);
        assert_eq!(row.speed, Speed::Slow);
    }

    #[test]
    fn sorting_is_not_reapplied_after_edits() {
        let mut tracker = Tracker::new();
        for name in ["Alice", "Bob"] {
            let id = tracker.add_actor();
            tracker.rename_actor_by_id(id, name).unwrap();
        }
        let bob = tracker.rows()[1].id;
        tracker.update_row(bob, RowUpdate::Speed(Speed::Fast)).unwrap();
        tracker.sort_rows();
        assert_eq!(tracker.rows()[0].actor_name, "Bob");

        tracker.update_row(bob, RowUpdate::Speed(Speed::Slow)).unwrap();
        assert_eq!(tracker.rows()[0].actor_name, "Bob");
    }
}
