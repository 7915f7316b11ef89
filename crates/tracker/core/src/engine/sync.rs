//! Roster to row reconciliation.

use crate::state::{ActionRow, Roster, RowId};

/// Brings `rows` in line with the active names of `roster`.
///
/// Rows whose actor is still active are kept untouched and in their current
/// relative order (so a previous sort survives). Rows for names that are no
/// longer active are dropped. Every active name without a row gets a fresh
/// default row, appended in roster order with an id drawn from `mint`.
///
/// Duplicate active names collapse to a single row. Should `rows` somehow
/// contain two rows for one name, only the first is kept.
pub fn reconcile(
    roster: &Roster,
    rows: Vec<ActionRow>,
    mut mint: impl FnMut() -> RowId,
) -> Vec<ActionRow> {
    let active = roster.active_names();

    let mut kept: Vec<ActionRow> = Vec::with_capacity(active.len());
    for row in rows {
        let is_active = active.contains(&row.actor_name.as_str());
        let is_duplicate = kept.iter().any(|k| k.actor_name == row.actor_name);
        if is_active && !is_duplicate {
            kept.push(row);
        }
    }

    for name in active {
        if !kept.iter().any(|row| row.actor_name == name) {
            kept.push(ActionRow::new(mint(), name));
        }
    }

    kept
}
