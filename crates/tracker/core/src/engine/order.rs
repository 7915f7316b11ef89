//! Turn-order comparator.
//!
//! Rows are ordered by, most significant first and all descending:
//! speed (fast, normal, slow), move state (standstill before moving),
//! initiative, then actor kind (players before NPCs). A row whose actor cannot
//! be found in the roster sorts after both kinds. Remaining ties keep their
//! previous relative order.

use std::cmp::{Ordering, Reverse};

use crate::state::{ActionRow, Roster};

/// Sort key for one row; larger keys act earlier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct TurnKey {
    speed: u8,
    move_state: u8,
    initiative: u8,
    kind: u8,
}

impl TurnKey {
    /// Kind rank for rows whose actor is missing from the roster.
    const UNRESOLVED_KIND: u8 = 0;

    pub fn of(row: &ActionRow, roster: &Roster) -> Self {
        let kind = roster
            .find_by_name(&row.actor_name)
            .map(|actor| actor.kind.rank())
            .unwrap_or(Self::UNRESOLVED_KIND);

        Self {
            speed: row.speed.rank(),
            move_state: row.move_state.rank(),
            initiative: row.initiative.value(),
            kind,
        }
    }
}

/// Compares two rows by turn order. `Less` means `a` acts first.
pub fn turn_order(a: &ActionRow, b: &ActionRow, roster: &Roster) -> Ordering {
    Reverse(TurnKey::of(a, roster)).cmp(&Reverse(TurnKey::of(b, roster)))
}

/// Reorders `rows` in place. Row contents are never modified.
pub fn sort_rows(rows: &mut [ActionRow], roster: &Roster) {
    rows.sort_by_cached_key(|row| Reverse(TurnKey::of(row, roster)));
}

/// Returns a sorted copy of `rows`.
pub fn sorted(rows: &[ActionRow], roster: &Roster) -> Vec<ActionRow> {
    let mut out = rows.to_vec();
    sort_rows(&mut out, roster);
    out
}
