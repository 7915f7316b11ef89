//! Actor roster operations.

use super::Tracker;
use crate::error::{Result, TrackerError};
use crate::state::{Actor, ActorId, ActorKind, active_name};

impl Tracker {
    /// Appends a blank player actor. Blank actors own no row until named.
    pub fn add_actor(&mut self) -> ActorId {
        let id = ActorId(self.actor_ids.mint());
        self.roster.push(Actor::new(id, "", ActorKind::Player));
        self.resync();
        id
    }

    /// Removes the first actor carrying `name`.
    pub fn remove_actor(&mut self, name: &str) -> Result<Actor> {
        let id = self.actor_id_by_name(name)?;
        self.remove_actor_by_id(id)
    }

    pub fn remove_actor_by_id(&mut self, id: ActorId) -> Result<Actor> {
        let actor = self
            .roster
            .remove(id)
            .ok_or(TrackerError::UnknownActorId { id })?;
        self.resync();
        Ok(actor)
    }

    /// Renames the first actor carrying `old_name`, keeping its row.
    pub fn rename_actor(&mut self, old_name: &str, new_name: &str) -> Result<()> {
        let id = self.actor_id_by_name(old_name)?;
        self.rename_actor_by_id(id, new_name)
    }

    /// Renames an actor, carrying its row (id and planning fields) over to
    /// the new name.
    ///
    /// Actors bound to a unique template are locked; they follow renames of
    /// the template instead. Renaming onto a unique template's name is refused
    /// while another actor already carries it.
    pub fn rename_actor_by_id(&mut self, id: ActorId, new_name: &str) -> Result<()> {
        let actor = self
            .roster
            .get(id)
            .ok_or(TrackerError::UnknownActorId { id })?;

        if let Some(current) = actor.active_name()
            && self.registry.binding_for(current).is_some()
        {
            return Err(TrackerError::NameLocked {
                name: current.to_string(),
            });
        }

        self.ensure_unique_slot(new_name, &[id])?;
        self.apply_rename(id, new_name);
        Ok(())
    }

    pub fn set_actor_type(&mut self, name: &str, kind: ActorKind) -> Result<()> {
        let id = self.actor_id_by_name(name)?;
        self.set_actor_type_by_id(id, kind)
    }

    pub fn set_actor_type_by_id(&mut self, id: ActorId, kind: ActorKind) -> Result<()> {
        let actor = self
            .roster
            .get_mut(id)
            .ok_or(TrackerError::UnknownActorId { id })?;
        actor.kind = kind;
        Ok(())
    }

    /// True when `name` belongs to a unique template, so its live actor may
    /// only be renamed through the template.
    pub fn is_name_locked(&self, name: &str) -> bool {
        self.registry.binding_for(name).is_some()
    }

    fn actor_id_by_name(&self, name: &str) -> Result<ActorId> {
        self.roster
            .find_by_name(name)
            .map(|actor| actor.id)
            .ok_or_else(|| TrackerError::UnknownActor {
                name: name.to_string(),
            })
    }

    /// Fails when giving `name` to the actors in `renamed` would put two
    /// actors under one unique template.
    pub(super) fn ensure_unique_slot(&self, name: &str, renamed: &[ActorId]) -> Result<()> {
        let Some(wanted) = active_name(name) else {
            return Ok(());
        };
        if self.registry.binding_for(wanted).is_none() {
            return Ok(());
        }
        self.ensure_single_carrier(wanted, renamed)
    }

    /// Fails when `name` would end up carried by more than one actor once the
    /// actors in `renamed` take it.
    pub(super) fn ensure_single_carrier(&self, name: &str, renamed: &[ActorId]) -> Result<()> {
        let Some(wanted) = active_name(name) else {
            return Ok(());
        };
        let others = self
            .roster
            .iter()
            .filter(|actor| !renamed.contains(&actor.id))
            .filter(|actor| actor.active_name() == Some(wanted))
            .count();

        if others + renamed.len() > 1 {
            return Err(TrackerError::UniqueConflict {
                name: wanted.to_string(),
            });
        }
        Ok(())
    }

    /// Renames without lock or uniqueness checks.
    ///
    /// The row for the old name is rewritten in place when this actor was its
    /// only carrier and no row exists for the new name yet. Every other case
    /// (blank names, duplicates on either side) is left to reconciliation.
    pub(super) fn apply_rename(&mut self, id: ActorId, new_name: &str) {
        let Some(actor) = self.roster.get_mut(id) else {
            return;
        };
        let old = actor.active_name().map(str::to_string);
        actor.name = new_name.to_string();

        if let (Some(old), Some(new)) = (old, active_name(new_name))
            && old != new
        {
            let old_still_carried = self.roster.count_named(&old) > 0;
            let new_has_row = self.rows.iter().any(|row| row.actor_name == new);

            if !old_still_carried
                && !new_has_row
                && let Some(row) = self.rows.iter_mut().find(|row| row.actor_name == old)
            {
                row.actor_name = new.to_string();
            }
        }

        self.resync();
    }
}
