//! Saved template operations that touch live encounter state.

use super::Tracker;
use crate::error::{Result, TrackerError};
use crate::registry::is_activatable;
use crate::state::{Actor, ActorId, SavedActorTemplate, TemplateId, TemplateUpdate, active_name};

impl Tracker {
    /// Appends a blank template and returns its key.
    pub fn add_template(&mut self) -> TemplateId {
        self.registry.add()
    }

    /// Applies a typed edit to the template at `index`.
    ///
    /// Renaming a unique template renames its live actor along with it, so
    /// the pair stays bound. Renaming to a blank name leaves the actor as it
    /// is. Non-unique templates never touch the roster.
    pub fn update_template(&mut self, index: usize, update: TemplateUpdate) -> Result<()> {
        let current = self
            .registry
            .get(index)
            .ok_or(TrackerError::TemplateIndexOutOfRange {
                index,
                len: self.registry.len(),
            })?;

        let mut co_renamed: Vec<ActorId> = Vec::new();
        match &update {
            TemplateUpdate::Name(new_name) if current.unique => {
                if let Some(old) = current.active_name()
                    && active_name(new_name).is_some_and(|new| new != old)
                {
                    co_renamed = self
                        .roster
                        .iter()
                        .filter(|actor| actor.active_name() == Some(old))
                        .map(|actor| actor.id)
                        .collect();
                }
                self.ensure_single_carrier(new_name, &co_renamed)?;
            }
            TemplateUpdate::Unique(true) if !current.unique => {
                if let Some(name) = current.active_name()
                    && self.roster.count_named(name) > 1
                {
                    return Err(TrackerError::UniqueConflict {
                        name: name.to_string(),
                    });
                }
            }
            _ => {}
        }

        let new_name = match &update {
            TemplateUpdate::Name(name) => Some(name.clone()),
            _ => None,
        };
        self.registry.update(index, update)?;

        if let Some(new_name) = new_name {
            for id in co_renamed {
                self.apply_rename(id, &new_name);
            }
        }
        Ok(())
    }

    /// Parses and applies an untyped `(field, value)` template edit.
    pub fn update_template_field(&mut self, index: usize, field: &str, value: &str) -> Result<()> {
        if index >= self.registry.len() {
            return Err(TrackerError::TemplateIndexOutOfRange {
                index,
                len: self.registry.len(),
            });
        }
        let update = TemplateUpdate::parse(field, value)?;
        self.update_template(index, update)
    }

    /// Removes the template at `index`. Live actors created from it stay.
    pub fn remove_template(&mut self, index: usize) -> Result<SavedActorTemplate> {
        self.registry.remove(index)
    }

    /// Templates that may currently be offered for activation.
    pub fn activatable_templates(&self) -> Vec<&SavedActorTemplate> {
        self.registry.activatable(&self.rows).collect()
    }

    /// Adds an actor with the template's name and kind to the roster.
    pub fn materialize_template(&mut self, template: &SavedActorTemplate) -> Result<ActorId> {
        let registered_ok = template
            .active_name()
            .and_then(|name| self.registry.binding_for(name))
            .is_none_or(|binding| is_activatable(binding, &self.rows));

        let name = match template.active_name() {
            Some(name) if registered_ok && is_activatable(template, &self.rows) => name.to_string(),
            _ => {
                return Err(TrackerError::TemplateUnavailable {
                    name: template.name.clone(),
                });
            }
        };

        let id = ActorId(self.actor_ids.mint());
        self.roster.push(Actor::new(id, name, template.kind));
        self.resync();
        Ok(id)
    }

    /// Activates the template stored at `index`.
    pub fn materialize_template_at(&mut self, index: usize) -> Result<ActorId> {
        let template = self
            .registry
            .get(index)
            .cloned()
            .ok_or(TrackerError::TemplateIndexOutOfRange {
                index,
                len: self.registry.len(),
            })?;
        self.materialize_template(&template)
    }
}
