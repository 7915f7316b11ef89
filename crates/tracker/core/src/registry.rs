//! Saved actor template registry.
//!
//! Plain CRUD over reusable actor stencils plus the activation gate. The
//! registry knows nothing about the roster beyond what callers pass in; the
//! co-rename of live unique actors is coordinated by [`crate::engine::Tracker`].

use crate::error::{Result, TrackerError};
use crate::state::{ActionRow, IdMinter, SavedActorTemplate, TemplateId, TemplateUpdate};

/// A template together with its registry-assigned key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegisteredTemplate {
    pub id: TemplateId,
    pub template: SavedActorTemplate,
}

/// Ordered collection of saved actor templates.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TemplateRegistry {
    entries: Vec<RegisteredTemplate>,
    ids: IdMinter,
}

impl TemplateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from previously persisted templates, preserving order.
    pub fn from_templates(templates: impl IntoIterator<Item = SavedActorTemplate>) -> Self {
        let mut registry = Self::new();
        for template in templates {
            registry.push(template);
        }
        registry
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[RegisteredTemplate] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &SavedActorTemplate> {
        self.entries.iter().map(|entry| &entry.template)
    }

    pub fn get(&self, index: usize) -> Option<&SavedActorTemplate> {
        self.entries.get(index).map(|entry| &entry.template)
    }

    pub fn index_of(&self, id: TemplateId) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id == id)
    }

    /// Snapshot of the templates in registry order, ready for persisting.
    pub fn to_templates(&self) -> Vec<SavedActorTemplate> {
        self.iter().cloned().collect()
    }

    /// Appends a blank template.
    pub fn add(&mut self) -> TemplateId {
        self.push(SavedActorTemplate::default())
    }

    pub fn push(&mut self, template: SavedActorTemplate) -> TemplateId {
        let id = TemplateId(self.ids.mint());
        self.entries.push(RegisteredTemplate { id, template });
        id
    }

    /// Applies `update` to the template at `index` and returns its prior value.
    pub fn update(&mut self, index: usize, update: TemplateUpdate) -> Result<SavedActorTemplate> {
        let len = self.entries.len();
        let entry = self
            .entries
            .get_mut(index)
            .ok_or(TrackerError::TemplateIndexOutOfRange { index, len })?;
        let previous = entry.template.clone();
        entry.template.apply(update);
        Ok(previous)
    }

    pub fn remove(&mut self, index: usize) -> Result<SavedActorTemplate> {
        if index >= self.entries.len() {
            return Err(TrackerError::TemplateIndexOutOfRange {
                index,
                len: self.entries.len(),
            });
        }
        Ok(self.entries.remove(index).template)
    }

    /// The unique template binding `name`, if any.
    pub fn binding_for(&self, name: &str) -> Option<&SavedActorTemplate> {
        self.iter().find(|template| template.binds(name))
    }

    /// Templates that may currently be offered for activation.
    ///
    /// A template qualifies when it is named and either non-unique or not
    /// already represented by a row.
    pub fn activatable<'a>(
        &'a self,
        rows: &'a [ActionRow],
    ) -> impl Iterator<Item = &'a SavedActorTemplate> + 'a {
        self.iter().filter(move |template| is_activatable(template, rows))
    }
}

pub(crate) fn is_activatable(template: &SavedActorTemplate, rows: &[ActionRow]) -> bool {
    match template.active_name() {
        Some(name) => !template.unique || !rows.iter().any(|row| row.actor_name == name),
        None => false,
    }
}
