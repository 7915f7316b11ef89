//! Encounter session: a [`Tracker`] whose template registry is persisted.
//!
//! Templates are loaded once when the session opens. Every successful
//! template mutation saves the full list synchronously before returning, so
//! the backing store sees saves in mutation order. Save failures are logged
//! and swallowed; the in-memory state stays authoritative.

use tracker_core::{
    ActionRow, Actor, ActorId, ActorKind, Result, RowId, RowUpdate, SavedActorTemplate,
    TemplateId, TemplateRegistry, TemplateUpdate, Tracker,
};

use crate::repository::{PersistenceGateway, TemplateStore};

pub struct Session<G> {
    tracker: Tracker,
    store: TemplateStore<G>,
}

impl<G: PersistenceGateway> Session<G> {
    /// Opens a session on the default `savedActors` key.
    pub fn open(gateway: G) -> Self {
        Self::with_store(TemplateStore::new(gateway))
    }

    pub fn with_store(store: TemplateStore<G>) -> Self {
        let registry = TemplateRegistry::from_templates(store.load());
        tracing::info!(
            "Session opened with {} saved actors (key={})",
            registry.len(),
            store.key()
        );
        Self {
            tracker: Tracker::with_registry(registry),
            store,
        }
    }

    /// Read-only view of the encounter state.
    pub fn tracker(&self) -> &Tracker {
        &self.tracker
    }

    pub fn store(&self) -> &TemplateStore<G> {
        &self.store
    }

    pub fn rows(&self) -> &[ActionRow] {
        self.tracker.rows()
    }

    // ===== roster and rows =====

    pub fn add_actor(&mut self) -> ActorId {
        self.tracker.add_actor()
    }

    pub fn remove_actor(&mut self, name: &str) -> Result<Actor> {
        self.tracker.remove_actor(name)
    }

    pub fn remove_actor_by_id(&mut self, id: ActorId) -> Result<Actor> {
        self.tracker.remove_actor_by_id(id)
    }

    pub fn rename_actor(&mut self, old_name: &str, new_name: &str) -> Result<()> {
        self.tracker.rename_actor(old_name, new_name)
    }

    pub fn rename_actor_by_id(&mut self, id: ActorId, new_name: &str) -> Result<()> {
        self.tracker.rename_actor_by_id(id, new_name)
    }

    pub fn set_actor_type(&mut self, name: &str, kind: ActorKind) -> Result<()> {
        self.tracker.set_actor_type(name, kind)
    }

    pub fn set_actor_type_by_id(&mut self, id: ActorId, kind: ActorKind) -> Result<()> {
        self.tracker.set_actor_type_by_id(id, kind)
    }

    pub fn update_row(&mut self, id: RowId, update: RowUpdate) -> Result<()> {
        self.tracker.update_row(id, update)
    }

    pub fn update_row_field(&mut self, id: RowId, field: &str, value: &str) -> Result<()> {
        self.tracker.update_row_field(id, field, value)
    }

    pub fn sort_rows(&mut self) {
        self.tracker.sort_rows();
    }

    // ===== templates =====

    pub fn add_template(&mut self) -> TemplateId {
        let id = self.tracker.add_template();
        self.persist();
        id
    }

    pub fn update_template(&mut self, index: usize, update: TemplateUpdate) -> Result<()> {
        self.tracker.update_template(index, update)?;
        self.persist();
        Ok(())
    }

    pub fn update_template_field(&mut self, index: usize, field: &str, value: &str) -> Result<()> {
        self.tracker.update_template_field(index, field, value)?;
        self.persist();
        Ok(())
    }

    pub fn remove_template(&mut self, index: usize) -> Result<SavedActorTemplate> {
        let removed = self.tracker.remove_template(index)?;
        self.persist();
        Ok(removed)
    }

    pub fn activatable_templates(&self) -> Vec<&SavedActorTemplate> {
        self.tracker.activatable_templates()
    }

    pub fn materialize_template(&mut self, template: &SavedActorTemplate) -> Result<ActorId> {
        self.tracker.materialize_template(template)
    }

    pub fn materialize_template_at(&mut self, index: usize) -> Result<ActorId> {
        self.tracker.materialize_template_at(index)
    }

    fn persist(&self) {
        let templates = self.tracker.templates().to_templates();
        match self.store.save(&templates) {
            Ok(()) => tracing::debug!("Persisted {} saved actors", templates.len()),
            Err(e) => tracing::warn!("Failed to persist saved actors: {}", e),
        }
    }
}
