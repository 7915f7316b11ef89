//! JSON codec for the saved actor template list.

use tracker_core::SavedActorTemplate;

use super::{PersistenceGateway, Result};

/// Key under which saved actor templates are persisted.
pub const SAVED_ACTORS_KEY: &str = "savedActors";

/// Reads and writes the template list through a [`PersistenceGateway`].
///
/// The list is stored as a JSON array of
/// `{ "actor", "type", "hostility", "unique" }` records. An empty list is
/// never written; the key is cleared instead.
pub struct TemplateStore<G> {
    gateway: G,
    key: String,
}

impl<G: PersistenceGateway> TemplateStore<G> {
    pub fn new(gateway: G) -> Self {
        Self::with_key(gateway, SAVED_ACTORS_KEY)
    }

    pub fn with_key(gateway: G, key: impl Into<String>) -> Self {
        Self {
            gateway,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Loads the persisted templates.
    ///
    /// Missing, unreadable, or malformed data yields an empty list; the cause
    /// is logged and never propagated.
    pub fn load(&self) -> Vec<SavedActorTemplate> {
        let raw = match self.gateway.load(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                tracing::debug!("No saved actors under {}", self.key);
                return Vec::new();
            }
            Err(e) => {
                tracing::warn!("Failed to read saved actors from {}: {}", self.key, e);
                return Vec::new();
            }
        };

        match decode(&raw) {
            Ok(templates) => templates,
            Err(e) => {
                tracing::warn!("Ignoring malformed saved actors under {}: {}", self.key, e);
                Vec::new()
            }
        }
    }

    /// Persists `templates`, or clears the key when the list is empty.
    pub fn save(&self, templates: &[SavedActorTemplate]) -> Result<()> {
        if templates.is_empty() {
            return self.gateway.clear(&self.key);
        }
        let encoded = encode(templates)?;
        self.gateway.save(&self.key, &encoded)
    }
}

pub fn encode(templates: &[SavedActorTemplate]) -> Result<String> {
    Ok(serde_json::to_string(templates)?)
}

pub fn decode(raw: &str) -> Result<Vec<SavedActorTemplate>> {
    Ok(serde_json::from_str(raw)?)
}
