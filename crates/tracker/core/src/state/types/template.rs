use std::str::FromStr;

use super::{ActorKind, Hostility, active_name};
use crate::error::TrackerError;

/// Reusable stencil for a recurring actor.
///
/// The serialized form uses the persisted field names: `actor` for the display
/// name and `type` for the actor kind.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SavedActorTemplate {
    #[cfg_attr(feature = "serde", serde(rename = "actor"))]
    pub name: String,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: ActorKind,
    #[cfg_attr(feature = "serde", serde(default))]
    pub hostility: Hostility,
    #[cfg_attr(feature = "serde", serde(default))]
    pub unique: bool,
}

impl SavedActorTemplate {
    pub fn new(name: impl Into<String>, kind: ActorKind) -> Self {
        Self {
            name: name.into(),
            kind,
            hostility: Hostility::Neutral,
            unique: false,
        }
    }

    pub fn with_hostility(mut self, hostility: Hostility) -> Self {
        self.hostility = hostility;
        self
    }

    pub fn with_unique(mut self, unique: bool) -> Self {
        self.unique = unique;
        self
    }

    /// Trimmed display name, or `None` for an unnamed template.
    pub fn active_name(&self) -> Option<&str> {
        active_name(&self.name)
    }

    /// True when this template binds `name` to at most one live actor.
    pub fn binds(&self, name: &str) -> bool {
        self.unique && self.active_name().is_some() && self.active_name() == active_name(name)
    }

    pub fn apply(&mut self, update: TemplateUpdate) {
        match update {
            TemplateUpdate::Name(name) => self.name = name,
            TemplateUpdate::Kind(kind) => self.kind = kind,
            TemplateUpdate::Hostility(hostility) => self.hostility = hostility,
            TemplateUpdate::Unique(unique) => self.unique = unique,
        }
    }
}

impl Default for SavedActorTemplate {
    /// A freshly added, still unnamed NPC stencil.
    fn default() -> Self {
        Self::new("", ActorKind::Npc)
    }
}

/// Editable template fields, named as they are persisted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
pub enum TemplateField {
    #[strum(serialize = "actor")]
    Name,
    #[strum(serialize = "type")]
    Kind,
    #[strum(serialize = "hostility")]
    Hostility,
    #[strum(serialize = "unique")]
    Unique,
}

impl FromStr for TemplateField {
    type Err = TrackerError;

    fn from_str(field: &str) -> Result<Self, Self::Err> {
        match field.trim().to_ascii_lowercase().as_str() {
            "actor" | "name" => Ok(Self::Name),
            "type" | "kind" => Ok(Self::Kind),
            "hostility" => Ok(Self::Hostility),
            "unique" => Ok(Self::Unique),
            _ => Err(TrackerError::UnknownField {
                field: field.to_string(),
            }),
        }
    }
}

/// A typed edit to a single template field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TemplateUpdate {
    Name(String),
    Kind(ActorKind),
    Hostility(Hostility),
    Unique(bool),
}

impl TemplateUpdate {
    pub fn field(&self) -> TemplateField {
        match self {
            TemplateUpdate::Name(_) => TemplateField::Name,
            TemplateUpdate::Kind(_) => TemplateField::Kind,
            TemplateUpdate::Hostility(_) => TemplateField::Hostility,
            TemplateUpdate::Unique(_) => TemplateField::Unique,
        }
    }

    /// Parses the untyped `(field, value)` form used by presentation layers.
    pub fn parse(field: &str, value: &str) -> Result<Self, TrackerError> {
        let field: TemplateField = field.parse()?;
        let invalid = || TrackerError::InvalidValue {
            field: field.to_string(),
            value: value.to_string(),
        };

        Ok(match field {
            TemplateField::Name => TemplateUpdate::Name(value.to_string()),
            TemplateField::Kind => TemplateUpdate::Kind(value.parse().map_err(|_| invalid())?),
            TemplateField::Hostility => {
                TemplateUpdate::Hostility(value.parse().map_err(|_| invalid())?)
            }
            TemplateField::Unique => {
                TemplateUpdate::Unique(value.trim().parse().map_err(|_| invalid())?)
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_template_is_unnamed_neutral_npc() {
        let template = SavedActorTemplate::default();
        assert_eq!(template.name, "");
        assert_eq!(template.kind, ActorKind::Npc);
        assert_eq!(template.hostility, Hostility::Neutral);
        assert!(!template.unique);
        assert!(template.active_name().is_none());
    }

    #[test]
    fn binds_only_unique_named_templates() {
        let boss = SavedActorTemplate::new("Boss", ActorKind::Npc).with_unique(true);
        assert!(boss.binds(" Boss "));
        assert!(!boss.binds("Minion"));

        let goblin = SavedActorTemplate::new("Goblin", ActorKind::Npc);
        assert!(!goblin.binds("Goblin"));

        let unnamed = SavedActorTemplate::default().with_unique(true);
        assert!(!unnamed.binds(""));
    }

    #[test]
    fn parse_uses_persisted_field_names() {
        assert_eq!(
            TemplateUpdate::parse("actor", "Boss").unwrap(),
            TemplateUpdate::Name("Boss".into())
        );
        assert_eq!(
            TemplateUpdate::parse("type", "NPC").unwrap(),
            TemplateUpdate::Kind(ActorKind::Npc)
        );
        assert_eq!(
            TemplateUpdate::parse("unique", "true").unwrap(),
            TemplateUpdate::Unique(true)
        );
        assert!(matches!(
            TemplateUpdate::parse("hostility", "grumpy"),
            Err(TrackerError::InvalidValue { .. })
        ));
    }
}
