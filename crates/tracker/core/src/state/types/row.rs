use std::str::FromStr;

use super::{Initiative, MoveState, RowId, Speed};
use crate::error::TrackerError;

/// One actor's planned action for the round plus its ordering attributes.
///
/// Rows are created and destroyed only by reconciliation; callers edit the
/// planning fields through [`RowUpdate`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionRow {
    pub id: RowId,
    pub actor_name: String,
    pub action: String,
    pub target: String,
    pub speed: Speed,
    pub move_state: MoveState,
    pub initiative: Initiative,
}

impl ActionRow {
    /// Creates a row with the round defaults for `actor_name`.
    pub fn new(id: RowId, actor_name: impl Into<String>) -> Self {
        Self {
            id,
            actor_name: actor_name.into(),
            action: String::new(),
            target: String::new(),
            speed: Speed::Normal,
            move_state: MoveState::Standstill,
            initiative: Initiative::MIN,
        }
    }

    pub fn with_speed(mut self, speed: Speed) -> Self {
        self.speed = speed;
        self
    }

    pub fn with_move_state(mut self, move_state: MoveState) -> Self {
        self.move_state = move_state;
        self
    }

    pub fn with_initiative(mut self, initiative: Initiative) -> Self {
        self.initiative = initiative;
        self
    }

    pub fn apply(&mut self, update: RowUpdate) {
        match update {
            RowUpdate::Action(action) => self.action = action,
            RowUpdate::Target(target) => self.target = target,
            RowUpdate::Speed(speed) => self.speed = speed,
            RowUpdate::MoveState(move_state) => self.move_state = move_state,
            RowUpdate::Initiative(initiative) => self.initiative = initiative,
        }
    }
}

/// Caller-editable row fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "camelCase")]
pub enum RowField {
    Action,
    Target,
    Speed,
    MoveState,
    Initiative,
}

impl FromStr for RowField {
    type Err = TrackerError;

    fn from_str(field: &str) -> Result<Self, Self::Err> {
        match field.trim().to_ascii_lowercase().replace('_', "").as_str() {
            "action" => Ok(Self::Action),
            "target" => Ok(Self::Target),
            "speed" => Ok(Self::Speed),
            "movestate" => Ok(Self::MoveState),
            "initiative" => Ok(Self::Initiative),
            _ => Err(TrackerError::UnknownField {
                field: field.to_string(),
            }),
        }
    }
}

/// A typed edit to a single row field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RowUpdate {
    Action(String),
    Target(String),
    Speed(Speed),
    MoveState(MoveState),
    Initiative(Initiative),
}

impl RowUpdate {
    pub fn field(&self) -> RowField {
        match self {
            RowUpdate::Action(_) => RowField::Action,
            RowUpdate::Target(_) => RowField::Target,
            RowUpdate::Speed(_) => RowField::Speed,
            RowUpdate::MoveState(_) => RowField::MoveState,
            RowUpdate::Initiative(_) => RowField::Initiative,
        }
    }

    /// Parses the untyped `(field, value)` form used by presentation layers.
    pub fn parse(field: &str, value: &str) -> Result<Self, TrackerError> {
        let field: RowField = field.parse()?;
        let invalid = || TrackerError::InvalidValue {
            field: field.to_string(),
            value: value.to_string(),
        };

        Ok(match field {
            RowField::Action => RowUpdate::Action(value.to_string()),
            RowField::Target => RowUpdate::Target(value.to_string()),
            RowField::Speed => RowUpdate::Speed(value.parse().map_err(|_| invalid())?),
            RowField::MoveState => RowUpdate::MoveState(value.parse().map_err(|_| invalid())?),
            RowField::Initiative => {
                let raw: u8 = value.trim().parse().map_err(|_| invalid())?;
                RowUpdate::Initiative(Initiative::try_from(raw).map_err(|_| invalid())?)
            }
        })
    }
}
