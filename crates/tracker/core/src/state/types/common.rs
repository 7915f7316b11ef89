use std::fmt;

/// Stable identifier for an actor in the roster.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ActorId(pub u64);

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "actor#{}", self.0)
    }
}

/// Stable identifier for an action row.
///
/// Minted once when the row is created and never regenerated while the
/// underlying actor persists, including across renames.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RowId(pub u64);

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row#{}", self.0)
    }
}

/// Stable identifier for a saved actor template.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TemplateId(pub u64);

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "template#{}", self.0)
    }
}

/// Monotonic id source. Values are never handed out twice.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct IdMinter {
    next: u64,
}

impl IdMinter {
    pub(crate) fn mint(&mut self) -> u64 {
        let id = self.next;
        self.next += 1;
        id
    }
}

/// Whether an actor is controlled by a player or by the game master.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum ActorKind {
    #[default]
    Player,
    #[strum(serialize = "NPC")]
    #[cfg_attr(feature = "serde", serde(rename = "NPC"))]
    Npc,
}

impl ActorKind {
    /// Tie-break rank used by turn ordering. Higher acts first.
    pub const fn rank(self) -> u8 {
        match self {
            ActorKind::Player => 2,
            ActorKind::Npc => 1,
        }
    }
}

/// How quickly an actor resolves their action this round.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Speed {
    Fast,
    #[default]
    Normal,
    Slow,
}

impl Speed {
    pub const fn rank(self) -> u8 {
        match self {
            Speed::Fast => 3,
            Speed::Normal => 2,
            Speed::Slow => 1,
        }
    }
}

/// Whether the actor holds position or moves during the round.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum MoveState {
    #[default]
    Standstill,
    Moving,
}

impl MoveState {
    pub const fn rank(self) -> u8 {
        match self {
            MoveState::Standstill => 2,
            MoveState::Moving => 1,
        }
    }
}

/// Disposition of a saved actor towards the party.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum Hostility {
    #[default]
    Neutral,
    Friendly,
    Hostile,
}

/// Small tie-break priority within a round. Always in `0..=3`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Initiative(u8);

impl Initiative {
    pub const MIN: Self = Self(0);
    pub const MAX: Self = Self(3);

    pub const fn value(self) -> u8 {
        self.0
    }
}

/// Returned when an initiative value falls outside `0..=3`.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("initiative {0} is outside 0..=3")]
pub struct InitiativeOutOfRange(pub u8);

impl TryFrom<u8> for Initiative {
    type Error = InitiativeOutOfRange;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value <= Self::MAX.0 {
            Ok(Self(value))
        } else {
            Err(InitiativeOutOfRange(value))
        }
    }
}

impl From<Initiative> for u8 {
    fn from(value: Initiative) -> Self {
        value.0
    }
}

impl fmt::Display for Initiative {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn initiative_rejects_values_above_three() {
        assert_eq!(Initiative::try_from(3).map(u8::from), Ok(3));
        assert_eq!(Initiative::try_from(4), Err(InitiativeOutOfRange(4)));
    }

    #[test]
    fn enum_labels_parse_case_insensitively() {
        assert_eq!(ActorKind::from_str("npc"), Ok(ActorKind::Npc));
        assert_eq!(ActorKind::from_str("Player"), Ok(ActorKind::Player));
        assert_eq!(ActorKind::Npc.to_string(), "NPC");
        assert_eq!(Speed::from_str("FAST"), Ok(Speed::Fast));
        assert_eq!(MoveState::from_str("standstill"), Ok(MoveState::Standstill));
        assert_eq!(Hostility::from_str("hostile"), Ok(Hostility::Hostile));
        assert!(Speed::from_str("sluggish").is_err());
    }

    #[test]
    fn ranks_follow_turn_order_priority() {
        assert!(Speed::Fast.rank() > Speed::Normal.rank());
        assert!(Speed::Normal.rank() > Speed::Slow.rank());
        assert!(MoveState::Standstill.rank() > MoveState::Moving.rank());
        assert!(ActorKind::Player.rank() > ActorKind::Npc.rank());
    }

    #[test]
    fn option_lists_cover_every_variant() {
        use strum::IntoEnumIterator;

        let speeds: Vec<String> = Speed::iter().map(|s| s.to_string()).collect();
        assert_eq!(speeds, vec!["fast", "normal", "slow"]);
        assert_eq!(ActorKind::iter().count(), 2);
        assert_eq!(MoveState::iter().count(), 2);
        assert_eq!(Hostility::iter().count(), 3);
    }

    #[test]
    fn minter_never_repeats() {
        let mut minter = IdMinter::default();
        let first = minter.mint();
        let second = minter.mint();
        assert_ne!(first, second);
    }
}
