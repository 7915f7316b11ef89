use super::{ActorId, ActorKind};

/// A named participant in the current encounter.
///
/// An actor whose name is blank after trimming is inactive and owns no row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Actor {
    pub id: ActorId,
    pub name: String,
    pub kind: ActorKind,
}

impl Actor {
    pub fn new(id: ActorId, name: impl Into<String>, kind: ActorKind) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
        }
    }

    /// Trimmed name, or `None` when the actor is inactive.
    pub fn active_name(&self) -> Option<&str> {
        active_name(&self.name)
    }

    pub fn is_active(&self) -> bool {
        self.active_name().is_some()
    }
}

/// Trims `name` and returns it unless nothing is left.
pub fn active_name(name: &str) -> Option<&str> {
    let trimmed = name.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Ordered collection of actors for the current encounter.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Roster {
    actors: Vec<Actor>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.actors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Actor> {
        self.actors.iter()
    }

    pub fn as_slice(&self) -> &[Actor] {
        &self.actors
    }

    pub fn get(&self, id: ActorId) -> Option<&Actor> {
        self.actors.iter().find(|actor| actor.id == id)
    }

    pub(crate) fn get_mut(&mut self, id: ActorId) -> Option<&mut Actor> {
        self.actors.iter_mut().find(|actor| actor.id == id)
    }

    /// First actor, in roster order, whose trimmed name equals the trimmed `name`.
    ///
    /// Blank names never match; duplicate names resolve to the earliest actor.
    pub fn find_by_name(&self, name: &str) -> Option<&Actor> {
        let wanted = active_name(name)?;
        self.actors
            .iter()
            .find(|actor| actor.active_name() == Some(wanted))
    }

    /// Number of actors currently carrying `name` (trimmed, non-blank).
    pub fn count_named(&self, name: &str) -> usize {
        match active_name(name) {
            Some(wanted) => self
                .actors
                .iter()
                .filter(|actor| actor.active_name() == Some(wanted))
                .count(),
            None => 0,
        }
    }

    /// Distinct active names in roster order; duplicates collapse to the first.
    pub fn active_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::with_capacity(self.actors.len());
        for name in self.actors.iter().filter_map(Actor::active_name) {
            if !names.contains(&name) {
                names.push(name);
            }
        }
        names
    }

    pub(crate) fn push(&mut self, actor: Actor) {
        self.actors.push(actor);
    }

    pub(crate) fn remove(&mut self, id: ActorId) -> Option<Actor> {
        let index = self.actors.iter().position(|actor| actor.id == id)?;
        Some(self.actors.remove(index))
    }
}
