//! Actor resolution
//!
//! Every capability call receives the acting user explicitly. The host turns
//! its authentication state into an [`ActorCtx`] (or its own
//! [`ActorResolver`]) once per request and passes it down.

use std::collections::HashMap;

/// User attributed to an action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Actor {
    pub id: i64,
}

impl Actor {
    pub fn new(id: i64) -> Self {
        Self { id }
    }
}

/// Which actor an operation should be attributed to
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ActorSpec {
    /// The authenticated actor of the default guard
    #[default]
    Current,
    /// The authenticated actor of a named guard
    Guard(String),
    /// An explicitly supplied user
    User(Actor),
}

impl ActorSpec {
    pub fn guard(name: impl Into<String>) -> Self {
        Self::Guard(name.into())
    }
}

impl From<Actor> for ActorSpec {
    fn from(actor: Actor) -> Self {
        Self::User(actor)
    }
}

/// Source of the authenticated actor
pub trait ActorResolver: Send + Sync {
    /// Authenticated actor for `guard` (`None` = default guard)
    fn current(&self, guard: Option<&str>) -> Option<Actor>;

    fn resolve(&self, spec: &ActorSpec) -> Option<Actor> {
        match spec {
            ActorSpec::Current => self.current(None),
            ActorSpec::Guard(name) => self.current(Some(name)),
            ActorSpec::User(actor) => Some(*actor),
        }
    }
}

/// Per-request actor context
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActorCtx {
    current: Option<Actor>,
    guards: HashMap<String, Actor>,
}

impl ActorCtx {
    /// Context without any authenticated actor
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn authenticated(actor: Actor) -> Self {
        Self {
            current: Some(actor),
            guards: HashMap::new(),
        }
    }

    pub fn with_guard(mut self, guard: impl Into<String>, actor: Actor) -> Self {
        self.guards.insert(guard.into(), actor);
        self
    }

    pub fn current_actor(&self) -> Option<Actor> {
        self.current
    }
}

impl ActorResolver for ActorCtx {
    fn current(&self, guard: Option<&str>) -> Option<Actor> {
        match guard {
            None => self.current,
            Some(name) => self.guards.get(name).copied(),
        }
    }
}
