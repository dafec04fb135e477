//! Actor types consumed by the hit resolver.
//!
//! - [`ActorId`]: Unique identifier for actors
//! - [`ActorKind`]: Classification used by target filters
//! - [`Actor`]: Identity, position, and vitals of one actor
//!
//! Actors are owned by the world server. The resolver only ever sees them
//! through an [`ActorSnapshot`](crate::snapshot::ActorSnapshot) taken for the
//! current tick.
//!
//! # Example
//!
//! ```
//! use strikezone_core::actor::{Actor, ActorId, ActorKind};
//! use glam::Vec3;
//!
//! let player = Actor::player(ActorId::new(7)).at(Vec3::new(1.0, 2.0, 0.0));
//!
//! assert_eq!(player.id().as_u64(), 7);
//! assert_eq!(player.kind(), ActorKind::Player);
//! assert!(player.is_player());
//! assert!(player.is_alive());
//! ```

pub mod components;

use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::fmt;

pub use components::Vitals;

/// Unique identifier for an actor.
///
/// Ordered by numeric value. Hit sets are keyed by `ActorId`, so this ordering
/// is also the iteration order of every hit set the resolver returns.
///
/// # Example
///
/// ```
/// use strikezone_core::actor::ActorId;
///
/// let a = ActorId::new(1);
/// let b = ActorId::new(2);
///
/// assert!(a < b);
/// assert_eq!(a.as_u64(), 1);
/// ```
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ActorId(u64);

impl ActorId {
    /// Creates a new `ActorId` from a raw `u64` value.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw `u64` value of this identifier.
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ActorId({})", self.0)
    }
}

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ActorId {
    fn from(id: u64) -> Self {
        Self::new(id)
    }
}

impl From<ActorId> for u64 {
    fn from(id: ActorId) -> Self {
        id.0
    }
}

/// What kind of actor this is, as far as target filters care.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActorKind {
    /// Player character
    Player,
    /// Battle-capable non-player (monsters, hostile NPCs)
    BattleNpc,
    /// Non-combat NPC (quest givers, vendors)
    EventNpc,
}

impl fmt::Display for ActorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Player => write!(f, "Player"),
            Self::BattleNpc => write!(f, "BattleNpc"),
            Self::EventNpc => write!(f, "EventNpc"),
        }
    }
}

/// One actor in the world, as seen by the resolver.
///
/// # Example
///
/// ```
/// use strikezone_core::actor::{Actor, ActorId};
/// use glam::Vec3;
///
/// let corpse = Actor::battle_npc(ActorId::new(3))
///     .at(Vec3::new(4.0, 0.0, 0.0))
///     .killed();
///
/// assert!(corpse.is_battle_npc());
/// assert!(!corpse.is_alive());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    id: ActorId,
    kind: ActorKind,
    position: Vec3,
    vitals: Vitals,
}

impl Actor {
    /// Creates an actor at the world origin with full default vitals.
    #[must_use]
    pub fn new(id: ActorId, kind: ActorKind) -> Self {
        Self {
            id,
            kind,
            position: Vec3::ZERO,
            vitals: Vitals::default(),
        }
    }

    /// Creates a player character.
    #[must_use]
    pub fn player(id: ActorId) -> Self {
        Self::new(id, ActorKind::Player)
    }

    /// Creates a battle-capable NPC.
    #[must_use]
    pub fn battle_npc(id: ActorId) -> Self {
        Self::new(id, ActorKind::BattleNpc)
    }

    /// Creates a non-combat NPC.
    #[must_use]
    pub fn event_npc(id: ActorId) -> Self {
        Self::new(id, ActorKind::EventNpc)
    }

    /// Places the actor at `position`.
    #[must_use]
    pub fn at(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    /// Replaces the actor's vitals.
    #[must_use]
    pub fn with_vitals(mut self, vitals: Vitals) -> Self {
        self.vitals = vitals;
        self
    }

    /// Sets current hit points, keeping max hit points.
    #[must_use]
    pub fn with_hp(mut self, hp: u32) -> Self {
        self.vitals.hp = hp;
        self
    }

    /// Drops the actor to zero hit points.
    #[must_use]
    pub fn killed(self) -> Self {
        self.with_hp(0)
    }

    /// Returns the actor's unique identifier.
    #[must_use]
    pub const fn id(&self) -> ActorId {
        self.id
    }

    /// Returns the actor's kind.
    #[must_use]
    pub const fn kind(&self) -> ActorKind {
        self.kind
    }

    /// Returns the actor's world position.
    #[must_use]
    pub const fn position(&self) -> Vec3 {
        self.position
    }

    /// Returns the actor's vitals.
    #[must_use]
    pub const fn vitals(&self) -> &Vitals {
        &self.vitals
    }

    /// Returns `true` if this actor is a player character.
    #[must_use]
    pub const fn is_player(&self) -> bool {
        matches!(self.kind, ActorKind::Player)
    }

    /// Returns `true` if this actor is a battle-capable NPC.
    #[must_use]
    pub const fn is_battle_npc(&self) -> bool {
        matches!(self.kind, ActorKind::BattleNpc)
    }

    /// Returns `true` if this actor has hit points left.
    #[must_use]
    pub const fn is_alive(&self) -> bool {
        self.vitals.is_alive()
    }
}
