//! Read-only view of the actors a cast may touch.
//!
//! The world server owns actors and mutates them every tick. Hit resolution
//! runs against an [`ActorSnapshot`] captured for the tick instead, so that
//! positions and liveness stay consistent for the whole resolution call and
//! many casts can be resolved in parallel without locking.
//!
//! # Determinism
//!
//! Actors are stored in a `BTreeMap` keyed by [`ActorId`], so iterating a
//! snapshot always yields the same order on every platform.
//!
//! # Example
//!
//! ```
//! use strikezone_core::actor::{Actor, ActorId};
//! use strikezone_core::snapshot::ActorSnapshot;
//! use glam::Vec3;
//!
//! let mut snapshot = ActorSnapshot::new();
//! snapshot.insert(Actor::player(ActorId::new(1)).at(Vec3::new(0.0, 0.0, 0.0)));
//! snapshot.insert(Actor::battle_npc(ActorId::new(2)).at(Vec3::new(40.0, 0.0, 0.0)));
//!
//! let nearby = snapshot.ids_within(Vec3::ZERO, 10.0);
//! assert!(nearby.contains(&ActorId::new(1)));
//! assert!(!nearby.contains(&ActorId::new(2)));
//! ```

use std::collections::{BTreeMap, BTreeSet};

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::actor::{Actor, ActorId};

/// Actors captured for one server tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActorSnapshot {
    /// Tick the snapshot was taken on.
    tick: u64,
    /// Actor storage with deterministic iteration order.
    actors: BTreeMap<ActorId, Actor>,
}

impl ActorSnapshot {
    /// Creates an empty snapshot for tick 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty snapshot for the given tick.
    #[must_use]
    pub fn at_tick(tick: u64) -> Self {
        Self {
            tick,
            actors: BTreeMap::new(),
        }
    }

    /// Returns the tick this snapshot was taken on.
    #[must_use]
    pub const fn tick(&self) -> u64 {
        self.tick
    }

    /// Adds an actor, replacing any previous actor with the same id.
    ///
    /// # Returns
    ///
    /// The replaced actor, if there was one.
    pub fn insert(&mut self, actor: Actor) -> Option<Actor> {
        self.actors.insert(actor.id(), actor)
    }

    /// Returns a reference to an actor by id.
    #[must_use]
    pub fn get(&self, id: ActorId) -> Option<&Actor> {
        self.actors.get(&id)
    }

    /// Returns `true` if an actor with this id was captured.
    #[must_use]
    pub fn contains(&self, id: ActorId) -> bool {
        self.actors.contains_key(&id)
    }

    /// Returns the number of actors in the snapshot.
    #[must_use]
    pub fn len(&self) -> usize {
        self.actors.len()
    }

    /// Returns true if the snapshot holds no actors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }

    /// Returns an iterator over actor ids in sorted order.
    pub fn ids_sorted(&self) -> impl Iterator<Item = ActorId> + '_ {
        self.actors.keys().copied()
    }

    /// Returns an iterator over actors in id order.
    pub fn actors_sorted(&self) -> impl Iterator<Item = &Actor> + '_ {
        self.actors.values()
    }

    /// Collects the ids of all actors within `radius` of `center`.
    ///
    /// This is a linear scan standing in for the world's proximity query. It
    /// is meant for building candidate supersets in tests and tools, not for
    /// use on a live server. A negative radius matches nothing.
    #[must_use]
    pub fn ids_within(&self, center: Vec3, radius: f32) -> BTreeSet<ActorId> {
        if radius < 0.0 {
            return BTreeSet::new();
        }
        let radius_sq = radius * radius;
        self.actors
            .values()
            .filter(|actor| center.distance_squared(actor.position()) <= radius_sq)
            .map(Actor::id)
            .collect()
    }
}

impl FromIterator<Actor> for ActorSnapshot {
    fn from_iter<I: IntoIterator<Item = Actor>>(iter: I) -> Self {
        let mut snapshot = Self::new();
        for actor in iter {
            snapshot.insert(actor);
        }
        snapshot
    }
}

impl Extend<Actor> for ActorSnapshot {
    fn extend<I: IntoIterator<Item = Actor>>(&mut self, iter: I) {
        for actor in iter {
            self.insert(actor);
        }
    }
}
