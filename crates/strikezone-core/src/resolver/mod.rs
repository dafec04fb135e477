//! Hit resolution for action casts.
//!
//! The [`CollisionResolver`] turns a candidate set into a hit set. For every
//! candidate it:
//! 1. Looks the actor up in the tick's [`ActorSnapshot`]
//! 2. Checks the cast's [`TargetFilter`] (role and liveness)
//! 3. Tests the actor's position against the cast's [`AreaShape`]
//!
//! Candidates come from the world's proximity query and are expected to be a
//! superset of what the cast can reach. Effects are applied elsewhere.
//!
//! # Invariants
//!
//! - A hit set never contains a dead actor, an actor the filter rejects, or an
//!   actor outside the shape
//! - Resolution is deterministic: the same snapshot and cast always produce
//!   the same hit set
//! - Every candidate id must exist in the snapshot; a missing id panics
//!
//! # Example
//!
//! ```
//! use std::collections::BTreeSet;
//!
//! use strikezone_core::action::ActionDefinition;
//! use strikezone_core::actor::{Actor, ActorId};
//! use strikezone_core::filter::TargetFilter;
//! use strikezone_core::resolver::CollisionResolver;
//! use strikezone_core::snapshot::ActorSnapshot;
//! use glam::Vec3;
//!
//! let mut snapshot = ActorSnapshot::new();
//! snapshot.insert(Actor::battle_npc(ActorId::new(1)).at(Vec3::new(5.0, 0.0, 0.0)));
//! snapshot.insert(Actor::battle_npc(ActorId::new(2)).at(Vec3::new(5.01, 0.0, 0.0)));
//!
//! let candidates: BTreeSet<_> = snapshot.ids_sorted().collect();
//! let hits = CollisionResolver::new().resolve(
//!     &snapshot,
//!     Vec3::ZERO,
//!     &candidates,
//!     &ActionDefinition::circle(5.0).unwrap(),
//!     TargetFilter::All,
//! );
//!
//! assert_eq!(hits.into_iter().collect::<Vec<_>>(), vec![ActorId::new(1)]);
//! ```

mod batch;
mod config;

pub use batch::CastRequest;
pub use config::ResolverConfig;

use std::collections::BTreeSet;

use glam::Vec3;

use crate::action::{ActionDefinition, AreaShape};
use crate::actor::{Actor, ActorId};
use crate::filter::TargetFilter;
use crate::geometry::{box_contains, radius_contains};
use crate::snapshot::ActorSnapshot;

/// Actors a cast may consider, as produced by the proximity query.
pub type CandidateSet = BTreeSet<ActorId>;

/// Actors a cast struck. Iterates in actor id order.
pub type HitSet = BTreeSet<ActorId>;

/// Stateless resolver from candidate sets to hit sets.
///
/// The resolver holds only its configuration, so one instance can be shared
/// across threads and used for every cast.
#[derive(Debug, Clone, Default)]
pub struct CollisionResolver {
    config: ResolverConfig,
}

impl CollisionResolver {
    /// Creates a resolver with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a resolver with the given configuration.
    #[must_use]
    pub fn with_config(config: ResolverConfig) -> Self {
        Self { config }
    }

    /// Returns the resolver's configuration.
    #[must_use]
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolves which candidates a cast strikes.
    ///
    /// # Arguments
    ///
    /// * `snapshot` - Actors captured for the current tick
    /// * `origin` - Anchor point of the area (center, or box corner)
    /// * `candidates` - Ids from the proximity query
    /// * `action` - Area parameters of the cast action
    /// * `filter` - Which actors the cast may affect
    ///
    /// # Panics
    ///
    /// Panics if a candidate id is not present in `snapshot`. The proximity
    /// query must only hand out ids from the same tick's snapshot.
    #[must_use]
    pub fn resolve(
        &self,
        snapshot: &ActorSnapshot,
        origin: Vec3,
        candidates: &CandidateSet,
        action: &ActionDefinition,
        filter: TargetFilter,
    ) -> HitSet {
        let shape = action.shape();
        if let AreaShape::Unsupported(cast_type) = shape {
            tracing::debug!(
                ?cast_type,
                candidates = candidates.len(),
                "cast type has no collision shape; nothing is hit"
            );
        }

        let mut hits = HitSet::new();
        for &id in candidates {
            let actor = expect_candidate(snapshot, id);

            if !filter.admits(actor) {
                continue;
            }

            if strikes(shape, origin, actor.position()) {
                hits.insert(id);
            }
        }

        if let Some(limit) = self.config.target_limit {
            if hits.len() > limit {
                hits = nearest(snapshot, origin, &hits, limit);
            }
        }

        tracing::trace!(
            tick = snapshot.tick(),
            ?shape,
            %filter,
            candidates = candidates.len(),
            hits = hits.len(),
            "resolved cast"
        );

        hits
    }
}

/// Tests a point against a shape. This is the only place shapes are matched.
fn strikes(shape: AreaShape, origin: Vec3, point: Vec3) -> bool {
    match shape {
        AreaShape::Splash { radius } | AreaShape::Circle { radius } => {
            radius_contains(point, origin, radius)
        }
        AreaShape::Box { width, length } => box_contains(point, origin, width, length),
        AreaShape::Unsupported(_) => false,
    }
}

fn expect_candidate(snapshot: &ActorSnapshot, id: ActorId) -> &Actor {
    match snapshot.get(id) {
        Some(actor) => actor,
        None => contract_violation(id, snapshot.tick()),
    }
}

#[cold]
#[inline(never)]
fn contract_violation(id: ActorId, tick: u64) -> ! {
    tracing::error!(actor = %id, tick, "candidate missing from actor snapshot");
    panic!("contract violation: candidate {id} is not present in the snapshot for tick {tick}");
}

/// Keeps the `limit` hits closest to `origin`, ties broken by id.
fn nearest(snapshot: &ActorSnapshot, origin: Vec3, hits: &HitSet, limit: usize) -> HitSet {
    let mut ranked: Vec<(f32, ActorId)> = hits
        .iter()
        .map(|&id| {
            let position = expect_candidate(snapshot, id).position();
            (origin.distance_squared(position), id)
        })
        .collect();

    ranked.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));

    tracing::debug!(
        hits = ranked.len(),
        limit,
        "target limit reached; dropping farthest hits"
    );

    ranked.into_iter().take(limit).map(|(_, id)| id).collect()
}
