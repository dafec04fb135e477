//! Test helper functions for building snapshots and casts.

use glam::Vec3;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::action::ActionDefinition;
use crate::actor::{Actor, ActorId, ActorKind};
use crate::filter::TargetFilter;
use crate::resolver::{CandidateSet, CastRequest, HitSet};
use crate::snapshot::ActorSnapshot;

// =============================================================================
// Logging
// =============================================================================

/// Routes resolver diagnostics to the test output.
///
/// Safe to call from every test; only the first call installs a subscriber.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

// =============================================================================
// Actor Factory Functions
// =============================================================================

/// Adds a live player at `position` and returns its id.
pub fn spawn_player(snapshot: &mut ActorSnapshot, id: u64, position: Vec3) -> ActorId {
    spawn(snapshot, Actor::player(ActorId::new(id)).at(position))
}

/// Adds a live battle NPC at `position` and returns its id.
pub fn spawn_battle_npc(snapshot: &mut ActorSnapshot, id: u64, position: Vec3) -> ActorId {
    spawn(snapshot, Actor::battle_npc(ActorId::new(id)).at(position))
}

/// Adds a live non-combat NPC at `position` and returns its id.
pub fn spawn_event_npc(snapshot: &mut ActorSnapshot, id: u64, position: Vec3) -> ActorId {
    spawn(snapshot, Actor::event_npc(ActorId::new(id)).at(position))
}

/// Adds any actor and returns its id.
pub fn spawn(snapshot: &mut ActorSnapshot, actor: Actor) -> ActorId {
    let id = actor.id();
    snapshot.insert(actor);
    id
}

/// Every actor in the snapshot as a candidate set.
pub fn everyone(snapshot: &ActorSnapshot) -> CandidateSet {
    snapshot.ids_sorted().collect()
}

/// Raw ids of a hit set, in order.
pub fn hit_ids(hits: &HitSet) -> Vec<u64> {
    hits.iter().map(|id| id.as_u64()).collect()
}

// =============================================================================
// Seeded Scenarios
// =============================================================================

/// Builds a snapshot of `count` actors scattered over a square of half-size
/// `extent`, with roughly one in five dead.
pub fn random_snapshot(seed: u64, count: u64, extent: f32) -> ActorSnapshot {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|id| {
            let kind = match rng.gen_range(0..3) {
                0 => ActorKind::Player,
                1 => ActorKind::BattleNpc,
                _ => ActorKind::EventNpc,
            };
            let position = Vec3::new(
                rng.gen_range(-extent..extent),
                rng.gen_range(-extent..extent),
                rng.gen_range(-2.0..2.0),
            );
            let actor = Actor::new(ActorId::new(id), kind).at(position);
            if rng.gen_bool(0.2) {
                actor.killed()
            } else {
                actor
            }
        })
        .collect()
}

/// Builds `count` casts against `snapshot`, covering every shape and filter.
pub fn random_requests(seed: u64, snapshot: &ActorSnapshot, count: usize) -> Vec<CastRequest> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let origin = Vec3::new(
                rng.gen_range(-40.0..40.0),
                rng.gen_range(-40.0..40.0),
                0.0,
            );
            let action = random_action(&mut rng);
            let filter = TargetFilter::ALL[rng.gen_range(0..TargetFilter::ALL.len())];
            let candidates = snapshot.ids_within(origin, 30.0);
            CastRequest::new(origin, candidates, action, filter)
        })
        .collect()
}

fn random_action(rng: &mut ChaCha8Rng) -> ActionDefinition {
    let range = rng.gen_range(0.0..20.0);
    let width = rng.gen_range(0.0..10.0);
    let definition = match rng.gen_range(0..5) {
        0 => ActionDefinition::single_target(range),
        1 => ActionDefinition::circle(range),
        2 => ActionDefinition::rectangle(width, range),
        3 => ActionDefinition::from_raw(3, range, width),
        _ => ActionDefinition::from_raw(rng.gen_range(8..=u8::MAX), range, width),
    };
    definition.expect("generated dimensions are finite and non-negative")
}
