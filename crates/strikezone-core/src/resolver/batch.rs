//! Parallel resolution of many casts against one snapshot.
//!
//! A server tick can carry casts from many actors at once. They all read the
//! same [`ActorSnapshot`], and the resolver keeps no state between calls, so
//! the casts fan out over rayon's pool. Results come back in request order.

use glam::Vec3;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::{CandidateSet, CollisionResolver, HitSet};
use crate::action::ActionDefinition;
use crate::filter::TargetFilter;
use crate::snapshot::ActorSnapshot;

/// Everything needed to resolve one cast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CastRequest {
    /// Anchor point of the area
    pub origin: Vec3,
    /// Ids from the proximity query
    pub candidates: CandidateSet,
    /// Area parameters of the cast action
    pub action: ActionDefinition,
    /// Which actors the cast may affect
    pub filter: TargetFilter,
}

impl CastRequest {
    /// Creates a cast request.
    #[must_use]
    pub fn new(
        origin: Vec3,
        candidates: CandidateSet,
        action: ActionDefinition,
        filter: TargetFilter,
    ) -> Self {
        Self {
            origin,
            candidates,
            action,
            filter,
        }
    }
}

impl CollisionResolver {
    /// Resolves a single [`CastRequest`].
    ///
    /// # Panics
    ///
    /// Same as [`CollisionResolver::resolve`].
    #[must_use]
    pub fn resolve_request(&self, snapshot: &ActorSnapshot, request: &CastRequest) -> HitSet {
        self.resolve(
            snapshot,
            request.origin,
            &request.candidates,
            &request.action,
            request.filter,
        )
    }

    /// Resolves many casts in parallel.
    ///
    /// The `i`-th hit set belongs to the `i`-th request and equals what
    /// [`CollisionResolver::resolve_request`] returns for it.
    ///
    /// # Panics
    ///
    /// Panics if any request names a candidate missing from `snapshot`.
    #[must_use]
    pub fn resolve_batch(&self, snapshot: &ActorSnapshot, requests: &[CastRequest]) -> Vec<HitSet> {
        tracing::trace!(
            tick = snapshot.tick(),
            casts = requests.len(),
            "resolving cast batch"
        );

        requests
            .par_iter()
            .map(|request| self.resolve_request(snapshot, request))
            .collect()
    }
}
