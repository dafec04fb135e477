//! # Strikezone Core
//!
//! Area-of-effect hit resolution for action casts.
//!
//! Given where a cast lands, the shape and size of its area, who it may
//! affect, and the actors a proximity query found nearby, this crate decides
//! exactly which actors are hit. It does not find candidates and it does not
//! apply damage or healing; it only filters a candidate set into a hit set.
//!
//! ## Architecture
//!
//! - **Geometry**: point-in-circle and point-in-box tests ([`geometry`])
//! - **Target filters**: role and liveness eligibility ([`filter`])
//! - **Resolver**: shape dispatch over a candidate set ([`resolver`])
//!
//! Supporting types:
//!
//! - **Actors**: ids, kinds, positions, vitals ([`actor`]), captured per tick
//!   in an [`ActorSnapshot`]
//! - **Actions**: cast types, area shapes, potency table ([`action`])
//!
//! ## Usage
//!
//! ```
//! use strikezone_core::{ActionDefinition, Actor, ActorId, ActorSnapshot};
//! use strikezone_core::{CollisionResolver, TargetFilter};
//! use glam::Vec3;
//!
//! let mut snapshot = ActorSnapshot::at_tick(120);
//! snapshot.insert(Actor::player(ActorId::new(1)).at(Vec3::new(2.0, 2.0, 0.0)));
//! snapshot.insert(Actor::battle_npc(ActorId::new(2)).at(Vec3::new(2.0, 2.0, 0.0)));
//!
//! let candidates = snapshot.ids_within(Vec3::ZERO, 30.0);
//! let line = ActionDefinition::rectangle(4.0, 10.0)?;
//!
//! let hits = CollisionResolver::new().resolve(
//!     &snapshot,
//!     Vec3::ZERO,
//!     &candidates,
//!     &line,
//!     TargetFilter::Enemies,
//! );
//!
//! assert_eq!(hits.len(), 1);
//! assert!(hits.contains(&ActorId::new(2)));
//! # Ok::<(), strikezone_core::ActionDataError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod action;
pub mod actor;
pub mod error;
pub mod filter;
pub mod geometry;
pub mod resolver;
pub mod snapshot;

#[cfg(test)]
mod tests;

pub use action::{ActionDefinition, ActionEntry, ActionId, ActionTable, AreaShape, CastType};
pub use actor::{Actor, ActorId, ActorKind, Vitals};
pub use error::{ActionDataError, Result};
pub use filter::TargetFilter;
pub use resolver::{CandidateSet, CastRequest, CollisionResolver, HitSet, ResolverConfig};
pub use snapshot::ActorSnapshot;
