//! Per-actor state read by the hit resolver.
//!
//! Only the state that eligibility checks need lives here. Everything else an
//! actor carries in the world server (stats, inventory, status effects) belongs
//! to other subsystems.

use serde::{Deserialize, Serialize};

/// Health state of an actor.
///
/// An actor is alive while `hp > 0`. Nothing here clamps `hp` to `max_hp`;
/// the effect-application step owns that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vitals {
    /// Current hit points.
    pub hp: u32,
    /// Maximum hit points.
    pub max_hp: u32,
}

impl Vitals {
    /// Creates vitals at full health.
    #[must_use]
    pub const fn full(max_hp: u32) -> Self {
        Self { hp: max_hp, max_hp }
    }

    /// Returns `true` while the actor has hit points left.
    #[must_use]
    pub const fn is_alive(&self) -> bool {
        self.hp > 0
    }
}

impl Default for Vitals {
    fn default() -> Self {
        Self::full(100)
    }
}
