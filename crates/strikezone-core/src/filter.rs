//! Target filters: which side of the caster an action may affect.
//!
//! [`TargetFilter::admits`] is the single eligibility check the resolver runs
//! per candidate. It combines the filter's role predicate with liveness; a
//! dead actor is never admitted, whatever the filter.
//!
//! `Allies` and `Party` are placeholders. Ally NPCs and party membership are
//! not modeled yet, so each has its own stub predicate below rather than
//! borrowing another filter's branch.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::actor::Actor;

/// Target-selection category declared by a cast.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetFilter {
    /// Every live actor
    All,
    /// Player characters only
    Players,
    /// Anything that is not a battle-capable NPC
    Allies,
    /// The caster's party
    Party,
    /// Battle-capable NPCs only
    Enemies,
}

impl TargetFilter {
    /// All filters, in declaration order.
    pub const ALL: [TargetFilter; 5] = [
        Self::All,
        Self::Players,
        Self::Allies,
        Self::Party,
        Self::Enemies,
    ];

    /// Returns `true` if `actor` may be affected by a cast using this filter.
    ///
    /// # Example
    ///
    /// ```
    /// use strikezone_core::actor::{Actor, ActorId};
    /// use strikezone_core::filter::TargetFilter;
    ///
    /// let npc = Actor::battle_npc(ActorId::new(1));
    /// assert!(TargetFilter::Enemies.admits(&npc));
    /// assert!(!TargetFilter::Players.admits(&npc));
    /// assert!(!TargetFilter::All.admits(&npc.killed()));
    /// ```
    #[must_use]
    pub fn admits(self, actor: &Actor) -> bool {
        let role_matches = match self {
            Self::All => true,
            Self::Players => actor.is_player(),
            Self::Allies => Self::ally_placeholder(actor),
            Self::Party => Self::party_placeholder(actor),
            Self::Enemies => actor.is_battle_npc(),
        };

        role_matches && actor.is_alive()
    }

    // Ally NPCs are not modeled: treat everything except hostile NPCs as allied.
    fn ally_placeholder(actor: &Actor) -> bool {
        !actor.is_battle_npc()
    }

    // Party membership is not modeled: treat every player as a party member.
    fn party_placeholder(actor: &Actor) -> bool {
        actor.is_player()
    }
}

impl fmt::Display for TargetFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "All"),
            Self::Players => write!(f, "Players"),
            Self::Allies => write!(f, "Allies"),
            Self::Party => write!(f, "Party"),
            Self::Enemies => write!(f, "Enemies"),
        }
    }
}
