//! Passive penalties - per-round effects with a bounded duration
//!
//! A hero carries at most one passive penalty. Each round the turn driver
//! calls [`Hero::apply_passive_penalty`](crate::hero::Hero::apply_passive_penalty)
//! once; the finish action runs on the call after the last active round.

pub mod tick;

use crate::hero::Hero;
use serde::{Deserialize, Serialize};

/// Operation applied to a hero on an active round or on expiry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PassiveAction {
    /// Add to the hero's pending damage
    Damage { amount: i32 },
    /// Keep the hero stunned and add to its pending damage
    StunAndDamage { amount: i32 },
    /// Clear the stun flag
    Unstun,
}

impl PassiveAction {
    pub fn apply(&self, hero: &mut Hero) {
        match *self {
            PassiveAction::Damage { amount } => hero.increase_damage_taken(amount),
            PassiveAction::StunAndDamage { amount } => {
                hero.set_stunned(true);
                hero.increase_damage_taken(amount);
            }
            PassiveAction::Unstun => hero.set_stunned(false),
        }
    }
}

/// Observable phase of the passive-penalty state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PassiveState {
    /// No rounds left and nothing pending
    Inactive,
    /// Rounds remaining; the action runs on each tick
    Active,
    /// Rounds just reached zero; the finish action runs on the next tick
    Expiring,
}

/// Passive-penalty slot of a hero
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassivePenalty {
    pub(crate) rounds: u32,
    pub(crate) action: Option<PassiveAction>,
    pub(crate) finish: Option<PassiveAction>,
    pub(crate) just_ended: bool,
}

impl PassivePenalty {
    /// Rounds left before the penalty expires
    pub fn rounds_remaining(&self) -> u32 {
        self.rounds
    }

    pub fn action(&self) -> Option<PassiveAction> {
        self.action
    }

    pub fn finish(&self) -> Option<PassiveAction> {
        self.finish
    }

    pub fn state(&self) -> PassiveState {
        if self.just_ended {
            PassiveState::Expiring
        } else if self.rounds > 0 {
            PassiveState::Active
        } else {
            PassiveState::Inactive
        }
    }
}
