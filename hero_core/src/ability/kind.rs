//! Ability kinds and their per-archetype modifier tables

use crate::types::HeroKind;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Every ability in the game, two per archetype
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbilityKind {
    // Knight
    Execute,
    Slam,
    // Pyromancer
    Fireblast,
    Ignite,
    // Rogue
    Backstab,
    Paralysis,
    // Wizard
    Drain,
    Deflect,
}

impl AbilityKind {
    pub fn all() -> &'static [AbilityKind] {
        &[
            AbilityKind::Execute,
            AbilityKind::Slam,
            AbilityKind::Fireblast,
            AbilityKind::Ignite,
            AbilityKind::Backstab,
            AbilityKind::Paralysis,
            AbilityKind::Drain,
            AbilityKind::Deflect,
        ]
    }

    /// Abilities a freshly created hero of `kind` owns, in cast order
    pub fn roster(kind: HeroKind) -> &'static [AbilityKind] {
        match kind {
            HeroKind::Knight => &[AbilityKind::Execute, AbilityKind::Slam],
            HeroKind::Pyromancer => &[AbilityKind::Fireblast, AbilityKind::Ignite],
            HeroKind::Rogue => &[AbilityKind::Backstab, AbilityKind::Paralysis],
            HeroKind::Wizard => &[AbilityKind::Drain, AbilityKind::Deflect],
        }
    }

    /// Resolve an ability by name; unknown names yield `None`
    pub fn from_name(name: &str) -> Option<AbilityKind> {
        AbilityKind::all().iter().copied().find(|kind| kind.name() == name)
    }

    pub fn name(&self) -> &'static str {
        match self {
            AbilityKind::Execute => "Execute",
            AbilityKind::Slam => "Slam",
            AbilityKind::Fireblast => "Fireblast",
            AbilityKind::Ignite => "Ignite",
            AbilityKind::Backstab => "Backstab",
            AbilityKind::Paralysis => "Paralysis",
            AbilityKind::Drain => "Drain",
            AbilityKind::Deflect => "Deflect",
        }
    }

    /// Flat damage at level 0
    pub fn base_damage(&self) -> i32 {
        match self {
            AbilityKind::Execute => 200,
            AbilityKind::Slam => 100,
            AbilityKind::Fireblast => 350,
            AbilityKind::Ignite => 150,
            AbilityKind::Backstab => 200,
            AbilityKind::Paralysis => 40,
            AbilityKind::Drain | AbilityKind::Deflect => 0,
        }
    }

    /// Damage added per attacker level
    pub fn damage_level_multiplier(&self) -> i32 {
        match self {
            AbilityKind::Execute => 30,
            AbilityKind::Slam => 40,
            AbilityKind::Fireblast => 50,
            AbilityKind::Ignite => 20,
            AbilityKind::Backstab => 20,
            AbilityKind::Paralysis => 10,
            AbilityKind::Drain | AbilityKind::Deflect => 0,
        }
    }

    /// Multiplier against a defender archetype
    pub fn hero_modifier(&self, defender: HeroKind) -> f32 {
        use AbilityKind::*;
        use HeroKind::*;

        match (self, defender) {
            (Execute, Knight) => 1.00,
            (Execute, Pyromancer) => 1.10,
            (Execute, Rogue) => 1.15,
            (Execute, Wizard) => 0.80,

            (Slam, Knight) => 1.20,
            (Slam, Pyromancer) => 0.90,
            (Slam, Rogue) => 0.80,
            (Slam, Wizard) => 1.05,

            (Fireblast, Knight) => 1.20,
            (Fireblast, Pyromancer) => 0.90,
            (Fireblast, Rogue) => 0.80,
            (Fireblast, Wizard) => 1.05,

            (Ignite, Knight) => 1.20,
            (Ignite, Pyromancer) => 0.90,
            (Ignite, Rogue) => 0.80,
            (Ignite, Wizard) => 1.05,

            (Backstab, Knight) => 0.90,
            (Backstab, Pyromancer) => 1.25,
            (Backstab, Rogue) => 1.20,
            (Backstab, Wizard) => 1.25,

            (Paralysis, Knight) => 0.80,
            (Paralysis, Pyromancer) => 1.20,
            (Paralysis, Rogue) => 0.90,
            (Paralysis, Wizard) => 1.25,

            (Drain, Knight) => 1.20,
            (Drain, Pyromancer) => 0.90,
            (Drain, Rogue) => 0.80,
            (Drain, Wizard) => 1.05,

            (Deflect, Knight) => 1.40,
            (Deflect, Pyromancer) => 1.30,
            (Deflect, Rogue) => 1.20,
            (Deflect, Wizard) => 1.00,
        }
    }
}

impl fmt::Display for AbilityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
