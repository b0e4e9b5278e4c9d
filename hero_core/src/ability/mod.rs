//! Abilities - attacker-bound effects resolved against the defender's archetype
//!
//! Resolution is a double dispatch: the ability kind picks the effect, the
//! defender's [`HeroKind`] picks the multiplier. Both are exhaustive matches
//! over closed enums, so a missing pairing is a compile error.

mod kind;
mod knight;
mod pyromancer;
mod rogue;
mod wizard;

pub use kind::AbilityKind;

use crate::hero::Hero;
use crate::map::GameMap;
use crate::modifier::{adjust_hero_modifier, scale};
use crate::types::{HeroId, HeroKind, Terrain};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Attacker state captured at cast time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttackerStats {
    pub id: HeroId,
    pub kind: HeroKind,
    pub level: u32,
    pub additive_modifier: f32,
    pub land_modifier: f32,
    /// Terrain under the attacker, `None` when off-map
    pub terrain: Option<Terrain>,
}

impl AttackerStats {
    pub fn of(hero: &Hero, map: &GameMap) -> Self {
        AttackerStats {
            id: hero.id(),
            kind: hero.kind(),
            level: hero.level(),
            additive_modifier: hero.additive_modifier(),
            land_modifier: hero.land_modifier(map),
            terrain: map.surface(hero.position()),
        }
    }

    /// Per-archetype multiplier with the attacker's additive bonus folded in
    pub fn adjusted(&self, hero_modifier: f32) -> f32 {
        adjust_hero_modifier(hero_modifier, self.additive_modifier)
    }

    /// Land modifier first, then the adjusted hero modifier, rounding each stage
    pub fn scale_damage(&self, damage: i32, hero_modifier: f32) -> i32 {
        let damage = scale(damage, self.land_modifier);
        scale(damage, self.adjusted(hero_modifier))
    }
}

/// An ability bound to the hero that owns it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ability {
    kind: AbilityKind,
    attacker: HeroId,
    /// Rounds in which this ability was cast (Backstab's critical cycle)
    casts: u32,
    cast_this_round: bool,
}

impl Ability {
    pub fn new(kind: AbilityKind, attacker: HeroId) -> Self {
        Ability {
            kind,
            attacker,
            casts: 0,
            cast_this_round: false,
        }
    }

    pub fn kind(&self) -> AbilityKind {
        self.kind
    }

    /// The owning hero
    pub fn attacker(&self) -> HeroId {
        self.attacker
    }

    pub fn casts(&self) -> u32 {
        self.casts
    }

    /// Base damage at the attacker's level, before any modifier.
    ///
    /// Abilities without a direct damage component return 0.
    pub fn compute_damage_without_modifiers(&self, attacker_level: u32) -> i32 {
        self.kind.base_damage() + attacker_level as i32 * self.kind.damage_level_multiplier()
    }

    pub fn hero_modifier(&self, defender: HeroKind) -> f32 {
        self.kind.hero_modifier(defender)
    }

    /// Resolve this ability against `defender`.
    ///
    /// Adds to the defender's pending damage and passive state; returns the
    /// direct damage added this cast.
    pub fn apply(&mut self, attacker: &AttackerStats, defender: &mut Hero, map: &GameMap) -> i32 {
        let hero_modifier = self.hero_modifier(defender.kind());

        let damage = match self.kind {
            AbilityKind::Execute => knight::execute(self, attacker, defender, hero_modifier),
            AbilityKind::Slam => knight::slam(self, attacker, defender, hero_modifier),
            AbilityKind::Fireblast => pyromancer::fireblast(self, attacker, defender, hero_modifier),
            AbilityKind::Ignite => pyromancer::ignite(self, attacker, defender, hero_modifier),
            AbilityKind::Backstab => rogue::backstab(self, attacker, defender, hero_modifier),
            AbilityKind::Paralysis => rogue::paralysis(self, attacker, defender, hero_modifier),
            AbilityKind::Drain => wizard::drain(attacker, defender, hero_modifier),
            AbilityKind::Deflect => match defender.kind() {
                // Wizards are immune to Deflect
                HeroKind::Wizard => 0,
                HeroKind::Knight | HeroKind::Pyromancer | HeroKind::Rogue => {
                    wizard::deflect(attacker, defender, hero_modifier, map)
                }
            },
        };

        trace!(
            ability = %self.kind,
            attacker = %attacker.id,
            defender = %defender,
            damage,
            "ability resolved"
        );

        self.cast_this_round = true;
        damage
    }

    /// Round boundary hook
    pub fn next_turn(&mut self) {
        if self.cast_this_round {
            self.casts += 1;
            self.cast_this_round = false;
        }
    }
}
