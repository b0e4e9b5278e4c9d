//! Pyromancer abilities: Fireblast and Ignite

use super::{Ability, AttackerStats};
use crate::hero::Hero;
use crate::passive::PassiveAction;

const IGNITE_PASSIVE_BASE_DAMAGE: i32 = 50;
const IGNITE_PASSIVE_DAMAGE_PER_LEVEL: i32 = 30;
const IGNITE_PASSIVE_ROUNDS: u32 = 2;

pub(super) fn fireblast(
    ability: &Ability,
    attacker: &AttackerStats,
    defender: &mut Hero,
    hero_modifier: f32,
) -> i32 {
    let damage = attacker.scale_damage(
        ability.compute_damage_without_modifiers(attacker.level),
        hero_modifier,
    );
    defender.increase_damage_taken(damage);
    damage
}

/// Direct hit plus a burn ticking for two rounds
pub(super) fn ignite(
    ability: &Ability,
    attacker: &AttackerStats,
    defender: &mut Hero,
    hero_modifier: f32,
) -> i32 {
    let damage = attacker.scale_damage(
        ability.compute_damage_without_modifiers(attacker.level),
        hero_modifier,
    );
    let burn = attacker.scale_damage(
        IGNITE_PASSIVE_BASE_DAMAGE + attacker.level as i32 * IGNITE_PASSIVE_DAMAGE_PER_LEVEL,
        hero_modifier,
    );

    defender.set_passive_penalty(
        IGNITE_PASSIVE_ROUNDS,
        Some(PassiveAction::Damage { amount: burn }),
        None,
    );
    defender.increase_damage_taken(damage);
    damage
}

#[cfg(test)]
mod tests {
    use crate::ability::{AbilityKind, AttackerStats};
    use crate::hero::Hero;
    use crate::map::GameMap;
    use crate::passive::PassiveAction;
    use crate::types::{HeroId, HeroKind, Position, Terrain};

    fn cast_first(ability: AbilityKind, attacker: Hero, defender: &mut Hero, map: &GameMap) -> i32 {
        let mut attacker = attacker.with_abilities(&[ability]);
        let stats = AttackerStats::of(&attacker, map);
        attacker.abilities_mut()[0].apply(&stats, defender, map)
    }

    #[test]
    fn test_fireblast_rounds_each_stage() {
        let map = GameMap::new(1, 1, Terrain::Volcanic);
        let mut attacker = Hero::new(HeroId(0), HeroKind::Pyromancer);
        attacker.set_position_unchecked(Position::new(0, 0));
        let mut defender = Hero::new(HeroId(1), HeroKind::Knight);

        // 350 * 1.25 = 437.5 -> 438, 438 * 1.2 = 525.6 -> 526
        let damage = cast_first(AbilityKind::Fireblast, attacker, &mut defender, &map);
        assert_eq!(damage, 526);
        assert_eq!(defender.damage_taken(), 526);
    }

    #[test]
    fn test_ignite_burns_for_two_rounds() {
        let map = GameMap::new(1, 1, Terrain::Land);
        let attacker = Hero::new(HeroId(0), HeroKind::Pyromancer);
        let mut defender = Hero::new(HeroId(1), HeroKind::Rogue);

        let damage = cast_first(AbilityKind::Ignite, attacker, &mut defender, &map);
        assert_eq!(damage, 120);
        assert_eq!(
            defender.passive_penalty().action(),
            Some(PassiveAction::Damage { amount: 40 })
        );

        let _ = defender.apply_damage_taken();
        assert_eq!(defender.hp(), 480);

        defender.apply_passive_penalty();
        defender.apply_passive_penalty();
        defender.apply_passive_penalty();
        assert_eq!(defender.damage_taken(), 80);
    }
}
