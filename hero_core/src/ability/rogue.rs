//! Rogue abilities: Backstab and Paralysis

use super::{Ability, AttackerStats};
use crate::hero::Hero;
use crate::modifier::scale;
use crate::passive::PassiveAction;
use crate::types::Terrain;

const BACKSTAB_CRITICAL_MULTIPLIER: f32 = 1.5;
/// Every n-th cast is a critical hit
const BACKSTAB_CRITICAL_CYCLE: u32 = 3;

const PARALYSIS_ROUNDS: u32 = 3;
const PARALYSIS_WOODS_ROUNDS: u32 = 6;

/// Hit, with a critical strike on every third cast from the woods
pub(super) fn backstab(
    ability: &Ability,
    attacker: &AttackerStats,
    defender: &mut Hero,
    hero_modifier: f32,
) -> i32 {
    let mut damage = ability.compute_damage_without_modifiers(attacker.level);
    if ability.casts() % BACKSTAB_CRITICAL_CYCLE == 0 && attacker.terrain == Some(Terrain::Woods) {
        damage = scale(damage, BACKSTAB_CRITICAL_MULTIPLIER);
    }

    let damage = attacker.scale_damage(damage, hero_modifier);
    defender.increase_damage_taken(damage);
    damage
}

/// Hit and keep the defender stunned, repeating the hit each round
pub(super) fn paralysis(
    ability: &Ability,
    attacker: &AttackerStats,
    defender: &mut Hero,
    hero_modifier: f32,
) -> i32 {
    let damage = attacker.scale_damage(
        ability.compute_damage_without_modifiers(attacker.level),
        hero_modifier,
    );
    let rounds = if attacker.terrain == Some(Terrain::Woods) {
        PARALYSIS_WOODS_ROUNDS
    } else {
        PARALYSIS_ROUNDS
    };

    defender.set_passive_penalty(
        rounds,
        Some(PassiveAction::StunAndDamage { amount: damage }),
        Some(PassiveAction::Unstun),
    );
    defender.set_stunned(true);
    defender.increase_damage_taken(damage);
    damage
}

#[cfg(test)]
mod tests {
    use crate::ability::{AbilityKind, AttackerStats};
    use crate::hero::Hero;
    use crate::map::GameMap;
    use crate::types::{HeroId, HeroKind, Position, Terrain};

    fn rogue_on(map: &GameMap, ability: AbilityKind) -> Hero {
        let mut rogue = Hero::new(HeroId(0), HeroKind::Rogue).with_abilities(&[ability]);
        rogue.set_position_unchecked(Position::new(0, 0));
        assert!(map.contains(rogue.position()));
        rogue
    }

    #[test]
    fn test_backstab_critical_cycle_in_woods() {
        let map = GameMap::new(1, 1, Terrain::Woods);
        let mut rogue = rogue_on(&map, AbilityKind::Backstab);
        let stats = AttackerStats::of(&rogue, &map);
        let mut defender = Hero::new(HeroId(1), HeroKind::Pyromancer);

        let mut hits = Vec::new();
        for _ in 0..4 {
            hits.push(rogue.abilities_mut()[0].apply(&stats, &mut defender, &map));
            rogue.abilities_mut()[0].next_turn();
        }

        // 200 * 1.5 = 300, * 1.15 = 345, * 1.25 = 431.25 -> 431
        // 200 * 1.15 = 230, * 1.25 = 287.5 -> 288
        assert_eq!(hits, vec![431, 288, 288, 431]);
    }

    #[test]
    fn test_backstab_no_critical_off_woods() {
        let map = GameMap::new(1, 1, Terrain::Land);
        let mut rogue = rogue_on(&map, AbilityKind::Backstab);
        let stats = AttackerStats::of(&rogue, &map);
        let mut defender = Hero::new(HeroId(1), HeroKind::Knight);

        // 200 * 0.9
        assert_eq!(rogue.abilities_mut()[0].apply(&stats, &mut defender, &map), 180);
    }

    #[test]
    fn test_paralysis_in_woods_lasts_six_rounds() {
        let map = GameMap::new(1, 1, Terrain::Woods);
        let mut rogue = rogue_on(&map, AbilityKind::Paralysis);
        let stats = AttackerStats::of(&rogue, &map);
        let mut defender = Hero::new(HeroId(1), HeroKind::Wizard);

        // 40 * 1.15 = 46, 46 * 1.25 = 57.5 -> 58
        let damage = rogue.abilities_mut()[0].apply(&stats, &mut defender, &map);
        assert_eq!(damage, 58);
        assert!(defender.is_stunned());
        assert_eq!(defender.passive_penalty().rounds_remaining(), 6);

        let _ = defender.apply_damage_taken();
        for _ in 0..6 {
            defender.apply_passive_penalty();
            assert!(defender.is_stunned());
        }
        assert_eq!(defender.damage_taken(), 6 * 58);

        defender.apply_passive_penalty();
        assert!(!defender.is_stunned());
    }

    #[test]
    fn test_paralysis_elsewhere_lasts_three_rounds() {
        let map = GameMap::new(1, 1, Terrain::Desert);
        let mut rogue = rogue_on(&map, AbilityKind::Paralysis);
        let stats = AttackerStats::of(&rogue, &map);
        let mut defender = Hero::new(HeroId(1), HeroKind::Knight);

        rogue.abilities_mut()[0].apply(&stats, &mut defender, &map);
        assert_eq!(defender.passive_penalty().rounds_remaining(), 3);
    }
}
