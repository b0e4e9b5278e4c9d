//! Wizard abilities: Drain and Deflect

use super::AttackerStats;
use crate::hero::Hero;
use crate::map::GameMap;
use crate::modifier::round_half_up;

const PERCENT: f32 = 1.00 / 100.00;

const DRAIN_BASE_PERCENT: i32 = 20;
const DRAIN_PERCENT_PER_LEVEL: i32 = 5;
/// Share of the defender's max HP Drain can reach
const DRAIN_MAX_HP_SHARE: f32 = 0.3;

const DEFLECT_BASE_PERCENT: i32 = 35;
const DEFLECT_PERCENT_PER_LEVEL: i32 = 2;
const DEFLECT_MAX_PERCENT: i32 = 70;

/// Take a share of the defender's remaining HP, bounded by its max HP
pub(super) fn drain(attacker: &AttackerStats, defender: &mut Hero, hero_modifier: f32) -> i32 {
    let percent =
        PERCENT * (DRAIN_BASE_PERCENT + attacker.level as i32 * DRAIN_PERCENT_PER_LEVEL) as f32;
    let base_hp = round_half_up(DRAIN_MAX_HP_SHARE * defender.max_hp() as f32).min(defender.hp());

    let mut damage = percent * base_hp as f32;
    damage *= attacker.adjusted(hero_modifier) * attacker.land_modifier;

    let damage = round_half_up(damage);
    defender.increase_damage_taken(damage);
    damage
}

/// Reflect a share of what the defender's own abilities could deal
pub(super) fn deflect(
    attacker: &AttackerStats,
    defender: &mut Hero,
    hero_modifier: f32,
    map: &GameMap,
) -> i32 {
    let percent = ((DEFLECT_BASE_PERCENT + attacker.level as i32 * DEFLECT_PERCENT_PER_LEVEL)
        as f32)
        .min(DEFLECT_MAX_PERCENT as f32);
    let percent = PERCENT * percent;

    let defender_land_modifier = defender.land_modifier(map);
    let defender_level = defender.level();
    let potential: i32 = defender
        .abilities()
        .iter()
        .map(|ability| {
            round_half_up(
                defender_land_modifier * ability.compute_damage_without_modifiers(defender_level) as f32,
            )
        })
        .sum();

    let mut damage = percent * potential as f32;
    damage *= attacker.adjusted(hero_modifier) * attacker.land_modifier;

    let damage = round_half_up(damage);
    defender.increase_damage_taken(damage);
    damage
}

#[cfg(test)]
mod tests {
    use crate::ability::{AbilityKind, AttackerStats};
    use crate::hero::Hero;
    use crate::map::GameMap;
    use crate::types::{HeroId, HeroKind, Position, Terrain};

    fn wizard(ability: AbilityKind) -> Hero {
        Hero::new(HeroId(0), HeroKind::Wizard).with_abilities(&[ability])
    }

    #[test]
    fn test_deflect_knight_scenario() {
        let map = GameMap::new(1, 1, Terrain::Desert);
        let mut attacker = wizard(AbilityKind::Deflect);
        // A level-0 Slam is worth exactly 100 before modifiers
        let mut defender =
            Hero::new(HeroId(1), HeroKind::Knight).with_abilities(&[AbilityKind::Slam]);
        let stats = AttackerStats::of(&attacker, &map);

        // 0.35 * 100 * 1.40
        let damage = attacker.abilities_mut()[0].apply(&stats, &mut defender, &map);
        assert_eq!(damage, 49);
        assert_eq!(defender.damage_taken(), 49);
    }

    #[test]
    fn test_deflect_ignores_wizards() {
        let map = GameMap::new(1, 1, Terrain::Desert);
        let mut attacker = wizard(AbilityKind::Deflect);
        attacker.set_position_unchecked(Position::new(0, 0));
        attacker.set_level(10);
        attacker.set_additive_modifier(2.0);
        let mut defender = Hero::new(HeroId(1), HeroKind::Wizard);
        let stats = AttackerStats::of(&attacker, &map);

        let damage = attacker.abilities_mut()[0].apply(&stats, &mut defender, &map);
        assert_eq!(damage, 0);
        assert_eq!(defender.damage_taken(), 0);
    }

    #[test]
    fn test_deflect_uses_defender_roster_and_terrain() {
        let map = GameMap::new(1, 1, Terrain::Volcanic);
        let mut attacker = wizard(AbilityKind::Deflect);
        let mut defender = Hero::new(HeroId(1), HeroKind::Pyromancer);
        defender.set_position_unchecked(Position::new(0, 0));
        let stats = AttackerStats::of(&attacker, &map);

        // Fireblast 350 * 1.25 = 437.5 -> 438, Ignite 150 * 1.25 = 187.5 -> 188
        // 0.35 * 626 * 1.30 = 284.83 -> 285
        let damage = attacker.abilities_mut()[0].apply(&stats, &mut defender, &map);
        assert_eq!(damage, 285);
    }

    #[test]
    fn test_deflect_percent_is_capped() {
        let map = GameMap::new(1, 1, Terrain::Land);
        let mut attacker = wizard(AbilityKind::Deflect);
        // 35 + 2 * 30 = 95, capped at 70
        attacker.set_level(30);
        let mut defender =
            Hero::new(HeroId(1), HeroKind::Rogue).with_abilities(&[AbilityKind::Slam]);
        let stats = AttackerStats::of(&attacker, &map);

        // 0.70 * 100 * 1.20 = 84
        let damage = attacker.abilities_mut()[0].apply(&stats, &mut defender, &map);
        assert_eq!(damage, 84);
    }

    #[test]
    fn test_drain_scales_with_defender_hp() {
        let map = GameMap::new(1, 1, Terrain::Land);
        let mut attacker = wizard(AbilityKind::Drain);
        let mut defender = Hero::new(HeroId(1), HeroKind::Knight);
        let stats = AttackerStats::of(&attacker, &map);

        // 0.20 * min(270, 900) * 1.20 = 64.8 -> 65
        let damage = attacker.abilities_mut()[0].apply(&stats, &mut defender, &map);
        assert_eq!(damage, 65);

        // Wounded defender: 0.20 * 100 * 1.20 = 24
        let mut wounded = Hero::new(HeroId(2), HeroKind::Knight);
        let _ = wounded.set_hp(100);
        let damage = attacker.abilities_mut()[0].apply(&stats, &mut wounded, &map);
        assert_eq!(damage, 24);
    }
}
