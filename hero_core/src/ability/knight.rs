//! Knight abilities: Execute and Slam

use super::{Ability, AttackerStats};
use crate::hero::Hero;
use crate::modifier::round_half_up;
use crate::passive::PassiveAction;

const EXECUTE_BASE_HP_LIMIT_PERCENT: i32 = 20;
const EXECUTE_HP_LIMIT_PERCENT_PER_LEVEL: i32 = 1;
const EXECUTE_MAX_HP_LIMIT_PERCENT: i32 = 40;

const SLAM_STUN_ROUNDS: u32 = 1;

/// Finish off a defender under the HP limit, otherwise hit for scaled damage
pub(super) fn execute(
    ability: &Ability,
    attacker: &AttackerStats,
    defender: &mut Hero,
    hero_modifier: f32,
) -> i32 {
    let limit_percent = (EXECUTE_BASE_HP_LIMIT_PERCENT
        + attacker.level as i32 * EXECUTE_HP_LIMIT_PERCENT_PER_LEVEL)
        .min(EXECUTE_MAX_HP_LIMIT_PERCENT);
    let hp_limit = round_half_up(limit_percent as f32 / 100.0 * defender.max_hp() as f32);

    let damage = if defender.hp() < hp_limit {
        // Instant kill ignores every modifier
        defender.hp()
    } else {
        attacker.scale_damage(
            ability.compute_damage_without_modifiers(attacker.level),
            hero_modifier,
        )
    };

    defender.increase_damage_taken(damage);
    damage
}

/// Hit and stun the defender for one round
pub(super) fn slam(
    ability: &Ability,
    attacker: &AttackerStats,
    defender: &mut Hero,
    hero_modifier: f32,
) -> i32 {
    let damage = attacker.scale_damage(
        ability.compute_damage_without_modifiers(attacker.level),
        hero_modifier,
    );

    defender.set_passive_penalty(SLAM_STUN_ROUNDS, None, Some(PassiveAction::Unstun));
    defender.set_stunned(true);
    defender.increase_damage_taken(damage);
    damage
}
