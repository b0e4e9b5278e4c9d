//! Modifier utilities shared by every ability
//!
//! Damage is computed in single precision and rounded after each scaling
//! stage, so the order of `scale` calls is part of every damage formula.

/// Fold the attacker's additive bonus into a per-archetype multiplier
pub fn adjust_hero_modifier(multiplicative: f32, additive: f32) -> f32 {
    multiplicative + additive
}

/// Round to nearest, ties toward positive infinity
pub fn round_half_up(value: f32) -> i32 {
    (value + 0.5).floor() as i32
}

/// Scale an integer damage value by `factor` and round
pub fn scale(damage: i32, factor: f32) -> i32 {
    round_half_up(factor * damage as f32)
}
