//! Angels - blessings placed on the map, dispatched on hero archetype

use crate::hero::{Hero, LifeTransition};
use crate::types::{HeroKind, Position};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Angel kinds available to the match driver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AngelKind {
    /// Raises the additive damage modifier
    DamageAngel,
    /// Restores HP
    LifeGiver,
    /// Grants enough XP for the next level
    LevelUpAngel,
}

impl AngelKind {
    pub fn all() -> &'static [AngelKind] {
        &[
            AngelKind::DamageAngel,
            AngelKind::LifeGiver,
            AngelKind::LevelUpAngel,
        ]
    }

    /// Resolve an angel by name; unknown names yield `None`
    pub fn from_name(name: &str) -> Option<AngelKind> {
        AngelKind::all().iter().copied().find(|kind| kind.name() == name)
    }

    pub fn name(&self) -> &'static str {
        match self {
            AngelKind::DamageAngel => "DamageAngel",
            AngelKind::LifeGiver => "LifeGiver",
            AngelKind::LevelUpAngel => "LevelUpAngel",
        }
    }
}

impl fmt::Display for AngelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An angel bound to a map cell
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Angel {
    kind: AngelKind,
    position: Position,
}

impl Angel {
    pub fn new(kind: AngelKind, position: Position) -> Self {
        Angel { kind, position }
    }

    /// Build an angel from its name; `None` for unknown names
    pub fn from_name(name: &str, position: Position) -> Option<Angel> {
        AngelKind::from_name(name).map(|kind| Angel::new(kind, position))
    }

    pub fn kind(&self) -> AngelKind {
        self.kind
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Apply the blessing to `hero`. Use [`Hero::accept_angel`] to skip dead heroes.
    pub fn apply(&self, hero: &mut Hero) -> LifeTransition {
        match self.kind {
            AngelKind::DamageAngel => {
                hero.increase_additive_modifier(damage_bonus(hero.kind()));
                LifeTransition::Stable
            }
            AngelKind::LifeGiver => hero.increase_hp(life_bonus(hero.kind())),
            AngelKind::LevelUpAngel => {
                hero.set_xp(hero.needed_xp_for_level_up());
                hero.level_up();
                hero.increase_additive_modifier(level_up_bonus(hero.kind()));
                LifeTransition::Stable
            }
        }
    }
}

fn damage_bonus(kind: HeroKind) -> f32 {
    match kind {
        HeroKind::Knight => 0.15,
        HeroKind::Pyromancer => 0.20,
        HeroKind::Rogue => 0.30,
        HeroKind::Wizard => 0.40,
    }
}

fn life_bonus(kind: HeroKind) -> i32 {
    match kind {
        HeroKind::Knight => 100,
        HeroKind::Pyromancer => 80,
        HeroKind::Rogue => 90,
        HeroKind::Wizard => 120,
    }
}

fn level_up_bonus(kind: HeroKind) -> f32 {
    match kind {
        HeroKind::Knight => 0.10,
        HeroKind::Pyromancer => 0.20,
        HeroKind::Rogue => 0.15,
        HeroKind::Wizard => 0.25,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::HeroId;

    #[test]
    fn test_from_name() {
        assert!(Angel::from_name("LifeGiver", Position::new(0, 0)).is_some());
        assert!(Angel::from_name("Dracula", Position::new(0, 0)).is_none());
        assert_eq!(AngelKind::from_name("DamageAngel"), Some(AngelKind::DamageAngel));
    }

    #[test]
    fn test_damage_angel() {
        let mut hero = Hero::new(HeroId(0), HeroKind::Rogue);
        let angel = Angel::new(AngelKind::DamageAngel, Position::new(0, 0));
        let _ = hero.accept_angel(&angel);
        assert!((hero.additive_modifier() - 0.30).abs() < 1e-6);
    }

    #[test]
    fn test_life_giver_respects_max_hp() {
        let mut hero = Hero::new(HeroId(0), HeroKind::Wizard);
        let angel = Angel::new(AngelKind::LifeGiver, Position::new(0, 0));

        let _ = hero.accept_angel(&angel);
        assert_eq!(hero.hp(), 400);

        let _ = hero.decrease_hp(200);
        let _ = hero.accept_angel(&angel);
        assert_eq!(hero.hp(), 320);
    }

    #[test]
    fn test_level_up_angel() {
        let mut hero = Hero::new(HeroId(0), HeroKind::Knight);
        let angel = Angel::new(AngelKind::LevelUpAngel, Position::new(0, 0));

        let _ = hero.accept_angel(&angel);
        assert_eq!(hero.level(), 1);
        assert_eq!(hero.xp(), 250);
        assert!((hero.additive_modifier() - 0.10).abs() < 1e-6);
    }

    #[test]
    fn test_dead_hero_ignores_angels() {
        let mut hero = Hero::new(HeroId(0), HeroKind::Knight);
        let _ = hero.set_hp(0);
        let angel = Angel::new(AngelKind::LifeGiver, Position::new(0, 0));

        assert_eq!(hero.accept_angel(&angel), LifeTransition::Stable);
        assert_eq!(hero.hp(), 0);
    }
}
