//! Arena - hero storage, map ownership and the round driver
//!
//! The arena is the single owner of every hero and of the map. Heroes are
//! addressed by [`HeroId`]; the map only stores ids, so moving or killing a
//! hero never leaves a dangling reference.
//!
//! A round runs in a fixed order:
//! 1. passive penalties tick ([`Arena::begin_round`])
//! 2. movement and casts accumulate pending damage
//! 3. pending damage is committed and kill bonuses awarded ([`Arena::end_round`])
//! 4. heroes level up, then abilities receive their `next_turn` hook

mod report;

pub use report::{DamageCommitted, Death, KillBonus, LevelUp, RoundReport};

use crate::ability::AttackerStats;
use crate::angel::Angel;
use crate::config::{ConfigError, GameConstants};
use crate::hero::{Hero, HeroSnapshot, LifeTransition};
use crate::map::GameMap;
use crate::types::{AngelId, Direction, EntityRef, HeroId, HeroKind, Position};
use thiserror::Error;
use tracing::debug;

/// Invalid request made to the arena
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArenaError {
    #[error("Unknown hero {0}")]
    UnknownHero(HeroId),
    #[error("Hero {0} cannot target itself")]
    SelfTarget(HeroId),
    #[error("Hero {hero} has no ability in slot {slot}")]
    UnknownAbility { hero: HeroId, slot: usize },
    #[error("Position ({x}, {y}) is outside the map")]
    OutOfBounds { x: i32, y: i32 },
}

/// A match in progress
#[derive(Debug)]
pub struct Arena {
    map: GameMap,
    heroes: Vec<Hero>,
    /// Angels standing on the map this round, indexed by `AngelId`
    angels: Vec<Angel>,
    constants: GameConstants,
    round: u32,
    report: RoundReport,
}

impl Arena {
    pub fn new(map: GameMap) -> Self {
        Arena::build(map, GameConstants::default())
    }

    /// Create an arena with custom constants, rejecting values that break
    /// the hero invariants
    pub fn with_constants(map: GameMap, constants: GameConstants) -> Result<Self, ConfigError> {
        constants.validate()?;
        Ok(Arena::build(map, constants))
    }

    fn build(map: GameMap, constants: GameConstants) -> Self {
        Arena {
            map,
            heroes: Vec::new(),
            angels: Vec::new(),
            constants,
            round: 0,
            report: RoundReport::new(0),
        }
    }

    pub fn map(&self) -> &GameMap {
        &self.map
    }

    pub fn constants(&self) -> &GameConstants {
        &self.constants
    }

    /// Number of rounds started so far
    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn heroes(&self) -> &[Hero] {
        &self.heroes
    }

    pub fn living_heroes(&self) -> impl Iterator<Item = &Hero> {
        self.heroes.iter().filter(|hero| !hero.is_dead())
    }

    pub fn hero(&self, id: HeroId) -> Result<&Hero, ArenaError> {
        self.heroes.get(id.0).ok_or(ArenaError::UnknownHero(id))
    }

    /// Direct access to a hero.
    ///
    /// Deaths caused through this handle are not recorded and pay no kill
    /// bonus; use [`Arena::set_hp`] or [`Arena::commit_damage`] for HP changes.
    pub fn hero_mut(&mut self, id: HeroId) -> Result<&mut Hero, ArenaError> {
        self.heroes.get_mut(id.0).ok_or(ArenaError::UnknownHero(id))
    }

    /// Angels placed this round
    pub fn angels(&self) -> &[Angel] {
        &self.angels
    }

    /// Set a hero's HP, recording a death and paying the kill bonus
    pub fn set_hp(&mut self, id: HeroId, hp: i32) -> Result<LifeTransition, ArenaError> {
        let transition = self.hero_mut(id)?.set_hp(hp);
        self.route(id, transition);
        Ok(transition)
    }

    /// Commit one hero's pending damage before the end of the round
    pub fn commit_damage(&mut self, id: HeroId) -> Result<LifeTransition, ArenaError> {
        let transition = self.hero_mut(id)?.apply_damage_taken();
        self.route(id, transition);
        Ok(transition)
    }

    fn check_position(&self, position: Position) -> Result<(), ArenaError> {
        if position == Position::OFF_MAP || self.map.contains(position) {
            Ok(())
        } else {
            Err(ArenaError::OutOfBounds {
                x: position.x,
                y: position.y,
            })
        }
    }

    /// Add a hero at `position` with its archetype's abilities
    pub fn spawn_hero(&mut self, kind: HeroKind, position: Position) -> Result<HeroId, ArenaError> {
        self.check_position(position)?;

        let id = HeroId(self.heroes.len());
        let mut hero = Hero::with_constants(id, kind, &self.constants);
        self.map.relocate(hero.entity_ref(), Position::OFF_MAP, position);
        hero.set_position_unchecked(position);

        debug!(hero = %hero, x = position.x, y = position.y, "hero spawned");
        self.heroes.push(hero);
        Ok(id)
    }

    /// Move a hero and re-index it on the map in one step.
    ///
    /// Returns `Ok(false)` without moving when the hero is dead or stunned.
    pub fn set_position(&mut self, id: HeroId, position: Position) -> Result<bool, ArenaError> {
        if !self.hero(id)?.can_move() {
            return Ok(false);
        }
        self.check_position(position)?;

        let hero = &mut self.heroes[id.0];
        self.map.relocate(hero.entity_ref(), hero.position(), position);
        hero.set_position_unchecked(position);
        Ok(true)
    }

    pub fn move_hero(&mut self, id: HeroId, direction: Direction) -> Result<bool, ArenaError> {
        let target = self.hero(id)?.position().step(direction);
        self.set_position(id, target)
    }

    /// Cast the ability in `slot` of `attacker` on `defender`.
    ///
    /// Returns the direct damage added to the defender's pending damage.
    /// Casting from or onto a dead hero does nothing.
    pub fn cast(&mut self, attacker: HeroId, slot: usize, defender: HeroId) -> Result<i32, ArenaError> {
        let (source, target) = pair_mut(&mut self.heroes, attacker, defender)?;
        if slot >= source.abilities().len() {
            return Err(ArenaError::UnknownAbility { hero: attacker, slot });
        }
        if source.is_dead() || target.is_dead() {
            return Ok(0);
        }

        let stats = AttackerStats::of(source, &self.map);
        target.set_last_attacker(Some(source.entity_ref()));
        let damage = source.abilities_mut()[slot].apply(&stats, target, &self.map);

        debug!(
            attacker = %source,
            defender = %target,
            ability = %source.abilities()[slot].kind(),
            damage,
            "cast"
        );
        Ok(damage)
    }

    /// Every ability of `first` on `second`, then every ability of `second` on `first`
    pub fn fight(&mut self, first: HeroId, second: HeroId) -> Result<(), ArenaError> {
        for slot in 0..self.hero(first)?.abilities().len() {
            self.cast(first, slot, second)?;
        }
        for slot in 0..self.hero(second)?.abilities().len() {
            self.cast(second, slot, first)?;
        }
        Ok(())
    }

    /// Fight every cell holding exactly two living heroes.
    ///
    /// Returns the number of fights.
    pub fn resolve_fights(&mut self) -> Result<usize, ArenaError> {
        let pairs: Vec<(HeroId, HeroId)> = self
            .map
            .positions()
            .filter_map(|position| {
                let living: Vec<HeroId> = self
                    .map
                    .heroes_at(position)
                    .filter(|id| !self.heroes[id.0].is_dead())
                    .collect();
                match living.as_slice() {
                    [first, second] => Some((*first, *second)),
                    _ => None,
                }
            })
            .collect();

        for (first, second) in &pairs {
            self.fight(*first, *second)?;
        }
        Ok(pairs.len())
    }

    /// Place an angel for this round and bless the living heroes on its cell.
    ///
    /// Returns the heroes that received the blessing.
    pub fn bless(&mut self, angel: Angel) -> Result<Vec<HeroId>, ArenaError> {
        let position = angel.position();
        if !self.map.contains(position) {
            return Err(ArenaError::OutOfBounds {
                x: position.x,
                y: position.y,
            });
        }

        let id = AngelId(self.angels.len());
        self.angels.push(angel);
        self.map.relocate(EntityRef::Angel(id), Position::OFF_MAP, position);

        let targets: Vec<HeroId> = self.map.heroes_at(position).collect();
        let mut blessed = Vec::new();
        for target in targets {
            let hero = &mut self.heroes[target.0];
            if hero.is_dead() {
                continue;
            }
            let transition = hero.accept_angel(&angel);
            debug!(angel = %angel.kind(), hero = %hero, "blessed");
            self.route(target, transition);
            blessed.push(target);
        }
        Ok(blessed)
    }

    /// Start a round: tick every hero's passive penalty
    pub fn begin_round(&mut self) {
        self.round += 1;
        self.report = RoundReport::new(self.round);

        for hero in &mut self.heroes {
            hero.apply_passive_penalty();
        }
    }

    /// Finish a round: commit pending damage, level up, advance abilities
    pub fn end_round(&mut self) -> RoundReport {
        for index in 0..self.heroes.len() {
            let hero = &mut self.heroes[index];
            let amount = hero.damage_taken();
            let hp_before = hero.hp();
            let transition = hero.apply_damage_taken();

            if amount != 0 {
                self.report.damage_committed.push(DamageCommitted {
                    hero: HeroId(index),
                    amount,
                    hp_before,
                    hp_after: self.heroes[index].hp(),
                });
            }
            self.route(HeroId(index), transition);
        }

        for hero in &mut self.heroes {
            let levels = hero.level_up();
            if levels > 0 {
                self.report.level_ups.push(LevelUp {
                    hero: hero.id(),
                    levels,
                    new_level: hero.level(),
                });
            }
            for ability in hero.abilities_mut() {
                ability.next_turn();
            }
        }

        for (index, angel) in self.angels.drain(..).enumerate() {
            self.map
                .relocate(EntityRef::Angel(AngelId(index)), angel.position(), Position::OFF_MAP);
        }

        debug!(summary = %self.report.summary(), "round finished");
        std::mem::replace(&mut self.report, RoundReport::new(self.round))
    }

    /// Run a full round with the given moves.
    ///
    /// Unknown heroes are rejected before anything changes. Once started the
    /// round always completes; a move off the map is skipped.
    pub fn play_round(&mut self, moves: &[(HeroId, Direction)]) -> Result<RoundReport, ArenaError> {
        for (id, _) in moves {
            self.hero(*id)?;
        }

        self.begin_round();
        for (id, direction) in moves {
            if let Err(err) = self.move_hero(*id, *direction) {
                debug!(hero = %id, %err, "move skipped");
            }
        }
        self.resolve_fights()?;
        Ok(self.end_round())
    }

    pub fn snapshot(&self) -> Vec<HeroSnapshot> {
        self.heroes.iter().map(Hero::snapshot).collect()
    }

    /// Record a death and pay the kill bonus to a hero attacker
    fn route(&mut self, victim: HeroId, transition: LifeTransition) {
        let LifeTransition::Died { attacker } = transition else {
            return;
        };
        self.report.deaths.push(Death { victim, attacker });

        let Some(killer) = attacker.and_then(|a| a.as_hero()) else {
            return;
        };
        let victim_level = self.heroes[victim.0].level();
        if let Some(hero) = self.heroes.get_mut(killer.0) {
            let xp = hero.on_kill(victim_level);
            debug!(killer = %hero, victim = %victim, xp, "kill bonus");
            self.report.kill_bonuses.push(KillBonus { killer, victim, xp });
        }
    }
}

/// Borrow two distinct heroes mutably
fn pair_mut(
    heroes: &mut [Hero],
    first: HeroId,
    second: HeroId,
) -> Result<(&mut Hero, &mut Hero), ArenaError> {
    if first == second {
        return Err(ArenaError::SelfTarget(first));
    }
    for id in [first, second] {
        if id.0 >= heroes.len() {
            return Err(ArenaError::UnknownHero(id));
        }
    }

    if first.0 < second.0 {
        let (left, right) = heroes.split_at_mut(second.0);
        Ok((&mut left[first.0], &mut right[0]))
    } else {
        let (left, right) = heroes.split_at_mut(first.0);
        Ok((&mut right[0], &mut left[second.0]))
    }
}
