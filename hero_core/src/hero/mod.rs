//! Hero - combat entity owning abilities, passive state and progression

mod events;

pub use events::{HeroEvent, ListenerId};

use crate::ability::{Ability, AbilityKind};
use crate::angel::Angel;
use crate::config::{ArchetypeConstants, GameConstants, ProgressionConstants};
use crate::map::GameMap;
use crate::passive::PassivePenalty;
use crate::types::{EntityRef, EntityType, HeroId, HeroKind, Position};
use events::Listeners;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Life-state change caused by an HP update
#[must_use = "a `Died` transition carries the kill bonus owed to the attacker"]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifeTransition {
    /// Alive before and after, or dead before and after
    Stable,
    /// HP crossed from above zero to zero or below
    Died { attacker: Option<EntityRef> },
    /// HP crossed from zero or below to above zero
    Revived,
}

/// A hero taking part in a match
#[derive(Debug)]
pub struct Hero {
    // === Identity ===
    id: HeroId,
    kind: HeroKind,
    position: Position,

    // === Progression ===
    xp: i32,
    level: u32,

    // === Combat State ===
    hp: i32,
    /// Damage accumulated this round, committed by `apply_damage_taken`
    damage_taken: i32,
    stunned: bool,
    last_attacker: Option<EntityRef>,
    additive_modifier: f32,

    // === Abilities & Effects ===
    /// Cast order for damage enumeration
    abilities: Vec<Ability>,
    pub(crate) passive: PassivePenalty,

    // === Constants ===
    stats: ArchetypeConstants,
    progression: ProgressionConstants,

    listeners: Listeners,
}

impl Hero {
    /// Create a hero with the default constants and its archetype's abilities
    pub fn new(id: HeroId, kind: HeroKind) -> Self {
        Hero::with_constants(id, kind, &GameConstants::default())
    }

    /// Create a hero using the given constants.
    ///
    /// `constants` should have passed [`GameConstants::validate`].
    pub fn with_constants(id: HeroId, kind: HeroKind, constants: &GameConstants) -> Self {
        let stats = *constants.archetypes.get(kind);
        Hero {
            id,
            kind,
            position: Position::OFF_MAP,
            xp: 0,
            level: 0,
            hp: stats.initial_hp,
            damage_taken: 0,
            stunned: false,
            last_attacker: None,
            additive_modifier: 0.0,
            abilities: AbilityKind::roster(kind)
                .iter()
                .map(|ability| Ability::new(*ability, id))
                .collect(),
            passive: PassivePenalty::default(),
            stats,
            progression: constants.progression,
            listeners: Listeners::default(),
        }
    }

    /// Replace the ability set
    pub fn with_abilities(mut self, kinds: &[AbilityKind]) -> Self {
        let id = self.id;
        self.abilities = kinds.iter().map(|kind| Ability::new(*kind, id)).collect();
        self
    }

    // === Identity ===

    pub fn id(&self) -> HeroId {
        self.id
    }

    pub fn kind(&self) -> HeroKind {
        self.kind
    }

    pub fn entity_type(&self) -> EntityType {
        EntityType::Hero
    }

    pub fn entity_ref(&self) -> EntityRef {
        EntityRef::Hero(self.id)
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Store a new position. Map re-indexing is done by the arena.
    pub(crate) fn set_position_unchecked(&mut self, position: Position) {
        self.position = position;
    }

    /// Dead or stunned heroes stay where they are
    pub fn can_move(&self) -> bool {
        !self.is_dead() && !self.is_stunned()
    }

    // === Progression ===

    pub fn xp(&self) -> i32 {
        self.xp
    }

    pub fn set_xp(&mut self, xp: i32) {
        self.xp = xp;
    }

    pub fn increase_xp(&mut self, amount: i32) {
        self.xp += amount;
    }

    /// XP threshold for leaving the current level
    pub fn needed_xp_for_level_up(&self) -> i32 {
        self.progression.base_xp_for_level_up
            + self.level as i32 * self.progression.xp_multiplier_for_level_up
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Set the level; a living hero is healed to the new max HP
    pub fn set_level(&mut self, level: u32) {
        let old = self.level;
        if old != level {
            debug!(hero = %self, old, new = level, "level changed");
            self.emit(HeroEvent::LevelChanged { old, new: level });
        }
        self.level = level;

        if !self.is_dead() {
            // Max HP is positive, so this cannot kill or revive
            let _ = self.set_hp(self.max_hp());
        }
    }

    pub fn increase_level(&mut self) {
        self.set_level(self.level + 1);
    }

    /// Gain one level per threshold the current XP reaches.
    ///
    /// Returns the number of levels gained.
    pub fn level_up(&mut self) -> u32 {
        let start = self.level;
        while self.xp >= self.needed_xp_for_level_up() {
            let threshold = self.needed_xp_for_level_up();
            self.increase_level();
            // Unvalidated constants can leave the threshold flat
            if self.needed_xp_for_level_up() <= threshold {
                break;
            }
        }
        self.level - start
    }

    /// Award the kill bonus for a victim of `victim_level`.
    ///
    /// Killing lower-level heroes yields less XP, never below zero.
    pub fn on_kill(&mut self, victim_level: u32) -> i32 {
        let level_diff = self.level as i32 - victim_level as i32;
        let bonus = (self.progression.base_xp_for_kill_bonus
            - level_diff * self.progression.kill_bonus_multiplier)
            .max(0);
        self.increase_xp(bonus);
        bonus
    }

    // === Health ===

    pub fn hp(&self) -> i32 {
        self.hp
    }

    pub fn max_hp(&self) -> i32 {
        self.stats.initial_hp + self.level as i32 * self.stats.hp_per_level
    }

    pub fn is_dead(&self) -> bool {
        self.hp <= 0
    }

    /// Store HP clamped to `max_hp`, firing revival and death notifications
    pub fn set_hp(&mut self, hp: i32) -> LifeTransition {
        let was_dead = self.is_dead();
        if hp > 0 && was_dead {
            debug!(hero = %self, "revived");
            self.emit(HeroEvent::Revived);
        }

        // No lower clamp: negative HP is how far past death the hero is
        self.hp = hp.min(self.max_hp());

        match (was_dead, self.is_dead()) {
            (false, true) => {
                let attacker = self.last_attacker;
                debug!(hero = %self, ?attacker, "died");
                self.emit(HeroEvent::Death { attacker });
                LifeTransition::Died { attacker }
            }
            (true, false) => LifeTransition::Revived,
            _ => LifeTransition::Stable,
        }
    }

    pub fn increase_hp(&mut self, amount: i32) -> LifeTransition {
        self.set_hp(self.hp + amount)
    }

    pub fn decrease_hp(&mut self, amount: i32) -> LifeTransition {
        self.set_hp(self.hp - amount)
    }

    // === Pending Damage ===

    /// Damage taken this round but not yet applied
    pub fn damage_taken(&self) -> i32 {
        self.damage_taken
    }

    pub fn set_damage_taken(&mut self, damage: i32) {
        self.damage_taken = damage;
    }

    pub fn increase_damage_taken(&mut self, amount: i32) {
        self.damage_taken += amount;
    }

    /// Commit the round's accumulated damage to HP and reset the accumulator
    pub fn apply_damage_taken(&mut self) -> LifeTransition {
        let transition = self.decrease_hp(self.damage_taken);
        self.damage_taken = 0;
        transition
    }

    // === Status ===

    pub fn is_stunned(&self) -> bool {
        self.stunned
    }

    pub fn set_stunned(&mut self, stunned: bool) {
        self.stunned = stunned;
    }

    pub fn last_attacker(&self) -> Option<EntityRef> {
        self.last_attacker
    }

    pub fn set_last_attacker(&mut self, attacker: Option<EntityRef>) {
        self.last_attacker = attacker;
    }

    pub fn passive_penalty(&self) -> &PassivePenalty {
        &self.passive
    }

    // === Modifiers ===

    pub fn additive_modifier(&self) -> f32 {
        self.additive_modifier
    }

    pub fn set_additive_modifier(&mut self, modifier: f32) {
        self.additive_modifier = modifier;
    }

    pub fn increase_additive_modifier(&mut self, amount: f32) {
        self.additive_modifier += amount;
    }

    pub fn decrease_additive_modifier(&mut self, amount: f32) {
        self.additive_modifier -= amount;
    }

    /// Terrain bonus for the cell the hero stands on; 1.0 elsewhere or off-map
    pub fn land_modifier(&self, map: &GameMap) -> f32 {
        match map.surface(self.position) {
            Some(terrain) if terrain == self.stats.terrain => self.stats.land_modifier,
            _ => 1.0,
        }
    }

    // === Abilities & Angels ===

    pub fn abilities(&self) -> &[Ability] {
        &self.abilities
    }

    pub fn abilities_mut(&mut self) -> &mut [Ability] {
        &mut self.abilities
    }

    pub fn add_ability(&mut self, kind: AbilityKind) {
        self.abilities.push(Ability::new(kind, self.id));
    }

    /// Receive an angel's blessing. Dead heroes are not affected.
    pub fn accept_angel(&mut self, angel: &Angel) -> LifeTransition {
        if self.is_dead() {
            return LifeTransition::Stable;
        }
        angel.apply(self)
    }

    // === Notifications ===

    /// Register a listener for level, death and revival events
    pub fn add_listener<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(HeroId, &HeroEvent) + 'static,
    {
        self.listeners.add(Box::new(listener))
    }

    /// Deregister a listener. Returns false if it was not registered.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn emit(&mut self, event: HeroEvent) {
        let source = self.id;
        self.listeners.notify(source, &event);
    }

    /// Plain-data view of the hero's state
    pub fn snapshot(&self) -> HeroSnapshot {
        HeroSnapshot {
            id: self.id,
            kind: self.kind,
            position: self.position,
            level: self.level,
            xp: self.xp,
            hp: self.hp,
            max_hp: self.max_hp(),
            damage_taken: self.damage_taken,
            stunned: self.stunned,
            additive_modifier: self.additive_modifier,
            abilities: self.abilities.iter().map(Ability::kind).collect(),
        }
    }
}

impl fmt::Display for Hero {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind, self.id)
    }
}

/// Serializable view of a hero
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroSnapshot {
    pub id: HeroId,
    pub kind: HeroKind,
    pub position: Position,
    pub level: u32,
    pub xp: i32,
    pub hp: i32,
    pub max_hp: i32,
    pub damage_taken: i32,
    pub stunned: bool,
    pub additive_modifier: f32,
    pub abilities: Vec<AbilityKind>,
}

impl HeroSnapshot {
    pub fn is_dead(&self) -> bool {
        self.hp <= 0
    }
}
