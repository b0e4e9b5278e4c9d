//! hero_core - Turn-based hero combat core
//!
//! This library provides:
//! - Hero: archetype-based combat entity with XP, levels, HP and listeners
//! - Ability: per-archetype effects resolved by double dispatch on the defender
//! - PassivePenalty: stun and damage-over-time lifecycle
//! - Angel: map blessings dispatched on the hero archetype
//! - Arena: hero storage, movement and the round driver

pub mod ability;
pub mod angel;
pub mod arena;
pub mod config;
pub mod hero;
pub mod map;
pub mod modifier;
pub mod passive;
pub mod prelude;
pub mod types;

// Re-export core types for convenience
pub use ability::{Ability, AbilityKind, AttackerStats};
pub use angel::{Angel, AngelKind};
pub use arena::{Arena, ArenaError, RoundReport};
pub use config::{ConfigError, GameConstants};
pub use hero::{Hero, HeroEvent, HeroSnapshot, LifeTransition, ListenerId};
pub use map::{GameMap, MapError};
pub use passive::{PassiveAction, PassivePenalty, PassiveState};
pub use types::{AngelId, Direction, EntityRef, EntityType, HeroId, HeroKind, Position, Terrain};
