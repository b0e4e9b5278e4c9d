//! Prelude module for convenient imports
//!
//! ```rust
//! use hero_core::prelude::*;
//! ```

// Core types
pub use crate::types::{Direction, EntityRef, HeroId, HeroKind, Position, Terrain};

// Heroes
pub use crate::hero::{Hero, HeroEvent, LifeTransition};

// Abilities and effects
pub use crate::ability::{Ability, AbilityKind};
pub use crate::angel::{Angel, AngelKind};
pub use crate::passive::PassiveAction;

// Match
pub use crate::arena::{Arena, RoundReport};
pub use crate::map::GameMap;

// Config
pub use crate::config::GameConstants;
