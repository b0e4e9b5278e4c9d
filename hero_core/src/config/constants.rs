//! Game constants configuration

use super::ConfigError;
use crate::types::{HeroKind, Terrain};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Tunable game constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConstants {
    #[serde(default)]
    pub progression: ProgressionConstants,
    #[serde(default)]
    pub archetypes: ArchetypeTable,
}

impl Default for GameConstants {
    fn default() -> Self {
        GameConstants {
            progression: ProgressionConstants::default(),
            archetypes: ArchetypeTable::default(),
        }
    }
}

impl GameConstants {
    /// Parse constants from a TOML string and validate them
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let constants: GameConstants = super::parse_toml(content)?;
        constants.validate()?;
        Ok(constants)
    }

    /// Reject constants that would break the hero invariants
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.progression.base_xp_for_level_up <= 0 {
            return Err(ConfigError::ValidationError(
                "base_xp_for_level_up must be positive".to_string(),
            ));
        }
        if self.progression.xp_multiplier_for_level_up <= 0 {
            return Err(ConfigError::ValidationError(
                "xp_multiplier_for_level_up must be positive".to_string(),
            ));
        }

        for kind in HeroKind::all() {
            let stats = self.archetypes.get(*kind);
            if stats.initial_hp <= 0 {
                return Err(ConfigError::ValidationError(format!(
                    "{} initial_hp must be positive",
                    kind
                )));
            }
            if stats.hp_per_level < 0 {
                return Err(ConfigError::ValidationError(format!(
                    "{} hp_per_level must not be negative",
                    kind
                )));
            }
            if stats.land_modifier <= 0.0 {
                return Err(ConfigError::ValidationError(format!(
                    "{} land_modifier must be positive",
                    kind
                )));
            }
        }

        Ok(())
    }
}

/// Load game constants from a TOML file
pub fn load_game_constants(path: &Path) -> Result<GameConstants, ConfigError> {
    let constants: GameConstants = super::load_toml(path)?;
    constants.validate()?;
    Ok(constants)
}

/// XP thresholds and kill rewards
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProgressionConstants {
    /// XP needed to leave level 0
    #[serde(default = "default_base_xp_for_level_up")]
    pub base_xp_for_level_up: i32,
    /// Extra XP needed per level already reached
    #[serde(default = "default_xp_multiplier_for_level_up")]
    pub xp_multiplier_for_level_up: i32,
    /// XP awarded for killing a hero of the same level
    #[serde(default = "default_base_xp_for_kill_bonus")]
    pub base_xp_for_kill_bonus: i32,
    /// XP removed from the kill bonus per level the killer is above the victim
    #[serde(default = "default_kill_bonus_multiplier")]
    pub kill_bonus_multiplier: i32,
}

impl Default for ProgressionConstants {
    fn default() -> Self {
        ProgressionConstants {
            base_xp_for_level_up: 250,
            xp_multiplier_for_level_up: 50,
            base_xp_for_kill_bonus: 200,
            kill_bonus_multiplier: 40,
        }
    }
}

fn default_base_xp_for_level_up() -> i32 {
    250
}
fn default_xp_multiplier_for_level_up() -> i32 {
    50
}
fn default_base_xp_for_kill_bonus() -> i32 {
    200
}
fn default_kill_bonus_multiplier() -> i32 {
    40
}

/// Fixed stats of one archetype
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArchetypeConstants {
    pub initial_hp: i32,
    pub hp_per_level: i32,
    /// Terrain on which the land modifier applies
    pub terrain: Terrain,
    pub land_modifier: f32,
}

/// Archetype stats, one table per hero kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArchetypeTable {
    #[serde(default = "default_knight")]
    pub knight: ArchetypeConstants,
    #[serde(default = "default_pyromancer")]
    pub pyromancer: ArchetypeConstants,
    #[serde(default = "default_rogue")]
    pub rogue: ArchetypeConstants,
    #[serde(default = "default_wizard")]
    pub wizard: ArchetypeConstants,
}

impl ArchetypeTable {
    pub fn get(&self, kind: HeroKind) -> &ArchetypeConstants {
        match kind {
            HeroKind::Knight => &self.knight,
            HeroKind::Pyromancer => &self.pyromancer,
            HeroKind::Rogue => &self.rogue,
            HeroKind::Wizard => &self.wizard,
        }
    }
}

impl Default for ArchetypeTable {
    fn default() -> Self {
        ArchetypeTable {
            knight: default_knight(),
            pyromancer: default_pyromancer(),
            rogue: default_rogue(),
            wizard: default_wizard(),
        }
    }
}

fn default_knight() -> ArchetypeConstants {
    ArchetypeConstants {
        initial_hp: 900,
        hp_per_level: 80,
        terrain: Terrain::Land,
        land_modifier: 1.15,
    }
}
fn default_pyromancer() -> ArchetypeConstants {
    ArchetypeConstants {
        initial_hp: 500,
        hp_per_level: 50,
        terrain: Terrain::Volcanic,
        land_modifier: 1.25,
    }
}
fn default_rogue() -> ArchetypeConstants {
    ArchetypeConstants {
        initial_hp: 600,
        hp_per_level: 40,
        terrain: Terrain::Woods,
        land_modifier: 1.15,
    }
}
fn default_wizard() -> ArchetypeConstants {
    ArchetypeConstants {
        initial_hp: 400,
        hp_per_level: 30,
        terrain: Terrain::Desert,
        land_modifier: 1.10,
    }
}
