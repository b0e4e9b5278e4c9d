//! Core types shared across the combat core

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a hero inside an [`Arena`](crate::arena::Arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct HeroId(pub usize);

impl fmt::Display for HeroId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of an angel placed on the map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AngelId(pub usize);

/// Hero archetype - the dispatch key for ability and angel tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeroKind {
    Knight,
    Pyromancer,
    Rogue,
    Wizard,
}

impl HeroKind {
    /// Get all archetypes
    pub fn all() -> &'static [HeroKind] {
        &[
            HeroKind::Knight,
            HeroKind::Pyromancer,
            HeroKind::Rogue,
            HeroKind::Wizard,
        ]
    }

    /// Resolve an archetype by full name or single-letter code.
    ///
    /// Unknown names yield `None`; callers must check before constructing a hero.
    pub fn from_name(name: &str) -> Option<HeroKind> {
        match name {
            "Knight" | "K" => Some(HeroKind::Knight),
            "Pyromancer" | "P" => Some(HeroKind::Pyromancer),
            "Rogue" | "R" => Some(HeroKind::Rogue),
            "Wizard" | "W" => Some(HeroKind::Wizard),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            HeroKind::Knight => "Knight",
            HeroKind::Pyromancer => "Pyromancer",
            HeroKind::Rogue => "Rogue",
            HeroKind::Wizard => "Wizard",
        }
    }
}

impl fmt::Display for HeroKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Terrain of a single map cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Terrain {
    Land,
    Volcanic,
    Desert,
    Woods,
}

impl Terrain {
    /// Parse the one-letter map symbol
    pub fn from_symbol(symbol: char) -> Option<Terrain> {
        match symbol {
            'L' => Some(Terrain::Land),
            'V' => Some(Terrain::Volcanic),
            'D' => Some(Terrain::Desert),
            'W' => Some(Terrain::Woods),
            _ => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Terrain::Land => 'L',
            Terrain::Volcanic => 'V',
            Terrain::Desert => 'D',
            Terrain::Woods => 'W',
        }
    }
}

/// Grid position. `(-1, -1)` means the entity is not on the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const OFF_MAP: Position = Position { x: -1, y: -1 };

    pub fn new(x: i32, y: i32) -> Self {
        Position { x, y }
    }

    /// Either coordinate at -1 takes the entity off the map
    pub fn is_off_map(&self) -> bool {
        self.x == -1 || self.y == -1
    }

    /// The neighbouring position one step in `direction`
    pub fn step(self, direction: Direction) -> Position {
        match direction {
            Direction::Up => Position::new(self.x, self.y - 1),
            Direction::Down => Position::new(self.x, self.y + 1),
            Direction::Left => Position::new(self.x - 1, self.y),
            Direction::Right => Position::new(self.x + 1, self.y),
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::OFF_MAP
    }
}

/// Movement direction on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Parse a one-letter move code; `_` and unknown letters mean "stay"
    pub fn from_symbol(symbol: char) -> Option<Direction> {
        match symbol {
            'U' => Some(Direction::Up),
            'D' => Some(Direction::Down),
            'L' => Some(Direction::Left),
            'R' => Some(Direction::Right),
            _ => None,
        }
    }
}

/// Discriminator for anything that can be placed on the map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    Hero,
    Angel,
}

/// Index-based reference to a placeable entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "id", rename_all = "snake_case")]
pub enum EntityRef {
    Hero(HeroId),
    Angel(AngelId),
}

impl EntityRef {
    pub fn entity_type(&self) -> EntityType {
        match self {
            EntityRef::Hero(_) => EntityType::Hero,
            EntityRef::Angel(_) => EntityType::Angel,
        }
    }

    /// The hero id, if this entity is a hero
    pub fn as_hero(&self) -> Option<HeroId> {
        match self {
            EntityRef::Hero(id) => Some(*id),
            EntityRef::Angel(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hero_kind_from_name() {
        assert_eq!(HeroKind::from_name("Knight"), Some(HeroKind::Knight));
        assert_eq!(HeroKind::from_name("W"), Some(HeroKind::Wizard));
        assert_eq!(HeroKind::from_name("Paladin"), None);
        assert_eq!(HeroKind::from_name(""), None);
    }

    #[test]
    fn test_position_step() {
        let origin = Position::new(2, 2);
        assert_eq!(origin.step(Direction::Up), Position::new(2, 1));
        assert_eq!(origin.step(Direction::Down), Position::new(2, 3));
        assert_eq!(origin.step(Direction::Left), Position::new(1, 2));
        assert_eq!(origin.step(Direction::Right), Position::new(3, 2));
    }

    #[test]
    fn test_off_map() {
        assert!(Position::OFF_MAP.is_off_map());
        assert!(Position::new(-1, 3).is_off_map());
        assert!(!Position::new(0, 0).is_off_map());
    }

    #[test]
    fn test_entity_ref_type() {
        assert_eq!(EntityRef::Hero(HeroId(1)).entity_type(), EntityType::Hero);
        assert_eq!(EntityRef::Angel(AngelId(0)).entity_type(), EntityType::Angel);
        assert_eq!(EntityRef::Angel(AngelId(0)).as_hero(), None);
    }

    #[test]
    fn test_entity_ref_serialization() {
        let json = serde_json::to_string(&EntityRef::Hero(HeroId(3))).unwrap();
        assert!(json.contains("hero"));
        let back: EntityRef = serde_json::from_str(&json).unwrap();
        assert_eq!(back, EntityRef::Hero(HeroId(3)));
    }
}
