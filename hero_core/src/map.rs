//! GameMap - terrain grid and per-cell entity index
//!
//! Cells hold [`EntityRef`] values rather than references, so relocating or
//! removing a hero is a plain data update.

use crate::types::{EntityRef, HeroId, Position, Terrain};
use std::str::FromStr;
use thiserror::Error;

/// Map construction error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    #[error("Map has no rows")]
    Empty,
    #[error("Row {row} has width {found}, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("Unknown terrain symbol '{symbol}' at ({x}, {y})")]
    UnknownTerrain { symbol: char, x: usize, y: usize },
}

/// Rectangular battle map
#[derive(Debug, Clone, PartialEq)]
pub struct GameMap {
    width: usize,
    height: usize,
    /// Row-major terrain
    surfaces: Vec<Terrain>,
    /// Row-major entity index, insertion order per cell
    entities: Vec<Vec<EntityRef>>,
}

impl GameMap {
    /// Create a map filled with a single terrain
    pub fn new(width: usize, height: usize, fill: Terrain) -> Self {
        GameMap {
            width,
            height,
            surfaces: vec![fill; width * height],
            entities: vec![Vec::new(); width * height],
        }
    }

    /// Build a map from rows of terrain symbols (`L`, `V`, `D`, `W`)
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, MapError> {
        let first = rows.first().ok_or(MapError::Empty)?;
        let width = first.as_ref().chars().count();
        if width == 0 {
            return Err(MapError::Empty);
        }

        let mut surfaces = Vec::with_capacity(width * rows.len());
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            let found = row.chars().count();
            if found != width {
                return Err(MapError::RaggedRow {
                    row: y,
                    expected: width,
                    found,
                });
            }
            for (x, symbol) in row.chars().enumerate() {
                let terrain =
                    Terrain::from_symbol(symbol).ok_or(MapError::UnknownTerrain { symbol, x, y })?;
                surfaces.push(terrain);
            }
        }

        Ok(GameMap {
            width,
            height: rows.len(),
            entities: vec![Vec::new(); surfaces.len()],
            surfaces,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Row-major cell index, `None` for off-map or out-of-bounds positions
    fn index(&self, position: Position) -> Option<usize> {
        if position.x < 0 || position.y < 0 {
            return None;
        }
        let (x, y) = (position.x as usize, position.y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.width + x)
    }

    /// Check whether a position lies inside the map
    pub fn contains(&self, position: Position) -> bool {
        self.index(position).is_some()
    }

    /// Terrain at a position
    pub fn surface(&self, position: Position) -> Option<Terrain> {
        self.index(position).map(|i| self.surfaces[i])
    }

    /// Entities currently registered at a position
    pub fn entities(&self, position: Position) -> &[EntityRef] {
        match self.index(position) {
            Some(i) => &self.entities[i],
            None => &[],
        }
    }

    /// Mutable entity list of a cell
    pub fn entities_mut(&mut self, position: Position) -> Option<&mut Vec<EntityRef>> {
        let i = self.index(position)?;
        Some(&mut self.entities[i])
    }

    /// Heroes registered at a position, in arrival order
    pub fn heroes_at(&self, position: Position) -> impl Iterator<Item = HeroId> + '_ {
        self.entities(position).iter().filter_map(EntityRef::as_hero)
    }

    /// Move an entity between cells. Off-map endpoints are skipped.
    pub(crate) fn relocate(&mut self, entity: EntityRef, from: Position, to: Position) {
        if let Some(cell) = self.entities_mut(from) {
            if let Some(pos) = cell.iter().position(|e| *e == entity) {
                cell.remove(pos);
            }
        }
        if let Some(cell) = self.entities_mut(to) {
            cell.push(entity);
        }
    }

    /// All on-map positions, row by row
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.height)
            .flat_map(move |y| (0..self.width).map(move |x| Position::new(x as i32, y as i32)))
    }
}

impl FromStr for GameMap {
    type Err = MapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        GameMap::from_rows(&rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_map() {
        let map: GameMap = "LVD\nWWL\n".parse().unwrap();
        assert_eq!(map.width(), 3);
        assert_eq!(map.height(), 2);
        assert_eq!(map.surface(Position::new(1, 0)), Some(Terrain::Volcanic));
        assert_eq!(map.surface(Position::new(0, 1)), Some(Terrain::Woods));
        assert_eq!(map.surface(Position::new(3, 0)), None);
        assert_eq!(map.surface(Position::OFF_MAP), None);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<GameMap>(), Err(MapError::Empty));
        assert_eq!(
            "LL\nL".parse::<GameMap>(),
            Err(MapError::RaggedRow {
                row: 1,
                expected: 2,
                found: 1
            })
        );
        assert_eq!(
            "LX".parse::<GameMap>(),
            Err(MapError::UnknownTerrain {
                symbol: 'X',
                x: 1,
                y: 0
            })
        );
    }

    #[test]
    fn test_relocate_keeps_index_consistent() {
        let mut map = GameMap::new(2, 2, Terrain::Land);
        let hero = EntityRef::Hero(HeroId(0));
        let a = Position::new(0, 0);
        let b = Position::new(1, 1);

        map.relocate(hero, Position::OFF_MAP, a);
        assert_eq!(map.entities(a), &[hero]);

        map.relocate(hero, a, b);
        assert!(map.entities(a).is_empty());
        assert_eq!(map.heroes_at(b).collect::<Vec<_>>(), vec![HeroId(0)]);

        map.relocate(hero, b, Position::OFF_MAP);
        assert!(map.entities(b).is_empty());
    }

    #[test]
    fn test_positions_cover_grid() {
        let map = GameMap::new(3, 2, Terrain::Desert);
        assert_eq!(map.positions().count(), 6);
        assert!(map.positions().all(|p| map.contains(p)));
    }
}
