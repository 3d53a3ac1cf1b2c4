//! The dungeon grid: a sparse, unbounded store of committed tiles.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use super::{Coordinate, Room, Tile};

/// The mutable tile store a generator digs into.
///
/// Tiles are keyed by absolute coordinate, so rooms can be committed at
/// negative offsets and the dungeon grows in any direction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dungeon {
    tiles: HashMap<Coordinate, Tile>,
}

impl Dungeon {
    pub fn new() -> Self {
        Self::default()
    }

    /// True iff every tile of the room would land on unoccupied space.
    pub fn can_add_room(&self, room: &Room, offset: Coordinate) -> bool {
        room.tiles()
            .all(|(location, _)| !self.tiles.contains_key(&location.translate(offset)))
    }

    /// Stamp every tile of the room at the given offset.
    ///
    /// Callers are expected to have passed `can_add_room` first; stamping
    /// over occupied space replaces those tiles.
    pub fn add_room(&mut self, room: &Room, offset: Coordinate) {
        for (location, tile) in room.tiles() {
            self.tiles.insert(location.translate(offset), *tile);
        }
    }

    /// Stamp a single tile, replacing whatever is there. Doors are placed
    /// this way, over the wall tile they open through.
    pub fn add_tile(&mut self, location: Coordinate, tile: Tile) {
        self.tiles.insert(location, tile);
    }

    pub fn tile(&self, location: Coordinate) -> Option<&Tile> {
        self.tiles.get(&location)
    }

    pub fn is_occupied(&self, location: Coordinate) -> bool {
        self.tiles.contains_key(&location)
    }

    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// All committed tiles with their absolute coordinates, unordered.
    pub fn tiles(&self) -> impl Iterator<Item = (&Coordinate, &Tile)> {
        self.tiles.iter()
    }

    /// Smallest and largest committed coordinates, or `None` while empty.
    pub fn bounds(&self) -> Option<(Coordinate, Coordinate)> {
        let mut keys = self.tiles.keys();
        let first = *keys.next()?;
        let (mut min, mut max) = (first, first);
        for key in keys {
            min.row = min.row.min(key.row);
            min.col = min.col.min(key.col);
            max.row = max.row.max(key.row);
            max.col = max.col.max(key.col);
        }
        Some((min, max))
    }

    /// Render the grid as ASCII, one line per row. Unoccupied space is blank.
    pub fn render(&self) -> String {
        let Some((min, max)) = self.bounds() else {
            return String::new();
        };
        let mut out = String::new();
        for row in min.row..=max.row {
            for col in min.col..=max.col {
                let symbol = self
                    .tile(Coordinate::new(row, col))
                    .map_or(' ', Tile::symbol);
                out.push(symbol);
            }
            out.push('\n');
        }
        out
    }
}
