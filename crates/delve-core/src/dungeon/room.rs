//! Rooms: walled rectangles and the degenerate corridors connecting them.

use serde::{Deserialize, Serialize};

use super::{CardinalDirection, Coordinate, Tile};

/// A rectangle of tiles in its own coordinate frame.
///
/// Either a living space (wall ring around a floor interior) or a corridor
/// (one tile wide or tall, all floor). A room does not know where it sits in
/// the dungeon; placement assigns it an absolute offset on commit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    tiles: Vec<Vec<Tile>>,
}

impl Room {
    /// A walled room: outer ring of wall tiles around a floor interior.
    pub fn empty(height: i32, width: i32) -> Self {
        debug_assert!(height >= 1 && width >= 1);
        let mut tiles = Vec::with_capacity(height as usize);
        for row in 0..height {
            let mut line = Vec::with_capacity(width as usize);
            for col in 0..width {
                let on_ring = row == 0 || row == height - 1 || col == 0 || col == width - 1;
                line.push(if on_ring { Tile::Wall } else { Tile::Floor });
            }
            tiles.push(line);
        }
        Self { tiles }
    }

    /// A corridor: an H×1 or 1×W strip of floor.
    pub fn corridor(height: i32, width: i32) -> Self {
        debug_assert!(height == 1 || width == 1);
        Self {
            tiles: vec![vec![Tile::Floor; width as usize]; height as usize],
        }
    }

    pub fn height(&self) -> i32 {
        self.tiles.len() as i32
    }

    pub fn width(&self) -> i32 {
        self.tiles.first().map_or(0, |line| line.len() as i32)
    }

    /// Tile at a room-relative coordinate, if inside the room.
    pub fn tile(&self, location: Coordinate) -> Option<&Tile> {
        if location.row < 0 || location.col < 0 {
            return None;
        }
        self.tiles
            .get(location.row as usize)
            .and_then(|line| line.get(location.col as usize))
    }

    /// Whether a room-relative coordinate is one of the four extreme
    /// corners. Corners are ineligible as door locations.
    pub fn is_corner(&self, location: Coordinate) -> bool {
        (location.row == 0 || location.row == self.height() - 1)
            && (location.col == 0 || location.col == self.width() - 1)
    }

    /// Which wall a room-relative coordinate lies on, if any.
    ///
    /// Checked top, bottom, left, right in that order, so a corner reports
    /// the horizontal wall it belongs to.
    pub fn wall_direction(&self, location: Coordinate) -> Option<CardinalDirection> {
        self.tile(location)?;
        if location.row == 0 {
            Some(CardinalDirection::North)
        } else if location.row == self.height() - 1 {
            Some(CardinalDirection::South)
        } else if location.col == 0 {
            Some(CardinalDirection::West)
        } else if location.col == self.width() - 1 {
            Some(CardinalDirection::East)
        } else {
            None
        }
    }

    /// Every tile with its room-relative coordinate, row-major.
    pub fn tiles(&self) -> impl Iterator<Item = (Coordinate, &Tile)> {
        self.tiles.iter().enumerate().flat_map(|(row, line)| {
            line.iter()
                .enumerate()
                .map(move |(col, tile)| (Coordinate::new(row as i32, col as i32), tile))
        })
    }
}
