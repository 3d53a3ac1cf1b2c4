//! Coordinates and cardinal directions.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// The four cardinal directions.
///
/// Names both the wall of a room a door sits on and the travel direction of
/// the corridor leaving through that door.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
pub enum CardinalDirection {
    North,
    South,
    East,
    West,
}

impl CardinalDirection {
    /// Unit step along this direction as a (row, col) delta.
    ///
    /// Rows grow southward, columns eastward.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            CardinalDirection::North => (-1, 0),
            CardinalDirection::South => (1, 0),
            CardinalDirection::East => (0, 1),
            CardinalDirection::West => (0, -1),
        }
    }

    pub const fn opposite(self) -> CardinalDirection {
        match self {
            CardinalDirection::North => CardinalDirection::South,
            CardinalDirection::South => CardinalDirection::North,
            CardinalDirection::East => CardinalDirection::West,
            CardinalDirection::West => CardinalDirection::East,
        }
    }
}

/// A (row, column) pair, relative to a room's own frame or absolute in the
/// dungeon depending on context. Immutable value type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Coordinate {
    pub row: i32,
    pub col: i32,
}

impl Coordinate {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Component-wise translation by another coordinate.
    pub const fn translate(self, offset: Coordinate) -> Coordinate {
        Coordinate::new(self.row + offset.row, self.col + offset.col)
    }

    /// The adjacent coordinate one step along a cardinal direction.
    pub const fn neighbor(self, direction: CardinalDirection) -> Coordinate {
        let (row_step, col_step) = direction.delta();
        Coordinate::new(self.row + row_step, self.col + col_step)
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_translate() {
        let base = Coordinate::new(3, -2);
        assert_eq!(base.translate(Coordinate::new(-5, 4)), Coordinate::new(-2, 2));
        assert_eq!(base.translate(Coordinate::default()), base);
    }

    #[test]
    fn test_neighbor_steps() {
        let origin = Coordinate::new(0, 0);
        assert_eq!(origin.neighbor(CardinalDirection::North), Coordinate::new(-1, 0));
        assert_eq!(origin.neighbor(CardinalDirection::South), Coordinate::new(1, 0));
        assert_eq!(origin.neighbor(CardinalDirection::East), Coordinate::new(0, 1));
        assert_eq!(origin.neighbor(CardinalDirection::West), Coordinate::new(0, -1));
    }

    #[test]
    fn test_neighbor_round_trip() {
        let start = Coordinate::new(7, 11);
        for direction in CardinalDirection::iter() {
            assert_eq!(start.neighbor(direction).neighbor(direction.opposite()), start);
        }
    }
}
