//! Tile variants stamped into the dungeon grid.

use serde::{Deserialize, Serialize};

/// A single dungeon tile.
///
/// Doors carry a locked flag; generation currently produces only unlocked
/// doors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tile {
    Floor,
    Wall,
    Door { locked: bool },
}

impl Tile {
    /// An ordinary unlocked door.
    pub const fn door() -> Self {
        Tile::Door { locked: false }
    }

    pub const fn is_wall(&self) -> bool {
        matches!(self, Tile::Wall)
    }

    pub const fn is_door(&self) -> bool {
        matches!(self, Tile::Door { .. })
    }

    /// Display character for map rendering.
    pub const fn symbol(&self) -> char {
        match self {
            Tile::Floor => '.',
            Tile::Wall => '#',
            Tile::Door { .. } => '+',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_door_constructor_is_unlocked() {
        assert_eq!(Tile::door(), Tile::Door { locked: false });
        assert!(Tile::door().is_door());
    }

    #[test]
    fn test_kind_predicates() {
        assert!(Tile::Wall.is_wall());
        assert!(!Tile::Floor.is_wall());
        assert!(!Tile::door().is_wall());
        assert!(!Tile::Floor.is_door());
    }

    #[test]
    fn test_symbols() {
        assert_eq!(Tile::Floor.symbol(), '.');
        assert_eq!(Tile::Wall.symbol(), '#');
        assert_eq!(Tile::Door { locked: true }.symbol(), '+');
    }
}
