//! Dungeon data model.
//!
//! Value types for coordinates, tiles and rooms, and the grid a generator
//! commits them into.

mod coordinate;
mod grid;
mod room;
mod tile;

pub use coordinate::{CardinalDirection, Coordinate};
pub use grid::Dungeon;
pub use room::Room;
pub use tile::Tile;
