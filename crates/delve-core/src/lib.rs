//! delve-core: dungeon generation logic for Delve.
//!
//! Pure logic, no I/O: value types for coordinates, tiles and rooms, the
//! sparse grid they are committed into, and the linear digging generator
//! that lays out rooms connected by straight corridors.

pub mod dungeon;
pub mod generator;

mod rng;

pub use rng::{RandomSource, SeededRng};
