//! Dungeon generators.
//!
//! A digging generator builds a dungeon one room at a time, each room
//! reached from its predecessor through a straight corridor with a door at
//! both ends. `LinearDigger` is the strategy implemented today: a strictly
//! linear chain of rooms.

mod linear;

pub use linear::{
    LinearDigger, MAX_CORRIDOR_LENGTH, MAX_DOOR_TRIES, MAX_ROOM_HEIGHT, MAX_ROOM_TRIES,
    MAX_ROOM_WIDTH, MIN_CORRIDOR_LENGTH, MIN_ROOM_HEIGHT, MIN_ROOM_WIDTH,
};

use thiserror::Error;

use crate::dungeon::{Dungeon, Room};

/// Generation failures.
///
/// Both are terminal for the current `dig_room` call. Failed candidates are
/// never committed, so on error the dungeon is exactly as it was before the
/// call.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigError {
    /// No acceptable door tile found on the previous room.
    #[error("no valid door location on the previous room after {tries} tries")]
    DoorLocationExhausted { tries: u32 },

    /// No collision-free corridor and room pair found.
    #[error("no valid placement for the next room after {tries} tries")]
    RoomPlacementExhausted { tries: u32 },
}

/// A generator that digs rooms one at a time into a shared grid.
pub trait DiggingGenerator {
    /// Dig the next room, connected to `previous` by a corridor.
    ///
    /// With no previous room the new room is committed at the origin,
    /// unconditionally. On success the dungeon gains the corridor, the room
    /// and a door at each corridor end; on failure it is untouched.
    fn dig_room(
        &mut self,
        dungeon: &mut Dungeon,
        previous: Option<&Room>,
    ) -> Result<Room, DigError>;

    /// Dig a complete dungeon of `room_count` rooms into an empty grid.
    fn generate(&mut self, room_count: usize) -> Result<Dungeon, DigError> {
        let mut dungeon = Dungeon::new();
        let mut previous = None;
        for _ in 0..room_count {
            let room = self.dig_room(&mut dungeon, previous.as_ref())?;
            previous = Some(room);
        }
        Ok(dungeon)
    }
}
