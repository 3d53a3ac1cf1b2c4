//! The linear digging generator.
//!
//! Starts with a room at the origin; every subsequent room is attached by
//! randomly picking a door tile on the previous room's wall, digging a
//! straight one-tile corridor outward, and fitting the new room against the
//! corridor's far end. Candidates that collide with committed tiles are
//! retried within bounded budgets.

use crate::dungeon::{CardinalDirection, Coordinate, Dungeon, Room, Tile};
use crate::rng::{RandomSource, SeededRng};

use super::{DigError, DiggingGenerator};

pub const MIN_ROOM_HEIGHT: i32 = 5;
pub const MAX_ROOM_HEIGHT: i32 = 15;
pub const MIN_ROOM_WIDTH: i32 = 5;
pub const MAX_ROOM_WIDTH: i32 = 15;
pub const MIN_CORRIDOR_LENGTH: i32 = 1;
pub const MAX_CORRIDOR_LENGTH: i32 = 10;
pub const MAX_DOOR_TRIES: u32 = 2 * (MAX_ROOM_HEIGHT + MAX_ROOM_WIDTH) as u32;
pub const MAX_ROOM_TRIES: u32 = 25;

/// Digs a strictly linear dungeon: each room has at most one corridor in and
/// one corridor out.
#[derive(Debug)]
pub struct LinearDigger<R = SeededRng> {
    rng: R,
    /// Absolute offset of the most recently committed room. Door locations
    /// are room-relative; this translates them into the dungeon frame. Only
    /// updated on a successful commit.
    previous_offset: Coordinate,
}

impl LinearDigger<SeededRng> {
    /// Generator seeded from entropy.
    pub fn new() -> Self {
        Self::with_rng(SeededRng::from_entropy())
    }

    /// Generator with a fixed seed; the same seed digs the same dungeon.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(SeededRng::new(seed))
    }

    /// Seed of the underlying source.
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }
}

impl Default for LinearDigger<SeededRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RandomSource> LinearDigger<R> {
    /// Generator drawing from the given source.
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            previous_offset: Coordinate::new(0, 0),
        }
    }

    /// Absolute offset of the last committed room.
    pub fn previous_offset(&self) -> Coordinate {
        self.previous_offset
    }

    fn generate_room(&mut self) -> Room {
        let height = self.rng.in_range(MIN_ROOM_HEIGHT, MAX_ROOM_HEIGHT + 1);
        let width = self.rng.in_range(MIN_ROOM_WIDTH, MAX_ROOM_WIDTH + 1);
        Room::empty(height, width)
    }

    /// Pick a non-corner wall tile on the room to open a door through.
    fn choose_door_location(&mut self, room: &Room) -> Result<Coordinate, DigError> {
        for _ in 0..MAX_DOOR_TRIES {
            let row = self.rng.in_range(0, room.height());
            let col = self.rng.in_range(0, room.width());
            let location = Coordinate::new(row, col);
            if !room.is_corner(location) && room.tile(location).is_some_and(Tile::is_wall) {
                return Ok(location);
            }
        }
        Err(DigError::DoorLocationExhausted {
            tries: MAX_DOOR_TRIES,
        })
    }

    /// Offset for the new room so it abuts the corridor's last tile.
    ///
    /// The axis along the corridor is fixed; the position along the adjacent
    /// side is random, windowed so the attach point lands strictly inside
    /// that side and never on a corner of the new room.
    fn choose_room_offset(
        &mut self,
        room: &Room,
        direction: CardinalDirection,
        last_tile: Coordinate,
    ) -> Coordinate {
        match direction {
            CardinalDirection::North => Coordinate::new(
                last_tile.row - room.height(),
                self.rng
                    .in_range(last_tile.col - (room.width() - 2), last_tile.col),
            ),
            CardinalDirection::South => Coordinate::new(
                last_tile.row + 1,
                self.rng
                    .in_range(last_tile.col - (room.width() - 2), last_tile.col),
            ),
            CardinalDirection::West => Coordinate::new(
                self.rng
                    .in_range(last_tile.row - (room.height() - 2), last_tile.row),
                last_tile.col - room.width(),
            ),
            CardinalDirection::East => Coordinate::new(
                self.rng
                    .in_range(last_tile.row - (room.height() - 2), last_tile.row),
                last_tile.col + 1,
            ),
        }
    }
}

/// Absolute offset of a corridor leaving the room through the given door.
///
/// Top and left corridors are anchored by their far end, so the offset backs
/// away from the door by the corridor length; bottom and right corridors are
/// anchored by their near end, one step past the door.
fn corridor_offset(
    room: &Room,
    door_location: Coordinate,
    room_offset: Coordinate,
    corridor_length: i32,
) -> Coordinate {
    let door = door_location.translate(room_offset);
    if door_location.row == 0 {
        Coordinate::new(door.row - corridor_length, door.col)
    } else if door_location.row == room.height() - 1 {
        Coordinate::new(door.row + 1, door.col)
    } else if door_location.col == 0 {
        Coordinate::new(door.row, door.col - corridor_length)
    } else {
        Coordinate::new(door.row, door.col + 1)
    }
}

/// The corridor tile facing the new room.
///
/// For north- and west-bound corridors that is the offset tile itself, given
/// how `corridor_offset` anchors them; corridors are one tile across, so no
/// cross-axis term appears.
fn last_corridor_tile(
    corridor: &Room,
    direction: CardinalDirection,
    offset: Coordinate,
) -> Coordinate {
    match direction {
        CardinalDirection::North | CardinalDirection::West => offset,
        CardinalDirection::South => Coordinate::new(offset.row + corridor.height() - 1, offset.col),
        CardinalDirection::East => Coordinate::new(offset.row, offset.col + corridor.width() - 1),
    }
}

/// The corridor shape for a door: vertical for top and bottom wall doors,
/// horizontal otherwise.
fn corridor_for_door(room: &Room, door_location: Coordinate, length: i32) -> Room {
    if door_location.row == 0 || door_location.row == room.height() - 1 {
        Room::corridor(length, 1)
    } else {
        Room::corridor(1, length)
    }
}

impl<R: RandomSource> DiggingGenerator for LinearDigger<R> {
    fn dig_room(
        &mut self,
        dungeon: &mut Dungeon,
        previous: Option<&Room>,
    ) -> Result<Room, DigError> {
        // Dimensions are drawn once and reused across every retry below.
        let room = self.generate_room();

        let Some(previous_room) = previous else {
            // First room: the grid is empty, no collision check.
            let origin = Coordinate::new(0, 0);
            dungeon.add_room(&room, origin);
            self.previous_offset = origin;
            return Ok(room);
        };

        for _ in 0..MAX_ROOM_TRIES {
            // A door failure aborts the whole call, not just this attempt.
            let door_location = self.choose_door_location(previous_room)?;

            let corridor_length = self.rng.in_range(MIN_CORRIDOR_LENGTH, MAX_CORRIDOR_LENGTH);
            let offset = corridor_offset(
                previous_room,
                door_location,
                self.previous_offset,
                corridor_length,
            );

            let corridor = corridor_for_door(previous_room, door_location, corridor_length);
            if !dungeon.can_add_room(&corridor, offset) {
                continue;
            }

            let Some(direction) = previous_room.wall_direction(door_location) else {
                continue;
            };
            let last_tile = last_corridor_tile(&corridor, direction, offset);
            let room_offset = self.choose_room_offset(&room, direction, last_tile);

            if !dungeon.can_add_room(&room, room_offset) {
                continue;
            }

            dungeon.add_tile(door_location.translate(self.previous_offset), Tile::door());
            dungeon.add_room(&corridor, offset);
            dungeon.add_room(&room, room_offset);
            dungeon.add_tile(last_tile.neighbor(direction), Tile::door());

            self.previous_offset = room_offset;
            return Ok(room);
        }

        Err(DigError::RoomPlacementExhausted {
            tries: MAX_ROOM_TRIES,
        })
    }
}
