//! Procedural dungeon generation: room placement, corridor routing, and
//! entity/item spawning. Rooms only live for the duration of a single
//! `generate_dungeon` call; the [`crate::GameMap`] is the output.

mod generator;
mod rng;
mod rooms;
mod spawns;
mod tunnel;

pub use generator::generate_dungeon;
pub use rng::DungeonRng;
pub use rooms::{Room, RoomShape};
pub use tunnel::{bresenham_line, tunnel_between};

use serde::{Deserialize, Serialize};

use crate::types::ConfigError;

/// Irregular and column rooms divide their span by three or inset by two;
/// anything smaller than this cannot host every shape.
pub const MIN_ROOM_SIZE: i32 = 3;

/// Everything the generator needs to build one level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DungeonConfig {
    pub max_rooms: u32,
    pub room_min_size: i32,
    pub room_max_size: i32,
    pub map_width: i32,
    pub map_height: i32,
    pub max_monsters_per_room: i32,
    pub max_items_per_room: i32,
}

impl Default for DungeonConfig {
    fn default() -> Self {
        Self {
            max_rooms: 30,
            room_min_size: 6,
            room_max_size: 10,
            map_width: 80,
            map_height: 43,
            max_monsters_per_room: 2,
            max_items_per_room: 2,
        }
    }
}

impl DungeonConfig {
    /// Fatal-configuration gate. Column rooms can grow by up to two cells
    /// per axis, so the maximum size must leave that much slack.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.room_min_size < MIN_ROOM_SIZE {
            return Err(ConfigError::RoomMinBelowShapeFloor);
        }
        if self.room_min_size > self.room_max_size {
            return Err(ConfigError::RoomMinAboveMax);
        }
        if self.map_width < MIN_ROOM_SIZE + 2 || self.map_height < MIN_ROOM_SIZE + 2 {
            return Err(ConfigError::MapTooSmall);
        }
        if self.room_max_size + 2 >= self.map_width.min(self.map_height) {
            return Err(ConfigError::RoomMaxExceedsMap);
        }
        Ok(())
    }
}
