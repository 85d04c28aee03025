//! Dungeon generation orchestration: iterative room placement with
//! rejection sampling, corridor carving, spawning, and stairs placement.

use crate::game_map::GameMap;
use crate::tiles::{DOWN_STAIRS, FLOOR};
use crate::types::ActorKind;

use super::DungeonConfig;
use super::rng::DungeonRng;
use super::rooms::{Room, RoomShape};
use super::spawns::place_entities;
use super::tunnel::tunnel_between;

const IRREGULAR_ROOM_CHANCE: f64 = 0.5;
const COLUMN_ROOM_CHANCE: f64 = 0.6;
const EXTRA_TUNNEL_CHANCE: f64 = 0.15;

/// Build one complete level. Runs to completion; a partially generated
/// map never escapes. The config is assumed validated
/// ([`DungeonConfig::validate`]); this path does not re-check it.
pub fn generate_dungeon(config: &DungeonConfig, rng: &mut DungeonRng) -> GameMap {
    build_dungeon(config, rng).0
}

/// Generation body that also returns the accepted rooms, so tests can
/// check placement invariants. Callers outside the crate only ever see
/// the map; rooms are transient.
pub(crate) fn build_dungeon(config: &DungeonConfig, rng: &mut DungeonRng) -> (GameMap, Vec<Room>) {
    let mut map = GameMap::new(config.map_width as usize, config.map_height as usize);
    let mut rooms: Vec<Room> = Vec::new();

    for attempt in 0..config.max_rooms {
        let new_room = roll_room(config, rng, rooms.is_empty());

        // Rejection sampling: an overlap consumes the attempt, not a slot.
        if rooms.iter().any(|other| new_room.intersects(other)) {
            continue;
        }

        new_room.dig(&mut map);

        if let Some(previous) = rooms.last() {
            for pos in tunnel_between(rng, previous.center(), new_room.center()) {
                map.set_tile(pos, FLOOR);
            }
        } else {
            let player_id = map.spawn_actor(ActorKind::Player, new_room.center());
            map.player_id = player_id;
        }

        // Occasional loop-back shortcut so the dungeon is not purely
        // linear; forced on the final attempt.
        if (rng.unit() <= EXTRA_TUNNEL_CHANCE && rooms.len() > 2)
            || attempt == config.max_rooms - 1
        {
            if let Some(last) = rooms.last().copied() {
                let pick = rooms[rng.index(rooms.len())];
                for pos in tunnel_between(rng, pick.center(), last.center()) {
                    map.set_tile(pos, FLOOR);
                }
            }
        }

        place_entities(
            &new_room,
            &mut map,
            rng,
            config.max_monsters_per_room,
            config.max_items_per_room,
        );

        // Stairs follow the most recently accepted room. The previous
        // stamp reverts to floor so exactly one stairs tile exists.
        if map.tile_at(map.downstairs_location) == DOWN_STAIRS {
            map.set_tile(map.downstairs_location, FLOOR);
        }
        let center = new_room.center();
        map.set_tile(center, DOWN_STAIRS);
        map.downstairs_location = center;

        rooms.push(new_room);
    }

    (map, rooms)
}

fn roll_room(config: &DungeonConfig, rng: &mut DungeonRng, first: bool) -> Room {
    let mut room_width = rng.range_i32(config.room_min_size, config.room_max_size);
    let mut room_height = rng.range_i32(config.room_min_size, config.room_max_size);
    let mut x = rng.range_i32(0, config.map_width - room_width - 1);
    let mut y = rng.range_i32(0, config.map_height - room_height - 1);

    // The first accepted room is always rectangular so the player start
    // is a plain open area.
    let mut roll = rng.unit();
    if first {
        roll = 1.0;
    }

    if roll <= IRREGULAR_ROOM_CHANCE {
        Room::new(RoomShape::Irregular, x, y, room_width, room_height)
    } else if roll <= COLUMN_ROOM_CHANCE {
        // Column rooms grow by one, re-roll position for the new size,
        // then force both dimensions odd so the pattern is symmetric.
        room_width += 1;
        room_height += 1;
        x = rng.range_i32(0, config.map_width - room_width - 1);
        y = rng.range_i32(0, config.map_height - room_height - 1);
        if room_width % 2 == 0 {
            room_width += 1;
        }
        if room_height % 2 == 0 {
            room_height += 1;
        }
        Room::new(RoomShape::Column, x, y, room_width, room_height)
    } else {
        Room::new(RoomShape::Rectangular, x, y, room_width, room_height)
    }
}
