//! Monster and item placement inside freshly carved rooms.

use crate::game_map::GameMap;
use crate::types::{ActorKind, ItemKind, Pos};

use super::rng::DungeonRng;
use super::rooms::Room;

/// Bounded retry budget per spawn; on exhaustion the spawn is skipped
/// silently and the room simply holds one entity fewer.
pub(super) const SPAWN_ATTEMPTS: u32 = 5;

pub(super) fn place_entities(
    room: &Room,
    map: &mut GameMap,
    rng: &mut DungeonRng,
    max_monsters: i32,
    max_items: i32,
) {
    let monster_count = rng.range_i32(0, max_monsters);
    let item_count = rng.range_i32(0, max_items);

    for _ in 0..monster_count {
        let Some(pos) = find_walkable_cell(room, map, rng) else {
            continue;
        };
        if map.actor_at(pos).is_some() || map.item_at(pos).is_some() {
            continue;
        }
        let kind = if rng.unit() < 0.8 { ActorKind::Orc } else { ActorKind::Troll };
        map.spawn_actor(kind, pos);
    }

    for _ in 0..item_count {
        let Some(pos) = find_walkable_cell(room, map, rng) else {
            continue;
        };
        if map.actor_at(pos).is_some() || map.item_at(pos).is_some() {
            continue;
        }
        let roll = rng.unit();
        let kind = if roll < 0.4 {
            ItemKind::HealthPotion
        } else if roll < 0.8 {
            ItemKind::FireballScroll
        } else if roll < 0.89 {
            ItemKind::ConfusionScroll
        } else {
            ItemKind::LightningScroll
        };
        map.spawn_item(kind, pos);
    }
}

/// Up to [`SPAWN_ATTEMPTS`] uniform draws over the room interior, looking
/// for an in-bounds walkable cell. Column and irregular rooms leave walls
/// inside the rectangle, so a draw can land on one and be wasted.
fn find_walkable_cell(room: &Room, map: &GameMap, rng: &mut DungeonRng) -> Option<Pos> {
    for _ in 0..SPAWN_ATTEMPTS {
        let x = rng.range_i32(room.x1 + 1, room.x2 - 1);
        let y = rng.range_i32(room.y1 + 1, room.y2 - 1);
        let pos = Pos { y, x };
        if map.in_bounds(pos) && map.tile_at(pos).walkable {
            return Some(pos);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapgen::rooms::RoomShape;

    fn dug_room_map() -> (GameMap, Room) {
        let mut map = GameMap::new(20, 20);
        let room = Room::new(RoomShape::Rectangular, 2, 2, 8, 8);
        room.dig(&mut map);
        (map, room)
    }

    #[test]
    fn zero_budgets_spawn_nothing() {
        let (mut map, room) = dug_room_map();
        let mut rng = DungeonRng::seed_from_u64(1);
        place_entities(&room, &mut map, &mut rng, 0, 0);
        assert!(map.actors.is_empty());
        assert!(map.items.is_empty());
    }

    #[test]
    fn spawns_land_on_walkable_cells_inside_the_room() {
        for seed in 0..20 {
            let (mut map, room) = dug_room_map();
            let mut rng = DungeonRng::seed_from_u64(seed);
            place_entities(&room, &mut map, &mut rng, 3, 2);

            for actor in map.actors.values() {
                assert!(map.tile_at(actor.pos).walkable);
                assert!(actor.pos.x > room.x1 && actor.pos.x < room.x2);
                assert!(actor.pos.y > room.y1 && actor.pos.y < room.y2);
                assert!(matches!(actor.kind, ActorKind::Orc | ActorKind::Troll));
            }
            for item in map.items.values() {
                assert!(map.tile_at(item.pos).walkable);
            }
        }
    }

    #[test]
    fn no_two_spawns_share_a_cell() {
        for seed in 0..20 {
            let (mut map, room) = dug_room_map();
            let mut rng = DungeonRng::seed_from_u64(seed);
            place_entities(&room, &mut map, &mut rng, 8, 8);

            let mut cells: Vec<Pos> = map.actors.values().map(|a| a.pos).collect();
            cells.extend(map.items.values().map(|i| i.pos));
            let total = cells.len();
            cells.sort();
            cells.dedup();
            assert_eq!(cells.len(), total, "seed {seed} stacked two entities");
        }
    }

    #[test]
    fn undug_room_exhausts_the_attempt_budget_silently() {
        // Room never dug: every cell is wall, so every attempt misses.
        let mut map = GameMap::new(20, 20);
        let room = Room::new(RoomShape::Rectangular, 2, 2, 8, 8);
        let mut rng = DungeonRng::seed_from_u64(5);
        place_entities(&room, &mut map, &mut rng, 4, 4);
        assert!(map.actors.is_empty());
        assert!(map.items.is_empty());
    }
}
