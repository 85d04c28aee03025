//! Room geometry. One struct, three dig patterns dispatched by tag; all
//! variants share the outer rectangle, center, and intersection test.

use crate::game_map::GameMap;
use crate::tiles::FLOOR;
use crate::types::Pos;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoomShape {
    Rectangular,
    Irregular,
    Column,
}

/// Generation-time rectangle with outer extents `x1..x2`, `y1..y2`
/// (`x2 = x + width`). Discarded once the level is carved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Room {
    pub shape: RoomShape,
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl Room {
    pub fn new(shape: RoomShape, x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { shape, x1: x, y1: y, x2: x + width, y2: y + height }
    }

    pub fn width(&self) -> i32 {
        self.x2 - self.x1
    }

    pub fn height(&self) -> i32 {
        self.y2 - self.y1
    }

    /// Integer-truncated midpoint.
    pub fn center(&self) -> Pos {
        Pos { y: (self.y1 + self.y2) / 2, x: (self.x1 + self.x2) / 2 }
    }

    /// Inclusive-bound AABB overlap. Touching edges count as intersecting,
    /// which is what guarantees a one-tile wall buffer between rooms.
    pub fn intersects(&self, other: &Room) -> bool {
        self.x1 <= other.x2
            && self.x2 >= other.x1
            && self.y1 <= other.y2
            && self.y2 >= other.y1
    }

    /// Carve this room's diggable interior into the map.
    pub fn dig(&self, map: &mut GameMap) {
        match self.shape {
            RoomShape::Rectangular => self.dig_rectangular(map),
            RoomShape::Irregular => self.dig_irregular(map),
            RoomShape::Column => self.dig_column(map),
        }
    }

    // Open rectangle one cell inset from all four borders.
    fn dig_rectangular(&self, map: &mut GameMap) {
        for y in (self.y1 + 1)..self.y2 {
            for x in (self.x1 + 1)..self.x2 {
                map.set_tile(Pos { y, x }, FLOOR);
            }
        }
    }

    // Leaves a sparse pillar lattice standing: any cell whose coordinates
    // both land on the width/3 and height/3 grid stays wall. Requires
    // width and height >= 3 (config validation enforces the minimum).
    fn dig_irregular(&self, map: &mut GameMap) {
        let x_step = self.width() / 3;
        let y_step = self.height() / 3;
        for y in self.y1..self.y2 {
            for x in self.x1..self.x2 {
                if x % x_step == 0 && y % y_step == 0 {
                    continue;
                }
                map.set_tile(Pos { y, x }, FLOOR);
            }
        }
    }

    // Checkerboard columns, inset two cells from all borders. The
    // generator forces odd dimensions so the pattern comes out symmetric.
    fn dig_column(&self, map: &mut GameMap) {
        for y in (self.y1 + 2)..(self.y2 - 2) {
            for x in (self.x1 + 2)..(self.x2 - 2) {
                if x % 2 == 0 && y % 2 == 0 {
                    continue;
                }
                map.set_tile(Pos { y, x }, FLOOR);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tiles::WALL;

    #[test]
    fn center_truncates_toward_zero() {
        let room = Room::new(RoomShape::Rectangular, 2, 3, 5, 5);
        assert_eq!(room.center(), Pos { y: 5, x: 4 });
    }

    #[test]
    fn touching_rooms_count_as_intersecting() {
        let left = Room::new(RoomShape::Rectangular, 0, 0, 4, 4);
        let adjacent = Room::new(RoomShape::Rectangular, 4, 0, 4, 4);
        let separated = Room::new(RoomShape::Rectangular, 5, 0, 4, 4);
        assert!(left.intersects(&adjacent), "shared edge must intersect");
        assert!(adjacent.intersects(&left));
        assert!(!left.intersects(&separated));
    }

    #[test]
    fn rectangular_dig_leaves_a_one_cell_border() {
        let mut map = GameMap::new(12, 12);
        let room = Room::new(RoomShape::Rectangular, 2, 2, 5, 5);
        room.dig(&mut map);

        for y in 3..7 {
            for x in 3..7 {
                assert_eq!(map.tile_at(Pos { y, x }), FLOOR);
            }
        }
        for x in 2..8 {
            assert_eq!(map.tile_at(Pos { y: 2, x }), WALL);
            assert_eq!(map.tile_at(Pos { y: 7, x }), WALL);
        }
        for y in 2..8 {
            assert_eq!(map.tile_at(Pos { y, x: 2 }), WALL);
            assert_eq!(map.tile_at(Pos { y, x: 7 }), WALL);
        }
    }

    #[test]
    fn column_room_7x5_leaves_walls_where_both_coordinates_are_even() {
        let mut map = GameMap::new(16, 16);
        let room = Room::new(RoomShape::Column, 2, 2, 7, 5);
        room.dig(&mut map);

        // Inset region is x in 4..7, y in 4..5.
        assert_eq!(map.tile_at(Pos { y: 4, x: 4 }), WALL);
        assert_eq!(map.tile_at(Pos { y: 4, x: 5 }), FLOOR);
        assert_eq!(map.tile_at(Pos { y: 4, x: 6 }), WALL);
        // Nothing outside the two-cell inset is touched.
        assert_eq!(map.tile_at(Pos { y: 3, x: 5 }), WALL);
        assert_eq!(map.tile_at(Pos { y: 5, x: 5 }), WALL);
        assert_eq!(map.tile_at(Pos { y: 4, x: 3 }), WALL);
        assert_eq!(map.tile_at(Pos { y: 4, x: 7 }), WALL);
    }

    #[test]
    fn column_room_pattern_is_checkerboard_in_larger_rooms() {
        let mut map = GameMap::new(16, 16);
        let room = Room::new(RoomShape::Column, 0, 0, 9, 9);
        room.dig(&mut map);

        for y in 2..7 {
            for x in 2..7 {
                let expected = if x % 2 == 0 && y % 2 == 0 { WALL } else { FLOOR };
                assert_eq!(map.tile_at(Pos { y, x }), expected, "at ({x},{y})");
            }
        }
    }

    #[test]
    fn irregular_room_leaves_a_pillar_lattice() {
        let mut map = GameMap::new(16, 16);
        let room = Room::new(RoomShape::Irregular, 0, 0, 6, 6);
        room.dig(&mut map);

        // width/3 == height/3 == 2: pillars wherever both coordinates are
        // multiples of two.
        for y in 0..6 {
            for x in 0..6 {
                let expected = if x % 2 == 0 && y % 2 == 0 { WALL } else { FLOOR };
                assert_eq!(map.tile_at(Pos { y, x }), expected, "at ({x},{y})");
            }
        }
    }
}
