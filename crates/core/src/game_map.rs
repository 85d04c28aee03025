//! The long-lived map aggregate: tile grid, visibility bitmaps, and the
//! entity arena. Queried every render frame and by gameplay logic; replaced
//! wholesale on level transition.

use slotmap::SlotMap;

use crate::tiles::{DOWN_STAIRS, FLOOR, Glyph, Rgb, SHROUD, Tile, WALL, glyph};
use crate::types::{ActorKind, EntityId, ItemId, ItemKind, Pos};

#[derive(Clone, Debug)]
pub struct Actor {
    pub id: EntityId,
    pub kind: ActorKind,
    pub pos: Pos,
    pub hp: i32,
    pub max_hp: i32,
}

impl Actor {
    /// Heal up to `amount`, clamped at `max_hp`. Returns the amount
    /// actually recovered (0 when already at full health).
    pub fn heal(&mut self, amount: i32) -> i32 {
        let new_hp = (self.hp + amount).min(self.max_hp);
        let recovered = new_hp - self.hp;
        self.hp = new_hp;
        recovered
    }

    pub fn take_damage(&mut self, amount: i32) {
        self.hp -= amount;
    }

    /// Euclidean distance from this actor to a grid cell.
    pub fn distance(&self, x: i32, y: i32) -> f64 {
        let dx = (x - self.pos.x) as f64;
        let dy = (y - self.pos.y) as f64;
        (dx * dx + dy * dy).sqrt()
    }

    pub fn glyph(&self) -> Glyph {
        match self.kind {
            ActorKind::Player => glyph('@', Rgb(255, 255, 255), Rgb(0, 0, 0)),
            ActorKind::Orc => glyph('o', Rgb(63, 127, 63), Rgb(0, 0, 0)),
            ActorKind::Troll => glyph('T', Rgb(0, 127, 0), Rgb(0, 0, 0)),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Item {
    pub id: ItemId,
    pub kind: ItemKind,
    pub pos: Pos,
}

impl Item {
    pub fn glyph(&self) -> Glyph {
        match self.kind {
            ItemKind::HealthPotion => glyph('!', Rgb(127, 0, 255), Rgb(0, 0, 0)),
            ItemKind::FireballScroll => glyph('~', Rgb(255, 0, 0), Rgb(0, 0, 0)),
            ItemKind::ConfusionScroll => glyph('~', Rgb(207, 63, 255), Rgb(0, 0, 0)),
            ItemKind::LightningScroll => glyph('~', Rgb(255, 255, 0), Rgb(0, 0, 0)),
        }
    }
}

fn base_hp(kind: ActorKind) -> i32 {
    match kind {
        ActorKind::Player => 30,
        ActorKind::Orc => 10,
        ActorKind::Troll => 16,
    }
}

/// Drawing seam consumed by `GameMap::render`. The real console backend
/// lives outside this crate; tests and tools use [`GlyphBuffer`].
pub trait Surface {
    fn put(&mut self, x: i32, y: i32, glyph: Glyph);
}

/// In-memory `Surface` backed by a row-major glyph grid.
pub struct GlyphBuffer {
    pub width: usize,
    pub height: usize,
    pub cells: Vec<Glyph>,
}

impl GlyphBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, cells: vec![SHROUD; width * height] }
    }

    pub fn at(&self, x: i32, y: i32) -> Glyph {
        self.cells[(y as usize) * self.width + (x as usize)]
    }
}

impl Surface for GlyphBuffer {
    fn put(&mut self, x: i32, y: i32, glyph: Glyph) {
        if x < 0 || y < 0 || (x as usize) >= self.width || (y as usize) >= self.height {
            return;
        }
        self.cells[(y as usize) * self.width + (x as usize)] = glyph;
    }
}

pub struct GameMap {
    pub width: usize,
    pub height: usize,
    tiles: Vec<Tile>,
    visible: Vec<bool>,
    explored: Vec<bool>,
    pub actors: SlotMap<EntityId, Actor>,
    pub items: SlotMap<ItemId, Item>,
    pub player_id: EntityId,
    pub downstairs_location: Pos,
}

impl GameMap {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            tiles: vec![WALL; width * height],
            visible: vec![false; width * height],
            explored: vec![false; width * height],
            actors: SlotMap::with_key(),
            items: SlotMap::with_key(),
            player_id: EntityId::default(),
            downstairs_location: Pos { y: 0, x: 0 },
        }
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.x >= 0
            && pos.y >= 0
            && (pos.x as usize) < self.width
            && (pos.y as usize) < self.height
    }

    pub fn tile_at(&self, pos: Pos) -> Tile {
        if !self.in_bounds(pos) {
            return WALL;
        }
        self.tiles[self.index(pos)]
    }

    /// Out-of-bounds writes are ignored, so carving can never escape the
    /// grid regardless of what the generator asks for.
    pub fn set_tile(&mut self, pos: Pos, tile: Tile) {
        if !self.in_bounds(pos) {
            return;
        }
        let idx = self.index(pos);
        self.tiles[idx] = tile;
    }

    pub fn is_visible(&self, pos: Pos) -> bool {
        self.in_bounds(pos) && self.visible[self.index(pos)]
    }

    pub fn is_explored(&self, pos: Pos) -> bool {
        self.in_bounds(pos) && self.explored[self.index(pos)]
    }

    /// Mark a cell as currently in the field of view. Explored is set at
    /// the same time so a visible cell is always an explored cell.
    pub fn set_visible(&mut self, pos: Pos) {
        if !self.in_bounds(pos) {
            return;
        }
        let idx = self.index(pos);
        self.visible[idx] = true;
        self.explored[idx] = true;
    }

    /// Reset the in-view bitmap between turns. Explored is monotonic and
    /// is never cleared.
    pub fn clear_visible(&mut self) {
        self.visible.fill(false);
    }

    /// Ingest a freshly computed field of view from the external FOV
    /// system. The slice must cover the whole grid, row-major.
    pub fn apply_fov(&mut self, visible: &[bool]) {
        debug_assert_eq!(visible.len(), self.width * self.height);
        self.visible.copy_from_slice(visible);
        for (explored, &seen) in self.explored.iter_mut().zip(visible) {
            *explored |= seen;
        }
    }

    /// Mark the whole grid visible and explored. Inspection helper for
    /// tools and tests, not a gameplay path.
    pub fn reveal_all(&mut self) {
        self.visible.fill(true);
        self.explored.fill(true);
    }

    pub fn spawn_actor(&mut self, kind: ActorKind, pos: Pos) -> EntityId {
        let hp = base_hp(kind);
        let id = self.actors.insert(Actor { id: EntityId::default(), kind, pos, hp, max_hp: hp });
        self.actors[id].id = id;
        id
    }

    pub fn spawn_item(&mut self, kind: ItemKind, pos: Pos) -> ItemId {
        let id = self.items.insert(Item { id: ItemId::default(), kind, pos });
        self.items[id].id = id;
        id
    }

    /// Exact-coordinate occupancy scan; there is no spatial index.
    pub fn actor_at(&self, pos: Pos) -> Option<EntityId> {
        self.actors.values().find(|actor| actor.pos == pos).map(|actor| actor.id)
    }

    pub fn item_at(&self, pos: Pos) -> Option<ItemId> {
        self.items.values().find(|item| item.pos == pos).map(|item| item.id)
    }

    /// Draw the grid then overlay entities in view. Visible cells use the
    /// tile's `light` glyph, explored-but-hidden cells the `dark` glyph,
    /// never-seen cells the shroud. Pure read; calling twice with unchanged
    /// state produces identical output.
    pub fn render(&self, surface: &mut dyn Surface) {
        for y in 0..self.height {
            for x in 0..self.width {
                let idx = y * self.width + x;
                let tile = self.tiles[idx];
                let cell = if self.visible[idx] {
                    tile.light
                } else if self.explored[idx] {
                    tile.dark
                } else {
                    SHROUD
                };
                surface.put(x as i32, y as i32, cell);
            }
        }
        for item in self.items.values() {
            if self.is_visible(item.pos) {
                surface.put(item.pos.x, item.pos.y, item.glyph());
            }
        }
        for actor in self.actors.values() {
            if self.is_visible(actor.pos) {
                surface.put(actor.pos.x, actor.pos.y, actor.glyph());
            }
        }
    }

    /// Stable byte encoding of everything generation decides, for
    /// fingerprinting in determinism tests.
    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend((self.width as u32).to_le_bytes());
        bytes.extend((self.height as u32).to_le_bytes());
        for tile in &self.tiles {
            bytes.push(if *tile == WALL {
                0
            } else if *tile == FLOOR {
                1
            } else if *tile == DOWN_STAIRS {
                2
            } else {
                3
            });
        }
        bytes.extend(self.downstairs_location.y.to_le_bytes());
        bytes.extend(self.downstairs_location.x.to_le_bytes());

        let mut actors: Vec<&Actor> = self.actors.values().collect();
        actors.sort_by_key(|actor| (actor.pos, actor.kind));
        bytes.extend((actors.len() as u32).to_le_bytes());
        for actor in actors {
            bytes.push(match actor.kind {
                ActorKind::Player => 0,
                ActorKind::Orc => 1,
                ActorKind::Troll => 2,
            });
            bytes.extend(actor.pos.y.to_le_bytes());
            bytes.extend(actor.pos.x.to_le_bytes());
        }

        let mut items: Vec<&Item> = self.items.values().collect();
        items.sort_by_key(|item| (item.pos, item.kind));
        bytes.extend((items.len() as u32).to_le_bytes());
        for item in items {
            bytes.push(match item.kind {
                ItemKind::HealthPotion => 0,
                ItemKind::FireballScroll => 1,
                ItemKind::ConfusionScroll => 2,
                ItemKind::LightningScroll => 3,
            });
            bytes.extend(item.pos.y.to_le_bytes());
            bytes.extend(item.pos.x.to_le_bytes());
        }

        bytes
    }

    fn index(&self, pos: Pos) -> usize {
        (pos.y as usize) * self.width + (pos.x as usize)
    }
}
