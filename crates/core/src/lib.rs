pub mod game_map;
pub mod items;
pub mod mapgen;
pub mod tiles;
pub mod types;

pub use game_map::{Actor, GameMap, GlyphBuffer, Item, Surface};
pub use items::{HealingConsumable, LightningConsumable, MessageLog, MessageSink};
pub use mapgen::{DungeonConfig, DungeonRng, generate_dungeon};
pub use tiles::{DOWN_STAIRS, FLOOR, Glyph, Rgb, SHROUD, Tile, WALL};
pub use types::*;
