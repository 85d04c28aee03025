//! Static tile definitions shared by value across the map grid.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Glyph {
    pub ch: char,
    pub fg: Rgb,
    pub bg: Rgb,
}

pub const fn glyph(ch: char, fg: Rgb, bg: Rgb) -> Glyph {
    Glyph { ch, fg, bg }
}

/// Per-cell terrain descriptor. Stateless; a tile kind is just a named
/// constant instance and the grid stores copies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tile {
    pub walkable: bool,
    pub transparent: bool,
    /// Glyph when explored but out of the field of view.
    pub dark: Glyph,
    /// Glyph when currently in the field of view.
    pub light: Glyph,
}

pub const fn new_tile(walkable: bool, transparent: bool, dark: Glyph, light: Glyph) -> Tile {
    Tile { walkable, transparent, dark, light }
}

/// Render fallback for never-explored cells. Never stored in the grid.
pub const SHROUD: Glyph = glyph(' ', Rgb(255, 255, 255), Rgb(0, 0, 0));

pub const FLOOR: Tile = new_tile(
    true,
    true,
    glyph(' ', Rgb(65, 45, 75), Rgb(50, 45, 35)),
    glyph(' ', Rgb(255, 255, 255), Rgb(140, 110, 80)),
);

pub const WALL: Tile = new_tile(
    false,
    false,
    glyph('█', Rgb(85, 85, 75), Rgb(10, 10, 10)),
    glyph('█', Rgb(160, 150, 130), Rgb(40, 35, 25)),
);

pub const DOWN_STAIRS: Tile = new_tile(
    true,
    true,
    glyph('>', Rgb(65, 45, 75), Rgb(50, 45, 35)),
    glyph('>', Rgb(255, 255, 255), Rgb(140, 110, 80)),
);
