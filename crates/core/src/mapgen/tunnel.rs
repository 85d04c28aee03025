//! L-shaped corridor routing between room centers.

use crate::types::Pos;

use super::rng::DungeonRng;

/// Corridor endpoints sit on room centers, which are already dug; the
/// cells right next to them may be pattern walls the room left standing
/// on purpose. Trimming both ends keeps the corridor from re-digging them.
const ENDPOINT_TRIM: usize = 2;

/// Classic integer Bresenham walk from `start` to `end`, both endpoints
/// included.
pub fn bresenham_line(start: Pos, end: Pos) -> Vec<Pos> {
    let dx = (end.x - start.x).abs();
    let dy = -(end.y - start.y).abs();
    let sx = (end.x - start.x).signum();
    let sy = (end.y - start.y).signum();

    let mut points = Vec::new();
    let mut err = dx + dy;
    let mut x = start.x;
    let mut y = start.y;
    loop {
        points.push(Pos { y, x });
        if x == end.x && y == end.y {
            break;
        }
        let doubled = 2 * err;
        if doubled >= dy {
            err += dy;
            x += sx;
        }
        if doubled <= dx {
            err += dx;
            y += sy;
        }
    }
    points
}

/// Ordered cells of an L-shaped corridor between two points. The corner
/// is chosen 50/50 between horizontal-then-vertical and
/// vertical-then-horizontal; the first two cells of the first leg and the
/// last two cells of the second leg are dropped.
pub fn tunnel_between(rng: &mut DungeonRng, start: Pos, end: Pos) -> Vec<Pos> {
    let corner = if rng.unit() < 0.5 {
        Pos { y: start.y, x: end.x }
    } else {
        Pos { y: end.y, x: start.x }
    };

    let mut path = Vec::new();
    path.extend(bresenham_line(start, corner).into_iter().skip(ENDPOINT_TRIM));
    let second = bresenham_line(corner, end);
    let keep = second.len().saturating_sub(ENDPOINT_TRIM);
    path.extend(second.into_iter().take(keep));
    path
}
