use crate::{Cell, Position};

use super::{DrawTarget, draw_line};

const MIN_HEAD_LENGTH: i32 = 3;
const MAX_HEAD_LENGTH: i32 = 8;
const WING_SPREAD: f64 = 0.4;

/// The two wing tips of an arrow pointing from `from` to `to`.
///
/// Returns `None` for arrows of length 2 or less, which get no head.
pub fn arrow_head_points(from: Position, to: Position) -> Option<(Position, Position)> {
    let length = from.distance(to);
    if length <= 2.0 {
        return None;
    }
    let dx = (to.x - from.x) as f64 / length;
    let dy = (to.y - from.y) as f64 / length;
    let head = ((length * 0.3) as i32).clamp(MIN_HEAD_LENGTH, MAX_HEAD_LENGTH) as f64;

    let (perp_x, perp_y) = (-dy, dx);
    let base_x = to.x as f64 - head * dx;
    let base_y = to.y as f64 - head * dy;
    let spread = head * WING_SPREAD;

    let left = Position::new((base_x + spread * perp_x) as i32, (base_y + spread * perp_y) as i32);
    let right = Position::new((base_x - spread * perp_x) as i32, (base_y - spread * perp_y) as i32);
    Some((left, right))
}

/// Shaft from `from` to `to`, then two wing lines starting at the tip.
pub fn draw_arrow<T: DrawTarget>(target: &mut T, paint: Cell, from: Position, to: Position, thickness: i32) {
    draw_line(target, paint, from, to, thickness);
    if let Some((left, right)) = arrow_head_points(from, to) {
        draw_line(target, paint, to, left, thickness);
        draw_line(target, paint, to, right, thickness);
    }
}
