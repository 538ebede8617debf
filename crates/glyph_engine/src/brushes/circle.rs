use crate::{Cell, Position};

use super::{DrawTarget, plot_all};

fn push_octants(points: &mut Vec<Position>, center: Position, x: i32, y: i32) {
    let Position { x: cx, y: cy } = center;
    points.extend_from_slice(&[
        Position::new(cx + x, cy + y),
        Position::new(cx - x, cy + y),
        Position::new(cx + x, cy - y),
        Position::new(cx - x, cy - y),
        Position::new(cx + y, cy + x),
        Position::new(cx - y, cy + x),
        Position::new(cx + y, cy - x),
        Position::new(cx - y, cy - x),
    ]);
}

/// Midpoint circle outline. Each computed octant point is reflected eight
/// ways, so the result may contain duplicates.
pub fn get_circle_points(center: Position, radius: i32) -> Vec<Position> {
    let mut points = Vec::new();
    let mut x = 0;
    let mut y = radius;
    let mut d = 3 - 2 * radius;
    push_octants(&mut points, center, x, y);
    while y >= x {
        x += 1;
        if d > 0 {
            y -= 1;
            d += 4 * (x - y) + 10;
        } else {
            d += 4 * x + 6;
        }
        push_octants(&mut points, center, x, y);
    }
    points
}

/// Every cell whose squared distance to `center` is at most `radius²`.
pub fn get_filled_circle_points(center: Position, radius: i32) -> Vec<Position> {
    let mut points = Vec::new();
    let r2 = radius * radius;
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx * dx + dy * dy <= r2 {
                points.push(Position::new(center.x + dx, center.y + dy));
            }
        }
    }
    points
}

pub fn draw_circle<T: DrawTarget>(target: &mut T, paint: Cell, center: Position, radius: i32, filled: bool) {
    if filled {
        plot_all(target, paint, get_filled_circle_points(center, radius));
    } else {
        plot_all(target, paint, get_circle_points(center, radius));
    }
}
