//! Line drawing algorithms
//!
//! Implements Bresenham's line algorithm for drawing lines between two points.

use crate::{Cell, Position};

use super::{DrawTarget, plot_all};

/// Generate all points on a line from p0 to p1 using Bresenham's algorithm
pub fn get_line_points(p0: Position, p1: Position) -> Vec<Position> {
    let dx = (p1.x - p0.x).abs();
    let dy = (p1.y - p0.y).abs();
    let sx = if p0.x < p1.x { 1 } else { -1 };
    let sy = if p0.y < p1.y { 1 } else { -1 };
    let mut err = dx - dy;

    let mut x = p0.x;
    let mut y = p0.y;
    let mut points = Vec::with_capacity((dx.max(dy) + 1) as usize);

    loop {
        points.push(Position::new(x, y));

        if x == p1.x && y == p1.y {
            break;
        }

        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x += sx;
        }
        if e2 < dx {
            err += dx;
            y += sy;
        }
    }

    points
}

/// Points of a line where every path point is widened to a `thickness`×`thickness`
/// square block. The block is offset by `-(thickness / 2)`, so even thicknesses
/// extend one cell further to the bottom right.
pub fn get_thick_line_points(p0: Position, p1: Position, thickness: i32) -> Vec<Position> {
    let path = get_line_points(p0, p1);
    if thickness <= 1 {
        return path;
    }
    let half = thickness / 2;
    let mut points = Vec::with_capacity(path.len() * (thickness * thickness) as usize);
    for pt in path {
        for tx in 0..thickness {
            for ty in 0..thickness {
                points.push(Position::new(pt.x + tx - half, pt.y + ty - half));
            }
        }
    }
    points
}

/// Draw a line from p0 to p1
pub fn draw_line<T: DrawTarget>(target: &mut T, paint: Cell, p0: Position, p1: Position, thickness: i32) {
    plot_all(target, paint, get_thick_line_points(p0, p1, thickness));
}
