//! Regular shapes squashed vertically to make up for tall terminal cells.

use std::f64::consts::PI;

use crate::{Cell, Position};

use super::{DrawTarget, draw_line};

/// Shapes smaller than this collapse into noise, so radii are raised to it.
pub const MIN_SHAPE_RADIUS: i32 = 3;

pub const STAR_V_SCALE: f64 = 0.6;
pub const STAR_INNER_RATIO: f64 = 0.38;
pub const TRIANGLE_V_SCALE: f64 = 0.7;
pub const HEXAGON_V_SCALE: f64 = 0.65;

fn vertex(center: Position, radius: f64, angle: f64, v_scale: f64) -> Position {
    Position::new(
        center.x + (radius * angle.cos()) as i32,
        center.y + (radius * angle.sin() * v_scale) as i32,
    )
}

/// Ten vertices alternating between the outer and the inner radius, first one on top.
pub fn star_vertices(center: Position, radius: i32) -> Vec<Position> {
    let outer = radius.max(MIN_SHAPE_RADIUS) as f64;
    let inner = outer * STAR_INNER_RATIO;
    (0..10)
        .map(|i| {
            let angle = i as f64 * PI / 5.0 - PI / 2.0;
            let r = if i % 2 == 0 { outer } else { inner };
            vertex(center, r, angle, STAR_V_SCALE)
        })
        .collect()
}

pub fn triangle_vertices(center: Position, radius: i32) -> Vec<Position> {
    let r = radius.max(MIN_SHAPE_RADIUS) as f64;
    (0..3)
        .map(|i| vertex(center, r, i as f64 * 2.0 * PI / 3.0 - PI / 2.0, TRIANGLE_V_SCALE))
        .collect()
}

pub fn hexagon_vertices(center: Position, radius: i32) -> Vec<Position> {
    let r = radius.max(MIN_SHAPE_RADIUS) as f64;
    (0..6).map(|i| vertex(center, r, i as f64 * PI / 3.0 + PI / 6.0, HEXAGON_V_SCALE)).collect()
}

/// Closed polygon: connects consecutive vertices and the last one back to the first.
pub fn draw_polygon<T: DrawTarget>(target: &mut T, paint: Cell, vertices: &[Position], thickness: i32) {
    for (i, from) in vertices.iter().enumerate() {
        let to = vertices[(i + 1) % vertices.len()];
        draw_line(target, paint, *from, to, thickness);
    }
}

pub fn draw_star<T: DrawTarget>(target: &mut T, paint: Cell, center: Position, radius: i32, thickness: i32) {
    draw_polygon(target, paint, &star_vertices(center, radius), thickness);
}

pub fn draw_triangle<T: DrawTarget>(target: &mut T, paint: Cell, center: Position, radius: i32, thickness: i32) {
    draw_polygon(target, paint, &triangle_vertices(center, radius), thickness);
}

pub fn draw_hexagon<T: DrawTarget>(target: &mut T, paint: Cell, center: Position, radius: i32, thickness: i32) {
    draw_polygon(target, paint, &hexagon_vertices(center, radius), thickness);
}
