//! Drawing primitives for the character canvas
//!
//! Every primitive is a free function that writes a paint [`Cell`] into a
//! [`DrawTarget`]. Targets silently drop writes outside their bounds, so the
//! algorithms never clip on their own and are free to overshoot the grid.
//!
//! # Features
//! - Line drawing (Bresenham) with square thickness blocks
//! - Rectangle outline and fill
//! - Circle outline (midpoint, 8-way symmetric) and fill
//! - Arrows and regular shapes (star, triangle, hexagon)
//! - 4-connected flood fill
//! - Circular brush stamps, spray and procedural pattern stamps
//!
//! # Example
//! ```
//! use glyph_engine::{Cell, Layer, Position, brushes::draw_line};
//!
//! let mut layer = Layer::new("main", 20, 10);
//! draw_line(&mut layer, Cell::new('#', 1, 0), Position::new(0, 0), Position::new(5, 0), 1);
//! assert_eq!('#', layer.get((5, 0)).ch);
//! ```

mod arrow;
mod circle;
mod fill;
mod line;
mod pattern;
mod polygon;
mod rectangle;
mod stamp;

pub use arrow::{arrow_head_points, draw_arrow};
pub use circle::{draw_circle, get_circle_points, get_filled_circle_points};
pub use fill::flood_fill;
pub use line::{draw_line, get_line_points, get_thick_line_points};
pub use pattern::{PATTERNS, Pattern};
pub use polygon::{
    HEXAGON_V_SCALE, MIN_SHAPE_RADIUS, STAR_INNER_RATIO, STAR_V_SCALE, TRIANGLE_V_SCALE, draw_hexagon, draw_polygon, draw_star, draw_triangle, hexagon_vertices,
    star_vertices, triangle_vertices,
};
pub use rectangle::{draw_rectangle, get_filled_rectangle_points, get_rectangle_points};
pub use stamp::{BRUSHES, Brush, get_brush_points, spray, stamp_brush};

use crate::{Cell, Layer, Position};

/// A trait for targets that can be drawn on
///
/// This abstraction lets the primitives work on a [`Layer`] as well as on
/// recording mocks in tests.
pub trait DrawTarget {
    fn width(&self) -> i32;

    fn height(&self) -> i32;

    /// Cell at `pos`; [`Cell::EMPTY`] outside the grid.
    fn cell_at(&self, pos: Position) -> Cell;

    /// Writes `cell` at `pos`. Out-of-bounds writes must be ignored.
    fn set_cell(&mut self, pos: Position, cell: Cell);

    /// Targets that refuse all writes report `true` here. Flood fill relies
    /// on it to avoid spinning on cells that never change.
    fn is_read_only(&self) -> bool {
        false
    }

    fn is_valid(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.y >= 0 && pos.x < self.width() && pos.y < self.height()
    }
}

impl DrawTarget for Layer {
    fn width(&self) -> i32 {
        Layer::width(self)
    }

    fn height(&self) -> i32 {
        Layer::height(self)
    }

    fn cell_at(&self, pos: Position) -> Cell {
        self.get(pos)
    }

    fn set_cell(&mut self, pos: Position, cell: Cell) {
        self.set(pos, cell);
    }

    fn is_read_only(&self) -> bool {
        self.is_locked()
    }
}

pub(crate) fn plot_all<T: DrawTarget>(target: &mut T, paint: Cell, points: impl IntoIterator<Item = Position>) {
    for pt in points {
        target.set_cell(pt, paint);
    }
}

/// A target that records every write, for asserting exact point sets.
#[cfg(test)]
pub(crate) struct RecordingTarget {
    pub width: i32,
    pub height: i32,
    pub writes: Vec<Position>,
}

#[cfg(test)]
impl RecordingTarget {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            writes: Vec::new(),
        }
    }

    pub fn unique(&self) -> std::collections::HashSet<Position> {
        self.writes.iter().copied().collect()
    }
}

#[cfg(test)]
impl DrawTarget for RecordingTarget {
    fn width(&self) -> i32 {
        self.width
    }

    fn height(&self) -> i32 {
        self.height
    }

    fn cell_at(&self, _pos: Position) -> Cell {
        Cell::EMPTY
    }

    fn set_cell(&mut self, pos: Position, _cell: Cell) {
        self.writes.push(pos);
    }
}
