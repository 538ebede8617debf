use std::f64::consts::PI;
use std::fmt;

use crate::{Cell, ColorIndex, Position};

use super::DrawTarget;

/// Hand-authored stamps. Each one writes its own glyphs around the target
/// point and only takes the colors from the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Pattern {
    #[default]
    Wave,
    Mesh,
    Dots,
    Cross,
    Spiral,
    Brick,
    Hash,
    Circle,
    Arrow,
    Star,
}

pub const PATTERNS: [Pattern; 10] = [
    Pattern::Wave,
    Pattern::Mesh,
    Pattern::Dots,
    Pattern::Cross,
    Pattern::Spiral,
    Pattern::Brick,
    Pattern::Hash,
    Pattern::Circle,
    Pattern::Arrow,
    Pattern::Star,
];

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl Pattern {
    pub fn name(self) -> &'static str {
        match self {
            Pattern::Wave => "wave",
            Pattern::Mesh => "mesh",
            Pattern::Dots => "dots",
            Pattern::Cross => "cross",
            Pattern::Spiral => "spiral",
            Pattern::Brick => "brick",
            Pattern::Hash => "hash",
            Pattern::Circle => "circle",
            Pattern::Arrow => "arrow",
            Pattern::Star => "star",
        }
    }

    pub fn index(self) -> usize {
        PATTERNS.iter().position(|p| *p == self).unwrap_or(0)
    }

    /// Next pattern in palette order, wrapping around.
    pub fn next(self) -> Self {
        PATTERNS[(self.index() + 1) % PATTERNS.len()]
    }

    pub fn prev(self) -> Self {
        PATTERNS[(self.index() + PATTERNS.len() - 1) % PATTERNS.len()]
    }

    /// Glyphs of the stamp centered at `center`, in write order.
    pub fn cells(self, center: Position) -> Vec<(Position, char)> {
        let Position { x, y } = center;
        let mut out = Vec::new();
        let mut put = |px: i32, py: i32, ch: char| out.push((Position::new(px, py), ch));

        match self {
            Pattern::Wave => {
                for i in -5..=5 {
                    let wy = (y as f64 + 2.0 * (i as f64 * 0.5).sin()) as i32;
                    put(x + i, wy, '~');
                    put(x + i, wy + 1, '≈');
                }
            }
            Pattern::Mesh => {
                for dx in -3..=3_i32 {
                    for dy in -3..=3_i32 {
                        let even_x = dx.rem_euclid(2) == 0;
                        let even_y = dy.rem_euclid(2) == 0;
                        match (even_x, even_y) {
                            (true, true) => put(x + dx, y + dy, 'o'),
                            (true, false) => put(x + dx, y + dy, '|'),
                            (false, true) => put(x + dx, y + dy, '-'),
                            (false, false) => {}
                        }
                    }
                }
            }
            Pattern::Dots => {
                for i in 0..8 {
                    let angle = i as f64 * PI / 4.0;
                    put(x + (2.0 * angle.cos()) as i32, y + (2.0 * angle.sin()) as i32, '•');
                }
            }
            Pattern::Cross => {
                for i in -3..=3 {
                    put(x + i, y, '#');
                    put(x, y + i, '#');
                }
                put(x, y, '+');
            }
            Pattern::Spiral => {
                const GLYPHS: [char; 4] = ['*', '#', '@', '%'];
                for i in 0..20 {
                    let t = i as f64 * 0.3;
                    let r = i as f64 * 0.2;
                    put((x as f64 + r * t.cos()) as i32, (y as f64 + r * t.sin()) as i32, GLYPHS[i % 4]);
                }
            }
            Pattern::Brick => {
                for dy in -2..=2_i32 {
                    for dx in -4..=4_i32 {
                        let mortar = if dy.rem_euclid(2) == 0 { dx.rem_euclid(4) == 0 } else { (dx + 2).rem_euclid(4) == 0 };
                        if mortar {
                            put(x + dx, y + dy, '#');
                        }
                    }
                }
            }
            Pattern::Hash => {
                for i in [-2, -1, 1, 2] {
                    put(x + i, y - 1, '#');
                    put(x + i, y + 1, '#');
                    put(x - 1, y + i, '#');
                    put(x + 1, y + i, '#');
                }
            }
            Pattern::Circle => {
                for deg in (0..360).step_by(30) {
                    let rad = (deg as f64).to_radians();
                    put((x as f64 + 3.0 * rad.cos()) as i32, (y as f64 + 3.0 * rad.sin()) as i32, 'o');
                }
            }
            Pattern::Arrow => {
                put(x, y, '>');
                put(x - 1, y, '-');
                put(x - 2, y, '-');
                put(x + 1, y - 1, '/');
                put(x + 1, y + 1, '\\');
            }
            Pattern::Star => {
                put(x, y, '*');
                put(x, y - 1, '|');
                put(x, y + 1, '|');
                put(x - 1, y, '-');
                put(x + 1, y, '-');
                put(x - 1, y - 1, '\\');
                put(x + 1, y - 1, '/');
                put(x - 1, y + 1, '/');
                put(x + 1, y + 1, '\\');
            }
        }
        out
    }

    pub fn apply<T: DrawTarget>(self, target: &mut T, center: Position, fg: ColorIndex, bg: ColorIndex) {
        for (pos, ch) in self.cells(center) {
            target.set_cell(pos, Cell::new(ch, fg, bg));
        }
    }
}
