use crate::{Cell, ColorIndex, Position};

use super::{DrawTarget, plot_all};

/// A round stamp from the brush palette.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Brush {
    pub name: &'static str,
    /// Diameter-ish size; the stamp radius is `size / 2`.
    pub size: i32,
    pub ch: char,
    pub fg: ColorIndex,
    pub bg: ColorIndex,
}

impl Brush {
    pub const fn new(name: &'static str, size: i32, ch: char, fg: ColorIndex) -> Self {
        Self { name, size, ch, fg, bg: 0 }
    }

    pub fn radius(&self) -> i32 {
        self.size / 2
    }

    pub fn paint(&self) -> Cell {
        Cell::new(self.ch, self.fg, self.bg)
    }
}

pub static BRUSHES: [Brush; 5] = [
    Brush::new("small", 1, '#', 1),
    Brush::new("medium", 2, '#', 2),
    Brush::new("large", 3, '*', 4),
    Brush::new("huge", 4, '@', 5),
    Brush::new("block", 5, '█', 6),
];

/// Cells covered by a stamp of the given brush size centered at `center`.
pub fn get_brush_points(center: Position, size: i32) -> Vec<Position> {
    if size <= 1 {
        return vec![center];
    }
    let r = size / 2;
    let mut points = Vec::new();
    for dy in -r..=r {
        for dx in -r..=r {
            if dx * dx + dy * dy <= r * r {
                points.push(Position::new(center.x + dx, center.y + dy));
            }
        }
    }
    points
}

pub fn stamp_brush<T: DrawTarget>(target: &mut T, paint: Cell, center: Position, size: i32) {
    plot_all(target, paint, get_brush_points(center, size));
}

/// Scatters up to `3 * size` cells inside a disc of radius `2 * size`.
///
/// Each trial picks an offset in the bounding square; trials outside the disc
/// are dropped rather than retried. Returns the number of accepted trials.
pub fn spray<T: DrawTarget>(target: &mut T, paint: Cell, center: Position, size: i32, rng: &mut fastrand::Rng) -> usize {
    let reach = 2 * size.max(1);
    let mut accepted = 0;
    for _ in 0..size.max(1) * 3 {
        let dx = rng.i32(-reach..=reach);
        let dy = rng.i32(-reach..=reach);
        if dx * dx + dy * dy <= reach * reach {
            target.set_cell(Position::new(center.x + dx, center.y + dy), paint);
            accepted += 1;
        }
    }
    accepted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brushes::RecordingTarget;

    #[test]
    fn test_size_one_is_single_cell() {
        assert_eq!(vec![Position::new(4, 4)], get_brush_points(Position::new(4, 4), 1));
    }

    #[test]
    fn test_brush_disc() {
        // size 3 -> radius 1 -> plus shape
        assert_eq!(5, get_brush_points(Position::new(0, 0), 3).len());
        // size 4 -> radius 2
        assert_eq!(13, get_brush_points(Position::new(0, 0), 4).len());
    }

    #[test]
    fn test_spray_stays_in_disc() {
        let mut rng = fastrand::Rng::with_seed(7);
        let center = Position::new(50, 50);
        for size in 1..=5 {
            let mut target = RecordingTarget::new(100, 100);
            let accepted = spray(&mut target, Cell::from('.'), center, size, &mut rng);
            assert!(accepted <= (size * 3) as usize);
            assert_eq!(accepted, target.writes.len());
            for p in &target.writes {
                let d = *p - center;
                assert!(d.x * d.x + d.y * d.y <= 4 * size * size);
            }
        }
    }

    #[test]
    fn test_spray_is_reproducible() {
        let mut a = RecordingTarget::new(100, 100);
        let mut b = RecordingTarget::new(100, 100);
        spray(&mut a, Cell::from('.'), Position::new(50, 50), 4, &mut fastrand::Rng::with_seed(42));
        spray(&mut b, Cell::from('.'), Position::new(50, 50), 4, &mut fastrand::Rng::with_seed(42));
        assert_eq!(a.writes, b.writes);
    }
}
