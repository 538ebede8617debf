use std::ops::{Add, AddAssign, Sub};

/// A cell coordinate on the canvas. May lie outside the grid; primitives
/// routinely compute off-grid points.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Position { x, y }
    }

    pub fn min(self, other: Self) -> Self {
        Position::new(self.x.min(other.x), self.y.min(other.y))
    }

    pub fn max(self, other: Self) -> Self {
        Position::new(self.x.max(other.x), self.y.max(other.y))
    }

    /// Euclidean distance to `other`.
    pub fn distance(self, other: Self) -> f64 {
        let dx = f64::from(other.x - self.x);
        let dy = f64::from(other.y - self.y);
        (dx * dx + dy * dy).sqrt()
    }
}

impl Add<Position> for Position {
    type Output = Position;

    fn add(self, rhs: Position) -> Position {
        Position {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl AddAssign<Position> for Position {
    fn add_assign(&mut self, rhs: Position) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub<Position> for Position {
    type Output = Position;

    fn sub(self, rhs: Position) -> Position {
        Position {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl From<(i32, i32)> for Position {
    fn from(value: (i32, i32)) -> Self {
        Position { x: value.0, y: value.1 }
    }
}

/// An inclusive, normalized rectangle: `top_left <= bottom_right` on both axes.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rectangle {
    pub top_left: Position,
    pub bottom_right: Position,
}

impl Rectangle {
    /// Builds a rectangle from two arbitrary corners.
    pub fn from_corners(a: impl Into<Position>, b: impl Into<Position>) -> Self {
        let (a, b) = (a.into(), b.into());
        Self {
            top_left: a.min(b),
            bottom_right: a.max(b),
        }
    }

    pub fn left(&self) -> i32 {
        self.top_left.x
    }

    pub fn right(&self) -> i32 {
        self.bottom_right.x
    }

    pub fn top(&self) -> i32 {
        self.top_left.y
    }

    pub fn bottom(&self) -> i32 {
        self.bottom_right.y
    }

    pub fn width(&self) -> i32 {
        self.right() - self.left() + 1
    }

    pub fn height(&self) -> i32 {
        self.bottom() - self.top() + 1
    }

    pub fn is_inside(&self, pos: impl Into<Position>) -> bool {
        let pos = pos.into();
        self.left() <= pos.x && pos.x <= self.right() && self.top() <= pos.y && pos.y <= self.bottom()
    }

    /// True if `pos` lies on the outer ring of the rectangle.
    pub fn is_on_border(&self, pos: impl Into<Position>) -> bool {
        let pos = pos.into();
        self.is_inside(pos) && (pos.x == self.left() || pos.x == self.right() || pos.y == self.top() || pos.y == self.bottom())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_corners_normalizes() {
        let rect = Rectangle::from_corners((7, 2), (3, 9));
        assert_eq!(Position::new(3, 2), rect.top_left);
        assert_eq!(Position::new(7, 9), rect.bottom_right);
        assert_eq!(5, rect.width());
        assert_eq!(8, rect.height());
    }

    #[test]
    fn test_border() {
        let rect = Rectangle::from_corners((0, 0), (4, 4));
        assert!(rect.is_on_border((0, 2)));
        assert!(rect.is_on_border((4, 4)));
        assert!(!rect.is_on_border((2, 2)));
        assert!(!rect.is_on_border((5, 0)));
    }

    #[test]
    fn test_distance() {
        assert_eq!(5.0, Position::new(0, 0).distance(Position::new(3, 4)));
    }
}
