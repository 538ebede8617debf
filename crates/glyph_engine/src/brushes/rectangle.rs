use crate::{Cell, Position, Rectangle};

use super::{DrawTarget, plot_all};

/// Border cells of the rectangle spanned by two corners (any order).
pub fn get_rectangle_points(p0: Position, p1: Position) -> Vec<Position> {
    let rect = Rectangle::from_corners(p0, p1);
    let mut points = Vec::with_capacity(2 * (rect.width() + rect.height()) as usize);
    for x in rect.left()..=rect.right() {
        points.push(Position::new(x, rect.top()));
        points.push(Position::new(x, rect.bottom()));
    }
    for y in rect.top()..=rect.bottom() {
        points.push(Position::new(rect.left(), y));
        points.push(Position::new(rect.right(), y));
    }
    points
}

/// Every cell inside the rectangle spanned by two corners, borders included.
pub fn get_filled_rectangle_points(p0: Position, p1: Position) -> Vec<Position> {
    let rect = Rectangle::from_corners(p0, p1);
    let mut points = Vec::with_capacity((rect.width() * rect.height()) as usize);
    for y in rect.top()..=rect.bottom() {
        for x in rect.left()..=rect.right() {
            points.push(Position::new(x, y));
        }
    }
    points
}

pub fn draw_rectangle<T: DrawTarget>(target: &mut T, paint: Cell, p0: Position, p1: Position, filled: bool) {
    if filled {
        plot_all(target, paint, get_filled_rectangle_points(p0, p1));
    } else {
        plot_all(target, paint, get_rectangle_points(p0, p1));
    }
}
