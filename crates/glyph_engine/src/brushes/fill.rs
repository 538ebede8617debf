use crate::{Cell, Position};

use super::DrawTarget;

/// 4-connected flood fill starting at `seed`. Returns the number of cells written.
///
/// A cell belongs to the region when its glyph and foreground match the seed
/// cell. The background color is not compared, so a fill spreads across cells
/// that differ only in background and replaces their background with the
/// paint's.
///
/// Nothing happens when the seed is off the grid, the target is read only, or
/// the paint already has the seed's glyph and foreground.
pub fn flood_fill<T: DrawTarget>(target: &mut T, paint: Cell, seed: Position) -> usize {
    if !target.is_valid(seed) || target.is_read_only() {
        return 0;
    }
    let old = target.cell_at(seed);
    let matches = |cell: Cell| cell.ch == old.ch && cell.fg == old.fg;
    if matches(paint) {
        return 0;
    }

    let mut filled = 0;
    let mut stack = vec![seed];
    while let Some(pos) = stack.pop() {
        // a position can be pushed by several neighbors before it gets painted
        if !matches(target.cell_at(pos)) {
            continue;
        }
        target.set_cell(pos, paint);
        filled += 1;

        for offset in [(1, 0), (-1, 0), (0, 1), (0, -1)] {
            let next = pos + Position::from(offset);
            if target.is_valid(next) && matches(target.cell_at(next)) {
                stack.push(next);
            }
        }
    }
    filled
}
