//! Layer access rules: bounds checked reads and writes, locking, clearing

use glyph_engine::{Cell, Layer, Position};
use pretty_assertions::assert_eq;

#[test]
fn test_set_then_get_in_bounds() {
    let mut layer = Layer::new("main", 7, 5);
    for y in 0..5 {
        for x in 0..7 {
            let cell = Cell::new(char::from(b'a' + ((x + y) % 26) as u8), (x % 9) as u8, (y % 9) as u8);
            layer.set((x, y), cell);
            assert_eq!(cell, layer.get((x, y)));
        }
    }
}

#[test]
fn test_out_of_bounds_reads_are_empty() {
    let mut layer = Layer::new("main", 4, 3);
    for pos in [(-1, 0), (0, -1), (4, 0), (0, 3), (100, 100), (i32::MIN, i32::MAX)] {
        layer.set(pos, Cell::from('x'));
        assert_eq!(Cell::EMPTY, layer.get(pos));
    }
    assert!(layer.rows().flatten().all(|c| c.is_empty()));
}

#[test]
fn test_locked_layer_ignores_writes_and_clear() {
    let mut layer = Layer::new("main", 4, 3);
    layer.set((1, 1), Cell::from('a'));
    let before = layer.clone();

    layer.set_is_locked(true);
    for y in 0..3 {
        for x in 0..4 {
            layer.set((x, y), Cell::from('z'));
        }
    }
    layer.clear();
    assert_eq!(before.to_string(), layer.to_string());

    layer.set_is_locked(false);
    layer.clear();
    assert!(layer.rows().flatten().all(|c| c.is_empty()));
}

#[test]
fn test_clones_share_untouched_rows() {
    let mut layer = Layer::new("main", 10, 8);
    layer.set(Position::new(0, 0), Cell::from('a'));
    let snapshot = layer.clone();
    assert_eq!(8, layer.shared_rows(&snapshot));

    layer.set(Position::new(3, 4), Cell::from('b'));
    assert_eq!(7, layer.shared_rows(&snapshot));
    assert_eq!(Cell::EMPTY, snapshot.get((3, 4)));
}
