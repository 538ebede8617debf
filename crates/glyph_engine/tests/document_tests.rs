//! Saving and loading documents

use std::path::PathBuf;

use glyph_engine::{Cell, Document, EditSession, EditorOptions, Key};
use pretty_assertions::assert_eq;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("glyph_engine_{}_{name}.json", std::process::id()))
}

fn session(width: i32, height: i32) -> EditSession {
    EditSession::with_seed(
        &EditorOptions {
            width,
            height,
            ..Default::default()
        },
        11,
    )
}

fn grids(session: &EditSession) -> Vec<Vec<Vec<Cell>>> {
    session.canvas().layers().iter().map(|l| l.rows().map(|r| r.to_vec()).collect()).collect()
}

#[test]
fn test_save_then_load_round_trips() {
    let mut source = session(6, 4);
    source.canvas_mut().active_layer_mut().set((0, 0), Cell::new('a', 1, 2));
    source.canvas_mut().active_layer_mut().set((5, 3), Cell::new('█', 8, 8));
    source.handle_key(Key::Char('+'));
    source.canvas_mut().active_layer_mut().set((2, 1), Cell::new('~', 6, 0));
    source.canvas_mut().toggle_layer_visibility(1);

    let path = temp_path("round_trip");
    assert!(source.save_file(&path));
    assert_eq!(1, source.stats().saves);

    let mut target = session(10, 10);
    assert!(target.load_file(&path));
    let _ = std::fs::remove_file(&path);

    assert_eq!(grids(&source), grids(&target));
    assert_eq!(6, target.canvas().width());
    assert_eq!(4, target.canvas().height());
    assert_eq!(0, target.canvas().active_layer_index());
    assert_eq!("layer2", target.canvas().layers()[1].title());
    assert!(!target.canvas().layers()[1].is_visible());
}

#[test]
fn test_load_pushes_one_snapshot() {
    let source = session(3, 2);
    let doc = source.to_document();

    let mut target = session(3, 2);
    target.canvas_mut().active_layer_mut().set((1, 1), Cell::from('x'));
    target.canvas_mut().snapshot();
    let before = target.canvas().history().undo_len();
    target.load_document(&doc).unwrap();
    assert_eq!(before + 1, target.canvas().history().undo_len());
    assert!(target.canvas().active_layer().get((1, 1)).is_empty());

    target.handle_key(Key::Char('u'));
    assert_eq!('x', target.canvas().active_layer().get((1, 1)).ch);
}

#[test]
fn test_missing_colors_default_to_zero() {
    let json = r#"{"width":3,"height":1,"layers":[{"name":"main","visible":true,"data":[["a","b","c"]]}]}"#;
    let mut target = session(3, 1);
    target.load_document(&Document::from_json(json).unwrap()).unwrap();
    assert_eq!(Cell::new('b', 0, 0), target.canvas().active_layer().get((1, 0)));
}

#[test]
fn test_numeric_string_colors() {
    let json = r#"{"width":2,"height":1,"layers":[{"name":"main","visible":true,"data":[["a","b"]],"colors":[["5","7"]],"bg_colors":[[1,"2"]]}]}"#;
    let mut target = session(2, 1);
    target.load_document(&Document::from_json(json).unwrap()).unwrap();
    assert_eq!(Cell::new('a', 5, 1), target.canvas().active_layer().get((0, 0)));
    assert_eq!(Cell::new('b', 7, 2), target.canvas().active_layer().get((1, 0)));
}

#[test]
fn test_failed_load_leaves_canvas_untouched() {
    let mut target = session(4, 2);
    target.canvas_mut().active_layer_mut().set((1, 1), Cell::from('k'));
    target.canvas_mut().snapshot();
    let before = grids(&target);
    let history = target.canvas().history().undo_len();

    let path = temp_path("broken");
    std::fs::write(&path, r#"{"width":4,"height":2,"layers":[{"name":"main","data":[["a"],["b"]]}]}"#).unwrap();
    assert!(!target.load_file(&path));
    std::fs::write(&path, "not json").unwrap();
    assert!(!target.load_file(&path));
    let _ = std::fs::remove_file(&path);
    assert!(!target.load_file(&temp_path("does_not_exist")));

    assert_eq!(before, grids(&target));
    assert_eq!(history, target.canvas().history().undo_len());
}
