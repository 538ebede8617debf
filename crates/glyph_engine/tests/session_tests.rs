//! The tool state machine driven through abstract input events

use glyph_engine::{
    Cell, EditSession, EditorEvent, EditorOptions, Key, LayerMenuChoice, MenuChoice, MenuKind, PointerEvent, PointerState, Position, Rectangle, Tool,
    ToolState,
};
use pretty_assertions::assert_eq;

fn session() -> EditSession {
    EditSession::with_seed(
        &EditorOptions {
            width: 20,
            height: 10,
            ..Default::default()
        },
        7,
    )
}

fn undo_len(session: &EditSession) -> usize {
    session.canvas().history().undo_len()
}

fn activate_at(session: &mut EditSession, pos: (i32, i32)) -> EditorEvent {
    session.canvas_mut().set_cursor(pos);
    session.handle_key(Key::Char(' '))
}

fn row(session: &EditSession, y: i32) -> String {
    session.canvas().active_layer().row(y).map(|r| r.iter().map(|c| c.ch).collect()).unwrap_or_default()
}

#[test]
fn test_pen_activation_is_one_action() {
    let mut session = session();
    activate_at(&mut session, (3, 3));
    assert_eq!(Cell::new('#', 0, 0), session.canvas().active_layer().get((3, 3)));
    assert_eq!(2, undo_len(&session));
    assert_eq!(1, session.stats().strokes);
    assert_eq!(1, session.stats().tool_use(Tool::Pen));
}

#[test]
fn test_two_point_line() {
    let mut session = session();
    session.handle_menu(MenuChoice::Tool(Tool::Line));
    activate_at(&mut session, (2, 4));
    assert_eq!(&ToolState::AnchorSet(Position::new(2, 4)), session.state());
    assert_eq!(1, undo_len(&session));

    activate_at(&mut session, (8, 4));
    assert_eq!(&ToolState::Idle, session.state());
    assert_eq!("  #######           ", row(&session, 4));
    assert_eq!(2, undo_len(&session));
}

#[test]
fn test_navigation_cancels_anchor() {
    let mut session = session();
    session.handle_menu(MenuChoice::Tool(Tool::Box));
    activate_at(&mut session, (2, 2));
    assert_eq!(EditorEvent::AnchorCancelled, session.handle_key(Key::Right));
    assert_eq!(&ToolState::Idle, session.state());
    assert_eq!(Position::new(3, 2), session.canvas().cursor());

    // next activation starts over with a new anchor
    session.handle_key(Key::Char(' '));
    assert_eq!(&ToolState::AnchorSet(Position::new(3, 2)), session.state());
    assert_eq!(EditorEvent::Redraw, session.handle_key(Key::Char('=')));
    assert_eq!(&ToolState::AnchorSet(Position::new(3, 2)), session.state());
}

#[test]
fn test_pointer_motion_keeps_anchor() {
    let mut session = session();
    session.handle_menu(MenuChoice::Tool(Tool::Circle));
    activate_at(&mut session, (10, 5));
    session.handle_pointer(PointerEvent::new((12, 5), PointerState::Moved));
    assert_eq!(&ToolState::AnchorSet(Position::new(10, 5)), session.state());

    session.handle_pointer(PointerEvent::new((12, 5), PointerState::Pressed));
    assert_eq!(&ToolState::Idle, session.state());
    let layer = session.canvas().active_layer();
    assert_eq!('#', layer.get((12, 5)).ch);
    assert_eq!('#', layer.get((8, 5)).ch);
    assert!(layer.get((10, 5)).is_empty());
}

#[test]
fn test_text_entry_commit() {
    let mut session = session();
    session.canvas_mut().active_layer_mut().set((3, 1), Cell::new(' ', 4, 2));
    session.handle_menu(MenuChoice::Tool(Tool::Text));
    activate_at(&mut session, (2, 1));

    for key in [Key::Char('h'), Key::Char('i'), Key::Backspace, Key::Char('o'), Key::Char('s')] {
        session.handle_key(key);
    }
    // keys go to the buffer, not to navigation
    assert_eq!(Position::new(2, 1), session.canvas().cursor());
    assert_eq!(Some("hos"), session.state().text_buffer());
    assert_eq!(1, undo_len(&session));

    session.handle_key(Key::Enter);
    assert_eq!(&ToolState::Idle, session.state());
    assert_eq!("  hos               ", row(&session, 1));
    assert_eq!(Cell::new('o', 4, 2), session.canvas().active_layer().get((3, 1)));
    assert_eq!(2, undo_len(&session));
}

#[test]
fn test_text_entry_escape_discards() {
    let mut session = session();
    session.handle_menu(MenuChoice::Tool(Tool::Text));
    activate_at(&mut session, (0, 0));
    session.handle_key(Key::Char('a'));
    session.handle_key(Key::Escape);
    assert_eq!(&ToolState::Idle, session.state());
    assert!(session.canvas().active_layer().get((0, 0)).is_empty());
    assert_eq!(1, undo_len(&session));
}

#[test]
fn test_select_copy_and_move() {
    let mut session = session();
    let layer = session.canvas_mut().active_layer_mut();
    layer.set((1, 1), Cell::new('a', 1, 0));
    layer.set((2, 2), Cell::new('b', 2, 0));

    // move without a clipboard does nothing
    session.handle_menu(MenuChoice::Tool(Tool::Move));
    activate_at(&mut session, (10, 5));
    assert_eq!(1, undo_len(&session));

    session.handle_menu(MenuChoice::Tool(Tool::Select));
    activate_at(&mut session, (2, 2));
    assert_eq!(&ToolState::SelectionPending(Position::new(2, 2)), session.state());
    activate_at(&mut session, (1, 1));
    assert_eq!(Some(Rectangle::from_corners((1, 1), (2, 2))), session.selection());
    assert_eq!(1, undo_len(&session));

    session.handle_key(Key::Char('y'));
    assert_eq!(2, session.clipboard().map(|c| c.width()).unwrap_or_default());
    assert_eq!(1, undo_len(&session));

    session.canvas_mut().active_layer_mut().set((11, 5), Cell::from('z'));
    session.handle_menu(MenuChoice::Tool(Tool::Move));
    activate_at(&mut session, (10, 5));
    let layer = session.canvas().active_layer();
    assert_eq!(Cell::new('a', 1, 0), layer.get((10, 5)));
    assert_eq!(Cell::new('b', 2, 0), layer.get((11, 6)));
    // transparent cell of the clipboard
    assert_eq!('z', layer.get((11, 5)).ch);
    assert_eq!(2, undo_len(&session));
}

#[test]
fn test_clipboard_survives_layer_deletion() {
    let mut session = session();
    session.handle_key(Key::Char('+'));
    session.canvas_mut().active_layer_mut().set((0, 0), Cell::from('q'));
    session.handle_menu(MenuChoice::Tool(Tool::Select));
    activate_at(&mut session, (0, 0));
    activate_at(&mut session, (0, 0));
    session.handle_menu(MenuChoice::Tool(Tool::Copy));
    activate_at(&mut session, (0, 0));
    session.handle_key(Key::Char('-'));
    assert_eq!(1, session.canvas().layer_count());

    session.handle_menu(MenuChoice::Tool(Tool::Move));
    activate_at(&mut session, (5, 5));
    assert_eq!('q', session.canvas().active_layer().get((5, 5)).ch);
}

#[test]
fn test_freehand_stroke_is_one_action() {
    let mut session = session();
    session.handle_pointer(PointerEvent::new((1, 1), PointerState::Pressed));
    session.handle_pointer(PointerEvent::new((3, 1), PointerState::Moved));
    session.handle_pointer(PointerEvent::new((5, 1), PointerState::Moved));
    assert_eq!(1, undo_len(&session));
    session.handle_pointer(PointerEvent::new((5, 1), PointerState::Released));
    assert_eq!(2, undo_len(&session));
    assert_eq!(" #####              ", row(&session, 1));

    session.handle_key(Key::Char('u'));
    assert_eq!("                    ", row(&session, 1));
}

#[test]
fn test_eraser_stroke() {
    let mut session = session();
    for x in 0..20 {
        session.canvas_mut().active_layer_mut().set((x, 2), Cell::from('='));
    }
    session.handle_menu(MenuChoice::Tool(Tool::Eraser));
    session.handle_pointer(PointerEvent::new((2, 2), PointerState::Pressed));
    session.handle_pointer(PointerEvent::new((6, 2), PointerState::Released));
    assert_eq!("==     =============", row(&session, 2));
}

#[test]
fn test_layer_key_ends_an_open_stroke() {
    let mut session = session();
    session.handle_pointer(PointerEvent::new((1, 1), PointerState::Pressed));
    session.handle_pointer(PointerEvent::new((3, 1), PointerState::Moved));
    session.handle_key(Key::Char('+'));
    session.handle_pointer(PointerEvent::new((6, 1), PointerState::Moved));
    session.handle_pointer(PointerEvent::new((6, 1), PointerState::Released));

    assert_eq!(3, undo_len(&session));
    assert_eq!(" ###                ", session.canvas().layers()[0].row(1).map(|r| r.iter().map(|c| c.ch).collect::<String>()).unwrap());
    assert!(session.canvas().layers()[1].rows().flatten().all(|c| c.is_empty()));

    session.handle_key(Key::Char('u'));
    assert_eq!(1, session.canvas().layer_count());
    assert_eq!(" ###                ", row(&session, 1));
}

#[test]
fn test_undo_during_stroke_keeps_earlier_actions() {
    let mut session = session();
    session.set_glyph('P');
    activate_at(&mut session, (10, 5));
    session.set_glyph('#');

    session.handle_pointer(PointerEvent::new((3, 1), PointerState::Pressed));
    session.handle_pointer(PointerEvent::new((6, 1), PointerState::Moved));
    session.handle_key(Key::Char('u'));
    session.handle_pointer(PointerEvent::new((6, 1), PointerState::Released));

    assert_eq!("                    ", row(&session, 1));
    assert_eq!('P', session.canvas().active_layer().get((10, 5)).ch);
    assert!(session.canvas().history().can_redo());

    session.handle_key(Key::Char('r'));
    assert_eq!("   ####             ", row(&session, 1));
    assert_eq!('P', session.canvas().active_layer().get((10, 5)).ch);
}

#[test]
fn test_menu_choice_ends_an_open_stroke() {
    let mut session = session();
    session.handle_pointer(PointerEvent::new((1, 1), PointerState::Pressed));
    session.handle_pointer(PointerEvent::new((2, 1), PointerState::Moved));
    session.handle_menu(MenuChoice::Layer(LayerMenuChoice::Add));
    session.handle_pointer(PointerEvent::new((5, 1), PointerState::Released));

    assert_eq!(3, undo_len(&session));
    assert!(session.canvas().layers()[1].rows().flatten().all(|c| c.is_empty()));
}

#[test]
fn test_pointer_stroke_is_snapped() {
    let mut session = session();
    session.handle_key(Key::Char('f'));
    session.handle_pointer(PointerEvent::new((7, 3), PointerState::Pressed));
    session.handle_pointer(PointerEvent::new((12, 3), PointerState::Moved));
    session.handle_pointer(PointerEvent::new((12, 3), PointerState::Released));

    assert_eq!("     ######         ", row(&session, 0));
    assert_eq!("                    ", row(&session, 3));
    assert_eq!(2, undo_len(&session));
}

#[test]
fn test_pointer_outside_canvas_is_ignored() {
    let mut session = session();
    let before = session.canvas().cursor();
    assert_eq!(EditorEvent::None, session.handle_pointer(PointerEvent::new((25, 3), PointerState::Pressed)));
    assert_eq!(EditorEvent::None, session.handle_pointer(PointerEvent::new((-1, 3), PointerState::Moved)));
    assert_eq!(before, session.canvas().cursor());
    assert_eq!(1, undo_len(&session));
}

#[test]
fn test_locked_layer_is_not_painted() {
    let mut session = session();
    session.handle_menu(MenuChoice::Layer(LayerMenuChoice::ToggleLock(0)));
    assert!(session.canvas().active_layer().is_locked());
    for tool in [Tool::Pen, Tool::Fill, Tool::Spray, Tool::Pattern] {
        session.handle_menu(MenuChoice::Tool(tool));
        activate_at(&mut session, (5, 5));
    }
    assert!(session.canvas().active_layer().rows().flatten().all(|c| c.is_empty()));
}

#[test]
fn test_fill_tool() {
    let mut session = session();
    session.handle_key(Key::Char('c'));
    session.handle_menu(MenuChoice::Tool(Tool::Fill));
    activate_at(&mut session, (0, 0));
    assert!(session.canvas().active_layer().rows().flatten().all(|c| *c == Cell::new('#', 1, 0)));
}

#[test]
fn test_layer_keys() {
    let mut session = session();
    session.handle_key(Key::Char('+'));
    assert_eq!(2, session.canvas().layer_count());
    assert_eq!("layer2", session.canvas().active_layer().title());
    session.handle_key(Key::Char('-'));
    assert_eq!(EditorEvent::None, session.handle_key(Key::Char('-')));
    assert_eq!(1, session.canvas().layer_count());
}

#[test]
fn test_menu_requests() {
    let mut session = session();
    assert_eq!(EditorEvent::OpenMenu(MenuKind::Tools), session.handle_key(Key::Tab));
    assert_eq!(EditorEvent::OpenMenu(MenuKind::Colors), session.handle_key(Key::Char('k')));
    assert_eq!(EditorEvent::None, session.handle_menu(MenuChoice::Shape(Tool::Fill)));
    session.handle_menu(MenuChoice::Shape(Tool::Hexagon));
    assert_eq!(Tool::Hexagon, session.tool());
    assert_eq!(EditorEvent::None, session.handle_menu(MenuChoice::Foreground(9)));
}

#[test]
fn test_snap_moves_the_target() {
    let mut session = session();
    session.handle_key(Key::Char('f'));
    activate_at(&mut session, (7, 8));
    assert_eq!('#', session.canvas().active_layer().get((5, 5)).ch);
    assert!(session.canvas().active_layer().get((7, 8)).is_empty());
}

#[test]
fn test_quit_stops_the_session() {
    let mut session = session();
    assert_eq!(EditorEvent::Quit, session.handle_key(Key::Char('q')));
    assert!(!session.is_running());
}
