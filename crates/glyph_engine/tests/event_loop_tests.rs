//! Event loop with scripted input

use std::{collections::VecDeque, time::Duration};

use glyph_engine::{EditSession, EditorEvent, EditorOptions, EventLoop, Frame, FrameSink, InputEvent, InputSource, Key, MenuKind, Poll};
use pretty_assertions::assert_eq;

#[derive(Default)]
struct Queue {
    events: VecDeque<InputEvent>,
    requests: Vec<EditorEvent>,
}

impl Queue {
    fn keys(text: &str) -> Self {
        Self {
            events: text.chars().map(|ch| InputEvent::Key(Key::Char(ch))).collect(),
            requests: Vec::new(),
        }
    }
}

impl InputSource for Queue {
    fn poll(&mut self, _timeout: Duration) -> Poll {
        match self.events.pop_front() {
            Some(event) => Poll::Event(event),
            None => Poll::Closed,
        }
    }

    fn editor_event(&mut self, event: EditorEvent) {
        self.requests.push(event);
    }
}

#[derive(Default)]
struct Frames(Vec<Frame>);

impl FrameSink for Frames {
    fn present(&mut self, frame: &Frame) {
        self.0.push(frame.clone());
    }
}

fn options() -> EditorOptions {
    EditorOptions {
        width: 8,
        height: 3,
        poll_interval_ms: 0,
        ..Default::default()
    }
}

#[test]
fn test_queued_events_are_handled_in_order() {
    let options = options();
    let mut session = EditSession::with_seed(&options, 1);
    let mut input = Queue::keys("aa dddd ");
    let mut sink = Frames::default();

    let frames = EventLoop::new(&options).run(&mut session, &mut input, &mut sink);

    assert_eq!(frames, sink.0.len());
    let last = sink.0.last().unwrap();
    assert_eq!("  #   # ", last.row_text(1).replace('+', " "));
    assert_eq!(2, session.canvas().history().undo_len() - 1);
}

#[test]
fn test_quit_stops_the_loop() {
    let options = options();
    let mut session = EditSession::with_seed(&options, 1);
    let mut input = Queue::keys(" q ");
    let mut sink = Frames::default();

    EventLoop::new(&options).run(&mut session, &mut input, &mut sink);

    assert!(!session.is_running());
    assert_eq!(1, input.events.len());
}

#[test]
fn test_menu_requests_reach_the_input() {
    let options = options();
    let mut session = EditSession::with_seed(&options, 1);
    let mut input = Queue::keys("kh");
    input.events.push_front(InputEvent::Key(Key::Tab));
    let mut sink = Frames::default();

    EventLoop::new(&options).run(&mut session, &mut input, &mut sink);

    assert_eq!(
        vec![
            EditorEvent::OpenMenu(MenuKind::Tools),
            EditorEvent::OpenMenu(MenuKind::Colors),
            EditorEvent::ShowHelp
        ],
        input.requests
    );
}

#[test]
fn test_save_and_load_keys_use_the_document_path() {
    let options = options();
    let path = std::env::temp_dir().join(format!("glyph_engine_{}_event_loop.json", std::process::id()));
    let event_loop = EventLoop::new(&options).with_document_path(&path);

    let mut session = EditSession::with_seed(&options, 1);
    event_loop.run(&mut session, &mut Queue::keys(" S"), &mut Frames::default());
    assert_eq!(1, session.stats().saves);

    let mut other = EditSession::with_seed(&options, 1);
    event_loop.run(&mut other, &mut Queue::keys("o"), &mut Frames::default());
    let _ = std::fs::remove_file(&path);

    assert_eq!('#', other.canvas().active_layer().get((4, 1)).ch);
}
