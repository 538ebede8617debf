//! Single threaded, poll driven event loop.
//!
//! Each iteration renders if the session is dirty, waits up to the poll
//! interval for one input event, then drains whatever else is queued without
//! waiting. Every event is handled synchronously in arrival order.

use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use crate::{
    EditorOptions,
    input::InputEvent,
    render::{Frame, render},
    session::{EditSession, EditorEvent},
};

pub const DEFAULT_DOCUMENT: &str = "drawing.json";

/// Result of waiting for input
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Poll {
    Event(InputEvent),
    /// Nothing arrived within the timeout
    Idle,
    /// The source will never produce another event
    Closed,
}

pub trait InputSource {
    fn poll(&mut self, timeout: Duration) -> Poll;

    /// Requests the session could not satisfy on its own (menus, help).
    /// Interactive sources answer menus with a later [`InputEvent::Menu`].
    fn editor_event(&mut self, _event: EditorEvent) {}
}

pub trait FrameSink {
    fn present(&mut self, frame: &Frame);
}

pub struct EventLoop {
    poll_interval: Duration,
    document_path: PathBuf,
}

impl EventLoop {
    pub fn new(options: &EditorOptions) -> Self {
        Self {
            poll_interval: options.poll_interval(),
            document_path: PathBuf::from(DEFAULT_DOCUMENT),
        }
    }

    /// File used by the save and load keys.
    pub fn with_document_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.document_path = path.into();
        self
    }

    pub fn document_path(&self) -> &Path {
        &self.document_path
    }

    /// Runs until the session quits or the input closes. Returns the number
    /// of frames presented.
    pub fn run(&self, session: &mut EditSession, input: &mut impl InputSource, sink: &mut impl FrameSink) -> usize {
        let mut frames = 0;
        loop {
            if session.take_dirty() {
                sink.present(&render(session));
                frames += 1;
            }
            if !session.is_running() {
                break;
            }

            let mut timeout = self.poll_interval;
            loop {
                match input.poll(timeout) {
                    Poll::Event(event) => {
                        let result = session.handle_event(event);
                        self.dispatch(result, session, input);
                        if !session.is_running() {
                            break;
                        }
                        timeout = Duration::ZERO;
                    }
                    Poll::Idle => break,
                    Poll::Closed => {
                        if session.take_dirty() {
                            sink.present(&render(session));
                            frames += 1;
                        }
                        return frames;
                    }
                }
            }
        }
        frames
    }

    fn dispatch(&self, event: EditorEvent, session: &mut EditSession, input: &mut impl InputSource) {
        match event {
            EditorEvent::SaveRequested => {
                session.save_file(&self.document_path);
            }
            EditorEvent::LoadRequested => {
                if self.document_path.exists() {
                    session.load_file(&self.document_path);
                } else {
                    log::warn!("{} does not exist", self.document_path.display());
                }
            }
            EditorEvent::None | EditorEvent::Redraw => {}
            other => input.editor_event(other),
        }
    }
}
