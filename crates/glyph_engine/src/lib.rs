//! A layered character-grid drawing engine.
//!
//! The canvas is a stack of fixed-size [`Layer`]s of colored glyphs. An
//! [`EditSession`] turns abstract key, pointer and menu events into calls of
//! the [`brushes`] primitives, records one undo snapshot per completed action
//! and the [`render`] compositor flattens everything into a [`Frame`].

pub mod brushes;
pub mod canvas;
pub mod cell;
pub mod document;
pub mod error;
pub mod event_loop;
pub mod history;
pub mod input;
pub mod layer;
pub mod options;
pub mod palette;
pub mod position;
pub mod render;
pub mod session;
pub mod tools;

pub use canvas::Canvas;
pub use cell::{Cell, ColorIndex};
pub use document::Document;
pub use error::{EngineError, Result};
pub use event_loop::{EventLoop, FrameSink, InputSource, Poll};
pub use history::UndoHistory;
pub use input::{InputEvent, Key, LayerMenuChoice, MenuChoice, MenuKind, PointerEvent, PointerState};
pub use layer::{Layer, Properties};
pub use options::EditorOptions;
pub use position::{Position, Rectangle};
pub use render::{Frame, FrameCell};
pub use session::{EditSession, EditorEvent, ToolState};
pub use tools::Tool;
