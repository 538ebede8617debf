//! Abstract input events consumed by the edit session.
//!
//! Front ends translate their terminal or window events into these; the
//! engine never talks to a device directly.

use crate::{ColorIndex, Position, brushes::Pattern, tools::Tool};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// A printable character, including space
    Char(char),
    Up,
    Down,
    Left,
    Right,
    ShiftUp,
    ShiftDown,
    ShiftLeft,
    ShiftRight,
    Enter,
    Escape,
    Backspace,
    Tab,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerState {
    Pressed,
    Released,
    /// Motion, with or without a held button
    Moved,
}

/// A pointer event in canvas cell coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PointerEvent {
    pub pos: Position,
    pub state: PointerState,
}

impl PointerEvent {
    pub fn new(pos: impl Into<Position>, state: PointerState) -> Self {
        Self { pos: pos.into(), state }
    }
}

/// Menus the session can ask the front end to show
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuKind {
    Tools,
    Brushes,
    Patterns,
    Colors,
    Shapes,
    Layers,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayerMenuChoice {
    Select(usize),
    ToggleVisibility(usize),
    ToggleLock(usize),
    Add,
    Delete,
}

/// The answer of an external menu widget
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuChoice {
    Tool(Tool),
    /// Index into [`crate::brushes::BRUSHES`]
    Brush(usize),
    Pattern(Pattern),
    Foreground(ColorIndex),
    Background(ColorIndex),
    /// One of [`crate::tools::SHAPES`]
    Shape(Tool),
    Layer(LayerMenuChoice),
    Cancel,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    Key(Key),
    Pointer(PointerEvent),
    Menu(MenuChoice),
}

impl From<Key> for InputEvent {
    fn from(key: Key) -> Self {
        InputEvent::Key(key)
    }
}

impl From<PointerEvent> for InputEvent {
    fn from(event: PointerEvent) -> Self {
        InputEvent::Pointer(event)
    }
}

impl From<MenuChoice> for InputEvent {
    fn from(choice: MenuChoice) -> Self {
        InputEvent::Menu(choice)
    }
}
