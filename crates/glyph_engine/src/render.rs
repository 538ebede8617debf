//! Render compositor
//!
//! Flattens the visible layers into a [`Frame`] and draws the presentation
//! overlays on top. Layer data is never touched.

use crate::{Cell, ColorIndex, Layer, Position, palette, session::EditSession, session::ToolState};

pub const GRID_GLYPH: char = '·';
pub const CURSOR_FILLER: char = '+';
pub const ANCHOR_GLYPH: char = 'X';

pub const KEY_HINTS: &str = "TAB: Tools | K: Colors | N: Shapes | P: Patterns | F: Snap | =/-: Zoom | H: Help | Q: Quit";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CellStyle {
    pub reverse: bool,
    pub bold: bool,
    pub blink: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameCell {
    pub ch: char,
    pub fg: ColorIndex,
    pub bg: ColorIndex,
    pub style: CellStyle,
}

impl From<Cell> for FrameCell {
    fn from(cell: Cell) -> Self {
        Self {
            ch: cell.ch,
            fg: cell.fg,
            bg: cell.bg,
            style: CellStyle::default(),
        }
    }
}

/// One paintable picture of the session
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    pub width: i32,
    pub height: i32,
    /// Row major, `width * height` cells
    pub cells: Vec<FrameCell>,
    pub status: String,
    pub footer: String,
}

impl Frame {
    pub fn get(&self, pos: impl Into<Position>) -> Option<&FrameCell> {
        let pos = pos.into();
        if pos.x < 0 || pos.y < 0 || pos.x >= self.width || pos.y >= self.height {
            return None;
        }
        self.cells.get((pos.y * self.width + pos.x) as usize)
    }

    fn get_mut(&mut self, pos: Position) -> Option<&mut FrameCell> {
        if pos.x < 0 || pos.y < 0 || pos.x >= self.width || pos.y >= self.height {
            return None;
        }
        self.cells.get_mut((pos.y * self.width + pos.x) as usize)
    }

    fn overlay(&mut self, pos: Position, ch: char, style: CellStyle) {
        if let Some(cell) = self.get_mut(pos) {
            *cell = FrameCell { ch, fg: 0, bg: 0, style };
        }
    }

    /// Glyphs of one row.
    pub fn row_text(&self, y: i32) -> String {
        (0..self.width).filter_map(|x| self.get((x, y))).map(|c| c.ch).collect()
    }

    /// Status line, canvas rows and footer, one per line.
    pub fn to_text(&self) -> String {
        let mut result = String::new();
        result.push_str(&self.status);
        result.push('\n');
        for y in 0..self.height {
            result.push_str(&self.row_text(y));
            result.push('\n');
        }
        result.push_str(&self.footer);
        result.push('\n');
        result
    }
}

/// The topmost non-empty cell of the visible layers at `pos`.
pub fn composite_cell(layers: &[Layer], pos: Position) -> Cell {
    layers
        .iter()
        .rev()
        .filter(|layer| layer.is_visible())
        .map(|layer| layer.get(pos))
        .find(|cell| !cell.is_empty())
        .unwrap_or(Cell::EMPTY)
}

/// Composites the layer stack without overlays. Empty cells become grid
/// dots on every fifth column and every third row when `show_grid` is set.
pub fn composite(layers: &[Layer], width: i32, height: i32, show_grid: bool) -> Frame {
    let mut cells = Vec::with_capacity((width.max(0) * height.max(0)) as usize);
    for y in 0..height {
        for x in 0..width {
            let mut cell = composite_cell(layers, Position::new(x, y));
            if cell.is_empty() && show_grid && (x % 5 == 0 || y % 3 == 0) {
                cell = Cell::new(GRID_GLYPH, 0, 0);
            }
            cells.push(FrameCell::from(cell));
        }
    }
    Frame {
        width,
        height,
        cells,
        status: String::new(),
        footer: String::new(),
    }
}

/// Renders the session: composite, then selection border, pending anchor and cursor.
pub fn render(session: &EditSession) -> Frame {
    let canvas = session.canvas();
    let mut frame = composite(canvas.layers(), canvas.width(), canvas.height(), session.show_grid());

    if let Some(rect) = session.selection() {
        let bold = CellStyle { bold: true, ..Default::default() };
        for y in rect.top()..=rect.bottom() {
            for x in rect.left()..=rect.right() {
                let pos = Position::new(x, y);
                if !rect.is_on_border(pos) {
                    continue;
                }
                // corners belong to the vertical edges
                let ch = if x == rect.left() || x == rect.right() { '|' } else { '-' };
                frame.overlay(pos, ch, bold);
            }
        }
    }

    if let Some(anchor) = session.state().anchor() {
        frame.overlay(
            anchor,
            ANCHOR_GLYPH,
            CellStyle {
                bold: true,
                blink: true,
                ..Default::default()
            },
        );
    }

    if let Some(cell) = frame.get_mut(canvas.cursor()) {
        if cell.ch == ' ' {
            cell.ch = CURSOR_FILLER;
        }
        cell.style.reverse = true;
    }

    frame.status = status_line(session);
    frame.footer = footer_line(session);
    frame
}

pub fn status_line(session: &EditSession) -> String {
    let canvas = session.canvas();
    let paint = session.paint();
    let cursor = canvas.cursor();
    let mut status = format!(
        "Tool: {} | FG: {} | BG: {} | Layer: {} | Pos: {},{} | Zoom: {:.1}x",
        session.tool(),
        palette::fg_name(paint.fg),
        palette::bg_name(paint.bg),
        canvas.active_layer().title(),
        cursor.x,
        cursor.y,
        session.viewport().zoom
    );
    if let ToolState::AnchorSet(anchor) = session.state() {
        status.push_str(&format!(" | START: {},{}", anchor.x, anchor.y));
    }
    if session.viewport().snap {
        status.push_str(" | SNAP");
    }
    if session.thickness() > 1 {
        status.push_str(&format!(" | T:{}", session.thickness()));
    }
    if session.show_debug() {
        let stats = session.stats();
        status.push_str(&format!(
            " | Strokes: {} | Saves: {} | Undos: {} | Uses: {}",
            stats.strokes,
            stats.saves,
            stats.undos,
            stats.tool_use(session.tool())
        ));
    }
    status
}

pub fn footer_line(session: &EditSession) -> String {
    match session.state().text_buffer() {
        Some(buffer) => format!("TEXT: {buffer}_"),
        None => KEY_HINTS.to_string(),
    }
}
