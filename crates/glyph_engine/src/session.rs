//! The tool state machine
//!
//! An [`EditSession`] owns the canvas plus everything the user adjusts while
//! drawing (current tool, paint, brush, selection, clipboard, viewport). It
//! consumes abstract input events and turns them into primitive calls, and it
//! takes exactly one history snapshot per completed action.
//!
//! ```text
//!            activate (two-point)          activate
//!   Idle ───────────────────────▶ AnchorSet ────────▶ Idle + snapshot
//!     │  activate (text)                     navigate ─▶ Idle
//!     ├────────────────▶ TextEntry ── Enter ─▶ Idle + snapshot
//!     │                            └─ Escape ─▶ Idle
//!     │  activate (select)
//!     └────────────────▶ SelectionPending ── activate ─▶ Idle (selection set)
//! ```

use std::path::Path;

use crate::{
    Canvas, Cell, EditorOptions, Layer, Position, Rectangle,
    brushes::{self, BRUSHES, Brush, Pattern},
    document::{self, Document},
    input::{InputEvent, Key, LayerMenuChoice, MenuChoice, MenuKind, PointerEvent, PointerState},
    palette,
    tools::{TOOLS, Tool, ToolKind},
};

pub const MAX_THICKNESS: i32 = 5;
pub const SNAP_GRID_SIZE: i32 = 5;
pub const MIN_ZOOM: f32 = 0.5;
pub const MAX_ZOOM: f32 = 3.0;
const ZOOM_STEP: f32 = 1.2;
const PAN_STEP: i32 = 2;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ToolState {
    #[default]
    Idle,
    /// First point of a two-point tool
    AnchorSet(Position),
    TextEntry {
        origin: Position,
        buffer: String,
    },
    /// First corner of a selection
    SelectionPending(Position),
}

impl ToolState {
    /// The pending point, if a two-point tool or the selection tool waits for its second point.
    pub fn anchor(&self) -> Option<Position> {
        match self {
            ToolState::AnchorSet(pos) | ToolState::SelectionPending(pos) => Some(*pos),
            _ => None,
        }
    }

    pub fn text_buffer(&self) -> Option<&str> {
        match self {
            ToolState::TextEntry { buffer, .. } => Some(buffer),
            _ => None,
        }
    }
}

/// Zoom, pan and snap settings.
///
/// Zoom and pan are informational; snapping changes the position tools act on.
#[derive(Clone, Debug, PartialEq)]
pub struct Viewport {
    pub zoom: f32,
    pub offset: Position,
    pub snap: bool,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            offset: Position::default(),
            snap: false,
        }
    }
}

impl Viewport {
    pub fn zoom_in(&mut self) {
        self.zoom = (self.zoom * ZOOM_STEP).min(MAX_ZOOM);
    }

    pub fn zoom_out(&mut self) {
        self.zoom = (self.zoom / ZOOM_STEP).max(MIN_ZOOM);
    }

    pub fn reset(&mut self) {
        self.zoom = 1.0;
        self.offset = Position::default();
    }

    pub fn pan(&mut self, dx: i32, dy: i32) {
        self.offset += Position::new(dx * PAN_STEP, dy * PAN_STEP);
    }

    /// Rounds `pos` down to the snap grid when snapping is on.
    pub fn snap_position(&self, pos: Position) -> Position {
        if !self.snap {
            return pos;
        }
        Position::new(pos.x.div_euclid(SNAP_GRID_SIZE) * SNAP_GRID_SIZE, pos.y.div_euclid(SNAP_GRID_SIZE) * SNAP_GRID_SIZE)
    }
}

/// Cells captured from a selection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Clipboard {
    width: i32,
    height: i32,
    cells: Vec<Cell>,
}

impl Clipboard {
    pub fn capture(layer: &Layer, rect: Rectangle) -> Self {
        let mut cells = Vec::with_capacity((rect.width() * rect.height()) as usize);
        for y in rect.top()..=rect.bottom() {
            for x in rect.left()..=rect.right() {
                cells.push(layer.get((x, y)));
            }
        }
        Self {
            width: rect.width(),
            height: rect.height(),
            cells,
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn get(&self, x: i32, y: i32) -> Cell {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return Cell::EMPTY;
        }
        self.cells[(y * self.width + x) as usize]
    }

    /// Writes the clipboard with its top left corner at `at`. Empty cells are
    /// transparent and leave the destination alone.
    pub fn paste(&self, layer: &mut Layer, at: Position) {
        for y in 0..self.height {
            for x in 0..self.width {
                let cell = self.get(x, y);
                if !cell.is_empty() {
                    layer.set(at + Position::new(x, y), cell);
                }
            }
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Stats {
    pub strokes: u32,
    pub saves: u32,
    pub undos: u32,
    tool_use: [u32; TOOLS.len()],
}

impl Stats {
    pub fn tool_use(&self, tool: Tool) -> u32 {
        self.tool_use[tool.index()]
    }

    fn record(&mut self, tool: Tool) {
        self.tool_use[tool.index()] += 1;
    }
}

/// What the front end should do after an event was handled
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditorEvent {
    /// The event had no effect
    None,
    /// State changed, the frame needs repainting
    Redraw,
    /// Show a menu and answer with a [`MenuChoice`]
    OpenMenu(MenuKind),
    ShowHelp,
    SaveRequested,
    LoadRequested,
    /// Cursor navigation abandoned a pending anchor or selection corner
    AnchorCancelled,
    Quit,
}

#[derive(Clone, Copy, Debug)]
struct Stroke {
    last: Position,
}

pub struct EditSession {
    canvas: Canvas,
    tool: Tool,
    state: ToolState,
    paint: Cell,
    brush: usize,
    spray_size: i32,
    thickness: i32,
    pattern: Pattern,
    shape_fill: bool,
    show_grid: bool,
    show_debug: bool,
    viewport: Viewport,
    selection: Option<Rectangle>,
    clipboard: Option<Clipboard>,
    stats: Stats,
    stroke: Option<Stroke>,
    dirty: bool,
    running: bool,
    rng: fastrand::Rng,
}

impl EditSession {
    pub fn new(options: &EditorOptions) -> Self {
        Self::with_rng(options, fastrand::Rng::new())
    }

    /// A session whose spray tool is reproducible.
    pub fn with_seed(options: &EditorOptions, seed: u64) -> Self {
        Self::with_rng(options, fastrand::Rng::with_seed(seed))
    }

    fn with_rng(options: &EditorOptions, rng: fastrand::Rng) -> Self {
        Self {
            canvas: Canvas::with_history_capacity(options.width, options.height, options.history_capacity),
            tool: Tool::default(),
            state: ToolState::Idle,
            paint: Cell::new(options.glyph, 0, 0),
            brush: 0,
            spray_size: 1,
            thickness: 1,
            pattern: Pattern::default(),
            shape_fill: false,
            show_grid: options.show_grid,
            show_debug: false,
            viewport: Viewport {
                snap: options.snap_to_grid,
                ..Default::default()
            },
            selection: None,
            clipboard: None,
            stats: Stats::default(),
            stroke: None,
            dirty: true,
            running: true,
            rng,
        }
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut Canvas {
        self.dirty = true;
        &mut self.canvas
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn state(&self) -> &ToolState {
        &self.state
    }

    /// The glyph and colors new strokes are painted with.
    pub fn paint(&self) -> Cell {
        self.paint
    }

    pub fn set_glyph(&mut self, ch: char) {
        self.paint.ch = ch;
        self.dirty = true;
    }

    pub fn brush(&self) -> &'static Brush {
        &BRUSHES[self.brush.min(BRUSHES.len() - 1)]
    }

    pub fn spray_size(&self) -> i32 {
        self.spray_size
    }

    pub fn thickness(&self) -> i32 {
        self.thickness
    }

    pub fn pattern(&self) -> Pattern {
        self.pattern
    }

    pub fn shape_fill(&self) -> bool {
        self.shape_fill
    }

    pub fn show_grid(&self) -> bool {
        self.show_grid
    }

    pub fn show_debug(&self) -> bool {
        self.show_debug
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn selection(&self) -> Option<Rectangle> {
        self.selection
    }

    pub fn clipboard(&self) -> Option<&Clipboard> {
        self.clipboard.as_ref()
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Returns the dirty flag and clears it.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }

    /// The cell tools act on: the cursor, snapped when snapping is on.
    pub fn target_position(&self) -> Position {
        self.viewport.snap_position(self.canvas.cursor())
    }

    pub fn set_tool(&mut self, tool: Tool) {
        if tool == self.tool {
            return;
        }
        self.finish_stroke();
        self.tool = tool;
        self.state = ToolState::Idle;
        self.dirty = true;
    }

    pub fn handle_event(&mut self, event: InputEvent) -> EditorEvent {
        match event {
            InputEvent::Key(key) => self.handle_key(key),
            InputEvent::Pointer(pointer) => self.handle_pointer(pointer),
            InputEvent::Menu(choice) => self.handle_menu(choice),
        }
    }

    pub fn handle_key(&mut self, key: Key) -> EditorEvent {
        let event = if matches!(self.state, ToolState::TextEntry { .. }) {
            self.handle_text_key(key)
        } else {
            self.handle_command_key(key)
        };
        self.note(event)
    }

    fn note(&mut self, event: EditorEvent) -> EditorEvent {
        if event != EditorEvent::None {
            self.dirty = true;
        }
        event
    }

    fn handle_text_key(&mut self, key: Key) -> EditorEvent {
        match key {
            Key::Escape => {
                self.state = ToolState::Idle;
                EditorEvent::Redraw
            }
            Key::Enter => self.commit_text(),
            Key::Backspace => {
                if let ToolState::TextEntry { buffer, .. } = &mut self.state {
                    buffer.pop();
                }
                EditorEvent::Redraw
            }
            Key::Char(ch) if ch == ' ' || ch.is_ascii_graphic() => {
                if let ToolState::TextEntry { buffer, .. } = &mut self.state {
                    buffer.push(ch);
                }
                EditorEvent::Redraw
            }
            _ => EditorEvent::None,
        }
    }

    fn commit_text(&mut self) -> EditorEvent {
        let ToolState::TextEntry { origin, buffer } = std::mem::take(&mut self.state) else {
            return EditorEvent::None;
        };
        let layer = self.canvas.active_layer_mut();
        for (i, ch) in buffer.chars().enumerate() {
            layer.set_char(origin + Position::new(i as i32, 0), ch);
        }
        log::debug!("text '{buffer}' at {origin}");
        self.canvas.snapshot();
        EditorEvent::Redraw
    }

    fn handle_command_key(&mut self, key: Key) -> EditorEvent {
        // commands never land in the middle of a pointer stroke
        self.finish_stroke();
        match key {
            Key::Char('q') => {
                self.running = false;
                EditorEvent::Quit
            }
            Key::Up | Key::Char('w') => self.navigate(0, -1),
            Key::Down | Key::Char('s') => self.navigate(0, 1),
            Key::Left | Key::Char('a') => self.navigate(-1, 0),
            Key::Right | Key::Char('d') => self.navigate(1, 0),
            Key::ShiftUp => self.pan(0, -1),
            Key::ShiftDown => self.pan(0, 1),
            Key::ShiftLeft => self.pan(-1, 0),
            Key::ShiftRight => self.pan(1, 0),
            Key::Char(' ') => self.activate(),
            Key::Tab => EditorEvent::OpenMenu(MenuKind::Tools),
            Key::Char('b') => EditorEvent::OpenMenu(MenuKind::Brushes),
            Key::Char('p') => EditorEvent::OpenMenu(MenuKind::Patterns),
            Key::Char('l') => EditorEvent::OpenMenu(MenuKind::Layers),
            Key::Char('k') => EditorEvent::OpenMenu(MenuKind::Colors),
            Key::Char('n') => EditorEvent::OpenMenu(MenuKind::Shapes),
            Key::Char('h') => EditorEvent::ShowHelp,
            Key::Char('[') => {
                self.thickness = (self.thickness - 1).max(1);
                EditorEvent::Redraw
            }
            Key::Char(']') => {
                self.thickness = (self.thickness + 1).min(MAX_THICKNESS);
                EditorEvent::Redraw
            }
            Key::Char('=') => {
                self.viewport.zoom_in();
                EditorEvent::Redraw
            }
            Key::Char('_') => {
                self.viewport.zoom_out();
                EditorEvent::Redraw
            }
            Key::Char('0') => {
                self.viewport.reset();
                EditorEvent::Redraw
            }
            Key::Char('f') => {
                self.viewport.snap = !self.viewport.snap;
                EditorEvent::Redraw
            }
            Key::Char(ch @ '1'..='5') => {
                self.select_brush_preset(ch as i32 - '0' as i32);
                EditorEvent::Redraw
            }
            Key::Char(ch @ '6'..='9') => match Tool::from_index(ch as usize - '0' as usize) {
                Some(tool) => {
                    self.set_tool(tool);
                    EditorEvent::Redraw
                }
                None => EditorEvent::None,
            },
            Key::Char('c') => {
                self.paint.fg = palette::next_fg(self.paint.fg);
                EditorEvent::Redraw
            }
            Key::Char('v') => {
                self.paint.bg = palette::next_bg(self.paint.bg);
                EditorEvent::Redraw
            }
            Key::Char('u') => self.undo(),
            Key::Char('r') => self.redo(),
            Key::Char('x' | 'X') => self.clear_canvas(),
            Key::Char('g') => {
                self.show_grid = !self.show_grid;
                EditorEvent::Redraw
            }
            Key::Char('y') => {
                if self.copy_selection() {
                    EditorEvent::Redraw
                } else {
                    EditorEvent::None
                }
            }
            Key::Char('o') => EditorEvent::LoadRequested,
            Key::Char('S') => EditorEvent::SaveRequested,
            Key::Char('+') => self.add_layer(),
            Key::Char('-') => self.delete_layer(),
            Key::Char('~') => {
                self.show_debug = !self.show_debug;
                EditorEvent::Redraw
            }
            Key::Char('i') => {
                self.shape_fill = !self.shape_fill;
                EditorEvent::Redraw
            }
            Key::Char(',') => {
                self.pattern = self.pattern.prev();
                EditorEvent::Redraw
            }
            Key::Char('.') => {
                self.pattern = self.pattern.next();
                EditorEvent::Redraw
            }
            _ => EditorEvent::None,
        }
    }

    /// Moves the cursor. Any pending anchor or selection corner is dropped.
    fn navigate(&mut self, dx: i32, dy: i32) -> EditorEvent {
        self.canvas.move_cursor(dx, dy);
        if let Some(anchor) = self.state.anchor() {
            log::debug!("navigation cancelled pending point {anchor}");
            self.state = ToolState::Idle;
            return EditorEvent::AnchorCancelled;
        }
        EditorEvent::Redraw
    }

    fn pan(&mut self, dx: i32, dy: i32) -> EditorEvent {
        self.viewport.pan(dx, dy);
        EditorEvent::Redraw
    }

    /// Digit presets: sets the spray size and adopts the matching brush's glyph and color.
    fn select_brush_preset(&mut self, n: i32) {
        self.spray_size = n;
        if let Some(index) = usize::try_from(n - 1).ok().filter(|i| *i < BRUSHES.len()) {
            self.brush = index;
            let brush = &BRUSHES[index];
            self.paint.ch = brush.ch;
            self.paint.fg = brush.fg;
        }
    }

    /// Applies the current tool at the target position.
    pub fn activate(&mut self) -> EditorEvent {
        let pos = self.target_position();
        self.activate_at(pos)
    }

    pub fn activate_at(&mut self, pos: Position) -> EditorEvent {
        self.stats.record(self.tool);
        log::debug!("{} at {pos}", self.tool);

        match self.tool.kind() {
            ToolKind::Immediate => {
                if self.apply_immediate(pos) {
                    self.canvas.snapshot();
                }
            }
            ToolKind::TwoPoint => match self.state {
                ToolState::AnchorSet(anchor) => {
                    self.state = ToolState::Idle;
                    self.draw_shape(anchor, pos);
                    self.canvas.snapshot();
                }
                _ => self.state = ToolState::AnchorSet(pos),
            },
            ToolKind::Text => {
                self.state = ToolState::TextEntry {
                    origin: pos,
                    buffer: String::new(),
                };
            }
            ToolKind::Selection => match self.state {
                ToolState::SelectionPending(corner) => {
                    self.selection = Some(Rectangle::from_corners(corner, pos));
                    self.state = ToolState::Idle;
                }
                _ => self.state = ToolState::SelectionPending(pos),
            },
        }
        self.note(EditorEvent::Redraw)
    }

    /// Runs a single-activation tool. Returns `true` when the layer was
    /// painted and the action needs a snapshot.
    fn apply_immediate(&mut self, pos: Position) -> bool {
        let paint = self.paint;
        let brush_size = self.brush().size;
        let layer = self.canvas.active_layer_mut();
        match self.tool {
            Tool::Pen => {
                brushes::stamp_brush(layer, paint, pos, brush_size);
                self.stats.strokes += 1;
                true
            }
            Tool::Eraser => {
                brushes::stamp_brush(layer, Cell::EMPTY, pos, brush_size);
                true
            }
            Tool::Fill => {
                let filled = brushes::flood_fill(layer, paint, pos);
                log::debug!("filled {filled} cells");
                true
            }
            Tool::Spray => {
                brushes::spray(layer, paint, pos, self.spray_size, &mut self.rng);
                self.stats.strokes += 1;
                true
            }
            Tool::Pattern => {
                self.pattern.apply(layer, pos, paint.fg, paint.bg);
                true
            }
            Tool::Move => match (self.selection, self.clipboard.as_ref()) {
                (Some(_), Some(clipboard)) => {
                    clipboard.paste(layer, pos);
                    true
                }
                _ => false,
            },
            Tool::Copy => {
                self.copy_selection();
                false
            }
            _ => false,
        }
    }

    fn draw_shape(&mut self, anchor: Position, pos: Position) {
        let paint = self.paint;
        let thickness = self.thickness;
        let filled = self.shape_fill && self.tool.supports_fill();
        let radius = anchor.distance(pos).round() as i32;
        let layer = self.canvas.active_layer_mut();
        match self.tool {
            Tool::Line => brushes::draw_line(layer, paint, anchor, pos, thickness),
            Tool::Box => brushes::draw_rectangle(layer, paint, anchor, pos, filled),
            Tool::Circle => brushes::draw_circle(layer, paint, anchor, radius, filled),
            Tool::Arrow => brushes::draw_arrow(layer, paint, anchor, pos, thickness),
            Tool::Star => brushes::draw_star(layer, paint, anchor, radius, thickness),
            Tool::Triangle => brushes::draw_triangle(layer, paint, anchor, radius, thickness),
            Tool::Hexagon => brushes::draw_hexagon(layer, paint, anchor, radius, thickness),
            _ => {}
        }
    }

    /// Copies the selected cells of the active layer. Not an undoable action.
    fn copy_selection(&mut self) -> bool {
        let Some(rect) = self.selection else {
            return false;
        };
        self.clipboard = Some(Clipboard::capture(self.canvas.active_layer(), rect));
        log::debug!("copied {}x{} cells", rect.width(), rect.height());
        true
    }

    /// Paint used by pointer drags of the freehand tools.
    fn stroke_paint(&self) -> Cell {
        if self.tool == Tool::Eraser { Cell::EMPTY } else { self.paint }
    }

    /// Pointer events in canvas coordinates.
    ///
    /// Freehand tools paint a continuous stroke from press to release that
    /// becomes one undoable action. Any other tool is activated on press.
    /// Like keyboard activations, stroke points are snapped when snapping is on.
    /// Events outside the canvas and events during text entry are ignored,
    /// except that a release always ends an open stroke.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> EditorEvent {
        if event.state == PointerState::Released && self.stroke.is_some() && !self.canvas.is_valid(event.pos) {
            self.finish_stroke();
            return self.note(EditorEvent::Redraw);
        }
        if !self.canvas.is_valid(event.pos) || matches!(self.state, ToolState::TextEntry { .. }) {
            return EditorEvent::None;
        }
        self.canvas.set_cursor(event.pos);

        match event.state {
            PointerState::Pressed => {
                self.finish_stroke();
                if !self.tool.is_freehand() {
                    return self.activate();
                }
                let pos = self.target_position();
                self.stats.record(self.tool);
                self.apply_immediate(pos);
                self.stroke = Some(Stroke { last: pos });
            }
            PointerState::Moved => self.extend_stroke(self.target_position()),
            PointerState::Released => {
                self.extend_stroke(self.target_position());
                self.finish_stroke();
            }
        }
        self.note(EditorEvent::Redraw)
    }

    fn extend_stroke(&mut self, pos: Position) {
        let Some(stroke) = self.stroke else {
            return;
        };
        if stroke.last == pos {
            return;
        }
        let paint = self.stroke_paint();
        brushes::draw_line(self.canvas.active_layer_mut(), paint, stroke.last, pos, self.thickness);
        self.stroke = Some(Stroke { last: pos });
    }

    fn finish_stroke(&mut self) {
        if self.stroke.take().is_some() {
            self.canvas.snapshot();
        }
    }

    pub fn handle_menu(&mut self, choice: MenuChoice) -> EditorEvent {
        self.finish_stroke();
        let event = match choice {
            MenuChoice::Tool(tool) => {
                self.set_tool(tool);
                EditorEvent::Redraw
            }
            MenuChoice::Shape(tool) if tool.is_two_point() => {
                self.set_tool(tool);
                EditorEvent::Redraw
            }
            MenuChoice::Shape(_) => EditorEvent::None,
            MenuChoice::Brush(index) if index < BRUSHES.len() => {
                self.brush = index;
                EditorEvent::Redraw
            }
            MenuChoice::Brush(_) => EditorEvent::None,
            MenuChoice::Pattern(pattern) => {
                self.pattern = pattern;
                EditorEvent::Redraw
            }
            MenuChoice::Foreground(fg) if (fg as usize) < palette::FG_COLORS.len() => {
                self.paint.fg = fg;
                EditorEvent::Redraw
            }
            MenuChoice::Background(bg) if (bg as usize) < palette::BG_COLORS.len() => {
                self.paint.bg = bg;
                EditorEvent::Redraw
            }
            MenuChoice::Foreground(_) | MenuChoice::Background(_) => EditorEvent::None,
            MenuChoice::Layer(choice) => self.handle_layer_choice(choice),
            MenuChoice::Cancel => EditorEvent::Redraw,
        };
        self.note(event)
    }

    fn handle_layer_choice(&mut self, choice: LayerMenuChoice) -> EditorEvent {
        match choice {
            LayerMenuChoice::Select(index) if index < self.canvas.layer_count() => {
                self.canvas.set_active_layer(index);
                EditorEvent::Redraw
            }
            LayerMenuChoice::ToggleVisibility(index) if index < self.canvas.layer_count() => {
                self.canvas.toggle_layer_visibility(index);
                self.canvas.snapshot();
                EditorEvent::Redraw
            }
            LayerMenuChoice::ToggleLock(index) if index < self.canvas.layer_count() => {
                self.canvas.toggle_layer_lock(index);
                self.canvas.snapshot();
                EditorEvent::Redraw
            }
            LayerMenuChoice::Add => self.add_layer(),
            LayerMenuChoice::Delete => self.delete_layer(),
            _ => EditorEvent::None,
        }
    }

    fn add_layer(&mut self) -> EditorEvent {
        self.canvas.add_layer();
        EditorEvent::Redraw
    }

    fn delete_layer(&mut self) -> EditorEvent {
        if self.canvas.delete_active_layer() {
            EditorEvent::Redraw
        } else {
            EditorEvent::None
        }
    }

    pub fn undo(&mut self) -> EditorEvent {
        self.finish_stroke();
        if !self.canvas.undo() {
            return EditorEvent::None;
        }
        self.stats.undos += 1;
        self.note(EditorEvent::Redraw)
    }

    pub fn redo(&mut self) -> EditorEvent {
        self.finish_stroke();
        if !self.canvas.redo() {
            return EditorEvent::None;
        }
        self.note(EditorEvent::Redraw)
    }

    pub fn clear_canvas(&mut self) -> EditorEvent {
        self.finish_stroke();
        self.canvas.clear_all();
        self.note(EditorEvent::Redraw)
    }

    pub fn to_document(&self) -> Document {
        Document::from_canvas(&self.canvas)
    }

    /// Replaces the canvas with the document's layers. On error the canvas is untouched.
    pub fn load_document(&mut self, doc: &Document) -> crate::Result<()> {
        let layers = doc.to_layers()?;
        if !self.canvas.replace_layers(doc.width, doc.height, layers) {
            return Err(crate::EngineError::NoLayers);
        }
        self.stroke = None;
        self.state = ToolState::Idle;
        self.selection = None;
        self.dirty = true;
        Ok(())
    }

    /// Writes the canvas to `path`. Failures are logged and reported as `false`.
    pub fn save_file(&mut self, path: &Path) -> bool {
        match document::save_to_path(&self.to_document(), path) {
            Ok(()) => {
                self.stats.saves += 1;
                log::info!("saved {}", path.display());
                true
            }
            Err(err) => {
                log::warn!("could not save {}: {err}", path.display());
                false
            }
        }
    }

    /// Loads `path` into the canvas. Failures are logged, reported as `false`
    /// and leave the canvas untouched.
    pub fn load_file(&mut self, path: &Path) -> bool {
        let result = document::load_from_path(path).and_then(|doc| self.load_document(&doc));
        match result {
            Ok(()) => {
                log::info!("loaded {}", path.display());
                true
            }
            Err(err) => {
                log::warn!("could not load {}: {err}", path.display());
                false
            }
        }
    }
}
