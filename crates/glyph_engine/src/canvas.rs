use crate::{Layer, Position, history::{Snapshot, UndoHistory}};

/// The layer stack, the cursor and the undo history.
///
/// Layers are painted in order, later layers on top. There is always at
/// least one layer, and the history always holds at least the state the
/// canvas was created (or loaded) with.
#[derive(Debug, Clone)]
pub struct Canvas {
    width: i32,
    height: i32,
    layers: Vec<Layer>,
    active_layer: usize,
    cursor: Position,
    history: UndoHistory,
}

impl Canvas {
    pub fn new(width: i32, height: i32) -> Self {
        Self::with_history_capacity(width, height, crate::history::DEFAULT_HISTORY_CAPACITY)
    }

    pub fn with_history_capacity(width: i32, height: i32, capacity: usize) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        let mut canvas = Self {
            width,
            height,
            layers: vec![Layer::new("main", width, height)],
            active_layer: 0,
            cursor: Position::new(width / 2, height / 2),
            history: UndoHistory::new(capacity),
        };
        canvas.snapshot();
        canvas
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn is_valid(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.y >= 0 && pos.x < self.width && pos.y < self.height
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    pub fn layer(&self, index: usize) -> Option<&Layer> {
        self.layers.get(index)
    }

    pub fn layer_mut(&mut self, index: usize) -> Option<&mut Layer> {
        self.layers.get_mut(index)
    }

    pub fn active_layer_index(&self) -> usize {
        self.active_layer
    }

    /// Out of range indices are ignored.
    pub fn set_active_layer(&mut self, index: usize) {
        if index < self.layers.len() {
            self.active_layer = index;
        }
    }

    pub fn active_layer(&self) -> &Layer {
        &self.layers[self.active_layer]
    }

    pub fn active_layer_mut(&mut self) -> &mut Layer {
        &mut self.layers[self.active_layer]
    }

    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Moves the cursor, clamped to the grid.
    pub fn set_cursor(&mut self, pos: impl Into<Position>) {
        let pos = pos.into();
        self.cursor = Position::new(pos.x.clamp(0, self.width - 1), pos.y.clamp(0, self.height - 1));
    }

    pub fn move_cursor(&mut self, dx: i32, dy: i32) {
        self.set_cursor(self.cursor + Position::new(dx, dy));
    }

    pub fn history(&self) -> &UndoHistory {
        &self.history
    }

    /// Records the current layer stack as one completed action.
    pub fn snapshot(&mut self) {
        self.history.push(self.layers.clone());
    }

    /// Returns `false` when there was nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(snapshot) = self.history.undo().cloned() else {
            return false;
        };
        self.restore(snapshot);
        true
    }

    pub fn redo(&mut self) -> bool {
        let Some(snapshot) = self.history.redo().cloned() else {
            return false;
        };
        self.restore(snapshot);
        true
    }

    fn restore(&mut self, snapshot: Snapshot) {
        if let Some(first) = snapshot.first() {
            self.width = first.width();
            self.height = first.height();
        } else {
            return;
        }
        self.layers = snapshot;
        self.active_layer = self.active_layer.min(self.layers.len() - 1);
        self.set_cursor(self.cursor);
    }

    /// Appends an empty layer named `layer<N>`, makes it active and records the action.
    pub fn add_layer(&mut self) -> usize {
        let title = format!("layer{}", self.layers.len() + 1);
        log::info!("add layer '{title}'");
        self.layers.push(Layer::new(title, self.width, self.height));
        self.active_layer = self.layers.len() - 1;
        self.snapshot();
        self.active_layer
    }

    /// Deletes the active layer. The last remaining layer is never deleted.
    pub fn delete_active_layer(&mut self) -> bool {
        if self.layers.len() <= 1 {
            return false;
        }
        let removed = self.layers.remove(self.active_layer);
        log::info!("delete layer '{}'", removed.title());
        self.active_layer = self.active_layer.min(self.layers.len() - 1);
        self.snapshot();
        true
    }

    pub fn toggle_layer_visibility(&mut self, index: usize) {
        if let Some(layer) = self.layers.get_mut(index) {
            let is_visible = layer.is_visible();
            layer.set_is_visible(!is_visible);
        }
    }

    pub fn toggle_layer_lock(&mut self, index: usize) {
        if let Some(layer) = self.layers.get_mut(index) {
            let is_locked = layer.is_locked();
            layer.set_is_locked(!is_locked);
        }
    }

    /// Clears every unlocked layer and records the action.
    pub fn clear_all(&mut self) {
        for layer in &mut self.layers {
            layer.clear();
        }
        self.snapshot();
    }

    /// Swaps in a whole new layer stack, as loading a document does.
    ///
    /// The active layer is reset to the bottom one and the new state becomes
    /// an undoable action. An empty stack is ignored.
    pub fn replace_layers(&mut self, width: i32, height: i32, layers: Vec<Layer>) -> bool {
        if layers.is_empty() || width < 1 || height < 1 {
            return false;
        }
        self.width = width;
        self.height = height;
        self.layers = layers;
        self.active_layer = 0;
        self.set_cursor(self.cursor);
        self.snapshot();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cell;

    #[test]
    fn test_new_canvas() {
        let canvas = Canvas::new(20, 10);
        assert_eq!(1, canvas.layer_count());
        assert_eq!("main", canvas.active_layer().title());
        assert_eq!(Position::new(10, 5), canvas.cursor());
        assert_eq!(1, canvas.history().undo_len());
    }

    #[test]
    fn test_cursor_is_clamped() {
        let mut canvas = Canvas::new(20, 10);
        canvas.set_cursor((-4, 30));
        assert_eq!(Position::new(0, 9), canvas.cursor());
        canvas.move_cursor(100, 0);
        assert_eq!(Position::new(19, 9), canvas.cursor());
    }

    #[test]
    fn test_add_delete_layer() {
        let mut canvas = Canvas::new(20, 10);
        assert_eq!(1, canvas.add_layer());
        assert_eq!("layer2", canvas.active_layer().title());
        assert!(canvas.delete_active_layer());
        assert_eq!(0, canvas.active_layer_index());
        assert!(!canvas.delete_active_layer());
        assert_eq!(1, canvas.layer_count());
    }

    #[test]
    fn test_undo_add_layer() {
        let mut canvas = Canvas::new(20, 10);
        canvas.add_layer();
        assert!(canvas.undo());
        assert_eq!(1, canvas.layer_count());
        assert_eq!(0, canvas.active_layer_index());
        assert!(canvas.redo());
        assert_eq!(2, canvas.layer_count());
    }

    #[test]
    fn test_clear_all_skips_locked() {
        let mut canvas = Canvas::new(20, 10);
        canvas.active_layer_mut().set((1, 1), Cell::from('a'));
        canvas.add_layer();
        canvas.active_layer_mut().set((2, 2), Cell::from('b'));
        canvas.toggle_layer_lock(1);
        canvas.clear_all();
        assert!(canvas.layers()[0].get((1, 1)).is_empty());
        assert_eq!('b', canvas.layers()[1].get((2, 2)).ch);
    }
}
