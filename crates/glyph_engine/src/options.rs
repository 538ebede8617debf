use serde::{Deserialize, Serialize};

use crate::history::DEFAULT_HISTORY_CAPACITY;

/// Startup options for an edit session.
///
/// Every field has a default so partial settings files deserialize.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorOptions {
    pub width: i32,
    pub height: i32,
    pub history_capacity: usize,
    /// How long the event loop waits for input before rendering again.
    pub poll_interval_ms: u64,
    pub show_grid: bool,
    pub snap_to_grid: bool,
    pub glyph: char,
}

impl Default for EditorOptions {
    fn default() -> Self {
        // an 80x24 terminal minus border columns, status and footer rows
        Self {
            width: 78,
            height: 20,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            poll_interval_ms: 16,
            show_grid: false,
            snap_to_grid: false,
            glyph: '#',
        }
    }
}

impl EditorOptions {
    pub fn poll_interval(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.poll_interval_ms)
    }
}
