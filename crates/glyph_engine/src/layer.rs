use std::sync::Arc;

use crate::{Cell, Position};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Properties {
    pub title: String,
    pub is_visible: bool,
    pub is_locked: bool,
}

/// A fixed-size grid of cells.
///
/// Rows are reference counted and copied on first write, so cloning a layer
/// (which every history snapshot does) only copies row pointers. A snapshot
/// and the live layer share every row that has not been painted since.
///
/// All coordinate access is bounds checked: reads outside the grid return
/// [`Cell::EMPTY`], writes outside the grid or to a locked layer are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layer {
    pub properties: Properties,
    width: i32,
    height: i32,
    rows: Vec<Arc<Vec<Cell>>>,
}

impl Layer {
    pub fn new(title: impl Into<String>, width: i32, height: i32) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        let row = Arc::new(vec![Cell::EMPTY; width as usize]);
        Layer {
            properties: Properties {
                title: title.into(),
                is_visible: true,
                is_locked: false,
            },
            width,
            height,
            rows: vec![row; height as usize],
        }
    }

    /// Builds a layer from complete rows. Callers guarantee every row has `width` cells.
    pub(crate) fn from_rows(title: impl Into<String>, width: i32, rows: Vec<Vec<Cell>>) -> Self {
        let height = rows.len() as i32;
        Layer {
            properties: Properties {
                title: title.into(),
                is_visible: true,
                is_locked: false,
            },
            width,
            height,
            rows: rows.into_iter().map(Arc::new).collect(),
        }
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

    pub fn title(&self) -> &str {
        &self.properties.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.properties.title = title.into();
    }

    pub fn is_visible(&self) -> bool {
        self.properties.is_visible
    }

    pub fn set_is_visible(&mut self, is_visible: bool) {
        self.properties.is_visible = is_visible;
    }

    pub fn is_locked(&self) -> bool {
        self.properties.is_locked
    }

    pub fn set_is_locked(&mut self, is_locked: bool) {
        self.properties.is_locked = is_locked;
    }

    pub fn get(&self, pos: impl Into<Position>) -> Cell {
        let pos = pos.into();
        if !self.is_valid(pos) {
            return Cell::EMPTY;
        }
        self.rows[pos.y as usize][pos.x as usize]
    }

    pub fn set(&mut self, pos: impl Into<Position>, cell: Cell) {
        let pos = pos.into();
        if self.properties.is_locked || !self.is_valid(pos) {
            return;
        }
        let row = &mut self.rows[pos.y as usize];
        if row[pos.x as usize] == cell {
            return;
        }
        Arc::make_mut(row)[pos.x as usize] = cell;
    }

    /// Replaces only the glyph, keeping the cell's colors.
    pub fn set_char(&mut self, pos: impl Into<Position>, ch: char) {
        let pos = pos.into();
        let cell = self.get(pos).with_char(ch);
        self.set(pos, cell);
    }

    /// Resets every cell to empty. A locked layer is left untouched.
    pub fn clear(&mut self) {
        if self.properties.is_locked {
            return;
        }
        let row = Arc::new(vec![Cell::EMPTY; self.width as usize]);
        for r in &mut self.rows {
            *r = row.clone();
        }
    }

    pub fn row(&self, y: i32) -> Option<&[Cell]> {
        if y < 0 || y >= self.height {
            return None;
        }
        Some(self.rows[y as usize].as_slice())
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.rows.iter().map(|r| r.as_slice())
    }

    /// Number of rows physically shared with `other`.
    pub fn shared_rows(&self, other: &Layer) -> usize {
        self.rows.iter().zip(other.rows.iter()).filter(|(a, b)| Arc::ptr_eq(a, b)).count()
    }
}

impl std::fmt::Display for Layer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut str = String::new();
        for row in self.rows() {
            str.extend(row.iter().map(|c| c.ch));
            str.push('\n');
        }
        write!(f, "{str}")
    }
}
