//! Snapshot based undo/redo.
//!
//! A snapshot is the full layer stack. Layers keep their rows behind `Arc`s,
//! so taking a snapshot only bumps reference counts and an edit copies just
//! the rows it touches.

use std::collections::VecDeque;

use crate::Layer;

pub const DEFAULT_HISTORY_CAPACITY: usize = 50;

pub type Snapshot = Vec<Layer>;

#[derive(Clone, Debug)]
pub struct UndoHistory {
    capacity: usize,
    undo_stack: VecDeque<Snapshot>,
    redo_stack: Vec<Snapshot>,
}

impl Default for UndoHistory {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}

impl UndoHistory {
    /// A capacity below 1 is raised to 1 so the floor snapshot always fits.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            undo_stack: VecDeque::new(),
            redo_stack: Vec::new(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn can_undo(&self) -> bool {
        self.undo_stack.len() > 1
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Records a completed action. Evicts the oldest entry when full and
    /// invalidates everything that could have been redone.
    pub fn push(&mut self, snapshot: Snapshot) {
        if self.undo_stack.len() >= self.capacity {
            self.undo_stack.pop_front();
        }
        self.undo_stack.push_back(snapshot);
        self.redo_stack.clear();
        log::debug!("snapshot pushed ({} undo entries)", self.undo_stack.len());
    }

    /// Steps back one action and returns the state to restore.
    ///
    /// The bottom entry is the floor and is never undone.
    pub fn undo(&mut self) -> Option<&Snapshot> {
        if !self.can_undo() {
            return None;
        }
        let current = self.undo_stack.pop_back()?;
        if self.redo_stack.len() >= self.capacity {
            self.redo_stack.remove(0);
        }
        self.redo_stack.push(current);
        self.undo_stack.back()
    }

    pub fn redo(&mut self) -> Option<&Snapshot> {
        let snapshot = self.redo_stack.pop()?;
        if self.undo_stack.len() >= self.capacity {
            self.undo_stack.pop_front();
        }
        self.undo_stack.push_back(snapshot);
        self.undo_stack.back()
    }

    /// Drops every entry; the next push becomes the new floor.
    pub fn reset(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}
