//! Unified error types for glyph_engine

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for glyph_engine operations.
///
/// Drawing and tool operations never produce these; they degrade to no-ops.
/// Only the persistence layer reports errors.
#[derive(Debug, Error)]
pub enum EngineError {
    // === I/O Errors ===
    #[error("Failed to read file '{path}': {message}")]
    ReadFile { path: PathBuf, message: String },

    #[error("Failed to write file '{path}': {message}")]
    WriteFile { path: PathBuf, message: String },

    // === Document Errors ===
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid canvas size {width}x{height}")]
    InvalidSize { width: i64, height: i64 },

    #[error("Document has no layers")]
    NoLayers,

    #[error("Layer '{layer}': {field} has {actual} rows, expected {expected}")]
    RowCountMismatch { layer: String, field: &'static str, expected: usize, actual: usize },

    #[error("Layer '{layer}': {field} row {row} has {actual} columns, expected {expected}")]
    ColumnCountMismatch {
        layer: String,
        field: &'static str,
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid color value: {value}")]
    InvalidColor { value: String },
}

/// Result type alias for glyph_engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

impl EngineError {
    /// Create a read file error
    pub fn read_file(path: impl Into<PathBuf>, msg: impl Into<String>) -> Self {
        Self::ReadFile {
            path: path.into(),
            message: msg.into(),
        }
    }

    /// Create a write file error
    pub fn write_file(path: impl Into<PathBuf>, msg: impl Into<String>) -> Self {
        Self::WriteFile {
            path: path.into(),
            message: msg.into(),
        }
    }
}
