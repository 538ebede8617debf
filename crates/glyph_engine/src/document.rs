//! JSON document format
//!
//! ```json
//! { "width": 3, "height": 1,
//!   "layers": [ { "name": "main", "visible": true,
//!                 "data": [["a", " ", "b"]],
//!                 "colors": [[1, 0, "2"]],
//!                 "bg_colors": [[0, 0, 0]] } ] }
//! ```
//!
//! Color arrays accept numbers and numeric strings, and may be missing, in
//! which case they default to zero. Every array has to match the document
//! size exactly.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Canvas, Cell, ColorIndex, EngineError, Layer, Result};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub width: i32,
    pub height: i32,
    pub layers: Vec<LayerDocument>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LayerDocument {
    pub name: String,
    #[serde(default = "default_visible")]
    pub visible: bool,
    pub data: Vec<Vec<char>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<Vec<Vec<ColorValue>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bg_colors: Option<Vec<Vec<ColorValue>>>,
}

fn default_visible() -> bool {
    true
}

/// A color as found in a document: a number or a numeric string.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorValue {
    Index(i64),
    Text(String),
}

impl From<ColorIndex> for ColorValue {
    fn from(index: ColorIndex) -> Self {
        ColorValue::Index(index as i64)
    }
}

impl ColorValue {
    pub fn to_index(&self) -> Result<ColorIndex> {
        let value = match self {
            ColorValue::Index(value) => *value,
            ColorValue::Text(text) => text.trim().parse::<i64>().map_err(|_| EngineError::InvalidColor { value: text.clone() })?,
        };
        ColorIndex::try_from(value).map_err(|_| EngineError::InvalidColor { value: value.to_string() })
    }
}

impl Document {
    pub fn from_canvas(canvas: &Canvas) -> Self {
        let layers = canvas
            .layers()
            .iter()
            .map(|layer| LayerDocument {
                name: layer.title().to_string(),
                visible: layer.is_visible(),
                data: layer.rows().map(|row| row.iter().map(|c| c.ch).collect::<Vec<_>>()).collect(),
                colors: Some(layer.rows().map(|row| row.iter().map(|c| ColorValue::from(c.fg)).collect::<Vec<_>>()).collect()),
                bg_colors: Some(layer.rows().map(|row| row.iter().map(|c| ColorValue::from(c.bg)).collect::<Vec<_>>()).collect()),
            })
            .collect();
        Self {
            width: canvas.width(),
            height: canvas.height(),
            layers,
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Validates the document and builds its layers.
    pub fn to_layers(&self) -> Result<Vec<Layer>> {
        if self.width < 1 || self.height < 1 {
            return Err(EngineError::InvalidSize {
                width: self.width as i64,
                height: self.height as i64,
            });
        }
        if self.layers.is_empty() {
            return Err(EngineError::NoLayers);
        }
        self.layers.iter().map(|layer| layer.to_layer(self.width as usize, self.height as usize)).collect()
    }
}

impl LayerDocument {
    fn check_shape<T>(&self, field: &'static str, rows: &[Vec<T>], width: usize, height: usize) -> Result<()> {
        if rows.len() != height {
            return Err(EngineError::RowCountMismatch {
                layer: self.name.clone(),
                field,
                expected: height,
                actual: rows.len(),
            });
        }
        if let Some((row, cols)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(EngineError::ColumnCountMismatch {
                layer: self.name.clone(),
                field,
                row,
                expected: width,
                actual: cols.len(),
            });
        }
        Ok(())
    }

    fn color_grid(&self, field: &'static str, values: Option<&Vec<Vec<ColorValue>>>, width: usize, height: usize) -> Result<Vec<Vec<ColorIndex>>> {
        let Some(values) = values else {
            return Ok(vec![vec![0; width]; height]);
        };
        self.check_shape(field, values, width, height)?;
        values.iter().map(|row| row.iter().map(ColorValue::to_index).collect::<Result<Vec<_>>>()).collect()
    }

    fn to_layer(&self, width: usize, height: usize) -> Result<Layer> {
        self.check_shape("data", &self.data, width, height)?;
        let fg = self.color_grid("colors", self.colors.as_ref(), width, height)?;
        let bg = self.color_grid("bg_colors", self.bg_colors.as_ref(), width, height)?;

        let rows: Vec<Vec<Cell>> = (0..height)
            .map(|y| (0..width).map(|x| Cell::new(self.data[y][x], fg[y][x], bg[y][x])).collect())
            .collect();
        let mut layer = Layer::from_rows(self.name.clone(), width as i32, rows);
        layer.set_is_visible(self.visible);
        Ok(layer)
    }
}

pub fn load_from_path(path: &Path) -> Result<Document> {
    let json = std::fs::read_to_string(path).map_err(|err| EngineError::read_file(path, err.to_string()))?;
    Document::from_json(&json)
}

pub fn save_to_path(doc: &Document, path: &Path) -> Result<()> {
    let json = doc.to_json()?;
    std::fs::write(path, json).map_err(|err| EngineError::write_file(path, err.to_string()))
}
