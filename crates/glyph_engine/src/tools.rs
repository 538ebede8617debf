//! Tool definitions for the character canvas
//!
//! Tools are a closed enum. How a tool reacts to an activation is decided by
//! its [`ToolKind`], the per-tool behavior lives in the edit session.

/// Available editing tools, in tool menu order
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Tool {
    /// Stamp the selected brush
    #[default]
    Pen,
    /// Stamp the selected brush with empty cells
    Eraser,
    Line,
    /// Rectangle outline, or filled when shape fill is on
    Box,
    /// Circle around the first point, or filled when shape fill is on
    Circle,
    /// Flood fill
    Fill,
    Spray,
    Text,
    /// Rectangle selection
    Select,
    /// Paste the clipboard at the cursor
    Move,
    /// Copy the selection to the clipboard
    Copy,
    /// Stamp the current pattern
    Pattern,
    Arrow,
    Star,
    Triangle,
    Hexagon,
}

/// How a tool consumes activations
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToolKind {
    /// One activation is one complete action
    Immediate,
    /// First activation sets an anchor, the second draws
    TwoPoint,
    /// Activation opens a text buffer at the cursor
    Text,
    /// Two activations span a selection rectangle
    Selection,
}

pub const TOOLS: [Tool; 16] = [
    Tool::Pen,
    Tool::Eraser,
    Tool::Line,
    Tool::Box,
    Tool::Circle,
    Tool::Fill,
    Tool::Spray,
    Tool::Text,
    Tool::Select,
    Tool::Move,
    Tool::Copy,
    Tool::Pattern,
    Tool::Arrow,
    Tool::Star,
    Tool::Triangle,
    Tool::Hexagon,
];

/// Two-point tools offered by the shape menu
pub const SHAPES: [Tool; 7] = [Tool::Line, Tool::Box, Tool::Circle, Tool::Arrow, Tool::Star, Tool::Triangle, Tool::Hexagon];

impl Tool {
    /// Short name shown in the status line
    pub fn name(&self) -> &'static str {
        match self {
            Tool::Pen => "pen",
            Tool::Eraser => "ers",
            Tool::Line => "line",
            Tool::Box => "box",
            Tool::Circle => "circ",
            Tool::Fill => "fill",
            Tool::Spray => "spray",
            Tool::Text => "text",
            Tool::Select => "sel",
            Tool::Move => "move",
            Tool::Copy => "copy",
            Tool::Pattern => "pat",
            Tool::Arrow => "arrow",
            Tool::Star => "star",
            Tool::Triangle => "tri",
            Tool::Hexagon => "hex",
        }
    }

    /// Get the tooltip text
    pub fn tooltip(&self) -> &'static str {
        match self {
            Tool::Pen => "Draw with the selected brush",
            Tool::Eraser => "Erase with the selected brush",
            Tool::Line => "Draw straight lines",
            Tool::Box => "Draw rectangles",
            Tool::Circle => "Draw circles from the center",
            Tool::Fill => "Flood fill area",
            Tool::Spray => "Spray random dots",
            Tool::Text => "Type text at the cursor",
            Tool::Select => "Rectangle selection",
            Tool::Move => "Paste the clipboard at the cursor",
            Tool::Copy => "Copy the selection",
            Tool::Pattern => "Stamp the current pattern",
            Tool::Arrow => "Draw arrows",
            Tool::Star => "Draw five pointed stars",
            Tool::Triangle => "Draw triangles",
            Tool::Hexagon => "Draw hexagons",
        }
    }

    /// Position in the tool menu
    pub fn index(&self) -> usize {
        TOOLS.iter().position(|t| t == self).unwrap_or(0)
    }

    pub fn from_index(index: usize) -> Option<Tool> {
        TOOLS.get(index).copied()
    }

    pub fn kind(&self) -> ToolKind {
        match self {
            Tool::Line | Tool::Box | Tool::Circle | Tool::Arrow | Tool::Star | Tool::Triangle | Tool::Hexagon => ToolKind::TwoPoint,
            Tool::Text => ToolKind::Text,
            Tool::Select => ToolKind::Selection,
            Tool::Pen | Tool::Eraser | Tool::Fill | Tool::Spray | Tool::Move | Tool::Copy | Tool::Pattern => ToolKind::Immediate,
        }
    }

    /// Check if this tool needs an anchor before it draws
    pub fn is_two_point(&self) -> bool {
        self.kind() == ToolKind::TwoPoint
    }

    /// Check if pointer drags paint continuous strokes
    pub fn is_freehand(&self) -> bool {
        matches!(self, Tool::Pen | Tool::Eraser)
    }

    /// Check if this tool honors the shape fill toggle
    pub fn supports_fill(&self) -> bool {
        matches!(self, Tool::Box | Tool::Circle)
    }
}

impl std::fmt::Display for Tool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
