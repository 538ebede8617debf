/// Index into the foreground or background palette.
pub type ColorIndex = u8;

/// One character cell: a glyph plus foreground and background color indices.
///
/// A space glyph means "empty"; the compositor treats it as transparent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub ch: char,
    pub fg: ColorIndex,
    pub bg: ColorIndex,
}

impl Default for Cell {
    fn default() -> Self {
        Cell::EMPTY
    }
}

impl Cell {
    pub const EMPTY_GLYPH: char = ' ';

    pub const EMPTY: Cell = Cell {
        ch: Cell::EMPTY_GLYPH,
        fg: 0,
        bg: 0,
    };

    #[must_use]
    pub const fn new(ch: char, fg: ColorIndex, bg: ColorIndex) -> Self {
        Cell { ch, fg, bg }
    }

    pub fn is_empty(&self) -> bool {
        self.ch == Cell::EMPTY_GLYPH
    }

    /// Same cell with a different glyph.
    #[must_use]
    pub fn with_char(self, ch: char) -> Self {
        Cell { ch, ..self }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "('{}', fg: {}, bg: {})", self.ch, self.fg, self.bg)
    }
}

impl From<char> for Cell {
    fn from(ch: char) -> Self {
        Cell { ch, fg: 0, bg: 0 }
    }
}
