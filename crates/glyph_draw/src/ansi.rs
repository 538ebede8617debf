//! ANSI colored frame output

use glyph_engine::{
    ColorIndex, Frame, FrameCell,
    palette::{self, ColorPairTable},
};

fn fg_code(index: ColorIndex) -> u8 {
    match palette::fg_name(index) {
        "black" => 30,
        "red" => 31,
        "green" => 32,
        "yellow" => 33,
        "blue" => 34,
        "magenta" => 35,
        "cyan" => 36,
        "white" => 37,
        _ => 39,
    }
}

fn bg_code(index: ColorIndex) -> u8 {
    match palette::bg_name(index) {
        "black" => 40,
        "red" => 41,
        "green" => 42,
        "yellow" => 43,
        "blue" => 44,
        "magenta" => 45,
        "cyan" => 46,
        "white" => 47,
        _ => 49,
    }
}

/// Writes frames with SGR escapes. Like a curses color pair table, the
/// sequence for every fg/bg pair is built once up front.
pub struct AnsiPainter {
    table: ColorPairTable,
    pairs: Vec<String>,
}

impl Default for AnsiPainter {
    fn default() -> Self {
        Self::new()
    }
}

impl AnsiPainter {
    pub fn new() -> Self {
        let table = ColorPairTable::default();
        let pairs = (0..=table.len())
            .map(|id| match table.colors(id) {
                Some((fg, bg)) => format!("{};{}", fg_code(fg), bg_code(bg)),
                None => "39;49".to_string(),
            })
            .collect();
        Self { table, pairs }
    }

    fn sgr(&self, cell: &FrameCell) -> String {
        // documents may carry indices beyond the palette; those draw in the default colors
        let fg = if (cell.fg as usize) < palette::FG_COLORS.len() { cell.fg } else { 0 };
        let bg = if (cell.bg as usize) < palette::BG_COLORS.len() { cell.bg } else { 0 };
        let pair = self.table.pair_id(fg, bg).and_then(|id| self.pairs.get(id));
        let mut result = format!("\x1b[0;{}", pair.map_or("39;49", String::as_str));
        if cell.style.bold {
            result.push_str(";1");
        }
        if cell.style.blink {
            result.push_str(";5");
        }
        if cell.style.reverse {
            result.push_str(";7");
        }
        result.push('m');
        result
    }

    /// Status line, colored canvas rows and footer, one per line.
    pub fn paint(&self, frame: &Frame) -> String {
        let mut result = String::new();
        result.push_str(&frame.status);
        result.push('\n');
        for y in 0..frame.height {
            let mut current = String::new();
            for x in 0..frame.width {
                let Some(cell) = frame.get((x, y)) else {
                    continue;
                };
                let sgr = self.sgr(cell);
                if sgr != current {
                    result.push_str(&sgr);
                    current = sgr;
                }
                result.push(cell.ch);
            }
            result.push_str("\x1b[0m\n");
        }
        result.push_str(&frame.footer);
        result.push('\n');
        result
    }
}
