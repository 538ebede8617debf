//! Named color palettes and the fg/bg pair table used by terminal front ends.

use crate::ColorIndex;

pub const FG_COLORS: [&str; 9] = ["default", "blue", "green", "cyan", "red", "magenta", "yellow", "white", "black"];

pub const BG_COLORS: [&str; 9] = ["default", "red", "green", "yellow", "blue", "magenta", "cyan", "white", "black"];

pub fn fg_name(index: ColorIndex) -> &'static str {
    FG_COLORS.get(index as usize).copied().unwrap_or("?")
}

pub fn bg_name(index: ColorIndex) -> &'static str {
    BG_COLORS.get(index as usize).copied().unwrap_or("?")
}

/// Palette index of a foreground color name.
pub fn fg_index(name: &str) -> Option<ColorIndex> {
    FG_COLORS.iter().position(|n| n.eq_ignore_ascii_case(name)).map(|i| i as ColorIndex)
}

pub fn bg_index(name: &str) -> Option<ColorIndex> {
    BG_COLORS.iter().position(|n| n.eq_ignore_ascii_case(name)).map(|i| i as ColorIndex)
}

pub fn next_fg(index: ColorIndex) -> ColorIndex {
    ((index as usize + 1) % FG_COLORS.len()) as ColorIndex
}

pub fn next_bg(index: ColorIndex) -> ColorIndex {
    ((index as usize + 1) % BG_COLORS.len()) as ColorIndex
}

/// Linear table of every fg/bg combination.
///
/// Pair ids start at 1 (`0` is reserved by terminals for the default pair)
/// and are laid out as `1 + fg * bg_count + bg`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorPairTable {
    fg_count: usize,
    bg_count: usize,
}

impl Default for ColorPairTable {
    fn default() -> Self {
        Self::new(FG_COLORS.len(), BG_COLORS.len())
    }
}

impl ColorPairTable {
    pub fn new(fg_count: usize, bg_count: usize) -> Self {
        Self { fg_count, bg_count }
    }

    pub fn len(&self) -> usize {
        self.fg_count * self.bg_count
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Pair id for a combination. Out of range indices mean the palette and
    /// the table disagree; that trips a debug assertion and yields `None`.
    pub fn pair_id(&self, fg: ColorIndex, bg: ColorIndex) -> Option<usize> {
        let (fg, bg) = (fg as usize, bg as usize);
        let in_range = fg < self.fg_count && bg < self.bg_count;
        debug_assert!(in_range, "color pair ({fg}, {bg}) outside {}x{} table", self.fg_count, self.bg_count);
        if !in_range {
            log::warn!("color pair ({fg}, {bg}) outside {}x{} table", self.fg_count, self.bg_count);
            return None;
        }
        Some(1 + fg * self.bg_count + bg)
    }

    /// Inverse of [`Self::pair_id`].
    pub fn colors(&self, pair_id: usize) -> Option<(ColorIndex, ColorIndex)> {
        if pair_id == 0 || pair_id > self.len() {
            return None;
        }
        let idx = pair_id - 1;
        Some(((idx / self.bg_count) as ColorIndex, (idx % self.bg_count) as ColorIndex))
    }
}
