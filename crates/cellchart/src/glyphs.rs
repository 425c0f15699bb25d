#![forbid(unsafe_code)]

//! Glyph sets and plot options.

use cellchart_render::cell::ColorSlot;

/// Number of colors series rotate through by default.
pub const DEFAULT_PALETTE_LEN: u8 = 5;

/// Characters a plot draws with.
///
/// Tee names describe the stem: `tee_up` is `┴` (stem points up), `tee_down`
/// is `┬`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlotGlyphs {
    pub horizontal: char,
    pub vertical: char,
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub cross: char,
    pub tee_up: char,
    pub tee_down: char,
    pub bar: char,
}

impl PlotGlyphs {
    /// Box-drawing glyphs with a checkerboard bar fill.
    pub const UNICODE: Self = Self {
        horizontal: '─',
        vertical: '│',
        top_left: '┌',
        top_right: '┐',
        bottom_left: '└',
        bottom_right: '┘',
        cross: '┼',
        tee_up: '┴',
        tee_down: '┬',
        bar: '▒',
    };

    /// ASCII fallback for terminals without line drawing.
    pub const ASCII: Self = Self {
        horizontal: '-',
        vertical: '|',
        top_left: '+',
        top_right: '+',
        bottom_left: '+',
        bottom_right: '+',
        cross: '+',
        tee_up: '+',
        tee_down: '+',
        bar: '#',
    };
}

impl Default for PlotGlyphs {
    fn default() -> Self {
        Self::UNICODE
    }
}

/// Rendering options shared by the plot widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlotOptions {
    /// Glyph set.
    pub glyphs: PlotGlyphs,
    /// Series `k` draws with slot `1 + k % palette_len`. Zero disables color.
    pub palette_len: u8,
}

impl PlotOptions {
    /// Unicode glyphs and the five-color palette.
    pub const fn new() -> Self {
        Self {
            glyphs: PlotGlyphs::UNICODE,
            palette_len: DEFAULT_PALETTE_LEN,
        }
    }

    /// Replace the glyph set.
    pub const fn glyphs(mut self, glyphs: PlotGlyphs) -> Self {
        self.glyphs = glyphs;
        self
    }

    /// Replace the palette length.
    pub const fn palette_len(mut self, palette_len: u8) -> Self {
        self.palette_len = palette_len;
        self
    }

    /// Color slot for a series index.
    #[inline]
    pub const fn series_color(&self, series: usize) -> ColorSlot {
        ColorSlot::for_series(series, self.palette_len)
    }
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self::new()
    }
}
