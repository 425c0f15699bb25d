#![forbid(unsafe_code)]

//! Single-series bar plot.
//!
//! Each sample fills its column from its level down to the bottom row with
//! the bar glyph. Columns are independent; there is no color or junction
//! handling.

use crate::Widget;
use crate::glyphs::PlotGlyphs;
use crate::level::LevelMapper;
use crate::samples::ValueRange;
use cellchart_core::geometry::Rect;
use cellchart_render::buffer::Buffer;
use cellchart_render::cell::ColorSlot;
use cellchart_render::surface::{Surface, Viewport};

/// Column bars over a flat sample slice.
#[derive(Debug, Clone, Copy)]
pub struct BarPlot<'a> {
    samples: &'a [f64],
    range: ValueRange,
    glyph: char,
}

impl<'a> BarPlot<'a> {
    pub fn new(samples: &'a [f64], range: ValueRange) -> Self {
        Self {
            samples,
            range,
            glyph: PlotGlyphs::UNICODE.bar,
        }
    }

    /// Fill glyph (defaults to `▒`).
    pub fn glyph(mut self, glyph: char) -> Self {
        self.glyph = glyph;
        self
    }

    /// Draw onto the whole of `surface`.
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        let extent = surface.extent();
        if self.samples.is_empty() || extent.is_empty() {
            return;
        }

        let span = cellchart_core::debug_span!(
            "plot_render",
            widget = "BarPlot",
            cols = extent.width,
            rows = extent.height,
            samples = self.samples.len()
        );
        let _guard = span.enter();

        let rows = extent.height - 1;
        let mapper = LevelMapper::new(self.range, rows);

        for (x, &value) in (0..extent.width).zip(self.samples) {
            let top = mapper.level(value).max(0);
            let Ok(top) = u16::try_from(top) else {
                continue;
            };
            for y in top..=rows {
                surface.put(x, y, self.glyph, ColorSlot::DEFAULT);
            }
        }
    }
}

impl Widget for BarPlot<'_> {
    fn render(&self, area: Rect, buf: &mut Buffer) {
        BarPlot::render(self, &mut Viewport::new(buf, area));
    }
}

/// Draw `samples` as bars onto `surface` with the default glyph.
///
/// Does nothing when `samples` is empty or the range is not a finite
/// `min < max`.
pub fn render_bar_plot<S: Surface + ?Sized>(surface: &mut S, samples: &[f64], min: f64, max: f64) {
    let Ok(range) = ValueRange::new(min, max) else {
        cellchart_core::warn!(min, max, "bar plot skipped: invalid range");
        return;
    };
    BarPlot::new(samples, range).render(surface);
}
