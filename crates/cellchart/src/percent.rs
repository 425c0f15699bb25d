#![forbid(unsafe_code)]

//! Framed utilization chart.
//!
//! The dashboard panel for percentages: a line plot over `0..=100` inside a
//! square border, with a five-label gutter on the left.
//!
//! ```text
//!    ┌──────┐
//! 100│      │
//! 75%│      │
//!    │      │
//! 50%│      │
//!    │      │
//! 25%│      │
//!  0%│      │
//!    └──────┘
//! ```
//!
//! Areas too small for the frame (width ≤ 5 or height ≤ 2) get a bare plot.
//! The plot width is always even so two interleaved series get the same
//! number of columns.

use crate::Widget;
use crate::glyphs::PlotOptions;
use crate::line::LinePlot;
use crate::samples::{SampleBuffer, ValueRange};
use cellchart_core::geometry::{Rect, Size};
use cellchart_render::buffer::Buffer;
use cellchart_render::cell::ColorSlot;
use cellchart_render::drawing::{BorderChars, Draw};
use cellchart_render::surface::{Surface, Viewport};

/// Columns taken by the gutter and the left border.
const GUTTER: u16 = 4;

/// Where the pieces of a percent chart go, relative to its area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PercentLayout {
    /// The line plot itself.
    pub plot: Rect,
    /// The border around the plot, when there is room for one.
    pub frame: Option<Rect>,
}

impl PercentLayout {
    /// Lay out a chart in an area of `size`.
    pub fn compute(size: Size) -> Self {
        let Size { width, height } = size;
        if width > GUTTER + 1 && height > 2 {
            let cols = (width - GUTTER - 1) / 2 * 2;
            let rows = height - 2;
            Self {
                plot: Rect::new(GUTTER, 1, cols, rows),
                frame: Some(Rect::new(GUTTER - 1, 0, cols + 2, rows + 2)),
            }
        } else {
            Self {
                plot: Rect::new(0, 0, width / 2 * 2, height),
                frame: None,
            }
        }
    }

    /// Gutter labels as `(row, text)` in draw order.
    ///
    /// Drawn in this order so that on short charts the later labels win.
    pub fn labels(&self) -> Option<[(u16, &'static str); 5]> {
        self.frame?;
        let rows = self.plot.height;
        let three_quarters = rows / 4 * 3 + rows % 4 * 3 / 4;
        Some([
            (1 + three_quarters, "25%"),
            (1 + rows / 4, "75%"),
            (1 + rows / 2, "50%"),
            (1, "100"),
            (rows, " 0%"),
        ])
    }
}

/// A framed line plot of percentages.
#[derive(Debug, Clone, Copy)]
pub struct PercentChart<'a> {
    samples: SampleBuffer<'a>,
    legend: &'a [Option<&'a str>],
    options: PlotOptions,
    border: BorderChars,
}

impl<'a> PercentChart<'a> {
    pub fn new(samples: SampleBuffer<'a>) -> Self {
        Self {
            samples,
            legend: &[],
            options: PlotOptions::default(),
            border: BorderChars::SQUARE,
        }
    }

    pub fn legend(mut self, legend: &'a [Option<&'a str>]) -> Self {
        self.legend = legend;
        self
    }

    pub fn options(mut self, options: PlotOptions) -> Self {
        self.options = options;
        self
    }

    pub fn border(mut self, border: BorderChars) -> Self {
        self.border = border;
        self
    }

    /// Number of samples (all series together) that exactly fill the plot
    /// in an area of `size`.
    pub fn capacity(size: Size) -> usize {
        usize::from(PercentLayout::compute(size).plot.width)
    }

    /// Draw the frame, gutter, and plot onto the whole of `surface`.
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        let layout = PercentLayout::compute(surface.extent());

        if let (Some(frame), Some(labels)) = (layout.frame, layout.labels()) {
            surface.draw_border(frame, self.border, ColorSlot::DEFAULT);
            for (row, text) in labels {
                surface.print(0, row, text, ColorSlot::DEFAULT, GUTTER - 1);
            }
        }

        let plot = LinePlot::new(self.samples, ValueRange::PERCENT)
            .legend(self.legend)
            .options(self.options);
        plot.render(&mut Viewport::new(surface, layout.plot));
    }
}

impl Widget for PercentChart<'_> {
    fn render(&self, area: Rect, buf: &mut Buffer) {
        PercentChart::render(self, &mut Viewport::new(buf, area));
    }
}
