#![forbid(unsafe_code)]

//! Multi-series line plot.
//!
//! Each series is drawn as a polyline of box-drawing glyphs, one column per
//! sample. Where series meet in a column the junction resolver picks cross
//! and tee glyphs. A legend is drawn right-aligned in the top rows.
//!
//! # Layout
//!
//! The bottom surface row is where `min` lands; legend labels use the rows
//! above it. Sample `i` is drawn in column `i`, so with `n` series each
//! series occupies every `n`th column.
//!
//! # Draw order
//!
//! Series ascending, then column ascending. Within a column a series writes
//! its own segment first, then its junctions with every other series. Later
//! writes replace earlier ones, so output is deterministic.
//!
//! # Example
//!
//! ```
//! use cellchart::line::LinePlot;
//! use cellchart::samples::{SampleBuffer, ValueRange};
//! use cellchart_render::buffer::Buffer;
//!
//! let data = [0.0, 1.0, 2.0, 3.0, 4.0, 4.0];
//! let range = ValueRange::new(0.0, 4.0).unwrap();
//! let mut buf = Buffer::new(6, 5);
//! LinePlot::new(SampleBuffer::single(&data), range).render(&mut buf);
//! assert_eq!(buf.row_text(0), "    ┌─");
//! ```

use crate::Widget;
use crate::glyphs::PlotOptions;
use crate::junction::{ColumnMarks, Segment, crossing_mark, segment_marks};
use crate::level::LevelMapper;
use crate::samples::{SampleBuffer, ValueRange};
use cellchart_core::geometry::Rect;
use cellchart_render::buffer::Buffer;
use cellchart_render::surface::{Surface, Viewport};
use unicode_width::UnicodeWidthStr;

/// A multi-series line plot over an interleaved sample buffer.
#[derive(Debug, Clone, Copy)]
pub struct LinePlot<'a> {
    samples: SampleBuffer<'a>,
    range: ValueRange,
    legend: &'a [Option<&'a str>],
    options: PlotOptions,
}

impl<'a> LinePlot<'a> {
    pub fn new(samples: SampleBuffer<'a>, range: ValueRange) -> Self {
        Self {
            samples,
            range,
            legend: &[],
            options: PlotOptions::default(),
        }
    }

    /// Per-series labels. `None` entries take no row; entries past the
    /// series count are ignored.
    pub fn legend(mut self, legend: &'a [Option<&'a str>]) -> Self {
        self.legend = legend;
        self
    }

    pub fn options(mut self, options: PlotOptions) -> Self {
        self.options = options;
        self
    }

    /// Draw onto the whole of `surface`.
    ///
    /// Columns are visited only while they hold a sample and fit on the
    /// surface; anything past the data stays untouched. Levels are clipped
    /// one row beyond the plot before junctions are resolved.
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        let extent = surface.extent();
        if self.samples.is_empty() || extent.is_empty() {
            return;
        }

        let span = cellchart_core::debug_span!(
            "plot_render",
            widget = "LinePlot",
            cols = extent.width,
            rows = extent.height,
            samples = self.samples.len(),
            series = self.samples.series_count()
        );
        let _guard = span.enter();

        let rows = extent.height - 1;
        let cols = usize::from(extent.width);
        let mapper = LevelMapper::new(self.range, rows);
        let series_count = self.samples.series_count();
        let glyphs = &self.options.glyphs;
        let mut marks = ColumnMarks::new();

        if self.samples.len() < cols {
            cellchart_core::trace!(
                blank_columns = cols - self.samples.len(),
                "sample buffer narrower than surface"
            );
        }

        for k in 0..series_count {
            let color = self.options.series_color(k);
            let Some(first) = self.samples.get(k) else {
                continue;
            };
            let mut previous = mapper.clipped_level(first);

            for column in self.samples.series_columns(k, cols) {
                let (Some(value), Ok(x)) = (self.samples.get(column), u16::try_from(column)) else {
                    break;
                };
                let segment = Segment::new(previous, mapper.clipped_level(value));

                marks.clear();
                segment_marks(segment, glyphs, color, &mut marks);
                for j in (0..series_count).filter(|&j| j != k) {
                    let Some(other) = self.samples.series_value(j, column) else {
                        continue;
                    };
                    let other_color = self.options.series_color(j);
                    if let Some(mark) =
                        crossing_mark(segment, mapper.clipped_level(other), glyphs, color, other_color)
                    {
                        marks.push(mark);
                    }
                }

                for mark in &marks {
                    if let Ok(y) = u16::try_from(mark.row) {
                        surface.put(x, y, mark.glyph, mark.color);
                    }
                }

                previous = segment.current;
            }
        }

        self.render_legend(surface, rows);
    }

    fn render_legend<S: Surface + ?Sized>(&self, surface: &mut S, rows: u16) {
        let cols = surface.extent().width;
        let labels = self
            .legend
            .iter()
            .take(self.samples.series_count())
            .enumerate()
            .filter_map(|(series, label)| label.map(|label| (series, label)));

        for (y, (series, label)) in (0..rows).zip(labels) {
            let color = self.options.series_color(series);
            let x = match u16::try_from(label.width()) {
                Ok(width) if width < cols => cols - width,
                _ => 0,
            };
            surface.print(x, y, label, color, cols);
        }
    }
}

impl Widget for LinePlot<'_> {
    fn render(&self, area: Rect, buf: &mut Buffer) {
        LinePlot::render(self, &mut Viewport::new(buf, area));
    }
}

/// Draw `series_count` interleaved series from `samples` onto `surface`.
///
/// Free-function form of [`LinePlot`] with the default options. Does nothing
/// when `samples` is empty, `series_count` is zero, or the range is not a
/// finite `min < max`.
pub fn render_line_plot<S: Surface + ?Sized>(
    surface: &mut S,
    samples: &[f64],
    min: f64,
    max: f64,
    series_count: usize,
    legend: &[Option<&str>],
) {
    let (Ok(range), Ok(samples)) = (
        ValueRange::new(min, max),
        SampleBuffer::new(samples, series_count),
    ) else {
        cellchart_core::warn!(min, max, series_count, "line plot skipped: invalid inputs");
        return;
    };
    LinePlot::new(samples, range).legend(legend).render(surface);
}
