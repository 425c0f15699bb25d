#![forbid(unsafe_code)]

//! Character-cell plots for time-series dashboards.
//!
//! Line plots draw one or more interleaved series as box-drawing polylines,
//! resolving the glyph wherever two series meet in a column. Bar plots fill
//! each column from the sample's level down. Both render onto any
//! [`Surface`](cellchart_render::surface::Surface), so the caller decides
//! where the cells end up.
//!
//! ```
//! use cellchart::{render_line_plot, draw_border};
//! use cellchart_render::buffer::Buffer;
//! use cellchart_render::surface::Viewport;
//! use cellchart_core::geometry::Rect;
//!
//! let history = [10.0, 40.0, 80.0, 60.0];
//! let mut buf = Buffer::new(6, 6);
//! draw_border(&mut buf, 0, 0, 6, 6).unwrap();
//! let mut inner = Viewport::new(&mut buf, Rect::new(1, 1, 4, 4));
//! render_line_plot(&mut inner, &history, 0.0, 100.0, 1, &[]);
//! assert_eq!(buf.row_text(2), "│  ┌┐│");
//! ```

pub mod bar;
pub mod border;
pub mod error;
pub mod glyphs;
pub mod junction;
pub mod level;
pub mod line;
pub mod percent;
pub mod samples;

pub use bar::{BarPlot, render_bar_plot};
pub use border::{draw_border, draw_border_with};
pub use error::PlotError;
pub use glyphs::{DEFAULT_PALETTE_LEN, PlotGlyphs, PlotOptions};
pub use line::{LinePlot, render_line_plot};
pub use percent::{PercentChart, PercentLayout};
pub use samples::{SampleBuffer, ValueRange, interleave};

use cellchart_core::geometry::Rect;
use cellchart_render::buffer::Buffer;

/// A plot that renders itself into a region of a [`Buffer`].
pub trait Widget {
    /// Render into `buf`, confined to `area`.
    fn render(&self, area: Rect, buf: &mut Buffer);
}
