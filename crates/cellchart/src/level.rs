#![forbid(unsafe_code)]

//! Value-to-row mapping.
//!
//! A *level* is the row a value lands on: 0 is the top of the plot (the
//! range's `max`), `rows` is the bottom (its `min`). Values outside the range
//! produce levels outside `0..=rows`; renderers clip those.

use crate::samples::ValueRange;

/// Relative tolerance for snapping a quotient to the integer below it.
const SNAP_EPSILON: f64 = 1e-9;

/// Floor that treats quotients a rounding error below an integer as that
/// integer, so `100.0 / (100.0 / 9.0)` floors to 9 and not 8.
#[inline]
fn stable_floor(quotient: f64) -> f64 {
    let nearest = quotient.round();
    if (quotient - nearest).abs() <= SNAP_EPSILON * nearest.abs().max(1.0) {
        nearest
    } else {
        quotient.floor()
    }
}

/// Raw level of `value`: `rows - floor(value / increment)`.
///
/// Saturates at the `i32` bounds for extreme inputs. Callers supply
/// `increment > 0`.
#[inline]
pub fn level(rows: f64, value: f64, increment: f64) -> i32 {
    (rows - stable_floor(value / increment)) as i32
}

/// Level computation for one render call.
///
/// Holds the increment and the baseline so both are derived once per call
/// and reused for every sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelMapper {
    rows: f64,
    min: f64,
    increment: f64,
    low_level: i32,
}

impl LevelMapper {
    /// Mapper placing `range` on rows `0..=rows`.
    pub fn new(range: ValueRange, rows: u16) -> Self {
        let increment = range.increment(rows);
        Self {
            rows: f64::from(rows),
            min: range.min(),
            increment,
            low_level: level(0.0, range.min(), increment),
        }
    }

    /// Bottom-most drawable level (where `min` lands).
    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows as i32
    }

    /// Value span of one row.
    #[inline]
    pub const fn increment(&self) -> f64 {
        self.increment
    }

    /// Level of `value`, normalized so `min` sits on row `rows`.
    ///
    /// NaN samples are drawn at the baseline.
    #[inline]
    pub fn level(&self, value: f64) -> i32 {
        let value = if value.is_nan() { self.min } else { value };
        level(self.rows, value, self.increment).saturating_sub(self.low_level)
    }

    /// [`level`](Self::level) pulled into `-1..=rows + 1`.
    ///
    /// Off-plot levels collapse to the nearest row outside the plot, so
    /// vertical runs stay bounded by the surface while every visible glyph
    /// and junction comes out the same.
    #[inline]
    pub fn clipped_level(&self, value: f64) -> i32 {
        self.level(value).clamp(-1, self.rows() + 1)
    }
}
