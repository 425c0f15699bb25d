#![forbid(unsafe_code)]

//! Sample buffers and value ranges.
//!
//! Plots read one flat slice holding every series interleaved: sample `i`
//! belongs to series `i % series_count` and is drawn at column `i`.
//! [`SampleBuffer`] hides that stride arithmetic.

use crate::error::PlotError;

/// The `(min, max)` pair every series in a plot is scaled against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueRange {
    min: f64,
    max: f64,
}

impl ValueRange {
    /// `0..=100`, for utilization percentages.
    pub const PERCENT: Self = Self {
        min: 0.0,
        max: 100.0,
    };

    /// Validate and build a range.
    ///
    /// # Errors
    ///
    /// [`PlotError::InvalidRange`] unless both bounds are finite and
    /// `max > min`.
    pub fn new(min: f64, max: f64) -> Result<Self, PlotError> {
        if min.is_finite() && max.is_finite() && max > min {
            Ok(Self { min, max })
        } else {
            Err(PlotError::InvalidRange { min, max })
        }
    }

    #[inline]
    pub const fn min(&self) -> f64 {
        self.min
    }

    #[inline]
    pub const fn max(&self) -> f64 {
        self.max
    }

    /// Value covered by one row when the range spans `rows` rows.
    #[inline]
    pub fn increment(&self, rows: u16) -> f64 {
        (self.max - self.min) / f64::from(rows)
    }
}

/// A borrowed, interleaved multi-series sample buffer.
#[derive(Debug, Clone, Copy)]
pub struct SampleBuffer<'a> {
    samples: &'a [f64],
    series: usize,
}

impl<'a> SampleBuffer<'a> {
    /// Wrap `samples` holding `series` interleaved series.
    ///
    /// # Errors
    ///
    /// [`PlotError::NoSeries`] if `series == 0`.
    pub fn new(samples: &'a [f64], series: usize) -> Result<Self, PlotError> {
        if series == 0 {
            return Err(PlotError::NoSeries);
        }
        Ok(Self { samples, series })
    }

    /// A buffer with a single series.
    pub const fn single(samples: &'a [f64]) -> Self {
        Self { samples, series: 1 }
    }

    /// Total sample count across all series.
    #[inline]
    pub const fn len(&self) -> usize {
        self.samples.len()
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Number of interleaved series.
    #[inline]
    pub const fn series_count(&self) -> usize {
        self.series
    }

    /// Sample at flat index `index` (also its column).
    #[inline]
    pub fn get(&self, index: usize) -> Option<f64> {
        self.samples.get(index).copied()
    }

    /// Value of `series` as seen at `column`.
    ///
    /// This is the latest sample of `series` at or before `column`. Columns
    /// before the series' first sample fall back to that first sample.
    /// Returns `None` when the resolved index is past the end of the buffer.
    pub fn series_value(&self, series: usize, column: usize) -> Option<f64> {
        let index = if series <= column {
            column - (column - series) % self.series
        } else {
            series
        };
        self.get(index)
    }

    /// Columns holding samples of `series`, below `limit`.
    pub fn series_columns(&self, series: usize, limit: usize) -> impl Iterator<Item = usize> {
        (series..limit.min(self.samples.len())).step_by(self.series)
    }
}

/// Pack per-series samples into the interleaved layout.
///
/// Position `p` of series `s` lands at index `p * series.len() + s`. The
/// result is truncated to the shortest series so every column group is full.
pub fn interleave(series: &[&[f64]]) -> Vec<f64> {
    let Some(shortest) = series.iter().map(|s| s.len()).min() else {
        return Vec::new();
    };
    let mut packed = Vec::with_capacity(shortest * series.len());
    for position in 0..shortest {
        packed.extend(series.iter().map(|s| s[position]));
    }
    packed
}
