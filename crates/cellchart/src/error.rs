#![forbid(unsafe_code)]

//! Precondition errors for chart construction and frame drawing.
//!
//! Renderers themselves never fail; these errors surface when a caller builds
//! a [`ValueRange`](crate::samples::ValueRange) or
//! [`SampleBuffer`](crate::samples::SampleBuffer), or asks for a border that
//! cannot be drawn.

use std::fmt;

/// Invalid chart inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlotError {
    /// `min`/`max` are not finite or `max <= min`.
    InvalidRange { min: f64, max: f64 },
    /// A sample buffer must hold at least one series.
    NoSeries,
    /// Borders need room for their corners.
    BorderTooSmall { width: u16, height: u16 },
}

impl fmt::Display for PlotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRange { min, max } => {
                write!(f, "invalid value range [{min}, {max}]: need finite min < max")
            }
            Self::NoSeries => write!(f, "sample buffer must contain at least one series"),
            Self::BorderTooSmall { width, height } => {
                write!(f, "border {width}x{height} is too small: need at least 2x2")
            }
        }
    }
}

impl std::error::Error for PlotError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            PlotError::InvalidRange { min: 5.0, max: 1.0 }.to_string(),
            "invalid value range [5, 1]: need finite min < max"
        );
        assert_eq!(
            PlotError::BorderTooSmall { width: 1, height: 4 }.to_string(),
            "border 1x4 is too small: need at least 2x2"
        );
    }

    #[test]
    fn is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(PlotError::NoSeries);
        assert!(err.source().is_none());
    }
}
