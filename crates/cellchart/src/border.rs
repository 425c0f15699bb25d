#![forbid(unsafe_code)]

//! Frame borders around plot regions.

use crate::error::PlotError;
use cellchart_core::geometry::Rect;
use cellchart_render::cell::ColorSlot;
use cellchart_render::drawing::{BorderChars, Draw};
use cellchart_render::surface::Surface;

/// Draw a square box-drawing border with its top-left corner at `(x, y)`.
///
/// # Errors
///
/// [`PlotError::BorderTooSmall`] if `width` or `height` is below 2; nothing
/// is drawn in that case.
pub fn draw_border<S: Surface + ?Sized>(
    surface: &mut S,
    x: u16,
    y: u16,
    width: u16,
    height: u16,
) -> Result<(), PlotError> {
    draw_border_with(
        surface,
        Rect::new(x, y, width, height),
        BorderChars::SQUARE,
        ColorSlot::DEFAULT,
    )
}

/// Draw a border around `rect` with the given characters and color.
///
/// # Errors
///
/// [`PlotError::BorderTooSmall`] if the rect is narrower or shorter than 2.
pub fn draw_border_with<S: Surface + ?Sized>(
    surface: &mut S,
    rect: Rect,
    chars: BorderChars,
    color: ColorSlot,
) -> Result<(), PlotError> {
    if rect.width < 2 || rect.height < 2 {
        return Err(PlotError::BorderTooSmall {
            width: rect.width,
            height: rect.height,
        });
    }
    surface.draw_border(rect, chars, color);
    Ok(())
}
