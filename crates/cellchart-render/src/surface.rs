#![forbid(unsafe_code)]

//! The drawing-surface seam.
//!
//! Renderers never own the surface they draw on. They borrow anything that
//! implements [`Surface`] for the duration of one call, query its extent
//! once, and address cells explicitly. Color is part of every write; there
//! is no "current attribute" state on the surface.
//!
//! [`Viewport`] narrows a surface to a sub-rectangle, the same way a terminal
//! sub-window narrows its parent.

use crate::cell::{Cell, CellContent, ColorSlot};
use cellchart_core::geometry::{Rect, Size};

/// A rectangular grid of cells that renderers can write into.
///
/// Row 0 is at the top. Writes outside [`Surface::extent`] must be ignored,
/// which lets renderers clip by simply writing.
pub trait Surface {
    /// Current drawable extent in cells.
    fn extent(&self) -> Size;

    /// Write one cell. Out-of-extent coordinates are ignored.
    fn set(&mut self, x: u16, y: u16, cell: Cell);

    /// Write a glyph with an explicit color slot.
    #[inline]
    fn put(&mut self, x: u16, y: u16, glyph: char, color: ColorSlot) {
        self.set(x, y, Cell::from_char(glyph).with_color(color));
    }

    /// Write `text` left to right starting at `(x, y)`, stopping before
    /// `max_x` (exclusive) or the surface edge.
    ///
    /// Zero-width characters are skipped. A wide character that would cross
    /// the boundary is not started. Returns the column after the last
    /// character written.
    fn print(&mut self, x: u16, y: u16, text: &str, color: ColorSlot, max_x: u16) -> u16 {
        let max_x = max_x.min(self.extent().width);
        let mut cx = x;
        for c in text.chars() {
            let content = CellContent::from_char(c);
            let width = content.width() as u16;
            if width == 0 {
                continue;
            }
            if cx >= max_x || cx.saturating_add(width) > max_x {
                break;
            }
            self.set(cx, y, Cell::new(content).with_color(color));
            for tail in 1..width {
                self.set(cx + tail, y, Cell::CONTINUATION);
            }
            cx = cx.saturating_add(width);
        }
        cx
    }
}

impl<S: Surface + ?Sized> Surface for &mut S {
    #[inline]
    fn extent(&self) -> Size {
        (**self).extent()
    }

    #[inline]
    fn set(&mut self, x: u16, y: u16, cell: Cell) {
        (**self).set(x, y, cell);
    }
}

/// A translated, clipped window onto another surface.
///
/// Coordinates passed to the viewport are relative to its top-left corner.
/// The window is intersected with the parent's extent at construction, so a
/// viewport never writes outside either rectangle.
#[derive(Debug)]
pub struct Viewport<'a, S: Surface + ?Sized> {
    parent: &'a mut S,
    area: Rect,
}

impl<'a, S: Surface + ?Sized> Viewport<'a, S> {
    /// Create a viewport covering `area` of `parent`.
    pub fn new(parent: &'a mut S, area: Rect) -> Self {
        let extent = parent.extent();
        let area = area.intersection(&Rect::from_size(extent.width, extent.height));
        Self { parent, area }
    }

    /// The parent-relative area this viewport covers (after clipping).
    #[inline]
    pub const fn area(&self) -> Rect {
        self.area
    }
}

impl<S: Surface + ?Sized> Surface for Viewport<'_, S> {
    #[inline]
    fn extent(&self) -> Size {
        self.area.size()
    }

    #[inline]
    fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if x < self.area.width && y < self.area.height {
            self.parent.set(self.area.x + x, self.area.y + y, cell);
        }
    }
}
