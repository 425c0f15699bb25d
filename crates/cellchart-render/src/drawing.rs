#![forbid(unsafe_code)]

//! Drawing primitives for surfaces.
//!
//! Helpers on top of [`Surface::set`] so chart renderers can draw runs of
//! glyphs and box borders without duplicating low-level cell loops. All
//! operations clip through the surface, so partially visible shapes are fine.

use crate::cell::{Cell, ColorSlot};
use crate::surface::Surface;
use cellchart_core::geometry::Rect;

/// Characters used to draw a border around a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderChars {
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub horizontal: char,
    pub vertical: char,
}

impl BorderChars {
    /// Simple box-drawing characters (U+250x).
    pub const SQUARE: Self = Self {
        top_left: '┌',
        top_right: '┐',
        bottom_left: '└',
        bottom_right: '┘',
        horizontal: '─',
        vertical: '│',
    };

    /// Rounded corners.
    pub const ROUNDED: Self = Self {
        top_left: '╭',
        top_right: '╮',
        bottom_left: '╰',
        bottom_right: '╯',
        horizontal: '─',
        vertical: '│',
    };

    /// Double-line border.
    pub const DOUBLE: Self = Self {
        top_left: '╔',
        top_right: '╗',
        bottom_left: '╚',
        bottom_right: '╝',
        horizontal: '═',
        vertical: '║',
    };

    /// Heavy (thick) border.
    pub const HEAVY: Self = Self {
        top_left: '┏',
        top_right: '┓',
        bottom_left: '┗',
        bottom_right: '┛',
        horizontal: '━',
        vertical: '┃',
    };

    /// ASCII-only border.
    pub const ASCII: Self = Self {
        top_left: '+',
        top_right: '+',
        bottom_left: '+',
        bottom_right: '+',
        horizontal: '-',
        vertical: '|',
    };
}

impl Default for BorderChars {
    fn default() -> Self {
        Self::SQUARE
    }
}

/// Extension trait for drawing on any [`Surface`].
pub trait Draw {
    /// Draw a horizontal run of `width` cells starting at `(x, y)`.
    fn draw_horizontal_line(&mut self, x: u16, y: u16, width: u16, cell: Cell);

    /// Draw a vertical run of `height` cells starting at `(x, y)`.
    fn draw_vertical_line(&mut self, x: u16, y: u16, height: u16, cell: Cell);

    /// Draw a border around a rectangle using the given characters.
    ///
    /// The border occupies the outermost cells of `rect`: edges first, then
    /// the four corners on top. Degenerate rects (width or height below 2)
    /// draw whatever edges exist.
    fn draw_border(&mut self, rect: Rect, chars: BorderChars, color: ColorSlot);
}

impl<S: Surface + ?Sized> Draw for S {
    fn draw_horizontal_line(&mut self, x: u16, y: u16, width: u16, cell: Cell) {
        for i in 0..width {
            self.set(x.saturating_add(i), y, cell);
        }
    }

    fn draw_vertical_line(&mut self, x: u16, y: u16, height: u16, cell: Cell) {
        for i in 0..height {
            self.set(x, y.saturating_add(i), cell);
        }
    }

    fn draw_border(&mut self, rect: Rect, chars: BorderChars, color: ColorSlot) {
        if rect.is_empty() {
            return;
        }

        let make_cell = |c: char| Cell::from_char(c).with_color(color);
        let h_cell = make_cell(chars.horizontal);
        let v_cell = make_cell(chars.vertical);

        // Edges that fall past u16::MAX are not addressable on any surface.
        let (left, top) = (rect.left(), rect.top());
        let right = left.checked_add(rect.width - 1).filter(|_| rect.width > 1);
        let bottom = top.checked_add(rect.height - 1).filter(|_| rect.height > 1);

        // Top and bottom edges, excluding corners
        if rect.width > 2 {
            self.draw_horizontal_line(left.saturating_add(1), top, rect.width - 2, h_cell);
            if let Some(bottom) = bottom {
                self.draw_horizontal_line(left.saturating_add(1), bottom, rect.width - 2, h_cell);
            }
        }

        // Left and right edges, excluding corners
        if rect.height > 2 {
            self.draw_vertical_line(left, top.saturating_add(1), rect.height - 2, v_cell);
            if let Some(right) = right {
                self.draw_vertical_line(right, top.saturating_add(1), rect.height - 2, v_cell);
            }
        }

        self.set(left, top, make_cell(chars.top_left));
        if let Some(right) = right {
            self.set(right, top, make_cell(chars.top_right));
        }
        if let Some(bottom) = bottom {
            self.set(left, bottom, make_cell(chars.bottom_left));
        }
        if let (Some(right), Some(bottom)) = (right, bottom) {
            self.set(right, bottom, make_cell(chars.bottom_right));
        }
    }
}
