#![forbid(unsafe_code)]

//! Buffer grid storage.
//!
//! The `Buffer` is an in-memory 2D grid of [`Cell`]s. It is the reference
//! [`Surface`] implementation: hosts render charts into it and then copy or
//! present its contents, and tests read it back as text.
//!
//! # Layout
//!
//! Cells are stored in row-major order: `index = y * width + x`.
//!
//! # Invariants
//!
//! 1. `cells.len() == width * height`
//! 2. Width and height never change after creation

use crate::cell::Cell;
use crate::surface::Surface;
use cellchart_core::geometry::{Rect, Size};

/// A 2D grid of terminal cells.
///
/// # Example
///
/// ```
/// use cellchart_render::buffer::Buffer;
/// use cellchart_render::cell::Cell;
///
/// let mut buffer = Buffer::new(80, 24);
/// buffer.set(0, 0, Cell::from_char('H'));
/// buffer.set(1, 0, Cell::from_char('i'));
/// assert!(buffer.row_text(0).starts_with("Hi"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Buffer {
    /// Create a new buffer with the given dimensions.
    ///
    /// All cells start empty with the default color slot.
    ///
    /// # Panics
    ///
    /// Panics if width or height is 0.
    pub fn new(width: u16, height: u16) -> Self {
        assert!(width > 0, "buffer width must be > 0");
        assert!(height > 0, "buffer height must be > 0");

        let size = width as usize * height as usize;
        Self {
            width,
            height,
            cells: vec![Cell::default(); size],
        }
    }

    /// Buffer width in cells.
    #[inline]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Buffer height in cells.
    #[inline]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Bounding rect of the entire buffer.
    #[inline]
    pub const fn bounds(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    #[inline]
    fn index(&self, x: u16, y: u16) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    /// Get a reference to the cell at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    #[inline]
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    /// Set the cell at (x, y). Does nothing if out of bounds.
    #[inline]
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(idx) = self.index(x, y) {
            self.cells[idx] = cell;
        }
    }

    /// Clear all cells to the default.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    /// Raw access to the cell slice.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Get the cells for a single row as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_cells(&self, y: u16) -> &[Cell] {
        let start = y as usize * self.width as usize;
        &self.cells[start..start + self.width as usize]
    }

    /// Render one row as text.
    ///
    /// Empty cells become spaces and continuation cells are skipped, so a row
    /// of narrow glyphs yields exactly `width` chars.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    pub fn row_text(&self, y: u16) -> String {
        self.row_cells(y)
            .iter()
            .filter(|cell| !cell.is_continuation())
            .map(|cell| cell.content.as_char().unwrap_or(' '))
            .collect()
    }

    /// All rows joined with `\n`; handy for snapshot assertions.
    pub fn to_text(&self) -> String {
        (0..self.height)
            .map(|y| self.row_text(y))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Count cells whose glyph is `glyph`.
    pub fn count_glyph(&self, glyph: char) -> usize {
        self.cells
            .iter()
            .filter(|cell| cell.content.as_char() == Some(glyph))
            .count()
    }
}

impl Surface for Buffer {
    #[inline]
    fn extent(&self) -> Size {
        Size::new(self.width, self.height)
    }

    #[inline]
    fn set(&mut self, x: u16, y: u16, cell: Cell) {
        Buffer::set(self, x, y, cell);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::ColorSlot;

    #[test]
    fn new_buffer_is_empty() {
        let buf = Buffer::new(4, 3);
        assert_eq!(buf.cells().len(), 12);
        assert!(buf.cells().iter().all(|c| c.is_empty()));
        assert_eq!(buf.bounds(), Rect::new(0, 0, 4, 3));
    }

    #[test]
    #[should_panic(expected = "buffer width must be > 0")]
    fn zero_width_panics() {
        let _ = Buffer::new(0, 3);
    }

    #[test]
    fn set_out_of_bounds_is_ignored() {
        let mut buf = Buffer::new(2, 2);
        buf.set(2, 0, Cell::from_char('x'));
        buf.set(0, 2, Cell::from_char('x'));
        assert_eq!(buf.count_glyph('x'), 0);
    }

    #[test]
    fn set_keeps_color() {
        let mut buf = Buffer::new(3, 1);
        buf.set(1, 0, Cell::from_char('m').with_color(ColorSlot::new(4)));
        assert_eq!(buf.row_text(0), " m ");
        assert_eq!(buf.get(1, 0).map(|c| c.color.index()), Some(4));
    }

    #[test]
    fn clear_resets_everything() {
        let mut buf = Buffer::new(3, 3);
        for i in 0..3 {
            buf.set(i, i, Cell::from_char('#'));
        }
        buf.clear();
        assert_eq!(buf.count_glyph('#'), 0);
    }

    #[test]
    fn row_text_skips_continuations() {
        let mut buf = Buffer::new(4, 1);
        buf.print(0, 0, "日x", ColorSlot::DEFAULT, 4);
        assert_eq!(buf.row_text(0), "日x ");
    }
}
