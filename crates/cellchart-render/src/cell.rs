#![forbid(unsafe_code)]

//! Cell types and invariants.
//!
//! A `Cell` is one character position on the drawing surface. It holds a
//! glyph (or nothing) and the color slot the glyph was written with. Color
//! slots are indices into color pairs the host registers with its terminal;
//! this crate never interprets them.
//!
//! # Layout (8 bytes)
//!
//! ```text
//! Cell {
//!     content: CellContent,  // 4 bytes - char, EMPTY, or CONTINUATION
//!     color: ColorSlot,      // 1 byte  - color pair index
//! }
//! ```

use unicode_width::UnicodeWidthChar;

/// Cell content: a direct Unicode char or one of two markers.
///
/// # Special Values
///
/// - `EMPTY` (0x0): nothing written, width 0
/// - `CONTINUATION`: placeholder for the trailing half of a wide character
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct CellContent(u32);

impl CellContent {
    /// Empty cell content (no character).
    pub const EMPTY: Self = Self(0);

    /// Continuation marker for wide characters.
    ///
    /// Value is outside the Unicode scalar range so it can never collide with
    /// a real char.
    pub const CONTINUATION: Self = Self(0x7FFF_FFFF);

    /// Create content from a single Unicode character.
    #[inline]
    pub const fn from_char(c: char) -> Self {
        Self(c as u32)
    }

    /// Check if this is a continuation cell (part of a wide character).
    #[inline]
    pub const fn is_continuation(self) -> bool {
        self.0 == Self::CONTINUATION.0
    }

    /// Check if this cell is empty.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == Self::EMPTY.0
    }

    /// Extract the character.
    ///
    /// Returns `None` for empty and continuation cells.
    #[inline]
    pub fn as_char(self) -> Option<char> {
        if self.is_empty() || self.is_continuation() {
            None
        } else {
            char::from_u32(self.0)
        }
    }

    /// Display width in terminal columns.
    ///
    /// Empty and continuation cells are 0; control characters count as 0.
    #[inline]
    pub fn width(self) -> usize {
        self.as_char()
            .map_or(0, |c| UnicodeWidthChar::width(c).unwrap_or(0))
    }
}

impl Default for CellContent {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl core::fmt::Debug for CellContent {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if self.is_empty() {
            write!(f, "CellContent::EMPTY")
        } else if self.is_continuation() {
            write!(f, "CellContent::CONTINUATION")
        } else {
            match self.as_char() {
                Some(c) => write!(f, "CellContent({c:?})"),
                None => write!(f, "CellContent(invalid {:#x})", self.0),
            }
        }
    }
}

/// Index of a host-registered color pair.
///
/// Slot 0 is the surface default. Chart series use slots `1..=palette_len`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct ColorSlot(u8);

impl ColorSlot {
    /// The surface's default color pair.
    pub const DEFAULT: Self = Self(0);

    /// Wrap a raw slot index.
    #[inline]
    pub const fn new(slot: u8) -> Self {
        Self(slot)
    }

    /// Slot for series `index` in a rotating palette of `palette_len` colors.
    ///
    /// Series 0 gets slot 1; the palette wraps after `palette_len` series.
    /// A zero-length palette yields [`ColorSlot::DEFAULT`].
    #[inline]
    pub const fn for_series(index: usize, palette_len: u8) -> Self {
        if palette_len == 0 {
            return Self::DEFAULT;
        }
        Self(1 + (index % palette_len as usize) as u8)
    }

    /// Raw slot index.
    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }
}

/// A single surface cell.
///
/// # Default
///
/// The default cell is empty and uses [`ColorSlot::DEFAULT`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cell {
    /// Character content.
    pub content: CellContent,
    /// Color pair the content was written with.
    pub color: ColorSlot,
}

// Compile-time size check
const _: () = assert!(core::mem::size_of::<Cell>() == 8);

impl Cell {
    /// A continuation cell (placeholder for wide characters).
    pub const CONTINUATION: Self = Self {
        content: CellContent::CONTINUATION,
        color: ColorSlot::DEFAULT,
    };

    /// Create a new cell with the given content and the default color.
    #[inline]
    pub const fn new(content: CellContent) -> Self {
        Self {
            content,
            color: ColorSlot::DEFAULT,
        }
    }

    /// Create a cell from a single character.
    #[inline]
    pub const fn from_char(c: char) -> Self {
        Self::new(CellContent::from_char(c))
    }

    /// Check if this is a continuation cell.
    #[inline]
    pub const fn is_continuation(&self) -> bool {
        self.content.is_continuation()
    }

    /// Check if this cell is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Set the color slot.
    #[inline]
    pub const fn with_color(mut self, color: ColorSlot) -> Self {
        self.color = color;
        self
    }
}

impl core::fmt::Debug for Cell {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Cell")
            .field("content", &self.content)
            .field("color", &self.color.index())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_round_trips_char() {
        let c = CellContent::from_char('┼');
        assert_eq!(c.as_char(), Some('┼'));
        assert_eq!(c.width(), 1);
    }

    #[test]
    fn empty_and_continuation_have_no_char() {
        assert_eq!(CellContent::EMPTY.as_char(), None);
        assert_eq!(CellContent::CONTINUATION.as_char(), None);
        assert_eq!(CellContent::EMPTY.width(), 0);
        assert_eq!(CellContent::CONTINUATION.width(), 0);
    }

    #[test]
    fn wide_char_width() {
        assert_eq!(CellContent::from_char('日').width(), 2);
    }

    #[test]
    fn series_slots_rotate_through_palette() {
        assert_eq!(ColorSlot::for_series(0, 5), ColorSlot::new(1));
        assert_eq!(ColorSlot::for_series(4, 5), ColorSlot::new(5));
        assert_eq!(ColorSlot::for_series(5, 5), ColorSlot::new(1));
        assert_eq!(ColorSlot::for_series(7, 5), ColorSlot::new(3));
    }

    #[test]
    fn zero_palette_uses_default_slot() {
        assert_eq!(ColorSlot::for_series(3, 0), ColorSlot::DEFAULT);
    }

    #[test]
    fn cell_builders() {
        let cell = Cell::from_char('x').with_color(ColorSlot::new(2));
        assert_eq!(cell.content.as_char(), Some('x'));
        assert_eq!(cell.color.index(), 2);
        assert!(Cell::default().is_empty());
        assert!(Cell::CONTINUATION.is_continuation());
    }
}
