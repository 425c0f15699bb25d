#![forbid(unsafe_code)]

//! Junction resolution for one column of one series.
//!
//! A series moves from `previous` to `current` level at a column. That move
//! is drawn as a flat run, or as a vertical run between two corners. Every
//! other series passing through the same column then either crosses that
//! run, meets one of its ends, or runs beside it; each case picks a glyph.
//!
//! The resolver only produces [`Mark`]s. Writing them (and clipping) is the
//! line renderer's job.

use crate::glyphs::PlotGlyphs;
use cellchart_render::cell::ColorSlot;
use smallvec::SmallVec;

/// One glyph to place in the current column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mark {
    /// Level (row); may lie outside the surface.
    pub row: i32,
    pub glyph: char,
    pub color: ColorSlot,
}

/// Marks for one column, in write order.
pub type ColumnMarks = SmallVec<[Mark; 8]>;

/// A series' move between two adjacent columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub previous: i32,
    pub current: i32,
}

impl Segment {
    #[inline]
    pub const fn new(previous: i32, current: i32) -> Self {
        Self { previous, current }
    }

    /// Larger level (lower on screen).
    #[inline]
    pub fn top(&self) -> i32 {
        self.previous.max(self.current)
    }

    /// Smaller level (higher on screen).
    #[inline]
    pub fn bottom(&self) -> i32 {
        self.previous.min(self.current)
    }

    #[inline]
    pub const fn is_flat(&self) -> bool {
        self.previous == self.current
    }
}

/// How another series meets a segment in the same column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Crossing {
    /// The other series sits exactly on this flat segment; nothing to add.
    Covered,
    /// Strictly inside the vertical run.
    Through,
    /// On the segment's `top` level.
    MeetsTop,
    /// On the segment's `bottom` level.
    MeetsBottom,
    /// Outside the segment; the other series draws its own line.
    Beside,
}

/// Classify another series' level against `segment`.
pub fn classify(segment: Segment, cross_level: i32) -> Crossing {
    let (top, bottom) = (segment.top(), segment.bottom());
    if cross_level == top && top == bottom {
        Crossing::Covered
    } else if cross_level > bottom && cross_level < top {
        Crossing::Through
    } else if cross_level == top {
        Crossing::MeetsTop
    } else if cross_level == bottom {
        Crossing::MeetsBottom
    } else {
        Crossing::Beside
    }
}

/// Push the marks for the segment itself.
///
/// Flat segments are one horizontal glyph. Otherwise vertical glyphs fill
/// the rows strictly between the ends, then corners cap both ends: falling
/// values (`current > previous`) turn `┐` into `└`, rising values turn `┘`
/// into `┌`.
pub fn segment_marks(segment: Segment, glyphs: &PlotGlyphs, color: ColorSlot, out: &mut ColumnMarks) {
    if segment.is_flat() {
        out.push(Mark {
            row: segment.current,
            glyph: glyphs.horizontal,
            color,
        });
        return;
    }

    let (top, bottom) = (segment.top(), segment.bottom());
    out.extend(((bottom + 1)..top).map(|row| Mark {
        row,
        glyph: glyphs.vertical,
        color,
    }));

    let (current_glyph, previous_glyph) = if segment.current > segment.previous {
        (glyphs.bottom_left, glyphs.top_right)
    } else {
        (glyphs.top_left, glyphs.bottom_right)
    };
    out.push(Mark {
        row: segment.current,
        glyph: current_glyph,
        color,
    });
    out.push(Mark {
        row: segment.previous,
        glyph: previous_glyph,
        color,
    });
}

/// Mark left where another series at `cross_level` meets `segment`.
///
/// Junction glyphs take the segment's color; a series running beside keeps
/// its own.
pub fn crossing_mark(
    segment: Segment,
    cross_level: i32,
    glyphs: &PlotGlyphs,
    color: ColorSlot,
    other_color: ColorSlot,
) -> Option<Mark> {
    let (glyph, color) = match classify(segment, cross_level) {
        Crossing::Covered => return None,
        Crossing::Through => (glyphs.cross, color),
        Crossing::MeetsTop => (glyphs.tee_up, color),
        Crossing::MeetsBottom => (glyphs.tee_down, color),
        Crossing::Beside => (glyphs.horizontal, other_color),
    };
    Some(Mark {
        row: cross_level,
        glyph,
        color,
    })
}
