#![forbid(unsafe_code)]

//! Render kernel: cells, buffers, the surface seam, and box drawing.

pub mod buffer;
pub mod cell;
pub mod drawing;
pub mod surface;
