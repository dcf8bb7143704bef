//! Procedural generator for Sudoku Master's store listing assets.
//!
//! Everything is drawn from scratch on an in-memory pixel buffer: the
//! launcher icon (a gradient disc carrying a 9x9 sudoku panel) is rendered
//! once per Android density, and the promotional set (feature graphic plus
//! screenshot templates) is rendered at its fixed store dimensions. No
//! source artwork is read; the inputs are the literal color/layout tables
//! in [`icon`] and [`promo`].

#[cfg(feature = "render")]
pub mod canvas;
#[cfg(feature = "render")]
pub mod gradient;
#[cfg(feature = "render")]
pub mod icon;
#[cfg(feature = "render")]
pub mod promo;

/// Printed by the binaries when the drawing stack was compiled out.
pub const MISSING_RENDER_HINT: &str = "the image rendering stack is not compiled into this binary\n\
     hint: rebuild with the default `render` feature enabled, e.g. `cargo build --features render`";
