//! PDF drawing surface using lopdf.
//!
//! This crate provides `LopdfSurface`, which implements the render-core
//! `DrawingSurface` by building an in-memory lopdf `Document` and writing it
//! out in one go when the pass is finalized.

mod helpers;
mod surface;

pub use helpers::to_win_ansi;
pub use surface::LopdfSurface;
