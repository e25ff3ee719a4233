//! Spatial tile index used to bound neighbour searches.
//!
//! - [`layout`]: grid geometry sized from the point count and observed extent.
//! - [`grid`]: the [`TileGrid`] itself (bin lookup, search boxes, storage).
//! - [`binning`]: sequential and Rayon-driven population of the grid.

pub mod binning;
pub mod grid;
pub mod layout;

pub use binning::{fill_tiles, BinningOutcome, ParallelBinningOptions};
pub use grid::TileGrid;
pub use layout::{tiles_per_dimension, TileLayout};
