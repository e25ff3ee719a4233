//! Populate a [`TileGrid`] with point indices.
//!
//! Both paths first compute every point's tile id and size each tile from the
//! exact occupancy, so appends cannot overflow unless the grid is mutated
//! concurrently by someone else. The parallel path appends through
//! [`ConcurrentAppend`](crate::buffer::ConcurrentAppend) handles and sorts each
//! tile afterwards, which makes its result identical to the sequential one.
use super::grid::TileGrid;
use crate::points::PointSet;
use log::warn;
use serde::Deserialize;

/// Controls whether binning runs sequentially or with Rayon.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ParallelBinningOptions {
    enabled: bool,
    min_points_for_parallel: usize,
}

impl ParallelBinningOptions {
    /// Construct explicit options.
    pub fn new(enabled: bool, min_points_for_parallel: usize) -> Self {
        Self {
            enabled,
            min_points_for_parallel: min_points_for_parallel.max(1),
        }
    }

    /// Disable parallel binning regardless of point count.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            min_points_for_parallel: usize::MAX,
        }
    }

    /// Returns true when parallel binning should be used for `point_count`.
    pub fn should_parallelize(&self, point_count: usize) -> bool {
        self.enabled && point_count >= self.min_points_for_parallel
    }

    /// Update the minimum point count for parallel binning.
    pub fn with_min_points(mut self, min_points: usize) -> Self {
        self.min_points_for_parallel = min_points.max(1);
        self
    }
}

impl Default for ParallelBinningOptions {
    fn default() -> Self {
        Self {
            enabled: cfg!(feature = "parallel"),
            min_points_for_parallel: 4096,
        }
    }
}

/// Outcome of one binning pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BinningOutcome {
    pub inserted: usize,
    pub rejected: usize,
    pub parallel: bool,
}

/// Insert every point of `points` into `grid`.
pub fn fill_tiles<const N: usize>(
    grid: &mut TileGrid<N>,
    points: &PointSet<N>,
    parallel: ParallelBinningOptions,
) -> BinningOutcome {
    if points.is_empty() || grid.is_empty() {
        return BinningOutcome::default();
    }

    if parallel.should_parallelize(points.len()) {
        #[cfg(feature = "parallel")]
        {
            return fill_tiles_parallel(grid, points);
        }
    }

    fill_tiles_sequential(grid, points)
}

fn reserve_from_occupancy<const N: usize>(grid: &mut TileGrid<N>, tile_ids: &[usize]) {
    let mut counts = vec![0usize; grid.len()];
    for &id in tile_ids {
        counts[id] += 1;
    }
    for (tile, &count) in grid.tiles_mut().iter_mut().zip(&counts) {
        tile.reserve(count);
    }
}

fn fill_tiles_sequential<const N: usize>(
    grid: &mut TileGrid<N>,
    points: &PointSet<N>,
) -> BinningOutcome {
    let tile_ids: Vec<usize> = (0..points.len())
        .map(|i| grid.global_bin(&points.coords(i)))
        .collect();
    reserve_from_occupancy(grid, &tile_ids);

    let mut outcome = BinningOutcome::default();
    let tiles = grid.tiles_mut();
    for (i, &id) in tile_ids.iter().enumerate() {
        match tiles[id].push(i) {
            Some(_) => outcome.inserted += 1,
            None => outcome.rejected += 1,
        }
    }
    if outcome.rejected > 0 {
        warn!("fill_tiles: {} points rejected by full tiles", outcome.rejected);
    }
    outcome
}

#[cfg(feature = "parallel")]
fn fill_tiles_parallel<const N: usize>(
    grid: &mut TileGrid<N>,
    points: &PointSet<N>,
) -> BinningOutcome {
    use crate::buffer::{ConcurrentAppend, GrowableBuffer};
    use rayon::prelude::*;

    let tile_ids: Vec<usize> = {
        let grid = &*grid;
        (0..points.len())
            .into_par_iter()
            .map(|i| grid.global_bin(&points.coords(i)))
            .collect()
    };
    reserve_from_occupancy(grid, &tile_ids);

    let rejected = {
        let appenders: Vec<ConcurrentAppend<'_, usize>> = grid
            .tiles_mut()
            .iter_mut()
            .map(GrowableBuffer::concurrent)
            .collect();
        tile_ids
            .par_iter()
            .enumerate()
            .filter(|&(i, &id)| appenders[id].push(i).is_none())
            .count()
    };

    grid.tiles_mut()
        .par_iter_mut()
        .for_each(GrowableBuffer::sort_unstable);

    if rejected > 0 {
        warn!("fill_tiles: {} points rejected by full tiles", rejected);
    }
    BinningOutcome {
        inserted: tile_ids.len() - rejected,
        rejected,
        parallel: true,
    }
}
