use crate::clustering::error::ClusteringError;
use crate::clustering::params::ClusteringParams;
use crate::points::PointSet;
use crate::tiles::{fill_tiles, BinningOutcome, TileGrid, TileLayout};
use log::debug;
use std::time::Instant;

pub(super) struct TilingOutput<const N: usize> {
    pub grid: TileGrid<N>,
    pub binning: BinningOutcome,
    pub elapsed_ms: f64,
}

/// Size the grid from `n / points_per_tile` and bin every point.
pub(super) fn build_tiles<const N: usize>(
    points: &PointSet<N>,
    params: &ClusteringParams,
) -> Result<TilingOutput<N>, ClusteringError> {
    let start = Instant::now();
    let n_tiles = points.len() / params.points_per_tile;
    if n_tiles == 0 {
        return Err(ClusteringError::NotEnoughPointsForTiles {
            points: points.len(),
            points_per_tile: params.points_per_tile,
        });
    }

    let layout = TileLayout::from_coordinates(&points.coordinates, n_tiles);
    let mut grid = TileGrid::new(layout);
    let binning = fill_tiles(&mut grid, points, params.binning);
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
    debug!(
        "tiling: {} tiles ({} per dim), inserted={} rejected={} parallel={} in {:.3} ms",
        grid.len(),
        grid.layout().n_per_dim,
        binning.inserted,
        binning.rejected,
        binning.parallel,
        elapsed_ms
    );
    Ok(TilingOutput {
        grid,
        binning,
        elapsed_ms,
    })
}
