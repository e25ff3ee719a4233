use super::assignment::AssignmentCounts;
use super::density::DensityPass;
use super::tiling::TilingOutput;
use crate::diagnostics::{
    AssignmentStage, DensityStage, InputDescriptor, NearestHigherStage, TilingStage,
};
use crate::domain::Domain;
use crate::points::PointSet;
use crate::validation::cluster_sizes;

pub(super) fn describe_input<const N: usize>(
    points: &PointSet<N>,
    domains: &[Domain; N],
) -> InputDescriptor {
    InputDescriptor {
        points: points.len(),
        dimensions: N,
        total_weight: points.weight.iter().sum(),
        domains: domains.to_vec(),
    }
}

pub(super) fn tiling_stage<const N: usize>(
    output: &TilingOutput<N>,
    points_per_tile: usize,
) -> TilingStage {
    let layout = output.grid.layout();
    let (max_occupancy, empty_tiles) = output.grid.occupancy();
    let tile_count = output.grid.len();
    let mean_occupancy = if tile_count == 0 {
        0.0
    } else {
        output.binning.inserted as f32 / tile_count as f32
    };
    TilingStage {
        elapsed_ms: output.elapsed_ms,
        points_per_tile,
        requested_tiles: layout.n_tiles,
        tiles_per_dim: layout.n_per_dim,
        tile_count,
        tile_size: layout.tile_size.to_vec(),
        extent: layout.min_max.iter().map(|&(lo, hi)| [lo, hi]).collect(),
        max_occupancy,
        mean_occupancy,
        empty_tiles,
        parallel: output.binning.parallel,
        rejected: output.binning.rejected,
    }
}

pub(super) fn density_stage<const N: usize>(
    points: &PointSet<N>,
    dc: f32,
    pass: DensityPass,
    elapsed_ms: f64,
) -> DensityStage {
    let (min_rho, max_rho, sum) = points.rho.iter().fold(
        (f32::INFINITY, f32::NEG_INFINITY, 0.0f32),
        |(lo, hi, sum), &r| (lo.min(r), hi.max(r), sum + r),
    );
    let n = points.len().max(1) as f32;
    DensityStage {
        elapsed_ms,
        dc,
        min_rho: if points.is_empty() { 0.0 } else { min_rho },
        max_rho: if points.is_empty() { 0.0 } else { max_rho },
        mean_rho: sum / n,
        candidates: pass.candidates,
        contributions: pass.contributions,
    }
}

pub(super) fn nearest_higher_stage<const N: usize>(
    points: &PointSet<N>,
    dm: f32,
    candidates: usize,
    elapsed_ms: f64,
) -> NearestHigherStage {
    let with_higher = points.nearest_higher.iter().filter(|h| h.is_some()).count();
    let (finite, sum) = points
        .delta
        .iter()
        .filter(|d| d.is_finite())
        .fold((0usize, 0.0f32), |(count, sum), &d| (count + 1, sum + d));
    NearestHigherStage {
        elapsed_ms,
        dm,
        with_higher,
        without_higher: points.len() - with_higher,
        mean_delta: (finite > 0).then(|| sum / finite as f32),
        candidates,
    }
}

pub(super) fn assignment_stage<const N: usize>(
    points: &PointSet<N>,
    rhoc: f32,
    counts: AssignmentCounts,
    elapsed_ms: f64,
) -> AssignmentStage {
    AssignmentStage {
        elapsed_ms,
        rhoc,
        clusters: counts.seeds,
        seeds: counts.seeds,
        outliers: counts.outliers,
        followers: counts.followers,
        unassigned: counts.unassigned,
        cluster_sizes: cluster_sizes(&points.cluster_index),
    }
}
