use crate::clustering::workspace::SearchWorkspace;
use crate::domain::{point_distance, CoordinateDistance, Domain};
use crate::kernel::DensityKernel;
use crate::points::PointSet;
use crate::tiles::TileGrid;

/// Work counters of one density pass.
#[derive(Clone, Copy, Debug, Default)]
pub(super) struct DensityPass {
    /// Candidate pairs whose distance was evaluated.
    pub candidates: usize,
    /// Pairs within `dc` that contributed.
    pub contributions: usize,
}

/// `rho[i] = Σ kernel(d, i, j) * weight[j]` over every `j` with `d(i, j) <= dc`.
///
/// The sum includes `i` itself at distance zero.
pub(super) fn compute_local_density<const N: usize, K, D>(
    points: &mut PointSet<N>,
    grid: &TileGrid<N>,
    domains: &[Domain; N],
    dc: f32,
    kernel: &K,
    metric: &D,
    workspace: &mut SearchWorkspace<N>,
) -> DensityPass
where
    K: DensityKernel + ?Sized,
    D: CoordinateDistance,
{
    let mut pass = DensityPass::default();
    for i in 0..points.len() {
        let coords_i = points.coords(i);
        let mut rho_i = 0.0f32;
        for &tile in workspace.search_box(grid, &coords_i, dc, domains) {
            for &j in grid.tile(tile) {
                pass.candidates += 1;
                let dist = point_distance(metric, &coords_i, &points.coords(j), domains);
                if dist <= dc {
                    pass.contributions += 1;
                    rho_i += kernel.weight(dist, i, j) * points.weight[j];
                }
            }
        }
        points.rho[i] = rho_i;
    }
    pass
}
