use crate::clustering::workspace::SearchWorkspace;
use crate::domain::{point_distance, CoordinateDistance, Domain};
use crate::points::PointSet;
use crate::tiles::TileGrid;

/// For every point find the closest point of higher density within `dm`.
///
/// `j` outranks `i` when `rho[j] > rho[i]`, or when densities tie and
/// `j > i`. The tie rule makes the "higher" relation a strict total order, so
/// chains of nearest-higher links never cycle. Among candidates at equal
/// distance the first one visited wins. Points without a candidate keep
/// `delta = +inf` and no nearest higher.
///
/// Returns the number of candidate pairs evaluated.
pub(super) fn compute_nearest_higher<const N: usize, D: CoordinateDistance>(
    points: &mut PointSet<N>,
    grid: &TileGrid<N>,
    domains: &[Domain; N],
    dm: f32,
    metric: &D,
    workspace: &mut SearchWorkspace<N>,
) -> usize {
    let mut candidates = 0usize;
    for i in 0..points.len() {
        let coords_i = points.coords(i);
        let rho_i = points.rho[i];
        let mut delta_i = f32::INFINITY;
        let mut nearest_i = None;
        for &tile in workspace.search_box(grid, &coords_i, dm, domains) {
            for &j in grid.tile(tile) {
                let rho_j = points.rho[j];
                let higher = rho_j > rho_i || (rho_j == rho_i && j > i);
                if !higher {
                    continue;
                }
                candidates += 1;
                let dist = point_distance(metric, &coords_i, &points.coords(j), domains);
                if dist <= dm && dist < delta_i {
                    delta_i = dist;
                    nearest_i = Some(j);
                }
            }
        }
        points.delta[i] = delta_i;
        points.nearest_higher[i] = nearest_i;
    }
    candidates
}
