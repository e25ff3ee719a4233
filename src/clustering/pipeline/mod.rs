//! Clustering pipeline orchestrating one CLUE run end to end.
//!
//! The [`Clusterer`] owns the point set and the search scratch buffers. Feed
//! it coordinates and weights, pick a density kernel, and get back one cluster
//! id per point, optionally with a stage-by-stage trace.
//!
//! Typical usage:
//! ```
//! use clue_clustering::{ClusteringParams, Clusterer, FlatKernel};
//!
//! let params = ClusteringParams::new(0.5, 2.0, 2.0, 2);
//! let mut clusterer = Clusterer::<2>::new(params);
//! clusterer
//!     .set_points([vec![0.0, 0.1, 0.2, 5.0], vec![0.0, 0.1, 0.0, 5.0]], vec![1.0; 4])
//!     .unwrap();
//! let result = clusterer.make_clusters(&FlatKernel::new(0.5)).unwrap();
//! assert_eq!(result.n_clusters, 1);
//! assert_eq!(result.cluster_index[3], -1);
//! ```

mod assignment;
mod density;
mod nearest_higher;
mod reporting;
mod tiling;

// Stages
// - Tiling: size a cubic grid from n / points_per_tile over the observed extent
//   and bin every point (`tiling::build_tiles`).
// - Density: rho[i] from kernel-weighted neighbours within dc
//   (`density::compute_local_density`).
// - Nearest higher: closest point of higher density within dm
//   (`nearest_higher::compute_nearest_higher`).
// - Assignment: classify seeds/outliers/followers and propagate ids
//   (`assignment::assign_clusters`).
// - Reporting: stage summaries for the diagnostics trace.

use super::error::ClusteringError;
use super::params::ClusteringParams;
use super::workspace::SearchWorkspace;
use crate::diagnostics::{ClusteringReport, PipelineTrace, TimingBreakdown};
use crate::domain::{point_distance, CoordinateDistance, Domain, WrappedDistance};
use crate::kernel::DensityKernel;
use crate::points::PointSet;
use crate::types::{ClusterAssignment, PointsStatus};
use log::debug;
use std::time::Instant;

/// CLUE clustering of `N`-dimensional weighted points.
///
/// `D` is the per-dimension distance; the default wraps around every bounded
/// domain.
pub struct Clusterer<const N: usize, D = WrappedDistance> {
    params: ClusteringParams,
    metric: D,
    points: PointSet<N>,
    workspace: SearchWorkspace<N>,
}

impl<const N: usize> Clusterer<N> {
    /// Create a clusterer with the supplied parameters.
    ///
    /// Parameters are validated when a run starts.
    pub fn new(params: ClusteringParams) -> Self {
        Self::with_metric(params, WrappedDistance)
    }
}

impl<const N: usize, D: CoordinateDistance> Clusterer<N, D> {
    /// Create a clusterer using a custom per-dimension distance.
    pub fn with_metric(params: ClusteringParams, metric: D) -> Self {
        Self {
            params,
            metric,
            points: PointSet::new(),
            workspace: SearchWorkspace::new(),
        }
    }

    /// Replace the point set.
    ///
    /// Every coordinate array must have as many entries as `weights`, all
    /// coordinates must be finite and all weights finite and non-negative. On
    /// error the previous point set is left untouched.
    pub fn set_points(
        &mut self,
        coordinates: [Vec<f32>; N],
        weights: Vec<f32>,
    ) -> Result<PointsStatus, ClusteringError> {
        let n = weights.len();
        for (dim, values) in coordinates.iter().enumerate() {
            if values.len() != n {
                return Err(ClusteringError::LengthMismatch {
                    dim,
                    expected: n,
                    found: values.len(),
                });
            }
            if let Some(point) = values.iter().position(|v| !v.is_finite()) {
                return Err(ClusteringError::NonFiniteCoordinate { point, dim });
            }
        }
        if let Some(point) = weights.iter().position(|w| !w.is_finite() || *w < 0.0) {
            return Err(ClusteringError::InvalidWeight {
                point,
                value: weights[point],
            });
        }

        self.points.set(coordinates, weights);
        debug!("set_points: n={} dims={}", n, N);
        Ok(if n == 0 {
            PointsStatus::Empty
        } else {
            PointsStatus::Ready { n }
        })
    }

    /// Drop every point and result.
    pub fn clear_points(&mut self) {
        self.points.clear();
        self.workspace.reset();
    }

    /// Run the pipeline and return one cluster id per point.
    pub fn make_clusters<K>(&mut self, kernel: &K) -> Result<ClusterAssignment, ClusteringError>
    where
        K: DensityKernel + ?Sized,
    {
        self.make_clusters_with_diagnostics(kernel)
            .map(|report| report.result)
    }

    /// Run the pipeline and capture per-stage diagnostics.
    ///
    /// Outputs of the previous run are discarded first, so repeated calls on
    /// the same points produce identical results. Coordinates must lie inside
    /// their bounded domains; use [`Domain::wrap`] to bring them in.
    pub fn make_clusters_with_diagnostics<K>(
        &mut self,
        kernel: &K,
    ) -> Result<ClusteringReport, ClusteringError>
    where
        K: DensityKernel + ?Sized,
    {
        let total_start = Instant::now();
        self.params.validate()?;
        let domains: [Domain; N] = self.params.resolve_domains()?;
        check_within_domains(&self.points, &domains)?;
        let dc = self.params.dc;
        let dm = self.params.dm();
        let rhoc = self.params.rhoc;

        self.points.reset_results();
        let mut trace = PipelineTrace {
            input: reporting::describe_input(&self.points, &domains),
            timings: TimingBreakdown::default(),
            tiling: None,
            density: None,
            nearest_higher: None,
            assignment: None,
        };

        if self.points.is_empty() {
            debug!("make_clusters: empty point set");
            trace.timings.total_ms = total_start.elapsed().as_secs_f64() * 1000.0;
            return Ok(ClusteringReport {
                result: ClusterAssignment {
                    latency_ms: trace.timings.total_ms,
                    ..ClusterAssignment::default()
                },
                trace,
            });
        }

        let tiles = tiling::build_tiles(&self.points, &self.params)?;
        trace.timings.push("tiling", tiles.elapsed_ms);
        trace.tiling = Some(reporting::tiling_stage(&tiles, self.params.points_per_tile));

        let density_start = Instant::now();
        let pass = density::compute_local_density(
            &mut self.points,
            &tiles.grid,
            &domains,
            dc,
            kernel,
            &self.metric,
            &mut self.workspace,
        );
        let density_ms = density_start.elapsed().as_secs_f64() * 1000.0;
        debug!(
            "density: {} candidates, {} within dc in {:.3} ms",
            pass.candidates, pass.contributions, density_ms
        );
        trace.timings.push("density", density_ms);
        trace.density = Some(reporting::density_stage(&self.points, dc, pass, density_ms));

        let nh_start = Instant::now();
        let candidates = nearest_higher::compute_nearest_higher(
            &mut self.points,
            &tiles.grid,
            &domains,
            dm,
            &self.metric,
            &mut self.workspace,
        );
        let nh_ms = nh_start.elapsed().as_secs_f64() * 1000.0;
        let nh_stage = reporting::nearest_higher_stage(&self.points, dm, candidates, nh_ms);
        debug!(
            "nearest_higher: {} with higher, {} without in {:.3} ms",
            nh_stage.with_higher, nh_stage.without_higher, nh_ms
        );
        trace.timings.push("nearest_higher", nh_ms);
        trace.nearest_higher = Some(nh_stage);

        let assign_start = Instant::now();
        let counts = assignment::assign_clusters(&mut self.points, dc, rhoc, dm);
        let assign_ms = assign_start.elapsed().as_secs_f64() * 1000.0;
        debug!(
            "assignment: seeds={} outliers={} followers={} in {:.3} ms",
            counts.seeds, counts.outliers, counts.followers, assign_ms
        );
        trace.timings.push("assignment", assign_ms);
        trace.assignment = Some(reporting::assignment_stage(
            &self.points,
            rhoc,
            counts,
            assign_ms,
        ));

        let total_ms = total_start.elapsed().as_secs_f64() * 1000.0;
        trace.timings.total_ms = total_ms;
        let result = ClusterAssignment {
            cluster_index: self.points.cluster_index.clone(),
            is_seed: self.points.is_seed.clone(),
            n_clusters: counts.seeds,
            latency_ms: total_ms,
        };
        debug!(
            "make_clusters: n={} clusters={} in {:.3} ms",
            self.points.len(),
            result.n_clusters,
            total_ms
        );
        Ok(ClusteringReport { result, trace })
    }

    /// Distance between points `i` and `j` under the configured domains.
    ///
    /// Returns `None` when either index is out of range or the domains do not
    /// match the dimensionality.
    pub fn distance(&self, i: usize, j: usize) -> Option<f32> {
        if i >= self.points.len() || j >= self.points.len() {
            return None;
        }
        let domains: [Domain; N] = self.params.resolve_domains().ok()?;
        Some(point_distance(
            &self.metric,
            &self.points.coords(i),
            &self.points.coords(j),
            &domains,
        ))
    }

    /// Points and the outputs of the latest run.
    pub fn points(&self) -> &PointSet<N> {
        &self.points
    }

    pub fn params(&self) -> &ClusteringParams {
        &self.params
    }

    pub fn metric(&self) -> &D {
        &self.metric
    }

    /// Replace every parameter at once.
    pub fn set_params(&mut self, params: ClusteringParams) {
        self.params = params;
    }

    /// Update the density cutoff distance.
    pub fn set_dc(&mut self, dc: f32) {
        self.params.dc = dc;
    }

    /// Update the minimum seed density.
    pub fn set_rhoc(&mut self, rhoc: f32) {
        self.params.rhoc = rhoc;
    }

    /// Update the outlier distance factor (`dm = factor * dc`).
    pub fn set_outlier_delta_factor(&mut self, factor: f32) {
        self.params.outlier_delta_factor = factor;
    }

    /// Update the target tile occupancy.
    pub fn set_points_per_tile(&mut self, points_per_tile: usize) {
        self.params.points_per_tile = points_per_tile;
    }

    /// Update the per-dimension domains.
    pub fn set_domains(&mut self, domains: [Domain; N]) {
        self.params.domains = domains.to_vec();
    }
}

/// Every coordinate on a bounded dimension must lie in `[min, max]`; the
/// opposite-edge search bands only cover points inside the domain.
fn check_within_domains<const N: usize>(
    points: &PointSet<N>,
    domains: &[Domain; N],
) -> Result<(), ClusteringError> {
    for (dim, (values, domain)) in points.coordinates.iter().zip(domains).enumerate() {
        if domain.is_unbounded() {
            continue;
        }
        if let Some(point) = values.iter().position(|&v| !domain.contains(v)) {
            return Err(ClusteringError::CoordinateOutsideDomain {
                point,
                dim,
                value: values[point],
            });
        }
    }
    Ok(())
}
