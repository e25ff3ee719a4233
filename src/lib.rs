#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod clustering;
pub mod diagnostics;
pub mod domain;
pub mod kernel;
pub mod points;
pub mod types;
pub mod validation;

// Building blocks exposed for tools and benchmarks.
pub mod buffer;
pub mod tiles;

// Demo support.
pub mod config;
pub mod io;
pub mod synthetic;

// --- High-level re-exports -------------------------------------------------

// Main entry points: clusterer + results.
pub use crate::clustering::{Clusterer, ClusteringError, ClusteringParams};
pub use crate::types::{ClusterAssignment, PointsStatus};

// Diagnostics returned by `make_clusters_with_diagnostics`.
pub use crate::diagnostics::{ClusteringReport, PipelineTrace};

// Collaborators.
pub use crate::domain::{CoordinateDistance, Domain, WrappedDistance};
pub use crate::kernel::{DensityKernel, ExponentialKernel, FlatKernel, GaussianKernel, KernelOptions};
pub use crate::points::{PointSet, NO_CLUSTER};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use clue_clustering::prelude::*;
///
/// let mut clusterer = Clusterer::<1>::new(ClusteringParams::new(0.5, 2.0, 2.0, 1));
/// clusterer
///     .set_points([vec![1.0, 1.0, 1.0, 8.0]], vec![1.0; 4])
///     .unwrap();
/// let result = clusterer.make_clusters(&FlatKernel::new(0.5)).unwrap();
/// assert_eq!(result.cluster_index, vec![0, 0, 0, -1]);
/// ```
pub mod prelude {
    pub use crate::{
        ClusterAssignment, Clusterer, ClusteringParams, DensityKernel, Domain, FlatKernel,
        KernelOptions,
    };
}

// --- Stage-level API (for tools & advanced users) --------------------------

pub mod stages {
    // Spatial index and binning.
    pub use crate::tiles::{
        fill_tiles, tiles_per_dimension, BinningOutcome, ParallelBinningOptions, TileGrid,
        TileLayout,
    };

    // Append-only storage behind the tiles.
    pub use crate::buffer::{ConcurrentAppend, GrowableBuffer};

    // Structured diagnostics types.
    pub use crate::diagnostics::{
        AssignmentStage, DensityStage, InputDescriptor, NearestHigherStage, StageTiming,
        TilingStage, TimingBreakdown,
    };
}
