//! Diagnostics data model for clustering runs.
//!
//! `ClusteringReport` is the entry point returned by
//! [`Clusterer::make_clusters_with_diagnostics`](crate::Clusterer), bundling the
//! assignment (`ClusterAssignment`) and a `PipelineTrace` with one summary per
//! stage the run executed. Everything serializes to camelCase JSON.

pub mod assignment;
pub mod density;
pub mod pipeline;
pub mod tiling;
pub mod timing;

pub use assignment::AssignmentStage;
pub use density::{DensityStage, NearestHigherStage};
pub use pipeline::{ClusteringReport, InputDescriptor, PipelineTrace};
pub use tiling::TilingStage;
pub use timing::{StageTiming, TimingBreakdown};
