use crate::diagnostics::{
    AssignmentStage, DensityStage, NearestHigherStage, TilingStage, TimingBreakdown,
};
use crate::domain::Domain;
use crate::types::ClusterAssignment;
use serde::Serialize;

/// Result produced by [`Clusterer::make_clusters_with_diagnostics`](crate::Clusterer).
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusteringReport {
    pub result: ClusterAssignment,
    pub trace: PipelineTrace,
}

/// Stage-by-stage trace of one clustering run.
///
/// Stages that did not run (empty input) are `None`.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineTrace {
    pub input: InputDescriptor,
    pub timings: TimingBreakdown,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tiling: Option<TilingStage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub density: Option<DensityStage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nearest_higher: Option<NearestHigherStage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignment: Option<AssignmentStage>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub points: usize,
    pub dimensions: usize,
    pub total_weight: f32,
    pub domains: Vec<Domain>,
}
