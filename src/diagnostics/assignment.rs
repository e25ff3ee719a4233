use serde::Serialize;

/// Outcome of seed/outlier classification and id propagation.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentStage {
    pub elapsed_ms: f64,
    pub rhoc: f32,
    pub clusters: usize,
    pub seeds: usize,
    pub outliers: usize,
    pub followers: usize,
    #[serde(skip_serializing_if = "is_zero")]
    pub unassigned: usize,
    /// Member count per cluster id.
    pub cluster_sizes: Vec<usize>,
}

fn is_zero(v: &usize) -> bool {
    *v == 0
}
