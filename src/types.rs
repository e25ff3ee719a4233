use serde::Serialize;

/// Per-point cluster labels of one run.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterAssignment {
    /// Cluster id per point, `-1` for outliers.
    pub cluster_index: Vec<i32>,
    pub is_seed: Vec<bool>,
    pub n_clusters: usize,
    pub latency_ms: f64,
}

impl ClusterAssignment {
    pub fn len(&self) -> usize {
        self.cluster_index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cluster_index.is_empty()
    }
}

/// State of the point set after `set_points`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "status")]
pub enum PointsStatus {
    /// No points; a run yields an empty assignment.
    Empty,
    Ready { n: usize },
}
