use serde::Serialize;

/// Summary of the local density pass.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DensityStage {
    pub elapsed_ms: f64,
    pub dc: f32,
    pub min_rho: f32,
    pub max_rho: f32,
    pub mean_rho: f32,
    /// Pairs whose distance was evaluated.
    pub candidates: usize,
    /// Pairs within `dc`, self pairs included.
    pub contributions: usize,
}

/// Summary of the nearest-higher search.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NearestHigherStage {
    pub elapsed_ms: f64,
    pub dm: f32,
    pub with_higher: usize,
    pub without_higher: usize,
    /// Mean of the finite deltas, `None` when every delta is infinite.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mean_delta: Option<f32>,
    pub candidates: usize,
}
