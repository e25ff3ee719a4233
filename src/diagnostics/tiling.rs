use serde::Serialize;

/// Geometry and occupancy of the tile grid built for one run.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TilingStage {
    pub elapsed_ms: f64,
    pub points_per_tile: usize,
    /// `n / points_per_tile`, before rounding to a cubic grid.
    pub requested_tiles: usize,
    pub tiles_per_dim: usize,
    pub tile_count: usize,
    pub tile_size: Vec<f32>,
    /// Observed `[min, max]` per dimension.
    pub extent: Vec<[f32; 2]>,
    pub max_occupancy: usize,
    pub mean_occupancy: f32,
    pub empty_tiles: usize,
    pub parallel: bool,
    /// Points that did not fit their tile. Zero unless capacity sizing failed.
    pub rejected: usize,
}
