//! Runtime configuration for the demo binary.
//!
//! A single JSON document selects the dimensionality, the clustering
//! parameters, the density kernel and the synthetic dataset:
//!
//! ```json
//! {
//!   "dimensions": 2,
//!   "params": { "dc": 1.5, "rhoc": 8.0, "outlier_delta_factor": 2.0, "points_per_tile": 10 },
//!   "kernel": { "kind": "exponential", "avg": 1.0, "amplitude": 1.0 },
//!   "dataset": { "points": 5000, "blobs": 8, "seed": 7 },
//!   "output": { "json_out": "out/report.json" }
//! }
//! ```
//!
//! Every section is optional.
use crate::clustering::ClusteringParams;
use crate::io::read_json_file;
use crate::kernel::KernelOptions;
use crate::synthetic::SyntheticOptions;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Where to write the full diagnostics report.
    pub json_out: Option<PathBuf>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    /// 1, 2 or 3.
    pub dimensions: usize,
    pub params: ClusteringParams,
    pub kernel: KernelOptions,
    pub dataset: SyntheticOptions,
    pub output: OutputConfig,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            dimensions: 2,
            params: ClusteringParams {
                dc: 1.5,
                rhoc: 8.0,
                ..ClusteringParams::default()
            },
            kernel: KernelOptions::default(),
            dataset: SyntheticOptions::default(),
            output: OutputConfig::default(),
        }
    }
}

pub fn load_config(path: &Path) -> Result<RuntimeConfig, String> {
    let config: RuntimeConfig =
        read_json_file(path).map_err(|e| format!("Failed to load config: {e}"))?;
    if !(1..=3).contains(&config.dimensions) {
        return Err(format!(
            "Unsupported dimensions {} in {} (expected 1, 2 or 3)",
            config.dimensions,
            path.display()
        ));
    }
    config
        .params
        .validate()
        .map_err(|e| format!("Invalid params in {}: {e}", path.display()))?;
    Ok(config)
}
