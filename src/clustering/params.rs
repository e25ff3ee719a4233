//! Parameters configuring a clustering run.
//!
//! `dc` drives everything: it is the density cutoff, the seed distance and,
//! scaled by `outlier_delta_factor`, the follower/outlier distance. Start
//! tuning there, then adjust `rhoc` to the typical density of a cluster core.

use super::error::ClusteringError;
use crate::domain::Domain;
use crate::tiles::ParallelBinningOptions;
use serde::Deserialize;

/// Scalar knobs plus per-dimension domains.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ClusteringParams {
    /// Density cutoff distance.
    pub dc: f32,
    /// Minimum density for seeds; points below it may become outliers.
    pub rhoc: f32,
    /// `dm = outlier_delta_factor * dc`.
    pub outlier_delta_factor: f32,
    /// Target average occupancy of a tile.
    pub points_per_tile: usize,
    /// One domain per dimension, or empty for "all unbounded".
    pub domains: Vec<Domain>,
    /// Sequential or parallel tile population.
    pub binning: ParallelBinningOptions,
}

impl Default for ClusteringParams {
    fn default() -> Self {
        Self {
            dc: 1.0,
            rhoc: 5.0,
            outlier_delta_factor: 2.0,
            points_per_tile: 10,
            domains: Vec::new(),
            binning: ParallelBinningOptions::default(),
        }
    }
}

impl ClusteringParams {
    pub fn new(dc: f32, rhoc: f32, outlier_delta_factor: f32, points_per_tile: usize) -> Self {
        Self {
            dc,
            rhoc,
            outlier_delta_factor,
            points_per_tile,
            ..Self::default()
        }
    }

    pub fn with_domains(mut self, domains: Vec<Domain>) -> Self {
        self.domains = domains;
        self
    }

    pub fn with_binning(mut self, binning: ParallelBinningOptions) -> Self {
        self.binning = binning;
        self
    }

    /// Follower/outlier cutoff distance.
    #[inline]
    pub fn dm(&self) -> f32 {
        self.outlier_delta_factor * self.dc
    }

    /// Check the scalar parameters and every configured domain.
    pub fn validate(&self) -> Result<(), ClusteringError> {
        positive("dc", self.dc)?;
        positive("rhoc", self.rhoc)?;
        positive("outlier_delta_factor", self.outlier_delta_factor)?;
        if self.points_per_tile == 0 {
            return Err(ClusteringError::InvalidParameter {
                name: "points_per_tile",
                value: 0.0,
            });
        }
        for (dim, domain) in self.domains.iter().enumerate() {
            if !domain.is_valid() {
                return Err(ClusteringError::InvalidDomain {
                    dim,
                    min: domain.min,
                    max: domain.max,
                });
            }
        }
        Ok(())
    }

    /// Domains as a fixed-size array for an `N`-dimensional run.
    ///
    /// An empty list resolves to `N` unbounded domains.
    pub fn resolve_domains<const N: usize>(&self) -> Result<[Domain; N], ClusteringError> {
        if self.domains.is_empty() {
            return Ok([Domain::UNBOUNDED; N]);
        }
        if self.domains.len() != N {
            return Err(ClusteringError::DimensionMismatch {
                expected: N,
                found: self.domains.len(),
            });
        }
        Ok(std::array::from_fn(|k| self.domains[k]))
    }
}

fn positive(name: &'static str, value: f32) -> Result<(), ClusteringError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ClusteringError::InvalidParameter {
            name,
            value: f64::from(value),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        let params = ClusteringParams::default();
        assert!(params.validate().is_ok());
        assert_eq!(params.dm(), 2.0);
    }

    #[test]
    fn rejects_non_positive_scalars() {
        let params = ClusteringParams::new(0.0, 1.0, 1.0, 10);
        assert!(matches!(
            params.validate(),
            Err(ClusteringError::InvalidParameter { name: "dc", .. })
        ));
        let params = ClusteringParams::new(1.0, f32::NAN, 1.0, 10);
        assert!(matches!(
            params.validate(),
            Err(ClusteringError::InvalidParameter { name: "rhoc", .. })
        ));
        let params = ClusteringParams::new(1.0, 1.0, 1.0, 0);
        assert!(matches!(
            params.validate(),
            Err(ClusteringError::InvalidParameter {
                name: "points_per_tile",
                ..
            })
        ));
    }

    #[test]
    fn rejects_inverted_domain() {
        let params = ClusteringParams::default().with_domains(vec![
            Domain::UNBOUNDED,
            Domain::new(1.0, -1.0),
        ]);
        assert_eq!(
            params.validate(),
            Err(ClusteringError::InvalidDomain {
                dim: 1,
                min: 1.0,
                max: -1.0
            })
        );
    }

    #[test]
    fn resolves_domains_per_dimension() {
        let params = ClusteringParams::default();
        assert_eq!(params.resolve_domains::<3>().ok(), Some([Domain::UNBOUNDED; 3]));

        let params = params.with_domains(vec![Domain::UNBOUNDED, Domain::angular()]);
        let domains = params.resolve_domains::<2>().ok();
        assert_eq!(domains, Some([Domain::UNBOUNDED, Domain::angular()]));
        assert_eq!(
            params.resolve_domains::<3>(),
            Err(ClusteringError::DimensionMismatch {
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn deserializes_partial_json() {
        let params: ClusteringParams = serde_json::from_str(
            r#"{ "dc": 0.5, "domains": [{}, { "min": -3.0, "max": 3.0 }] }"#,
        )
        .expect("parse params");
        assert_eq!(params.dc, 0.5);
        assert_eq!(params.points_per_tile, 10);
        assert!(params.domains[0].is_unbounded());
        assert_eq!(params.domains[1], Domain::new(-3.0, 3.0));
    }
}
