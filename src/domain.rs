//! Coordinate domains and the domain-aware per-dimension distance.
//!
//! Every dimension carries a [`Domain`]. The default domain is unbounded; any
//! finite domain is periodic with period `max - min`, which covers angular
//! coordinates such as `[-π, π)`.
use serde::{Deserialize, Serialize};

/// Extent of one coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Domain {
    pub min: f32,
    pub max: f32,
}

impl Domain {
    /// Sentinel extent meaning "no wraparound".
    pub const UNBOUNDED: Domain = Domain {
        min: -f32::MAX,
        max: f32::MAX,
    };

    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Angular domain `[-π, π]`.
    pub fn angular() -> Self {
        Self::new(-std::f32::consts::PI, std::f32::consts::PI)
    }

    #[inline]
    pub fn is_unbounded(&self) -> bool {
        self.min == -f32::MAX && self.max == f32::MAX
    }

    #[inline]
    pub fn period(&self) -> f32 {
        self.max - self.min
    }

    /// `min <= max` with finite ends, or the unbounded sentinel.
    pub fn is_valid(&self) -> bool {
        self.is_unbounded() || (self.min.is_finite() && self.max.is_finite() && self.min <= self.max)
    }

    /// `min <= value <= max`. Always true on the unbounded sentinel.
    #[inline]
    pub fn contains(&self, value: f32) -> bool {
        self.is_unbounded() || (self.min <= value && value <= self.max)
    }

    /// Map `value` into `[min, max]` by whole periods. Unbounded and
    /// degenerate domains return it unchanged.
    pub fn wrap(&self, value: f32) -> f32 {
        let period = self.period();
        if self.is_unbounded() || !period.is_finite() || period <= 0.0 || self.contains(value) {
            return value;
        }
        (self.min + (value - self.min).rem_euclid(period)).clamp(self.min, self.max)
    }
}

impl Default for Domain {
    fn default() -> Self {
        Self::UNBOUNDED
    }
}

/// Per-dimension distance between two coordinates of the same dimension.
///
/// Implementations must be symmetric and non-negative.
pub trait CoordinateDistance {
    fn delta(&self, a: f32, b: f32, domain: &Domain) -> f32;
}

/// Plain absolute difference on unbounded domains, shortest way round on
/// periodic ones.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WrappedDistance;

impl CoordinateDistance for WrappedDistance {
    #[inline]
    fn delta(&self, a: f32, b: f32, domain: &Domain) -> f32 {
        wrapped_difference(a, b, domain)
    }
}

/// Smallest unsigned difference between `a` and `b`, wrapping on finite
/// domains.
#[inline]
pub fn wrapped_difference(a: f32, b: f32, domain: &Domain) -> f32 {
    let diff = (a - b).abs();
    if domain.is_unbounded() {
        return diff;
    }
    let period = domain.period();
    if !period.is_finite() || period <= 0.0 {
        return diff;
    }
    let diff = if diff > period {
        diff.rem_euclid(period)
    } else {
        diff
    };
    diff.min(period - diff)
}

/// Euclidean norm of the per-dimension distances between two points.
#[inline]
pub fn point_distance<const N: usize, D: CoordinateDistance>(
    metric: &D,
    a: &[f32; N],
    b: &[f32; N],
    domains: &[Domain; N],
) -> f32 {
    let mut sum = 0.0f32;
    for k in 0..N {
        let d = metric.delta(a[k], b[k], &domains[k]);
        sum += d * d;
    }
    sum.sqrt()
}
