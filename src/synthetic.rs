//! Seeded synthetic point clouds: Gaussian blobs over uniform noise.
//!
//! Used by the demo binary and the tests. The same options always produce the
//! same points.
use crate::domain::Domain;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, StandardNormal};
use serde::Deserialize;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SyntheticOptions {
    /// Total number of points, blobs and noise together.
    pub points: usize,
    pub blobs: usize,
    /// Standard deviation of every blob along every axis.
    pub sigma: f32,
    /// Share of points drawn uniformly over the box.
    pub noise_fraction: f32,
    /// Lower corner of the sampling box, same for every axis.
    pub low: f32,
    pub high: f32,
    pub seed: u64,
}

impl Default for SyntheticOptions {
    fn default() -> Self {
        Self {
            points: 1000,
            blobs: 5,
            sigma: 1.0,
            noise_fraction: 0.1,
            low: 0.0,
            high: 100.0,
            seed: 42,
        }
    }
}

/// Generated points with the blob each one was drawn from.
#[derive(Clone, Debug)]
pub struct SyntheticPoints<const N: usize> {
    pub coordinates: [Vec<f32>; N],
    pub weights: Vec<f32>,
    /// Blob id per point, `-1` for noise.
    pub truth: Vec<i32>,
    pub centres: Vec<[f32; N]>,
}

impl<const N: usize> SyntheticPoints<N> {
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Fold blob tails that spill past a bounded domain back into it.
    pub fn wrap_into(&mut self, domains: &[Domain; N]) {
        for (axis, domain) in self.coordinates.iter_mut().zip(domains) {
            axis.iter_mut().for_each(|v| *v = domain.wrap(*v));
        }
    }
}

/// Draw `points` points: blobs first (split evenly, remainder to the first
/// blobs), then noise. Every point has weight 1.
pub fn generate_blobs<const N: usize>(options: &SyntheticOptions) -> SyntheticPoints<N> {
    let mut rng = StdRng::seed_from_u64(options.seed);
    let (low, high) = if options.low < options.high {
        (options.low, options.high)
    } else {
        (options.high, options.low)
    };
    let noise_fraction = options.noise_fraction.clamp(0.0, 1.0);
    let noise = if options.blobs == 0 {
        options.points
    } else {
        (options.points as f32 * noise_fraction).round() as usize
    }
    .min(options.points);
    let clustered = options.points - noise;

    let centres: Vec<[f32; N]> = (0..options.blobs)
        .map(|_| std::array::from_fn(|_| uniform(&mut rng, low, high)))
        .collect();

    let mut coordinates: [Vec<f32>; N] =
        std::array::from_fn(|_| Vec::with_capacity(options.points));
    let mut truth = Vec::with_capacity(options.points);

    for i in 0..clustered {
        let blob = i % options.blobs.max(1);
        let centre = &centres[blob];
        for (k, axis) in coordinates.iter_mut().enumerate() {
            let z: f32 = StandardNormal.sample(&mut rng);
            axis.push(centre[k] + options.sigma * z);
        }
        truth.push(blob as i32);
    }
    for _ in 0..noise {
        for axis in coordinates.iter_mut() {
            axis.push(uniform(&mut rng, low, high));
        }
        truth.push(-1);
    }

    SyntheticPoints {
        coordinates,
        weights: vec![1.0; options.points],
        truth,
        centres,
    }
}

fn uniform(rng: &mut StdRng, low: f32, high: f32) -> f32 {
    if low == high {
        low
    } else {
        rng.gen_range(low..high)
    }
}
