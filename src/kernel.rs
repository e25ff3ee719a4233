//! Density kernels used to weight neighbour contributions.
//!
//! A kernel maps `(distance, i, j)` to a non-negative contribution that the
//! density stage multiplies by the weight of point `j`. Every shipped kernel
//! returns `1.0` for the point itself (`i == j`), so an isolated point carries
//! exactly its own weight as density.
//!
//! Any closure `Fn(f32, usize, usize) -> f32` is a kernel as well.
use serde::Deserialize;

pub trait DensityKernel {
    fn weight(&self, distance: f32, i: usize, j: usize) -> f32;
}

impl<F> DensityKernel for F
where
    F: Fn(f32, usize, usize) -> f32,
{
    #[inline]
    fn weight(&self, distance: f32, i: usize, j: usize) -> f32 {
        self(distance, i, j)
    }
}

/// Constant contribution for every neighbour within the cutoff.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct FlatKernel {
    pub flat: f32,
}

impl FlatKernel {
    pub fn new(flat: f32) -> Self {
        Self { flat }
    }
}

impl Default for FlatKernel {
    fn default() -> Self {
        Self { flat: 0.5 }
    }
}

impl DensityKernel for FlatKernel {
    #[inline]
    fn weight(&self, _distance: f32, i: usize, j: usize) -> f32 {
        if i == j {
            1.0
        } else {
            self.flat
        }
    }
}

/// `amplitude * exp(-avg * d)`.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct ExponentialKernel {
    pub avg: f32,
    pub amplitude: f32,
}

impl ExponentialKernel {
    pub fn new(avg: f32, amplitude: f32) -> Self {
        Self { avg, amplitude }
    }
}

impl DensityKernel for ExponentialKernel {
    #[inline]
    fn weight(&self, distance: f32, i: usize, j: usize) -> f32 {
        if i == j {
            1.0
        } else {
            self.amplitude * (-self.avg * distance).exp()
        }
    }
}

/// `amplitude * exp(-(d - avg)² / (2 std²))`.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct GaussianKernel {
    pub avg: f32,
    pub std: f32,
    pub amplitude: f32,
}

impl GaussianKernel {
    pub fn new(avg: f32, std: f32, amplitude: f32) -> Self {
        Self {
            avg,
            std,
            amplitude,
        }
    }
}

impl DensityKernel for GaussianKernel {
    #[inline]
    fn weight(&self, distance: f32, i: usize, j: usize) -> f32 {
        if i == j {
            1.0
        } else {
            let z = distance - self.avg;
            self.amplitude * (-(z * z) / (2.0 * self.std * self.std)).exp()
        }
    }
}

/// Kernel selection as it appears in configuration files.
///
/// ```json
/// { "kind": "gaussian", "avg": 0.0, "std": 1.0, "amplitude": 1.0 }
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum KernelOptions {
    Flat(FlatKernel),
    Exponential(ExponentialKernel),
    Gaussian(GaussianKernel),
}

impl Default for KernelOptions {
    fn default() -> Self {
        KernelOptions::Flat(FlatKernel::default())
    }
}

impl DensityKernel for KernelOptions {
    #[inline]
    fn weight(&self, distance: f32, i: usize, j: usize) -> f32 {
        match self {
            KernelOptions::Flat(k) => k.weight(distance, i, j),
            KernelOptions::Exponential(k) => k.weight(distance, i, j),
            KernelOptions::Gaussian(k) => k.weight(distance, i, j),
        }
    }
}
