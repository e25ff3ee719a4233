//! Structure-of-arrays storage for the points of one clustering run.

/// Cluster id of points that belong to no cluster.
pub const NO_CLUSTER: i32 = -1;

/// Inputs and per-stage outputs, one entry per point.
///
/// All arrays share length `n`. `set` reallocates them together; a cleared
/// set has `n == 0`.
#[derive(Clone, Debug)]
pub struct PointSet<const N: usize> {
    pub coordinates: [Vec<f32>; N],
    pub weight: Vec<f32>,
    pub rho: Vec<f32>,
    pub delta: Vec<f32>,
    pub nearest_higher: Vec<Option<usize>>,
    pub followers: Vec<Vec<usize>>,
    pub cluster_index: Vec<i32>,
    pub is_seed: Vec<bool>,
}

impl<const N: usize> PointSet<N> {
    pub fn new() -> Self {
        Self {
            coordinates: std::array::from_fn(|_| Vec::new()),
            weight: Vec::new(),
            rho: Vec::new(),
            delta: Vec::new(),
            nearest_higher: Vec::new(),
            followers: Vec::new(),
            cluster_index: Vec::new(),
            is_seed: Vec::new(),
        }
    }

    /// Take ownership of the inputs and reset every result array.
    ///
    /// Lengths are checked by the caller.
    pub(crate) fn set(&mut self, coordinates: [Vec<f32>; N], weight: Vec<f32>) {
        let n = weight.len();
        self.coordinates = coordinates;
        self.weight = weight;
        self.rho = vec![0.0; n];
        self.delta = vec![f32::INFINITY; n];
        self.nearest_higher = vec![None; n];
        self.followers = vec![Vec::new(); n];
        self.cluster_index = vec![NO_CLUSTER; n];
        self.is_seed = vec![false; n];
    }

    /// Reset the per-run outputs while keeping the inputs.
    pub(crate) fn reset_results(&mut self) {
        self.rho.iter_mut().for_each(|r| *r = 0.0);
        self.delta.iter_mut().for_each(|d| *d = f32::INFINITY);
        self.nearest_higher.iter_mut().for_each(|h| *h = None);
        self.followers.iter_mut().for_each(Vec::clear);
        self.cluster_index.iter_mut().for_each(|c| *c = NO_CLUSTER);
        self.is_seed.iter_mut().for_each(|s| *s = false);
    }

    pub fn clear(&mut self) {
        *self = Self::new();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.weight.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.weight.is_empty()
    }

    /// Coordinates of point `i` gathered across dimensions.
    #[inline]
    pub fn coords(&self, i: usize) -> [f32; N] {
        std::array::from_fn(|k| self.coordinates[k][i])
    }

    /// `nearest_higher` with `-1` for "none".
    pub fn nearest_higher_indices(&self) -> Vec<i64> {
        self.nearest_higher
            .iter()
            .map(|h| h.map_or(-1, |j| j as i64))
            .collect()
    }
}

impl<const N: usize> Default for PointSet<N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_resets_results_to_sentinels() {
        let mut points = PointSet::<2>::new();
        points.set([vec![0.0, 1.0, 2.0], vec![5.0, 6.0, 7.0]], vec![1.0; 3]);
        assert_eq!(points.len(), 3);
        assert!(points.rho.iter().all(|&r| r == 0.0));
        assert!(points.delta.iter().all(|d| d.is_infinite()));
        assert!(points.nearest_higher.iter().all(Option::is_none));
        assert!(points.cluster_index.iter().all(|&c| c == NO_CLUSTER));
        assert!(points.followers.iter().all(Vec::is_empty));
        assert_eq!(points.coords(1), [1.0, 6.0]);
    }

    #[test]
    fn clear_drops_everything() {
        let mut points = PointSet::<1>::new();
        points.set([vec![0.0]], vec![1.0]);
        points.clear();
        assert!(points.is_empty());
        assert!(points.coordinates[0].is_empty());
    }
}
