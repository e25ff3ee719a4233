/// Geometry of the tile grid for one run.
///
/// The grid covers the observed bounding box of the points with `n_per_dim`
/// tiles along every dimension.
#[derive(Clone, Debug, PartialEq)]
pub struct TileLayout<const N: usize> {
    /// Requested tile count, `n / points_per_tile`.
    pub n_tiles: usize,
    /// Tiles per dimension: the largest `k` with `k^N <= n_tiles`.
    pub n_per_dim: usize,
    pub tile_size: [f32; N],
    pub min_max: [(f32, f32); N],
}

impl<const N: usize> TileLayout<N> {
    /// Size the grid from the observed extent of every coordinate.
    pub fn from_coordinates(coordinates: &[Vec<f32>; N], n_tiles: usize) -> Self {
        let n_per_dim = tiles_per_dimension(n_tiles, N);
        let min_max: [(f32, f32); N] = std::array::from_fn(|k| observed_extent(&coordinates[k]));
        let tile_size = std::array::from_fn(|k| {
            let (lo, hi) = min_max[k];
            if n_per_dim == 0 {
                0.0
            } else {
                (hi - lo) / n_per_dim as f32
            }
        });
        Self {
            n_tiles,
            n_per_dim,
            tile_size,
            min_max,
        }
    }

    /// Number of addressable tiles, `n_per_dim^N`.
    pub fn tile_count(&self) -> usize {
        self.n_per_dim.pow(N as u32)
    }
}

/// Largest `k` such that `k^dims <= n_tiles`.
pub fn tiles_per_dimension(n_tiles: usize, dims: usize) -> usize {
    if n_tiles == 0 {
        return 0;
    }
    if dims <= 1 {
        return n_tiles;
    }
    let mut k = (n_tiles as f64).powf(1.0 / dims as f64).floor() as usize;
    while k > 1 && exceeds(k, dims, n_tiles) {
        k -= 1;
    }
    while !exceeds(k + 1, dims, n_tiles) {
        k += 1;
    }
    k.max(1)
}

fn exceeds(base: usize, exp: usize, limit: usize) -> bool {
    base.checked_pow(exp as u32).map_or(true, |v| v > limit)
}

fn observed_extent(values: &[f32]) -> (f32, f32) {
    if values.is_empty() {
        return (0.0, 0.0);
    }
    values
        .iter()
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        })
}
