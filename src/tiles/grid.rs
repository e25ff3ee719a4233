use super::layout::TileLayout;
use crate::buffer::GrowableBuffer;
use std::ops::RangeInclusive;

/// Regular grid of tiles, each holding the indices of the points inside it.
///
/// Tile ids are row-major with dimension 0 varying fastest:
/// `id = Σ bin_k · n_per_dim^k`. Coordinates outside the observed extent
/// clamp to the border tiles.
pub struct TileGrid<const N: usize> {
    layout: TileLayout<N>,
    strides: [usize; N],
    tiles: Vec<GrowableBuffer<usize>>,
}

impl<const N: usize> TileGrid<N> {
    /// Allocate empty tiles for `layout`. Capacities start at zero; the binning
    /// stage reserves them from the measured occupancy.
    pub fn new(layout: TileLayout<N>) -> Self {
        let mut strides = [0usize; N];
        let mut stride = 1usize;
        for s in strides.iter_mut() {
            *s = stride;
            stride = stride.saturating_mul(layout.n_per_dim);
        }
        let tiles = (0..layout.tile_count())
            .map(|_| GrowableBuffer::default())
            .collect();
        Self {
            layout,
            strides,
            tiles,
        }
    }

    pub fn layout(&self) -> &TileLayout<N> {
        &self.layout
    }

    /// Number of tiles in the grid.
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Bin along `dim` owning `coord`.
    #[inline]
    pub fn bin(&self, coord: f32, dim: usize) -> usize {
        let last = self.layout.n_per_dim.saturating_sub(1);
        let size = self.layout.tile_size[dim];
        if size.is_nan() || size <= 0.0 {
            return 0;
        }
        let (lo, _) = self.layout.min_max[dim];
        // Saturating cast: below the grid maps to 0, NaN to 0.
        let raw = ((coord - lo) / size) as usize;
        raw.min(last)
    }

    /// Tile id owning `coords`.
    #[inline]
    pub fn global_bin(&self, coords: &[f32; N]) -> usize {
        let mut id = 0usize;
        for (k, &c) in coords.iter().enumerate() {
            id += self.bin(c, k) * self.strides[k];
        }
        id
    }

    /// Bins along `dim` overlapping `[lo, hi]`, in increasing order.
    #[inline]
    pub fn bins_for_range(&self, lo: f32, hi: f32, dim: usize) -> RangeInclusive<usize> {
        self.bin(lo, dim)..=self.bin(hi, dim)
    }

    /// Expand per-dimension bin lists into the tile ids of their Cartesian
    /// product.
    ///
    /// Each list is sorted and deduplicated first, so every tile appears at
    /// most once in `out`. `scratch` is reused across calls.
    pub fn search_box(
        &self,
        per_dim: &mut [Vec<usize>; N],
        out: &mut Vec<usize>,
        scratch: &mut Vec<usize>,
    ) {
        out.clear();
        out.push(0);
        for (k, bins) in per_dim.iter_mut().enumerate() {
            bins.sort_unstable();
            bins.dedup();
            scratch.clear();
            for &base in out.iter() {
                for &b in bins.iter() {
                    scratch.push(base + b * self.strides[k]);
                }
            }
            std::mem::swap(out, scratch);
        }
    }

    /// Insert point `index` into the tile owning `coords`.
    ///
    /// Returns `None` when that tile is full.
    pub fn fill(&mut self, coords: &[f32; N], index: usize) -> Option<usize> {
        let id = self.global_bin(coords);
        self.tiles[id].push(index)
    }

    /// Point indices stored in tile `id`.
    #[inline]
    pub fn tile(&self, id: usize) -> &[usize] {
        self.tiles[id].as_slice()
    }

    pub fn tiles(&self) -> &[GrowableBuffer<usize>] {
        &self.tiles
    }

    pub(crate) fn tiles_mut(&mut self) -> &mut [GrowableBuffer<usize>] {
        &mut self.tiles
    }

    /// Occupancy summary: (max points in a tile, empty tiles).
    pub fn occupancy(&self) -> (usize, usize) {
        self.tiles.iter().fold((0, 0), |(max, empty), t| {
            (max.max(t.len()), empty + usize::from(t.is_empty()))
        })
    }
}

impl<const N: usize> std::fmt::Debug for TileGrid<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TileGrid")
            .field("n_per_dim", &self.layout.n_per_dim)
            .field("tile_size", &self.layout.tile_size)
            .field("tiles", &self.tiles.len())
            .finish()
    }
}
