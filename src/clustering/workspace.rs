//! Scratch buffers reused by the neighbour searches.
//!
//! Both the density and the nearest-higher stage build one search box per
//! point. The workspace keeps the per-dimension bin lists and the tile id
//! buffers alive across points and across runs.
use crate::domain::Domain;
use crate::tiles::TileGrid;

pub struct SearchWorkspace<const N: usize> {
    per_dim: [Vec<usize>; N],
    tiles: Vec<usize>,
    scratch: Vec<usize>,
}

impl<const N: usize> SearchWorkspace<N> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tiles that may hold points within `radius` of `coords`.
    ///
    /// Along every dimension the bins covering `[x - radius, x + radius]` are
    /// taken. When that range crosses an edge of a bounded domain, the band of
    /// width `radius` at the opposite edge is added as well, so periodic
    /// neighbours are found. Each tile id appears at most once.
    pub fn search_box(
        &mut self,
        grid: &TileGrid<N>,
        coords: &[f32; N],
        radius: f32,
        domains: &[Domain; N],
    ) -> &[usize] {
        for (k, bins) in self.per_dim.iter_mut().enumerate() {
            bins.clear();
            let x = coords[k];
            let domain = &domains[k];
            bins.extend(grid.bins_for_range(x - radius, x + radius, k));
            if domain.is_unbounded() {
                continue;
            }
            if x + radius > domain.max {
                bins.extend(grid.bins_for_range(domain.min, domain.min + radius, k));
            }
            if x - radius < domain.min {
                bins.extend(grid.bins_for_range(domain.max - radius, domain.max, k));
            }
        }
        grid.search_box(&mut self.per_dim, &mut self.tiles, &mut self.scratch);
        &self.tiles
    }

    /// Drop cached contents, keeping allocations.
    pub fn reset(&mut self) {
        self.per_dim.iter_mut().for_each(Vec::clear);
        self.tiles.clear();
        self.scratch.clear();
    }
}

impl<const N: usize> Default for SearchWorkspace<N> {
    fn default() -> Self {
        Self {
            per_dim: std::array::from_fn(|_| Vec::new()),
            tiles: Vec::new(),
            scratch: Vec::new(),
        }
    }
}
