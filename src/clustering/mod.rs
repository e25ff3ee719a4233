//! CLUE density-peak clustering.
//!
//! A run turns weighted points into cluster ids in four passes over a tile
//! index:
//!
//! 1. the points are binned into a roughly cubic grid of tiles sized so that a
//!    tile holds about `points_per_tile` points;
//! 2. every point gets a local density `rho`, the kernel-weighted sum of the
//!    weights of all points within `dc`;
//! 3. every point finds its nearest neighbour of higher density within
//!    `dm = outlier_delta_factor * dc`, recording the distance as `delta`;
//! 4. points with `delta > dc` and `rho >= rhoc` become seeds, points with
//!    `delta > dm` and `rho < rhoc` become outliers, and every other point
//!    follows its nearest higher neighbour. Seed ids are then propagated down
//!    the follower links.
//!
//! Neighbour searches only visit the tiles overlapping the search radius. On
//! bounded (periodic) domains the band at the opposite edge is searched as
//! well, so clusters wrapping around the edge stay whole.
//!
//! The [`Clusterer`] is the entry point; [`ClusteringParams`] holds every knob
//! and deserializes from JSON with defaults for missing fields.

pub mod error;
pub mod params;
pub mod pipeline;
pub mod workspace;

pub use error::ClusteringError;
pub use params::ClusteringParams;
pub use pipeline::Clusterer;
pub use workspace::SearchWorkspace;
