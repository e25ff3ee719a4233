/// Reasons why a clustering run cannot be configured or started.
#[derive(Clone, Debug, PartialEq)]
pub enum ClusteringError {
    /// A scalar parameter is non-positive or not finite.
    InvalidParameter { name: &'static str, value: f64 },
    /// A domain has `min > max` or a non-finite end.
    InvalidDomain { dim: usize, min: f32, max: f32 },
    /// The number of configured domains does not match the dimensionality.
    DimensionMismatch { expected: usize, found: usize },
    /// A coordinate array and the weight array disagree in length.
    LengthMismatch {
        dim: usize,
        expected: usize,
        found: usize,
    },
    NonFiniteCoordinate { point: usize, dim: usize },
    InvalidWeight { point: usize, value: f32 },
    /// A coordinate lies outside the bounded domain of its dimension.
    CoordinateOutsideDomain { point: usize, dim: usize, value: f32 },
    /// `points / points_per_tile == 0`: no tile grid can be built.
    NotEnoughPointsForTiles {
        points: usize,
        points_per_tile: usize,
    },
}

impl std::fmt::Display for ClusteringError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClusteringError::InvalidParameter { name, value } => {
                write!(f, "parameter `{name}` must be positive and finite (got {value})")
            }
            ClusteringError::InvalidDomain { dim, min, max } => {
                write!(f, "invalid domain for dimension {dim}: [{min}, {max}]")
            }
            ClusteringError::DimensionMismatch { expected, found } => write!(
                f,
                "expected {expected} domains (one per dimension), got {found}"
            ),
            ClusteringError::LengthMismatch {
                dim,
                expected,
                found,
            } => write!(
                f,
                "coordinate array {dim} has {found} entries, weights have {expected}"
            ),
            ClusteringError::NonFiniteCoordinate { point, dim } => {
                write!(f, "point {point} has a non-finite coordinate in dimension {dim}")
            }
            ClusteringError::InvalidWeight { point, value } => {
                write!(f, "point {point} has an invalid weight {value}")
            }
            ClusteringError::CoordinateOutsideDomain { point, dim, value } => write!(
                f,
                "point {point} has coordinate {value} outside the domain of dimension {dim}"
            ),
            ClusteringError::NotEnoughPointsForTiles {
                points,
                points_per_tile,
            } => write!(
                f,
                "points_per_tile ({points_per_tile}) is too high for {points} points; lower it so that at least one tile is built"
            ),
        }
    }
}

impl std::error::Error for ClusteringError {}
