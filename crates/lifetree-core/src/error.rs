//! Error types for grid operations.

use thiserror::Error;

/// Errors arising from grid construction or grid queries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// A bounding-box dependent operation was asked of an empty grid.
    ///
    /// Empty grids have no bounding box; callers are expected to check
    /// [`SparseGrid::is_empty`](crate::SparseGrid::is_empty) first.
    #[error("empty pattern has no bounding box")]
    EmptyPatternBoundingBox,
    /// A coordinate or extent left the `i64` range.
    ///
    /// Raised when a grid is wider or taller than `i64::MAX` cells, or
    /// when a translation or symmetry would move a cell past the range.
    #[error("coordinate overflow")]
    CoordinateOverflow,
    /// A transform name did not match any of the eight dihedral elements.
    #[error("unknown transform '{name}'")]
    UnknownTransform {
        /// The name that failed to parse.
        name: String,
    },
}
