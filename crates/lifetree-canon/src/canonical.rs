//! Canonical orientation of a pattern.
//!
//! A pattern is compared in all eight orientations of [`ORIENTATIONS`],
//! each translated back to the origin. The orientation with the smallest
//! [`Digest`] is canonical; on equal digests the one listed first wins.

use lifetree_core::{GridError, SparseGrid, Transform};
use tracing::trace;

use crate::digest::Digest;

/// Orientation enumeration order, which is also the tie-break order.
///
/// The last four are the reflection `FlipX` followed by a rotation of 90°,
/// 180°, 270° and 0° respectively.
pub const ORIENTATIONS: [Transform; 8] = [
    Transform::Identity,
    Transform::Rot90,
    Transform::Rot180,
    Transform::Rot270,
    Transform::FlipAntiDiagonal,
    Transform::FlipY,
    Transform::FlipDiagonal,
    Transform::FlipX,
];

/// A pattern in its canonical orientation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Canonical {
    /// The transform taking the input pattern to `grid` (up to translation).
    pub transform: Transform,
    /// Normalized, presence-only grid in canonical orientation.
    pub grid: SparseGrid,
    /// Digest of `grid`.
    pub digest: Digest,
}

/// The pattern in every orientation, normalized and presence-only, in
/// [`ORIENTATIONS`] order.
///
/// # Errors
///
/// [`GridError::CoordinateOverflow`] if the pattern spans more than
/// `i64::MAX` columns or rows. Every other input succeeds.
pub fn orientations(grid: &SparseGrid) -> Result<Vec<(Transform, SparseGrid)>, GridError> {
    let presence = grid.to_presence().normalized()?;
    ORIENTATIONS
        .iter()
        .map(|&t| {
            presence
                .transformed(t)
                .and_then(|oriented| oriented.normalized())
                .map(|oriented| (t, oriented))
        })
        .collect()
}

/// Digest of each orientation, in [`ORIENTATIONS`] order.
///
/// # Errors
///
/// As [`orientations`].
pub fn orientation_digests(grid: &SparseGrid) -> Result<Vec<Digest>, GridError> {
    orientations(grid)?
        .iter()
        .map(|(_, oriented)| Digest::of_grid(oriented))
        .collect()
}

/// Put a pattern into canonical orientation.
///
/// An empty grid is its own canonical form with [`Transform::Identity`]
/// and a zero digest.
///
/// # Errors
///
/// As [`orientations`].
pub fn canonicalize(grid: &SparseGrid) -> Result<Canonical, GridError> {
    let mut best: Option<Canonical> = None;
    for (transform, oriented) in orientations(grid)? {
        let digest = Digest::of_grid(&oriented)?;
        trace!(%transform, %digest, "orientation digest");
        if best.as_ref().is_none_or(|b| digest < b.digest) {
            best = Some(Canonical {
                transform,
                grid: oriented,
                digest,
            });
        }
    }
    Ok(best.unwrap_or_else(|| Canonical {
        transform: Transform::Identity,
        grid: SparseGrid::new(),
        digest: Digest::zero(),
    }))
}

/// The smallest orientation digest: equal for every translation and
/// orientation of the same pattern.
///
/// # Errors
///
/// As [`orientations`].
pub fn canonical_digest(grid: &SparseGrid) -> Result<Digest, GridError> {
    Ok(canonicalize(grid)?.digest)
}

/// Sum of all eight orientation digests.
///
/// Also invariant under translation and orientation, and cheaper to
/// compare than a full canonical grid.
///
/// # Errors
///
/// As [`orientations`].
pub fn symmetric_digest(grid: &SparseGrid) -> Result<Digest, GridError> {
    Ok(orientation_digests(grid)?.iter().sum())
}

/// Orientations that map the pattern onto itself up to translation.
///
/// Always contains [`Transform::Identity`]. The set is the symmetry group
/// of the pattern, e.g. all eight for a block and `{Identity}` for a glider.
///
/// # Errors
///
/// As [`orientations`].
pub fn automorphisms(grid: &SparseGrid) -> Result<Vec<Transform>, GridError> {
    let oriented = orientations(grid)?;
    let base = &oriented[0].1;
    Ok(oriented
        .iter()
        .filter(|(_, candidate)| candidate == base)
        .map(|&(t, _)| t)
        .collect())
}

/// Whether two grids are the same pattern up to translation and
/// orientation.
///
/// # Errors
///
/// As [`orientations`], for either grid.
pub fn same_pattern(a: &SparseGrid, b: &SparseGrid) -> Result<bool, GridError> {
    if a.len() != b.len() {
        return Ok(false);
    }
    Ok(canonicalize(a)?.grid == canonicalize(b)?.grid)
}
