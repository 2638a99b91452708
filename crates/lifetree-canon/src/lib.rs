//! Orientation-invariant pattern digests and the apgcode encoding.
//!
//! [`canonicalize`] picks one of the eight orientations of a pattern by
//! comparing SHA-1 based [`Digest`]s, so that a pattern and any rotated,
//! reflected or translated copy share one canonical grid.
//! [`encode`]/[`decode`] convert between grids and [`Apgcode`] strings.
//!
//! Every operation that positions a grid returns [`GridError`] when the
//! pattern spans more than `i64::MAX` columns or rows.
//!
//! ```
//! use lifetree_canon::{canonicalize, decode, encode, min_apgcode};
//! use lifetree_core::{SparseGrid, Transform};
//!
//! let glider = SparseGrid::from_coords([(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)]);
//! let turned = glider.transformed(Transform::Rot90)?.shifted(12, -5)?;
//! assert_eq!(canonicalize(&glider)?.grid, canonicalize(&turned)?.grid);
//!
//! let canon = canonicalize(&glider)?.grid;
//! assert_eq!(decode(encode(&canon)?.as_str()).unwrap(), canon);
//! assert_eq!(min_apgcode(&glider)?.as_str(), "153");
//! # Ok::<(), lifetree_core::GridError>(())
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod apgcode;
pub mod canonical;
pub mod digest;
pub mod error;

pub use apgcode::{decode, encode, min_apgcode, Apgcode};
pub use canonical::{
    automorphisms, canonical_digest, canonicalize, orientation_digests, orientations, same_pattern,
    symmetric_digest, Canonical, ORIENTATIONS,
};
pub use digest::Digest;
pub use error::ApgcodeError;
pub use lifetree_core::GridError;
