//! Core types for the Lifetree workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! value types shared by the rule compiler and the canonicalizer:
//!
//! - [`SparseGrid`]: live cells keyed by [`Coord`], never storing state 0
//! - [`BoundingBox`]: the minimal rectangle around a non-empty grid
//! - [`Transform`]: the eight symmetries of the square
//! - [`GridError`]: precondition failures on grid operations

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod bbox;
pub mod error;
pub mod grid;
pub mod transform;

pub use bbox::BoundingBox;
pub use error::GridError;
pub use grid::{Coord, SparseGrid, State};
pub use transform::Transform;
