//! Lifetree: a cellular-automaton rule-table compiler and pattern
//! canonicalizer.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Lifetree sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use lifetree::prelude::*;
//!
//! // Compile B3/S23 with "no change" as the default transition.
//! let text = "\
//! @RULE Life
//! @TABLE
//! n_states:2
//! neighborhood:Moore
//! symmetries:permute
//! var a={0,1}
//! 1,0,0,0,0,0,0,0,0,0
//! 1,1,0,0,0,0,0,0,0,0
//! 1,1,1,1,1,0,0,0,0,0
//! 1,1,1,1,1,1,0,0,0,0
//! 1,1,1,1,1,1,1,0,0,0
//! 1,1,1,1,1,1,1,1,0,0
//! 1,1,1,1,1,1,1,1,1,0
//! 0,1,1,1,0,0,0,0,0,1
//! ";
//! let config = CompileConfig::new().with_identity_default();
//! let table = compile_str(text, &config).unwrap();
//! assert!(table.is_total());
//! assert_eq!(table.next_state(&[0, 1, 0, 1, 0, 1, 0, 0, 0]), Some(1));
//!
//! // Name a glider independently of where and how it is placed.
//! let glider = SparseGrid::from_coords([(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)]);
//! let flipped = glider.transformed(Transform::FlipX)?.shifted(30, 7)?;
//! assert_eq!(min_apgcode(&glider)?, min_apgcode(&flipped)?);
//! assert_eq!(canonical_digest(&glider)?, canonical_digest(&flipped)?);
//! # Ok::<(), GridError>(())
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `lifetree-core` | Sparse grids, bounding boxes, dihedral transforms |
//! | [`rule`] | `lifetree-rule` | Rule-table parsing, symmetry expansion, table compilation |
//! | [`canon`] | `lifetree-canon` | Canonical digests and the apgcode codec |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Grid value types and transforms (`lifetree-core`).
pub use lifetree_core as types;

/// Rule-table parsing and compilation (`lifetree-rule`).
///
/// Parse with [`rule::parse_rule`], compile with [`rule::compile_with`],
/// memoize with [`rule::TableCache`].
pub use lifetree_rule as rule;

/// Canonicalization and apgcodes (`lifetree-canon`).
pub use lifetree_canon as canon;

/// Common imports for typical Lifetree usage.
///
/// ```rust
/// use lifetree::prelude::*;
/// ```
pub mod prelude {
    // Grids
    pub use lifetree_core::{BoundingBox, Coord, GridError, SparseGrid, State, Transform};

    // Rule compilation
    pub use lifetree_rule::{
        compile, compile_str, compile_with, parse_rule, CompileConfig, CompileError,
        CompiledTable, DefaultTransition, ParseError, RuleSpec, Symmetry, TableCache,
    };

    // Canonicalization
    pub use lifetree_canon::{
        canonical_digest, canonicalize, decode, encode, min_apgcode, Apgcode, ApgcodeError,
        Canonical, Digest,
    };
}
