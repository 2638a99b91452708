//! Rule-table parser and transition-table compiler.
//!
//! A rule table declares a state count, a symmetry group, named state-set
//! variables and a list of transition clauses. [`parse_rule`] turns the
//! text into a [`RuleSpec`]; [`compile`] expands every clause over its
//! symmetry group and all variable assignments and writes the results into
//! a [`CompiledTable`] keyed by the [`Packing`] contract.
//!
//! ```
//! use lifetree_rule::{compile_str, CompileConfig};
//!
//! let text = "\
//! @RULE B3
//! @TABLE
//! n_states:2
//! symmetries:rotate8
//! 0,1,1,1,0,0,0,0,0,1
//! ";
//! let table = compile_str(text, &CompileConfig::default()).unwrap();
//! assert_eq!(table.len(), 8);
//! assert_eq!(table.next_state(&[0, 0, 1, 1, 1, 0, 0, 0, 0]), Some(1));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod assign;
pub mod cache;
mod compile;
pub mod config;
pub mod error;
mod hash;
pub mod packing;
pub mod parser;
pub mod spec;
pub mod symmetry;
pub mod table;

pub use cache::{normalize_rule_text, TableCache};
pub use compile::{compile, compile_str, compile_with, compile_with_progress, validate, CompileProgress};
pub use config::{CompileConfig, DefaultTransition};
pub use error::{CompileError, ParseError};
pub use packing::{PackedKey, Packing, POSITION_SHIFTS};
pub use parser::parse_rule;
pub use spec::{Clause, Field, Neighborhood, RuleSpec, Symmetry, VarId};
pub use symmetry::expand;
pub use table::CompiledTable;
