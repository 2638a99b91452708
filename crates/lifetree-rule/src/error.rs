//! Error types for rule parsing and compilation.
//!
//! Parse errors always carry the 1-based line number of the offending
//! line. Compile errors carry the index of the originating clause (and
//! its source line, when the clause came from text).

use lifetree_core::State;
use thiserror::Error;

/// Errors produced while parsing rule-table text.
///
/// Every parse error is fatal: no partially parsed [`RuleSpec`](crate::RuleSpec)
/// is ever returned.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A line in table scope matched no known line form.
    #[error("line {line}: unrecognized line '{text}'")]
    UnrecognizedLine {
        /// 1-based line number.
        line: usize,
        /// The offending line, trimmed.
        text: String,
    },
    /// A transition-shaped line had the wrong field count or an unknown token.
    #[error("line {line}: malformed transition: {reason}")]
    MalformedTransition {
        /// 1-based line number.
        line: usize,
        /// What went wrong.
        reason: String,
    },
    /// A `var NAME={...}` declaration could not be parsed.
    #[error("line {line}: malformed variable declaration: {reason}")]
    MalformedVariable {
        /// 1-based line number.
        line: usize,
        /// What went wrong.
        reason: String,
    },
    /// A variable name was declared twice.
    #[error("line {line}: variable '{name}' is already declared")]
    DuplicateVariable {
        /// 1-based line number.
        line: usize,
        /// The redeclared name.
        name: String,
    },
    /// The table declared a neighborhood other than Moore.
    #[error("line {line}: unsupported neighborhood '{value}' (only Moore is supported)")]
    UnsupportedNeighborhood {
        /// 1-based line number.
        line: usize,
        /// The declared neighborhood.
        value: String,
    },
    /// The symmetry name is not in the supported set.
    #[error("line {line}: unknown symmetry group '{name}'")]
    UnknownSymmetryGroup {
        /// 1-based line number.
        line: usize,
        /// The declared symmetry name.
        name: String,
    },
    /// A recognized parameter had an unusable value.
    #[error("line {line}: invalid value for '{key}': {reason}")]
    InvalidParameter {
        /// 1-based line number.
        line: usize,
        /// Parameter key.
        key: String,
        /// What went wrong.
        reason: String,
    },
    /// A `@` section header had no name.
    #[error("line {line}: malformed section: {reason}")]
    MalformedSection {
        /// 1-based line number.
        line: usize,
        /// What went wrong.
        reason: String,
    },
}

impl ParseError {
    /// The 1-based line number the error refers to.
    pub fn line(&self) -> usize {
        match self {
            Self::UnrecognizedLine { line, .. }
            | Self::MalformedTransition { line, .. }
            | Self::MalformedVariable { line, .. }
            | Self::DuplicateVariable { line, .. }
            | Self::UnsupportedNeighborhood { line, .. }
            | Self::UnknownSymmetryGroup { line, .. }
            | Self::InvalidParameter { line, .. }
            | Self::MalformedSection { line, .. } => *line,
        }
    }
}

/// Errors produced while compiling a [`RuleSpec`](crate::RuleSpec).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CompileError {
    /// The rule text failed to parse.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// `n_states` is outside `2..=256`.
    #[error("rule declares {n_states} states, expected 2..=256")]
    InvalidStateCount {
        /// The declared state count.
        n_states: u32,
    },
    /// A clause referenced a variable index with no declaration.
    #[error("clause {clause} (line {line}): variable index {index} is not declared")]
    UndeclaredVariable {
        /// 0-based clause index.
        clause: usize,
        /// Source line of the clause (0 if built programmatically).
        line: usize,
        /// The dangling variable index.
        index: usize,
    },
    /// A clause used a state outside `0..n_states`, directly or through
    /// a variable's value set.
    #[error("clause {clause} (line {line}): state {state} is out of range for {n_states} states")]
    StateOutOfRange {
        /// 0-based clause index.
        clause: usize,
        /// Source line of the clause (0 if built programmatically).
        line: usize,
        /// The offending state.
        state: State,
        /// Declared number of states.
        n_states: u32,
    },
    /// The next-state field names a variable that none of the nine input
    /// fields binds.
    #[error("clause {clause} (line {line}): output variable '{name}' is not bound by any input")]
    UnboundOutputVariable {
        /// 0-based clause index.
        clause: usize,
        /// Source line of the clause (0 if built programmatically).
        line: usize,
        /// The unbound variable name.
        name: String,
    },
    /// Identity pre-seeding would exceed the configured configuration limit.
    #[error("identity seeding needs {configurations} configurations, limit is {limit}")]
    SeedTooLarge {
        /// Number of configurations (`n_states^9`).
        configurations: u128,
        /// Configured `max_seed_configurations`.
        limit: u64,
    },
}
