//! The parsed form of a rule table.
//!
//! A [`RuleSpec`] holds the global parameters, the named state-set
//! variables and the transition clauses in declaration order. It is
//! produced by [`parse_rule`](crate::parse_rule) or built directly, and
//! consumed by [`compile`](crate::compile).

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use lifetree_core::State;
use smallvec::SmallVec;

use crate::error::ParseError;

/// Number of fields in a transition clause: center, 8 neighbors, next state.
pub const CLAUSE_FIELDS: usize = 10;

/// Number of neighbor positions in the Moore ring.
pub const RING: usize = 8;

/// Ordered value set of a variable.
pub type ValueSet = SmallVec<[State; 8]>;

/// Index of a variable in [`RuleSpec::variables`] (declaration order).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VarId(pub usize);

impl fmt::Display for VarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One field of a transition clause.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    /// A literal state.
    State(State),
    /// A reference to a declared variable.
    Var(VarId),
}

/// A transition clause: `center, n0..n7, next`.
///
/// Neighbors are listed clockwise; which cell the ring starts at is a
/// property of the rule-table format and only matters through the
/// symmetry tables and the packing contract.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Clause {
    /// The ten fields in source order.
    pub fields: [Field; CLAUSE_FIELDS],
    /// 1-based source line, or 0 for clauses built in code.
    pub line: usize,
}

impl Clause {
    /// Build a clause from its parts.
    pub fn new(center: Field, neighbors: [Field; RING], next: Field) -> Self {
        let mut fields = [center; CLAUSE_FIELDS];
        fields[1..=RING].copy_from_slice(&neighbors);
        fields[RING + 1] = next;
        Self { fields, line: 0 }
    }

    /// Build a clause of literal states, e.g. `[0, 1, 1, 1, 0, 0, 0, 0, 0, 1]`.
    pub fn literal(states: [State; CLAUSE_FIELDS]) -> Self {
        Self {
            fields: states.map(Field::State),
            line: 0,
        }
    }

    /// The center field.
    pub fn center(&self) -> Field {
        self.fields[0]
    }

    /// The eight neighbor fields, clockwise.
    pub fn neighbors(&self) -> [Field; RING] {
        let mut ring = [self.fields[1]; RING];
        ring.copy_from_slice(&self.fields[1..=RING]);
        ring
    }

    /// The next-state field.
    pub fn next(&self) -> Field {
        self.fields[RING + 1]
    }

    /// A copy with the neighbor ring replaced, keeping center, next and line.
    pub fn with_neighbors(&self, ring: [Field; RING]) -> Self {
        let mut fields = self.fields;
        fields[1..=RING].copy_from_slice(&ring);
        Self {
            fields,
            line: self.line,
        }
    }

    /// The nine input fields: center followed by the ring.
    pub fn inputs(&self) -> &[Field] {
        &self.fields[..=RING]
    }
}

/// Symmetry group a rule table declares for its clauses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Symmetry {
    /// Clauses apply exactly as written.
    None,
    /// Any arrangement of the neighbor values (outer totalistic).
    #[default]
    Permute,
    /// The four quarter-turn rotations.
    Rotate4,
    /// Rotations and reflections: the full dihedral group of order 8.
    Rotate4Reflect,
    /// The eight cyclic shifts of the neighbor ring.
    Rotate8,
}

impl Symmetry {
    /// Every supported symmetry.
    pub const ALL: [Symmetry; 5] = [
        Symmetry::None,
        Symmetry::Permute,
        Symmetry::Rotate4,
        Symmetry::Rotate4Reflect,
        Symmetry::Rotate8,
    ];

    /// Name as written in rule tables.
    pub fn name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Permute => "permute",
            Self::Rotate4 => "rotate4",
            Self::Rotate4Reflect => "rotate4reflect",
            Self::Rotate8 => "rotate8",
        }
    }

    /// Look up a symmetry by its rule-table name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim().to_ascii_lowercase();
        Self::ALL.into_iter().find(|s| s.name() == name)
    }
}

impl fmt::Display for Symmetry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Neighborhood shape. Only the 8-cell Moore neighborhood is supported.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Neighborhood {
    /// The 8 cells orthogonally and diagonally adjacent to the center.
    #[default]
    Moore,
}

impl Neighborhood {
    /// Parse a neighborhood value, ignoring case and spaces.
    pub fn from_name(value: &str) -> Option<Self> {
        let squashed: String = value
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_ascii_lowercase();
        (squashed == "moore").then_some(Self::Moore)
    }
}

/// A parsed rule: global parameters, variables and clauses.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuleSpec {
    /// Name from the `@RULE` line, if any.
    pub name: Option<String>,
    /// Free text following the `@RULE` line.
    pub description: String,
    /// Number of states (`n_states`), at least 2.
    pub n_states: u32,
    /// Declared neighborhood.
    pub neighborhood: Neighborhood,
    /// Declared symmetry group.
    pub symmetry: Symmetry,
    /// Variables in declaration order.
    pub variables: IndexMap<String, ValueSet>,
    /// Transition clauses in declaration order.
    pub clauses: Vec<Clause>,
    /// Parameters other than `n_states`, `neighborhood` and `symmetries`,
    /// kept verbatim.
    pub parameters: IndexMap<String, String>,
}

impl Default for RuleSpec {
    fn default() -> Self {
        Self {
            name: None,
            description: String::new(),
            n_states: 2,
            neighborhood: Neighborhood::Moore,
            symmetry: Symmetry::Permute,
            variables: IndexMap::new(),
            clauses: Vec::new(),
            parameters: IndexMap::new(),
        }
    }
}

impl RuleSpec {
    /// An empty rule with the given state count and symmetry.
    pub fn new(n_states: u32, symmetry: Symmetry) -> Self {
        Self {
            n_states,
            symmetry,
            ..Self::default()
        }
    }

    /// Declare a variable, returning its id.
    ///
    /// Redeclaring a name replaces its values and keeps its id.
    pub fn declare_variable<I>(&mut self, name: impl Into<String>, values: I) -> VarId
    where
        I: IntoIterator<Item = State>,
    {
        let (index, _) = self
            .variables
            .insert_full(name.into(), values.into_iter().collect());
        VarId(index)
    }

    /// Id of a declared variable.
    pub fn variable_id(&self, name: &str) -> Option<VarId> {
        self.variables.get_index_of(name).map(VarId)
    }

    /// Name and values of a variable.
    pub fn variable(&self, id: VarId) -> Option<(&str, &[State])> {
        self.variables
            .get_index(id.0)
            .map(|(name, values)| (name.as_str(), values.as_slice()))
    }

    /// Append a clause.
    pub fn push_clause(&mut self, clause: Clause) {
        self.clauses.push(clause);
    }
}

impl FromStr for RuleSpec {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parser::parse_rule(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clause_parts() {
        let c = Clause::literal([9, 1, 2, 3, 4, 5, 6, 7, 8, 0]);
        assert_eq!(c.center(), Field::State(9));
        assert_eq!(c.next(), Field::State(0));
        assert_eq!(c.neighbors()[0], Field::State(1));
        assert_eq!(c.neighbors()[7], Field::State(8));
        assert_eq!(c.inputs().len(), 9);
    }

    #[test]
    fn with_neighbors_keeps_center_and_next() {
        let c = Clause::literal([9, 1, 2, 3, 4, 5, 6, 7, 8, 0]);
        let ring = [Field::State(0); RING];
        let d = c.with_neighbors(ring);
        assert_eq!(d.center(), Field::State(9));
        assert_eq!(d.next(), Field::State(0));
        assert_eq!(d.neighbors(), ring);
    }

    #[test]
    fn symmetry_names_round_trip() {
        for s in Symmetry::ALL {
            assert_eq!(Symmetry::from_name(s.name()), Some(s));
        }
        assert_eq!(Symmetry::from_name(" Rotate8 "), Some(Symmetry::Rotate8));
        assert_eq!(Symmetry::from_name("rotate8reflect"), None);
    }

    #[test]
    fn moore_is_case_and_space_insensitive() {
        assert_eq!(Neighborhood::from_name("Moore"), Some(Neighborhood::Moore));
        assert_eq!(Neighborhood::from_name(" M oo RE "), Some(Neighborhood::Moore));
        assert_eq!(Neighborhood::from_name("vonNeumann"), None);
    }

    #[test]
    fn variables_keep_declaration_order() {
        let mut spec = RuleSpec::default();
        let b = spec.declare_variable("b", [0, 1]);
        let a = spec.declare_variable("a", [1]);
        assert_eq!(b, VarId(0));
        assert_eq!(a, VarId(1));
        assert_eq!(spec.variable(a), Some(("a", &[1][..])));
        assert_eq!(spec.variable_id("b"), Some(b));
        assert_eq!(spec.variable(VarId(7)), None);
    }
}
