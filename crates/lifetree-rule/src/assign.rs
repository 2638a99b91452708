//! Concrete substitutions for the variables of a clause.
//!
//! Each distinct variable in a clause is bound once, so a clause using
//! `a` in three positions contributes `|a|` assignments, not `|a|^3`.
//! Assignments are enumerated as a mixed-radix counter over the clause's
//! variables sorted by declaration index, the last variable varying
//! fastest.

use lifetree_core::State;
use smallvec::SmallVec;

use crate::spec::{Clause, Field, VarId, CLAUSE_FIELDS};

/// Distinct variables referenced by a clause, in declaration order.
pub fn clause_variables(clause: &Clause) -> SmallVec<[VarId; 4]> {
    let mut vars: SmallVec<[VarId; 4]> = clause
        .fields
        .iter()
        .filter_map(|f| match f {
            Field::Var(v) => Some(*v),
            Field::State(_) => None,
        })
        .collect();
    vars.sort_unstable();
    vars.dedup();
    vars
}

/// Mixed-radix enumeration of one value per domain.
///
/// With no domains there is exactly one (empty) assignment.
#[derive(Clone, Debug)]
pub struct Odometer<'a> {
    domains: SmallVec<[&'a [State]; 4]>,
    digits: SmallVec<[usize; 4]>,
    exhausted: bool,
}

impl<'a> Odometer<'a> {
    /// Start at the first assignment of `domains`.
    pub fn new(domains: SmallVec<[&'a [State]; 4]>) -> Self {
        let exhausted = domains.iter().any(|d| d.is_empty());
        let digits = SmallVec::from_elem(0, domains.len());
        Self {
            domains,
            digits,
            exhausted,
        }
    }

    /// Total number of assignments.
    pub fn total(&self) -> u128 {
        self.domains.iter().map(|d| d.len() as u128).product()
    }

    /// Values of the current assignment, one per domain.
    pub fn value(&self) -> SmallVec<[State; 4]> {
        self.domains
            .iter()
            .zip(&self.digits)
            .map(|(d, &i)| d[i])
            .collect()
    }

    /// Step to the next assignment. Returns `false` once the counter wraps.
    pub fn advance(&mut self) -> bool {
        for (digit, domain) in self.digits.iter_mut().zip(&self.domains).rev() {
            *digit += 1;
            if *digit < domain.len() {
                return true;
            }
            *digit = 0;
        }
        self.exhausted = true;
        false
    }
}

impl Iterator for Odometer<'_> {
    type Item = SmallVec<[State; 4]>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let current = self.value();
        self.advance();
        Some(current)
    }
}

/// One clause field with its variable resolved to a position in
/// [`Template::vars`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Slot {
    /// A fixed state.
    Literal(State),
    /// The value at this index of each assignment.
    Bound(usize),
}

/// A clause whose fields index straight into an assignment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Template {
    vars: SmallVec<[VarId; 4]>,
    slots: [Slot; CLAUSE_FIELDS],
}

impl Template {
    /// Resolve every variable of `clause` against its own
    /// [`clause_variables`].
    pub fn new(clause: &Clause) -> Self {
        let vars = clause_variables(clause);
        let slots = clause.fields.map(|field| match field {
            Field::State(s) => Slot::Literal(s),
            // `vars` is sorted and holds `v`, so this is its index.
            Field::Var(v) => Slot::Bound(vars.partition_point(|&u| u < v)),
        });
        Self { vars, slots }
    }

    /// Variables an assignment must supply values for, in order.
    pub fn vars(&self) -> &[VarId] {
        &self.vars
    }

    /// Substitute one assignment, parallel to [`Template::vars`].
    ///
    /// Returns the nine input states and the next state.
    pub fn substitute(&self, values: &[State]) -> ([State; 9], State) {
        debug_assert_eq!(values.len(), self.vars.len(), "assignment width");
        let resolve = |slot: Slot| match slot {
            Slot::Literal(s) => s,
            Slot::Bound(i) => values[i],
        };
        let inputs = std::array::from_fn(|i| resolve(self.slots[i]));
        (inputs, resolve(self.slots[CLAUSE_FIELDS - 1]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    #[test]
    fn no_domains_yield_one_assignment() {
        let odo = Odometer::new(SmallVec::new());
        assert_eq!(odo.total(), 1);
        let all: Vec<_> = odo.collect();
        assert_eq!(all.len(), 1);
        assert!(all[0].is_empty());
    }

    #[test]
    fn last_domain_varies_fastest() {
        let a = [0, 1];
        let b = [5, 6, 7];
        let all: Vec<Vec<State>> = Odometer::new(smallvec![&a[..], &b[..]])
            .map(|v| v.to_vec())
            .collect();
        assert_eq!(
            all,
            vec![
                vec![0, 5],
                vec![0, 6],
                vec![0, 7],
                vec![1, 5],
                vec![1, 6],
                vec![1, 7],
            ]
        );
    }

    #[test]
    fn empty_domain_yields_nothing() {
        let a = [0, 1];
        let none: [State; 0] = [];
        assert_eq!(Odometer::new(smallvec![&a[..], &none[..]]).count(), 0);
    }

    #[test]
    fn duplicate_values_are_kept() {
        let a = [1, 1];
        assert_eq!(Odometer::new(smallvec![&a[..]]).count(), 2);
    }

    #[test]
    fn clause_variables_are_sorted_and_distinct() {
        let c = Clause::new(
            Field::Var(VarId(2)),
            [
                Field::Var(VarId(0)),
                Field::State(1),
                Field::Var(VarId(2)),
                Field::State(0),
                Field::Var(VarId(0)),
                Field::State(0),
                Field::State(0),
                Field::State(0),
            ],
            Field::Var(VarId(2)),
        );
        assert_eq!(clause_variables(&c).as_slice(), &[VarId(0), VarId(2)]);
    }

    #[test]
    fn substitute_binds_each_name_once() {
        let a = Field::Var(VarId(0));
        let c = Clause::new(a, [a, Field::State(1), a, a, a, a, a, a], a);
        let template = Template::new(&c);
        assert_eq!(template.vars(), &[VarId(0)]);
        let (inputs, next) = template.substitute(&[3]);
        assert_eq!(inputs, [3, 3, 1, 3, 3, 3, 3, 3, 3]);
        assert_eq!(next, 3);
    }

    #[test]
    fn sparse_variable_ids_bind_by_position() {
        let (lo, hi) = (Field::Var(VarId(4)), Field::Var(VarId(9)));
        let s = Field::State;
        let c = Clause::new(hi, [lo, s(2), hi, s(0), s(0), lo, s(0), s(0)], lo);
        let template = Template::new(&c);
        assert_eq!(template.vars(), &[VarId(4), VarId(9)]);
        assert_eq!(template.slots[0], Slot::Bound(1));
        assert_eq!(template.slots[1], Slot::Bound(0));
        assert_eq!(template.slots[2], Slot::Literal(2));

        let (inputs, next) = template.substitute(&[7, 5]);
        assert_eq!(inputs, [5, 7, 2, 5, 0, 0, 7, 0, 0]);
        assert_eq!(next, 7);
    }
}
