//! Benchmark profiles for the Lifetree rule compiler.
//!
//! - [`synthetic_rule`]: a seeded random rule table of a chosen size
//! - [`synthetic_rule_text`]: the same rule rendered as rule-table text

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::fmt::Write as _;

use lifetree_rule::{Clause, Field, RuleSpec, Symmetry};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Build a random rule with `clauses` clauses over `n_states` states.
///
/// Two variables are declared: `a` over every state and `b` over
/// `{0, 1}`. Each clause field is a literal with probability 3/4,
/// otherwise one of the variables; the next state is a literal or the
/// center variable when the center is one.
pub fn synthetic_rule(seed: u64, n_states: u32, clauses: usize, symmetry: Symmetry) -> RuleSpec {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut spec = RuleSpec::new(n_states, symmetry);
    let a = spec.declare_variable("a", 0..n_states);
    let b = spec.declare_variable("b", [0, 1]);

    for _ in 0..clauses {
        let field = |rng: &mut ChaCha8Rng| match rng.random_range(0..8u32) {
            0 => Field::Var(a),
            1 => Field::Var(b),
            _ => Field::State(rng.random_range(0..n_states)),
        };
        let center = field(&mut rng);
        let ring: [Field; 8] = std::array::from_fn(|_| field(&mut rng));
        let next = match center {
            Field::Var(_) if rng.random_bool(0.5) => center,
            _ => Field::State(rng.random_range(0..n_states)),
        };
        spec.push_clause(Clause::new(center, ring, next));
    }
    spec
}

/// Render a rule produced by [`synthetic_rule`] as rule-table text.
pub fn synthetic_rule_text(seed: u64, n_states: u32, clauses: usize, symmetry: Symmetry) -> String {
    let spec = synthetic_rule(seed, n_states, clauses, symmetry);
    let mut text = String::new();
    let _ = writeln!(text, "@RULE Synthetic{seed}\n@TABLE");
    let _ = writeln!(text, "n_states:{n_states}\nneighborhood:Moore\nsymmetries:{symmetry}");
    for (name, values) in &spec.variables {
        let list: Vec<String> = values.iter().map(u32::to_string).collect();
        let _ = writeln!(text, "var {name}={{{}}}", list.join(","));
    }
    for clause in &spec.clauses {
        let fields: Vec<String> = clause
            .fields
            .iter()
            .map(|f| match f {
                Field::State(s) => s.to_string(),
                Field::Var(id) => spec
                    .variable(*id)
                    .map(|(name, _)| name.to_string())
                    .unwrap_or_default(),
            })
            .collect();
        let _ = writeln!(text, "{}", fields.join(","));
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn synthetic_rule_is_seeded() {
        let a = synthetic_rule(5, 3, 20, Symmetry::Rotate8);
        let b = synthetic_rule(5, 3, 20, Symmetry::Rotate8);
        assert_eq!(a, b);
        assert_eq!(a.clauses.len(), 20);
        lifetree_rule::validate(&a).unwrap();
    }

    #[test]
    fn text_parses_back_to_the_same_rule() {
        let text = synthetic_rule_text(11, 4, 12, Symmetry::Rotate4Reflect);
        let parsed = lifetree_rule::parse_rule(&text).unwrap();
        let built = synthetic_rule(11, 4, 12, Symmetry::Rotate4Reflect);
        assert_eq!(parsed.variables, built.variables);
        assert_eq!(parsed.symmetry, built.symmetry);
        let fields: Vec<_> = parsed.clauses.iter().map(|c| c.fields).collect();
        let want: Vec<_> = built.clauses.iter().map(|c| c.fields).collect();
        assert_eq!(fields, want);
    }
}
