//! Line-oriented parser for rule-table text.
//!
//! The input is split into `@SECTION` blocks. `@RULE` names the rule and
//! is followed by free description text. `@TABLE` (and anything before
//! the first header) holds parameters, variables and transitions; every
//! line there must be recognized. `@COLORS`, `@ICONS` and `@NAMES` carry
//! display metadata and are skipped verbatim.
//!
//! ```text
//! @RULE Life
//! @TABLE
//! n_states:2
//! neighborhood:Moore
//! symmetries:permute
//! var a={0,1}
//! 0,1,1,1,0,0,0,0,0,1
//! ```

use lifetree_core::State;
use tracing::{trace, warn};

use crate::error::ParseError;
use crate::spec::{Clause, Field, Neighborhood, RuleSpec, Symmetry, ValueSet, CLAUSE_FIELDS};

/// Largest `n_states` a rule table may declare.
pub const MAX_STATES: u32 = 256;

#[derive(Clone, Debug, PartialEq, Eq)]
enum Section {
    /// Before any `@` header. Treated as table scope.
    Preamble,
    Rule,
    Table,
    /// `@COLORS`, `@ICONS`, `@NAMES`.
    Metadata,
    /// Any other named section, e.g. `@TREE`. Its body is ignored.
    Unknown,
}

/// Parse rule-table text into a [`RuleSpec`].
///
/// # Errors
///
/// Returns the first [`ParseError`] encountered; every variant names the
/// 1-based line it refers to.
pub fn parse_rule(text: &str) -> Result<RuleSpec, ParseError> {
    let mut spec = RuleSpec::default();
    let mut section = Section::Preamble;

    for (index, raw) in text.lines().enumerate() {
        let line = index + 1;
        let trimmed = raw.trim();

        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        if let Some(header) = trimmed.strip_prefix('@') {
            section = open_section(header, line, &mut spec)?;
            trace!(line, ?section, "section");
            continue;
        }

        match section {
            Section::Metadata | Section::Unknown => continue,
            Section::Rule => {
                spec.description.push_str(trimmed);
                spec.description.push('\n');
                continue;
            }
            Section::Preamble | Section::Table => {}
        }

        let content = strip_comment(trimmed);
        if content.is_empty() {
            continue;
        }

        if is_variable_line(content) {
            parse_variable(content, line, &mut spec)?;
        } else if content.matches(':').count() == 1 {
            parse_parameter(content, line, &mut spec)?;
        } else if is_transition_shaped(content) {
            let clause = parse_transition(content, line, &spec)?;
            spec.clauses.push(clause);
        } else {
            return Err(ParseError::UnrecognizedLine {
                line,
                text: trimmed.to_string(),
            });
        }
    }

    Ok(spec)
}

fn open_section(header: &str, line: usize, spec: &mut RuleSpec) -> Result<Section, ParseError> {
    let (name, rest) = match header.find(char::is_whitespace) {
        Some(at) => (&header[..at], header[at..].trim()),
        None => (header, ""),
    };
    match name {
        "RULE" => {
            if !rest.is_empty() {
                spec.name = Some(rest.to_string());
            }
            Ok(Section::Rule)
        }
        "TABLE" => Ok(Section::Table),
        "COLORS" | "ICONS" | "NAMES" => Ok(Section::Metadata),
        "" => Err(ParseError::MalformedSection {
            line,
            reason: "empty section name".to_string(),
        }),
        other => {
            warn!(line, section = other, "skipping unsupported section");
            Ok(Section::Unknown)
        }
    }
}

fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(at) => line[..at].trim_end(),
        None => line,
    }
}

fn is_variable_line(line: &str) -> bool {
    line.strip_prefix("var")
        .is_some_and(|rest| rest.starts_with(char::is_whitespace) && rest.contains('='))
}

fn is_identifier(token: &str) -> bool {
    !token.is_empty()
        && token.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
        && !token.chars().all(|c| c.is_ascii_digit())
}

fn is_transition_shaped(line: &str) -> bool {
    line.contains(',')
        && line
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == ',' || c.is_whitespace())
}

fn parse_state(token: &str) -> Option<State> {
    if token.is_empty() || !token.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}

fn parse_parameter(line_text: &str, line: usize, spec: &mut RuleSpec) -> Result<(), ParseError> {
    let (key, value) = line_text.split_once(':').unwrap_or((line_text, ""));
    let key = key.trim();
    let value = value.trim();

    match key {
        "n_states" => {
            let n: u32 = value.parse().map_err(|_| ParseError::InvalidParameter {
                line,
                key: key.to_string(),
                reason: format!("'{value}' is not a state count"),
            })?;
            if !(2..=MAX_STATES).contains(&n) {
                return Err(ParseError::InvalidParameter {
                    line,
                    key: key.to_string(),
                    reason: format!("{n} is outside 2..={MAX_STATES}"),
                });
            }
            spec.n_states = n;
        }
        "neighborhood" => {
            spec.neighborhood = Neighborhood::from_name(value).ok_or_else(|| {
                ParseError::UnsupportedNeighborhood {
                    line,
                    value: value.to_string(),
                }
            })?;
        }
        "symmetries" | "symmetry" => {
            spec.symmetry =
                Symmetry::from_name(value).ok_or_else(|| ParseError::UnknownSymmetryGroup {
                    line,
                    name: value.to_string(),
                })?;
        }
        _ => {
            warn!(line, key, value, "unknown rule parameter kept verbatim");
            spec.parameters.insert(key.to_string(), value.to_string());
        }
    }
    Ok(())
}

fn parse_variable(line_text: &str, line: usize, spec: &mut RuleSpec) -> Result<(), ParseError> {
    let malformed = |reason: String| ParseError::MalformedVariable { line, reason };

    let body = line_text
        .strip_prefix("var")
        .unwrap_or(line_text)
        .trim_start();
    let (name, set) = body
        .split_once('=')
        .ok_or_else(|| malformed("missing '='".to_string()))?;
    let name = name.trim();
    if !is_identifier(name) {
        return Err(malformed(format!("'{name}' is not a valid variable name")));
    }
    if spec.variables.contains_key(name) {
        return Err(ParseError::DuplicateVariable {
            line,
            name: name.to_string(),
        });
    }

    let inner = set
        .trim()
        .strip_prefix('{')
        .and_then(|s| s.strip_suffix('}'))
        .ok_or_else(|| malformed("value set must be enclosed in '{...}'".to_string()))?;

    let mut values = ValueSet::new();
    for token in inner.split(',').map(str::trim) {
        if token.is_empty() {
            continue;
        }
        if let Some(state) = parse_state(token) {
            values.push(state);
        } else if let Some(existing) = spec.variables.get(token) {
            values.extend_from_slice(existing);
        } else {
            return Err(malformed(format!(
                "'{token}' is neither a state nor a declared variable"
            )));
        }
    }
    if values.is_empty() {
        return Err(malformed(format!("variable '{name}' has an empty value set")));
    }

    spec.variables.insert(name.to_string(), values);
    Ok(())
}

fn parse_transition(line_text: &str, line: usize, spec: &RuleSpec) -> Result<Clause, ParseError> {
    let malformed = |reason: String| ParseError::MalformedTransition { line, reason };

    let tokens: Vec<String> = line_text
        .split(',')
        .map(|t| t.chars().filter(|c| !c.is_whitespace()).collect())
        .collect();
    if tokens.len() != CLAUSE_FIELDS {
        return Err(malformed(format!(
            "expected {CLAUSE_FIELDS} fields, found {}",
            tokens.len()
        )));
    }

    let mut fields = [Field::State(0); CLAUSE_FIELDS];
    for (slot, token) in fields.iter_mut().zip(&tokens) {
        *slot = if token.is_empty() {
            return Err(malformed("empty field".to_string()));
        } else if token.chars().all(|c| c.is_ascii_digit()) {
            let state =
                parse_state(token).ok_or_else(|| malformed(format!("state '{token}' overflows")))?;
            Field::State(state)
        } else if let Some(id) = spec.variable_id(token) {
            Field::Var(id)
        } else {
            return Err(malformed(format!("unknown variable '{token}'")));
        };
    }

    Ok(Clause { fields, line })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::VarId;

    // ── Parameters ──────────────────────────────────────────────

    #[test]
    fn defaults_without_parameters() {
        let spec = parse_rule("@TABLE\n").unwrap();
        assert_eq!(spec.n_states, 2);
        assert_eq!(spec.neighborhood, Neighborhood::Moore);
        assert_eq!(spec.symmetry, Symmetry::Permute);
        assert!(spec.clauses.is_empty());
        assert_eq!(spec.name, None);
    }

    #[test]
    fn reads_global_parameters() {
        let spec = parse_rule(
            "@RULE Test\n@TABLE\nn_states:5\nneighborhood: moore \nsymmetries:rotate4reflect\n",
        )
        .unwrap();
        assert_eq!(spec.name.as_deref(), Some("Test"));
        assert_eq!(spec.n_states, 5);
        assert_eq!(spec.symmetry, Symmetry::Rotate4Reflect);
    }

    #[test]
    fn symmetry_alias_key() {
        let spec = parse_rule("symmetry:none\n").unwrap();
        assert_eq!(spec.symmetry, Symmetry::None);
    }

    #[test]
    fn unknown_parameters_are_kept() {
        let spec = parse_rule("@TABLE\nauthor:someone\n").unwrap();
        assert_eq!(
            spec.parameters.get("author").map(String::as_str),
            Some("someone")
        );
    }

    #[test]
    fn non_moore_neighborhood_fails() {
        let err = parse_rule("@TABLE\nn_states:2\nneighborhood:vonNeumann\n").unwrap_err();
        assert_eq!(
            err,
            ParseError::UnsupportedNeighborhood {
                line: 3,
                value: "vonNeumann".into()
            }
        );
    }

    #[test]
    fn unknown_symmetry_fails() {
        let err = parse_rule("@TABLE\nsymmetries:rotate8reflect\n").unwrap_err();
        assert!(matches!(
            err,
            ParseError::UnknownSymmetryGroup { line: 2, ref name } if name == "rotate8reflect"
        ));
    }

    #[test]
    fn bad_state_count_fails() {
        for bad in ["n_states:1", "n_states:257", "n_states:many"] {
            let err = parse_rule(bad).unwrap_err();
            assert!(
                matches!(err, ParseError::InvalidParameter { line: 1, .. }),
                "{bad}: {err}"
            );
        }
    }

    // ── Sections ────────────────────────────────────────────────

    #[test]
    fn rule_section_collects_description() {
        let spec = parse_rule("@RULE Foo\n\nA rule: with colons, and commas.\n@TABLE\n").unwrap();
        assert_eq!(spec.name.as_deref(), Some("Foo"));
        assert_eq!(spec.description, "A rule: with colons, and commas.\n");
    }

    #[test]
    fn metadata_sections_are_skipped() {
        let text = "@TABLE\nn_states:3\n@COLORS\n1 255 0 0\n@ICONS\nXPM\n\"7 7 2 1\"\n";
        let spec = parse_rule(text).unwrap();
        assert_eq!(spec.n_states, 3);
        assert!(spec.clauses.is_empty());
    }

    #[test]
    fn unsupported_sections_are_skipped() {
        let text = "@TABLE\nn_states:3\n@TREE\nnum_states=2\n1 0 0 0\n@TABLE\n0,0,0,0,0,0,0,0,0,1\n";
        let spec = parse_rule(text).unwrap();
        assert_eq!(spec.n_states, 3);
        assert_eq!(spec.clauses.len(), 1);
        assert_eq!(spec.clauses[0].line, 7);

        let spec = parse_rule("@TREE\nnum_states=2\n").unwrap();
        assert!(spec.clauses.is_empty());
    }

    #[test]
    fn empty_section_name_fails() {
        let err = parse_rule("@\n").unwrap_err();
        assert!(matches!(err, ParseError::MalformedSection { line: 1, .. }));
        let err = parse_rule("@TABLE\n@   \n").unwrap_err();
        assert!(matches!(err, ParseError::MalformedSection { line: 2, .. }));
    }

    #[test]
    fn comments_and_blank_lines_are_ignored() {
        let spec = parse_rule("# header\n\n   \n@TABLE\n# note\nn_states:2 # trailing\n").unwrap();
        assert_eq!(spec.n_states, 2);
    }

    // ── Variables ───────────────────────────────────────────────

    #[test]
    fn variables_keep_order_and_duplicates() {
        let spec = parse_rule("@TABLE\nvar b={2,0,2}\nvar a = { 1 , 0 }\n").unwrap();
        let names: Vec<_> = spec.variables.keys().cloned().collect();
        assert_eq!(names, vec!["b", "a"]);
        assert_eq!(spec.variables["b"].as_slice(), &[2, 0, 2]);
        assert_eq!(spec.variables["a"].as_slice(), &[1, 0]);
    }

    #[test]
    fn variables_can_reference_earlier_variables() {
        let spec = parse_rule("@TABLE\nn_states:4\nvar a={0,1}\nvar b={a,3}\n").unwrap();
        assert_eq!(spec.variables["b"].as_slice(), &[0, 1, 3]);
    }

    #[test]
    fn malformed_variables_fail() {
        for (text, line) in [
            ("var a={}", 1),
            ("var a=0,1", 1),
            ("@TABLE\nvar a={0,q}", 2),
            ("var 12={0}", 1),
        ] {
            let err = parse_rule(text).unwrap_err();
            assert!(
                matches!(err, ParseError::MalformedVariable { line: l, .. } if l == line),
                "{text}: {err}"
            );
        }
    }

    #[test]
    fn duplicate_variable_fails() {
        let err = parse_rule("var a={0}\nvar a={1}\n").unwrap_err();
        assert_eq!(
            err,
            ParseError::DuplicateVariable {
                line: 2,
                name: "a".into()
            }
        );
    }

    // ── Transitions ─────────────────────────────────────────────

    #[test]
    fn parses_literal_and_variable_fields() {
        let spec = parse_rule("@TABLE\nvar a={0,1}\n0, a,1,1 ,0,0,0,0,0,  1\n").unwrap();
        assert_eq!(spec.clauses.len(), 1);
        let clause = spec.clauses[0];
        assert_eq!(clause.line, 3);
        assert_eq!(clause.center(), Field::State(0));
        assert_eq!(clause.neighbors()[0], Field::Var(VarId(0)));
        assert_eq!(clause.neighbors()[1], Field::State(1));
        assert_eq!(clause.next(), Field::State(1));
    }

    #[test]
    fn multi_character_variable_names() {
        let spec = parse_rule("var any={0,1}\nany,any,0,0,0,0,0,0,0,any\n").unwrap();
        assert_eq!(spec.clauses[0].center(), Field::Var(VarId(0)));
    }

    #[test]
    fn trailing_comment_on_transition() {
        let spec = parse_rule("0,1,1,1,0,0,0,0,0,1 # birth\n").unwrap();
        assert_eq!(spec.clauses.len(), 1);
    }

    #[test]
    fn wrong_field_count_reports_line() {
        let err = parse_rule("@TABLE\nn_states:2\n0,1,1,1,0,0,0,0,1\n").unwrap_err();
        assert_eq!(
            err,
            ParseError::MalformedTransition {
                line: 3,
                reason: "expected 10 fields, found 9".into()
            }
        );
        assert_eq!(err.line(), 3);
    }

    #[test]
    fn unknown_token_reports_line() {
        let err = parse_rule("@TABLE\n0,1,1,q,0,0,0,0,0,1\n").unwrap_err();
        assert!(matches!(
            err,
            ParseError::MalformedTransition { line: 2, ref reason } if reason.contains("'q'")
        ));
    }

    #[test]
    fn empty_field_fails() {
        let err = parse_rule("0,1,,1,0,0,0,0,0,1\n").unwrap_err();
        assert!(matches!(err, ParseError::MalformedTransition { line: 1, .. }));
    }

    #[test]
    fn variable_used_before_declaration_fails() {
        let err = parse_rule("a,0,0,0,0,0,0,0,0,0\nvar a={0,1}\n").unwrap_err();
        assert!(matches!(err, ParseError::MalformedTransition { line: 1, .. }));
    }

    #[test]
    fn unrecognized_line_fails() {
        let err = parse_rule("@TABLE\nn_states:2\nthis is not a table line!\n").unwrap_err();
        assert_eq!(
            err,
            ParseError::UnrecognizedLine {
                line: 3,
                text: "this is not a table line!".into()
            }
        );
    }

    #[test]
    fn from_str_delegates_to_parser() {
        let spec: RuleSpec = "n_states:3\n".parse().unwrap();
        assert_eq!(spec.n_states, 3);
    }
}
