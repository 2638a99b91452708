//! Compile a [`RuleSpec`] into a [`CompiledTable`].
//!
//! Every clause is expanded over the declared symmetry group, every
//! expansion over all assignments of its variables, and each resulting
//! concrete transition is written into the table. Writes happen in clause
//! order, then expansion order, then assignment order, and a later write
//! to the same key replaces an earlier one.
//!
//! With [`CompileConfig::threads`] set, clauses are expanded on a scoped
//! worker pool. Each worker folds one clause into a partial map, in which
//! the clause's own later writes have already replaced its earlier ones.
//! The calling thread applies partials strictly in clause order, so the
//! result is the same table the sequential path builds. At most twice as
//! many clauses as workers are in flight at once, which bounds the
//! partials held in memory.

use std::collections::{BTreeMap, HashMap};

use lifetree_core::State;
use smallvec::SmallVec;
use tracing::{debug, info};

use crate::assign::{clause_variables, Odometer, Template};
use crate::config::{CompileConfig, DefaultTransition};
use crate::error::CompileError;
use crate::packing::{PackedKey, Packing};
use crate::parser::{parse_rule, MAX_STATES};
use crate::spec::{Field, RuleSpec};
use crate::symmetry::expand;
use crate::table::CompiledTable;

/// Progress snapshot passed to the callback of [`compile_with_progress`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CompileProgress {
    /// Clauses whose entries have been written.
    pub clauses_done: usize,
    /// Total clauses in the rule.
    pub clauses_total: usize,
    /// Distinct keys in the table so far.
    pub entries_written: usize,
}

/// Check a rule for errors that would make compilation ambiguous.
///
/// Parsed rules already satisfy most of this; rules built in code may not.
///
/// # Errors
///
/// - [`CompileError::InvalidStateCount`] if `n_states` is outside `2..=256`.
/// - [`CompileError::UndeclaredVariable`] for a dangling [`VarId`](crate::VarId).
/// - [`CompileError::StateOutOfRange`] for a literal or variable value
///   `>= n_states`.
/// - [`CompileError::UnboundOutputVariable`] if the next-state variable
///   appears in none of the nine inputs.
pub fn validate(spec: &RuleSpec) -> Result<(), CompileError> {
    let n_states = spec.n_states;
    if !(2..=MAX_STATES).contains(&n_states) {
        return Err(CompileError::InvalidStateCount { n_states });
    }

    for (clause_index, clause) in spec.clauses.iter().enumerate() {
        let line = clause.line;
        let out_of_range = |state: State| CompileError::StateOutOfRange {
            clause: clause_index,
            line,
            state,
            n_states,
        };

        for field in &clause.fields {
            match *field {
                Field::State(s) if s >= n_states => return Err(out_of_range(s)),
                Field::State(_) => {}
                Field::Var(id) => {
                    let (_, values) = spec.variable(id).ok_or(CompileError::UndeclaredVariable {
                        clause: clause_index,
                        line,
                        index: id.0,
                    })?;
                    if let Some(&s) = values.iter().find(|&&s| s >= n_states) {
                        return Err(out_of_range(s));
                    }
                }
            }
        }

        if let Field::Var(id) = clause.next() {
            if !clause.inputs().contains(&Field::Var(id)) {
                let name = spec.variable(id).map(|(n, _)| n).unwrap_or_default();
                return Err(CompileError::UnboundOutputVariable {
                    clause: clause_index,
                    line,
                    name: name.to_string(),
                });
            }
        }
    }
    Ok(())
}

/// Compile with the default configuration.
///
/// # Errors
///
/// See [`validate`].
pub fn compile(spec: &RuleSpec) -> Result<CompiledTable, CompileError> {
    compile_with(spec, &CompileConfig::default())
}

/// Parse rule-table text and compile it.
///
/// # Errors
///
/// [`CompileError::Parse`] for parse failures, otherwise as [`compile_with`].
pub fn compile_str(text: &str, config: &CompileConfig) -> Result<CompiledTable, CompileError> {
    let spec = parse_rule(text)?;
    compile_with(&spec, config)
}

/// Compile with an explicit configuration.
///
/// # Errors
///
/// See [`validate`]. With [`DefaultTransition::Identity`], also
/// [`CompileError::SeedTooLarge`] when `n_states^9` exceeds
/// [`CompileConfig::max_seed_configurations`].
pub fn compile_with(spec: &RuleSpec, config: &CompileConfig) -> Result<CompiledTable, CompileError> {
    compile_with_progress(spec, config, |_| {})
}

/// Compile, calling `progress` on the calling thread after each clause's
/// entries are written.
///
/// # Errors
///
/// As [`compile_with`].
#[tracing::instrument(
    skip_all,
    fields(rule = spec.name.as_deref().unwrap_or(""), n_states = spec.n_states)
)]
pub fn compile_with_progress<F>(
    spec: &RuleSpec,
    config: &CompileConfig,
    mut progress: F,
) -> Result<CompiledTable, CompileError>
where
    F: FnMut(CompileProgress),
{
    validate(spec)?;
    let packing = Packing::new(spec.n_states);
    let mut table = seed_table(spec, packing, config)?;

    let clauses_total = spec.clauses.len();
    let mut report = |table: &CompiledTable, clauses_done: usize| {
        progress(CompileProgress {
            clauses_done,
            clauses_total,
            entries_written: table.len(),
        });
    };

    match config.resolved_threads() {
        None => {
            for index in 0..clauses_total {
                emit_clause(spec, packing, index, |key, next| table.insert(key, next));
                report(&table, index + 1);
            }
        }
        Some(threads) => {
            debug!(threads, clauses = clauses_total, "parallel expansion");
            emit_parallel(spec, packing, threads, &mut table, &mut report);
        }
    }

    info!(
        entries = table.len(),
        total = table.is_total(),
        "compiled rule table"
    );
    Ok(table)
}

fn seed_table(
    spec: &RuleSpec,
    packing: Packing,
    config: &CompileConfig,
) -> Result<CompiledTable, CompileError> {
    match config.default_transition {
        DefaultTransition::Unmapped => Ok(CompiledTable::new(spec.name.clone(), packing)),
        DefaultTransition::Identity => {
            let configurations = packing.configurations();
            let limit = config.max_seed_configurations;
            if configurations > u128::from(limit) {
                return Err(CompileError::SeedTooLarge {
                    configurations,
                    limit,
                });
            }
            let capacity = usize::try_from(configurations).unwrap_or(usize::MAX);
            let mut table = CompiledTable::with_capacity(spec.name.clone(), packing, capacity);
            table.extend(
                packing
                    .all_inputs()
                    .map(|inputs| (packing.pack(&inputs), inputs[0])),
            );
            debug!(configurations = table.len(), "identity seed");
            Ok(table)
        }
    }
}

/// Feed every concrete `(key, next)` write of one clause to `sink`, in
/// emission order.
fn emit_clause<S>(spec: &RuleSpec, packing: Packing, index: usize, mut sink: S)
where
    S: FnMut(PackedKey, State),
{
    let clause = &spec.clauses[index];
    let vars = clause_variables(clause);
    let domains: SmallVec<[&[State]; 4]> = vars
        .iter()
        .filter_map(|&id| spec.variable(id).map(|(_, values)| values))
        .collect();
    debug_assert_eq!(domains.len(), vars.len(), "validated clause has undeclared variables");

    let expansions = expand(clause, spec.symmetry);
    let assignments = Odometer::new(domains.clone()).total();
    for expanded in &expansions {
        let template = Template::new(expanded);
        debug_assert_eq!(template.vars(), vars.as_slice());
        for values in Odometer::new(domains.clone()) {
            let (inputs, next) = template.substitute(&values);
            sink(packing.pack(&inputs), next);
        }
    }

    debug!(
        clause = index,
        line = clause.line,
        expansions = expansions.len(),
        assignments = %assignments,
        "expanded clause"
    );
}

fn emit_parallel<R>(
    spec: &RuleSpec,
    packing: Packing,
    threads: usize,
    table: &mut CompiledTable,
    report: &mut R,
) where
    R: FnMut(&CompiledTable, usize),
{
    let clauses_total = spec.clauses.len();
    if clauses_total == 0 {
        return;
    }
    let workers = threads.min(clauses_total);
    let window = workers * 2;
    let (job_tx, job_rx) = crossbeam_channel::unbounded::<usize>();
    let (part_tx, part_rx) = crossbeam_channel::bounded::<(usize, HashMap<PackedKey, State>)>(window);

    std::thread::scope(|scope| {
        for _ in 0..workers {
            let job_rx = job_rx.clone();
            let part_tx = part_tx.clone();
            scope.spawn(move || {
                for index in job_rx.iter() {
                    let mut part = HashMap::new();
                    emit_clause(spec, packing, index, |key, next| {
                        part.insert(key, next);
                    });
                    if part_tx.send((index, part)).is_err() {
                        break;
                    }
                }
            });
        }
        drop(part_tx);

        // Clause `i` is only dispatched once clause `i - window` is applied,
        // so `pending` never holds more than `window` partials.
        let mut job_tx = Some(job_tx);
        let mut pending: BTreeMap<usize, HashMap<PackedKey, State>> = BTreeMap::new();
        let mut sent = 0;
        let mut next = 0;
        while next < clauses_total {
            while sent < clauses_total.min(next + window) {
                if let Some(tx) = &job_tx {
                    let _ = tx.send(sent);
                }
                sent += 1;
            }
            if sent == clauses_total {
                job_tx = None;
            }

            let Ok((index, part)) = part_rx.recv() else {
                break;
            };
            pending.insert(index, part);
            while let Some(part) = pending.remove(&next) {
                table.extend(part);
                next += 1;
                report(&*table, next);
            }
        }
    });
}
