//! Compilation settings.

/// What a compiled table holds for configurations no clause covers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DefaultTransition {
    /// Leave them unmapped; [`CompiledTable::is_total`](crate::CompiledTable::is_total)
    /// reports the gap.
    #[default]
    Unmapped,
    /// Pre-seed every configuration with its own center state before
    /// emitting clauses, so omitted transitions mean "no change".
    Identity,
}

/// Configuration for [`compile_with`](crate::compile_with).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CompileConfig {
    /// Handling of configurations no clause covers. Default: `Unmapped`.
    pub default_transition: DefaultTransition,
    /// Worker threads for clause expansion. `None` = compile on the
    /// calling thread. Explicit values are clamped to `[1, 64]`.
    pub threads: Option<usize>,
    /// Largest `n_states^9` that identity seeding will materialize.
    /// Default: `1 << 27` (enough for 7 states).
    pub max_seed_configurations: u64,
}

impl Default for CompileConfig {
    fn default() -> Self {
        Self {
            default_transition: DefaultTransition::Unmapped,
            threads: None,
            max_seed_configurations: 1 << 27,
        }
    }
}

impl CompileConfig {
    /// Sequential compilation with unmapped gaps.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed unmapped configurations with the identity transition.
    pub fn with_identity_default(mut self) -> Self {
        self.default_transition = DefaultTransition::Identity;
        self
    }

    /// Expand clauses on `threads` worker threads.
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }

    /// Resolve the worker count. `None` means sequential.
    pub fn resolved_threads(&self) -> Option<usize> {
        self.threads.map(|n| n.clamp(1, 64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_sequential_and_unmapped() {
        let cfg = CompileConfig::default();
        assert_eq!(cfg.resolved_threads(), None);
        assert_eq!(cfg.default_transition, DefaultTransition::Unmapped);
        assert_eq!(cfg.max_seed_configurations, 134_217_728);
    }

    #[test]
    fn resolved_threads_clamps_zero() {
        let cfg = CompileConfig {
            threads: Some(0),
            ..CompileConfig::default()
        };
        assert_eq!(cfg.resolved_threads(), Some(1));
    }

    #[test]
    fn resolved_threads_clamps_large() {
        assert_eq!(CompileConfig::new().with_threads(200).resolved_threads(), Some(64));
    }

    #[test]
    fn builders_compose() {
        let cfg = CompileConfig::new().with_identity_default().with_threads(4);
        assert_eq!(cfg.default_transition, DefaultTransition::Identity);
        assert_eq!(cfg.resolved_threads(), Some(4));
    }
}
