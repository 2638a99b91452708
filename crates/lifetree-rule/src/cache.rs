//! Memoization of compiled tables.
//!
//! [`TableCache`] compiles rule text on first use and returns the shared
//! table for any later text that normalizes to the same key. The key drops
//! everything that cannot change the compiled table: comments, blank
//! lines, the `@RULE` description, display metadata sections and
//! insignificant whitespace. Each cache holds a single [`CompileConfig`],
//! so the configuration is not part of the key.

use std::sync::Arc;

use indexmap::IndexMap;
use tracing::debug;

use crate::compile::compile_str;
use crate::config::CompileConfig;
use crate::error::CompileError;
use crate::table::CompiledTable;

/// Caller-owned cache of compiled rule tables.
///
/// # Example
///
/// ```
/// use lifetree_rule::{CompileConfig, TableCache};
///
/// let mut cache = TableCache::new(CompileConfig::default());
/// let a = cache.get_or_compile("n_states:2\n0,1,1,1,0,0,0,0,0,1\n").unwrap();
/// let b = cache
///     .get_or_compile("# birth\nn_states : 2\n0, 1, 1, 1, 0, 0, 0, 0, 0, 1\n")
///     .unwrap();
/// assert!(std::sync::Arc::ptr_eq(&a, &b));
/// assert_eq!(cache.hits(), 1);
/// ```
#[derive(Debug)]
pub struct TableCache {
    config: CompileConfig,
    capacity: Option<usize>,
    tables: IndexMap<String, Arc<CompiledTable>>,
    hits: u64,
    misses: u64,
}

impl TableCache {
    /// Unbounded cache compiling with `config`.
    pub fn new(config: CompileConfig) -> Self {
        Self {
            config,
            capacity: None,
            tables: IndexMap::new(),
            hits: 0,
            misses: 0,
        }
    }

    /// Cache holding at most `capacity` tables (at least 1); the oldest
    /// entry is evicted first.
    pub fn with_capacity(config: CompileConfig, capacity: usize) -> Self {
        Self {
            capacity: Some(capacity.max(1)),
            ..Self::new(config)
        }
    }

    /// The configuration every table in this cache is compiled with.
    pub fn config(&self) -> &CompileConfig {
        &self.config
    }

    /// Return the cached table for `text`, compiling it on a miss.
    ///
    /// Failed compilations are not cached.
    ///
    /// # Errors
    ///
    /// Any [`CompileError`] from parsing or compiling `text`.
    pub fn get_or_compile(&mut self, text: &str) -> Result<Arc<CompiledTable>, CompileError> {
        let key = normalize_rule_text(text);
        if let Some(table) = self.tables.get(&key) {
            self.hits += 1;
            debug!(hits = self.hits, "table cache hit");
            return Ok(Arc::clone(table));
        }

        self.misses += 1;
        debug!(misses = self.misses, "table cache miss");
        let table = Arc::new(compile_str(text, &self.config)?);

        if let Some(capacity) = self.capacity {
            while self.tables.len() >= capacity {
                if self.tables.shift_remove_index(0).is_some() {
                    debug!(capacity, "table cache eviction");
                }
            }
        }
        self.tables.insert(key, Arc::clone(&table));
        Ok(table)
    }

    /// The cached table for `text`, without compiling or counting.
    pub fn get(&self, text: &str) -> Option<Arc<CompiledTable>> {
        self.tables.get(&normalize_rule_text(text)).cloned()
    }

    /// Whether a table for `text` is cached.
    pub fn contains(&self, text: &str) -> bool {
        self.tables.contains_key(&normalize_rule_text(text))
    }

    /// Drop the cached table for `text`. Returns whether one was present.
    pub fn invalidate(&mut self, text: &str) -> bool {
        self.tables
            .shift_remove(&normalize_rule_text(text))
            .is_some()
    }

    /// Drop every cached table. Counters are kept.
    pub fn clear(&mut self) {
        self.tables.clear();
    }

    /// Number of cached tables.
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Lookups answered from the cache.
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// Lookups that required compilation.
    pub fn misses(&self) -> u64 {
        self.misses
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Scope {
    Table,
    /// `@RULE`, metadata and unsupported sections.
    Ignored,
}

/// Reduce rule text to the parts that determine its compiled table.
///
/// Lines are trimmed; blank and `#` lines are dropped; the bodies of
/// every section other than `@TABLE` are dropped, as the parser ignores
/// them; section headers are kept with single spaces. In table scope, inline
/// comments are removed, whitespace runs collapse to one space and
/// whitespace next to `, : = { }` is removed.
pub fn normalize_rule_text(text: &str) -> String {
    let mut scope = Scope::Table;
    let mut lines: Vec<String> = Vec::new();

    for raw in text.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some(header) = line.strip_prefix('@') {
            scope = match header.split_whitespace().next() {
                Some("TABLE") => Scope::Table,
                _ => Scope::Ignored,
            };
            lines.push(line.split_whitespace().collect::<Vec<_>>().join(" "));
            continue;
        }
        match scope {
            Scope::Ignored => {}
            Scope::Table => {
                let content = line.split('#').next().unwrap_or("");
                let squashed = squash_whitespace(content);
                if !squashed.is_empty() {
                    lines.push(squashed);
                }
            }
        }
    }
    lines.join("\n")
}

fn squash_whitespace(content: &str) -> String {
    const TIGHT: &[char] = &[',', ':', '=', '{', '}'];
    let joined = content.split_whitespace().collect::<Vec<_>>().join(" ");
    let chars: Vec<char> = joined.chars().collect();
    let mut out = String::with_capacity(joined.len());
    for (i, &c) in chars.iter().enumerate() {
        if c == ' ' {
            let before = i.checked_sub(1).map(|j| chars[j]);
            let after = chars.get(i + 1).copied();
            let tight = |c: Option<char>| c.is_some_and(|c| TIGHT.contains(&c));
            if tight(before) || tight(after) {
                continue;
            }
        }
        out.push(c);
    }
    out
}
