//! The compiled transition table.

use std::collections::HashMap;

use lifetree_core::State;

use crate::hash::entries_hash;
use crate::packing::{PackedKey, Packing, INPUTS};

/// Mapping from packed neighborhood keys to next states.
///
/// Produced by [`compile`](crate::compile). Keys follow the [`Packing`]
/// contract; see [`packing`](crate::packing) for the bit layout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompiledTable {
    name: Option<String>,
    packing: Packing,
    entries: HashMap<PackedKey, State>,
}

impl CompiledTable {
    pub(crate) fn new(name: Option<String>, packing: Packing) -> Self {
        Self {
            name,
            packing,
            entries: HashMap::new(),
        }
    }

    pub(crate) fn with_capacity(name: Option<String>, packing: Packing, capacity: usize) -> Self {
        Self {
            name,
            packing,
            entries: HashMap::with_capacity(capacity),
        }
    }

    pub(crate) fn insert(&mut self, key: PackedKey, next: State) {
        self.entries.insert(key, next);
    }

    pub(crate) fn extend<I: IntoIterator<Item = (PackedKey, State)>>(&mut self, entries: I) {
        self.entries.extend(entries);
    }

    /// Rule name from the `@RULE` header, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The packing contract keys were built with.
    pub fn packing(&self) -> Packing {
        self.packing
    }

    /// Number of states.
    pub fn n_states(&self) -> u32 {
        self.packing.n_states()
    }

    /// Next state for a packed key.
    pub fn lookup(&self, key: PackedKey) -> Option<State> {
        self.entries.get(&key).copied()
    }

    /// Next state for nine input states (center, then clockwise ring).
    pub fn next_state(&self, inputs: &[State; INPUTS]) -> Option<State> {
        self.lookup(self.packing.pack(inputs))
    }

    /// Number of mapped configurations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no configuration is mapped.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether every one of the `n_states^9` configurations is mapped.
    pub fn is_total(&self) -> bool {
        self.entries.len() as u128 == self.packing.configurations()
    }

    /// Number of unmapped configurations.
    pub fn missing_count(&self) -> u128 {
        self.packing.configurations() - self.entries.len() as u128
    }

    /// Unmapped configurations, in [`Packing::all_inputs`] order.
    ///
    /// Walks the whole configuration space; intended for small state counts.
    pub fn missing(&self) -> impl Iterator<Item = [State; INPUTS]> + '_ {
        self.packing
            .all_inputs()
            .filter(move |inputs| !self.entries.contains_key(&self.packing.pack(inputs)))
    }

    /// Entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (PackedKey, State)> + '_ {
        self.entries.iter().map(|(&k, &s)| (k, s))
    }

    /// Entries sorted by key.
    pub fn sorted_entries(&self) -> Vec<(PackedKey, State)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_unstable_by_key(|&(k, _)| k);
        entries
    }

    /// Order-independent 64-bit fingerprint of the mapping.
    ///
    /// Two tables with the same entries fingerprint equal; the name is not
    /// included.
    pub fn fingerprint(&self) -> u64 {
        let sorted = self.sorted_entries();
        entries_hash(sorted.iter().map(|(k, s)| (k, s)))
    }
}
