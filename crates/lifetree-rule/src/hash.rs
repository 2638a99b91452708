//! Fingerprinting of compiled tables.
//!
//! Uses FNV-1a over the entries in ascending key order, so two tables
//! with the same mapping hash equal regardless of how they were built.
//! Not cryptographically secure; only used for fast equality checks.

use lifetree_core::State;

use crate::packing::PackedKey;

/// FNV-1a offset basis for 64-bit.
const FNV_OFFSET: u64 = 0xcbf29ce484222325;
/// FNV-1a prime for 64-bit.
const FNV_PRIME: u64 = 0x00000100000001B3;

#[inline]
fn fnv1a_bytes(mut hash: u64, bytes: &[u8]) -> u64 {
    for &b in bytes {
        hash = (hash ^ b as u64).wrapping_mul(FNV_PRIME);
    }
    hash
}

/// Hash `(key, next_state)` pairs, which must already be sorted by key.
///
/// Each key is fed as 16 LE bytes and each state as 4 LE bytes. An empty
/// table hashes to the offset basis.
pub fn entries_hash<'a, I>(sorted: I) -> u64
where
    I: IntoIterator<Item = (&'a PackedKey, &'a State)>,
{
    sorted.into_iter().fold(FNV_OFFSET, |hash, (key, state)| {
        let hash = fnv1a_bytes(hash, &key.to_le_bytes());
        fnv1a_bytes(hash, &state.to_le_bytes())
    })
}
