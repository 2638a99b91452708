//! Test fixtures and seeded pattern generators for Lifetree development.
//!
//! [`fixtures`] holds sample rule texts and named patterns. The functions
//! here build reproducible random grids from a `u64` seed.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use lifetree_core::{SparseGrid, State};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Random soup of state-1 cells in `[0, width) x [0, height)`.
///
/// Each cell is alive with probability `density` (clamped to `[0, 1]`).
/// The same seed always produces the same grid.
pub fn random_grid(seed: u64, width: i64, height: i64, density: f64) -> SparseGrid {
    random_multistate_grid(seed, width, height, density, 2)
}

/// Random soup whose live cells take states in `1..n_states`.
pub fn random_multistate_grid(
    seed: u64,
    width: i64,
    height: i64,
    density: f64,
    n_states: State,
) -> SparseGrid {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let density = density.clamp(0.0, 1.0);
    let top = n_states.max(2);
    let mut grid = SparseGrid::new();
    for y in 0..height {
        for x in 0..width {
            if rng.random_bool(density) {
                grid.insert((x, y), rng.random_range(1..top));
            }
        }
    }
    grid
}

/// Random soup that is guaranteed to have at least one live cell.
pub fn random_nonempty_grid(seed: u64, width: i64, height: i64, density: f64) -> SparseGrid {
    let mut grid = random_grid(seed, width, height, density);
    if grid.is_empty() {
        grid.insert((0, 0), 1);
    }
    grid
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_grid() {
        assert_eq!(random_grid(7, 16, 16, 0.5), random_grid(7, 16, 16, 0.5));
        assert_ne!(random_grid(7, 16, 16, 0.5), random_grid(8, 16, 16, 0.5));
    }

    #[test]
    fn cells_stay_in_bounds() {
        let grid = random_multistate_grid(3, 10, 4, 0.7, 5);
        assert!(grid
            .iter()
            .all(|((x, y), s)| (0..10).contains(&x) && (0..4).contains(&y) && (1..5).contains(&s)));
    }

    #[test]
    fn density_extremes() {
        assert!(random_grid(1, 8, 8, 0.0).is_empty());
        assert_eq!(random_grid(1, 8, 8, 1.0).len(), 64);
        assert_eq!(random_nonempty_grid(1, 8, 8, 0.0).len(), 1);
    }
}
