//! Sparse two-dimensional grids.
//!
//! A [`SparseGrid`] maps live coordinates to positive states. State 0 is
//! the background and is never stored: every constructor and mutator
//! prunes it, so `len()` is always the live population.

use std::collections::BTreeMap;

use crate::bbox::BoundingBox;
use crate::error::GridError;
use crate::transform::Transform;

/// Integer cell coordinate `(x, y)`. `y` grows downwards.
pub type Coord = (i64, i64);

/// Cell state. 0 is the dead/background state.
pub type State = u32;

/// A sparse, unbounded grid of live cells.
///
/// Backed by a `BTreeMap` so iteration order (and therefore every value
/// derived from it) is deterministic.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct SparseGrid {
    cells: BTreeMap<Coord, State>,
}

impl SparseGrid {
    /// Create an empty grid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a grid from `(coord, state)` pairs, dropping zero states.
    ///
    /// Later pairs for the same coordinate replace earlier ones.
    pub fn from_cells<I>(cells: I) -> Self
    where
        I: IntoIterator<Item = (Coord, State)>,
    {
        let mut grid = Self::new();
        for (coord, state) in cells {
            grid.insert(coord, state);
        }
        grid
    }

    /// Build a grid with state 1 at every given coordinate.
    pub fn from_coords<I>(coords: I) -> Self
    where
        I: IntoIterator<Item = Coord>,
    {
        Self {
            cells: coords.into_iter().map(|c| (c, 1)).collect(),
        }
    }

    /// Set the state at `coord`. Setting 0 removes the cell.
    pub fn insert(&mut self, coord: Coord, state: State) {
        if state == 0 {
            self.cells.remove(&coord);
        } else {
            self.cells.insert(coord, state);
        }
    }

    /// Remove the cell at `coord`, returning its previous state (0 if dead).
    pub fn remove(&mut self, coord: Coord) -> State {
        self.cells.remove(&coord).unwrap_or(0)
    }

    /// State at `coord`; 0 for any coordinate without a live cell.
    pub fn get(&self, coord: Coord) -> State {
        self.cells.get(&coord).copied().unwrap_or(0)
    }

    /// Whether `coord` holds a live cell.
    pub fn contains(&self, coord: Coord) -> bool {
        self.cells.contains_key(&coord)
    }

    /// Number of live cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid has no live cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate live cells in coordinate order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, State)> + '_ {
        self.cells.iter().map(|(&c, &s)| (c, s))
    }

    /// Iterate live coordinates in coordinate order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells.keys().copied()
    }

    /// Bounding box of the live cells.
    ///
    /// `None` for an empty grid, or for one whose extent does not fit in
    /// an `i64`.
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        self.try_bounding_box().ok()
    }

    /// Bounding box of the live cells.
    ///
    /// # Errors
    ///
    /// [`GridError::EmptyPatternBoundingBox`] if the grid is empty,
    /// [`GridError::CoordinateOverflow`] if it spans more than `i64::MAX`
    /// columns or rows.
    pub fn try_bounding_box(&self) -> Result<BoundingBox, GridError> {
        BoundingBox::of(self.coords())
    }

    /// The topmost live cell, leftmost among ties.
    pub fn first_cell(&self) -> Option<Coord> {
        self.coords().min_by_key(|&(x, y)| (y, x))
    }

    /// A copy translated by `(dx, dy)`.
    ///
    /// # Errors
    ///
    /// [`GridError::CoordinateOverflow`] if any cell would leave the
    /// `i64` range.
    pub fn shifted(&self, dx: i64, dy: i64) -> Result<Self, GridError> {
        self.remapped(|(x, y)| Some((x.checked_add(dx)?, y.checked_add(dy)?)))
    }

    /// A copy with `transform` applied to every coordinate.
    ///
    /// States are preserved. The result is generally not normalized.
    ///
    /// # Errors
    ///
    /// [`GridError::CoordinateOverflow`] if a cell on `i64::MIN` would
    /// be negated. A normalized grid never fails.
    pub fn transformed(&self, transform: Transform) -> Result<Self, GridError> {
        self.remapped(|c| transform.checked_apply(c))
    }

    /// A copy translated so the bounding box starts at `(0, 0)`.
    ///
    /// An empty grid normalizes to itself.
    ///
    /// # Errors
    ///
    /// [`GridError::CoordinateOverflow`] if the grid spans more than
    /// `i64::MAX` columns or rows.
    pub fn normalized(&self) -> Result<Self, GridError> {
        match self.try_bounding_box() {
            Ok(b) => self.remapped(|(x, y)| Some((x.checked_sub(b.x)?, y.checked_sub(b.y)?))),
            Err(GridError::EmptyPatternBoundingBox) => Ok(Self::new()),
            Err(e) => Err(e),
        }
    }

    fn remapped<F>(&self, mut map: F) -> Result<Self, GridError>
    where
        F: FnMut(Coord) -> Option<Coord>,
    {
        let cells = self
            .iter()
            .map(|(c, s)| map(c).map(|moved| (moved, s)))
            .collect::<Option<_>>()
            .ok_or(GridError::CoordinateOverflow)?;
        Ok(Self { cells })
    }

    /// A copy with every live cell set to state 1.
    pub fn to_presence(&self) -> Self {
        Self::from_coords(self.coords())
    }

    /// Cells live in either grid. Result states are 1.
    pub fn union(&self, other: &SparseGrid) -> Self {
        Self::from_coords(self.coords().chain(other.coords()))
    }

    /// Cells live in `self` but not in `other`. Result states are 1.
    pub fn difference(&self, other: &SparseGrid) -> Self {
        Self::from_coords(self.coords().filter(|c| !other.contains(*c)))
    }

    /// Cells live in exactly one of the two grids. Result states are 1.
    pub fn symmetric_difference(&self, other: &SparseGrid) -> Self {
        let left = self.coords().filter(|c| !other.contains(*c));
        let right = other.coords().filter(|c| !self.contains(*c));
        Self::from_coords(left.chain(right))
    }
}

impl FromIterator<(Coord, State)> for SparseGrid {
    fn from_iter<I: IntoIterator<Item = (Coord, State)>>(iter: I) -> Self {
        Self::from_cells(iter)
    }
}

impl Extend<(Coord, State)> for SparseGrid {
    fn extend<I: IntoIterator<Item = (Coord, State)>>(&mut self, iter: I) {
        for (coord, state) in iter {
            self.insert(coord, state);
        }
    }
}
