//! Axis-aligned bounding boxes of live cells.

use crate::error::GridError;
use crate::grid::Coord;

/// The minimal axis-aligned rectangle containing every live cell.
///
/// `x` and `y` are the minimum coordinates; `width` and `height` are
/// always at least 1 and fit in an `i64`. An empty grid has no bounding
/// box, so this type is only ever produced for non-empty cell sets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BoundingBox {
    /// Minimum x coordinate.
    pub x: i64,
    /// Minimum y coordinate.
    pub y: i64,
    /// Number of columns spanned (`max_x - x + 1`).
    pub width: i64,
    /// Number of rows spanned (`max_y - y + 1`).
    pub height: i64,
}

impl BoundingBox {
    /// Compute the bounding box of a set of coordinates.
    ///
    /// # Errors
    ///
    /// [`GridError::EmptyPatternBoundingBox`] when the iterator is empty,
    /// [`GridError::CoordinateOverflow`] when an extent does not fit in
    /// an `i64`.
    pub fn of<I>(coords: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = Coord>,
    {
        let mut iter = coords.into_iter();
        let (x0, y0) = iter.next().ok_or(GridError::EmptyPatternBoundingBox)?;
        let (mut min_x, mut max_x, mut min_y, mut max_y) = (x0, x0, y0, y0);
        for (x, y) in iter {
            min_x = min_x.min(x);
            max_x = max_x.max(x);
            min_y = min_y.min(y);
            max_y = max_y.max(y);
        }
        Ok(Self {
            x: min_x,
            y: min_y,
            width: extent(min_x, max_x)?,
            height: extent(min_y, max_y)?,
        })
    }

    /// Largest x coordinate inside the box.
    pub fn max_x(&self) -> i64 {
        self.x + (self.width - 1)
    }

    /// Largest y coordinate inside the box.
    pub fn max_y(&self) -> i64 {
        self.y + (self.height - 1)
    }

    /// Whether `coord` lies inside the box (edges inclusive).
    pub fn contains(&self, coord: Coord) -> bool {
        let (x, y) = coord;
        x >= self.x && x <= self.max_x() && y >= self.y && y <= self.max_y()
    }

    /// Number of cells covered by the box.
    pub fn area(&self) -> u128 {
        u128::from(self.width.unsigned_abs()) * u128::from(self.height.unsigned_abs())
    }
}

/// Cells spanned by `min..=max` on one axis.
fn extent(min: i64, max: i64) -> Result<i64, GridError> {
    max.checked_sub(min)
        .and_then(|span| span.checked_add(1))
        .ok_or(GridError::CoordinateOverflow)
}
