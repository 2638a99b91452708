//! Order-independent pattern digests.
//!
//! Each live coordinate `(x, y)` of a normalized grid is hashed as the
//! string `"(x, y)"` with SHA-1; the 20 digest bytes are read as a
//! little-endian integer and the per-cell values are summed at full
//! precision. Summation makes the digest independent of iteration order;
//! normalizing first makes it independent of position.

use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use lifetree_core::{Coord, GridError, SparseGrid};
use num_bigint::BigUint;
use sha1::{Digest as _, Sha1};

/// Full-precision digest of a pattern in one orientation.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Digest(BigUint);

impl Digest {
    /// The digest of an empty pattern.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Hash of a single coordinate.
    pub fn of_coord((x, y): Coord) -> Self {
        let hashed = Sha1::digest(format!("({x}, {y})").as_bytes());
        Self(BigUint::from_bytes_le(&hashed))
    }

    /// Digest of `grid` as oriented, after translating it to the origin.
    ///
    /// States are ignored: only which cells are live matters.
    ///
    /// # Errors
    ///
    /// [`GridError::CoordinateOverflow`] if the grid cannot be normalized.
    pub fn of_grid(grid: &SparseGrid) -> Result<Self, GridError> {
        Ok(grid.normalized()?.coords().map(Self::of_coord).sum())
    }

    /// The underlying integer.
    pub fn value(&self) -> &BigUint {
        &self.0
    }

    /// Consume into the underlying integer.
    pub fn into_value(self) -> BigUint {
        self.0
    }

    /// Lowercase hexadecimal rendering.
    pub fn to_hex(&self) -> String {
        self.0.to_str_radix(16)
    }
}

impl From<BigUint> for Digest {
    fn from(value: BigUint) -> Self {
        Self(value)
    }
}

impl Add for Digest {
    type Output = Digest;

    fn add(self, rhs: Digest) -> Digest {
        Digest(self.0 + rhs.0)
    }
}

impl<'a> Add<&'a Digest> for Digest {
    type Output = Digest;

    fn add(self, rhs: &'a Digest) -> Digest {
        Digest(self.0 + &rhs.0)
    }
}

impl Sum for Digest {
    fn sum<I: Iterator<Item = Digest>>(iter: I) -> Self {
        iter.fold(Digest::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Digest> for Digest {
    fn sum<I: Iterator<Item = &'a Digest>>(iter: I) -> Self {
        iter.fold(Digest::zero(), Add::add)
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
