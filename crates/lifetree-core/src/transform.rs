//! The dihedral group of order 8 acting on grid coordinates.
//!
//! Each [`Transform`] is an optional mirror across the y axis followed by
//! zero to three quarter turns. Composition works on that decomposition,
//! so combining any two elements yields another element of the
//! enumeration.

use std::fmt;
use std::str::FromStr;

use crate::error::GridError;
use crate::grid::Coord;

/// One of the eight symmetries of the square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Transform {
    /// `(x, y) -> (x, y)`.
    Identity,
    /// Quarter turn: `(x, y) -> (-y, x)`.
    Rot90,
    /// Half turn: `(x, y) -> (-x, -y)`.
    Rot180,
    /// Three-quarter turn: `(x, y) -> (y, -x)`.
    Rot270,
    /// Mirror across the y axis: `(x, y) -> (-x, y)`.
    FlipX,
    /// Mirror across the x axis: `(x, y) -> (x, -y)`.
    FlipY,
    /// Mirror across the main diagonal: `(x, y) -> (y, x)`.
    FlipDiagonal,
    /// Mirror across the anti-diagonal: `(x, y) -> (-y, -x)`.
    FlipAntiDiagonal,
}

/// Elements by `[mirrored][quarter_turns]`: `FlipX` first, then `Rot90`
/// applied `quarter_turns` times.
const BY_PARTS: [[Transform; 4]; 2] = [
    [
        Transform::Identity,
        Transform::Rot90,
        Transform::Rot180,
        Transform::Rot270,
    ],
    [
        Transform::FlipX,
        Transform::FlipAntiDiagonal,
        Transform::FlipY,
        Transform::FlipDiagonal,
    ],
];

impl Transform {
    /// All eight elements in declaration order.
    pub const ALL: [Transform; 8] = [
        Transform::Identity,
        Transform::Rot90,
        Transform::Rot180,
        Transform::Rot270,
        Transform::FlipX,
        Transform::FlipY,
        Transform::FlipDiagonal,
        Transform::FlipAntiDiagonal,
    ];

    /// `(quarter_turns, mirrored)`, the inverse of `BY_PARTS`.
    fn parts(self) -> (usize, bool) {
        match self {
            Self::Identity => (0, false),
            Self::Rot90 => (1, false),
            Self::Rot180 => (2, false),
            Self::Rot270 => (3, false),
            Self::FlipX => (0, true),
            Self::FlipAntiDiagonal => (1, true),
            Self::FlipY => (2, true),
            Self::FlipDiagonal => (3, true),
        }
    }

    /// Apply the transform to a single coordinate.
    ///
    /// Returns `None` when a component would have to negate `i64::MIN`.
    pub fn checked_apply(self, coord: Coord) -> Option<Coord> {
        let (x, y) = coord;
        Some(match self {
            Self::Identity => (x, y),
            Self::Rot90 => (y.checked_neg()?, x),
            Self::Rot180 => (x.checked_neg()?, y.checked_neg()?),
            Self::Rot270 => (y, x.checked_neg()?),
            Self::FlipX => (x.checked_neg()?, y),
            Self::FlipY => (x, y.checked_neg()?),
            Self::FlipDiagonal => (y, x),
            Self::FlipAntiDiagonal => (y.checked_neg()?, x.checked_neg()?),
        })
    }

    /// The transform equivalent to applying `self` first, then `next`.
    pub fn then(self, next: Transform) -> Transform {
        let (k1, m1) = self.parts();
        let (k2, m2) = next.parts();
        // A mirror reverses the direction of every earlier quarter turn.
        let (turns, mirrored) = if m2 {
            (k2 + 4 - k1, !m1)
        } else {
            (k2 + k1, m1)
        };
        BY_PARTS[usize::from(mirrored)][turns % 4]
    }

    /// The transform undoing `self`.
    pub fn inverse(self) -> Transform {
        match self {
            Self::Rot90 => Self::Rot270,
            Self::Rot270 => Self::Rot90,
            other => other,
        }
    }

    /// Whether the transform reverses orientation (a mirror image).
    pub fn is_reflection(self) -> bool {
        self.parts().1
    }

    /// Canonical lower-case name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Self::Identity => "identity",
            Self::Rot90 => "rot_90",
            Self::Rot180 => "rot_180",
            Self::Rot270 => "rot_270",
            Self::FlipX => "flip_x",
            Self::FlipY => "flip_y",
            Self::FlipDiagonal => "flip_diagonal",
            Self::FlipAntiDiagonal => "flip_antidiagonal",
        }
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Transform {
    type Err = GridError;

    /// Parse a transform name.
    ///
    /// Besides the names produced by [`Transform::name`], accepts the
    /// legacy aliases `flip_xy` (half turn), `rcw` (quarter turn) and
    /// `rccw` (three-quarter turn).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = match s.trim().to_ascii_lowercase().as_str() {
            "identity" => Self::Identity,
            "rot_90" | "rcw" => Self::Rot90,
            "rot_180" | "flip_xy" => Self::Rot180,
            "rot_270" | "rccw" => Self::Rot270,
            "flip_x" => Self::FlipX,
            "flip_y" => Self::FlipY,
            "flip_diagonal" => Self::FlipDiagonal,
            "flip_antidiagonal" => Self::FlipAntiDiagonal,
            _ => {
                return Err(GridError::UnknownTransform {
                    name: s.to_string(),
                })
            }
        };
        Ok(t)
    }
}
