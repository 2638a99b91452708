//! The apgcode pattern encoding.
//!
//! Rows are grouped into bands of five. Each column of a band becomes one
//! base-32 digit `0-9a-v` whose bit `h` is the cell `h` rows into the
//! band. Bands are separated by `z`. Trailing blank columns of a band are
//! dropped and runs of blank columns are shortened:
//!
//! | Code      | Blank columns |
//! |-----------|---------------|
//! | `0`       | 1             |
//! | `w`       | 2             |
//! | `x`       | 3             |
//! | `y` + `c` | 4 + value of `c` (4 to 39) |
//!
//! Longer runs repeat `yz`. The empty pattern is `0`.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use lifetree_core::{GridError, SparseGrid};

use crate::canonical::orientations;
use crate::error::ApgcodeError;

const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const BAND_HEIGHT: i64 = 5;
const MAX_Y_RUN: usize = 39;

fn digit_value(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'z' => Some(c - b'a' + 10),
        _ => None,
    }
}

/// A syntactically valid apgcode.
///
/// Ordered by length, then lexicographically, so the minimum over a set
/// of codes is the preferred name of a pattern.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Apgcode(String);

impl Apgcode {
    /// Validate `code` without decoding it.
    ///
    /// # Errors
    ///
    /// [`ApgcodeError::InvalidApgcode`] for an empty string, a character
    /// outside `0-9a-z`, or a `y` with no count after it.
    pub fn parse(code: &str) -> Result<Self, ApgcodeError> {
        scan(code, |_| {})?;
        Ok(Self(code.to_string()))
    }

    /// Encode a pattern in its current orientation.
    ///
    /// # Errors
    ///
    /// As [`encode`].
    pub fn from_grid(grid: &SparseGrid) -> Result<Self, GridError> {
        encode(grid)
    }

    /// Decode into a grid of state-1 cells with the top-left band at row 0.
    pub fn to_grid(&self) -> SparseGrid {
        let mut grid = SparseGrid::new();
        // Only `parse` and `encode` build an `Apgcode`.
        let walked = scan(&self.0, |cell| grid.insert(cell, 1));
        debug_assert!(walked.is_ok(), "stored apgcode {:?} failed to scan", self.0);
        grid
    }

    /// The code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is the code of the empty pattern.
    pub fn is_empty_pattern(&self) -> bool {
        self.to_grid().is_empty()
    }
}

impl Ord for Apgcode {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for Apgcode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Apgcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Apgcode {
    type Err = ApgcodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Apgcode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Encode a pattern in its current orientation.
///
/// The grid is translated to the origin and read as presence only.
///
/// # Errors
///
/// [`GridError::CoordinateOverflow`] if the pattern spans more than
/// `i64::MAX` columns or rows.
pub fn encode(grid: &SparseGrid) -> Result<Apgcode, GridError> {
    let grid = grid.normalized()?;
    if grid.is_empty() {
        return Ok(Apgcode("0".to_string()));
    }
    let bbox = grid.try_bounding_box()?;

    let bands = (bbox.height - 1) / BAND_HEIGHT + 1;
    let mut code = String::new();
    for band in 0..bands {
        if band > 0 {
            code.push('z');
        }
        let mut columns: Vec<u8> = (0..bbox.width)
            .map(|x| {
                (0..BAND_HEIGHT).fold(0u8, |acc, h| {
                    if grid.contains((x, band * BAND_HEIGHT + h)) {
                        acc | (1 << h)
                    } else {
                        acc
                    }
                })
            })
            .collect();
        while columns.last() == Some(&0) {
            columns.pop();
        }

        let mut blank_run = 0;
        for digit in columns {
            if digit == 0 {
                blank_run += 1;
                continue;
            }
            push_blank_run(&mut code, blank_run);
            blank_run = 0;
            code.push(ALPHABET[digit as usize] as char);
        }
    }
    Ok(Apgcode(code))
}

fn push_blank_run(code: &mut String, run: usize) {
    for _ in 0..run / MAX_Y_RUN {
        code.push_str("yz");
    }
    match run % MAX_Y_RUN {
        0 => {}
        1 => code.push('0'),
        2 => code.push('w'),
        3 => code.push('x'),
        r => {
            code.push('y');
            code.push(ALPHABET[r - 4] as char);
        }
    }
}

/// Decode an apgcode string.
///
/// # Errors
///
/// As [`Apgcode::parse`].
pub fn decode(code: &str) -> Result<SparseGrid, ApgcodeError> {
    let mut grid = SparseGrid::new();
    scan(code, |cell| grid.insert(cell, 1))?;
    Ok(grid)
}

/// The preferred apgcode of a pattern: over all eight orientations, the
/// shortest code, then the lexicographically smallest.
///
/// # Errors
///
/// As [`encode`].
pub fn min_apgcode(grid: &SparseGrid) -> Result<Apgcode, GridError> {
    let mut best: Option<Apgcode> = None;
    for (_, oriented) in orientations(grid)? {
        let code = encode(&oriented)?;
        if best.as_ref().is_none_or(|b| code < *b) {
            best = Some(code);
        }
    }
    Ok(best.unwrap_or_else(|| Apgcode("0".to_string())))
}

/// Walk `code`, calling `live` for every live cell.
fn scan<F>(code: &str, mut live: F) -> Result<(), ApgcodeError>
where
    F: FnMut((i64, i64)),
{
    if code.is_empty() {
        return Err(ApgcodeError::invalid(0, "empty apgcode"));
    }

    let bytes = code.as_bytes();
    let mut x: i64 = 0;
    let mut band: i64 = 0;
    let mut i = 0;
    while i < bytes.len() {
        let c = bytes[i];
        match c {
            b'w' => x += 2,
            b'x' => x += 3,
            b'y' => {
                let count = bytes.get(i + 1).ok_or_else(|| {
                    ApgcodeError::invalid(bytes.len(), "'y' must be followed by a run length")
                })?;
                let value = digit_value(*count).ok_or_else(|| {
                    ApgcodeError::invalid(i + 1, format!("invalid run length {:?}", *count as char))
                })?;
                x += 4 + i64::from(value);
                i += 1;
            }
            b'z' => {
                band += 1;
                x = 0;
            }
            _ => {
                let value = digit_value(c).ok_or_else(|| {
                    ApgcodeError::invalid(i, format!("unexpected character {:?}", c as char))
                })?;
                for h in 0..BAND_HEIGHT {
                    if value & (1 << h) != 0 {
                        live((x, band * BAND_HEIGHT + h));
                    }
                }
                x += 1;
            }
        }
        i += 1;
    }
    Ok(())
}
