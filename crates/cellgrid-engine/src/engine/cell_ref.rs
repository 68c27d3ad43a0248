//! Cell reference parsing and formatting.
//!
//! Provides bidirectional conversion between spreadsheet-style cell
//! references (e.g., "A1", "B22") and the grid's (row, column) coordinates.
//! Row 0 and column 0 hold header labels, so data references start at
//! column `A` = 1 and use the row index itself as the row label.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A reference to a grid position by (row, column) indices (0-indexed).
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct CellRef {
    pub row: usize,
    pub col: usize,
}

impl CellRef {
    pub fn new(row: usize, col: usize) -> CellRef {
        CellRef { row, col }
    }

    /// Parse a reference token: one uppercase letter immediately followed by
    /// one or more digits. Returns None for anything else, including row
    /// numbers too large to represent.
    pub fn parse(token: &str) -> Option<CellRef> {
        let (&letter, digits) = token.as_bytes().split_first()?;
        if !letter.is_ascii_uppercase() || digits.is_empty() {
            return None;
        }
        if !digits.iter().all(u8::is_ascii_digit) {
            return None;
        }

        let col = (letter - b'A') as usize + 1;
        let row = token[1..].parse::<usize>().ok()?;
        Some(CellRef { row, col })
    }

    /// Header letter for a data column (1 -> 'A', 2 -> 'B', ...).
    /// None for the header column 0 and for columns past 'Z'.
    pub fn col_letter(col: usize) -> Option<char> {
        (1..=26).contains(&col).then(|| (b'A' + (col - 1) as u8) as char)
    }
}

impl std::str::FromStr for CellRef {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid cell reference: {}", s))
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match CellRef::col_letter(self.col) {
            Some(letter) => write!(f, "{}{}", letter, self.row),
            None => write!(f, "({}, {})", self.row, self.col),
        }
    }
}
