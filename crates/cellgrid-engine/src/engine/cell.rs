//! Cell data structures for the spreadsheet grid.
//!
//! This module provides the core data types:
//! - [`CellKind`] - The role of a grid position (headers vs. data)
//! - [`Cell`] - A cell's raw text, derived display state, and dependencies
//! - [`Grid`] - Fixed-size storage for all cells, addressed by [`CellRef`]

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::cell_ref::CellRef;

/// The role of a grid position. Row 0 and column 0 carry header labels and
/// never hold data.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CellKind {
    /// The unused top-left corner (0, 0).
    Corner,
    /// Row 0: column letters.
    ColHeader,
    /// Column 0: row numbers.
    RowHeader,
    /// An editable data cell.
    Data,
}

impl CellKind {
    pub fn of(row: usize, col: usize) -> CellKind {
        if row == 0 && col == 0 {
            CellKind::Corner
        } else if row == 0 {
            CellKind::ColHeader
        } else if col == 0 {
            CellKind::RowHeader
        } else {
            CellKind::Data
        }
    }
}

/// A cell in the spreadsheet grid.
///
/// `raw` is the text last set by an edit; `display` and `value` are derived
/// from it by recomputation. `value` is Some exactly when `display` shows a
/// valid number.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Cell {
    pub raw: String,
    pub display: String,
    pub value: Option<f64>,
    pub depends_on: HashSet<CellRef>,
}

/// Fixed-size grid storage, row-major. All cells are created up front and
/// live for the lifetime of the grid; edits only touch their fields.
#[derive(Clone, Debug)]
pub struct Grid {
    cells: Vec<Cell>,
}

impl Grid {
    /// Number of rows, including the header row at index 0.
    pub const ROWS: usize = 11;
    /// Number of columns, including the header column at index 0.
    pub const COLS: usize = 14;

    pub fn new() -> Grid {
        Grid {
            cells: vec![Cell::default(); Self::ROWS * Self::COLS],
        }
    }

    pub fn contains(&self, at: CellRef) -> bool {
        at.row < Self::ROWS && at.col < Self::COLS
    }

    /// True for in-bounds coordinates outside the header row/column.
    pub fn is_data_cell(&self, at: CellRef) -> bool {
        self.contains(at) && CellKind::of(at.row, at.col) == CellKind::Data
    }

    pub fn cell(&self, at: CellRef) -> Option<&Cell> {
        self.contains(at)
            .then(|| &self.cells[at.row * Self::COLS + at.col])
    }

    pub fn cell_mut(&mut self, at: CellRef) -> Option<&mut Cell> {
        if self.contains(at) {
            Some(&mut self.cells[at.row * Self::COLS + at.col])
        } else {
            None
        }
    }

    /// The referenced cell's current numeric value, if it has one.
    pub fn value(&self, at: CellRef) -> Option<f64> {
        self.cell(at).and_then(|cell| cell.value)
    }

    /// Iterate all cells with their coordinates, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (CellRef, &Cell)> {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, cell)| (CellRef::new(i / Self::COLS, i % Self::COLS), cell))
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::{CellKind, Grid};
    use crate::engine::CellRef;

    #[test]
    fn test_cell_kind_classification() {
        assert_eq!(CellKind::of(0, 0), CellKind::Corner);
        assert_eq!(CellKind::of(0, 5), CellKind::ColHeader);
        assert_eq!(CellKind::of(5, 0), CellKind::RowHeader);
        assert_eq!(CellKind::of(3, 4), CellKind::Data);
    }

    #[test]
    fn test_grid_bounds() {
        let grid = Grid::new();
        assert!(grid.contains(CellRef::new(0, 0)));
        assert!(grid.contains(CellRef::new(10, 13)));
        assert!(!grid.contains(CellRef::new(11, 0)));
        assert!(!grid.contains(CellRef::new(0, 14)));
    }

    #[test]
    fn test_header_cells_are_not_data() {
        let grid = Grid::new();
        assert!(!grid.is_data_cell(CellRef::new(0, 3)));
        assert!(!grid.is_data_cell(CellRef::new(3, 0)));
        assert!(grid.is_data_cell(CellRef::new(1, 1)));
    }

    #[test]
    fn test_new_grid_is_blank() {
        let grid = Grid::new();
        assert_eq!(grid.iter().count(), Grid::ROWS * Grid::COLS);
        for (_, cell) in grid.iter() {
            assert_eq!(cell.raw, "");
            assert_eq!(cell.display, "");
            assert!(cell.value.is_none());
            assert!(cell.depends_on.is_empty());
        }
    }

    #[test]
    fn test_value_reads_through_coordinates() {
        let mut grid = Grid::new();
        let at = CellRef::new(2, 3);
        grid.cell_mut(at).unwrap().value = Some(7.5);
        assert_eq!(grid.value(at), Some(7.5));
        assert_eq!(grid.value(CellRef::new(2, 4)), None);
        assert_eq!(grid.value(CellRef::new(99, 99)), None);
    }
}
