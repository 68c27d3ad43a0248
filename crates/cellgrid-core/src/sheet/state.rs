use std::collections::{HashMap, HashSet};

use cellgrid_engine::engine::{CellRef, Grid, create_engine};
use rhai::Engine;

/// UI-agnostic spreadsheet state.
///
/// Owns the grid of cells and the reverse-dependency (parents) index, and
/// holds the Rhai engine used to evaluate substituted formulas. External
/// callers mutate it only through [`Sheet::set_cell_text`]; reads go through
/// the accessors below, which tolerate out-of-bounds coordinates.
pub struct Sheet {
    /// The fixed-size cell grid.
    pub grid: Grid,
    /// Reverse dependency map: cell -> cells whose formulas reference it.
    /// Entries with no dependents are removed, never left empty.
    pub parents: HashMap<CellRef, HashSet<CellRef>>,
    /// Rhai engine for evaluating formulas.
    pub engine: Engine,
}

impl Sheet {
    /// Number of grid rows, including the header row at index 0.
    pub const ROWS: usize = Grid::ROWS;
    /// Number of grid columns, including the header column at index 0.
    pub const COLS: usize = Grid::COLS;

    pub fn new() -> Self {
        Sheet {
            grid: Grid::new(),
            parents: HashMap::new(),
            engine: create_engine(),
        }
    }

    /// The string to render when the cell is not being edited: the literal
    /// text, a formatted formula result, or an error label.
    pub fn display_text(&self, row: usize, col: usize) -> &str {
        self.grid
            .cell(CellRef::new(row, col))
            .map(|cell| cell.display.as_str())
            .unwrap_or("")
    }

    /// The literal text last set on the cell, shown while it is being edited.
    pub fn raw_text(&self, row: usize, col: usize) -> &str {
        self.grid
            .cell(CellRef::new(row, col))
            .map(|cell| cell.raw.as_str())
            .unwrap_or("")
    }

    /// The cell's current numeric value, if it has one.
    pub fn numeric_value(&self, row: usize, col: usize) -> Option<f64> {
        self.grid.value(CellRef::new(row, col))
    }
}

impl Default for Sheet {
    fn default() -> Self {
        Self::new()
    }
}
