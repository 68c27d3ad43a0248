use std::collections::HashSet;

use cellgrid_engine::engine::{CellRef, FormulaError, detect_cycle, evaluate, format_number};

use super::Sheet;
use crate::error::CellError;

impl Sheet {
    /// Set a cell's raw text and recompute it plus everything that depends
    /// on it, transitively. The call runs to completion before returning.
    /// Calls addressing a header or out-of-bounds coordinate are no-ops.
    pub fn set_cell_text(&mut self, row: usize, col: usize, text: &str) {
        let at = CellRef::new(row, col);
        if !self.grid.is_data_cell(at) {
            return;
        }
        if let Some(cell) = self.grid.cell_mut(at) {
            cell.raw = text.to_string();
        }
        self.recompute(at);
    }

    /// Re-evaluate one cell from its stored raw text, commit the outcome,
    /// and recompute its parents. Propagation walks the committed dependency
    /// graph, which never contains a cycle, so it always terminates.
    fn recompute(&mut self, at: CellRef) {
        let Some(raw) = self.grid.cell(at).map(|cell| cell.raw.clone()) else {
            return;
        };

        match evaluate(&raw, &self.grid, &self.engine) {
            Ok((value, deps)) => {
                if let Some(cycle) = detect_cycle(at, &deps, &self.grid) {
                    self.mark_cycle(&cycle);
                    return;
                }
                let display = if raw.starts_with('=') {
                    format_number(value)
                } else {
                    // Plain numbers display exactly as typed.
                    raw.clone()
                };
                self.commit(at, Some(value), display, deps);
            }
            Err(FormulaError::NotAFormula) => {
                self.commit(at, None, raw, HashSet::new());
            }
            Err(FormulaError::CellOutOfRange) => {
                self.commit_error(at, CellError::CellOutOfRange);
            }
            Err(FormulaError::InvalidFormula) => {
                self.commit_error(at, CellError::InvalidFormula);
            }
        }

        let parents: Vec<CellRef> = self
            .parents
            .get(&at)
            .map(|dependents| dependents.iter().copied().collect())
            .unwrap_or_default();
        for parent in parents {
            self.recompute(parent);
        }
    }

    /// Commit candidate values to the cell and reconcile the parents index
    /// against its previous dependency set. Entries whose dependent set
    /// empties out are removed.
    fn commit(&mut self, at: CellRef, value: Option<f64>, display: String, deps: HashSet<CellRef>) {
        let Some(old_deps) = self.grid.cell(at).map(|cell| cell.depends_on.clone()) else {
            return;
        };

        for gone in old_deps.difference(&deps) {
            if let Some(dependents) = self.parents.get_mut(gone) {
                dependents.remove(&at);
                if dependents.is_empty() {
                    self.parents.remove(gone);
                }
            }
        }
        for added in deps.difference(&old_deps) {
            self.parents.entry(*added).or_default().insert(at);
        }

        if let Some(cell) = self.grid.cell_mut(at) {
            cell.value = value;
            cell.display = display;
            cell.depends_on = deps;
        }
    }

    fn commit_error(&mut self, at: CellRef, error: CellError) {
        self.commit(at, None, error.display_label().to_string(), HashSet::new());
    }

    /// Mark every cell on a detected cycle with the circular-dependency
    /// label. Raw text, stored dependencies, and the parents index are left
    /// untouched so the user can edit their way back out, and no propagation
    /// runs from a rejected change.
    fn mark_cycle(&mut self, cycle: &[CellRef]) {
        for &at in cycle {
            if let Some(cell) = self.grid.cell_mut(at) {
                cell.value = None;
                cell.display = CellError::CircularDependency.display_label().to_string();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Sheet;
    use cellgrid_engine::engine::CellRef;

    #[test]
    fn test_header_and_out_of_bounds_edits_are_noops() {
        let mut sheet = Sheet::new();
        sheet.set_cell_text(0, 3, "5");
        sheet.set_cell_text(3, 0, "5");
        sheet.set_cell_text(0, 0, "5");
        sheet.set_cell_text(99, 1, "5");
        sheet.set_cell_text(1, 99, "5");

        for (_, cell) in sheet.grid.iter() {
            assert_eq!(cell.raw, "");
            assert!(cell.value.is_none());
        }
        assert!(sheet.parents.is_empty());
    }

    #[test]
    fn test_literal_and_formula_display() {
        let mut sheet = Sheet::new();
        sheet.set_cell_text(1, 1, "5");
        sheet.set_cell_text(1, 2, "=A1*3");

        assert_eq!(sheet.display_text(1, 1), "5");
        assert_eq!(sheet.display_text(1, 2), "15");
        assert_eq!(sheet.numeric_value(1, 2), Some(15.0));
        assert_eq!(sheet.raw_text(1, 2), "=A1*3");
    }

    #[test]
    fn test_error_labels() {
        let mut sheet = Sheet::new();
        sheet.set_cell_text(1, 1, "=Z99");
        sheet.set_cell_text(1, 2, "=1+");
        sheet.set_cell_text(1, 3, "=C1");

        assert_eq!(sheet.display_text(1, 1), "#REF!");
        assert_eq!(sheet.display_text(1, 2), "#ERR!");
        assert_eq!(sheet.display_text(1, 3), "#CYCLE!");
        assert_eq!(sheet.numeric_value(1, 1), None);
        assert_eq!(sheet.numeric_value(1, 2), None);
        assert_eq!(sheet.numeric_value(1, 3), None);
    }

    #[test]
    fn test_clearing_a_formula_clears_its_index_entries() {
        let mut sheet = Sheet::new();
        sheet.set_cell_text(1, 2, "=A1+1");
        assert!(sheet.parents.contains_key(&CellRef::new(1, 1)));

        sheet.set_cell_text(1, 2, "");
        assert!(sheet.parents.is_empty());
        assert_eq!(sheet.display_text(1, 2), "");
        assert_eq!(sheet.numeric_value(1, 2), None);
    }
}
