use std::collections::HashSet;

use super::{CellRef, Grid};

/// Check whether committing `candidate_deps` for `target` would close a
/// dependency cycle.
///
/// Walks the *committed* dependency sets of the candidate references, so it
/// must run before the candidate set is stored. Returns the offending path
/// (target first, ending at the revisited cell) if a cycle is found, None
/// otherwise. Coordinates shared by two acyclic branches of a formula are
/// not cycles.
pub fn detect_cycle(
    target: CellRef,
    candidate_deps: &HashSet<CellRef>,
    grid: &Grid,
) -> Option<Vec<CellRef>> {
    let mut visiting = HashSet::new();
    let mut path = Vec::new();
    visiting.insert(target);
    path.push(target);

    for &dep in candidate_deps {
        if detect_cycle_dfs(dep, grid, &mut visiting, &mut path) {
            return Some(path);
        }
    }
    None
}

fn detect_cycle_dfs(
    current: CellRef,
    grid: &Grid,
    visiting: &mut HashSet<CellRef>,
    path: &mut Vec<CellRef>,
) -> bool {
    if visiting.contains(&current) {
        path.push(current);
        return true;
    }

    let Some(cell) = grid.cell(current) else {
        return false;
    };

    visiting.insert(current);
    path.push(current);

    for &dep in &cell.depends_on {
        if detect_cycle_dfs(dep, grid, visiting, path) {
            return true;
        }
    }

    path.pop();
    visiting.remove(&current);
    false
}
