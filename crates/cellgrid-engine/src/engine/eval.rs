use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;
use rhai::{Dynamic, Engine};
use thiserror::Error;

use super::cell::Grid;
use super::cell_ref::CellRef;

/// How evaluating a cell's raw content can fail.
#[derive(Error, Clone, Copy, Debug, Eq, PartialEq)]
pub enum FormulaError {
    /// Content neither starts with `=` nor parses as a number; the caller
    /// keeps it as plain text rather than surfacing an error.
    #[error("not a formula")]
    NotAFormula,
    #[error("cell reference out of range")]
    CellOutOfRange,
    #[error("invalid formula")]
    InvalidFormula,
}

/// Cell reference tokens: one uppercase letter immediately followed by digits.
fn cell_ref_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[A-Z][0-9]+").unwrap())
}

/// Create the Rhai engine used to evaluate substituted formula bodies.
/// No builtins are registered; by the time Rhai sees a formula, every cell
/// reference has already been replaced by its numeric value.
pub fn create_engine() -> Engine {
    Engine::new()
}

/// Evaluate a cell's raw content against the current grid snapshot.
///
/// Formulas (content starting with `=`) have their cell references replaced
/// by the referenced cells' current values, substituting `0` for cells with
/// no value, before the remaining arithmetic string is handed to Rhai.
/// Returns the numeric result together with the set of distinct coordinates
/// the formula resolved. Never mutates the grid.
pub fn evaluate(
    raw: &str,
    grid: &Grid,
    engine: &Engine,
) -> Result<(f64, HashSet<CellRef>), FormulaError> {
    let Some(body) = raw.strip_prefix('=') else {
        return match raw.parse::<f64>() {
            Ok(n) if n.is_finite() => Ok((n, HashSet::new())),
            _ => Err(FormulaError::NotAFormula),
        };
    };

    let (substituted, deps) = substitute_refs(body, grid)?;
    let result = engine
        .eval::<Dynamic>(&substituted)
        .map_err(|_| FormulaError::InvalidFormula)?;

    let value = if let Ok(f) = result.as_float() {
        f
    } else if let Ok(i) = result.as_int() {
        i as f64
    } else {
        return Err(FormulaError::InvalidFormula);
    };

    if !value.is_finite() {
        return Err(FormulaError::InvalidFormula);
    }
    Ok((value, deps))
}

/// Replace every reference token in a formula body with the referenced
/// cell's current value, collecting the distinct coordinates touched.
fn substitute_refs(body: &str, grid: &Grid) -> Result<(String, HashSet<CellRef>), FormulaError> {
    let mut out = String::with_capacity(body.len());
    let mut deps = HashSet::new();
    let mut last = 0;

    for m in cell_ref_re().find_iter(body) {
        // Matched tokens only fail to parse when the row number overflows,
        // which is out of range for any grid.
        let target = CellRef::parse(m.as_str()).ok_or(FormulaError::CellOutOfRange)?;
        if !grid.contains(target) {
            return Err(FormulaError::CellOutOfRange);
        }

        out.push_str(&body[last..m.start()]);
        let value = grid.value(target).unwrap_or(0.0);
        if value < 0.0 {
            // Parenthesized so a substitution after an operator stays parseable.
            out.push_str(&format!("({})", value));
        } else {
            out.push_str(&value.to_string());
        }
        deps.insert(target);
        last = m.end();
    }

    out.push_str(&body[last..]);
    Ok((out, deps))
}
