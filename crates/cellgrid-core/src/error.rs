//! Error types for cellgrid core.

use thiserror::Error;

/// Errors surfaced to the user through a cell's display text.
///
/// None of these abort recomputation: the offending cell shows the label,
/// carries no value, and reads as `0` to any formula that references it.
#[derive(Error, Clone, Copy, Debug, Eq, PartialEq)]
pub enum CellError {
    #[error("cell reference out of range")]
    CellOutOfRange,

    #[error("invalid formula")]
    InvalidFormula,

    #[error("circular dependency detected")]
    CircularDependency,
}

impl CellError {
    /// Label shown in the cell in place of a value.
    pub fn display_label(self) -> &'static str {
        match self {
            CellError::CellOutOfRange => "#REF!",
            CellError::InvalidFormula => "#ERR!",
            CellError::CircularDependency => "#CYCLE!",
        }
    }
}
