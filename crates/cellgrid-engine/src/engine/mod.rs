//! Spreadsheet engine API.
//!
//! This module provides the computation machinery for the spreadsheet:
//!
//! - [`Cell`], [`CellKind`], [`Grid`] - Data structures for cell storage
//! - [`CellRef`] - Cell reference parsing (A1 notation ↔ row/col indices)
//! - [`detect_cycle`] - Circular dependency detection
//! - [`evaluate`] - Formula evaluation against a grid snapshot
//! - [`create_engine`] - Create the Rhai engine used for the arithmetic
//! - [`format_number`] - Format computed values for display

mod cell;
mod cell_ref;
mod cycle;
mod eval;
mod format;

pub use cell::{Cell, CellKind, Grid};
pub use cell_ref::CellRef;
pub use cycle::detect_cycle;
pub use eval::{FormulaError, create_engine, evaluate};
pub use format::format_number;
