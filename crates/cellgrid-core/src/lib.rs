//! cellgrid-core - UI-agnostic spreadsheet state.

pub mod error;
pub mod sheet;

pub use error::CellError;
pub use sheet::Sheet;

pub use cellgrid_engine::engine::CellRef;
