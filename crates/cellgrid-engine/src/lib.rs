//! cellgrid_engine - Spreadsheet evaluation machinery.

pub mod engine;
