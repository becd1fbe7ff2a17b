//! Capability layer over the external spreadsheet libraries.
//!
//! The reader and writer adapters never touch file formats directly; they go
//! through this module, which loads workbooks with calamine and serializes
//! them with rust_xlsxwriter. The format is a tag selected per file, so a
//! different backing library can be swapped in without touching the adapter
//! contracts.

mod format;
mod load;
mod save;
mod workbook;

pub use format::WorkbookFormat;
pub use load::{open_workbook, read_sheet};
pub use save::save_workbook;
pub use workbook::{Sheet, Workbook, DEFAULT_SHEET_NAME};
