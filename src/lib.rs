//! Gridport - spreadsheet row adapters for data-migration pipelines
//!
//! This library lets a generic row pipeline consume and produce spreadsheet
//! files (`.xlsx`, legacy `.xls`) by delegating all workbook parsing and
//! serialization to external libraries (calamine for reading,
//! rust_xlsxwriter for writing).
//!
//! # Features
//!
//! - Countable, keyed, seekable, rewindable row reading over one sheet
//! - Optional header-row mapping (rows become name → value mappings)
//! - Row cap to bound memory use on files with unreliable extents
//! - prepare / write-one-row / finish writing, with append-to-existing-file
//!   semantics and optional header prepending
//!
//! # Example
//!
//! ```no_run
//! use gridport::{ReaderOptions, RowReader};
//!
//! let options = ReaderOptions {
//!     header_row: Some(0),
//!     ..ReaderOptions::default()
//! };
//! let mut reader = RowReader::open("contacts.xlsx", &options)?;
//!
//! println!("Rows: {}", reader.count());
//! for row in reader.rows() {
//!     println!("{:?}", row.value("id"));
//! }
//! # Ok::<(), gridport::GridportError>(())
//! ```

pub mod backend;
pub mod cli;
pub mod error;
pub mod reader;
pub mod types;
pub mod writer;

// Re-export commonly used types
pub use backend::{Sheet, Workbook, WorkbookFormat};
pub use error::{GridportError, GridportResult};
pub use reader::{ReaderOptions, RowReader, RowReaderFactory};
pub use types::{Cell, Row};
pub use writer::RowWriter;
