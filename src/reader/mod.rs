//! Row-oriented reading of spreadsheet files.
//!
//! `RowReader` materializes one sheet into memory and exposes a countable,
//! keyed, seekable, rewindable sequence of rows; `RowReaderFactory` stamps
//! out readers with fixed construction parameters.

mod factory;
mod row_reader;

pub use factory::RowReaderFactory;
pub use row_reader::{ReaderOptions, RowReader, Rows};
