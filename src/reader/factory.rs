use crate::error::GridportResult;
use crate::reader::{ReaderOptions, RowReader};
use std::path::Path;

/// Factory that creates [`RowReader`]s with fixed construction parameters.
#[derive(Debug, Clone, Copy, Default)]
pub struct RowReaderFactory {
    header_row: Option<usize>,
    sheet_index: Option<usize>,
}

impl RowReaderFactory {
    pub fn new(header_row: Option<usize>, sheet_index: Option<usize>) -> Self {
        Self {
            header_row,
            sheet_index,
        }
    }

    /// Open a new reader against the given file
    pub fn get_reader<P: AsRef<Path>>(&self, path: P) -> GridportResult<RowReader> {
        RowReader::open(
            path,
            &ReaderOptions {
                header_row: self.header_row,
                sheet_index: self.sheet_index,
                ..ReaderOptions::default()
            },
        )
    }
}
