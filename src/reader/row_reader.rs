use crate::backend;
use crate::error::GridportResult;
use crate::types::{Cell, Row};
use std::path::Path;

/// Construction parameters for a [`RowReader`].
#[derive(Debug, Clone)]
pub struct ReaderOptions {
    /// 0-based index of the row holding column headers, if any
    pub header_row: Option<usize>,
    /// 0-based sheet index; defaults to the workbook's first sheet
    pub sheet_index: Option<usize>,
    /// Skip style/formatting information while parsing. The read backend
    /// only ever parses cell values, so this is always-on in practice;
    /// the flag is kept for interface parity with other readers.
    pub data_only: bool,
    /// Upper bound on the number of rows materialized from the sheet
    pub max_rows: Option<usize>,
}

impl Default for ReaderOptions {
    fn default() -> Self {
        Self {
            header_row: None,
            sheet_index: None,
            data_only: true,
            max_rows: None,
        }
    }
}

/// Reads spreadsheet rows with the help of the workbook backend.
///
/// The whole sheet is loaded into memory at open time; iteration, seeking,
/// and random access all run against that grid. When a header row is
/// configured, rows are returned as name → value mappings and rewinding
/// positions the cursor just below the header row, so iteration skips it.
pub struct RowReader {
    grid: Vec<Vec<Cell>>,
    headers: Option<Vec<String>>,
    header_row: Option<usize>,
    cursor: usize,
}

impl RowReader {
    /// Open a workbook file and materialize the selected sheet
    pub fn open<P: AsRef<Path>>(path: P, options: &ReaderOptions) -> GridportResult<Self> {
        let grid = backend::read_sheet(path.as_ref(), options.sheet_index, options.max_rows)?;
        Ok(Self::from_grid(grid, options.header_row))
    }

    fn from_grid(grid: Vec<Vec<Cell>>, header_row: Option<usize>) -> Self {
        let mut reader = Self {
            grid,
            headers: None,
            header_row: None,
            cursor: 0,
        };
        if let Some(row) = header_row {
            reader.set_header_row(row);
        }
        reader.rewind();
        reader
    }

    /// Number of data rows: materialized rows minus the header row, if one
    /// is configured
    pub fn count(&self) -> usize {
        if self.header_row.is_some() {
            self.grid.len().saturating_sub(1)
        } else {
            self.grid.len()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// The row at the cursor, or `None` when the cursor is past the end.
    ///
    /// The row comes back mapped exactly when the header set has as many
    /// names as the row has cells; otherwise it is positional.
    pub fn current(&self) -> Option<Row> {
        let cells = self.grid.get(self.cursor)?;
        match &self.headers {
            Some(headers) if headers.len() == cells.len() => Some(Row::Mapped(
                headers.iter().cloned().zip(cells.iter().cloned()).collect(),
            )),
            _ => Some(Row::Values(cells.clone())),
        }
    }

    /// Current cursor position
    pub fn key(&self) -> usize {
        self.cursor
    }

    /// Advance the cursor by one row. No bounds check; use [`valid`].
    ///
    /// [`valid`]: RowReader::valid
    pub fn next(&mut self) {
        self.cursor += 1;
    }

    /// Reset the cursor to the first data row.
    ///
    /// With a header row configured this is the row just below it, so the
    /// header row itself is never yielded by iteration.
    pub fn rewind(&mut self) {
        self.cursor = match self.header_row {
            Some(row) => row + 1,
            None => 0,
        };
    }

    /// Move the cursor to an arbitrary row index. No bounds check.
    pub fn seek(&mut self, position: usize) {
        self.cursor = position;
    }

    /// Whether a row exists at the current cursor position
    pub fn valid(&self) -> bool {
        self.cursor < self.grid.len()
    }

    /// Random access: seek to a row and return it.
    ///
    /// Seeking reaches every materialized row, including a configured
    /// header row — only rewind/iteration skip it.
    pub fn get_row(&mut self, position: usize) -> Option<Row> {
        self.seek(position);
        self.current()
    }

    /// The active header set, if any
    pub fn column_headers(&self) -> Option<&[String]> {
        self.headers.as_deref()
    }

    /// Replace the header set.
    ///
    /// Takes effect immediately: subsequent `current()`/`get_row()` calls
    /// render rows through the new names, for the whole iteration.
    pub fn set_column_headers(&mut self, headers: Vec<String>) {
        self.headers = Some(headers);
    }

    /// Designate a grid row as the header row.
    ///
    /// Its display values become the header set and rewinding targets the
    /// row below it. An out-of-range index yields an empty header set, so
    /// rows keep rendering positionally.
    pub fn set_header_row(&mut self, row: usize) {
        self.header_row = Some(row);
        self.headers = Some(
            self.grid
                .get(row)
                .map(|cells| cells.iter().map(|cell| cell.to_string()).collect())
                .unwrap_or_default(),
        );
    }

    /// Iterate over the data rows from the rewind position
    pub fn rows(&mut self) -> Rows<'_> {
        self.rewind();
        Rows { reader: self }
    }
}

/// Iterator over a reader's data rows; created by [`RowReader::rows`].
pub struct Rows<'a> {
    reader: &'a mut RowReader,
}

impl Iterator for Rows<'_> {
    type Item = Row;

    fn next(&mut self) -> Option<Row> {
        if !self.reader.valid() {
            return None;
        }
        let row = self.reader.current();
        self.reader.next();
        row
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_grid() -> Vec<Vec<Cell>> {
        vec![
            vec![Cell::from("id"), Cell::from("name")],
            vec![Cell::from(1i64), Cell::from("alpha")],
            vec![Cell::from(2i64), Cell::from("beta")],
        ]
    }

    #[test]
    fn test_count_with_and_without_header() {
        let reader = RowReader::from_grid(sample_grid(), None);
        assert_eq!(reader.count(), 3);

        let reader = RowReader::from_grid(sample_grid(), Some(0));
        assert_eq!(reader.count(), 2);
    }

    #[test]
    fn test_count_saturates_on_empty_grid() {
        let reader = RowReader::from_grid(Vec::new(), Some(0));
        assert_eq!(reader.count(), 0);
        assert!(reader.is_empty());
    }

    #[test]
    fn test_rewind_targets_row_below_header() {
        let mut reader = RowReader::from_grid(sample_grid(), Some(0));
        assert_eq!(reader.key(), 1);

        reader.seek(2);
        reader.rewind();
        assert_eq!(reader.key(), 1);

        let mut reader = RowReader::from_grid(sample_grid(), None);
        reader.seek(2);
        reader.rewind();
        assert_eq!(reader.key(), 0);
    }

    #[test]
    fn test_current_maps_rows_through_headers() {
        let reader = RowReader::from_grid(sample_grid(), Some(0));
        assert_eq!(
            reader.current(),
            Some(Row::Mapped(vec![
                ("id".to_string(), Cell::Number(1.0)),
                ("name".to_string(), Cell::Text("alpha".to_string())),
            ]))
        );
    }

    #[test]
    fn test_current_positional_without_headers() {
        let reader = RowReader::from_grid(sample_grid(), None);
        assert_eq!(
            reader.current(),
            Some(Row::Values(vec![Cell::from("id"), Cell::from("name")]))
        );
    }

    #[test]
    fn test_mismatched_header_count_renders_positionally() {
        let mut reader = RowReader::from_grid(sample_grid(), Some(0));
        reader.set_column_headers(vec!["only_one".to_string()]);

        assert_eq!(
            reader.current(),
            Some(Row::Values(vec![Cell::Number(1.0), Cell::from("alpha")]))
        );
    }

    #[test]
    fn test_seek_past_end_invalidates_cursor() {
        let mut reader = RowReader::from_grid(sample_grid(), None);
        reader.seek(99);
        assert!(!reader.valid());
        assert_eq!(reader.current(), None);
        assert_eq!(reader.key(), 99);
    }

    #[test]
    fn test_get_row_reaches_header_row() {
        // Absolute seeks do not skip the header row; only iteration does
        let mut reader = RowReader::from_grid(sample_grid(), Some(0));
        assert_eq!(
            reader.get_row(0),
            Some(Row::Mapped(vec![
                ("id".to_string(), Cell::Text("id".to_string())),
                ("name".to_string(), Cell::Text("name".to_string())),
            ]))
        );
    }

    #[test]
    fn test_out_of_range_header_row_yields_empty_headers() {
        let mut reader = RowReader::from_grid(sample_grid(), Some(10));
        assert_eq!(reader.column_headers(), Some(&[][..]));
        // Cursor rewound past the end, and rows keep rendering positionally
        assert!(!reader.valid());
        reader.seek(0);
        assert_eq!(
            reader.current(),
            Some(Row::Values(vec![Cell::from("id"), Cell::from("name")]))
        );
    }

    #[test]
    fn test_rows_iterator_skips_header() {
        let mut reader = RowReader::from_grid(sample_grid(), Some(0));
        let rows: Vec<Row> = reader.rows().collect();

        assert_eq!(rows.len(), 2);
        assert_eq!(
            rows[1],
            Row::Mapped(vec![
                ("id".to_string(), Cell::Number(2.0)),
                ("name".to_string(), Cell::Text("beta".to_string())),
            ])
        );
    }
}
