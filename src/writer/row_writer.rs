use crate::backend::{self, Workbook, WorkbookFormat};
use crate::error::{GridportError, GridportResult};
use crate::types::Cell;
use std::path::{Path, PathBuf};

/// Writes rows to a spreadsheet file through the workbook backend.
///
/// Follows a prepare / write / finish lifecycle: `prepare()` loads or
/// creates the in-memory workbook, `write_item()` appends one row per call,
/// and `finish()` serializes the whole workbook to disk in one shot.
///
/// ```no_run
/// use gridport::{Cell, RowWriter};
///
/// let mut writer = RowWriter::new("out.xlsx").with_prepended_header(true);
/// writer.prepare()?;
/// writer.write_item(&[
///     ("id".to_string(), Cell::from(1i64)),
///     ("description".to_string(), Cell::from("first")),
/// ])?;
/// writer.finish()?;
/// # Ok::<(), gridport::GridportError>(())
/// ```
pub struct RowWriter {
    path: PathBuf,
    sheet: Option<String>,
    format: WorkbookFormat,
    prepend_header: bool,
    workbook: Option<Workbook>,
    /// 1-indexed write cursor, the backend's addressing convention
    row: u32,
}

impl RowWriter {
    /// Create a writer for the given destination; performs no I/O yet
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            sheet: None,
            format: WorkbookFormat::default(),
            prepend_header: false,
            workbook: None,
            row: 1,
        }
    }

    /// Name the sheet to write into, creating it on prepare if absent
    pub fn with_sheet(mut self, name: impl Into<String>) -> Self {
        self.sheet = Some(name.into());
        self
    }

    /// Output format (defaults to the packed-XML `.xlsx` type)
    pub fn with_format(mut self, format: WorkbookFormat) -> Self {
        self.format = format;
        self
    }

    /// Emit a header row of field names before the first item
    pub fn with_prepended_header(mut self, prepend: bool) -> Self {
        self.prepend_header = prepend;
        self
    }

    /// Load or create the backing workbook and position the write cursor.
    ///
    /// If the destination is already a readable workbook of the configured
    /// format it is loaded, so existing sheets survive the write; otherwise
    /// a fresh workbook is started. The write cursor starts at row 1 either
    /// way.
    pub fn prepare(&mut self) -> GridportResult<()> {
        let mut workbook = if self.path.exists() {
            backend::open_workbook(&self.path, self.format).unwrap_or_else(|_| Workbook::new())
        } else {
            Workbook::new()
        };

        if let Some(name) = &self.sheet {
            if !workbook.contains_sheet(name) {
                workbook.create_sheet(name.clone());
            }
            workbook.set_active_sheet(name)?;
        }

        self.workbook = Some(workbook);
        self.row = 1;
        Ok(())
    }

    /// Write one item as a row, fields in order, one cell per column.
    ///
    /// With header prepending enabled, the first call first emits a row of
    /// the item's field names. Column positions come strictly from field
    /// order; no shape validation happens between items, so items of
    /// differing field counts produce misaligned columns.
    pub fn write_item(&mut self, item: &[(String, Cell)]) -> GridportResult<()> {
        let workbook = self.workbook.as_mut().ok_or(GridportError::NotPrepared)?;
        let sheet = workbook.active_sheet_mut();

        if self.prepend_header && self.row == 1 {
            for (index, (name, _)) in item.iter().enumerate() {
                sheet.set_value(self.row, index as u16 + 1, Cell::Text(name.clone()));
            }
            self.row += 1;
        }

        for (index, (_, value)) in item.iter().enumerate() {
            sheet.set_value(self.row, index as u16 + 1, value.clone());
        }
        self.row += 1;

        Ok(())
    }

    /// Serialize the workbook to the destination path in the configured
    /// format, overwriting it
    pub fn finish(&mut self) -> GridportResult<()> {
        let workbook = self.workbook.as_ref().ok_or(GridportError::NotPrepared)?;
        backend::save_workbook(workbook, &self.path, self.format)
    }
}
