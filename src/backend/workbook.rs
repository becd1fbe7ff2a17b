use crate::error::{GridportError, GridportResult};
use crate::types::Cell;

/// Name given to the sheet a fresh workbook starts writing into when the
/// caller never named one.
pub const DEFAULT_SHEET_NAME: &str = "Sheet1";

/// In-memory workbook: an ordered list of named sheets plus one active
/// sheet index. Accumulates cell writes until it is serialized in one shot.
#[derive(Debug, Clone, Default)]
pub struct Workbook {
    sheets: Vec<Sheet>,
    active: usize,
}

impl Workbook {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_sheets(sheets: Vec<Sheet>) -> Self {
        Self { sheets, active: 0 }
    }

    pub fn sheets(&self) -> &[Sheet] {
        &self.sheets
    }

    pub fn sheet_count(&self) -> usize {
        self.sheets.len()
    }

    pub fn sheet_names(&self) -> Vec<String> {
        self.sheets.iter().map(|s| s.name.clone()).collect()
    }

    pub fn contains_sheet(&self, name: &str) -> bool {
        self.sheets.iter().any(|s| s.name == name)
    }

    /// Append a new empty sheet with the given title
    pub fn create_sheet(&mut self, name: impl Into<String>) -> &mut Sheet {
        self.sheets.push(Sheet::new(name));
        let index = self.sheets.len() - 1;
        &mut self.sheets[index]
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    /// Make the named sheet the active one
    pub fn set_active_sheet(&mut self, name: &str) -> GridportResult<()> {
        match self.sheets.iter().position(|s| s.name == name) {
            Some(index) => {
                self.active = index;
                Ok(())
            }
            None => Err(GridportError::SheetNotFound(name.to_string())),
        }
    }

    pub fn active_sheet(&self) -> Option<&Sheet> {
        self.sheets.get(self.active)
    }

    /// Mutable access to the active sheet, creating a default one in an
    /// otherwise empty workbook
    pub fn active_sheet_mut(&mut self) -> &mut Sheet {
        if self.sheets.is_empty() {
            self.sheets.push(Sheet::new(DEFAULT_SHEET_NAME));
            self.active = 0;
        }
        &mut self.sheets[self.active]
    }
}

/// One sheet: a growable 2D grid of cells.
///
/// Cell addressing on the mutation side is 1-indexed (row 1, column 1 is the
/// top-left cell), matching the spreadsheet convention the adapters count in.
#[derive(Debug, Clone)]
pub struct Sheet {
    name: String,
    rows: Vec<Vec<Cell>>,
}

impl Sheet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rows: Vec::new(),
        }
    }

    pub(crate) fn with_rows(name: impl Into<String>, rows: Vec<Vec<Cell>>) -> Self {
        Self {
            name: name.into(),
            rows,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.rows.iter().map(|row| row.len()).max().unwrap_or(0)
    }

    /// Set a cell value at a 1-indexed (row, column) address, growing the
    /// grid as needed
    pub fn set_value(&mut self, row: u32, col: u16, value: Cell) {
        let row = (row as usize).saturating_sub(1);
        let col = (col as usize).saturating_sub(1);

        if self.rows.len() <= row {
            self.rows.resize_with(row + 1, Vec::new);
        }
        let cells = &mut self.rows[row];
        if cells.len() <= col {
            cells.resize(col + 1, Cell::Empty);
        }
        cells[col] = value;
    }

    /// Cell value at a 1-indexed (row, column) address
    pub fn value(&self, row: u32, col: u16) -> Option<&Cell> {
        let row = (row as usize).checked_sub(1)?;
        let col = (col as usize).checked_sub(1)?;
        self.rows.get(row)?.get(col)
    }
}
