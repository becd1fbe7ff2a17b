use crate::backend::format::WorkbookFormat;
use crate::backend::workbook::Workbook;
use crate::error::{GridportError, GridportResult};
use crate::types::Cell;
use rust_xlsxwriter::Worksheet;
use std::path::Path;
use tracing::debug;

/// Serialize the in-memory workbook to disk, overwriting the destination.
pub fn save_workbook(
    workbook: &Workbook,
    path: &Path,
    format: WorkbookFormat,
) -> GridportResult<()> {
    match format {
        WorkbookFormat::Xlsx => save_xlsx(workbook, path),
        WorkbookFormat::Xls => Err(GridportError::UnsupportedFormat(
            "the write backend produces .xlsx only; legacy .xls workbooks can be read but not written"
                .to_string(),
        )),
    }
}

fn save_xlsx(workbook: &Workbook, path: &Path) -> GridportResult<()> {
    let mut output = rust_xlsxwriter::Workbook::new();

    for (index, sheet) in workbook.sheets().iter().enumerate() {
        let worksheet = output.add_worksheet();
        worksheet
            .set_name(sheet.name())
            .map_err(|e| GridportError::Save(format!("failed to set worksheet name: {}", e)))?;
        if index == workbook.active_index() {
            worksheet.set_active(true);
        }

        for (row, cells) in sheet.rows().iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                write_cell(worksheet, row as u32, col as u16, cell)?;
            }
        }
    }

    output
        .save(path)
        .map_err(|e| GridportError::Save(format!("failed to save {}: {}", path.display(), e)))?;

    debug!(
        "saved {} sheets to {}",
        workbook.sheet_count(),
        path.display()
    );
    Ok(())
}

fn write_cell(worksheet: &mut Worksheet, row: u32, col: u16, cell: &Cell) -> GridportResult<()> {
    match cell {
        Cell::Empty => {}
        Cell::Number(n) => {
            worksheet
                .write_number(row, col, *n)
                .map_err(|e| GridportError::Save(format!("failed to write number: {}", e)))?;
        }
        Cell::Text(s) => {
            worksheet
                .write_string(row, col, s)
                .map_err(|e| GridportError::Save(format!("failed to write text: {}", e)))?;
        }
        Cell::Bool(b) => {
            worksheet
                .write_boolean(row, col, *b)
                .map_err(|e| GridportError::Save(format!("failed to write boolean: {}", e)))?;
        }
    }
    Ok(())
}
