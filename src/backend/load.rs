use crate::backend::format::WorkbookFormat;
use crate::backend::workbook::{Sheet, Workbook};
use crate::error::{GridportError, GridportResult};
use crate::types::Cell;
use calamine::{open_workbook_auto, Data, Range, Reader, Xls, Xlsx};
use std::fmt::Display;
use std::io::{Read, Seek};
use std::path::Path;
use tracing::debug;

impl From<&Data> for Cell {
    fn from(data: &Data) -> Self {
        match data {
            Data::Empty => Cell::Empty,
            Data::Int(i) => Cell::Number(*i as f64),
            Data::Float(f) => Cell::Number(*f),
            Data::String(s) => Cell::Text(s.clone()),
            Data::Bool(b) => Cell::Bool(*b),
            Data::DateTime(d) => Cell::Number(d.as_f64()),
            // ISO date/duration strings and cell error codes keep their
            // display form
            other => Cell::Text(other.to_string()),
        }
    }
}

/// Materialize one sheet of a workbook as a grid anchored at A1.
///
/// The format is identified from the file contents. `sheet_index` defaults
/// to the first sheet; `max_rows` bounds how many rows are materialized,
/// guarding against files whose declared extent is unreliable.
pub fn read_sheet(
    path: &Path,
    sheet_index: Option<usize>,
    max_rows: Option<usize>,
) -> GridportResult<Vec<Vec<Cell>>> {
    let mut workbook = open_workbook_auto(path)
        .map_err(|e| GridportError::Load(format!("failed to open {}: {}", path.display(), e)))?;

    let names = workbook.sheet_names().to_vec();
    let name = match sheet_index {
        Some(index) => names.get(index).cloned().ok_or_else(|| {
            GridportError::SheetNotFound(format!(
                "sheet index {} out of range ({} sheets)",
                index,
                names.len()
            ))
        })?,
        None => names
            .first()
            .cloned()
            .ok_or_else(|| GridportError::Load("workbook contains no sheets".to_string()))?,
    };

    let range = workbook
        .worksheet_range(&name)
        .map_err(|e| GridportError::Load(format!("failed to read sheet '{}': {}", name, e)))?;

    let grid = range_to_grid(&range, max_rows);
    debug!("materialized {} rows from sheet '{}'", grid.len(), name);
    Ok(grid)
}

/// Load a whole workbook (every sheet) into the in-memory model.
///
/// Used by the writer's append path; the file must be readable as the given
/// format.
pub fn open_workbook(path: &Path, format: WorkbookFormat) -> GridportResult<Workbook> {
    let sheets = match format {
        WorkbookFormat::Xlsx => {
            let mut workbook: Xlsx<_> = calamine::open_workbook(path).map_err(|e| {
                GridportError::Load(format!("failed to open {}: {}", path.display(), e))
            })?;
            collect_sheets(&mut workbook)?
        }
        WorkbookFormat::Xls => {
            let mut workbook: Xls<_> = calamine::open_workbook(path).map_err(|e| {
                GridportError::Load(format!("failed to open {}: {}", path.display(), e))
            })?;
            collect_sheets(&mut workbook)?
        }
    };

    debug!("loaded {} sheets from {}", sheets.len(), path.display());
    Ok(Workbook::from_sheets(sheets))
}

fn collect_sheets<RS, R>(workbook: &mut R) -> GridportResult<Vec<Sheet>>
where
    RS: Read + Seek,
    R: Reader<RS>,
    R::Error: Display,
{
    let names = workbook.sheet_names().to_vec();
    let mut sheets = Vec::with_capacity(names.len());

    for name in names {
        let range = workbook
            .worksheet_range(&name)
            .map_err(|e| GridportError::Load(format!("failed to read sheet '{}': {}", name, e)))?;
        sheets.push(Sheet::with_rows(name, range_to_grid(&range, None)));
    }

    Ok(sheets)
}

/// Flatten a calamine range into a rectangular grid anchored at A1.
///
/// Leading empty rows/columns inside the used range become empty cells, so
/// row indices in the grid match the row numbers a spreadsheet UI shows.
fn range_to_grid(range: &Range<Data>, max_rows: Option<usize>) -> Vec<Vec<Cell>> {
    let Some((end_row, end_col)) = range.end() else {
        return Vec::new();
    };

    let mut height = end_row as usize + 1;
    if let Some(cap) = max_rows {
        height = height.min(cap);
    }
    let width = end_col as usize + 1;

    let mut grid = Vec::with_capacity(height);
    for row in 0..height {
        let mut cells = Vec::with_capacity(width);
        for col in 0..width {
            let cell = range
                .get_value((row as u32, col as u32))
                .map(Cell::from)
                .unwrap_or(Cell::Empty);
            cells.push(cell);
        }
        grid.push(cells);
    }

    grid
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_from_calamine_data() {
        assert_eq!(Cell::from(&Data::Empty), Cell::Empty);
        assert_eq!(Cell::from(&Data::Int(7)), Cell::Number(7.0));
        assert_eq!(Cell::from(&Data::Float(1.5)), Cell::Number(1.5));
        assert_eq!(
            Cell::from(&Data::String("x".to_string())),
            Cell::Text("x".to_string())
        );
        assert_eq!(Cell::from(&Data::Bool(true)), Cell::Bool(true));
    }

    #[test]
    fn test_range_to_grid_empty_range() {
        let range: Range<Data> = Range::empty();
        assert!(range_to_grid(&range, None).is_empty());
    }

    #[test]
    fn test_range_to_grid_anchors_at_a1() {
        // Used range starts at B2; A1 must still appear as an empty cell
        let mut range: Range<Data> = Range::new((1, 1), (1, 2));
        range.set_value((1, 1), Data::Int(5));
        range.set_value((1, 2), Data::String("x".to_string()));

        let grid = range_to_grid(&range, None);
        assert_eq!(grid.len(), 2);
        assert_eq!(grid[0], vec![Cell::Empty, Cell::Empty, Cell::Empty]);
        assert_eq!(
            grid[1],
            vec![Cell::Empty, Cell::Number(5.0), Cell::Text("x".to_string())]
        );
    }

    #[test]
    fn test_range_to_grid_honors_max_rows() {
        let mut range: Range<Data> = Range::new((0, 0), (9, 0));
        for row in 0..10 {
            range.set_value((row, 0), Data::Int(row as i64));
        }

        let grid = range_to_grid(&range, Some(3));
        assert_eq!(grid.len(), 3);
        assert_eq!(grid[2], vec![Cell::Number(2.0)]);
    }
}
