use crate::backend::{self, WorkbookFormat};
use crate::error::GridportResult;
use crate::reader::{ReaderOptions, RowReader};
use crate::types::{Cell, Row};
use crate::writer::RowWriter;
use colored::Colorize;
use std::path::PathBuf;

/// Execute the inspect command: list the sheets of a workbook
pub fn inspect(file: PathBuf) -> GridportResult<()> {
    let format = WorkbookFormat::from_path(&file);
    let workbook = backend::open_workbook(&file, format)?;

    println!("{}", format!("📄 {}", file.display()).bold());
    println!("   Format: {}", format.to_string().cyan());
    println!("   Sheets: {}", workbook.sheet_count());

    for (index, sheet) in workbook.sheets().iter().enumerate() {
        println!(
            "   [{}] {} ({} rows × {} columns)",
            index,
            sheet.name().bright_blue().bold(),
            sheet.row_count(),
            sheet.column_count()
        );
    }

    Ok(())
}

/// Execute the head command: print the first data rows of a sheet
pub fn head(
    file: PathBuf,
    rows: usize,
    header_row: Option<usize>,
    sheet: Option<usize>,
    json: bool,
) -> GridportResult<()> {
    // Bound the load to what gets printed; header rows count toward the cap
    let skip = header_row.map_or(0, |row| row + 1);
    let options = ReaderOptions {
        header_row,
        sheet_index: sheet,
        max_rows: Some(skip + rows),
        ..ReaderOptions::default()
    };

    let mut reader = RowReader::open(&file, &options)?;
    for row in reader.rows().take(rows) {
        if json {
            println!("{}", serde_json::to_string(&row)?);
        } else {
            print_row(&row);
        }
    }

    Ok(())
}

fn print_row(row: &Row) {
    match row {
        Row::Values(cells) => {
            let line: Vec<String> = cells.iter().map(|cell| cell.to_string()).collect();
            println!("{}", line.join("\t"));
        }
        Row::Mapped(pairs) => {
            let line: Vec<String> = pairs
                .iter()
                .map(|(name, value)| format!("{}={}", name.cyan(), value))
                .collect();
            println!("{}", line.join("  "));
        }
    }
}

/// Execute the convert command: pump every row of a sheet into a new
/// workbook
pub fn convert(
    input: PathBuf,
    output: PathBuf,
    header_row: Option<usize>,
    sheet: Option<usize>,
    sheet_name: Option<String>,
    prepend_header: bool,
) -> GridportResult<()> {
    let options = ReaderOptions {
        header_row,
        sheet_index: sheet,
        ..ReaderOptions::default()
    };
    let mut reader = RowReader::open(&input, &options)?;

    let mut writer = RowWriter::new(&output)
        .with_format(WorkbookFormat::from_path(&output))
        .with_prepended_header(prepend_header);
    if let Some(name) = sheet_name {
        writer = writer.with_sheet(name);
    }
    writer.prepare()?;

    let mut count = 0;
    for row in reader.rows() {
        let item: Vec<(String, Cell)> = match row {
            Row::Mapped(pairs) => pairs,
            Row::Values(cells) => cells
                .into_iter()
                .enumerate()
                .map(|(index, cell)| (format!("col_{}", index), cell))
                .collect(),
        };
        writer.write_item(&item)?;
        count += 1;
    }
    writer.finish()?;

    println!(
        "{}",
        format!("✅ Wrote {} rows to {}", count, output.display()).green()
    );
    Ok(())
}
