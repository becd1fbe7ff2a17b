use clap::{Parser, Subcommand};
use gridport::cli;
use gridport::error::GridportResult;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gridport")]
#[command(about = "Row adapters for spreadsheet files (.xlsx, .xls)")]
#[command(long_about = "Gridport - spreadsheet row adapters

Reads and writes spreadsheet rows through external workbook libraries,
exposing them the way a data-migration pipeline expects.

COMMANDS:
  inspect  - List the sheets of a workbook
  head     - Print the first rows of a sheet
  convert  - Copy every row of a sheet into a new workbook

EXAMPLES:
  gridport inspect contacts.xlsx
  gridport head contacts.xlsx -n 5 --header-row 0 --json
  gridport convert legacy.xls contacts.xlsx --header-row 0 --prepend-header")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the sheets of a workbook
    Inspect {
        /// Path to the workbook file
        file: PathBuf,
    },

    /// Print the first rows of a sheet
    Head {
        /// Path to the workbook file
        file: PathBuf,

        /// Number of data rows to print
        #[arg(short = 'n', long, default_value_t = 10)]
        rows: usize,

        /// 0-based row to use as column headers
        #[arg(long)]
        header_row: Option<usize>,

        /// 0-based sheet index (defaults to the first sheet)
        #[arg(short, long)]
        sheet: Option<usize>,

        /// Emit one JSON value per row
        #[arg(long)]
        json: bool,
    },

    /// Copy every row of a sheet into a new workbook
    Convert {
        /// Source workbook
        input: PathBuf,

        /// Destination workbook (format chosen by extension)
        output: PathBuf,

        /// 0-based row to use as column headers
        #[arg(long)]
        header_row: Option<usize>,

        /// 0-based sheet index to read (defaults to the first sheet)
        #[arg(short, long)]
        sheet: Option<usize>,

        /// Title of the sheet to write into
        #[arg(long)]
        sheet_name: Option<String>,

        /// Write a header row from the first item's field names
        #[arg(long)]
        prepend_header: bool,
    },
}

fn main() -> GridportResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gridport=warn".into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Inspect { file } => cli::inspect(file),

        Commands::Head {
            file,
            rows,
            header_row,
            sheet,
            json,
        } => cli::head(file, rows, header_row, sheet, json),

        Commands::Convert {
            input,
            output,
            header_row,
            sheet,
            sheet_name,
            prepend_header,
        } => cli::convert(input, output, header_row, sheet, sheet_name, prepend_header),
    }
}
