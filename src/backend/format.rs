use crate::error::GridportError;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Workbook file format tag.
///
/// `Xlsx` is the packed-XML default; `Xls` is the legacy binary format,
/// which the read backend accepts but the write backend does not produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WorkbookFormat {
    #[default]
    Xlsx,
    Xls,
}

impl WorkbookFormat {
    /// Identify the format from a file extension, defaulting to `Xlsx`
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        match path.as_ref().extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("xls") => WorkbookFormat::Xls,
            _ => WorkbookFormat::Xlsx,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            WorkbookFormat::Xlsx => "xlsx",
            WorkbookFormat::Xls => "xls",
        }
    }
}

impl FromStr for WorkbookFormat {
    type Err = GridportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "xlsx" | "xlsm" => Ok(WorkbookFormat::Xlsx),
            "xls" => Ok(WorkbookFormat::Xls),
            other => Err(GridportError::UnsupportedFormat(other.to_string())),
        }
    }
}

impl fmt::Display for WorkbookFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}
