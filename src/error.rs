use thiserror::Error;

pub type GridportResult<T> = Result<T, GridportError>;

#[derive(Error, Debug)]
pub enum GridportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to load workbook: {0}")]
    Load(String),

    #[error("failed to save workbook: {0}")]
    Save(String),

    #[error("sheet not found: {0}")]
    SheetNotFound(String),

    #[error("unsupported workbook format: {0}")]
    UnsupportedFormat(String),

    #[error("writer has not been prepared; call prepare() first")]
    NotPrepared,
}
