use thiserror::Error;

pub type Result<T> = std::result::Result<T, DukaError>;

#[derive(Debug, Error)]
pub enum DukaError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown category: {0} (expected one of: {1})")]
    UnknownCategory(String, String),

    #[error("Unknown time range: {0} (expected all, last7 or month)")]
    UnknownTimeRange(String),

    #[error("Settings error: {0}")]
    Settings(String),
}
