use thiserror::Error;

#[derive(Error, Debug)]
pub enum TableError {
    #[error("Invalid priority rank: {0}")]
    InvalidPriority(u8),

    #[error("Invalid page size: {0}")]
    InvalidPageSize(usize),

    #[error("Unsupported snapshot version: {0}")]
    UnsupportedVersion(u32),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Lock error: {0}")]
    LockError(String),

    #[error("I/O error: {0}")]
    IoError(String),
}

pub type Result<T> = std::result::Result<T, TableError>;

impl<T> From<std::sync::PoisonError<T>> for TableError {
    fn from(err: std::sync::PoisonError<T>) -> Self {
        Self::LockError(err.to_string())
    }
}

impl From<std::io::Error> for TableError {
    fn from(err: std::io::Error) -> Self {
        Self::IoError(err.to_string())
    }
}
