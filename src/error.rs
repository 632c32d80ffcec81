use thiserror::Error;

#[derive(Error, Debug)]
pub enum RebateError {
    /// A calculator precondition was violated. The message is user-facing.
    #[error("{0}")]
    InvalidCalculation(String),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[cfg(feature = "storage-rocksdb")]
    #[error("Storage error: {0}")]
    StorageError(#[from] rocksdb::Error),
    #[error("Internal error: {0}")]
    InternalError(Box<dyn std::error::Error + Send + Sync>),
}

impl RebateError {
    pub fn invalid_calculation(message: impl Into<String>) -> Self {
        Self::InvalidCalculation(message.into())
    }
}

pub type Result<T> = std::result::Result<T, RebateError>;
