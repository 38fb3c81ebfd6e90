//! Storage URL errors

use thiserror::Error;

/// Errors raised while interpreting a storage URL
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageUrlError {
    #[error("Host is not an object storage host: {0}")]
    NotStorageHost(String),

    #[error("Invalid storage URL: {0}")]
    InvalidUrl(String),

    #[error("Storage key is empty: {0}")]
    EmptyKey(String),

    #[error("Storage key is not valid UTF-8: {0}")]
    InvalidEncoding(String),
}

/// Result type for storage URL operations
pub type StorageUrlResult<T> = Result<T, StorageUrlError>;
