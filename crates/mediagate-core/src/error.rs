//! Error types module
//!
//! URL conversion never fails outward: the public converter returns the input
//! string whenever an internal step fails. The internal steps still report a
//! typed [`ConversionError`] so callers and tests can see why a URL was left
//! untouched, and so the converter can log each case at a sensible level.

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected skips like data URLs or foreign hosts
    Debug,
    /// Warning level - for malformed input that looked like a storage URL
    Warn,
    /// Error level - for unexpected failures
    Error,
}

/// Metadata describing how an error should be reported.
pub trait ErrorMetadata {
    /// Machine-readable error code (e.g., "NOT_STORAGE_URL")
    fn error_code(&self) -> &'static str;

    /// Log level for this error
    fn log_level(&self) -> LogLevel;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    #[error("Data URLs are never proxied")]
    DataUrl,

    #[error("URL is already routed through the proxy")]
    AlreadyProxied,

    #[error("Not a storage URL: {0}")]
    NotStorageUrl(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Storage key is empty after stripping: {0}")]
    EmptyKey(String),

    #[error("Storage key is not valid UTF-8 once decoded: {0}")]
    InvalidKeyEncoding(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for ConversionError {
    fn from(err: serde_json::Error) -> Self {
        ConversionError::Serialization(err.to_string())
    }
}

/// Static metadata for each variant: (error_code, log_level).
fn conversion_error_static_metadata(err: &ConversionError) -> (&'static str, LogLevel) {
    match err {
        ConversionError::DataUrl => ("DATA_URL", LogLevel::Debug),
        ConversionError::AlreadyProxied => ("ALREADY_PROXIED", LogLevel::Debug),
        ConversionError::NotStorageUrl(_) => ("NOT_STORAGE_URL", LogLevel::Debug),
        ConversionError::InvalidUrl(_) => ("INVALID_URL", LogLevel::Warn),
        ConversionError::EmptyKey(_) => ("EMPTY_KEY", LogLevel::Warn),
        ConversionError::InvalidKeyEncoding(_) => ("INVALID_KEY_ENCODING", LogLevel::Warn),
        ConversionError::Serialization(_) => ("SERIALIZATION_ERROR", LogLevel::Error),
    }
}

impl ConversionError {
    /// Whether the URL was skipped on purpose rather than rejected as malformed.
    pub fn is_passthrough(&self) -> bool {
        matches!(
            self,
            ConversionError::DataUrl
                | ConversionError::AlreadyProxied
                | ConversionError::NotStorageUrl(_)
        )
    }
}

impl ErrorMetadata for ConversionError {
    fn error_code(&self) -> &'static str {
        conversion_error_static_metadata(self).0
    }

    fn log_level(&self) -> LogLevel {
        conversion_error_static_metadata(self).1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_metadata_passthrough() {
        let err = ConversionError::DataUrl;
        assert_eq!(err.error_code(), "DATA_URL");
        assert_eq!(err.log_level(), LogLevel::Debug);
        assert!(err.is_passthrough());
    }

    #[test]
    fn test_error_metadata_not_storage_url() {
        let err = ConversionError::NotStorageUrl("hello".to_string());
        assert_eq!(err.error_code(), "NOT_STORAGE_URL");
        assert!(err.is_passthrough());
        assert!(err.to_string().contains("hello"));
    }

    #[test]
    fn test_error_metadata_malformed() {
        let err = ConversionError::EmptyKey("https://bucket.s3.amazonaws.com/".to_string());
        assert_eq!(err.error_code(), "EMPTY_KEY");
        assert_eq!(err.log_level(), LogLevel::Warn);
        assert!(!err.is_passthrough());
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = ConversionError::from(json_err);
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
        assert_eq!(err.log_level(), LogLevel::Error);
    }
}
