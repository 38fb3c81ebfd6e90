//! Mediagate Core Library
//!
//! This crate provides the configuration, error types and proxy route constants
//! shared by the converter, the API client and the CLI.

pub mod config;
pub mod constants;
pub mod error;

// Re-export commonly used types
pub use config::ProxyConfig;
pub use error::{ConversionError, ErrorMetadata, LogLevel};
