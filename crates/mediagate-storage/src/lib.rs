//! Mediagate Storage Library
//!
//! This crate recognises object storage URLs and derives the storage key they
//! refer to. Both URL styles produced by S3 are supported:
//!
//! - **Virtual-hosted style**: `https://{bucket}.s3.{region}.amazonaws.com/{key}`
//! - **Path style**: `https://s3.{region}.amazonaws.com/{bucket}/{key}`
//!
//! Either style yields the same key once the redundant bucket segment is
//! stripped, so proxy URLs built from the key do not depend on which style the
//! record happened to store.

pub mod error;
pub mod keys;

// Re-export commonly used types
pub use error::{StorageUrlError, StorageUrlResult};
pub use keys::{
    extract_storage_key, is_storage_host, locate_object, object_url, parse_storage_host,
    StorageHost, StorageObject,
};
