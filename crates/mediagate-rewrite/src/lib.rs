//! Mediagate Rewrite Library
//!
//! Converts object storage URLs into same-origin proxy URLs so the browser
//! never fetches from the bucket directly. The [`UrlConverter`] is built once
//! from a [`ProxyConfig`] and offers:
//!
//! - [`UrlConverter::needs_conversion`]: classification predicate
//! - [`UrlConverter::convert`]: single URL rewrite, falling back to the input
//! - [`UrlConverter::convert_graph`]: recursive rewrite of a JSON record
//! - [`UrlConverter::convert_record`]: the same for any serde record type
//!
//! ```
//! use mediagate_core::ProxyConfig;
//! use mediagate_rewrite::{ConvertOptions, UrlConverter};
//!
//! let converter = UrlConverter::new(ProxyConfig::new("https://api.example.com", "listings"));
//! let proxied = converter.convert(
//!     "https://listings.s3.us-east-1.amazonaws.com/properties/cover.jpg",
//!     ConvertOptions::default(),
//! );
//! assert_eq!(
//!     proxied,
//!     "https://api.example.com/api/s3-proxy/direct-key?key=properties%2Fcover.jpg"
//! );
//! ```

mod classify;
pub mod converter;
mod graph;
mod rewrite;

// Re-export commonly used types
pub use converter::{ConvertOptions, FieldPredicate, UrlConverter};
pub use mediagate_core::{ConversionError, ProxyConfig};
