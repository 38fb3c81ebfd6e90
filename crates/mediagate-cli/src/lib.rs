//! Helpers shared by the `mediagate` binary.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use mediagate_core::{ConversionError, ErrorMetadata};
use mediagate_rewrite::{ConvertOptions, UrlConverter};
use serde_json::Value;

/// Read a JSON document from `path`, or from stdin when `path` is `None` or `-`.
pub fn read_json_input(path: Option<&Path>) -> Result<Value> {
    let raw = match path {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?,
        _ => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read stdin")?;
            buffer
        }
    };

    serde_json::from_str(&raw).context("Input is not valid JSON")
}

/// Describe how `url` would be handled, one line per fact.
pub fn describe_url(converter: &UrlConverter, url: &str, options: ConvertOptions) -> Vec<String> {
    let mut lines = vec![format!(
        "needs_conversion: {}",
        converter.needs_conversion(url)
    )];

    match converter.try_convert(url, options) {
        Ok(proxied) => lines.push(format!("proxy_url: {}", proxied)),
        Err(e) => lines.push(reason(&e)),
    }

    if let Ok(object) = mediagate_storage::locate_object(url, &converter.config().bucket_name) {
        lines.push(format!("bucket: {}", object.bucket));
        if let Some(region) = &object.region {
            lines.push(format!("region: {}", region));
        }
        lines.push(format!("storage_key: {}", object.key));
        lines.push(format!("object_url: {}", object.canonical_url()));
    }

    lines
}

fn reason(error: &ConversionError) -> String {
    let verdict = if error.is_passthrough() {
        "skipped"
    } else {
        "rejected"
    };
    format!("{}: {} ({})", verdict, error, error.error_code())
}

/// Initialize tracing for CLI binaries.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}
