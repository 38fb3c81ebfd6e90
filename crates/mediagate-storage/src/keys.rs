//! Storage host recognition and key extraction.
//!
//! Key format: the object path without a leading `/`, percent-decoded, with a
//! leading `{bucket}/` segment removed when it names the configured bucket.

use url::Url;

use crate::error::{StorageUrlError, StorageUrlResult};

const AWS_DOMAIN_SUFFIX: &str = ".amazonaws.com";

/// Components recovered from an S3 host name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageHost {
    /// Bucket from a virtual-hosted style host, `None` for path-style hosts.
    pub bucket: Option<String>,
    /// Region label, when the host carries one.
    pub region: Option<String>,
}

/// Parse an S3 host name.
///
/// Accepts `{bucket}.s3.{region}.amazonaws.com`, `{bucket}.s3.amazonaws.com`,
/// `{bucket}.s3-{region}.amazonaws.com` and the bucket-less path-style forms.
/// Returns `None` for any other host.
pub fn parse_storage_host(host: &str) -> Option<StorageHost> {
    let host = host.to_ascii_lowercase();
    let prefix = host.strip_suffix(AWS_DOMAIN_SUFFIX)?;
    let labels: Vec<&str> = prefix.split('.').collect();

    let marker = labels
        .iter()
        .position(|label| *label == "s3" || label.starts_with("s3-"))?;

    let bucket = if marker == 0 {
        None
    } else {
        Some(labels[..marker].join("."))
    };

    let region = match labels[marker].strip_prefix("s3-") {
        Some(region) => Some(region.to_string()),
        None => labels[marker + 1..]
            .iter()
            .find(|label| **label != "dualstack")
            .map(|label| label.to_string()),
    };

    Some(StorageHost { bucket, region })
}

/// Whether `host` belongs to the object storage service.
pub fn is_storage_host(host: &str) -> bool {
    parse_storage_host(host).is_some()
}

/// Derive the storage key from a parsed URL.
///
/// The leading `/` is removed, the path is percent-decoded, and a first segment
/// equal to `bucket_name` is stripped so path-style and virtual-hosted URLs
/// for the same object yield the same key.
pub fn extract_storage_key(url: &Url, bucket_name: &str) -> StorageUrlResult<String> {
    let path = url.path();
    let trimmed = path.strip_prefix('/').unwrap_or(path);

    let decoded = urlencoding::decode(trimmed)
        .map_err(|_| StorageUrlError::InvalidEncoding(url.to_string()))?;

    let key = match decoded.split_once('/') {
        Some((first, rest)) if first == bucket_name => rest,
        None if decoded == bucket_name => "",
        _ => &*decoded,
    };

    if key.is_empty() {
        return Err(StorageUrlError::EmptyKey(url.to_string()));
    }

    Ok(key.to_string())
}

/// An object located from a storage URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageObject {
    /// Bucket named by the host, or the configured bucket for path-style URLs.
    pub bucket: String,
    pub region: Option<String>,
    pub key: String,
}

impl StorageObject {
    /// Canonical virtual-hosted URL of the object.
    pub fn canonical_url(&self) -> String {
        object_url(&self.bucket, self.region.as_deref(), &self.key)
    }
}

/// Parse `raw` and locate the object it refers to, requiring a storage host.
pub fn locate_object(raw: &str, bucket_name: &str) -> StorageUrlResult<StorageObject> {
    let url = Url::parse(raw).map_err(|e| StorageUrlError::InvalidUrl(format!("{}: {}", raw, e)))?;
    let host = url
        .host_str()
        .ok_or_else(|| StorageUrlError::InvalidUrl(format!("{}: missing host", raw)))?;

    let StorageHost { bucket, region } = parse_storage_host(host)
        .ok_or_else(|| StorageUrlError::NotStorageHost(host.to_string()))?;
    let key = extract_storage_key(&url, bucket_name)?;

    Ok(StorageObject {
        bucket: bucket.unwrap_or_else(|| bucket_name.to_string()),
        region,
        key,
    })
}

/// Generate the public URL for an object.
///
/// Uses the standard virtual-hosted format when a region is known:
/// `https://{bucket}.s3.{region}.amazonaws.com/{key}`, and the global
/// endpoint otherwise.
pub fn object_url(bucket: &str, region: Option<&str>, key: &str) -> String {
    match region {
        Some(region) => format!("https://{}.s3.{}.amazonaws.com/{}", bucket, region, key),
        None => format!("https://{}.s3.amazonaws.com/{}", bucket, key),
    }
}
