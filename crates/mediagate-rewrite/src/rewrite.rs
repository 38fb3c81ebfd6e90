//! Single URL rewrite.

use mediagate_core::constants::{DIRECT_KEY_PATH, SIGNED_URL_PATH, VCARDS_SEGMENT, VCARD_PATH};
use mediagate_core::{ConversionError, ErrorMetadata, LogLevel};
use mediagate_storage::{extract_storage_key, StorageUrlError};
use url::Url;

use crate::converter::{ConvertOptions, UrlConverter};

impl UrlConverter {
    /// Rewrite `url` into a proxy URL, or explain why it was left alone.
    pub fn try_convert(&self, url: &str, options: ConvertOptions) -> Result<String, ConversionError> {
        if options.is_vcard {
            if let Some(proxied) = self.vcard_proxy_url(url) {
                return Ok(proxied);
            }
        }

        let parsed = self.classify(url)?;
        let key = extract_storage_key(&parsed, &self.config.bucket_name).map_err(from_storage)?;

        let route = if options.use_signed_url {
            SIGNED_URL_PATH
        } else {
            DIRECT_KEY_PATH
        };

        Ok(format!(
            "{}?key={}",
            self.config.endpoint(route),
            urlencoding::encode(&key)
        ))
    }

    /// Rewrite `url` into a proxy URL, returning it unchanged when it is not
    /// eligible or cannot be converted.
    pub fn convert(&self, url: &str, options: ConvertOptions) -> String {
        match self.try_convert(url, options) {
            Ok(proxied) => proxied,
            Err(error) => {
                log_skipped(url, &error);
                url.to_string()
            }
        }
    }

    /// [`convert`](Self::convert) for values that may be absent.
    pub fn convert_optional(&self, url: Option<&str>, options: ConvertOptions) -> Option<String> {
        url.map(|url| self.convert(url, options))
    }

    /// Contact cards under `/vcards/` go through the vcard route by filename.
    fn vcard_proxy_url(&self, url: &str) -> Option<String> {
        if url.starts_with("data:") {
            return None;
        }
        let parsed = Url::parse(url).ok()?;
        let path = parsed.path();
        if !path.contains(VCARDS_SEGMENT) {
            return None;
        }
        let filename = path.rsplit('/').next().filter(|name| !name.is_empty())?;
        Some(format!("{}/{}", self.config.endpoint(VCARD_PATH), filename))
    }
}

fn from_storage(err: StorageUrlError) -> ConversionError {
    match err {
        StorageUrlError::EmptyKey(url) => ConversionError::EmptyKey(url),
        StorageUrlError::InvalidEncoding(url) => ConversionError::InvalidKeyEncoding(url),
        StorageUrlError::InvalidUrl(msg) => ConversionError::InvalidUrl(msg),
        StorageUrlError::NotStorageHost(host) => ConversionError::NotStorageUrl(host),
    }
}

fn log_skipped(url: &str, error: &ConversionError) {
    let error_code = error.error_code();
    match error.log_level() {
        LogLevel::Debug => {
            tracing::debug!(url = %url, error = %error, error_code = error_code, "URL left unchanged");
        }
        LogLevel::Warn => {
            tracing::warn!(url = %url, error = %error, error_code = error_code, "URL left unchanged");
        }
        LogLevel::Error => {
            tracing::error!(url = %url, error = %error, error_code = error_code, "URL left unchanged");
        }
    }
}
