//! Classification: does a string need to go through the proxy?

use mediagate_core::constants::PROXY_PATH_MARKER;
use mediagate_core::ConversionError;
use mediagate_storage::is_storage_host;
use url::Url;

use crate::converter::UrlConverter;

impl UrlConverter {
    /// Whether `url` must be rewritten into a proxy URL.
    ///
    /// True for object storage hosts and for URLs under the configured API base
    /// that are not proxied yet. False for empty strings, `data:` URLs, proxy
    /// URLs and anything unparsable.
    pub fn needs_conversion(&self, url: &str) -> bool {
        self.classify(url).is_ok()
    }

    /// Classify `url`, returning the parsed URL when it is eligible.
    pub(crate) fn classify(&self, url: &str) -> Result<Url, ConversionError> {
        if url.is_empty() {
            return Err(ConversionError::NotStorageUrl(String::new()));
        }
        if url.starts_with("data:") {
            return Err(ConversionError::DataUrl);
        }
        if url.contains(PROXY_PATH_MARKER) {
            return Err(ConversionError::AlreadyProxied);
        }

        let own_api = self.is_own_api_url(url);

        let parsed = match Url::parse(url) {
            Ok(parsed) => parsed,
            Err(e) if own_api || url.contains("amazonaws.com") => {
                return Err(ConversionError::InvalidUrl(format!("{}: {}", url, e)));
            }
            Err(_) => return Err(ConversionError::NotStorageUrl(url.to_string())),
        };

        let storage_host = parsed.host_str().map(is_storage_host).unwrap_or(false);
        if storage_host || own_api {
            Ok(parsed)
        } else {
            Err(ConversionError::NotStorageUrl(url.to_string()))
        }
    }

    /// Whether `url` sits under the API base, on a path boundary.
    fn is_own_api_url(&self, url: &str) -> bool {
        if !self.config.has_api_base() {
            return false;
        }
        match url.strip_prefix(self.config.api_base.as_str()) {
            Some(rest) => rest.is_empty() || rest.starts_with(['/', '?', '#']),
            None => false,
        }
    }
}
