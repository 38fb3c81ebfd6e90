//! The URL converter and its per-call options.

use std::fmt;
use std::sync::Arc;

use mediagate_core::constants::VCARD_FIELD;
use mediagate_core::ProxyConfig;

/// Decides whether a record field holds contact card URLs.
pub type FieldPredicate = Arc<dyn Fn(&str) -> bool + Send + Sync>;

/// Per-call conversion options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Build the signed-url request form instead of the direct-key form.
    pub use_signed_url: bool,
    /// Apply contact card rules (`/vcards/` paths map to the vcard route).
    pub is_vcard: bool,
}

impl ConvertOptions {
    pub fn signed() -> Self {
        Self {
            use_signed_url: true,
            is_vcard: false,
        }
    }

    pub fn vcard() -> Self {
        Self {
            use_signed_url: false,
            is_vcard: true,
        }
    }

    pub fn with_vcard(mut self, is_vcard: bool) -> Self {
        self.is_vcard = is_vcard;
        self
    }
}

/// Rewrites storage URLs into proxy URLs.
///
/// Immutable after construction and cheap to clone; share one instance across
/// threads.
#[derive(Clone)]
pub struct UrlConverter {
    pub(crate) config: Arc<ProxyConfig>,
    vcard_field: FieldPredicate,
}

impl UrlConverter {
    pub fn new(config: ProxyConfig) -> Self {
        Self {
            config: Arc::new(config),
            vcard_field: Arc::new(|key: &str| key == VCARD_FIELD),
        }
    }

    /// Create a converter from `.env` and the process environment.
    pub fn from_env() -> Result<Self, anyhow::Error> {
        Ok(Self::new(ProxyConfig::from_env()?))
    }

    /// Replace the predicate selecting contact card fields (default: `vcard`).
    pub fn with_vcard_field<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        self.vcard_field = Arc::new(predicate);
        self
    }

    pub fn config(&self) -> &ProxyConfig {
        &self.config
    }

    pub fn is_vcard_field(&self, key: &str) -> bool {
        (self.vcard_field)(key)
    }
}

impl fmt::Debug for UrlConverter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UrlConverter")
            .field("config", &self.config)
            .field("vcard_field", &"<predicate>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_vcard_field_is_exact() {
        let converter = UrlConverter::new(ProxyConfig::new("", "listings"));
        assert!(converter.is_vcard_field("vcard"));
        assert!(!converter.is_vcard_field("vCard"));
        assert!(!converter.is_vcard_field("vcard_url"));
    }

    #[test]
    fn custom_vcard_field() {
        let converter = UrlConverter::new(ProxyConfig::new("", "listings"))
            .with_vcard_field(|key| key.eq_ignore_ascii_case("contactCard"));
        assert!(converter.is_vcard_field("contactcard"));
        assert!(!converter.is_vcard_field("vcard"));
    }

    #[test]
    fn options_builders() {
        assert_eq!(
            ConvertOptions::signed(),
            ConvertOptions {
                use_signed_url: true,
                is_vcard: false
            }
        );
        assert!(ConvertOptions::signed().with_vcard(true).is_vcard);
        assert!(!ConvertOptions::vcard().use_signed_url);
    }

    #[test]
    fn debug_hides_predicate() {
        let converter = UrlConverter::new(ProxyConfig::new("https://api.example.com", "b"));
        let debug = format!("{:?}", converter);
        assert!(debug.contains("api.example.com"));
        assert!(debug.contains("<predicate>"));
    }
}
