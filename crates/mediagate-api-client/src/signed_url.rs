//! Signed URL requests.
//!
//! The backend receives the original storage URL (not the extracted key) and
//! does its own key extraction before signing. Two variants are offered:
//! [`ApiClient::try_fetch_signed_url`] reports every failure, while
//! [`ApiClient::fetch_signed_url`] logs failures and falls back to the source
//! URL so a render path always gets a usable string.

use futures::future::join_all;
use mediagate_core::constants::SIGNED_URL_PATH;
use serde::Deserialize;
use thiserror::Error;

use crate::ApiClient;

const GENERIC_FAILURE: &str = "Failed to get signed URL";

/// JSON envelope returned by the signed-url endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignedUrlResponse {
    #[serde(default)]
    pub success: bool,
    pub signed_url: Option<String>,
    pub error: Option<String>,
}

impl SignedUrlResponse {
    fn into_result(self) -> Result<String, SignedUrlError> {
        match self.signed_url {
            Some(url) if self.success && !url.is_empty() => Ok(url),
            _ => Err(SignedUrlError::Rejected(
                self.error.unwrap_or_else(|| GENERIC_FAILURE.to_string()),
            )),
        }
    }
}

/// Signed URL request errors
#[derive(Debug, Error)]
pub enum SignedUrlError {
    #[error("Signed URL request failed with status {status}: {reason}")]
    Http { status: u16, reason: String },

    #[error("Signed URL request rejected: {0}")]
    Rejected(String),

    #[error("Failed to send signed URL request")]
    Request(#[source] reqwest::Error),

    #[error("Failed to parse signed URL response")]
    Decode(#[source] reqwest::Error),
}

impl SignedUrlError {
    /// HTTP status for non-2xx responses.
    pub fn status(&self) -> Option<u16> {
        match self {
            SignedUrlError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl ApiClient {
    /// Request a signed URL for `source_url`, reporting any failure.
    pub async fn try_fetch_signed_url(&self, source_url: &str) -> Result<String, SignedUrlError> {
        let url = self.build_url(SIGNED_URL_PATH);

        let response = self
            .client()
            .get(&url)
            .query(&[("url", source_url)])
            .send()
            .await
            .map_err(SignedUrlError::Request)?;

        let status = response.status();
        if !status.is_success() {
            return Err(SignedUrlError::Http {
                status: status.as_u16(),
                reason: status
                    .canonical_reason()
                    .unwrap_or("Unknown status")
                    .to_string(),
            });
        }

        let body: SignedUrlResponse = response.json().await.map_err(SignedUrlError::Decode)?;

        body.into_result()
    }

    /// Request a signed URL for `source_url`, falling back to `source_url`.
    pub async fn fetch_signed_url(&self, source_url: &str) -> String {
        match self.try_fetch_signed_url(source_url).await {
            Ok(signed) => {
                tracing::debug!(source_url = %source_url, "Signed URL issued");
                signed
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    status = e.status(),
                    source_url = %source_url,
                    "Signed URL request failed, using source URL"
                );
                source_url.to_string()
            }
        }
    }

    /// Request signed URLs for many sources concurrently.
    ///
    /// Results keep the input order; each failed request falls back to its
    /// own source URL.
    pub async fn fetch_signed_urls<S: AsRef<str>>(&self, source_urls: &[S]) -> Vec<String> {
        join_all(
            source_urls
                .iter()
                .map(|source| self.fetch_signed_url(source.as_ref())),
        )
        .await
    }
}
