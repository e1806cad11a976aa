// SPDX-License-Identifier: MPL-2.0
//! HTTP-backed bundle source.

use super::resolver::BundleSource;
use super::Bundle;
use crate::error::BundleLoadError;
use unic_langid::LanguageIdentifier;

/// User agent advertised on bundle requests.
const USER_AGENT: &str = concat!("LumenShell/", env!("CARGO_PKG_VERSION"));

/// Fetches `<base>/<tag>.json` bundles from a locale file server.
pub struct HttpBundleSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBundleSource {
    /// Creates a source rooted at `base_url`, e.g. `https://host/locales`.
    ///
    /// # Errors
    ///
    /// Returns an error when the HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>) -> Result<Self, BundleLoadError> {
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| BundleLoadError::Network(e.to_string()))?;

        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { client, base_url })
    }

    fn bundle_url(&self, locale: &LanguageIdentifier) -> String {
        format!("{}/{}.json", self.base_url, locale)
    }
}

impl BundleSource for HttpBundleSource {
    async fn fetch(&self, locale: &LanguageIdentifier) -> Result<Bundle, BundleLoadError> {
        let response = self
            .client
            .get(self.bundle_url(locale))
            .send()
            .await
            .map_err(|e| BundleLoadError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(BundleLoadError::Status(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| BundleLoadError::Network(e.to_string()))?;
        serde_json::from_slice(&body).map_err(|e| BundleLoadError::Malformed(e.to_string()))
    }
}
