//! HTTP lookup backend
//!
//! Calls `GET {base}/api/autocomplete/{members|bills}?q={text}` and decodes
//! the JSON array into suggestion items.

use std::time::Duration;

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use super::backend::LookupBackend;
use crate::config::ApiConfig;
use crate::error::SuggestError;
use crate::suggest::{BillRecord, MemberRecord, SuggestionItem, SuggestionKind};

const AUTOCOMPLETE_PATH: &str = "api/autocomplete";

/// Lookup backend for the lawgg autocomplete API
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    base_url: Url,
}

impl HttpBackend {
    /// Create a backend for the given origin
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, SuggestError> {
        let base_url = Url::parse(base_url.trim_end_matches('/'))
            .map_err(|e| SuggestError::Config(format!("invalid base url '{}': {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(SuggestError::Config(format!(
                "base url '{}' cannot carry a path",
                base_url
            )));
        }

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SuggestError::Network(e.to_string()))?;

        Ok(Self { client, base_url })
    }

    pub fn from_config(config: &ApiConfig) -> Result<Self, SuggestError> {
        Self::new(&config.base_url(), Duration::from_millis(config.timeout_ms))
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Endpoint URL for `kind` with the percent-encoded query
    pub fn endpoint_url(&self, kind: SuggestionKind, query: &str) -> Url {
        let mut url = self.base_url.clone();
        let base_path = url.path().trim_end_matches('/').to_string();
        url.set_path(&format!("{}/{}/{}", base_path, AUTOCOMPLETE_PATH, kind.endpoint()));
        url.query_pairs_mut().clear().append_pair("q", query);
        url
    }

    async fn fetch<T: DeserializeOwned>(&self, url: Url) -> Result<Vec<T>, SuggestError> {
        let response = self
            .client
            .get(url)
            .header("accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(SuggestError::Api {
                code: status.as_u16(),
                message,
            });
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| SuggestError::Parse(e.to_string()))
    }
}

impl LookupBackend for HttpBackend {
    async fn lookup(
        &self,
        kind: SuggestionKind,
        query: &str,
    ) -> Result<Vec<SuggestionItem>, SuggestError> {
        let url = self.endpoint_url(kind, query);
        log::debug!("GET {}", url);

        match kind {
            SuggestionKind::Member => Ok(self
                .fetch::<MemberRecord>(url)
                .await?
                .into_iter()
                .map(SuggestionItem::from)
                .collect()),
            SuggestionKind::Bill => Ok(self
                .fetch::<BillRecord>(url)
                .await?
                .into_iter()
                .map(SuggestionItem::from)
                .collect()),
        }
    }
}

#[cfg(test)]
#[path = "http_tests.rs"]
mod http_tests;
