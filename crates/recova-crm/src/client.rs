// SPDX-FileCopyrightText: 2026 Recova Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for CRM contact lookup.
//!
//! Provides [`CrmClient`] which searches contacts by exact customer name
//! and returns the first match's property map. No retries: any upstream
//! failure is terminal for the request and must be retried by the caller.

use std::time::Duration;

use recova_core::RecovaError;
use reqwest::header::{HeaderMap, HeaderValue};
use tracing::debug;

use crate::types::{ContactProperties, SearchRequest, SearchResponse};

/// HTTP client for the CRM contact-search API.
#[derive(Debug, Clone)]
pub struct CrmClient {
    client: reqwest::Client,
    base_url: String,
}

impl CrmClient {
    /// Creates a new CRM client.
    ///
    /// # Arguments
    /// * `access_token` - CRM private-app bearer token
    /// * `base_url` - CRM API base (e.g. "https://api.hubapi.com")
    pub fn new(access_token: &str, base_url: String) -> Result<Self, RecovaError> {
        let mut headers = HeaderMap::new();
        let bearer = format!("Bearer {access_token}");
        let mut auth = HeaderValue::from_str(&bearer)
            .map_err(|e| RecovaError::Config(format!("invalid CRM access token: {e}")))?;
        auth.set_sensitive(true);
        headers.insert("authorization", auth);
        headers.insert("content-type", HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| RecovaError::Upstream {
                provider: "crm".into(),
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;

        Ok(Self { client, base_url })
    }

    /// Searches the CRM for an exact match on `customer_name`.
    ///
    /// Returns the first match's properties only, never a merge of multiple
    /// records. Zero matches yield [`RecovaError::NotFound`]; transport
    /// failures and non-success statuses yield [`RecovaError::Upstream`].
    pub async fn search_contact(
        &self,
        customer_name: &str,
    ) -> Result<ContactProperties, RecovaError> {
        debug!(customer_name, "searching CRM for contact");

        let url = format!("{}/crm/v3/objects/contacts/search", self.base_url);
        let request = SearchRequest::exact_name_match(customer_name);

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| RecovaError::Upstream {
                provider: "crm".into(),
                message: format!("contact search request failed: {e}"),
                source: Some(Box::new(e)),
            })?;

        let status = response.status();
        debug!(status = %status, "CRM search response received");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RecovaError::upstream(
                "crm",
                format!("contact search returned {status}: {body}"),
            ));
        }

        let body = response.text().await.map_err(|e| RecovaError::Upstream {
            provider: "crm".into(),
            message: format!("failed to read search response body: {e}"),
            source: Some(Box::new(e)),
        })?;
        let search: SearchResponse =
            serde_json::from_str(&body).map_err(|e| RecovaError::Upstream {
                provider: "crm".into(),
                message: format!("failed to parse search response: {e}"),
                source: Some(Box::new(e)),
            })?;

        let first = search.results.into_iter().next().ok_or_else(|| {
            RecovaError::NotFound(format!("no contact found for name: {customer_name}"))
        })?;

        debug!(contact_id = %first.id, "CRM contact matched");
        Ok(first.properties)
    }
}
