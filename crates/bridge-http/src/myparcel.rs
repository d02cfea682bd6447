//! Client for the MyParcel shipment API
//!
//! One call: POST the shipment envelope. The provider's response body is
//! treated as opaque and passed through to the caller in both the success
//! and the rejection case.

use std::time::Duration;

use bridge_core::types::ShipmentPayload;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;

use crate::error::BridgeError;

/// Versioned media type the provider requires for shipment creation.
pub const SHIPMENT_MEDIA_TYPE: &str = "application/vnd.shipment+json; charset=utf-8; version=1.1";

/// Fixed client identifier sent as the user-agent.
pub const USER_AGENT: &str = "CustomApiCall/2";

/// HTTP client for the provider's shipment resource.
#[derive(Clone)]
pub struct MyParcelClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl MyParcelClient {
    /// Create a client for the given provider endpoint and pre-shared token.
    ///
    /// The token is sent verbatim as the `Authorization` header, so it must
    /// include its scheme (e.g. `bearer <key>`).
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: Client::builder()
                .user_agent(USER_AGENT)
                .timeout(Duration::from_secs(30))
                .build()
                .unwrap(),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Create a shipment and return the provider's raw response body.
    ///
    /// A non-success status becomes [`BridgeError::ProviderRejected`], still
    /// carrying the raw body so the caller can inspect the provider's
    /// detail; a send failure becomes [`BridgeError::Transport`].
    pub async fn create_shipment(&self, payload: &ShipmentPayload) -> Result<String, BridgeError> {
        let url = format!("{}/shipments", self.base_url.trim_end_matches('/'));
        let body = serde_json::to_vec(payload)?;

        tracing::debug!(%url, "submitting shipment to provider");

        let response = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, SHIPMENT_MEDIA_TYPE)
            .header(AUTHORIZATION, &self.api_key)
            .body(body)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        if status.is_success() {
            Ok(body)
        } else {
            Err(BridgeError::ProviderRejected {
                status: status.as_u16(),
                body,
            })
        }
    }
}
