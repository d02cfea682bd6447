//! Client for the SAP Business One service layer
//!
//! Three calls, strictly ordered by the pipeline: login, delivery-note read,
//! business-partner read. The session captured at login is carried as a
//! `Cookie` header on the two reads and is never reused across requests.

use std::time::Duration;

use bridge_core::cookies::{extract_cookie, ROUTE_MARKER, SESSION_MARKER};
use bridge_core::types::{BusinessPartner, DeliveryNote, SessionCookies};
use reqwest::header::{COOKIE, SET_COOKIE};
use reqwest::Client;
use serde_json::json;

use crate::error::BridgeError;

/// Tenant credentials and endpoint for the service layer.
#[derive(Debug, Clone)]
pub struct SapCredentials {
    /// Service-layer base URL, without a trailing slash.
    pub base_url: String,
    pub company_db: String,
    pub username: String,
    pub password: String,
}

/// HTTP client for the delivery-note and business-partner resources.
///
/// Holds no session state; each pipeline run establishes its own session
/// via [`SapClient::login`].
#[derive(Clone)]
pub struct SapClient {
    client: Client,
    credentials: SapCredentials,
}

impl SapClient {
    /// Create a client with a bounded per-call timeout.
    pub fn new(credentials: SapCredentials) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(30))
                .build()
                .unwrap(),
            credentials,
        }
    }

    fn url(&self, resource: &str) -> String {
        format!(
            "{}/{}",
            self.credentials.base_url.trim_end_matches('/'),
            resource
        )
    }

    /// Log in to the service layer and capture the session cookies.
    ///
    /// A non-success status fails with the ERP's raw error body. A success
    /// response missing either expected cookie fails fast instead of letting
    /// later calls proceed with a blank credential.
    pub async fn login(&self) -> Result<SessionCookies, BridgeError> {
        let url = self.url("Login");
        tracing::debug!(%url, company_db = %self.credentials.company_db, "logging in to service layer");

        let response = self
            .client
            .post(&url)
            .json(&json!({
                "CompanyDB": self.credentials.company_db,
                "UserName": self.credentials.username,
                "Password": self.credentials.password,
            }))
            .send()
            .await?;

        if !response.status().is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(BridgeError::UpstreamAuth { body });
        }

        let set_cookies: Vec<String> = response
            .headers()
            .get_all(SET_COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .map(str::to_string)
            .collect();

        let session = extract_cookie(&set_cookies, SESSION_MARKER).ok_or(
            BridgeError::MalformedAuthResponse {
                marker: SESSION_MARKER,
            },
        )?;
        let route = extract_cookie(&set_cookies, ROUTE_MARKER).ok_or(
            BridgeError::MalformedAuthResponse {
                marker: ROUTE_MARKER,
            },
        )?;

        Ok(SessionCookies { session, route })
    }

    /// Fetch a delivery note by document entry.
    pub async fn delivery_note(
        &self,
        session: &SessionCookies,
        doc_entry: i64,
    ) -> Result<DeliveryNote, BridgeError> {
        let url = self.url(&format!("DeliveryNotes({doc_entry})"));

        let response = self
            .client
            .get(&url)
            .header(COOKIE, session.cookie_header())
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(BridgeError::UpstreamFetch {
                what: format!("delivery note {doc_entry}"),
            });
        }

        Ok(response.json::<DeliveryNote>().await?)
    }

    /// Fetch a business partner by card code.
    pub async fn business_partner(
        &self,
        session: &SessionCookies,
        card_code: &str,
    ) -> Result<BusinessPartner, BridgeError> {
        let url = self.url(&format!("BusinessPartners('{card_code}')"));

        let response = self
            .client
            .get(&url)
            .header(COOKIE, session.cookie_header())
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(BridgeError::UpstreamFetch {
                what: format!("business partner '{card_code}'"),
            });
        }

        Ok(response.json::<BusinessPartner>().await?)
    }
}
