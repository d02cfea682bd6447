//! Pipeline error taxonomy and HTTP mapping
//!
//! Every step of the pipeline fails with its own variant so callers and
//! tests can tell an ERP rejection from a missing link field or an
//! unreachable provider. There is no catch-all variant; unanticipated
//! panics are handled by the server's panic-catching middleware.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use bridge_core::ValidationError;
use serde::Serialize;
use thiserror::Error;

/// Failures of the delivery-to-shipment pipeline.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// The inbound request body could not be parsed.
    #[error("failed to parse request: {0}")]
    Parse(String),

    /// The inbound request was parsed but is invalid.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The ERP rejected the configured tenant credentials.
    #[error("SAP login failed: {body}")]
    UpstreamAuth { body: String },

    /// Login succeeded but a required session cookie was absent.
    #[error("SAP login response is missing a {marker} cookie")]
    MalformedAuthResponse { marker: &'static str },

    /// An ERP read call returned a non-success status.
    #[error("failed to fetch {what}")]
    UpstreamFetch { what: String },

    /// The ERP answered successfully but the record lacks a required link.
    #[error("{0}")]
    DataIntegrity(String),

    /// An upstream could not be reached at all.
    #[error("upstream transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// The shipping provider was reached and rejected the shipment.
    ///
    /// This variant never aborts the pipeline: the handler converts it into
    /// an outcome with status `Error`, passing the provider's body through
    /// to the caller.
    #[error("shipping provider rejected the shipment (status {status})")]
    ProviderRejected { status: u16, body: String },

    /// Payload serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl IntoResponse for BridgeError {
    fn into_response(self) -> Response {
        let (status, error_type, message, details) = match &self {
            BridgeError::Parse(msg) => (StatusCode::BAD_REQUEST, "PARSE_ERROR", msg.clone(), None),
            BridgeError::Validation(e) => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                e.to_string(),
                None,
            ),
            BridgeError::UpstreamAuth { .. } => (
                StatusCode::BAD_GATEWAY,
                "UPSTREAM_AUTH_ERROR",
                self.to_string(),
                None,
            ),
            BridgeError::MalformedAuthResponse { .. } => (
                StatusCode::BAD_GATEWAY,
                "MALFORMED_AUTH_RESPONSE",
                self.to_string(),
                None,
            ),
            BridgeError::UpstreamFetch { .. } => (
                StatusCode::BAD_GATEWAY,
                "UPSTREAM_FETCH_ERROR",
                self.to_string(),
                None,
            ),
            BridgeError::DataIntegrity(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "DATA_INTEGRITY_ERROR",
                msg.clone(),
                None,
            ),
            BridgeError::Transport(e) => {
                (StatusCode::BAD_GATEWAY, "TRANSPORT_ERROR", e.to_string(), None)
            }
            BridgeError::ProviderRejected { body, .. } => (
                StatusCode::BAD_GATEWAY,
                "PROVIDER_REJECTED",
                self.to_string(),
                Some(body.clone()),
            ),
            BridgeError::Json(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "SERVER_ERROR",
                e.to_string(),
                None,
            ),
        };

        let body = ErrorResponse {
            error: error_type.to_string(),
            message,
            details,
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_error_carries_login_body() {
        let err = BridgeError::UpstreamAuth {
            body: r#"{"error":{"message":"Invalid company"}}"#.to_string(),
        };
        assert!(err.to_string().contains("Invalid company"));
    }

    #[test]
    fn test_fetch_error_names_the_resource() {
        let err = BridgeError::UpstreamFetch {
            what: "business partner 'C100'".to_string(),
        };
        assert_eq!(err.to_string(), "failed to fetch business partner 'C100'");
    }

    #[test]
    fn test_malformed_auth_names_the_missing_cookie() {
        let err = BridgeError::MalformedAuthResponse {
            marker: bridge_core::cookies::ROUTE_MARKER,
        };
        assert!(err.to_string().contains("ROUTEID"));
    }

    #[test]
    fn test_validation_error_converts() {
        let err: BridgeError = ValidationError::NonPositiveDocEntry(0).into();
        assert!(matches!(err, BridgeError::Validation(_)));
    }
}
