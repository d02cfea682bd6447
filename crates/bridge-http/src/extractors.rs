//! Axum extractor for the inbound shipment request

use async_trait::async_trait;
use axum::extract::{FromRequest, Request};
use axum::Json;
use bridge_core::types::DeliveryRequest;
use bridge_core::validate_request;

use crate::error::BridgeError;

/// Axum extractor for validated delivery requests
///
/// Parses the request body as JSON, deserializes it to a [`DeliveryRequest`]
/// and validates the document entry before the handler runs.
///
/// # Example
///
/// ```ignore
/// use axum::{routing::post, Router};
/// use bridge_http::DeliveryRequestExtractor;
///
/// async fn handler(DeliveryRequestExtractor(request): DeliveryRequestExtractor) {
///     // request is a validated DeliveryRequest
/// }
///
/// let app = Router::new().route("/api/shipment", post(handler));
/// ```
pub struct DeliveryRequestExtractor(pub DeliveryRequest);

#[async_trait]
impl<S> FromRequest<S> for DeliveryRequestExtractor
where
    S: Send + Sync,
{
    type Rejection = BridgeError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(request) = Json::<DeliveryRequest>::from_request(req, state)
            .await
            .map_err(|e| BridgeError::Parse(e.to_string()))?;

        validate_request(&request)?;

        Ok(DeliveryRequestExtractor(request))
    }
}
