//! Request handlers
//!
//! `create_shipment` is the whole pipeline: login, delivery-note read,
//! partner resolution, mapping, submission. The four outbound calls are
//! strictly ordered dependencies, so the handler awaits them in sequence;
//! a disconnecting caller drops the future and aborts whatever call is in
//! flight.

use axum::extract::State;
use axum::Json;
use bridge_core::mapper::map_shipment;
use bridge_core::types::{OutcomeStatus, ShipmentOutcome, ShipmentPayload};
use bridge_http::{BridgeError, DeliveryRequestExtractor};
use serde::Serialize;
use uuid::Uuid;

use crate::AppState;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    version: String,
}

/// Health check endpoint
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// `POST /api/shipment`: bridge one delivery note to the shipping provider.
///
/// Returns `200 OK` with a [`ShipmentOutcome`] once the provider has been
/// reached, whether it accepted or rejected the shipment; the provider's
/// raw body is passed through either way. Any failure before that point
/// aborts with a typed 5xx problem response.
pub async fn create_shipment(
    State(state): State<AppState>,
    DeliveryRequestExtractor(request): DeliveryRequestExtractor,
) -> Result<Json<ShipmentOutcome>, BridgeError> {
    let request_id = Uuid::new_v4();
    let doc_entry = request.doc_entry;

    tracing::info!(%request_id, doc_entry, "processing shipment request");

    let session = state.sap.login().await?;

    let note = state.sap.delivery_note(&session, doc_entry).await?;
    let card_code = note
        .card_code()
        .ok_or_else(|| {
            BridgeError::DataIntegrity("CardCode not found in delivery note".to_string())
        })?
        .to_string();

    tracing::info!(%request_id, %card_code, "resolving business partner");

    let partner = state.sap.business_partner(&session, &card_code).await?;
    let contact = partner.resolve();

    let payload = ShipmentPayload::single(map_shipment(&contact, doc_entry));

    let (status, body) = match state.parcel.create_shipment(&payload).await {
        Ok(body) => (OutcomeStatus::Success, body),
        Err(BridgeError::ProviderRejected { status, body }) => {
            tracing::warn!(%request_id, status, "shipping provider rejected the shipment");
            (OutcomeStatus::Error, body)
        }
        Err(err) => return Err(err),
    };

    tracing::info!(%request_id, outcome = ?status, "pipeline complete");

    Ok(Json(ShipmentOutcome {
        status,
        sap_doc_entry: doc_entry,
        my_parcel: body,
    }))
}
