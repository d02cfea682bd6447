//! # Bridge HTTP Transport
//!
//! HTTP transport layer for the SAP B1 → MyParcel shipment bridge.
//!
//! This crate provides:
//! - An axum extractor for the inbound shipment request
//! - The pipeline error taxonomy and its mapping to HTTP problem responses
//! - Reqwest-based clients for the two outbound dependencies: the SAP
//!   Business One service layer and the MyParcel shipment API
//!
//! ## Server Example
//!
//! ```ignore
//! use axum::{routing::post, Router};
//! use bridge_http::{BridgeError, DeliveryRequestExtractor};
//!
//! async fn handler(
//!     DeliveryRequestExtractor(request): DeliveryRequestExtractor,
//! ) -> Result<(), BridgeError> {
//!     // request is a validated DeliveryRequest
//!     Ok(())
//! }
//!
//! let app = Router::new().route("/api/shipment", post(handler));
//! ```
//!
//! ## Client Example
//!
//! ```ignore
//! use bridge_http::{SapClient, SapCredentials};
//!
//! let sap = SapClient::new(credentials);
//! let session = sap.login().await?;
//! let note = sap.delivery_note(&session, 42).await?;
//! ```

mod error;
mod extractors;
mod myparcel;
mod sap;

pub use error::{BridgeError, ErrorResponse};
pub use extractors::DeliveryRequestExtractor;
pub use myparcel::MyParcelClient;
pub use sap::{SapClient, SapCredentials};
