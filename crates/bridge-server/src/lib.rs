//! # Bridge Server
//!
//! The deployable SAP B1 → MyParcel shipment bridge: configuration,
//! router construction and the request handlers orchestrating the
//! delivery-to-shipment pipeline.
//!
//! Exposed as a library so integration tests can build the router against
//! mock upstreams; the binary in `main.rs` is a thin wrapper.

pub mod config;
pub mod handlers;

use axum::routing::{get, post};
use axum::Router;
use bridge_http::{MyParcelClient, SapClient};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

pub use config::{Config, ConfigError};

/// Per-process state shared by the handlers: the two outbound clients.
///
/// Both clients are stateless (the ERP session lives per request), so the
/// state is cheap to clone into each handler invocation.
#[derive(Clone)]
pub struct AppState {
    pub sap: SapClient,
    pub parcel: MyParcelClient,
}

impl AppState {
    /// Build the outbound clients from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self {
            sap: SapClient::new(config.sap.clone()),
            parcel: MyParcelClient::new(
                config.myparcel_base_url.clone(),
                config.myparcel_api_key.clone(),
            ),
        }
    }
}

/// Build the application router.
///
/// The panic-catching layer is the outer catch-all for unmodeled faults;
/// every anticipated failure is a typed error mapped by `bridge-http`.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/api/shipment", post(handlers::create_shipment))
        .route("/api/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::new())
        .with_state(state)
}
