//! SAP B1 → MyParcel shipment bridge
//!
//! Configure through the environment (see the `config` module), then run:
//!
//!   SAP_BASE_URL=https://sap.example:50000/b1s/v1 \
//!   SAP_COMPANY_DB=SBODEMO SAP_USERNAME=manager SAP_PASSWORD=... \
//!   MYPARCEL_API_KEY="bearer ..." cargo run --package bridge-server

use bridge_server::{app, AppState, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bridge_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!("configuration error: {err}");
            std::process::exit(1);
        }
    };

    let state = AppState::from_config(&config);
    let router = app(state);

    tracing::info!("shipment bridge listening on http://{}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .unwrap();
    axum::serve(listener, router).await.unwrap();
}
