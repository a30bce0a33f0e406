//! Web server wiring.

use std::net::SocketAddr;

use delivery::DeliveryStore;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::Config;
use crate::routes::{router, AppState};

/// Build the store, seed it if configured, and serve the API.
pub async fn serve(
    config: Config,
    host_override: Option<String>,
    port_override: Option<u16>,
) -> anyhow::Result<()> {
    let host = host_override.unwrap_or_else(|| config.server.host.clone());
    let port = port_override.unwrap_or(config.server.port);

    let mut store = DeliveryStore::new();
    if config.delivery.seed_demo {
        delivery::seed::seed_demo_data(&mut store)?;
        info!("demo data loaded");
    }

    let state = AppState::new(store, config);
    let app = router(state).layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("{host}:{port}").parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "parceldesk listening");
    axum::serve(listener, app).await?;

    Ok(())
}
