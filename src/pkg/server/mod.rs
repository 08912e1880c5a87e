pub mod handlers;
pub mod router;
pub mod state;
pub mod uispec;

use standard_error::{Interpolate, StandardError};

use crate::{conf::settings, prelude::Result};
use router::build_routes;
use state::AppState;

pub async fn listen() -> Result<()> {
    let port: u16 = settings
        .listen_port
        .parse()
        .map_err(|e: std::num::ParseIntError| {
            StandardError::new("ERR-CONF-001").interpolate_err(e.to_string())
        })?;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;
    tracing::info!("Listening at port {}", port);
    tokio::select! {
        r = axum::serve(listener, build_routes(AppState::new())) => {
            tracing::warn!("server ended unexpectedly: {:?}", &r)
        },
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("received ctrl+c interrupt, closing server");
        }
    }
    Ok(())
}
