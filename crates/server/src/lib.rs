//! # gitscribe-server
//!
//! The HTTP surface over the extraction and summarization pipeline: one
//! endpoint to analyze a repository and one to exchange a funding pledge
//! for a checkout session. Feature availability is decided once at startup
//! from the environment and carried in the shared state.

pub mod config;
pub mod errors;
pub mod handlers;
pub mod router;
pub mod state;

use crate::{config::Config, router::create_router, state::build_app_state};
use tracing::{debug, info};

/// The main entry point for running the server.
pub async fn run(listener: tokio::net::TcpListener, config: Config) -> anyhow::Result<()> {
    debug!(?config, "Server configuration loaded");

    let app_state = build_app_state(config)?;
    let app = create_router(app_state);

    info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
