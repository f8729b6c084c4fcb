//! Hullulahti - server-rendered availability page for the Ruoholahti
//! Park & Ride (Fintraffic facility 619).
//!
//! Each request fetches the current utilization and the prediction
//! series from the Fintraffic API (through a 300-second revalidation
//! cache), turns them into status sentences and inline SVG charts, and
//! returns a single HTML page. There is no persistence and no state
//! beyond the cache; any upstream failure fails the whole render.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use hll_fintraffic::client::{ParkingClient, DEFAULT_BASE_URL};
use hll_fintraffic::facility::{self, Facility};

mod error;
mod handlers;
mod page;
mod router;
mod state;
mod text;

use state::AppState;

#[derive(Parser)]
#[command(
    name = "hll-web",
    version,
    about = "Ruoholahti Park & Ride availability page"
)]
struct Cli {
    /// Listen address
    #[arg(long, default_value = "0.0.0.0:8080", env = "HLL_LISTEN")]
    listen: SocketAddr,

    /// Fintraffic API base URL
    #[arg(long, default_value = DEFAULT_BASE_URL, env = "HLL_BASE_URL")]
    base_url: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let client = Arc::new(ParkingClient::new(cli.base_url, facility::RUOHOLAHTI));
    let facility = Facility::lookup(facility::RUOHOLAHTI)
        .context("facility missing from the embedded fixture")?;
    let state = AppState::new(client, facility);
    let app = router::create_router(state);

    info!("serving facility {} on http://{}", facility::RUOHOLAHTI, cli.listen);

    let listener = tokio::net::TcpListener::bind(cli.listen).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
