mod config;
mod models;
mod profile_client;
mod renderer;
mod routes;
mod state;
mod views;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::profile_client::ProfileClient;
use crate::renderer::ProfileRenderer;
use crate::routes::build_router;
use crate::state::AppState;
use crate::views::{Site, Theme};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting portfolio web v{}", env!("CARGO_PKG_VERSION"));

    // One fetch for the lifetime of the page; the server starts in the Unloaded state
    let client = ProfileClient::new(config.profile_api_url.clone());
    info!("Fetching profile from {}", client.url());
    let renderer = ProfileRenderer::mount(client);

    let state = AppState {
        renderer,
        site: Arc::new(Site {
            brand: config.site_brand.clone(),
            theme: Theme::default(),
        }),
    };

    let app = build_router(state).layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
