mod models;
mod handlers;
mod services;
mod middleware;
mod store;
mod state;
mod views;
mod routes;
mod config;
mod errors;

use anyhow::Context;
use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize basic tracing subscriber
    tracing_subscriber::fmt::init();

    // Load configuration
    let config = Config::load().context("Failed to load configuration")?;

    // Stores are loaded here, so a corrupt data file stops start-up
    let app = routes::build(&config).context("Failed to load application data")?;

    let address = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;

    tracing::info!("Serving {:?} app on {}", config.server.app, address);
    axum::serve(listener, app.into_make_service())
        .await
        .context("Server error")?;

    Ok(())
}

#[cfg(test)]
mod tests;
