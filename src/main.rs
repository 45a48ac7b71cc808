use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use despensa_api::{
    config::Config,
    routes::{create_router, AppState},
    services::{NominatimProvider, SynonymTable},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("despensa_api=info,tower_http=info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    let synonyms = match &config.synonyms_path {
        Some(path) => SynonymTable::from_path(path)
            .with_context(|| format!("Failed to load synonyms from {}", path))?,
        None => SynonymTable::reference().clone(),
    };

    let places = NominatimProvider::new(config.nominatim_url.clone(), &config.nominatim_user_agent)
        .context("Failed to create Nominatim client")?;

    tracing::info!(
        synonyms = synonyms.len(),
        nominatim_url = %config.nominatim_url,
        "Application state initialized"
    );

    let state = Arc::new(AppState::new(synonyms, Arc::new(places), &config));
    let app = create_router(state);

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;

    tracing::info!(address = %address, "Server running");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
