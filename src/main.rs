// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! NutriFlow API Server
//!
//! Food search, a persistent food log and nutrition targets for a single
//! user, served as a JSON API.

use nutriflow::{
    config::Config,
    db::FileBlobStore,
    services::{FoodLogStore, LocalCatalog, SearchFederation, UsdaClient},
    AppState,
};
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const CACHE_PURGE_INTERVAL: Duration = Duration::from_secs(10 * 60);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize structured JSON logging
    init_logging()?;

    // Load configuration from environment
    let config = Config::from_env()?;
    tracing::info!(port = config.port, "Starting NutriFlow API");

    // Food log blob store
    let blob_store = FileBlobStore::new(&config.data_dir);
    tracing::info!(dir = %blob_store.dir().display(), "Using file blob store");
    let food_log = FoodLogStore::new(Arc::new(blob_store));

    // Local catalog, compiled in unless overridden
    let catalog = match &config.local_foods_path {
        Some(path) => LocalCatalog::load_from_file(path)?,
        None => LocalCatalog::embedded()?,
    };
    tracing::info!(foods = catalog.len(), "Loaded local food catalog");
    let catalog = Arc::new(catalog);

    // FoodData Central client, shared by the proxy and federated search
    let usda = UsdaClient::new(&config.usda_api_base, &config.usda_api_key);
    let search = SearchFederation::new(
        catalog,
        Arc::new(usda.clone()),
        config.search_threshold,
    );

    // Periodically drop stale cached USDA responses
    let purge_client = usda.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(CACHE_PURGE_INTERVAL);
        loop {
            interval.tick().await;
            purge_client.purge_expired();
        }
    });

    // Build shared state
    let state = Arc::new(AppState {
        config: config.clone(),
        food_log,
        search,
        usda,
    });

    // Build router
    let app = nutriflow::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() -> anyhow::Result<()> {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("nutriflow=debug".parse()?)
                .add_directive("info".parse()?),
        )
        .with(format)
        .init();
    Ok(())
}
