use anyhow::{Context, Result};
use axum::{Router, extract::FromRef};
use std::{net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::{config::Settings, inventory::Inventory};

// Declare modules
mod config;
mod error;
mod facets;
mod filter;
mod form;
mod inventory;
mod models;
mod pagination;
mod routes;

// Shared application state: configuration plus the immutable listing store.
#[derive(Clone, FromRef)]
struct AppState {
    settings: Arc<Settings>,
    inventory: Arc<Inventory>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file first. Ignore errors (e.g., file not found)
    dotenv::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vizion_finance=info,tower_http=info".into()),
        )
        .with(fmt::layer())
        .init();

    tracing::info!("Initializing Vizion Finance server...");

    // Load configuration
    let settings = config::Settings::new().context("Failed to load configuration")?;
    tracing::info!("Configuration loaded successfully.");

    // Load the vehicle dataset once; it is immutable for the process lifetime.
    let inventory = match settings.inventory_path.as_deref() {
        Some(path) => Inventory::from_file(path)
            .with_context(|| format!("Failed to load inventory from '{path}'"))?,
        None => Inventory::load_bundled().context("Failed to load bundled inventory")?,
    };
    tracing::info!("Inventory loaded: {} listings.", inventory.len());

    let app_state = AppState {
        settings: Arc::new(settings),
        inventory: Arc::new(inventory),
    };

    let router: Router = routes::create_router(app_state.clone());

    // Combine the router with static file serving and request tracing.
    let app = router
        .nest_service("/static", ServeDir::new("static"))
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = app_state
        .settings
        .server_address
        .parse()
        .with_context(|| {
            format!(
                "Invalid server address format: {}",
                app_state.settings.server_address
            )
        })?;

    let listener = match TcpListener::bind(&addr).await {
        Ok(l) => {
            tracing::info!("Server listening on {}", addr);
            l
        }
        Err(e) => {
            tracing::error!("Failed to bind to address {}: {}", addr, e);
            return Err(e.into());
        }
    };

    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
