mod api;
mod middleware;

use anyhow::Context;
use catalog_core::{AppConfig, CatalogService, InMemoryCatalog};
use tracing_subscriber::EnvFilter;

use crate::api::{build_app, rate_limit_state, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = catalog_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let catalog = load_catalog(&config)?;
    let products = catalog.product_count();
    let state = AppState {
        service: CatalogService::new(catalog),
        default_page_size: config.default_page_size,
    };
    let app = build_app(state, rate_limit_state(&config));

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    tracing::info!(
        addr = %config.bind_addr,
        env = %config.env,
        products,
        "catalog server listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

fn load_catalog(config: &AppConfig) -> anyhow::Result<InMemoryCatalog> {
    match &config.data_path {
        Some(path) => {
            let catalog = catalog_store::load_catalog(path)
                .with_context(|| format!("failed to load catalog from {}", path.display()))?;
            tracing::info!(path = %path.display(), "loaded catalog file");
            Ok(catalog)
        }
        None => {
            tracing::info!("using built-in catalog");
            Ok(catalog_store::fixture_catalog())
        }
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to listen for ctrl-c");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("received shutdown signal, starting graceful shutdown");
}
