use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokedex_server::{
    adapters::InMemoryCreatureRegistry, build_router, config::ServerConfig, AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("📘 Pokedex API initializing...");

    let config = ServerConfig::from_env();

    let registry = Arc::new(InMemoryCreatureRegistry::new());
    registry
        .load(&config.data_path)
        .await
        .with_context(|| format!("Failed to load creatures from {}", config.data_path.display()))?;

    tracing::info!("✅ Creatures loaded from {}", config.data_path.display());
    tracing::info!(
        "⏱️  Admin level-up limit: {} per {:?}",
        config.rate_limit_max,
        config.rate_limit_window
    );

    let state = AppState::new(&config, registry);
    let router = build_router(state);

    let addr = config.bind_addr().context("Invalid POKEDEX_HOST/POKEDEX_PORT")?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("📚 Swagger UI: /swagger-ui");
    tracing::info!("✅ Pokedex API listening on {}", addr);

    axum::serve(listener, router).await?;

    Ok(())
}
