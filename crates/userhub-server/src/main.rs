//! # Userhub Server
//!
//! Main entry point for the Userhub application: a cache-aside user CRUD
//! service backed by MySQL and fronted by Redis.

use std::sync::Arc;
use tokio::signal;
use tracing::{error, info};
use userhub_config::{AppConfig, ConfigLoader};
use userhub_core::UserHubResult;
use userhub_repository::{create_pool, MySqlUserRepository};
use userhub_rest::{create_router, AppState};
use userhub_service::{RedisCacheService, UserServiceImpl};

mod startup;

#[tokio::main]
async fn main() {
    init_logging();

    info!("Starting Userhub server...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run().await {
        error!("Application error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> UserHubResult<()> {
    let config_loader = ConfigLoader::from_default_location()?;
    let config = config_loader.get().await;

    // Store: MySQL pool plus schema bootstrap.
    let db_pool = create_pool(&config.database).await?;
    db_pool.run_migrations().await?;

    // Cache: Redis addressed by host and port.
    let cache = create_cache(&config)?;

    // Explicit dependency wiring: repository -> service -> state -> router.
    let repository = Arc::new(MySqlUserRepository::new(db_pool.clone()));
    let user_service = Arc::new(UserServiceImpl::new(repository, cache));
    let state = AppState::new(user_service);
    let router = create_router(state);

    let addr = config.server.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| userhub_core::UserHubError::Internal(format!("Failed to bind: {}", e)))?;

    startup::print_startup_info(&config.server.host, config.server.port);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| userhub_core::UserHubError::Internal(format!("Server error: {}", e)))?;

    db_pool.close().await;
    info!("Server shutdown complete");
    Ok(())
}

/// Builds the cache service from configuration.
///
/// A misconfigured pool is a startup error; a disabled cache degrades every
/// read to a store round trip.
fn create_cache(config: &AppConfig) -> UserHubResult<Arc<RedisCacheService>> {
    if !config.redis.enabled {
        info!("Redis cache disabled, reads will always hit the store");
        return Ok(Arc::new(RedisCacheService::disabled()));
    }

    info!("Connecting to Redis at {}", config.redis.url());
    let pool = deadpool_redis::Config::from_url(config.redis.url())
        .create_pool(Some(deadpool_redis::Runtime::Tokio1))
        .map_err(|e| {
            userhub_core::UserHubError::Cache(format!("Failed to create Redis pool: {}", e))
        })?;

    Ok(Arc::new(RedisCacheService::new(Arc::new(pool))))
}

fn init_logging() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,userhub=debug,tower_http=debug"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        _ = terminate => {
            info!("Received terminate signal, initiating graceful shutdown...");
        }
    }
}
