use crate::config::BakeryConfig;
use crate::database::sqlite::SqliteRepository;
use crate::database::BakeryRepository;
use anyhow::Context;
use axum::Router;
use sqlx::migrate::MigrateDatabase;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Pool, Sqlite};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

pub mod config;
pub mod database;
pub mod domain;
mod features;


#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<dyn BakeryRepository>,
    pub config: Arc<BakeryConfig>,
}

/// Builds the full application router over the given state.
pub fn app(state: AppState) -> Router {
    features::api_router()
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // determine environment variables
    dotenv::dotenv().ok();

    // load centralized config
    let config = BakeryConfig::from_env();
    init_tracing(&config);

    let pool = connect_database(&config).await?;

    // run migrations
    sqlx::migrate!()
        .run(&pool)
        .await
        .context("Failed to run database migrations")?;
    tracing::info!("database migrations are up to date");

    let app_state = AppState {
        repo: Arc::new(SqliteRepository::new(pool.clone())),
        config: Arc::new(config),
    };

    let addr = SocketAddr::new(app_state.config.host, app_state.config.port);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context(format!("Failed to bind to {}", addr))?;
    tracing::info!(%addr, "server listening");

    axum::serve(listener, app(app_state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    tracing::info!("server shut down");

    Ok(())
}

fn init_tracing(config: &BakeryConfig) {
    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    if config.log_json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

// create the database file when missing, then open a pool on it
async fn connect_database(config: &BakeryConfig) -> anyhow::Result<Pool<Sqlite>> {
    if !Sqlite::database_exists(&config.database_url)
        .await
        .unwrap_or(false)
    {
        tracing::info!(url = %config.database_url, "database not found, creating");
        Sqlite::create_database(&config.database_url)
            .await
            .context(format!(
                "Unable to create database at {}",
                config.database_url
            ))?;
    }

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await
        .context(format!("Failed to create pool on {}", config.database_url))?;

    tracing::info!(
        url = %config.database_url,
        max_connections = config.max_connections,
        "connected to database"
    );

    Ok(pool)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("received SIGINT, shutting down"),
        () = terminate => tracing::info!("received SIGTERM, shutting down"),
    }
}
