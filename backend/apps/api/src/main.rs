//! API Server Entry Point
//!
//! Wires PostgreSQL, the Redis session cache and the wallet router.
//! Startup failures surface through `anyhow`; request errors are rendered
//! by the wallet crate.

use axum::{
    Router, http,
    http::{HeaderName, Method, header},
};
use platform::config;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer, ExposeHeaders};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wallet::{PgWalletRepository, RedisSessionStore, WalletConfig, wallet_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,wallet=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Database connection
    let database_url = config::required("DATABASE_URL")?;
    let max_connections = config::parse_or("DATABASE_MAX_CONNECTIONS", 5u32)?;

    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(&database_url)
        .await?;

    tracing::info!(max_connections, "Connected to database");

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    // Session cache
    let redis_url = config::optional("REDIS_URL")
        .unwrap_or_else(|| "redis://127.0.0.1:6379".to_string());
    let sessions = RedisSessionStore::connect(&redis_url).await?;

    tracing::info!("Connected to session cache");

    // Wallet configuration
    let wallet_config = match config::optional("WALLET_SIGNING_SECRET") {
        Some(secret) => WalletConfig::with_secret(secret),
        None if cfg!(debug_assertions) => {
            tracing::warn!("WALLET_SIGNING_SECRET not set, using a random secret");
            WalletConfig::with_random_secret()
        }
        None => return Err(config::ConfigError::Missing("WALLET_SIGNING_SECRET".into()).into()),
    };

    let token_header = HeaderName::from_bytes(wallet_config.token_header.as_bytes())?;
    let signature_header = HeaderName::from_bytes(wallet_config.signature_header.as_bytes())?;

    let repo = PgWalletRepository::new(pool.clone());

    // CORS configuration
    let frontend_origins = config::optional("FRONTEND_ORIGINS")
        .unwrap_or_else(|| "http://localhost:40922,http://127.0.0.1:40922".to_string());

    let allowed_origins: Vec<http::HeaderValue> = frontend_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::HEAD,
            Method::POST,
            Method::PUT,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::ACCEPT,
            token_header.clone(),
            signature_header,
        ]))
        .expose_headers(ExposeHeaders::list([token_header]));

    // Build router
    let app = Router::new()
        .merge(wallet_router(repo, sessions, wallet_config))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let addr: SocketAddr = config::parse_or("BIND_ADDR", SocketAddr::from(([0, 0, 0, 0], 8080)))?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
