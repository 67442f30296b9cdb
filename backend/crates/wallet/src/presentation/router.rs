//! Wallet Router

use crate::application::config::WalletConfig;
use crate::domain::repository::{LedgerStore, SharedSessionStore};
use crate::infra::cache::RedisSessionStore;
use crate::infra::postgres::PgWalletRepository;
use crate::presentation::handlers::{self, WalletAppState};
use crate::presentation::middleware::require_wallet_session;
use axum::{
    Router, middleware,
    routing::{get, post},
};
use std::sync::Arc;

/// Create the wallet router with PostgreSQL ledger and Redis sessions
pub fn wallet_router(
    repo: PgWalletRepository,
    sessions: RedisSessionStore,
    config: WalletConfig,
) -> Router {
    wallet_router_generic(repo, sessions, config)
}

/// Create a generic wallet router for any store implementation
pub fn wallet_router_generic<R, S>(repo: R, sessions: S, config: WalletConfig) -> Router
where
    R: LedgerStore,
    S: SharedSessionStore,
{
    let state = WalletAppState {
        repo: Arc::new(repo),
        sessions: Arc::new(sessions),
        config: Arc::new(config),
    };

    let guarded = Router::new()
        .route(
            "/wallets/{id}",
            get(handlers::check_balance::<R, S>)
                .head(handlers::check_resource::<R, S>)
                .put(handlers::upgrade_balance::<R, S>),
        )
        .route(
            "/wallets/{id}/replenishments/{month}",
            get(handlers::replenishments::<R, S>),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_wallet_session::<R, S>,
        ));

    Router::new()
        .route("/login", post(handlers::login::<R, S>))
        .merge(guarded)
        .with_state(state)
}
