//! HTTP Handlers

use crate::application::config::WalletConfig;
use crate::application::credit::CreditWalletUseCase;
use crate::application::login::{LoginInput, LoginUseCase};
use crate::application::replenishment_stats::ReplenishmentStatsUseCase;
use crate::application::wallet_query::WalletQueryUseCase;
use crate::domain::repository::{LedgerStore, SharedSessionStore};
use crate::domain::value_objects::{CreditAmount, Month, StatsPeriod};
use crate::error::{WalletError, WalletResult};
use crate::presentation::dto::{
    BalanceResponse, CreditRequest, LoginRequest, LoginResponse, ReplenishmentStatsResponse,
    StatsQuery,
};
use crate::presentation::middleware::AuthenticatedWallet;
use axum::Json;
use axum::body::Bytes;
use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Extension, Path, Query, State};
use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// Shared state for wallet handlers
#[derive(Clone)]
pub struct WalletAppState<R, S>
where
    R: LedgerStore,
    S: SharedSessionStore,
{
    pub repo: Arc<R>,
    pub sessions: Arc<S>,
    pub config: Arc<WalletConfig>,
}

/// POST /login
pub async fn login<R, S>(
    State(state): State<WalletAppState<R, S>>,
    body: Bytes,
) -> WalletResult<Response>
where
    R: LedgerStore,
    S: SharedSessionStore,
{
    let req: LoginRequest = parse_json(&body)?;

    let use_case = LoginUseCase::new(
        state.repo.clone(),
        state.sessions.clone(),
        state.config.clone(),
    );
    let output = use_case.execute(LoginInput { email: req.email }).await?;

    let name = HeaderName::from_bytes(state.config.token_header.as_bytes())
        .map_err(|e| WalletError::Internal(format!("invalid token header name: {}", e)))?;
    let value = HeaderValue::from_str(output.session_token.as_str())
        .map_err(|_| WalletError::Internal("session token is not a valid header value".into()))?;

    let mut response = Json(LoginResponse {
        wallet_id: output.wallet_id.get(),
        expires_in: output.expires_in_secs,
    })
    .into_response();
    response.headers_mut().insert(name, value);

    Ok(response)
}

/// HEAD /wallets/{id}
pub async fn check_resource<R, S>(
    State(state): State<WalletAppState<R, S>>,
    Extension(auth): Extension<AuthenticatedWallet>,
) -> WalletResult<StatusCode>
where
    R: LedgerStore,
    S: SharedSessionStore,
{
    let use_case = WalletQueryUseCase::new(state.repo.clone());

    if use_case.exists(auth.wallet_id).await? {
        Ok(StatusCode::OK)
    } else {
        Ok(StatusCode::NOT_FOUND)
    }
}

/// GET /wallets/{id}
pub async fn check_balance<R, S>(
    State(state): State<WalletAppState<R, S>>,
    Extension(auth): Extension<AuthenticatedWallet>,
) -> WalletResult<Json<BalanceResponse>>
where
    R: LedgerStore,
    S: SharedSessionStore,
{
    let use_case = WalletQueryUseCase::new(state.repo.clone());
    let wallet = use_case.get_balance(auth.wallet_id).await?;

    Ok(Json(BalanceResponse::from(&wallet)))
}

/// PUT /wallets/{id}
///
/// The guard has already consumed and verified the body.
pub async fn upgrade_balance<R, S>(
    State(state): State<WalletAppState<R, S>>,
    Extension(auth): Extension<AuthenticatedWallet>,
) -> WalletResult<Json<BalanceResponse>>
where
    R: LedgerStore,
    S: SharedSessionStore,
{
    let body = auth
        .body
        .as_ref()
        .ok_or_else(|| WalletError::InvalidInput("request body required".into()))?;
    let req: CreditRequest = parse_json(body)?;
    let amount = CreditAmount::parse(&req.balance)?;

    let use_case = CreditWalletUseCase::new(state.repo.clone());
    let wallet = use_case.execute(auth.wallet_id, amount).await?;

    Ok(Json(BalanceResponse::from(&wallet)))
}

/// GET /wallets/{id}/replenishments/{month}
pub async fn replenishments<R, S>(
    State(state): State<WalletAppState<R, S>>,
    Extension(auth): Extension<AuthenticatedWallet>,
    path: Result<Path<(String, String)>, PathRejection>,
    query: Result<Query<StatsQuery>, QueryRejection>,
) -> WalletResult<Json<ReplenishmentStatsResponse>>
where
    R: LedgerStore,
    S: SharedSessionStore,
{
    let Path((_, month)) = path.map_err(|_| WalletError::InvalidMonth)?;
    let Query(query) = query.map_err(|e| WalletError::InvalidInput(e.body_text()))?;

    let month = Month::parse(&month)?;
    let period = StatsPeriod::resolve(query.year.as_deref(), month)?;

    let use_case = ReplenishmentStatsUseCase::new(state.repo.clone());
    let stats = use_case.execute(auth.wallet_id, period).await?;

    Ok(Json(stats.into()))
}

fn parse_json<T: DeserializeOwned>(body: &[u8]) -> WalletResult<T> {
    serde_json::from_slice(body).map_err(|e| WalletError::InvalidInput(e.to_string()))
}
