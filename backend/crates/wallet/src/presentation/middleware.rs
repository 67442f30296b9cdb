//! Wallet Middleware
//!
//! Session guard for every `/wallets/...` route. On success the handler
//! receives an [`AuthenticatedWallet`] extension; for mutating methods the
//! raw body travels inside it and the request body itself is left empty.

use crate::application::authorize::AuthorizeRequestUseCase;
use crate::domain::repository::{LedgerStore, SharedSessionStore};
use crate::domain::value_objects::WalletId;
use crate::error::WalletError;
use crate::presentation::handlers::WalletAppState;
use axum::body::{Body, Bytes};
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, Request, State};
use axum::http::Method;
use axum::middleware::Next;
use axum::response::Response;
use std::collections::HashMap;

/// Authenticated request context
#[derive(Debug, Clone)]
pub struct AuthenticatedWallet {
    pub wallet_id: WalletId,
    /// Verified raw body; `Some` only for mutating requests
    pub body: Option<Bytes>,
}

/// Undecoded `{id}` segment of a `/wallets/{id}/...` path
fn raw_wallet_segment(path: &str) -> Option<&str> {
    path.strip_prefix("/wallets/")?.split('/').next()
}

fn is_mutating(method: &Method) -> bool {
    matches!(
        *method,
        Method::PUT | Method::POST | Method::PATCH | Method::DELETE
    )
}

/// Middleware that requires a session owning the wallet in the path
pub async fn require_wallet_session<R, S>(
    State(state): State<WalletAppState<R, S>>,
    path: Result<Path<HashMap<String, String>>, PathRejection>,
    req: Request,
    next: Next,
) -> Result<Response, WalletError>
where
    R: LedgerStore,
    S: SharedSessionStore,
{
    let use_case = AuthorizeRequestUseCase::new(state.sessions.clone(), state.config.clone());

    let token = req
        .headers()
        .get(state.config.token_header.as_str())
        .and_then(|v| v.to_str().ok());

    let path_wallet_id = match &path {
        Ok(Path(params)) => params.get("id").map(String::as_str),
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Path parameters not decodable");
            raw_wallet_segment(req.uri().path())
        }
    };

    let wallet_id = use_case.authorize(token, path_wallet_id).await?;

    let (mut req, body) = if is_mutating(req.method()) {
        let signature = req
            .headers()
            .get(state.config.signature_header.as_str())
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);

        let (parts, body) = req.into_parts();
        let bytes = axum::body::to_bytes(body, state.config.max_body_bytes)
            .await
            .map_err(|_| WalletError::InvalidInput("request body too large or unreadable".into()))?;

        use_case.verify_body(&bytes, signature.as_deref())?;

        (Request::from_parts(parts, Body::empty()), Some(bytes))
    } else {
        (req, None)
    };

    req.extensions_mut()
        .insert(AuthenticatedWallet { wallet_id, body });

    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_wallet_segment() {
        assert_eq!(raw_wallet_segment("/wallets/%FF"), Some("%FF"));
        assert_eq!(raw_wallet_segment("/wallets/1/replenishments/%FF"), Some("1"));
        assert_eq!(raw_wallet_segment("/login"), None);
    }

    #[test]
    fn test_mutating_methods() {
        assert!(is_mutating(&Method::PUT));
        assert!(is_mutating(&Method::POST));
        assert!(!is_mutating(&Method::GET));
        assert!(!is_mutating(&Method::HEAD));
    }
}
