//! Authorize Request Use Case
//!
//! Runs the per-request guard: token, session lookup, resource ownership
//! and (for mutating requests) body signature. Never writes to the store.

use crate::application::config::WalletConfig;
use crate::domain::repository::SessionStore;
use crate::domain::services::verify_body;
use crate::domain::value_objects::{SessionToken, WalletId};
use crate::error::{WalletError, WalletResult};
use std::sync::Arc;

/// Authorize Request Use Case
pub struct AuthorizeRequestUseCase<S>
where
    S: SessionStore,
{
    sessions: Arc<S>,
    config: Arc<WalletConfig>,
}

impl<S> AuthorizeRequestUseCase<S>
where
    S: SessionStore,
{
    pub fn new(sessions: Arc<S>, config: Arc<WalletConfig>) -> Self {
        Self { sessions, config }
    }

    /// Resolve the session and check it owns the wallet named in the path
    ///
    /// `path_wallet_id` is `None` when the router could not decode the wallet
    /// segment. It is rejected only after the token and session checks.
    pub async fn authorize(
        &self,
        token: Option<&str>,
        path_wallet_id: Option<&str>,
    ) -> WalletResult<WalletId> {
        let token = token
            .and_then(SessionToken::new)
            .ok_or(WalletError::MissingToken)?;

        let session_wallet = match self.sessions.get(&token).await? {
            Some(id) => id,
            None => {
                tracing::debug!("Session not found or expired");
                return Err(WalletError::SessionExpired);
            }
        };

        let requested = path_wallet_id
            .ok_or(WalletError::InvalidWalletId)
            .and_then(WalletId::parse)?;

        if requested != session_wallet {
            tracing::warn!(
                session_wallet = %session_wallet,
                requested_wallet = %requested,
                "Session does not own requested wallet"
            );
            return Err(WalletError::Forbidden);
        }

        Ok(requested)
    }

    /// Verify the body signature of a mutating request
    pub fn verify_body(&self, body: &[u8], signature: Option<&str>) -> WalletResult<()> {
        match signature {
            Some(sig) if verify_body(&self.config.signing_secret, body, sig.trim()) => Ok(()),
            _ => Err(WalletError::InvalidSignature),
        }
    }
}
