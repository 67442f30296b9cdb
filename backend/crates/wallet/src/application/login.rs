//! Login Use Case
//!
//! Issues a session token for the wallet owned by the user with the given
//! email. There is no credential check; knowing the email is enough.

use crate::application::config::WalletConfig;
use crate::domain::repository::{SessionStore, UserRepository, WalletRepository};
use crate::domain::value_objects::{Email, SessionToken, WalletId};
use crate::error::{WalletError, WalletResult};
use std::sync::Arc;

/// Input DTO for login
#[derive(Debug, Clone)]
pub struct LoginInput {
    pub email: String,
}

/// Output DTO for login
#[derive(Debug, Clone)]
pub struct LoginOutput {
    pub session_token: SessionToken,
    pub wallet_id: WalletId,
    pub expires_in_secs: u64,
}

/// Login Use Case
pub struct LoginUseCase<R, S>
where
    R: UserRepository + WalletRepository,
    S: SessionStore,
{
    repo: Arc<R>,
    sessions: Arc<S>,
    config: Arc<WalletConfig>,
}

impl<R, S> LoginUseCase<R, S>
where
    R: UserRepository + WalletRepository,
    S: SessionStore,
{
    pub fn new(repo: Arc<R>, sessions: Arc<S>, config: Arc<WalletConfig>) -> Self {
        Self {
            repo,
            sessions,
            config,
        }
    }

    pub async fn execute(&self, input: LoginInput) -> WalletResult<LoginOutput> {
        let email = Email::parse(&input.email)?;

        let user = self
            .repo
            .find_by_email(&email)
            .await?
            .ok_or(WalletError::UserNotFound)?;

        let wallet_id = self
            .repo
            .find_id_by_user(user.id)
            .await?
            .ok_or(WalletError::WalletNotFound)?;

        let session_token = SessionToken::new(user.public_id)
            .ok_or_else(|| WalletError::Internal("user has a blank external id".into()))?;

        self.sessions
            .put(&session_token, wallet_id, self.config.session_ttl)
            .await?;

        tracing::info!(
            user_id = %user.id,
            wallet_id = %wallet_id,
            "Wallet session issued"
        );

        Ok(LoginOutput {
            session_token,
            wallet_id,
            expires_in_secs: self.config.session_ttl_secs(),
        })
    }
}
