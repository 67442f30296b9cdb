//! Wallet Query Use Case
//!
//! Read-only balance and existence lookups.

use crate::domain::entities::Wallet;
use crate::domain::repository::WalletRepository;
use crate::domain::value_objects::WalletId;
use crate::error::{WalletError, WalletResult};
use std::sync::Arc;

pub struct WalletQueryUseCase<R>
where
    R: WalletRepository,
{
    repo: Arc<R>,
}

impl<R> WalletQueryUseCase<R>
where
    R: WalletRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn get_balance(&self, wallet_id: WalletId) -> WalletResult<Wallet> {
        self.repo
            .find(wallet_id)
            .await?
            .ok_or(WalletError::WalletNotFound)
    }

    pub async fn exists(&self, wallet_id: WalletId) -> WalletResult<bool> {
        self.repo.exists(wallet_id).await
    }
}
