//! Credit Wallet Use Case

use crate::domain::entities::Wallet;
use crate::domain::repository::WalletRepository;
use crate::domain::value_objects::{CreditAmount, WalletId};
use crate::error::WalletResult;
use chrono::Utc;
use std::sync::Arc;

/// Credit Wallet Use Case
pub struct CreditWalletUseCase<R>
where
    R: WalletRepository,
{
    repo: Arc<R>,
}

impl<R> CreditWalletUseCase<R>
where
    R: WalletRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Credit `amount`, returning the wallet with its new balance
    pub async fn execute(&self, wallet_id: WalletId, amount: CreditAmount) -> WalletResult<Wallet> {
        match self.repo.credit(wallet_id, amount, Utc::now()).await {
            Ok(wallet) => {
                tracing::info!(
                    wallet_id = %wallet_id,
                    amount = %amount,
                    balance = %wallet.balance,
                    "Wallet credited"
                );
                Ok(wallet)
            }
            Err(e) if e.is_limit_exceeded() => {
                tracing::warn!(
                    wallet_id = %wallet_id,
                    amount = %amount,
                    code = e.code(),
                    "Credit rejected by balance ceiling"
                );
                Err(e)
            }
            Err(e) => Err(e),
        }
    }
}
