//! Replenishment Stats Use Case

use crate::domain::repository::{ReplenishmentRepository, WalletRepository};
use crate::domain::value_objects::{ReplenishmentStats, StatsPeriod, WalletId};
use crate::error::{WalletError, WalletResult};
use std::sync::Arc;

/// Monthly count and sum of credit events
pub struct ReplenishmentStatsUseCase<R>
where
    R: WalletRepository + ReplenishmentRepository,
{
    repo: Arc<R>,
}

impl<R> ReplenishmentStatsUseCase<R>
where
    R: WalletRepository + ReplenishmentRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(
        &self,
        wallet_id: WalletId,
        period: StatsPeriod,
    ) -> WalletResult<ReplenishmentStats> {
        if !self.repo.exists(wallet_id).await? {
            return Err(WalletError::WalletNotFound);
        }

        let stats = self.repo.stats(wallet_id, &period).await?;

        tracing::debug!(
            wallet_id = %wallet_id,
            year = period.year,
            month = period.month.number(),
            count = stats.count,
            "Replenishment stats computed"
        );

        Ok(stats)
    }
}
