//! PostgreSQL Repository Implementations

use crate::domain::entities::{Replenishment, User, Wallet};
use crate::domain::repository::{ReplenishmentRepository, UserRepository, WalletRepository};
use crate::domain::value_objects::{
    CreditAmount, Email, ReplenishmentStats, StatsPeriod, UserId, WalletId,
};
use crate::error::{WalletError, WalletResult};
use chrono::{DateTime, Utc};
use kernel::money::Money;
use sqlx::PgPool;

/// PostgreSQL-backed repository for wallets, users and replenishments
#[derive(Clone)]
pub struct PgWalletRepository {
    pool: PgPool,
}

impl PgWalletRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl WalletRepository for PgWalletRepository {
    async fn exists(&self, wallet_id: WalletId) -> WalletResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM wallets WHERE id = $1)")
            .bind(wallet_id.get())
            .fetch_one(&self.pool)
            .await?;
        Ok(exists)
    }

    async fn find(&self, wallet_id: WalletId) -> WalletResult<Option<Wallet>> {
        let row = sqlx::query_as::<_, WalletRow>(
            r#"
            SELECT id, is_identified, balance
            FROM wallets
            WHERE id = $1
            "#,
        )
        .bind(wallet_id.get())
        .fetch_optional(&self.pool)
        .await?;

        row.map(WalletRow::into_wallet).transpose()
    }

    async fn find_id_by_user(&self, user_id: UserId) -> WalletResult<Option<WalletId>> {
        let id = sqlx::query_scalar::<_, i64>("SELECT id FROM wallets WHERE user_id = $1")
            .bind(user_id.get())
            .fetch_optional(&self.pool)
            .await?;

        id.map(|id| WalletId::new(id).ok_or_else(|| corrupt_wallet_id(id)))
            .transpose()
    }

    async fn credit(
        &self,
        wallet_id: WalletId,
        amount: CreditAmount,
        at: DateTime<Utc>,
    ) -> WalletResult<Wallet> {
        let mut tx = self.pool.begin().await?;

        // Row lock serializes concurrent credits to the same wallet
        let row = sqlx::query_as::<_, WalletRow>(
            r#"
            SELECT id, is_identified, balance
            FROM wallets
            WHERE id = $1
            FOR UPDATE
            "#,
        )
        .bind(wallet_id.get())
        .fetch_optional(&mut *tx)
        .await?;

        let Some(row) = row else {
            return Err(rollback_keeping_cause(tx.rollback(), WalletError::WalletNotFound).await);
        };

        let mut wallet = row.into_wallet()?;
        if let Err(e) = wallet.credit(amount) {
            return Err(rollback_keeping_cause(tx.rollback(), e).await);
        }

        sqlx::query("UPDATE wallets SET balance = $2 WHERE id = $1")
            .bind(wallet_id.get())
            .bind(wallet.balance)
            .execute(&mut *tx)
            .await?;

        let event = Replenishment::new(wallet_id, amount, at);
        sqlx::query(
            r#"
            INSERT INTO replenishments (amount, date, wallet_id)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(event.amount)
        .bind(event.created_at)
        .bind(event.wallet_id.get())
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(wallet)
    }
}

impl UserRepository for PgWalletRepository {
    async fn find_by_email(&self, email: &Email) -> WalletResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, uuid, email
            FROM users
            WHERE lower(email) = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(UserRow::into_user))
    }
}

impl ReplenishmentRepository for PgWalletRepository {
    async fn stats(
        &self,
        wallet_id: WalletId,
        period: &StatsPeriod,
    ) -> WalletResult<ReplenishmentStats> {
        let (count, total) = sqlx::query_as::<_, (i64, Money)>(
            r#"
            SELECT COUNT(*), COALESCE(SUM(amount), 0)::BIGINT
            FROM replenishments
            WHERE wallet_id = $1 AND date >= $2 AND date < $3
            "#,
        )
        .bind(wallet_id.get())
        .bind(period.start)
        .bind(period.end)
        .fetch_one(&self.pool)
        .await?;

        Ok(ReplenishmentStats { count, total })
    }
}

/// Roll back a rejected credit and report the rejection, not the rollback
///
/// A failed rollback is logged only; the connection discards the open
/// transaction when it is returned to the pool.
async fn rollback_keeping_cause<F>(rollback: F, cause: WalletError) -> WalletError
where
    F: Future<Output = Result<(), sqlx::Error>>,
{
    if let Err(e) = rollback.await {
        tracing::warn!(error = %e, "Rollback of rejected credit failed");
    }
    cause
}

fn corrupt_wallet_id(id: i64) -> WalletError {
    WalletError::Internal(format!("stored wallet id {} is not positive", id))
}

// ============================================================================
// Row types
// ============================================================================

#[derive(sqlx::FromRow)]
struct WalletRow {
    id: i64,
    is_identified: bool,
    balance: Money,
}

impl WalletRow {
    fn into_wallet(self) -> WalletResult<Wallet> {
        let id = WalletId::new(self.id).ok_or_else(|| corrupt_wallet_id(self.id))?;
        Ok(Wallet::new(id, self.is_identified, self.balance))
    }
}

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    uuid: String,
    email: String,
}

impl UserRow {
    fn into_user(self) -> User {
        User {
            id: UserId::from_db(self.id),
            public_id: self.uuid,
            email: Email::from_db(self.email),
        }
    }
}
