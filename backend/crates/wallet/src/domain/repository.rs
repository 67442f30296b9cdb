//! Repository Traits
//!
//! Interfaces for data persistence. Implementations live in the infra layer.

use chrono::{DateTime, Utc};
use std::time::Duration;

use crate::domain::entities::{User, Wallet};
use crate::domain::value_objects::{
    CreditAmount, Email, ReplenishmentStats, SessionToken, StatsPeriod, UserId, WalletId,
};
use crate::error::WalletResult;

/// Wallet repository trait
#[trait_variant::make(WalletRepository: Send)]
pub trait LocalWalletRepository {
    /// Check whether a wallet exists
    async fn exists(&self, wallet_id: WalletId) -> WalletResult<bool>;

    /// Load a wallet
    async fn find(&self, wallet_id: WalletId) -> WalletResult<Option<Wallet>>;

    /// Find the wallet owned by a user
    async fn find_id_by_user(&self, user_id: UserId) -> WalletResult<Option<WalletId>>;

    /// Credit a wallet atomically
    ///
    /// Reads the wallet, checks the ceiling, writes the new balance and
    /// appends a replenishment event as one unit. Concurrent credits to the
    /// same wallet are serialized. On any error nothing is written.
    async fn credit(
        &self,
        wallet_id: WalletId,
        amount: CreditAmount,
        at: DateTime<Utc>,
    ) -> WalletResult<Wallet>;
}

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    async fn find_by_email(&self, email: &Email) -> WalletResult<Option<User>>;
}

/// Replenishment event repository trait
#[trait_variant::make(ReplenishmentRepository: Send)]
pub trait LocalReplenishmentRepository {
    /// Count and sum the wallet's events inside `period`
    async fn stats(
        &self,
        wallet_id: WalletId,
        period: &StatsPeriod,
    ) -> WalletResult<ReplenishmentStats>;
}

/// Session store trait (token -> wallet id with expiry)
#[trait_variant::make(SessionStore: Send)]
pub trait LocalSessionStore {
    /// Store or overwrite a session
    async fn put(&self, token: &SessionToken, wallet_id: WalletId, ttl: Duration)
    -> WalletResult<()>;

    /// Resolve a live session; `None` when unknown or expired
    async fn get(&self, token: &SessionToken) -> WalletResult<Option<WalletId>>;
}

/// Everything the HTTP layer needs from the persistent store
pub trait LedgerStore:
    WalletRepository + UserRepository + ReplenishmentRepository + Clone + Send + Sync + 'static
{
}

impl<T> LedgerStore for T where
    T: WalletRepository + UserRepository + ReplenishmentRepository + Clone + Send + Sync + 'static
{
}

/// Session store usable from shared HTTP state
pub trait SharedSessionStore: SessionStore + Clone + Send + Sync + 'static {}

impl<T> SharedSessionStore for T where T: SessionStore + Clone + Send + Sync + 'static {}
