//! In-memory Implementations
//!
//! Intended for tests and local experimentation. A single mutex guards the
//! whole ledger, so a credit's read-check-write-append runs as one unit.
//! Credits are staged on a copy of the ledger and swapped in only once the
//! event append succeeds.

use crate::domain::entities::{Replenishment, User, Wallet};
use crate::domain::repository::{
    ReplenishmentRepository, SessionStore, UserRepository, WalletRepository,
};
use crate::domain::value_objects::{
    CreditAmount, Email, ReplenishmentStats, SessionToken, StatsPeriod, UserId, WalletId,
};
use crate::error::{WalletError, WalletResult};
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

#[derive(Debug, Clone, Default)]
struct LedgerState {
    users: Vec<User>,
    wallets: HashMap<WalletId, Wallet>,
    owners: HashMap<UserId, WalletId>,
    replenishments: Vec<Replenishment>,
}

/// In-memory ledger (wallets, users, replenishment events)
#[derive(Debug, Clone, Default)]
pub struct MemoryLedger {
    state: Arc<Mutex<LedgerState>>,
    fail_event_writes: Arc<AtomicBool>,
}

impl MemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert_user(&self, id: i64, public_id: &str, email: &str) -> UserId {
        let user_id = UserId::from_db(id);
        self.state.lock().await.users.push(User {
            id: user_id,
            public_id: public_id.to_string(),
            email: Email::from_db(email.to_lowercase()),
        });
        user_id
    }

    /// Insert a wallet, optionally owned by `owner`
    pub async fn insert_wallet(&self, wallet: Wallet, owner: Option<UserId>) {
        let mut state = self.state.lock().await;
        if let Some(owner) = owner {
            state.owners.insert(owner, wallet.id);
        }
        state.wallets.insert(wallet.id, wallet);
    }

    /// Record a historical event without touching the balance
    pub async fn insert_replenishment(&self, event: Replenishment) {
        self.state.lock().await.replenishments.push(event);
    }

    pub async fn replenishment_count(&self, wallet_id: WalletId) -> usize {
        self.state
            .lock()
            .await
            .replenishments
            .iter()
            .filter(|e| e.wallet_id == wallet_id)
            .count()
    }

    /// Make every subsequent event append fail after the balance is staged
    pub fn fail_event_writes(&self, fail: bool) {
        self.fail_event_writes.store(fail, Ordering::SeqCst);
    }
}

impl WalletRepository for MemoryLedger {
    async fn exists(&self, wallet_id: WalletId) -> WalletResult<bool> {
        Ok(self.state.lock().await.wallets.contains_key(&wallet_id))
    }

    async fn find(&self, wallet_id: WalletId) -> WalletResult<Option<Wallet>> {
        Ok(self.state.lock().await.wallets.get(&wallet_id).cloned())
    }

    async fn find_id_by_user(&self, user_id: UserId) -> WalletResult<Option<WalletId>> {
        Ok(self.state.lock().await.owners.get(&user_id).copied())
    }

    async fn credit(
        &self,
        wallet_id: WalletId,
        amount: CreditAmount,
        at: DateTime<Utc>,
    ) -> WalletResult<Wallet> {
        let mut state = self.state.lock().await;
        let mut staged = state.clone();

        let wallet = staged
            .wallets
            .get_mut(&wallet_id)
            .ok_or(WalletError::WalletNotFound)?;
        wallet.credit(amount)?;
        let wallet = wallet.clone();

        if self.fail_event_writes.load(Ordering::SeqCst) {
            return Err(WalletError::Internal("replenishment write failed".into()));
        }
        staged
            .replenishments
            .push(Replenishment::new(wallet_id, amount, at));

        *state = staged;
        Ok(wallet)
    }
}

impl UserRepository for MemoryLedger {
    async fn find_by_email(&self, email: &Email) -> WalletResult<Option<User>> {
        Ok(self
            .state
            .lock()
            .await
            .users
            .iter()
            .find(|u| u.email == *email)
            .cloned())
    }
}

impl ReplenishmentRepository for MemoryLedger {
    async fn stats(
        &self,
        wallet_id: WalletId,
        period: &StatsPeriod,
    ) -> WalletResult<ReplenishmentStats> {
        let state = self.state.lock().await;
        let mut stats = ReplenishmentStats::default();
        for event in state
            .replenishments
            .iter()
            .filter(|e| e.wallet_id == wallet_id && period.contains(e.created_at))
        {
            stats.count += 1;
            stats.total = stats
                .total
                .checked_add(event.amount)
                .ok_or_else(|| WalletError::Internal("replenishment sum overflow".into()))?;
        }
        Ok(stats)
    }
}

/// In-memory session store with TTL emulation
///
/// Expired entries are dropped on lookup and swept on every `put`.
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    sessions: Arc<Mutex<HashMap<String, (WalletId, Instant)>>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries held, expired or not
    pub async fn entry_count(&self) -> usize {
        self.sessions.lock().await.len()
    }
}

impl SessionStore for MemorySessionStore {
    async fn put(
        &self,
        token: &SessionToken,
        wallet_id: WalletId,
        ttl: Duration,
    ) -> WalletResult<()> {
        let now = Instant::now();
        let mut sessions = self.sessions.lock().await;
        sessions.retain(|_, (_, expires_at)| now < *expires_at);
        sessions.insert(token.as_str().to_string(), (wallet_id, now + ttl));
        Ok(())
    }

    async fn get(&self, token: &SessionToken) -> WalletResult<Option<WalletId>> {
        let mut sessions = self.sessions.lock().await;
        match sessions.get(token.as_str()).copied() {
            Some((wallet_id, expires_at)) if Instant::now() < expires_at => Ok(Some(wallet_id)),
            Some(_) => {
                sessions.remove(token.as_str());
                Ok(None)
            }
            None => Ok(None),
        }
    }
}

