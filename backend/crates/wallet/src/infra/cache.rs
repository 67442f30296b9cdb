//! Redis Session Store
//!
//! Sessions are plain `SET key value EX ttl` entries; Redis enforces expiry.

use crate::domain::repository::SessionStore;
use crate::domain::value_objects::{SessionToken, WalletId};
use crate::error::{WalletError, WalletResult};
use redis::aio::ConnectionManager;
use std::time::Duration;

/// Redis-backed session store
#[derive(Clone)]
pub struct RedisSessionStore {
    conn: ConnectionManager,
}

impl RedisSessionStore {
    /// Open a managed connection (reconnects automatically)
    pub async fn connect(redis_url: impl AsRef<str>) -> WalletResult<Self> {
        let client = redis::Client::open(redis_url.as_ref())?;
        let conn = ConnectionManager::new(client).await?;
        Ok(Self { conn })
    }
}

impl SessionStore for RedisSessionStore {
    async fn put(
        &self,
        token: &SessionToken,
        wallet_id: WalletId,
        ttl: Duration,
    ) -> WalletResult<()> {
        let mut conn = self.conn.clone();
        let _: () = redis::cmd("SET")
            .arg(token.as_str())
            .arg(wallet_id.get())
            .arg("EX")
            .arg(ttl.as_secs().max(1))
            .query_async(&mut conn)
            .await?;
        Ok(())
    }

    async fn get(&self, token: &SessionToken) -> WalletResult<Option<WalletId>> {
        let mut conn = self.conn.clone();
        let raw: Option<i64> = redis::cmd("GET")
            .arg(token.as_str())
            .query_async(&mut conn)
            .await?;

        match raw {
            None => Ok(None),
            Some(id) => WalletId::new(id)
                .map(Some)
                .ok_or_else(|| WalletError::Internal(format!("cached wallet id {} is not positive", id))),
        }
    }
}
