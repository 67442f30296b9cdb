//! API DTOs (Data Transfer Objects)
//!
//! Money fields are integer counts of hundredths.

use crate::domain::entities::Wallet;
use crate::domain::value_objects::ReplenishmentStats;
use serde::{Deserialize, Serialize};

// ============================================================================
// Login
// ============================================================================

/// Login request
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub email: String,
}

/// Login response; the token itself travels in the token header
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub wallet_id: i64,
    pub expires_in: u64,
}

// ============================================================================
// Wallet
// ============================================================================

/// Credit request; `balance` is the amount to add, as a decimal string
#[derive(Debug, Clone, Deserialize)]
pub struct CreditRequest {
    pub balance: String,
}

/// Balance response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceResponse {
    pub is_identified: bool,
    pub balance: i64,
}

impl From<&Wallet> for BalanceResponse {
    fn from(wallet: &Wallet) -> Self {
        Self {
            is_identified: wallet.is_identified,
            balance: wallet.balance.minor(),
        }
    }
}

// ============================================================================
// Replenishments
// ============================================================================

/// Optional query for the stats endpoint
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatsQuery {
    pub year: Option<String>,
}

/// Monthly replenishment stats response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplenishmentStatsResponse {
    pub total_replenishments: i64,
    pub total_amount: i64,
}

impl From<ReplenishmentStats> for ReplenishmentStatsResponse {
    fn from(stats: ReplenishmentStats) -> Self {
        Self {
            total_replenishments: stats.count,
            total_amount: stats.total.minor(),
        }
    }
}
