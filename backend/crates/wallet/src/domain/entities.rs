//! Domain Entities
//!
//! Core business entities for the wallet ledger.

use chrono::{DateTime, Utc};
use kernel::money::Money;

use crate::domain::value_objects::{CreditAmount, Email, UserId, WalletId};
use crate::error::{WalletError, WalletResult};

/// Balance ceiling for wallets whose owner has not passed identification
pub const UNIDENTIFIED_LIMIT: Money = Money::from_major(10_000);

/// Balance ceiling for identified wallets
pub const IDENTIFIED_LIMIT: Money = Money::from_major(100_000);

/// Wallet entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wallet {
    pub id: WalletId,
    pub is_identified: bool,
    pub balance: Money,
}

impl Wallet {
    pub fn new(id: WalletId, is_identified: bool, balance: Money) -> Self {
        Self {
            id,
            is_identified,
            balance,
        }
    }

    /// Maximum balance allowed by the wallet's identification status
    pub fn ceiling(&self) -> Money {
        if self.is_identified {
            IDENTIFIED_LIMIT
        } else {
            UNIDENTIFIED_LIMIT
        }
    }

    /// Error reported when a credit would exceed the ceiling
    pub fn limit_error(&self) -> WalletError {
        if self.is_identified {
            WalletError::LimitExceededIdentified
        } else {
            WalletError::LimitExceededUnidentified
        }
    }

    /// Apply a credit, enforcing the ceiling
    ///
    /// Leaves `self` untouched on rejection. Returns the new balance.
    pub fn credit(&mut self, amount: CreditAmount) -> WalletResult<Money> {
        let new_balance = self
            .balance
            .checked_add(amount.money())
            .filter(|b| *b <= self.ceiling())
            .ok_or_else(|| self.limit_error())?;

        self.balance = new_balance;
        Ok(new_balance)
    }
}

/// User entity (wallet owner)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    /// External id; doubles as the session token
    pub public_id: String,
    pub email: Email,
}

/// Replenishment event - one per accepted credit, never modified
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replenishment {
    pub wallet_id: WalletId,
    pub amount: Money,
    pub created_at: DateTime<Utc>,
}

impl Replenishment {
    pub fn new(wallet_id: WalletId, amount: CreditAmount, created_at: DateTime<Utc>) -> Self {
        Self {
            wallet_id,
            amount: amount.money(),
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wallet(is_identified: bool, major: i64) -> Wallet {
        Wallet::new(WalletId::new(1).unwrap(), is_identified, Money::from_major(major))
    }

    fn amount(major: i64) -> CreditAmount {
        CreditAmount::new(Money::from_major(major)).unwrap()
    }

    #[test]
    fn test_ceilings() {
        assert_eq!(wallet(false, 0).ceiling().minor(), 1_000_000);
        assert_eq!(wallet(true, 0).ceiling().minor(), 10_000_000);
    }

    #[test]
    fn test_credit_within_ceiling() {
        let mut w = wallet(false, 9_000);
        let new_balance = w.credit(amount(500)).unwrap();
        assert_eq!(new_balance, Money::from_major(9_500));
        assert_eq!(w.balance, Money::from_major(9_500));
    }

    #[test]
    fn test_credit_exactly_to_ceiling() {
        let mut w = wallet(false, 9_000);
        assert_eq!(w.credit(amount(1_000)).unwrap(), UNIDENTIFIED_LIMIT);
    }

    #[test]
    fn test_credit_over_ceiling_leaves_balance() {
        let mut w = wallet(false, 9_000);
        let err = w.credit(amount(1_500)).unwrap_err();
        assert!(matches!(err, WalletError::LimitExceededUnidentified));
        assert_eq!(w.balance, Money::from_major(9_000));

        let mut w = wallet(true, 99_000);
        let err = w.credit(amount(2_000)).unwrap_err();
        assert!(matches!(err, WalletError::LimitExceededIdentified));
        assert_eq!(w.balance, Money::from_major(99_000));
    }

    #[test]
    fn test_credit_overflow_is_limit_error() {
        let mut w = Wallet::new(WalletId::new(1).unwrap(), true, Money::from_minor(i64::MAX));
        let err = w
            .credit(CreditAmount::new(Money::from_minor(1)).unwrap())
            .unwrap_err();
        assert!(err.is_limit_exceeded());
    }
}
