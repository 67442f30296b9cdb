//! Domain Value Objects
//!
//! Validated wrappers for everything that crosses the HTTP boundary.
//! Parsing happens here so that use cases only ever see well-formed values.

use chrono::{DateTime, Datelike, TimeZone, Utc};
use derive_more::Display;
use kernel::money::Money;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::{WalletError, WalletResult};

/// Maximum email length (per RFC 5321)
const EMAIL_MAX_LENGTH: usize = 254;

// ============================================================================
// Identifiers
// ============================================================================

/// Wallet identifier (positive integer)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display)]
#[serde(transparent)]
pub struct WalletId(i64);

impl WalletId {
    /// Create from a raw id; ids start at 1
    pub const fn new(id: i64) -> Option<Self> {
        if id >= 1 { Some(Self(id)) } else { None }
    }

    /// Parse a path segment
    pub fn parse(raw: &str) -> WalletResult<Self> {
        raw.trim()
            .parse::<i64>()
            .ok()
            .and_then(Self::new)
            .ok_or(WalletError::InvalidWalletId)
    }

    #[inline]
    pub const fn get(&self) -> i64 {
        self.0
    }
}

impl FromStr for WalletId {
    type Err = WalletError;

    fn from_str(s: &str) -> WalletResult<Self> {
        Self::parse(s)
    }
}

/// Internal user identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub struct UserId(i64);

impl UserId {
    #[inline]
    pub const fn from_db(id: i64) -> Self {
        Self(id)
    }

    #[inline]
    pub const fn get(&self) -> i64 {
        self.0
    }
}

/// Opaque session token (the user's external id)
///
/// Deliberately not `Display`: tokens must not end up in logs.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SessionToken(String);

impl SessionToken {
    /// Wrap a raw header value; blank values are rejected
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SessionToken(***)")
    }
}

// ============================================================================
// Email
// ============================================================================

/// Email address used to look up the user at login
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
pub struct Email(String);

impl Email {
    /// Normalize (trim + lowercase) and validate
    pub fn parse(raw: &str) -> WalletResult<Self> {
        let email = raw.trim().to_lowercase();

        if email.is_empty() {
            return Err(WalletError::InvalidInput("email cannot be empty".into()));
        }
        if email.len() > EMAIL_MAX_LENGTH {
            return Err(WalletError::InvalidInput(format!(
                "email must be at most {} characters",
                EMAIL_MAX_LENGTH
            )));
        }

        match email.split_once('@') {
            Some((local, domain))
                if !local.is_empty() && !domain.is_empty() && !domain.contains('@') => {}
            _ => return Err(WalletError::InvalidInput("invalid email format".into())),
        }

        Ok(Self(email))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(email: impl Into<String>) -> Self {
        Self(email.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// ============================================================================
// Amounts
// ============================================================================

/// Strictly positive credit amount, in hundredths
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[display("{_0}")]
pub struct CreditAmount(Money);

impl CreditAmount {
    pub fn new(amount: Money) -> WalletResult<Self> {
        if amount.is_positive() {
            Ok(Self(amount))
        } else {
            Err(WalletError::InvalidAmount)
        }
    }

    /// Parse client input: unsigned base-10 digits counting hundredths, at least 1
    pub fn parse(raw: &str) -> WalletResult<Self> {
        let digits = raw.trim();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(WalletError::InvalidAmount);
        }
        let minor = digits
            .parse::<i64>()
            .map_err(|_| WalletError::InvalidAmount)?;
        Self::new(Money::from_minor(minor))
    }

    #[inline]
    pub const fn money(&self) -> Money {
        self.0
    }
}

// ============================================================================
// Calendar
// ============================================================================

/// Calendar month number, 1..=12
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub struct Month(u32);

impl Month {
    pub fn new(month: u32) -> WalletResult<Self> {
        if (1..=12).contains(&month) {
            Ok(Self(month))
        } else {
            Err(WalletError::InvalidMonth)
        }
    }

    pub fn parse(raw: &str) -> WalletResult<Self> {
        let month = raw
            .trim()
            .parse::<u32>()
            .map_err(|_| WalletError::InvalidMonth)?;
        Self::new(month)
    }

    #[inline]
    pub const fn number(&self) -> u32 {
        self.0
    }
}

/// Half-open UTC range `[start, end)` covering one calendar month
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsPeriod {
    pub year: i32,
    pub month: Month,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl StatsPeriod {
    pub fn new(year: i32, month: Month) -> WalletResult<Self> {
        let (next_year, next_month) = if month.number() == 12 {
            (year.checked_add(1), 1)
        } else {
            (Some(year), month.number() + 1)
        };

        let start = Utc
            .with_ymd_and_hms(year, month.number(), 1, 0, 0, 0)
            .single();
        let end = next_year.and_then(|y| Utc.with_ymd_and_hms(y, next_month, 1, 0, 0, 0).single());

        match (start, end) {
            (Some(start), Some(end)) => Ok(Self {
                year,
                month,
                start,
                end,
            }),
            _ => Err(WalletError::InvalidInput(format!("year {} is out of range", year))),
        }
    }

    /// Period for `month` of the current UTC year
    pub fn current_year(month: Month) -> WalletResult<Self> {
        Self::new(Utc::now().year(), month)
    }

    /// Parse an optional `year` query value, falling back to the current year
    pub fn resolve(year: Option<&str>, month: Month) -> WalletResult<Self> {
        match year {
            Some(raw) => {
                let year = raw
                    .trim()
                    .parse::<i32>()
                    .map_err(|_| WalletError::InvalidInput("year must be an integer".into()))?;
                Self::new(year, month)
            }
            None => Self::current_year(month),
        }
    }

    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        self.start <= at && at < self.end
    }
}

/// Aggregate of credit events in one period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReplenishmentStats {
    pub count: i64,
    pub total: Money,
}
