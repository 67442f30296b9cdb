//! Wallet Error Types
//!
//! One variant per failure the ledger can report. Each maps to a
//! transport-neutral machine code (`code()`) and an HTTP classification
//! (`kind()`), and integrates with the unified `kernel::error::AppError`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

use crate::domain::entities::{IDENTIFIED_LIMIT, UNIDENTIFIED_LIMIT};

/// Wallet-specific result type alias
pub type WalletResult<T> = Result<T, WalletError>;

/// Wallet-specific error variants
#[derive(Debug, Error)]
pub enum WalletError {
    /// Malformed request body or field
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Wallet id in the path is not a positive integer
    #[error("Invalid wallet id")]
    InvalidWalletId,

    /// Credit amount is not a positive integer
    #[error("Invalid balance amount")]
    InvalidAmount,

    /// Month is not in 1..=12
    #[error("Invalid month number")]
    InvalidMonth,

    /// Session token header absent
    #[error("Session token header required")]
    MissingToken,

    /// Session unknown to the cache (never issued or TTL elapsed)
    #[error("Session expired, please login to continue")]
    SessionExpired,

    /// Session belongs to a different wallet
    #[error("Forbidden: a session may only access its own wallet")]
    Forbidden,

    /// Body signature header absent or not matching the body
    #[error("Invalid request signature")]
    InvalidSignature,

    /// No user with the given email
    #[error("User not found")]
    UserNotFound,

    /// Wallet does not exist (or user owns none)
    #[error("Wallet not found")]
    WalletNotFound,

    #[error("Limit exceeded for identified wallet: {}", IDENTIFIED_LIMIT)]
    LimitExceededIdentified,

    #[error("Limit exceeded for unidentified wallet: {}", UNIDENTIFIED_LIMIT)]
    LimitExceededUnidentified,

    /// Persistent store error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Session cache error
    #[error("Session cache error: {0}")]
    Cache(#[from] redis::RedisError),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl WalletError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            WalletError::InvalidInput(_)
            | WalletError::InvalidWalletId
            | WalletError::InvalidAmount
            | WalletError::InvalidMonth => ErrorKind::BadRequest,
            WalletError::MissingToken
            | WalletError::SessionExpired
            | WalletError::InvalidSignature => ErrorKind::Unauthorized,
            WalletError::Forbidden => ErrorKind::Forbidden,
            WalletError::UserNotFound | WalletError::WalletNotFound => ErrorKind::NotFound,
            WalletError::LimitExceededIdentified | WalletError::LimitExceededUnidentified => {
                ErrorKind::Conflict
            }
            WalletError::Database(_) | WalletError::Cache(_) | WalletError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Machine-readable error code, stable across transports
    pub fn code(&self) -> &'static str {
        match self {
            WalletError::InvalidInput(_) => "INVALID_INPUT",
            WalletError::InvalidWalletId => "INVALID_WALLET_ID",
            WalletError::InvalidAmount => "INVALID_AMOUNT",
            WalletError::InvalidMonth => "INVALID_MONTH",
            WalletError::MissingToken => "MISSING_TOKEN",
            WalletError::SessionExpired => "SESSION_EXPIRED",
            WalletError::Forbidden => "FORBIDDEN",
            WalletError::InvalidSignature => "INVALID_SIGNATURE",
            WalletError::UserNotFound | WalletError::WalletNotFound => "NOT_FOUND",
            WalletError::LimitExceededIdentified => "LIMIT_EXCEEDED_IDENTIFIED",
            WalletError::LimitExceededUnidentified => "LIMIT_EXCEEDED_UNIDENTIFIED",
            WalletError::Database(_) | WalletError::Cache(_) | WalletError::Internal(_) => {
                "INTERNAL"
            }
        }
    }

    /// Rejected by ceiling policy rather than by a fault
    pub fn is_limit_exceeded(&self) -> bool {
        matches!(
            self,
            WalletError::LimitExceededIdentified | WalletError::LimitExceededUnidentified
        )
    }

    /// Convert to AppError
    ///
    /// Store and cache details stay in the log; the client gets a generic message.
    pub fn to_app_error(&self) -> AppError {
        let message = match self {
            WalletError::Database(_) | WalletError::Cache(_) | WalletError::Internal(_) => {
                "Internal server error".to_string()
            }
            _ => self.to_string(),
        };
        let err = AppError::new(self.kind(), message).with_code(self.code());
        match self {
            WalletError::SessionExpired | WalletError::MissingToken => {
                err.with_action("POST /login to obtain a session token")
            }
            WalletError::LimitExceededUnidentified => {
                err.with_action("Complete identity verification to raise the limit")
            }
            _ => err,
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            WalletError::Database(e) => {
                tracing::error!(error = %e, "Wallet database error");
            }
            WalletError::Cache(e) => {
                tracing::error!(error = %e, "Session cache error");
            }
            WalletError::Internal(msg) => {
                tracing::error!(message = %msg, "Wallet internal error");
            }
            WalletError::Forbidden => {
                tracing::warn!("Cross-wallet access attempt");
            }
            WalletError::InvalidSignature => {
                tracing::warn!("Request signature rejected");
            }
            _ => {
                tracing::debug!(error = %self, "Wallet error");
            }
        }
    }
}

impl From<WalletError> for AppError {
    fn from(err: WalletError) -> Self {
        let app = err.to_app_error();
        match err {
            WalletError::Database(e) => app.with_source(e),
            WalletError::Cache(e) => app.with_source(e),
            _ => app,
        }
    }
}

impl IntoResponse for WalletError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}
