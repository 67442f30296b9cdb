//! Wallet Ledger Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, ceilings, value objects, body signing, repository traits
//! - `application/` - Use cases
//! - `infra/` - PostgreSQL ledger, Redis sessions, in-memory stand-ins
//! - `presentation/` - HTTP handlers, session guard, router
//!
//! ## Security Model
//! - Every `/wallets/...` request needs a live session token; a session may
//!   only touch its own wallet
//! - Mutating requests carry a hex HMAC-SHA1 of the raw body, checked in
//!   constant time before any business logic runs
//! - Credits are serialized per wallet; a rejected credit writes nothing
//! - Balances never exceed the ceiling for the wallet's identification status

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::WalletConfig;
pub use domain::entities::{IDENTIFIED_LIMIT, UNIDENTIFIED_LIMIT};
pub use error::{WalletError, WalletResult};
pub use infra::cache::RedisSessionStore;
pub use infra::memory::{MemoryLedger, MemorySessionStore};
pub use infra::postgres::PgWalletRepository;
pub use presentation::router::{wallet_router, wallet_router_generic};

// Re-export kernel types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
pub use kernel::money::Money;
