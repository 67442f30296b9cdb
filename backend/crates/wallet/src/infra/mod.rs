//! Infrastructure Layer - Store implementations
//!
//! - `postgres` - durable ledger (source of truth)
//! - `cache` - Redis session store
//! - `memory` - in-process stand-ins for tests and local runs

pub mod cache;
pub mod memory;
pub mod postgres;
