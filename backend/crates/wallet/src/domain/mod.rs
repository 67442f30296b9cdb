//! Domain Layer - Business logic and entities
//!
//! This layer contains:
//! - Domain entities (Wallet, User, Replenishment) and ceilings
//! - Domain value objects (WalletId, CreditAmount, Month, StatsPeriod, ...)
//! - Domain services (request body signing)
//! - Repository traits (interfaces)

pub mod entities;
pub mod repository;
pub mod services;
pub mod value_objects;
