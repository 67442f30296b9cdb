//! Application Layer - Use Cases
//!
//! This layer orchestrates domain logic and infrastructure.
//! Contains use case implementations.

pub mod authorize;
pub mod config;
pub mod credit;
pub mod login;
pub mod replenishment_stats;
pub mod wallet_query;
