//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (HMAC-SHA1, hex, constant-time comparison)
//! - Environment configuration helpers

pub mod config;
pub mod crypto;
