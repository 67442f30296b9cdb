//! Application Configuration
//!
//! Configuration for the wallet application layer.

use std::time::Duration;

/// Wallet application configuration
#[derive(Clone)]
pub struct WalletConfig {
    /// Header carrying the session token (request) and issuing it (login response)
    pub token_header: String,
    /// Header carrying the hex HMAC-SHA1 of the request body
    pub signature_header: String,
    /// Session TTL
    pub session_ttl: Duration,
    /// Shared secret for request body signatures
    pub signing_secret: Vec<u8>,
    /// Largest body accepted on signed requests
    pub max_body_bytes: usize,
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self {
            token_header: "X-UserId".to_string(),
            signature_header: "X-Digest".to_string(),
            session_ttl: Duration::from_secs(3600),
            signing_secret: Vec::new(),
            max_body_bytes: 16 * 1024,
        }
    }
}

impl WalletConfig {
    /// Create config with the given signing secret
    pub fn with_secret(secret: impl Into<Vec<u8>>) -> Self {
        Self {
            signing_secret: secret.into(),
            ..Default::default()
        }
    }

    /// Create config with a random signing secret (for development)
    pub fn with_random_secret() -> Self {
        Self::with_secret(platform::crypto::random_bytes(32))
    }

    pub fn session_ttl_secs(&self) -> u64 {
        self.session_ttl.as_secs()
    }
}

impl std::fmt::Debug for WalletConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WalletConfig")
            .field("token_header", &self.token_header)
            .field("signature_header", &self.signature_header)
            .field("session_ttl", &self.session_ttl)
            .field("signing_secret", &"<redacted>")
            .field("max_body_bytes", &self.max_body_bytes)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = WalletConfig::default();
        assert_eq!(config.token_header, "X-UserId");
        assert_eq!(config.signature_header, "X-Digest");
        assert_eq!(config.session_ttl_secs(), 3600);
        assert_eq!(config.max_body_bytes, 16 * 1024);
    }

    #[test]
    fn test_random_secret() {
        let a = WalletConfig::with_random_secret();
        let b = WalletConfig::with_random_secret();
        assert_eq!(a.signing_secret.len(), 32);
        assert_ne!(a.signing_secret, b.signing_secret);
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config = WalletConfig::with_secret("super-secret");
        assert!(!format!("{:?}", config).contains("super-secret"));
    }
}
