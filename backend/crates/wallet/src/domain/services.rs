//! Domain Services
//!
//! Pure request-body signing logic. The tag is HMAC-SHA1 over the raw
//! body bytes, rendered as lowercase hex.

use platform::crypto::{HMAC_SHA1_LEN, constant_time_eq, hmac_sha1_hex};

/// Length of a rendered signature in hex characters
pub const SIGNATURE_HEX_LEN: usize = HMAC_SHA1_LEN * 2;

/// Compute the signature a client must send for `body`
pub fn sign_body(secret: &[u8], body: &[u8]) -> String {
    hmac_sha1_hex(secret, body)
}

/// Check a client-supplied signature against `body`
///
/// Empty, malformed, uppercase or wrong-length input is a mismatch.
pub fn verify_body(secret: &[u8], body: &[u8], supplied: &str) -> bool {
    if supplied.len() != SIGNATURE_HEX_LEN {
        return false;
    }
    let expected = sign_body(secret, body);
    constant_time_eq(expected.as_bytes(), supplied.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"Jefe";
    const BODY: &[u8] = b"what do ya want for nothing?";

    #[test]
    fn test_sign_known_answer() {
        assert_eq!(
            sign_body(SECRET, BODY),
            "effcdf6ae5eb2fa2d27416d5f184df9c259a7c79"
        );
    }

    #[test]
    fn test_verify_accepts_own_signature() {
        let sig = sign_body(SECRET, BODY);
        assert_eq!(sig.len(), SIGNATURE_HEX_LEN);
        assert!(verify_body(SECRET, BODY, &sig));
    }

    #[test]
    fn test_verify_rejects_mismatch() {
        let sig = sign_body(SECRET, BODY);
        assert!(!verify_body(SECRET, b"what do ya want for nothing!", &sig));
        assert!(!verify_body(b"other", BODY, &sig));
        assert!(!verify_body(SECRET, BODY, ""));
        assert!(!verify_body(SECRET, BODY, &sig[..sig.len() - 1]));
        assert!(!verify_body(SECRET, BODY, &format!("{}0", sig)));
        assert!(!verify_body(SECRET, BODY, &sig.to_uppercase()));
        assert!(!verify_body(SECRET, BODY, "not hex at all, but forty chars long!!!!"));
    }

    #[test]
    fn test_empty_body_is_signable() {
        let sig = sign_body(SECRET, b"");
        assert!(verify_body(SECRET, b"", &sig));
    }
}
