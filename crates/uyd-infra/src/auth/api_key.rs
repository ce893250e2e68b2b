//! Constant-time API key verification.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;
use thiserror::Error;

/// API key verification failures.
#[derive(Debug, Error)]
pub enum ApiKeyError {
    /// The server was started without a configured key. Surfaced to callers
    /// as a generic internal error; the detail stays in the logs.
    #[error("API key is not configured")]
    NotConfigured,

    #[error("Missing API key")]
    MissingKey,

    #[error("Invalid API key")]
    InvalidKey,
}

/// Verifier for the shared-secret API key gating mutating requests.
///
/// Loaded once at startup and immutable thereafter. Every request is
/// authenticated independently; there are no sessions, rate limits or
/// lockouts.
pub struct ApiKeyVerifier {
    secret: Option<String>,
}

impl ApiKeyVerifier {
    /// An empty secret counts as unconfigured.
    pub fn new(secret: Option<String>) -> Self {
        let secret = secret.filter(|s| !s.is_empty());
        if secret.is_none() {
            tracing::warn!("No API key configured; mutating endpoints will reject all requests");
        }
        Self { secret }
    }

    /// Check a caller-supplied key against the configured secret.
    ///
    /// The two values are reduced to fixed-length HMAC-SHA256 digests and
    /// compared in constant time, so the comparison never early-exits on a
    /// differing byte and secrets of different lengths are indistinguishable
    /// by timing.
    pub fn verify(&self, provided: Option<&str>) -> Result<(), ApiKeyError> {
        let provided = provided.filter(|k| !k.is_empty());
        let Some(provided) = provided else {
            return Err(ApiKeyError::MissingKey);
        };

        let secret = self.secret.as_deref().ok_or(ApiKeyError::NotConfigured)?;

        let expected = digest(secret);
        let actual = digest(provided);
        if bool::from(expected.ct_eq(&actual)) {
            Ok(())
        } else {
            Err(ApiKeyError::InvalidKey)
        }
    }
}

fn digest(value: &str) -> [u8; 32] {
    // HMAC keyed with the value itself, no message; only the fixed-length
    // output matters for the comparison.
    let mac = Hmac::<Sha256>::new_from_slice(value.as_bytes())
        .expect("HMAC can take a key of any size");
    mac.finalize().into_bytes().into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_is_rejected() {
        let verifier = ApiKeyVerifier::new(Some("secret123".to_owned()));

        assert!(matches!(
            verifier.verify(None),
            Err(ApiKeyError::MissingKey)
        ));
        assert!(matches!(
            verifier.verify(Some("")),
            Err(ApiKeyError::MissingKey)
        ));
    }

    #[test]
    fn wrong_key_is_forbidden() {
        let verifier = ApiKeyVerifier::new(Some("secret123".to_owned()));

        assert!(matches!(
            verifier.verify(Some("wrong")),
            Err(ApiKeyError::InvalidKey)
        ));
    }

    #[test]
    fn exact_key_passes() {
        let verifier = ApiKeyVerifier::new(Some("secret123".to_owned()));

        assert!(verifier.verify(Some("secret123")).is_ok());
    }

    #[test]
    fn unconfigured_secret_is_a_server_error() {
        for verifier in [
            ApiKeyVerifier::new(None),
            ApiKeyVerifier::new(Some(String::new())),
        ] {
            assert!(matches!(
                verifier.verify(Some("anything")),
                Err(ApiKeyError::NotConfigured)
            ));
        }
    }

    // The fixed-length digest is what makes the comparison constant-time:
    // `ct_eq` runs over 32 bytes no matter how long either input was, so a
    // direct timing test would only measure noise.
    #[test]
    fn digests_are_fixed_length_regardless_of_input_length() {
        assert_eq!(digest("a").len(), digest(&"b".repeat(10_000)).len());
    }
}
