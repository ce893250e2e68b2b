//! Shared-secret API key verification.

mod api_key;

pub use api_key::{ApiKeyError, ApiKeyVerifier};
