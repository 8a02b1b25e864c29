use sha2::{Digest, Sha256};
use thiserror::Error;

/// Header carrying the caller secret
pub const API_KEY_HEADER: &str = "x-api-key";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    /// No expected key configured. An operational fault, not a bad credential.
    #[error("API key not configured")]
    ServerMisconfigured,

    #[error("Invalid API key")]
    InvalidKey,

    #[error("Missing API key")]
    MissingKey,
}

/// Check a caller-supplied key against the configured one.
///
/// Misconfiguration wins over everything else: without an expected key the
/// request fails the same way whatever header it carries.
pub fn verify_api_key(expected: Option<&str>, supplied: Option<&str>) -> Result<(), AuthError> {
    let expected = expected.filter(|k| !k.is_empty()).ok_or(AuthError::ServerMisconfigured)?;
    let supplied = supplied.ok_or(AuthError::MissingKey)?;

    if digests_match(expected, supplied) {
        Ok(())
    } else {
        Err(AuthError::InvalidKey)
    }
}

/// Compares SHA-256 digests without short-circuiting, so timing does not
/// depend on where the keys first differ or on their lengths.
fn digests_match(a: &str, b: &str) -> bool {
    let a = Sha256::digest(a.as_bytes());
    let b = Sha256::digest(b.as_bytes());
    a.iter().zip(b.iter()).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
