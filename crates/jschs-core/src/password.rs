//! Password hashing and verification.
//!
//! The [`CredentialCodec`] trait is the seam the teacher service depends on;
//! [`BcryptCodec`] is the production implementation. Hashes are salted, so
//! hashing the same password twice yields different strings, while
//! verification stays deterministic.
//!
//! bcrypt only reads the first 72 bytes of its input. Passwords longer than
//! [`MAX_PASSWORD_BYTES`] are rejected instead of silently truncated, and
//! never verify.
//!
//! # Example
//!
//! ```ignore
//! use jschs_core::password::{BcryptCodec, CredentialCodec};
//!
//! let codec = BcryptCodec::new(12);
//! let hash = codec.hash("correct horse")?;
//! assert!(codec.verify("correct horse", &hash)?);
//! assert!(!codec.verify("battery staple", &hash)?);
//! ```

use anyhow::anyhow;
use bcrypt::{BcryptError, DEFAULT_COST, non_truncating_hash, non_truncating_verify};

use crate::errors::AppError;

/// Longest password bcrypt hashes without truncation. Its 72-byte input
/// includes a trailing NUL.
pub const MAX_PASSWORD_BYTES: usize = 71;

/// One-way hashing of plaintext credentials.
pub trait CredentialCodec: Send + Sync {
    /// Hash a plaintext password. The result is never equal to the input.
    ///
    /// A password the codec cannot represent in full is a `400`.
    fn hash(&self, plaintext: &str) -> Result<String, AppError>;

    /// Check a plaintext password against a stored hash.
    ///
    /// A malformed hash yields `Ok(false)`; only failures unrelated to the
    /// credentials themselves are returned as errors.
    fn verify(&self, plaintext: &str, hash: &str) -> Result<bool, AppError>;
}

/// bcrypt-backed [`CredentialCodec`] with a configurable cost factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BcryptCodec {
    cost: u32,
}

impl BcryptCodec {
    pub const fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub const fn cost(&self) -> u32 {
        self.cost
    }
}

impl Default for BcryptCodec {
    fn default() -> Self {
        Self::new(DEFAULT_COST)
    }
}

impl CredentialCodec for BcryptCodec {
    fn hash(&self, plaintext: &str) -> Result<String, AppError> {
        match non_truncating_hash(plaintext, self.cost) {
            Ok(hash) => Ok(hash),
            Err(BcryptError::Truncation(_)) => Err(AppError::bad_request(anyhow!(
                "password must be at most {} bytes",
                MAX_PASSWORD_BYTES
            ))),
            Err(e) => Err(AppError::internal(anyhow!("Failed to hash password: {}", e))),
        }
    }

    fn verify(&self, plaintext: &str, hash: &str) -> Result<bool, AppError> {
        match non_truncating_verify(plaintext, hash) {
            Ok(valid) => Ok(valid),
            Err(BcryptError::Io(e)) => Err(AppError::internal(anyhow!(
                "Failed to verify password: {}",
                e
            ))),
            Err(e) => {
                tracing::debug!(error = %e, "Password could not be checked against stored hash");
                Ok(false)
            }
        }
    }
}
