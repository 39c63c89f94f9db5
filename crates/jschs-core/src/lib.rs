//! # jschs Core
//!
//! Core types, errors, and utilities for the jschs API.
//!
//! This crate provides the foundational pieces shared by every other crate:
//!
//! - [`errors`]: Application error type with HTTP response conversion
//! - [`password`]: The credential codec used to hash and verify passwords
//! - [`serde`]: Custom serde deserialization helpers
//!
//! # Example
//!
//! ```ignore
//! use jschs_core::{AppError, BcryptCodec, CredentialCodec};
//!
//! let codec = BcryptCodec::default();
//! let hash = codec.hash("secure_password")?;
//! assert!(codec.verify("secure_password", &hash)?);
//!
//! let error = AppError::not_found(anyhow::anyhow!("Teacher not found"));
//! ```

pub mod errors;
pub mod password;
pub mod serde;

// Re-export commonly used types at crate root
pub use errors::AppError;
pub use password::{BcryptCodec, CredentialCodec};
