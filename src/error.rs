//! Unified error types for the key generation engine

use thiserror::Error;

/// Main error type for the key generation engine.
///
/// Out-of-range random secrets are not represented here: the validator
/// reports them as `None` and the generation driver absorbs them by
/// drawing fresh entropy. Every variant below is fatal to the caller.
#[derive(Debug, Error)]
pub enum KeygenError {
    /// The OS could not supply random bytes. Never retried.
    #[error("entropy source unavailable: {0}")]
    EntropyUnavailable(String),

    /// A zero or above-order scalar reached key derivation.
    #[error("private scalar out of range for secp256k1")]
    InvalidScalar,

    /// The retry loop ran out of attempts without a valid scalar,
    /// which points at a broken entropy source.
    #[error("no valid secret after {0} attempts; entropy source looks broken")]
    RetryLimitExceeded(u32),

    /// The point at infinity reached the serializer.
    #[error("cannot serialize the point at infinity")]
    Serialization,

    #[error("invalid format: {0}")]
    InvalidFormat(String),

    #[error("checksum mismatch")]
    ChecksumMismatch,
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, KeygenError>;
