//! Cryptographically secure entropy for secret generation.
//!
//! The [`EntropySource`] trait is the seam between the generation driver
//! and the OS random number generator, so tests can drive the retry loop
//! with scripted byte sequences.

use rand::rngs::OsRng;
use rand::TryRngCore;
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{KeygenError, Result};

/// Byte length of a private scalar (and of one entropy draw).
pub const SECRET_LEN: usize = 32;

/// One draw of random bytes, sized to the curve order.
///
/// Zeroed on drop on every path, including the retry-discard path.
#[derive(PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Entropy {
    bytes: [u8; SECRET_LEN],
}

impl Entropy {
    #[must_use]
    pub fn from_bytes(bytes: [u8; SECRET_LEN]) -> Self {
        Entropy { bytes }
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8; SECRET_LEN] {
        &self.bytes
    }

    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(self.bytes)
    }
}

impl fmt::Debug for Entropy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Entropy(<secret>)")
    }
}

/// Supplier of fixed-length random byte draws.
pub trait EntropySource {
    /// Produce one fresh draw. Fails with `EntropyUnavailable` if the
    /// underlying source cannot supply bytes; that failure is fatal and
    /// must not be retried here.
    fn fill(&mut self) -> Result<Entropy>;
}

/// The operating system's CSPRNG. Thread-safe, no state of its own.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill(&mut self) -> Result<Entropy> {
        let mut bytes = [0u8; SECRET_LEN];
        OsRng
            .try_fill_bytes(&mut bytes)
            .map_err(|e| KeygenError::EntropyUnavailable(e.to_string()))?;
        Ok(Entropy::from_bytes(bytes))
    }
}
