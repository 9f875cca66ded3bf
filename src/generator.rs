//! Retry-until-valid key generation driver.
//!
//! Each attempt draws fresh entropy and validates it as a private scalar.
//! An out-of-range draw (probability around 2^-128) is discarded, zeroed,
//! and replaced; once a draw validates, the driver derives the public
//! point and payment address and returns the whole bundle.

use crate::entropy::{Entropy, EntropySource, OsEntropy};
use crate::error::{KeygenError, Result};
use crate::keys::{Network, PrivateScalar, PublicKey};

/// Upper bound on consecutive invalid draws. Repeated failure at this
/// scale means the entropy source is returning garbage, and the driver
/// fails loudly instead of spinning forever.
pub const MAX_ATTEMPTS: u32 = 1000;

/// Everything produced by one successful generation run.
#[derive(Debug)]
pub struct GeneratedKey {
    /// The entropy draw that validated.
    pub seed: Entropy,
    /// The validated private scalar.
    pub secret: PrivateScalar,
    /// The derived public point.
    pub public: PublicKey,
    /// Base58Check payment address for the requested network.
    pub address: String,
}

/// Generate a key pair and address, drawing entropy from `source`.
///
/// Entropy failures and the retry bound propagate as errors; out-of-range
/// draws are absorbed here and never surfaced.
pub fn generate_key_with<S: EntropySource>(
    source: &mut S,
    network: Network,
) -> Result<GeneratedKey> {
    for _ in 0..MAX_ATTEMPTS {
        let seed = source.fill()?;
        let Some(secret) = PrivateScalar::from_entropy(&seed) else {
            // Rejected draw; `seed` zeroes itself on drop.
            continue;
        };

        let public = PublicKey::derive(&secret)?;
        let address = public.address(network)?;
        return Ok(GeneratedKey {
            seed,
            secret,
            public,
            address,
        });
    }
    Err(KeygenError::RetryLimitExceeded(MAX_ATTEMPTS))
}

/// Generate a key pair and address from the OS entropy source.
pub fn generate_key(network: Network) -> Result<GeneratedKey> {
    generate_key_with(&mut OsEntropy, network)
}
