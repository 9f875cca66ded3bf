//! From-scratch secp256k1 key pair and payment address generation.
//!
//! Draws OS entropy, validates it as a private scalar (retrying the
//! astronomically rare out-of-range draw), derives the public point with
//! explicit curve arithmetic, and encodes a Base58Check address and WIF
//! secret. No external cryptographic curve library is involved; only the
//! hash primitives come from crates.

pub mod base58;
pub mod curves;
pub mod entropy;
pub mod error;
pub mod generator;
pub mod hashes;
pub mod keys;
pub mod secp256k1;

pub use error::{KeygenError, Result};

pub use curves::{scalar_mul, Point};
pub use entropy::{Entropy, EntropySource, OsEntropy, SECRET_LEN};
pub use generator::{generate_key, generate_key_with, GeneratedKey, MAX_ATTEMPTS};
pub use keys::{address_to_pkb_hash, Network, PrivateScalar, PublicKey};
pub use secp256k1::SECP256K1;
