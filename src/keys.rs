//! Secret scalar validation, public key derivation and Base58Check
//! payment address / WIF encoding.

use num_bigint::{BigInt, Sign};
use num_integer::Integer;
use num_traits::One;
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::base58;
use crate::curves::{contains, scalar_mul, Point};
use crate::entropy::{Entropy, SECRET_LEN};
use crate::error::{KeygenError, Result};
use crate::hashes::hash160;
use crate::secp256k1::SECP256K1;

/// Compression flag byte appended to a WIF payload.
const COMPRESS_MAGIC: u8 = 0x01;

/// Network type selecting the address and WIF version bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Network {
    Main,
    Test,
}

impl Network {
    /// Version byte for payment addresses
    #[inline]
    #[must_use]
    pub const fn version_byte(self) -> u8 {
        match self {
            Network::Main => 0x00,
            Network::Test => 0x6f,
        }
    }

    /// Version byte for WIF private key encoding
    #[inline]
    #[must_use]
    pub const fn wif_version_byte(self) -> u8 {
        match self {
            Network::Main => 0x80,
            Network::Test => 0xef,
        }
    }
}

/// A validated private scalar in [1, n).
///
/// Owns its 32 big-endian bytes and zeroes them on drop. The only way to
/// construct one is through validation, so a held `PrivateScalar` is
/// always in range.
#[derive(PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct PrivateScalar {
    bytes: [u8; SECRET_LEN],
}

impl PrivateScalar {
    /// Validate a byte string as a private scalar.
    ///
    /// Interprets the bytes as a big-endian unsigned integer and accepts
    /// iff `1 <= value < n`. Out-of-range input is an expected outcome of
    /// random generation, reported as `None` rather than an error.
    #[must_use]
    pub fn from_bytes(bytes: &[u8; SECRET_LEN]) -> Option<Self> {
        let value = BigInt::from_bytes_be(Sign::Plus, bytes);
        if value >= BigInt::one() && value < SECP256K1.n {
            Some(PrivateScalar { bytes: *bytes })
        } else {
            None
        }
    }

    /// Validate one entropy draw as a private scalar.
    #[must_use]
    pub fn from_entropy(entropy: &Entropy) -> Option<Self> {
        Self::from_bytes(entropy.as_bytes())
    }

    /// Serialize as a lowercase hex string.
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(self.bytes)
    }

    /// Encode as a WIF string (always compressed public key format).
    #[must_use]
    pub fn to_wif(&self, network: Network) -> String {
        let mut payload = Vec::with_capacity(2 + SECRET_LEN);
        payload.push(network.wif_version_byte());
        payload.extend_from_slice(&self.bytes);
        payload.push(COMPRESS_MAGIC);
        let encoded = base58::check_encode(&payload);
        // The payload buffer holds a copy of the scalar.
        payload.zeroize();
        encoded
    }

    /// The scalar as a big-endian integer, for curve arithmetic.
    pub(crate) fn to_bigint(&self) -> BigInt {
        BigInt::from_bytes_be(Sign::Plus, &self.bytes)
    }
}

impl fmt::Debug for PrivateScalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivateScalar(<secret>)")
    }
}

/// Public key - a point on the secp256k1 curve with SEC encoding and
/// address derivation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKey {
    point: Point,
}

impl PublicKey {
    /// Derive the public key scalar * G.
    ///
    /// Rechecks the scalar range even though `PrivateScalar` construction
    /// already guarantees it; a zero or above-order scalar here is an
    /// `InvalidScalar` error. Deterministic: equal scalars yield equal
    /// points.
    pub fn derive(secret: &PrivateScalar) -> Result<Self> {
        let k = secret.to_bigint();
        if k < BigInt::one() || k >= SECP256K1.n {
            return Err(KeygenError::InvalidScalar);
        }
        let point = scalar_mul(&SECP256K1.curve, &k, &SECP256K1.g);
        Ok(PublicKey { point })
    }

    /// Wrap an existing curve point.
    #[must_use]
    pub fn from_point(point: Point) -> Self {
        PublicKey { point }
    }

    #[must_use]
    pub fn point(&self) -> &Point {
        &self.point
    }

    /// Encode to SEC format, compressed (33 bytes) or uncompressed (65).
    ///
    /// The point at infinity has no SEC encoding; reaching it here means
    /// an upstream invariant broke.
    pub fn encode(&self, compressed: bool) -> Result<Vec<u8>> {
        let (x, y) = match &self.point {
            Point::Infinity => return Err(KeygenError::Serialization),
            Point::Affine { x, y } => (x, y),
        };

        let x_bytes = bigint_to_32_bytes(x);
        if compressed {
            let prefix = if y.is_even() { 0x02 } else { 0x03 };
            let mut result = Vec::with_capacity(33);
            result.push(prefix);
            result.extend_from_slice(&x_bytes);
            Ok(result)
        } else {
            let y_bytes = bigint_to_32_bytes(y);
            let mut result = Vec::with_capacity(65);
            result.push(0x04);
            result.extend_from_slice(&x_bytes);
            result.extend_from_slice(&y_bytes);
            Ok(result)
        }
    }

    /// Decode from SEC binary format, checking that the point lies on
    /// the curve.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        let Some(&prefix) = bytes.first() else {
            return Err(KeygenError::InvalidFormat("empty public key".into()));
        };

        let curve = &SECP256K1.curve;
        let point = match prefix {
            0x04 => {
                if bytes.len() != 65 {
                    return Err(KeygenError::InvalidFormat(
                        "invalid uncompressed public key length".into(),
                    ));
                }
                let x = BigInt::from_bytes_be(Sign::Plus, &bytes[1..33]);
                let y = BigInt::from_bytes_be(Sign::Plus, &bytes[33..65]);
                Point::new(x, y)
            }
            0x02 | 0x03 => {
                if bytes.len() != 33 {
                    return Err(KeygenError::InvalidFormat(
                        "invalid compressed public key length".into(),
                    ));
                }
                let want_even = prefix == 0x02;
                let x = BigInt::from_bytes_be(Sign::Plus, &bytes[1..33]);

                // Solve y^2 = x^3 + b (mod p); p = 3 (mod 4) so the root
                // is y2^((p+1)/4).
                let p = &curve.p;
                let y2 = (x.modpow(&BigInt::from(3), p) + &curve.b).mod_floor(p);
                let exp = (p + BigInt::one()) / BigInt::from(4);
                let mut y = y2.modpow(&exp, p);

                if (&y * &y).mod_floor(p) != y2 {
                    return Err(KeygenError::InvalidFormat(
                        "x coordinate has no square root on the curve".into(),
                    ));
                }
                if want_even != y.is_even() {
                    y = p - &y;
                }
                Point::new(x, y)
            }
            _ => {
                return Err(KeygenError::InvalidFormat(
                    "invalid public key prefix".into(),
                ));
            }
        };

        if !contains(curve, &point) {
            return Err(KeygenError::InvalidFormat(
                "point is not on the curve".into(),
            ));
        }
        Ok(PublicKey { point })
    }

    /// Base58Check payment address: version byte, HASH160 of the
    /// compressed SEC encoding, 4-byte sha256d checksum.
    pub fn address(&self, network: Network) -> Result<String> {
        let sec = self.encode(true)?;
        let digest = hash160(&sec);

        let mut payload = Vec::with_capacity(1 + digest.len());
        payload.push(network.version_byte());
        payload.extend_from_slice(&digest);
        Ok(base58::check_encode(&payload))
    }
}

/// Extract the public key hash from a Base58Check address.
pub fn address_to_pkb_hash(address: &str) -> Result<[u8; 20]> {
    let payload = base58::check_decode(address)?;
    if payload.len() != 21 {
        return Err(KeygenError::InvalidFormat(format!(
            "invalid address payload length {}",
            payload.len()
        )));
    }
    let mut digest = [0u8; 20];
    digest.copy_from_slice(&payload[1..]);
    Ok(digest)
}

/// Convert a non-negative BigInt to a 32-byte big-endian array.
fn bigint_to_32_bytes(n: &BigInt) -> [u8; 32] {
    let (_, bytes) = n.to_bytes_be();
    let mut result = [0u8; 32];
    let take = bytes.len().min(32);
    result[32 - take..].copy_from_slice(&bytes[bytes.len() - take..]);
    result
}
