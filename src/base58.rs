//! Base58 and Base58Check encoding with leading-zero-byte preservation.

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::Zero;

use crate::error::{KeygenError, Result};
use crate::hashes::sha256d;

const ALPHABET: &[u8] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

fn alphabet_inv(c: u8) -> Option<u32> {
    ALPHABET.iter().position(|&x| x == c).map(|i| i as u32)
}

/// Base58 encode bytes. Each leading zero byte maps to a leading '1'.
#[must_use]
pub fn b58encode(bytes: &[u8]) -> String {
    let mut n = BigUint::from_bytes_be(bytes);
    let base = BigUint::from(58u32);

    let mut digits = Vec::new();
    while !n.is_zero() {
        let (quotient, remainder) = n.div_rem(&base);
        let idx = remainder.iter_u32_digits().next().unwrap_or(0) as usize;
        digits.push(ALPHABET[idx]);
        n = quotient;
    }

    let num_leading_zeros = bytes.iter().take_while(|&&b| b == 0).count();
    digits.extend(std::iter::repeat(ALPHABET[0]).take(num_leading_zeros));

    digits.iter().rev().map(|&b| b as char).collect()
}

/// Base58 decode to bytes. Each leading '1' maps to a leading zero byte.
pub fn b58decode(s: &str) -> Result<Vec<u8>> {
    let mut n = BigUint::zero();
    for c in s.bytes() {
        let val = alphabet_inv(c).ok_or_else(|| {
            KeygenError::InvalidFormat(format!("invalid base58 character {:?}", c as char))
        })?;
        n = n * 58u32 + val;
    }

    // to_bytes_be would yield a spurious 0x00 for zero
    let body = if n.is_zero() { Vec::new() } else { n.to_bytes_be() };

    let num_leading_ones = s.bytes().take_while(|&c| c == b'1').count();
    let mut result = vec![0u8; num_leading_ones];
    result.extend(body);
    Ok(result)
}

/// Base58Check encode: append the first 4 bytes of sha256d(payload)
/// as a checksum, then base58 encode. The payload already carries its
/// version byte.
#[must_use]
pub fn check_encode(payload: &[u8]) -> String {
    let checksum = sha256d(payload);
    let mut data = Vec::with_capacity(payload.len() + 4);
    data.extend_from_slice(payload);
    data.extend_from_slice(&checksum[..4]);
    b58encode(&data)
}

/// Base58Check decode: verify the trailing 4-byte checksum and return
/// the payload (version byte included).
pub fn check_decode(s: &str) -> Result<Vec<u8>> {
    let data = b58decode(s)?;
    if data.len() < 5 {
        return Err(KeygenError::InvalidFormat(format!(
            "base58check payload too short: {} bytes",
            data.len()
        )));
    }
    let (payload, checksum) = data.split_at(data.len() - 4);
    if sha256d(payload)[..4] != *checksum {
        return Err(KeygenError::ChecksumMismatch);
    }
    Ok(payload.to_vec())
}
