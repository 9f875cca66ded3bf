//! secp256k1 domain parameters: the prime field, the short Weierstrass
//! coefficients, the base point G and its order n.

use crate::curves::Point;
use num_bigint::BigInt;
use std::sync::LazyLock;

/// Short Weierstrass curve y^2 = x^3 + a*x + b over the prime field mod p.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Curve {
    pub p: BigInt,
    pub a: BigInt,
    pub b: BigInt,
}

/// The full secp256k1 group description: curve, generator and group order.
#[derive(Debug, Clone)]
pub struct Secp256k1 {
    pub curve: Curve,
    /// The canonical base point G.
    pub g: Point,
    /// Order of G; valid private scalars lie in [1, n).
    pub n: BigInt,
}

/// Build the secp256k1 parameters: http://www.oid-info.com/get/1.3.132.0.10
fn secp256k1_params() -> Secp256k1 {
    let p = BigInt::parse_bytes(
        b"FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFC2F",
        16,
    )
    .unwrap();
    let a = BigInt::from(0);
    let b = BigInt::from(7);
    let gx = BigInt::parse_bytes(
        b"79BE667EF9DCBBAC55A06295CE870B07029BFCDB2DCE28D959F2815B16F81798",
        16,
    )
    .unwrap();
    let gy = BigInt::parse_bytes(
        b"483ADA7726A3C4655DA4FBFC0E1108A8FD17B448A68554199C47D08FFB10D4B8",
        16,
    )
    .unwrap();
    let n = BigInt::parse_bytes(
        b"FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141",
        16,
    )
    .unwrap();

    Secp256k1 {
        curve: Curve { p, a, b },
        g: Point::new(gx, gy),
        n,
    }
}

/// Global secp256k1 parameters, parsed once.
pub static SECP256K1: LazyLock<Secp256k1> = LazyLock::new(secp256k1_params);
