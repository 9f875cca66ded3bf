//! Affine point arithmetic over a short Weierstrass curve: addition,
//! doubling and scalar multiplication by the group generator.
//!
//! Scalar multiplication runs a fixed 256-iteration ladder that performs
//! the same point operations on every iteration whatever the key bits,
//! so the operation sequence does not depend on the secret scalar.

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::Zero;

use crate::secp256k1::Curve;

/// An affine point (x, y) on the curve, or the point at infinity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Point {
    Infinity,
    Affine { x: BigInt, y: BigInt },
}

impl Point {
    #[must_use]
    pub fn new(x: BigInt, y: BigInt) -> Self {
        Point::Affine { x, y }
    }

    #[must_use]
    #[inline]
    pub const fn is_infinity(&self) -> bool {
        matches!(self, Point::Infinity)
    }
}

/// Modular multiplicative inverse m s.t. (n * m) % p == 1, for prime p.
///
/// Fermat inversion (n^(p-2) mod p): the exponentiation does uniform work
/// for a fixed p, unlike the extended Euclidean algorithm whose iteration
/// count depends on the operand.
#[must_use]
pub fn mod_inv(n: &BigInt, p: &BigInt) -> BigInt {
    n.mod_floor(p).modpow(&(p - 2), p)
}

/// Whether (x, y) satisfies the curve equation. Infinity counts as on-curve.
#[must_use]
pub fn contains(curve: &Curve, point: &Point) -> bool {
    match point {
        Point::Infinity => true,
        Point::Affine { x, y } => {
            let lhs = (y * y).mod_floor(&curve.p);
            let rhs = (x * x * x + &curve.a * x + &curve.b).mod_floor(&curve.p);
            lhs == rhs
        }
    }
}

/// Add two points on `curve`.
#[must_use]
pub fn point_add(curve: &Curve, lhs: &Point, rhs: &Point) -> Point {
    let (x1, y1) = match lhs {
        Point::Infinity => return rhs.clone(),
        Point::Affine { x, y } => (x, y),
    };
    let (x2, y2) = match rhs {
        Point::Infinity => return lhs.clone(),
        Point::Affine { x, y } => (x, y),
    };

    let p = &curve.p;

    // P + (-P) = O. Same x with opposite y also covers doubling a point
    // with y == 0, whose tangent is vertical.
    if x1 == x2 && (y1 + y2).mod_floor(p).is_zero() {
        return Point::Infinity;
    }

    let m = if x1 == x2 {
        // Tangent slope for doubling
        let numerator = (BigInt::from(3) * x1 * x1 + &curve.a).mod_floor(p);
        let denominator = (BigInt::from(2) * y1).mod_floor(p);
        (numerator * mod_inv(&denominator, p)).mod_floor(p)
    } else {
        // Chord slope
        let numerator = (y1 - y2).mod_floor(p);
        let denominator = (x1 - x2).mod_floor(p);
        (numerator * mod_inv(&denominator, p)).mod_floor(p)
    };

    let x3 = (&m * &m - x1 - x2).mod_floor(p);
    let y3 = (m * (x1 - &x3) - y1).mod_floor(p);
    Point::Affine { x: x3, y: y3 }
}

/// Double a point on `curve`.
#[must_use]
#[inline]
pub fn point_double(curve: &Curve, point: &Point) -> Point {
    point_add(curve, point, point)
}

/// Scalar multiplication k * P with a fixed-length left-to-right ladder.
///
/// All 256 iterations double and add; the key bit only selects which
/// result survives, so the sequence of field operations is independent
/// of the scalar.
#[must_use]
pub fn scalar_mul(curve: &Curve, k: &BigInt, point: &Point) -> Point {
    debug_assert!(*k >= BigInt::zero(), "scalar must be non-negative");
    let mut acc = Point::Infinity;
    for i in (0..256u64).rev() {
        acc = point_double(curve, &acc);
        let sum = point_add(curve, &acc, point);
        if k.bit(i) {
            acc = sum;
        }
    }
    acc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::secp256k1::SECP256K1;
    use num_traits::One;

    #[test]
    fn test_mod_inv() {
        let p = BigInt::from(17);
        let n = BigInt::from(3);
        let inv = mod_inv(&n, &p);
        assert_eq!((&n * &inv).mod_floor(&p), BigInt::one());
    }

    #[test]
    fn test_point_infinity_identity() {
        let curve = &SECP256K1.curve;
        let g = &SECP256K1.g;
        assert_eq!(point_add(curve, &Point::Infinity, g), *g);
        assert_eq!(point_add(curve, g, &Point::Infinity), *g);
        assert!(point_add(curve, &Point::Infinity, &Point::Infinity).is_infinity());
    }

    #[test]
    fn test_add_inverse_is_infinity() {
        let curve = &SECP256K1.curve;
        let g = &SECP256K1.g;
        let Point::Affine { x, y } = g.clone() else {
            panic!("generator is affine");
        };
        let neg_g = Point::new(x, (-y).mod_floor(&curve.p));
        assert!(point_add(curve, g, &neg_g).is_infinity());
    }

    #[test]
    fn test_double_generator() {
        // 2G, pinned from the secp256k1 reference parameters
        let curve = &SECP256K1.curve;
        let two_g = point_double(curve, &SECP256K1.g);
        let expected_x = BigInt::parse_bytes(
            b"C6047F9441ED7D6D3045406E95C07CD85C778E4B8CEF3CA7ABAC09B95C709EE5",
            16,
        )
        .unwrap();
        let expected_y = BigInt::parse_bytes(
            b"1AE168FEA63DC339A3C58419466CEEDF7F632653266D0E1236431A950CFE52A4",
            16,
        )
        .unwrap();
        assert_eq!(two_g, Point::new(expected_x, expected_y));
    }

    #[test]
    fn test_scalar_mul_matches_repeated_addition() {
        let curve = &SECP256K1.curve;
        let g = &SECP256K1.g;
        let mut sum = Point::Infinity;
        for k in 1..=8u32 {
            sum = point_add(curve, &sum, g);
            assert_eq!(scalar_mul(curve, &BigInt::from(k), g), sum, "k = {k}");
        }
    }

    #[test]
    fn test_scalar_mul_stays_on_curve() {
        let curve = &SECP256K1.curve;
        let point = scalar_mul(curve, &BigInt::from(123_456_789u64), &SECP256K1.g);
        assert!(contains(curve, &point));
    }

    #[test]
    fn test_order_times_generator_is_infinity() {
        // n*G = O: the generator has order n
        let result = scalar_mul(&SECP256K1.curve, &SECP256K1.n, &SECP256K1.g);
        assert!(result.is_infinity());
    }
}
