// RSA Big Integer Operations
// Number theory primitives on top of num-bigint

use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer;
use num_traits::{One, Zero};

/// RSA Big Integer type alias
pub type RsaBigInt = BigUint;

/// Create a big integer from u64
pub fn from_u64(n: u64) -> RsaBigInt {
    RsaBigInt::from(n)
}

/// Trial-division primality test
///
/// Checks 2 and 3 directly, then every candidate of the form 6k±1 up to
/// the square root. The loop bound is `i * i <= n` so no floating point
/// rounding is involved for large inputs.
pub fn is_prime(n: &RsaBigInt) -> bool {
    let two = RsaBigInt::from(2u8);
    let three = RsaBigInt::from(3u8);

    if n <= &RsaBigInt::one() {
        return false;
    }
    if n == &two || n == &three {
        return true;
    }
    if (n % &two).is_zero() || (n % &three).is_zero() {
        return false;
    }

    let mut i = RsaBigInt::from(5u8);
    while &(&i * &i) <= n {
        if (n % &i).is_zero() || (n % (&i + &two)).is_zero() {
            return false;
        }
        i += 6u8;
    }

    true
}

/// Greatest common divisor (iterative Euclid)
pub fn gcd(a: &RsaBigInt, b: &RsaBigInt) -> RsaBigInt {
    let mut a = a.clone();
    let mut b = b.clone();
    while !b.is_zero() {
        let r = &a % &b;
        a = b;
        b = r;
    }
    a
}

/// Extended Euclidean Algorithm
/// Returns (gcd, x, y) such that a*x + m*y = gcd = gcd(a, m)
pub fn extended_gcd(a: &BigInt, m: &BigInt) -> (BigInt, BigInt, BigInt) {
    if a.is_zero() {
        return (m.clone(), BigInt::zero(), BigInt::one());
    }

    let (quotient, remainder) = m.div_rem(a);
    let (gcd, x1, y1) = extended_gcd(&remainder, a);
    let x = y1 - quotient * &x1;
    let y = x1;

    (gcd, x, y)
}

/// Compute modular inverse: e^(-1) mod phi
/// Returns None if inverse doesn't exist
pub fn mod_inverse(e: &RsaBigInt, phi: &RsaBigInt) -> Option<RsaBigInt> {
    if phi.is_zero() {
        return None;
    }

    let e_signed = BigInt::from_biguint(Sign::Plus, e.clone());
    let phi_signed = BigInt::from_biguint(Sign::Plus, phi.clone());
    let (gcd, x, _) = extended_gcd(&e_signed, &phi_signed);

    if !gcd.is_one() {
        return None;
    }

    // x may be negative: shift into [0, phi)
    let mut result = x % &phi_signed;
    if result.sign() == Sign::Minus {
        result += &phi_signed;
    }
    result %= &phi_signed;

    result.to_biguint()
}

/// Modular exponentiation: base^exp mod modulus
/// Uses square-and-multiply algorithm
///
/// A zero modulus has no residues; it yields 0 rather than dividing by zero.
pub fn mod_pow(base: &RsaBigInt, exp: &RsaBigInt, modulus: &RsaBigInt) -> RsaBigInt {
    if modulus.is_zero() || modulus.is_one() {
        return RsaBigInt::zero();
    }

    let mut result = RsaBigInt::one();
    let mut base = base % modulus;
    let mut exp = exp.clone();

    while !exp.is_zero() {
        if exp.is_odd() {
            result = (&result * &base) % modulus;
        }
        base = (&base * &base) % modulus;
        exp >>= 1;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn naive_pow(base: u64, exp: u64, modulus: u64) -> u64 {
        let mut acc = 1 % modulus;
        for _ in 0..exp {
            acc = acc * base % modulus;
        }
        acc
    }

    #[test]
    fn test_is_prime_known_values() {
        for p in [2u64, 3, 5, 7, 11, 97, 7919, 917519] {
            assert!(is_prime(&from_u64(p)), "{} should be prime", p);
        }
        for c in [0u64, 1, 4, 6, 8, 9, 25, 49, 100, 7917, 1_000_001] {
            assert!(!is_prime(&from_u64(c)), "{} should be composite", c);
        }
    }

    #[test]
    fn test_is_prime_square_of_prime() {
        // Boundary of the i*i <= n loop
        assert!(!is_prime(&from_u64(121)));
        assert!(!is_prime(&from_u64(169)));
        assert!(!is_prime(&from_u64(7919 * 7919)));
    }

    #[test]
    fn test_is_prime_beyond_u64() {
        // 2^64 + 1 = 274177 * 67280421310721
        let f6 = (RsaBigInt::one() << 64usize) + 1u8;
        assert!(!is_prime(&f6));
        let m89 = (RsaBigInt::one() << 89usize) - 1u8;
        assert!(!is_prime(&(&m89 * from_u64(3))));
        assert!(!is_prime(&(&m89 << 1usize)));
    }

    #[test]
    fn test_gcd() {
        assert_eq!(gcd(&from_u64(0), &from_u64(9)), from_u64(9));
        assert_eq!(gcd(&from_u64(9), &from_u64(0)), from_u64(9));
        assert_eq!(gcd(&from_u64(120), &from_u64(65537)), from_u64(1));
        assert_eq!(gcd(&from_u64(48), &from_u64(18)), from_u64(6));
    }

    #[test]
    fn test_extended_gcd_bezout_identity() {
        for (a, m) in [(17i64, 120i64), (240, 46), (0, 5), (65537, 20), (35, 15)] {
            let a = BigInt::from(a);
            let m = BigInt::from(m);
            let (g, x, y) = extended_gcd(&a, &m);
            assert_eq!(&a * &x + &m * &y, g);
        }
        let (g, x, y) = extended_gcd(&BigInt::zero(), &BigInt::from(7));
        assert_eq!((g, x, y), (BigInt::from(7), BigInt::zero(), BigInt::one()));
    }

    #[test]
    fn test_mod_inverse() {
        // 3 * 5 = 15 ≡ 1 mod 7, so inverse of 3 mod 7 is 5
        let a = from_u64(3);
        let m = from_u64(7);
        let inv = mod_inverse(&a, &m).unwrap();
        assert_eq!(inv, from_u64(5));
        assert_eq!((a * inv) % m, from_u64(1));

        assert_eq!(mod_inverse(&from_u64(65537), &from_u64(120)), Some(from_u64(113)));
        assert_eq!(mod_inverse(&from_u64(65537), &from_u64(20)), Some(from_u64(13)));
    }

    #[test]
    fn test_mod_inverse_coprime_pairs() {
        for phi in 2u64..200 {
            for e in 1u64..phi {
                let (e_big, phi_big) = (from_u64(e), from_u64(phi));
                match mod_inverse(&e_big, &phi_big) {
                    Some(d) => {
                        assert_eq!(gcd(&e_big, &phi_big), from_u64(1));
                        assert!(d < phi_big);
                        assert_eq!((&e_big * &d) % &phi_big, from_u64(1));
                    }
                    None => assert_ne!(gcd(&e_big, &phi_big), from_u64(1)),
                }
            }
        }
    }

    #[test]
    fn test_mod_inverse_none() {
        assert_eq!(mod_inverse(&from_u64(6), &from_u64(9)), None);
        assert_eq!(mod_inverse(&from_u64(65537), &from_u64(65537 * 28)), None);
        assert_eq!(mod_inverse(&from_u64(3), &from_u64(0)), None);
    }

    #[test]
    fn test_mod_pow() {
        // 3^5 mod 7 = 243 mod 7 = 5
        let base = from_u64(3);
        let exp = from_u64(5);
        let modulus = from_u64(7);
        let result = mod_pow(&base, &exp, &modulus);
        assert_eq!(result, from_u64(5));
    }

    #[test]
    fn test_mod_pow_matches_naive() {
        for modulus in 1u64..30 {
            for base in 0u64..25 {
                for exp in 0u64..12 {
                    assert_eq!(
                        mod_pow(&from_u64(base), &from_u64(exp), &from_u64(modulus)),
                        from_u64(naive_pow(base, exp, modulus)),
                        "{}^{} mod {}",
                        base,
                        exp,
                        modulus
                    );
                }
            }
        }
    }

    #[test]
    fn test_mod_pow_degenerate_moduli() {
        assert_eq!(mod_pow(&from_u64(5), &from_u64(3), &from_u64(1)), from_u64(0));
        assert_eq!(mod_pow(&from_u64(5), &from_u64(3), &from_u64(0)), from_u64(0));
    }

    #[test]
    fn test_mod_pow_large_exponent() {
        // Fermat: a^(p-1) ≡ 1 mod p
        let p = (RsaBigInt::one() << 89usize) - 1u8;
        let exp = &p - 1u8;
        assert_eq!(mod_pow(&from_u64(12345), &exp, &p), RsaBigInt::one());
    }
}
