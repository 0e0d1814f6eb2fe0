// RSA Key Derivation
// Derives a textbook keypair from two caller-chosen primes, narrating each step

use num_traits::One;
use tracing::debug;

use super::bigint::{from_u64, gcd, is_prime, mod_inverse, RsaBigInt};
use super::decrypt::{decrypt, Decryption};
use super::encrypt::{encrypt, Encryption};
use super::error::{KeyDerivationError, KeyDerivationReason};

/// Fixed public exponent
pub const PUBLIC_EXPONENT: u64 = 65537;

/// RSA Public Key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaPublicKey {
    pub n: RsaBigInt, // Modulus
    pub e: RsaBigInt, // Public exponent
}

/// RSA Private Key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaPrivateKey {
    pub n: RsaBigInt, // Modulus (same as public)
    pub d: RsaBigInt, // Private exponent
}

/// RSA Key Pair with the narration of how it was derived
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaKeyPair {
    pub p: RsaBigInt,
    pub q: RsaBigInt,
    pub n: RsaBigInt,
    pub phi: RsaBigInt,
    pub e: RsaBigInt,
    pub d: RsaBigInt,
    pub steps: Vec<String>,
}

impl RsaPublicKey {
    /// Bit length of the modulus
    pub fn bit_length(&self) -> u64 {
        self.n.bits()
    }

    /// Encrypt a message under this key
    ///
    /// The message must already have passed
    /// [`validate_message`](super::validate::validate_message).
    pub fn encrypt(&self, message: &str) -> Encryption {
        encrypt(message, &self.e, &self.n)
    }
}

impl RsaPrivateKey {
    /// Bit length of the modulus
    pub fn bit_length(&self) -> u64 {
        self.n.bits()
    }

    /// Decrypt a ciphertext under this key
    pub fn decrypt(&self, ciphertext: &[RsaBigInt]) -> Decryption {
        decrypt(ciphertext, &self.d, &self.n)
    }
}

impl RsaKeyPair {
    pub fn public_key(&self) -> RsaPublicKey {
        RsaPublicKey {
            n: self.n.clone(),
            e: self.e.clone(),
        }
    }

    pub fn private_key(&self) -> RsaPrivateKey {
        RsaPrivateKey {
            n: self.n.clone(),
            d: self.d.clone(),
        }
    }

    /// Bit length of the modulus
    pub fn bit_length(&self) -> u64 {
        self.n.bits()
    }
}

fn fail(
    reason: KeyDerivationReason,
    mut steps: Vec<String>,
) -> Result<RsaKeyPair, KeyDerivationError> {
    debug!(%reason, "key derivation failed");
    steps.push(format!("Error: {}", reason));
    Err(KeyDerivationError { reason, steps })
}

/// Derive a keypair from two distinct primes p and q with e = 65537
///
/// Returns the keypair together with one narration step per stage:
/// prime check, n, φ(n), e, d, and the final e·d ≡ 1 check. On failure the
/// error carries the steps taken so far plus a closing error step.
pub fn derive_keypair(p: &RsaBigInt, q: &RsaBigInt) -> Result<RsaKeyPair, KeyDerivationError> {
    let mut steps = Vec::with_capacity(6);
    debug!(%p, %q, "deriving keypair");

    // Step 1: p and q must be distinct primes
    for candidate in [p, q] {
        if !is_prime(candidate) {
            return fail(KeyDerivationReason::NotPrime(candidate.clone()), steps);
        }
    }
    if p == q {
        return fail(KeyDerivationReason::IdenticalPrimes(p.clone()), steps);
    }
    steps.push(format!("Step 1: Verified that p = {} and q = {} are distinct primes", p, q));

    // Step 2: Compute n = p * q
    let n = p * q;
    steps.push(format!("Step 2: n = p × q = {} × {} = {}", p, q, n));

    // Step 3: Compute φ(n) = (p-1)(q-1)
    let p_minus_1 = p - 1u8;
    let q_minus_1 = q - 1u8;
    let phi = &p_minus_1 * &q_minus_1;
    steps.push(format!(
        "Step 3: φ(n) = (p − 1) × (q − 1) = {} × {} = {}",
        p_minus_1, q_minus_1, phi
    ));

    // Step 4: Verify e and φ(n) are coprime
    let e = from_u64(PUBLIC_EXPONENT);
    let divisor = gcd(&e, &phi);
    if !divisor.is_one() {
        steps.push(format!(
            "Step 4: e = {}, but gcd(e, φ(n)) = gcd({}, {}) = {}",
            e, e, phi, divisor
        ));
        return fail(KeyDerivationReason::NonCoprimeExponent { e, phi }, steps);
    }
    steps.push(format!(
        "Step 4: e = {}, gcd(e, φ(n)) = gcd({}, {}) = 1, so e is a valid public exponent",
        e, e, phi
    ));

    // Step 5: Compute d = e^(-1) mod φ(n)
    let d = match mod_inverse(&e, &phi) {
        Some(d) => d,
        None => return fail(KeyDerivationReason::NoModularInverse { e, phi }, steps),
    };
    steps.push(format!(
        "Step 5: d = e⁻¹ mod φ(n) = {}⁻¹ mod {} = {} (extended Euclidean algorithm)",
        e, phi, d
    ));

    // Step 6: Verification identity
    let check = (&e * &d) % &phi;
    steps.push(format!(
        "Step 6: Verification: (e × d) mod φ(n) = ({} × {}) mod {} = {}",
        e, d, phi, check
    ));

    debug!(%n, %phi, %d, "keypair derived");

    Ok(RsaKeyPair {
        p: p.clone(),
        q: q.clone(),
        n,
        phi,
        e,
        d,
        steps,
    })
}
