// RSA Error Types
// Recoverable failures reported by key derivation, validation and the codec

use thiserror::Error;

use super::bigint::RsaBigInt;

/// Why a keypair could not be derived
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyDerivationReason {
    #[error("{0} is not prime")]
    NotPrime(RsaBigInt),

    #[error("p and q must be distinct primes, got {0} twice")]
    IdenticalPrimes(RsaBigInt),

    #[error("e = {e} is not coprime with φ(n) = {phi}")]
    NonCoprimeExponent { e: RsaBigInt, phi: RsaBigInt },

    #[error("no modular inverse of e = {e} modulo φ(n) = {phi}")]
    NoModularInverse { e: RsaBigInt, phi: RsaBigInt },
}

/// Key derivation failure together with the narration recorded up to it
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("key derivation failed: {reason}")]
pub struct KeyDerivationError {
    pub reason: KeyDerivationReason,
    pub steps: Vec<String>,
}

/// Input guard failures, checked before derivation or encryption
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is not prime")]
    NotPrime(RsaBigInt),

    #[error("p and q must be distinct, got {0} twice")]
    IdenticalPrimes(RsaBigInt),

    #[error("character {character:?} at position {position} has code {code}, which is not less than n = {n}")]
    MessageTooLarge {
        position: usize,
        character: String,
        code: RsaBigInt,
        n: RsaBigInt,
    },
}

/// Character code conversion failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error("code {code} at position {position} is outside the 16-bit code unit range")]
    CodeOutOfRange { position: usize, code: RsaBigInt },

    #[error("codes do not form valid UTF-16 text")]
    InvalidUtf16,
}
