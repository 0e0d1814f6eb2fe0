//! Textbook RSA for teaching.
//!
//! Pick two small primes, derive a keypair, encrypt a message one character
//! code at a time and decrypt it back. Every operation returns its result
//! together with a human-readable trace of the arithmetic it performed.
//!
//! There is no padding and no side-channel hardening; do not use this for
//! anything but demonstrations.

pub mod rsa;
pub mod util;

pub use rsa::{
    decrypt, derive_keypair, encrypt, is_prime, validate_message, Decryption, Encryption,
    KeyDerivationError, RsaKeyPair,
};
