// RSA Module - Main module file
// Textbook RSA core: number theory, key derivation, codec, guards, pipelines

pub mod bigint;
pub mod codec;
pub mod decrypt;
pub mod encrypt;
pub mod error;
pub mod keygen;
pub mod primes;
pub mod validate;

pub use bigint::{extended_gcd, from_u64, gcd, is_prime, mod_inverse, mod_pow, RsaBigInt};
pub use codec::{codes_to_text, codes_to_text_lossy, text_to_codes};
pub use decrypt::{decrypt, Decryption};
pub use encrypt::{encrypt, Encryption};
pub use error::{CodecError, KeyDerivationError, KeyDerivationReason, ValidationError};
pub use keygen::{derive_keypair, RsaKeyPair, RsaPrivateKey, RsaPublicKey, PUBLIC_EXPONENT};
pub use primes::{suggest_primes, SUGGESTED_PRIMES};
pub use validate::{check_message, check_primes, validate_message};
