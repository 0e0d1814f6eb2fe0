// Input guards
// Must run before derivation/encryption; the pipelines do not re-check

use super::bigint::{is_prime, RsaBigInt};
use super::codec::{describe_code, text_to_codes};
use super::error::ValidationError;

/// Check that p and q are both prime and distinct
pub fn check_primes(p: &RsaBigInt, q: &RsaBigInt) -> Result<(), ValidationError> {
    for candidate in [p, q] {
        if !is_prime(candidate) {
            return Err(ValidationError::NotPrime(candidate.clone()));
        }
    }
    if p == q {
        return Err(ValidationError::IdenticalPrimes(p.clone()));
    }
    Ok(())
}

/// Check that every character code of the message is below n
///
/// Reports the first offending character.
pub fn check_message(message: &str, n: &RsaBigInt) -> Result<(), ValidationError> {
    match text_to_codes(message)
        .into_iter()
        .enumerate()
        .find(|(_, code)| code >= n)
    {
        Some((position, code)) => Err(ValidationError::MessageTooLarge {
            position,
            character: describe_code(&code),
            code,
            n: n.clone(),
        }),
        None => Ok(()),
    }
}

/// True iff every character code of the message is strictly less than n
pub fn validate_message(message: &str, n: &RsaBigInt) -> bool {
    check_message(message, n).is_ok()
}
