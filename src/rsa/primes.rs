// Prime suggestions for the demo
// Picks two distinct primes from a fixed table using a caller-supplied RNG

use rand::seq::index::sample;
use rand::Rng;

use super::bigint::{from_u64, RsaBigInt};

/// Small primes offered as suggestions
///
/// Any pair gives n > 10000, enough for ASCII and most Latin text. Both
/// p - 1 and q - 1 stay below the prime 65537, so e = 65537 always works.
pub const SUGGESTED_PRIMES: [u64; 37] = [
    101, 103, 107, 109, 113, 127, 131, 137, 139, 149, 151, 157, 163, 167, 173, 179, 181, 191, 193,
    197, 199, 211, 223, 227, 229, 233, 239, 241, 251, 257, 263, 269, 271, 277, 281, 283, 293,
];

/// Pick two distinct suggested primes
pub fn suggest_primes<R: Rng + ?Sized>(rng: &mut R) -> (RsaBigInt, RsaBigInt) {
    let picked = sample(rng, SUGGESTED_PRIMES.len(), 2);
    (
        from_u64(SUGGESTED_PRIMES[picked.index(0)]),
        from_u64(SUGGESTED_PRIMES[picked.index(1)]),
    )
}
