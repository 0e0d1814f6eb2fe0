// RSA Decryption
// Inverse pipeline: m_i = c_i^d mod n, then codes back to text

use tracing::{debug, trace};

use super::bigint::{mod_pow, RsaBigInt};
use super::codec::{codes_to_text_lossy, describe_code};

/// Recovered plaintext plus the narration of how it was recovered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decryption {
    pub plaintext: String,
    pub steps: Vec<String>,
}

/// Decrypt a ciphertext sequence with the private exponent d
///
/// Codes that do not form valid UTF-16 (a mismatched key, usually) come
/// back as U+FFFD rather than failing.
pub fn decrypt(ciphertext: &[RsaBigInt], d: &RsaBigInt, n: &RsaBigInt) -> Decryption {
    debug!(values = ciphertext.len(), %n, "decrypting ciphertext");

    let mut steps = Vec::with_capacity(ciphertext.len() + 1);
    let codes: Vec<RsaBigInt> = ciphertext
        .iter()
        .map(|c| {
            let m = mod_pow(c, d, n);
            trace!(%c, %m, "decrypted value");
            steps.push(format!(
                "Decrypt {}: m = c^d mod n = {}^{} mod {} = {} → {}",
                c,
                c,
                d,
                n,
                m,
                describe_code(&m)
            ));
            m
        })
        .collect();

    let plaintext = codes_to_text_lossy(&codes);
    steps.push(format!("Decrypted message: \"{}\"", plaintext));

    Decryption { plaintext, steps }
}
