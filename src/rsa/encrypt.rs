// RSA Encryption
// Textbook RSA, one modular exponentiation per character code

use tracing::{debug, trace};

use super::bigint::{mod_pow, RsaBigInt};
use super::codec::{describe_code, text_to_codes};

/// Ciphertext plus the narration of how it was produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encryption {
    pub ciphertext: Vec<RsaBigInt>,
    pub steps: Vec<String>,
}

/// Encrypt a message: c_i = m_i^e mod n for every character code m_i
///
/// Does not check that codes are below n; callers gate on
/// [`validate_message`](super::validate::validate_message) first, otherwise
/// the result silently wraps.
pub fn encrypt(message: &str, e: &RsaBigInt, n: &RsaBigInt) -> Encryption {
    let codes = text_to_codes(message);
    debug!(characters = codes.len(), %e, %n, "encrypting message");

    let mapping = codes
        .iter()
        .map(|code| format!("{} → {}", describe_code(code), code))
        .collect::<Vec<_>>()
        .join(", ");

    let mut steps = Vec::with_capacity(codes.len() + 1);
    steps.push(format!("Character codes: [{}]", mapping));

    let ciphertext: Vec<RsaBigInt> = codes
        .iter()
        .map(|m| {
            let c = mod_pow(m, e, n);
            trace!(%m, %c, "encrypted code");
            steps.push(format!(
                "Encrypt {}: c = m^e mod n = {}^{} mod {} = {}",
                describe_code(m),
                m,
                e,
                n,
                c
            ));
            c
        })
        .collect();

    Encryption { ciphertext, steps }
}
