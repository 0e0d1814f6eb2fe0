use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use rsa_demo::rsa::{
    check_primes, codes_to_text, from_u64, suggest_primes, text_to_codes, RsaBigInt,
};
use rsa_demo::{decrypt, derive_keypair, encrypt, validate_message, KeyDerivationError};

fn random_message<R: Rng>(rng: &mut R, n: &RsaBigInt, len: usize) -> String {
    // Stay in the Basic Multilingual Plane below the surrogate block
    let limit = n.to_u32_digits().first().copied().unwrap_or(0).min(0xD800);
    (0..len)
        .filter_map(|_| char::from_u32(rng.gen_range(0x20..limit)))
        .collect()
}

#[test]
fn roundtrip_random_messages() {
    let mut rng = ChaCha20Rng::seed_from_u64(2024);
    for _ in 0..20 {
        let (p, q) = suggest_primes(&mut rng);
        assert!(check_primes(&p, &q).is_ok());
        let keypair = derive_keypair(&p, &q).unwrap();

        let len = rng.gen_range(0..24);
        let message = random_message(&mut rng, &keypair.n, len);
        assert!(validate_message(&message, &keypair.n));

        let encrypted = encrypt(&message, &keypair.e, &keypair.n);
        assert_eq!(encrypted.ciphertext.len(), text_to_codes(&message).len());
        assert!(encrypted.ciphertext.iter().all(|c| c < &keypair.n));

        let decrypted = decrypt(&encrypted.ciphertext, &keypair.d, &keypair.n);
        assert_eq!(decrypted.plaintext, message);
    }
}

#[test]
fn hi_roundtrip_with_large_modulus() {
    let keypair = derive_keypair(&from_u64(101), &from_u64(103)).unwrap();
    assert!(keypair.n > from_u64(200));

    let encrypted = encrypt("Hi", &keypair.e, &keypair.n);
    let decrypted = decrypt(&encrypted.ciphertext, &keypair.d, &keypair.n);
    assert_eq!(decrypted.plaintext, "Hi");
    assert_eq!(decrypted.steps.last().unwrap(), "Decrypted message: \"Hi\"");
}

#[test]
fn oversized_character_is_rejected() {
    let keypair = derive_keypair(&from_u64(11), &from_u64(13)).unwrap();
    // '€' = 8364 >= 143
    assert!(!validate_message("Hi €", &keypair.n));
    assert!(validate_message("Hi", &keypair.n));
}

#[test]
fn bypassing_validation_loses_information() {
    let keypair = derive_keypair(&from_u64(11), &from_u64(13)).unwrap();
    let encrypted = encrypt("é", &keypair.e, &keypair.n);
    let decrypted = decrypt(&encrypted.ciphertext, &keypair.d, &keypair.n);
    // 233 mod 143 = 90 = 'Z'
    assert_eq!(decrypted.plaintext, "Z");
}

#[test]
fn large_primes_roundtrip() {
    // Neither p - 1 nor q - 1 is a multiple of 65537
    let p = from_u64(1_000_003);
    let q = from_u64(999_983);
    let keypair = derive_keypair(&p, &q).unwrap();
    let message = "日本語 😀";
    assert!(validate_message(message, &keypair.n));

    let encrypted = encrypt(message, &keypair.e, &keypair.n);
    let decrypted = decrypt(&encrypted.ciphertext, &keypair.d, &keypair.n);
    assert_eq!(decrypted.plaintext, message);
    assert_eq!(
        codes_to_text(&text_to_codes(&decrypted.plaintext)).unwrap(),
        message
    );
}

#[test]
fn derivation_failure_keeps_narration() {
    let err: KeyDerivationError = derive_keypair(&from_u64(917519), &from_u64(5)).unwrap_err();
    assert_eq!(err.steps.len(), 5);
    assert!(err.to_string().contains("not coprime"));
}
