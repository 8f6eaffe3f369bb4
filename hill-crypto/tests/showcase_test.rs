use hill_crypto::errors::HillCryptoError;
use hill_crypto::key::KeyMatrix;
use hill_crypto::{CipherConfig, CipherEngine, TrailingBlockPolicy};

use std::sync::Once;

static INIT: Once = Once::new();

fn init_logging() {
    INIT.call_once(|| {
        let _ = env_logger::builder()
            .is_test(true)
            .filter_level(log::LevelFilter::Trace)
            .try_init();
    });
}

#[test]
fn showcase_encrypt_decrypt_with_trace() -> Result<(), HillCryptoError> {
    init_logging();

    let engine = CipherEngine::new();
    let key = KeyMatrix::default_2x2();

    let original = "Hello World";

    let encryption = engine.encrypt_with_trace(original, &key)?;
    println!("{}", encryption);
    assert_eq!(encryption.padded_text, "HELLOWORLD");
    assert_eq!(encryption.blocks.len(), 5);

    let decryption = engine.decrypt_with_trace(&encryption.ciphertext, &key)?;
    println!("{}", decryption);
    assert_eq!(decryption.plaintext, "HELLOWORLD");

    let json = serde_json::to_value(&encryption)?;
    assert_eq!(json["text_numbers"][0], 7);
    assert_eq!(json["key_matrix"], serde_json::json!([[3, 2], [5, 7]]));

    Ok(())
}

#[test]
fn showcase_truncated_ciphertext() -> Result<(), HillCryptoError> {
    init_logging();

    let key = KeyMatrix::default_3x3();
    let lenient = CipherEngine::new();
    let strict = CipherEngine::with_config(
        CipherConfig::default().with_trailing_block(TrailingBlockPolicy::Reject),
    );

    let cipher = lenient.encrypt("Cryptography", &key)?;
    let damaged = &cipher[..cipher.len() - 1];

    let trace = lenient.decrypt_with_trace(damaged, &key)?;
    println!("{}", trace);
    assert_eq!(trace.plaintext, "CRYPTOGRA");
    assert_eq!(trace.dropped_numbers.len(), 2);

    assert!(matches!(
        strict.decrypt(damaged, &key),
        Err(HillCryptoError::MalformedCiphertext { length: 11, block_size: 3 })
    ));

    Ok(())
}

#[test]
fn showcase_shared_engine_across_threads() -> Result<(), HillCryptoError> {
    init_logging();

    let engine = CipherEngine::new();
    let texts = ["alpha", "bravo charlie", "delta echo foxtrot", "golf"];

    std::thread::scope(|scope| {
        let handles: Vec<_> = texts
            .iter()
            .enumerate()
            .map(|(i, text)| {
                let engine = &engine;
                scope.spawn(move || -> Result<(String, String), HillCryptoError> {
                    let key = engine.generate_random_key(i + 2)?;
                    let cipher = engine.encrypt(text, &key)?;
                    Ok((text.to_uppercase().replace(' ', ""), engine.decrypt(&cipher, &key)?))
                })
            })
            .collect();

        for handle in handles {
            let (expected, decrypted) = handle.join().expect("worker panicked")?;
            assert_eq!(expected, decrypted.trim_end_matches('X'));
        }
        Ok(())
    })
}
