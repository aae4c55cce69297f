//! Encrypts a short message under each mode and decrypts it back.

use simon_modes::{CipherConfig, CipherContext, Mode};

fn main() {
    // Fixed key and IV for reproducibility in the example.
    let key = [0x0fu8; 16];
    let iv = *b"example iv bytes";
    let message = *b"thirty-two bytes of plain text!!";

    for mode in Mode::ALL {
        let mut enc = CipherContext::initialize(CipherConfig::default(), &key, &iv, mode)
            .expect("valid configuration");
        let ciphertext = enc.encrypt(&message).expect("block-aligned message");

        let mut dec = CipherContext::initialize(CipherConfig::default(), &key, &iv, mode)
            .expect("valid configuration");
        let plaintext = dec.decrypt(&ciphertext).expect("block-aligned message");
        assert_eq!(plaintext, message);

        println!("{mode}: {}", hex::encode(&ciphertext));
    }

    println!("example succeeded; every mode round-trips");
}

