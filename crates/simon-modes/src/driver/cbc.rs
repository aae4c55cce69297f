//! Cipher block chaining.

use serde::{Deserialize, Serialize};
use simon_core::{xor_in_place, Block, SimonCipher, BLOCK_BYTES};
use zeroize::Zeroize;

use super::{check_aligned, load_block, ModeDriver};
use crate::error::LengthError;
use crate::mode::Mode;

/// CBC state: the previous ciphertext block, starting at the IV.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cbc {
    chain: Block,
}

impl Cbc {
    /// Starts a chain from `iv`.
    pub fn new(iv: Block) -> Self {
        Self { chain: iv }
    }

    /// The block XORed into the next plaintext (encrypt) or output (decrypt).
    pub fn chain(&self) -> &Block {
        &self.chain
    }
}

impl Zeroize for Cbc {
    fn zeroize(&mut self) {
        self.chain.zeroize();
    }
}

impl ModeDriver for Cbc {
    const MODE: Mode = Mode::Cbc;

    fn encrypt(&mut self, cipher: &SimonCipher, buf: &mut [u8]) -> Result<(), LengthError> {
        check_aligned(Self::MODE, buf.len())?;
        for chunk in buf.chunks_exact_mut(BLOCK_BYTES) {
            let mut block = load_block(chunk);
            xor_in_place(&mut block, &self.chain);
            cipher.encrypt_block(&mut block);
            chunk.copy_from_slice(&block);
            self.chain = block;
        }
        Ok(())
    }

    fn decrypt(&mut self, cipher: &SimonCipher, buf: &mut [u8]) -> Result<(), LengthError> {
        check_aligned(Self::MODE, buf.len())?;
        for chunk in buf.chunks_exact_mut(BLOCK_BYTES) {
            let ciphertext = load_block(chunk);
            let mut block = ciphertext;
            cipher.decrypt_block(&mut block);
            xor_in_place(&mut block, &self.chain);
            chunk.copy_from_slice(&block);
            self.chain = ciphertext;
        }
        Ok(())
    }
}
