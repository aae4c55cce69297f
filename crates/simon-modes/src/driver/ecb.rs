//! Electronic codebook.

use serde::{Deserialize, Serialize};
use simon_core::{SimonCipher, BLOCK_BYTES};

use super::{check_aligned, load_block, ModeDriver};
use crate::error::LengthError;
use crate::mode::Mode;

/// ECB carries no state between blocks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ecb;

impl ModeDriver for Ecb {
    const MODE: Mode = Mode::Ecb;

    fn encrypt(&mut self, cipher: &SimonCipher, buf: &mut [u8]) -> Result<(), LengthError> {
        check_aligned(Self::MODE, buf.len())?;
        for chunk in buf.chunks_exact_mut(BLOCK_BYTES) {
            let mut block = load_block(chunk);
            cipher.encrypt_block(&mut block);
            chunk.copy_from_slice(&block);
        }
        Ok(())
    }

    fn decrypt(&mut self, cipher: &SimonCipher, buf: &mut [u8]) -> Result<(), LengthError> {
        check_aligned(Self::MODE, buf.len())?;
        for chunk in buf.chunks_exact_mut(BLOCK_BYTES) {
            let mut block = load_block(chunk);
            cipher.decrypt_block(&mut block);
            chunk.copy_from_slice(&block);
        }
        Ok(())
    }
}
