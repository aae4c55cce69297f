//! Full-block cipher feedback.

use serde::{Deserialize, Serialize};
use simon_core::{Block, SimonCipher, BLOCK_BYTES};
use zeroize::Zeroize;

use super::{check_offset, ModeDriver};
use crate::error::{LengthError, OffsetError};
use crate::mode::Mode;

/// CFB state.
///
/// At a block boundary (`offset == 0`) the register holds the previous
/// ciphertext block, or the IV before the first block. Mid-block, the
/// first `offset` bytes are ciphertext and the rest unused keystream.
/// Wiped on drop.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawCfb")]
pub struct Cfb {
    register: Block,
    offset: usize,
}

#[derive(Deserialize)]
struct RawCfb {
    register: Block,
    offset: usize,
}

impl TryFrom<RawCfb> for Cfb {
    type Error = OffsetError;

    fn try_from(raw: RawCfb) -> Result<Self, Self::Error> {
        check_offset(Mode::Cfb, raw.offset)?;
        Ok(Self {
            register: raw.register,
            offset: raw.offset,
        })
    }
}

impl Zeroize for Cfb {
    fn zeroize(&mut self) {
        self.register.zeroize();
        self.offset = 0;
    }
}

impl Drop for Cfb {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl Cfb {
    /// Starts feedback from `iv`.
    pub fn new(iv: Block) -> Self {
        Self {
            register: iv,
            offset: 0,
        }
    }

    /// The feedback register.
    pub fn register(&self) -> &Block {
        &self.register
    }

    /// Bytes of the current block already consumed.
    pub fn offset(&self) -> usize {
        self.offset
    }

    #[inline]
    fn refill(&mut self, cipher: &SimonCipher) {
        if self.offset == 0 {
            cipher.encrypt_block(&mut self.register);
        }
    }
}

impl ModeDriver for Cfb {
    const MODE: Mode = Mode::Cfb;

    fn encrypt(&mut self, cipher: &SimonCipher, buf: &mut [u8]) -> Result<(), LengthError> {
        for byte in buf.iter_mut() {
            self.refill(cipher);
            let c = *byte ^ self.register[self.offset];
            self.register[self.offset] = c;
            *byte = c;
            self.offset = (self.offset + 1) % BLOCK_BYTES;
        }
        Ok(())
    }

    // Both directions run the forward block transform.
    fn decrypt(&mut self, cipher: &SimonCipher, buf: &mut [u8]) -> Result<(), LengthError> {
        for byte in buf.iter_mut() {
            self.refill(cipher);
            let c = *byte;
            *byte = c ^ self.register[self.offset];
            self.register[self.offset] = c;
            self.offset = (self.offset + 1) % BLOCK_BYTES;
        }
        Ok(())
    }
}
