//! Output feedback.

use serde::{Deserialize, Serialize};
use simon_core::{Block, SimonCipher, BLOCK_BYTES};
use zeroize::Zeroize;

use super::{check_offset, ModeDriver};
use crate::error::{LengthError, OffsetError};
use crate::mode::Mode;

/// OFB state: the last keystream block (the IV before the first block).
/// Wiped on drop.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawOfb")]
pub struct Ofb {
    register: Block,
    offset: usize,
}

#[derive(Deserialize)]
struct RawOfb {
    register: Block,
    offset: usize,
}

impl TryFrom<RawOfb> for Ofb {
    type Error = OffsetError;

    fn try_from(raw: RawOfb) -> Result<Self, Self::Error> {
        check_offset(Mode::Ofb, raw.offset)?;
        Ok(Self {
            register: raw.register,
            offset: raw.offset,
        })
    }
}

impl Zeroize for Ofb {
    fn zeroize(&mut self) {
        self.register.zeroize();
        self.offset = 0;
    }
}

impl Drop for Ofb {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl Ofb {
    /// Starts the keystream from `iv`.
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

    /// Bytes of the current keystream block already consumed.
    pub fn offset(&self) -> usize {
        self.offset
    }

    fn apply_keystream(&mut self, cipher: &SimonCipher, buf: &mut [u8]) {
        for byte in buf.iter_mut() {
            if self.offset == 0 {
                cipher.encrypt_block(&mut self.register);
            }
            *byte ^= self.register[self.offset];
            self.offset = (self.offset + 1) % BLOCK_BYTES;
        }
    }
}

impl ModeDriver for Ofb {
    const MODE: Mode = Mode::Ofb;

    fn encrypt(&mut self, cipher: &SimonCipher, buf: &mut [u8]) -> Result<(), LengthError> {
        self.apply_keystream(cipher, buf);
        Ok(())
    }

    fn decrypt(&mut self, cipher: &SimonCipher, buf: &mut [u8]) -> Result<(), LengthError> {
        self.apply_keystream(cipher, buf);
        Ok(())
    }
}
