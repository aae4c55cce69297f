//! Counter mode.

use serde::{Deserialize, Serialize};
use simon_core::{Block, SimonCipher, BLOCK_BYTES};
use zeroize::Zeroize;

use super::{check_offset, ModeDriver};
use crate::error::{LengthError, OffsetError};
use crate::mode::Mode;

/// CTR state.
///
/// The counter must never repeat under one key; nothing here detects reuse.
/// Counter and buffered keystream are wiped on drop.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawCtr")]
pub struct Ctr {
    counter: Block,
    keystream: Block,
    offset: usize,
}

#[derive(Deserialize)]
struct RawCtr {
    counter: Block,
    keystream: Block,
    offset: usize,
}

impl TryFrom<RawCtr> for Ctr {
    type Error = OffsetError;

    fn try_from(raw: RawCtr) -> Result<Self, Self::Error> {
        check_offset(Mode::Ctr, raw.offset)?;
        Ok(Self {
            counter: raw.counter,
            keystream: raw.keystream,
            offset: raw.offset,
        })
    }
}

impl Ctr {
    /// Starts counting from `counter`.
    pub fn new(counter: Block) -> Self {
        Self {
            counter,
            keystream: [0u8; BLOCK_BYTES],
            offset: 0,
        }
    }

    /// Counter value for the next keystream block.
    pub fn counter(&self) -> &Block {
        &self.counter
    }

    /// Bytes of the current keystream block already consumed.
    pub fn offset(&self) -> usize {
        self.offset
    }

    fn apply_keystream(&mut self, cipher: &SimonCipher, buf: &mut [u8]) {
        for byte in buf.iter_mut() {
            if self.offset == 0 {
                self.keystream = self.counter;
                cipher.encrypt_block(&mut self.keystream);
                increment(&mut self.counter);
            }
            *byte ^= self.keystream[self.offset];
            self.offset = (self.offset + 1) % BLOCK_BYTES;
        }
    }
}

impl Zeroize for Ctr {
    fn zeroize(&mut self) {
        self.counter.zeroize();
        self.keystream.zeroize();
        self.offset = 0;
    }
}

impl Drop for Ctr {
    fn drop(&mut self) {
        self.zeroize();
    }
}

/// Adds one to `counter` read as a big-endian integer, wrapping at 2^128.
#[inline]
pub(crate) fn increment(counter: &mut Block) {
    *counter = u128::from_be_bytes(*counter).wrapping_add(1).to_be_bytes();
}

impl ModeDriver for Ctr {
    const MODE: Mode = Mode::Ctr;

    fn encrypt(&mut self, cipher: &SimonCipher, buf: &mut [u8]) -> Result<(), LengthError> {
        self.apply_keystream(cipher, buf);
        Ok(())
    }

    fn decrypt(&mut self, cipher: &SimonCipher, buf: &mut [u8]) -> Result<(), LengthError> {
        self.apply_keystream(cipher, buf);
        Ok(())
    }
}
