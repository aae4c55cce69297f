//! Per-mode drivers.
//!
//! Each driver owns exactly the register its mode needs and advances it as
//! blocks are processed. Drivers never hold key material; the schedule is
//! borrowed from a [`SimonCipher`] on every call.

mod cbc;
mod cfb;
mod ctr;
mod ecb;
mod ofb;

use simon_core::{Block, SimonCipher, BLOCK_BYTES};

use crate::error::{LengthError, OffsetError};
use crate::mode::Mode;

pub use cbc::Cbc;
pub use cfb::Cfb;
pub use ctr::Ctr;
pub use ecb::Ecb;
pub use ofb::Ofb;

/// A mode of operation driving single-block Simon transforms.
pub trait ModeDriver {
    /// Mode implemented by the driver.
    const MODE: Mode;

    /// Encrypts `buf` in place, advancing the driver state.
    fn encrypt(&mut self, cipher: &SimonCipher, buf: &mut [u8]) -> Result<(), LengthError>;

    /// Decrypts `buf` in place, advancing the driver state.
    fn decrypt(&mut self, cipher: &SimonCipher, buf: &mut [u8]) -> Result<(), LengthError>;
}

/// Rejects input that is not a whole number of blocks.
pub(crate) fn check_aligned(mode: Mode, len: usize) -> Result<(), LengthError> {
    if len % BLOCK_BYTES == 0 {
        Ok(())
    } else {
        Err(LengthError {
            mode,
            len,
            block_size: BLOCK_BYTES,
        })
    }
}

/// Rejects a decoded keystream offset that does not point into a block.
pub(crate) fn check_offset(mode: Mode, offset: usize) -> Result<(), OffsetError> {
    if offset < BLOCK_BYTES {
        Ok(())
    } else {
        Err(OffsetError {
            mode,
            offset,
            block_size: BLOCK_BYTES,
        })
    }
}

/// Copies a block-sized chunk out of a larger buffer.
#[inline]
pub(crate) fn load_block(chunk: &[u8]) -> Block {
    let mut block = [0u8; BLOCK_BYTES];
    block.copy_from_slice(chunk);
    block
}
