//! Simon 128/128 block cipher core.
//!
//! This crate follows the Simon design paper (Beaulieu et al., 2013) and provides:
//! - Word primitives and the published z-sequence constants.
//! - The key schedule, generic over word width and key word count.
//! - Single-block encryption and decryption.
//! - Configuration types shared with the mode layer.
//!
//! Only the 128/128 parameter set is wired to a [`Variant`]; the remaining
//! family members are known to [`CipherConfig::from_sizes`] so they can be
//! reported as unsupported rather than malformed.
//!
//! The implementation aims for clarity and testability rather than constant-time
//! guarantees; it should not be treated as side-channel hardened.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cipher;
pub mod consts;
mod error;
mod key;
mod round;
mod variant;
mod word;

pub use crate::block::{load_words, store_words, xor_in_place, Block, BLOCK_BYTES};
pub use crate::cipher::{
    decrypt_block, decrypt_words, encrypt_block, encrypt_words, expand_key, expand_words,
    SimonCipher,
};
pub use crate::error::ConfigError;
pub use crate::key::{RoundKeys, SimonKey};
pub use crate::round::{inv_round, round};
pub use crate::variant::{CipherConfig, Variant};
pub use crate::word::WordOps;
