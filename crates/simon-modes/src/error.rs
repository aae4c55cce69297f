//! Error types for mode operations.

use thiserror::Error;

use crate::mode::Mode;

/// Input length not accepted by a block-aligned mode.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{mode} input length {len} is not a multiple of the {block_size}-byte block size")]
pub struct LengthError {
    /// Mode that rejected the input.
    pub mode: Mode,
    /// Offending input length in bytes.
    pub len: usize,
    /// Block size in bytes.
    pub block_size: usize,
}

/// Keystream offset outside a block, found while decoding a mode state.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{mode} keystream offset {offset} is not below the {block_size}-byte block size")]
pub struct OffsetError {
    /// Mode whose state was rejected.
    pub mode: Mode,
    /// Decoded offset.
    pub offset: usize,
    /// Block size in bytes.
    pub block_size: usize,
}

/// Unrecognised mode name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown mode `{0}` (expected ecb, cbc, ctr, cfb or ofb)")]
pub struct ParseModeError(pub String);
