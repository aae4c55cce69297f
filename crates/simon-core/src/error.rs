//! Configuration errors.

use thiserror::Error;

/// Errors raised while building a cipher or mode state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A published Simon parameter set that this crate does not implement.
    #[error("Simon {block_size}/{key_size} is not supported")]
    UnsupportedVariant {
        /// Requested block size in bits.
        block_size: u16,
        /// Requested key size in bits.
        key_size: u16,
    },

    /// Block and key sizes that match no Simon parameter set.
    #[error("block size {block_size} and key size {key_size} do not form a Simon parameter set")]
    InconsistentSizes {
        /// Requested block size in bits.
        block_size: u16,
        /// Requested key size in bits.
        key_size: u16,
    },

    /// Master key of the wrong length.
    #[error("key must be {expected} bytes, got {actual}")]
    KeyLength {
        /// Required length in bytes.
        expected: usize,
        /// Supplied length in bytes.
        actual: usize,
    },

    /// IV or counter seed of the wrong length.
    #[error("{mode} requires a {expected}-byte IV or counter, got {actual}")]
    IvLength {
        /// Name of the mode being configured.
        mode: &'static str,
        /// Required length in bytes.
        expected: usize,
        /// Supplied length in bytes.
        actual: usize,
    },
}
