//! Key types for Simon.

use core::fmt;

use zeroize::Zeroize;

use crate::consts::MAX_ROUNDS;
use crate::error::ConfigError;

/// Simon 128/128 master key. Wiped on drop.
#[derive(Clone, PartialEq, Eq)]
pub struct SimonKey(pub [u8; 16]);

impl SimonKey {
    /// Builds a key from a slice that must be exactly 16 bytes long.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, ConfigError> {
        let key: [u8; 16] = bytes.try_into().map_err(|_| ConfigError::KeyLength {
            expected: 16,
            actual: bytes.len(),
        })?;
        Ok(Self(key))
    }

    /// Splits the key into little-endian 64-bit words, `k[0]` first.
    pub fn words(&self) -> [u64; 2] {
        let mut lo = [0u8; 8];
        let mut hi = [0u8; 8];
        lo.copy_from_slice(&self.0[..8]);
        hi.copy_from_slice(&self.0[8..]);
        [u64::from_le_bytes(lo), u64::from_le_bytes(hi)]
    }
}

impl From<[u8; 16]> for SimonKey {
    fn from(value: [u8; 16]) -> Self {
        Self(value)
    }
}

impl fmt::Debug for SimonKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SimonKey(..)")
    }
}

impl Drop for SimonKey {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

/// Expanded round keys.
///
/// Storage is sized for the longest Simon schedule; only the first
/// `len()` words are meaningful.
#[derive(Clone, PartialEq, Eq)]
pub struct RoundKeys {
    words: [u64; MAX_ROUNDS],
    len: usize,
}

impl RoundKeys {
    /// An all-zero schedule of `len` words, filled in place by the key schedule.
    pub(crate) fn zeroed(len: usize) -> Self {
        debug_assert!(len <= MAX_ROUNDS);
        Self {
            words: [0u64; MAX_ROUNDS],
            len,
        }
    }

    pub(crate) fn words_mut(&mut self) -> &mut [u64] {
        &mut self.words[..self.len]
    }

    /// Returns the round key for `round` (`0..len()`).
    #[inline]
    pub fn get(&self, round: usize) -> u64 {
        self.as_slice()[round]
    }

    /// Number of round keys, equal to the configured round limit.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false for a schedule built by `expand_key`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The active round keys in round order.
    #[inline]
    pub fn as_slice(&self) -> &[u64] {
        &self.words[..self.len]
    }
}

impl fmt::Debug for RoundKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RoundKeys")
            .field("len", &self.len)
            .finish_non_exhaustive()
    }
}

impl Zeroize for RoundKeys {
    fn zeroize(&mut self) {
        self.words.zeroize();
    }
}

impl Drop for RoundKeys {
    fn drop(&mut self) {
        self.zeroize();
    }
}
