//! Cipher variants and their derived configuration.

use serde::{Deserialize, Serialize};

use crate::consts::{family_params, FamilyParams, SIMON_128_128};
use crate::error::ConfigError;
use crate::word::WordOps;

/// Implemented Simon parameter sets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Variant {
    /// 128-bit block, 128-bit key, 68 rounds.
    Simon128_128,
}

impl Variant {
    /// Published parameters of the variant.
    pub const fn params(self) -> FamilyParams {
        match self {
            Variant::Simon128_128 => SIMON_128_128,
        }
    }

    fn from_sizes(block_size: u16, key_size: u16) -> Option<Self> {
        match (block_size, key_size) {
            (128, 128) => Some(Variant::Simon128_128),
            _ => None,
        }
    }
}

/// Immutable cipher configuration.
///
/// `round_limit` and `z_seq` always come from the variant's published
/// parameters; there is no way to set them independently. It serializes as
/// its variant alone, so a decoded config is always rebuilt from the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Variant", into = "Variant")]
pub struct CipherConfig {
    variant: Variant,
    key_size: u16,
    block_size: u16,
    round_limit: u8,
    z_seq: u8,
}

impl CipherConfig {
    /// Builds the configuration for `variant`.
    pub fn new(variant: Variant) -> Self {
        let FamilyParams {
            block_size,
            key_size,
            rounds,
            z_seq,
        } = variant.params();
        Self {
            variant,
            key_size,
            block_size,
            round_limit: rounds,
            z_seq,
        }
    }

    /// Builds the configuration for block/key sizes given in bits.
    pub fn from_sizes(block_size: u16, key_size: u16) -> Result<Self, ConfigError> {
        if let Some(variant) = Variant::from_sizes(block_size, key_size) {
            return Ok(Self::new(variant));
        }
        if family_params(block_size, key_size).is_some() {
            Err(ConfigError::UnsupportedVariant {
                block_size,
                key_size,
            })
        } else {
            Err(ConfigError::InconsistentSizes {
                block_size,
                key_size,
            })
        }
    }

    /// Selected variant.
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Key size in bits.
    pub fn key_size(&self) -> u16 {
        self.key_size
    }

    /// Block size in bits.
    pub fn block_size(&self) -> u16 {
        self.block_size
    }

    /// Number of rounds.
    pub fn round_limit(&self) -> usize {
        usize::from(self.round_limit)
    }

    /// Index of the z-sequence used by the key schedule.
    pub fn z_seq(&self) -> u8 {
        self.z_seq
    }

    /// Half-block word width in bits.
    pub fn word_bits(&self) -> u32 {
        u32::from(self.block_size) / 2
    }

    /// Number of master key words (`m`).
    pub fn key_words(&self) -> usize {
        usize::from(self.key_size) / (usize::from(self.block_size) / 2)
    }

    /// Key length in bytes.
    pub fn key_bytes(&self) -> usize {
        usize::from(self.key_size) / 8
    }

    /// Block length in bytes.
    pub fn block_bytes(&self) -> usize {
        usize::from(self.block_size) / 8
    }

    /// Word operations for this configuration's half-block width.
    pub fn word_ops(&self) -> WordOps {
        WordOps::new(self.word_bits())
    }
}

impl Default for CipherConfig {
    fn default() -> Self {
        Self::new(Variant::Simon128_128)
    }
}

impl From<Variant> for CipherConfig {
    fn from(variant: Variant) -> Self {
        Self::new(variant)
    }
}

impl From<CipherConfig> for Variant {
    fn from(config: CipherConfig) -> Self {
        config.variant
    }
}
