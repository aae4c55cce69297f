//! Mode selector.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseModeError;

/// Confidentiality modes of operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    /// Electronic codebook: every block transformed independently.
    Ecb,
    /// Counter mode: keystream from an incrementing big-endian counter.
    Ctr,
    /// Cipher block chaining.
    Cbc,
    /// Full-block cipher feedback.
    Cfb,
    /// Output feedback.
    Ofb,
}

impl Mode {
    /// All modes, in declaration order.
    pub const ALL: [Mode; 5] = [Mode::Ecb, Mode::Ctr, Mode::Cbc, Mode::Cfb, Mode::Ofb];

    /// Short upper-case name.
    pub const fn name(self) -> &'static str {
        match self {
            Mode::Ecb => "ECB",
            Mode::Ctr => "CTR",
            Mode::Cbc => "CBC",
            Mode::Cfb => "CFB",
            Mode::Ofb => "OFB",
        }
    }

    /// Whether the mode takes an IV or counter seed.
    pub const fn uses_iv(self) -> bool {
        !matches!(self, Mode::Ecb)
    }

    /// Whether input must be a whole number of blocks.
    pub const fn requires_alignment(self) -> bool {
        matches!(self, Mode::Ecb | Mode::Cbc)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mode::ALL
            .into_iter()
            .find(|mode| mode.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseModeError(s.to_string()))
    }
}
