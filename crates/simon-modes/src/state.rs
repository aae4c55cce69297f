//! Mode state dispatch and session snapshots.

use serde::{Deserialize, Serialize};
use simon_core::{Block, ConfigError, SimonCipher, BLOCK_BYTES};
use zeroize::Zeroize;

use crate::driver::{Cbc, Cfb, Ctr, Ecb, ModeDriver, Ofb};
use crate::error::LengthError;
use crate::mode::Mode;

/// Mutable per-session state, one variant per mode.
///
/// The variant is fixed when the state is built, so each call dispatches once
/// and the per-block loop runs inside a single driver.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModeState {
    /// Stateless codebook.
    Ecb(Ecb),
    /// Counter and buffered keystream.
    Ctr(Ctr),
    /// Chaining block.
    Cbc(Cbc),
    /// Ciphertext feedback register.
    Cfb(Cfb),
    /// Output feedback register.
    Ofb(Ofb),
}

impl ModeState {
    /// Builds the initial state for `mode`.
    ///
    /// ECB ignores `iv_or_counter`; every other mode requires exactly one block.
    pub fn new(mode: Mode, iv_or_counter: &[u8]) -> Result<Self, ConfigError> {
        let iv = || -> Result<Block, ConfigError> {
            iv_or_counter
                .try_into()
                .map_err(|_| ConfigError::IvLength {
                    mode: mode.name(),
                    expected: BLOCK_BYTES,
                    actual: iv_or_counter.len(),
                })
        };
        Ok(match mode {
            Mode::Ecb => ModeState::Ecb(Ecb),
            Mode::Ctr => ModeState::Ctr(Ctr::new(iv()?)),
            Mode::Cbc => ModeState::Cbc(Cbc::new(iv()?)),
            Mode::Cfb => ModeState::Cfb(Cfb::new(iv()?)),
            Mode::Ofb => ModeState::Ofb(Ofb::new(iv()?)),
        })
    }

    /// Mode this state drives.
    pub fn mode(&self) -> Mode {
        match self {
            ModeState::Ecb(_) => Ecb::MODE,
            ModeState::Ctr(_) => Ctr::MODE,
            ModeState::Cbc(_) => Cbc::MODE,
            ModeState::Cfb(_) => Cfb::MODE,
            ModeState::Ofb(_) => Ofb::MODE,
        }
    }

    /// Encrypts `buf` in place with `cipher`, advancing the state.
    pub fn encrypt(&mut self, cipher: &SimonCipher, buf: &mut [u8]) -> Result<(), LengthError> {
        match self {
            ModeState::Ecb(d) => d.encrypt(cipher, buf),
            ModeState::Ctr(d) => d.encrypt(cipher, buf),
            ModeState::Cbc(d) => d.encrypt(cipher, buf),
            ModeState::Cfb(d) => d.encrypt(cipher, buf),
            ModeState::Ofb(d) => d.encrypt(cipher, buf),
        }
    }

    /// Decrypts `buf` in place with `cipher`, advancing the state.
    pub fn decrypt(&mut self, cipher: &SimonCipher, buf: &mut [u8]) -> Result<(), LengthError> {
        match self {
            ModeState::Ecb(d) => d.decrypt(cipher, buf),
            ModeState::Ctr(d) => d.decrypt(cipher, buf),
            ModeState::Cbc(d) => d.decrypt(cipher, buf),
            ModeState::Cfb(d) => d.decrypt(cipher, buf),
            ModeState::Ofb(d) => d.decrypt(cipher, buf),
        }
    }

    /// Serializes the state with `bincode`. Key material is never included.
    pub fn to_bytes(&self) -> Result<Vec<u8>, bincode::Error> {
        bincode::serialize(self)
    }

    /// Deserializes a state with `bincode`. Offsets outside a block are
    /// rejected by the drivers themselves.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, bincode::Error> {
        bincode::deserialize(bytes)
    }
}

/// Clears the register but keeps the mode; a wiped state is only fit to drop.
impl Zeroize for ModeState {
    fn zeroize(&mut self) {
        match self {
            ModeState::Ecb(_) => {}
            ModeState::Ctr(d) => d.zeroize(),
            ModeState::Cbc(d) => d.zeroize(),
            ModeState::Cfb(d) => d.zeroize(),
            ModeState::Ofb(d) => d.zeroize(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::testutil::{block, cipher, IV_HEX};

    #[test]
    fn new_checks_iv_length() {
        assert_eq!(ModeState::new(Mode::Ecb, &[]), Ok(ModeState::Ecb(Ecb)));
        assert_eq!(
            ModeState::new(Mode::Ofb, &[0u8; 8]),
            Err(ConfigError::IvLength {
                mode: "OFB",
                expected: 16,
                actual: 8
            })
        );
        for mode in Mode::ALL {
            let state = ModeState::new(mode, &[0u8; 16]).unwrap();
            assert_eq!(state.mode(), mode);
        }
    }

    #[test]
    fn snapshot_resumes_mid_block() {
        let cipher = cipher();
        let mut whole = vec![0x42u8; 37];
        ModeState::new(Mode::Cfb, &block(IV_HEX))
            .unwrap()
            .encrypt(&cipher, &mut whole)
            .unwrap();

        let mut state = ModeState::new(Mode::Cfb, &block(IV_HEX)).unwrap();
        let mut buf = vec![0x42u8; 37];
        state.encrypt(&cipher, &mut buf[..21]).unwrap();
        let bytes = state.to_bytes().expect("serialize");
        let mut resumed = ModeState::from_bytes(&bytes).expect("deserialize");
        assert_eq!(resumed, state);
        resumed.encrypt(&cipher, &mut buf[21..]).unwrap();
        assert_eq!(buf, whole);
    }

    #[test]
    fn decoding_rejects_bad_offset() {
        #[derive(Serialize)]
        enum Forged {
            #[allow(dead_code)]
            Ecb,
            Ctr([u8; 16], [u8; 16], usize),
            #[allow(dead_code)]
            Cbc([u8; 16]),
            Cfb([u8; 16], usize),
            Ofb([u8; 16], usize),
        }
        let bad = [
            Forged::Ctr([0; 16], [0; 16], 16),
            Forged::Cfb([0; 16], 16),
            Forged::Ofb([0; 16], 1 << 40),
        ];
        for forged in &bad {
            let bytes = bincode::serialize(forged).unwrap();
            assert!(bincode::deserialize::<ModeState>(&bytes).is_err());
            assert!(ModeState::from_bytes(&bytes).is_err());
        }

        // A forged state with an in-range offset must still be usable.
        let bytes = bincode::serialize(&Forged::Ctr([0; 16], [0; 16], 15)).unwrap();
        let mut state: ModeState = bincode::deserialize(&bytes).unwrap();
        assert_eq!(state.mode(), Mode::Ctr);
        let mut buf = [0u8; 2];
        state.encrypt(&cipher(), &mut buf).unwrap();
        let mut keystream = [0u8; 16];
        cipher().encrypt_block(&mut keystream);
        assert_eq!(buf, [0, keystream[0]]);
    }

    #[test]
    fn zeroize_clears_every_register() {
        let cipher = cipher();
        for mode in Mode::ALL {
            let mut state = ModeState::new(mode, &block(IV_HEX)).unwrap();
            state.encrypt(&cipher, &mut [0u8; 16]).unwrap();
            state.zeroize();
            assert_eq!(state, ModeState::new(mode, &[0u8; 16]).unwrap(), "{mode}");
        }
    }
}
