//! Encryption sessions.

use log::{debug, trace, warn};
use simon_core::{CipherConfig, ConfigError, SimonCipher};

use crate::error::LengthError;
use crate::mode::Mode;
use crate::state::ModeState;

/// One encryption or decryption session: an expanded key plus its mode state.
///
/// The mode state advances with every call and is never reset implicitly.
/// A context is not synchronised; sessions that share a key should share a
/// [`SimonCipher`] and keep their own [`ModeState`] instead.
#[derive(Clone, Debug)]
pub struct CipherContext {
    cipher: SimonCipher,
    state: ModeState,
}

impl CipherContext {
    /// Expands `key` and prepares `mode` from `iv_or_counter`.
    ///
    /// ECB ignores `iv_or_counter`. The caller must never reuse an IV or
    /// counter range under the same key.
    pub fn initialize(
        config: CipherConfig,
        key: &[u8],
        iv_or_counter: &[u8],
        mode: Mode,
    ) -> Result<Self, ConfigError> {
        let cipher = SimonCipher::new(config, key)?;
        let state = ModeState::new(mode, iv_or_counter)?;
        debug!("initialized {:?} context in {} mode", config.variant(), mode);
        if mode == Mode::Ecb {
            warn!("ECB mode leaks equality of plaintext blocks");
        }
        Ok(Self { cipher, state })
    }

    /// Composes a context from an existing cipher and mode state.
    pub fn from_parts(cipher: SimonCipher, state: ModeState) -> Self {
        debug!(
            "resumed {:?} context in {} mode",
            cipher.config().variant(),
            state.mode()
        );
        Self { cipher, state }
    }

    /// Splits the context back into its cipher and mode state.
    pub fn into_parts(self) -> (SimonCipher, ModeState) {
        (self.cipher, self.state)
    }

    /// Active mode.
    pub fn mode(&self) -> Mode {
        self.state.mode()
    }

    /// Cipher configuration.
    pub fn config(&self) -> &CipherConfig {
        self.cipher.config()
    }

    /// The expanded cipher.
    pub fn cipher(&self) -> &SimonCipher {
        &self.cipher
    }

    /// Current mode state.
    pub fn state(&self) -> &ModeState {
        &self.state
    }

    /// Encrypts `buf` in place.
    pub fn encrypt_in_place(&mut self, buf: &mut [u8]) -> Result<(), LengthError> {
        trace!("{} encrypt {} bytes", self.mode(), buf.len());
        self.state.encrypt(&self.cipher, buf)
    }

    /// Decrypts `buf` in place.
    pub fn decrypt_in_place(&mut self, buf: &mut [u8]) -> Result<(), LengthError> {
        trace!("{} decrypt {} bytes", self.mode(), buf.len());
        self.state.decrypt(&self.cipher, buf)
    }

    /// Encrypts `plaintext` into a new buffer.
    pub fn encrypt(&mut self, plaintext: &[u8]) -> Result<Vec<u8>, LengthError> {
        let mut out = plaintext.to_vec();
        self.encrypt_in_place(&mut out)?;
        Ok(out)
    }

    /// Decrypts `ciphertext` into a new buffer.
    pub fn decrypt(&mut self, ciphertext: &[u8]) -> Result<Vec<u8>, LengthError> {
        let mut out = ciphertext.to_vec();
        self.decrypt_in_place(&mut out)?;
        Ok(out)
    }
}
