//! Modes of operation over the Simon 128/128 block cipher.
//!
//! Provides ECB, CBC, CTR, CFB and OFB on top of [`simon_core`]. Key
//! material lives in an immutable [`SimonCipher`]; the running IV, counter or
//! feedback register lives in a [`ModeState`]. [`CipherContext`] pairs the two
//! for the common single-session case.
//!
//! ECB and CBC only accept whole blocks and report anything else as a
//! [`LengthError`]. CTR, CFB and OFB accept any length: a trailing partial
//! block uses a prefix of its keystream and the remainder is consumed by the
//! next call, so chunked and one-shot processing agree byte for byte.
//!
//! These are confidentiality modes only. Nothing here authenticates
//! ciphertext, and IV or counter reuse under one key is not detected.
//!
//! # Examples
//!
//! ```
//! use simon_core::CipherConfig;
//! use simon_modes::{CipherContext, Mode};
//!
//! let key = [0x11u8; 16];
//! let counter = [0u8; 16];
//!
//! let mut enc = CipherContext::initialize(CipherConfig::default(), &key, &counter, Mode::Ctr)?;
//! let ct = enc.encrypt(b"attack at dawn")?;
//!
//! let mut dec = CipherContext::initialize(CipherConfig::default(), &key, &counter, Mode::Ctr)?;
//! assert_eq!(dec.decrypt(&ct)?, b"attack at dawn");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod context;
pub mod driver;
mod error;
mod mode;
mod state;

pub use simon_core::{CipherConfig, ConfigError, SimonCipher, Variant};

pub use crate::context::CipherContext;
pub use crate::driver::ModeDriver;
pub use crate::error::{LengthError, OffsetError, ParseModeError};
pub use crate::mode::Mode;
pub use crate::state::ModeState;
