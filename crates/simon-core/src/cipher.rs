//! Simon key schedule and block encryption/decryption.

use crate::block::{load_words, store_words, Block};
use crate::consts::{z_bit, FamilyParams};
use crate::error::ConfigError;
use crate::key::{RoundKeys, SimonKey};
use crate::round::{inv_round, round};
use crate::variant::{CipherConfig, Variant};
use crate::word::WordOps;

use zeroize::Zeroize;

const OPS_64: WordOps = WordOps::new(64);

/// Expands master key words into the round-key schedule for `config`.
///
/// `master` holds `m` words, `k[0]` first. Words wider than the
/// configuration's word size are rejected as a key length mismatch.
pub fn expand_words(config: &CipherConfig, master: &[u64]) -> Result<RoundKeys, ConfigError> {
    let m = config.key_words();
    let ops = config.word_ops();
    let word_bytes = config.word_bits() as usize / 8;
    if master.len() != m || master.iter().any(|w| w & !ops.mask() != 0) {
        return Err(ConfigError::KeyLength {
            expected: config.key_bytes(),
            actual: master.len() * word_bytes,
        });
    }

    Ok(schedule(&config.variant().params(), master))
}

/// Runs the Simon recurrence for any family member, writing straight into
/// the returned schedule. `master` must hold `params.key_words()` masked words.
fn schedule(params: &FamilyParams, master: &[u64]) -> RoundKeys {
    let m = params.key_words();
    let ops = WordOps::new(params.word_bits());
    let c = ops.mask() & !3;
    let mut round_keys = RoundKeys::zeroed(params.rounds as usize);
    let k = round_keys.words_mut();
    k[..m].copy_from_slice(master);

    for i in m..k.len() {
        let mut tmp = ops.rotr(k[i - 1], 3);
        if m == 4 {
            tmp ^= k[i - 3];
        }
        tmp ^= ops.rotr(tmp, 1);
        k[i] = k[i - m] ^ tmp ^ z_bit(params.z_seq, i - m) ^ c;
    }

    round_keys
}

/// Expands a Simon 128/128 key into its 68 round keys.
pub fn expand_key(key: &SimonKey) -> RoundKeys {
    let mut words = key.words();
    let round_keys = schedule(&Variant::Simon128_128.params(), &words);
    words.zeroize();
    round_keys
}

/// Runs the forward rounds over a word pair.
#[inline]
pub fn encrypt_words(ops: &WordOps, mut x: u64, mut y: u64, round_keys: &RoundKeys) -> (u64, u64) {
    for &k in round_keys.as_slice() {
        (x, y) = round(ops, x, y, k);
    }
    (x, y)
}

/// Runs the inverse rounds over a word pair, last round key first.
#[inline]
pub fn decrypt_words(ops: &WordOps, mut x: u64, mut y: u64, round_keys: &RoundKeys) -> (u64, u64) {
    for &k in round_keys.as_slice().iter().rev() {
        (x, y) = inv_round(ops, x, y, k);
    }
    (x, y)
}

/// Encrypts a single 16-byte block with pre-expanded round keys.
pub fn encrypt_block(block: &Block, round_keys: &RoundKeys) -> Block {
    let (x, y) = load_words(block);
    let (x, y) = encrypt_words(&OPS_64, x, y, round_keys);
    store_words(x, y)
}

/// Decrypts a single 16-byte block with pre-expanded round keys.
pub fn decrypt_block(block: &Block, round_keys: &RoundKeys) -> Block {
    let (x, y) = load_words(block);
    let (x, y) = decrypt_words(&OPS_64, x, y, round_keys);
    store_words(x, y)
}

/// Configuration plus expanded schedule for one master key.
///
/// Immutable once built, so a single instance can back any number of
/// independent mode sessions, including across threads.
#[derive(Clone, Debug)]
pub struct SimonCipher {
    config: CipherConfig,
    round_keys: RoundKeys,
}

impl SimonCipher {
    /// Validates `key` against `config` and expands it.
    pub fn new(config: CipherConfig, key: &[u8]) -> Result<Self, ConfigError> {
        let key = match config.variant() {
            Variant::Simon128_128 => SimonKey::from_slice(key)?,
        };
        Ok(Self {
            config,
            round_keys: expand_key(&key),
        })
    }

    /// The cipher configuration.
    pub fn config(&self) -> &CipherConfig {
        &self.config
    }

    /// The expanded schedule.
    pub fn round_keys(&self) -> &RoundKeys {
        &self.round_keys
    }

    /// Encrypts `block` in place.
    #[inline]
    pub fn encrypt_block(&self, block: &mut Block) {
        *block = encrypt_block(block, &self.round_keys);
    }

    /// Decrypts `block` in place.
    #[inline]
    pub fn decrypt_block(&self, block: &mut Block) {
        *block = decrypt_block(block, &self.round_keys);
    }
}
