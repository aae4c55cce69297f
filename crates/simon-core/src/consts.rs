//! Published Simon constants: the z-sequences and the family parameter table.

/// Period of every z-sequence.
pub const Z_PERIOD: usize = 62;

/// Largest round count across the Simon family (128/256).
pub const MAX_ROUNDS: usize = 72;

/// The five z-sequences, bit `i` of entry `j` holding `z_j[i]`.
pub const Z: [u64; 5] = [
    pack(b"11111010001001010110000111001101111101000100101011000011100110"),
    pack(b"10001110111110010011000010110101000111011111001001100001011010"),
    pack(b"10101111011100000011010010011000101000010001111110010110110011"),
    pack(b"11011011101011000110010111100000010010001010011100110100001111"),
    pack(b"11010001111001101011011000100000010111000011001010010011101111"),
];

const fn pack(bits: &[u8; Z_PERIOD]) -> u64 {
    let mut out = 0u64;
    let mut i = 0;
    while i < Z_PERIOD {
        if bits[i] == b'1' {
            out |= 1 << i;
        }
        i += 1;
    }
    out
}

/// Returns bit `index mod 62` of sequence `seq`.
#[inline]
pub const fn z_bit(seq: u8, index: usize) -> u64 {
    (Z[seq as usize] >> (index % Z_PERIOD)) & 1
}

/// One published Simon parameter set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FamilyParams {
    /// Block size in bits.
    pub block_size: u16,
    /// Key size in bits.
    pub key_size: u16,
    /// Number of rounds.
    pub rounds: u8,
    /// Index of the z-sequence consumed by the key schedule.
    pub z_seq: u8,
}

impl FamilyParams {
    /// Half-block word width in bits.
    pub const fn word_bits(&self) -> u32 {
        self.block_size as u32 / 2
    }

    /// Number of master key words (`m`).
    pub const fn key_words(&self) -> usize {
        self.key_size as usize / (self.block_size as usize / 2)
    }
}

const fn params(block_size: u16, key_size: u16, rounds: u8, z_seq: u8) -> FamilyParams {
    FamilyParams {
        block_size,
        key_size,
        rounds,
        z_seq,
    }
}

/// Simon 128/128.
pub const SIMON_128_128: FamilyParams = params(128, 128, 68, 2);

/// Every Simon block/key combination from the design paper.
pub const FAMILY: [FamilyParams; 10] = [
    params(32, 64, 32, 0),
    params(48, 72, 36, 0),
    params(48, 96, 36, 1),
    params(64, 96, 42, 2),
    params(64, 128, 44, 3),
    params(96, 96, 52, 2),
    params(96, 144, 54, 3),
    SIMON_128_128,
    params(128, 192, 69, 3),
    params(128, 256, 72, 4),
];

/// Looks up the parameter set for a block/key size pair in bits.
pub fn family_params(block_size: u16, key_size: u16) -> Option<FamilyParams> {
    FAMILY
        .iter()
        .copied()
        .find(|p| p.block_size == block_size && p.key_size == key_size)
}
