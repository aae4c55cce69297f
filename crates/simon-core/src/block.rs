//! Block representation helpers.

/// Simon 128 block of 16 bytes.
pub type Block = [u8; BLOCK_BYTES];

/// Size of a [`Block`] in bytes.
pub const BLOCK_BYTES: usize = 16;

/// XORs two blocks, writing the result into `dst`.
#[inline]
pub fn xor_in_place(dst: &mut Block, rhs: &Block) {
    for (d, r) in dst.iter_mut().zip(rhs.iter()) {
        *d ^= *r;
    }
}

/// Splits a block into its `(x, y)` half-block words.
///
/// `y` occupies bytes `0..8` and `x` bytes `8..16`, both little-endian.
#[inline]
pub fn load_words(block: &Block) -> (u64, u64) {
    let mut lo = [0u8; 8];
    let mut hi = [0u8; 8];
    lo.copy_from_slice(&block[..8]);
    hi.copy_from_slice(&block[8..]);
    (u64::from_le_bytes(hi), u64::from_le_bytes(lo))
}

/// Inverse of [`load_words`].
#[inline]
pub fn store_words(x: u64, y: u64) -> Block {
    let mut block = [0u8; BLOCK_BYTES];
    block[..8].copy_from_slice(&y.to_le_bytes());
    block[8..].copy_from_slice(&x.to_le_bytes());
    block
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_follow_little_endian_halves() {
        let block: Block = hex::decode("2074726176656c6c6572732064657363")
            .unwrap()
            .try_into()
            .unwrap();
        let (x, y) = load_words(&block);
        assert_eq!(x, 0x6373_6564_2073_7265);
        assert_eq!(y, 0x6c6c_6576_6172_7420);
        assert_eq!(store_words(x, y), block);
    }

    #[test]
    fn xor_in_place_is_bytewise() {
        let mut a = [0xf0u8; 16];
        let b = [0x0fu8; 16];
        xor_in_place(&mut a, &b);
        assert_eq!(a, [0xffu8; 16]);
        let copy = a;
        xor_in_place(&mut a, &copy);
        assert_eq!(a, [0u8; 16]);
    }
}
