//! Fixed-width word primitives.
//!
//! Words are carried in a `u64` and masked to the configured width after
//! every rotation, so the same code serves 24-, 48- and 64-bit halves.

/// Rotation and mixing operations over words of a fixed bit width.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WordOps {
    bits: u32,
    mask: u64,
}

impl WordOps {
    /// Creates the operations for `bits`-wide words (`1..=64`).
    pub const fn new(bits: u32) -> Self {
        let mask = if bits >= 64 {
            u64::MAX
        } else {
            (1u64 << bits) - 1
        };
        Self { bits, mask }
    }

    /// Word width in bits.
    #[inline]
    pub const fn bits(&self) -> u32 {
        self.bits
    }

    /// All-ones mask for the word width.
    #[inline]
    pub const fn mask(&self) -> u64 {
        self.mask
    }

    /// Circular left rotation by `n` (`0 < n < bits`).
    #[inline]
    pub const fn rotl(&self, x: u64, n: u32) -> u64 {
        ((x << n) | (x >> (self.bits - n))) & self.mask
    }

    /// Circular right rotation by `n` (`0 < n < bits`).
    #[inline]
    pub const fn rotr(&self, x: u64, n: u32) -> u64 {
        ((x >> n) | (x << (self.bits - n))) & self.mask
    }

    /// The Simon mixing function `(S¹x & S⁸x) ^ S²x`.
    #[inline]
    pub const fn f(&self, x: u64) -> u64 {
        (self.rotl(x, 1) & self.rotl(x, 8)) ^ self.rotl(x, 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_width_matches_native_rotation() {
        let ops = WordOps::new(64);
        let x = 0x0123_4567_89ab_cdef;
        for n in 1..64 {
            assert_eq!(ops.rotl(x, n), x.rotate_left(n));
            assert_eq!(ops.rotr(x, n), x.rotate_right(n));
        }
    }

    #[test]
    fn narrow_words_stay_masked() {
        let ops = WordOps::new(24);
        assert_eq!(ops.mask(), 0x00ff_ffff);
        assert_eq!(ops.rotl(0x80_0000, 1), 0x00_0001);
        assert_eq!(ops.rotr(0x00_0001, 1), 0x80_0000);
        assert_eq!(ops.rotl(0xff_ffff, 8), 0xff_ffff);

        let ops = WordOps::new(48);
        let x = 0x8000_0000_0001;
        assert_eq!(ops.rotl(x, 1), 0x0000_0000_0003);
        assert_eq!(ops.rotr(ops.rotl(x, 5), 5), x);
    }

    #[test]
    fn mixing_function_on_single_bit() {
        let ops = WordOps::new(64);
        // A single set bit never survives the AND term.
        assert_eq!(ops.f(1), 4);
        assert_eq!(ops.f(0), 0);
        assert_eq!(ops.f(u64::MAX), 0);
    }
}
