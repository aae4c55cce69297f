//! Simon round transformations.

use crate::word::WordOps;

/// One forward round: `(x, y) -> (y ^ f(x) ^ k, x)`.
#[inline]
pub fn round(ops: &WordOps, x: u64, y: u64, k: u64) -> (u64, u64) {
    (y ^ ops.f(x) ^ k, x)
}

/// Exact inverse of [`round`]: `(x, y) -> (y, x ^ f(y) ^ k)`.
#[inline]
pub fn inv_round(ops: &WordOps, x: u64, y: u64, k: u64) -> (u64, u64) {
    (y, x ^ ops.f(y) ^ k)
}
