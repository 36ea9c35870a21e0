//! Conversions between `U256` and 32-bit integer representations
//!
//! This module defines explicit conversions between the fixed-size `U256`
//! type and arrays of 32-bit words, the shape in which the compression
//! function produces its final state.
//!
//! These conversions preserve big-endian semantics and prevent implicit
//! truncation.

use crate::primitives::U256;

/// Converts eight 32-bit words into a `U256`.
///
/// The input array must be ordered from most significant to least
/// significant word.
impl From<[u32; 8]> for U256 {
    fn from(value: [u32; 8]) -> Self {
        let mut out = [0u8; 32];

        for (chunk, v) in out.chunks_exact_mut(4).zip(value.into_iter()) {
            chunk.copy_from_slice(&v.to_be_bytes());
        }

        U256(out)
    }
}

/// Converts a `U256` into eight 32-bit words.
///
/// The resulting array is ordered from most significant to least
/// significant word, using big-endian interpretation.
impl From<U256> for [u32; 8] {
    fn from(value: U256) -> Self {
        let mut out = [0u32; 8];

        for (o, chunk) in out.iter_mut().zip(value.0.chunks_exact(4)) {
            *o = u32::from_be_bytes(chunk.try_into().unwrap());
        }

        out
    }
}
