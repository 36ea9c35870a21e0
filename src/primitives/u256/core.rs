//! Core definition of the `U256` type.

use std::fmt::{Display, Formatter, LowerHex, Result};

/// Fixed-size 256-bit unsigned integer.
///
/// The value is stored as 32 bytes in **big-endian** order.
///
/// This type intentionally exposes only minimal functionality required
/// by the digest pipeline, favoring clarity and correctness over
/// completeness.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct U256(pub(crate) [u8; 32]);

impl LowerHex for U256 {
    /// Formats the value as 64 contiguous lowercase hexadecimal
    /// characters, most significant byte first.
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        for byte in self.0.iter() {
            write!(f, "{:02x}", byte)?;
        }

        Ok(())
    }
}

impl Display for U256 {
    /// Formats the value exactly like [`LowerHex`]: 64 lowercase hex
    /// characters with no separators or prefix.
    ///
    /// This is the conventional rendering of a SHA-256 digest.
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        LowerHex::fmt(self, f)
    }
}
