//! 256-bit unsigned integer primitive
//!
//! This module defines a fixed-size 256-bit unsigned integer type (`U256`)
//! used to carry a finished SHA-256 digest.
//!
//! It is designed as a **simple, explicit value type**, not as a full
//! big-integer arithmetic library. Its primary use cases include:
//! - cryptographic hash outputs
//! - hexadecimal rendering for display and comparison
//!
//! The internal representation is big-endian, which aligns naturally with
//! cryptographic conventions and human-readable hexadecimal formatting.

mod conv;
mod core;

/// Fixed-size 256-bit unsigned integer.
///
/// This type is re-exported as the primary 256-bit integer primitive.
pub use self::core::U256;
