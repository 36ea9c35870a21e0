//! Primitive types
//!
//! This module defines the low-level primitive types used by the hashing
//! core.
//!
//! Primitives are simple, fixed-size, dependency-free building blocks that
//! provide well-defined semantics and predictable behavior. They are
//! intentionally minimal and do not attempt to replicate full standard
//! library abstractions or big-integer libraries.
//!
//! Current primitives include:
//! - `U256`: a fixed-size 256-bit unsigned integer carrying a SHA-256
//!   digest

mod u256;

/// Fixed-size unsigned integer primitive.
///
/// Re-exported as the primary digest value type of the crate.
pub use u256::U256;
