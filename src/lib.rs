//! SHA-256 file digest library
//!
//! This crate provides a small, self-contained SHA-256 implementation and
//! the fixed-size integer primitive used to represent its output. It backs
//! the `filehash` command-line tool, which hashes the contents of a file
//! and prints the digest as hexadecimal text.
//!
//! The focus is on **clarity, predictability, and auditability**, rather
//! than on providing a large or high-level cryptographic API. The hashing
//! core is dependency-free, explicit in its semantics, and total: every
//! byte sequence (including the empty one) maps to exactly one digest,
//! with no failure mode. All I/O concerns live in the binary, never here.
//!
//! # Module overview
//!
//! - `hash`
//!   The SHA-256 algorithm itself: message padding and block parsing, the
//!   64-round compression function, and the driver that folds an input of
//!   any length into a 256-bit digest.
//!
//! - `primitives`
//!   Fixed-size, low-level value types. Currently `U256`, the 256-bit
//!   big-endian integer that carries a finished digest and renders it as
//!   64 lowercase hexadecimal characters.
//!
//! # Design goals
//!
//! - No heap allocations in the per-block state (schedule and registers
//!   are stack arrays)
//! - Minimal and explicit APIs
//! - Stable, well-defined semantics
//! - Clear separation between the pure hashing core and the I/O shell
//!
//! This crate is not intended to replace full-featured, externally audited
//! cryptographic libraries; it exists to make one digest computation easy
//! to read from top to bottom.

pub mod hash;
pub mod primitives;
