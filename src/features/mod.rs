//! Hashing support.
//!
//! Kept apart from the encoders: hashes are one-way and produce raw digests
//! that the hash transforms render as hex.

pub mod hashing;

pub use hashing::{HashAlgorithm, hash, hash_with_seed};
