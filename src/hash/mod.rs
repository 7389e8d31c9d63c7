//! Cryptographic hash functions exposed by the crate.
//!
//! Both hashes follow the same three-call lifecycle: `new`, zero or more
//! `update` calls, and a single consuming `finalize`. The underlying
//! compression functions (`sha256::compress`, `sha512::compress`) implement
//! FIPS 180-4 directly; this module only adds the block-buffering and
//! padding bookkeeping needed to expose them as streaming hashers.

pub mod sha256;
pub mod sha512;

pub use sha256::Sha256;
pub use sha512::Sha512;
