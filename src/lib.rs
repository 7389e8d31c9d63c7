//! Ed25519 signatures, X25519 key exchange, and SHA-256/SHA-512 hashing
//! over Curve25519.
//!
//! The focus is on **clarity, predictability, and auditability**, rather
//! than on providing a large or high-level cryptographic API. All
//! components are dependency-free, explicit in their semantics, and
//! suitable for security-critical code. Randomness is always supplied by
//! the caller: nothing in this crate generates its own seed material.
//!
//! # Module overview
//!
//! - `hash`
//!   Streaming SHA-256 and SHA-512 hashers (`new`/`update`/`finalize`),
//!   implementing FIPS 180-4 directly.
//!
//! - `keys`
//!   Ed25519 signatures and X25519 Diffie-Hellman key exchange, including
//!   conversion between the two key forms via the standard birational map
//!   between the twisted Edwards and Montgomery models of Curve25519.
//!
//! - `protocols`
//!   The seven-function external interface (`ed25519_keygen`,
//!   `ed25519_sign`, `ed25519_verify`, `x25519`, `x25519_base`,
//!   `ed25519_pk_to_x25519`, `ed25519_sk_to_x25519`), re-exported at the
//!   crate root as thin wrappers around `keys`.
//!
//! - `error`
//!   The `DecodeError` type returned by the fallible conversion and
//!   decoding routines.
//!
//! # Design goals
//!
//! - No heap allocations beyond the scratch buffers used to concatenate
//!   hash inputs during signing and verification
//! - Minimal and explicit APIs
//! - Constant-time arithmetic on secret scalars and points
//! - Stable, well-defined semantics
//!
//! This crate is not intended to replace full-featured, externally audited
//! cryptographic libraries, but to serve as a small, controlled foundation
//! for applications that need exactly these four primitives.

pub mod error;
pub mod hash;
pub mod keys;
mod protocols;

pub use error::DecodeError;
pub use hash::{Sha256, Sha512};
pub use keys::ed25519::{PrivateKey, PublicKey, Signature};
pub use protocols::{
    ed25519_keygen, ed25519_pk_to_x25519, ed25519_sign, ed25519_sk_to_x25519, ed25519_verify,
    x25519, x25519_base,
};
