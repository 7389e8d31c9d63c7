//! The crate's seven-function external interface.
//!
//! These are thin wrappers around the [`keys::ed25519`] and
//! [`keys::x25519`] APIs, built as free functions matching the literal
//! signatures protocol implementors expect from an Ed25519/X25519
//! primitives library (mirroring the shape of C libraries such as
//! libeddsa). The [`PublicKey`]/[`PrivateKey`]/[`Signature`] newtypes
//! remain available for callers who prefer the more structured, ergonomic
//! API.

use crate::error::DecodeError;
use crate::keys::ed25519::{self, PublicKey, Signature};
use crate::keys::x25519;

/// Derives an Ed25519 public key from a 32-byte seed.
///
/// Equivalent to generating a full keypair and keeping only the public
/// half; re-derive the private half from the same seed when signing.
pub fn ed25519_keygen(seed: &[u8; 32]) -> [u8; 32] {
    ed25519::generate_keypair(seed).0.to_bytes()
}

/// Signs `message` deterministically under the keypair derived from
/// `seed`.
///
/// `public` must be the public key produced by `ed25519_keygen(seed)`;
/// it is taken as a parameter (rather than re-derived) so the caller
/// controls how many times the relatively expensive base-point
/// multiplication runs.
pub fn ed25519_sign(seed: &[u8; 32], public: &[u8; 32], message: &[u8]) -> [u8; 64] {
    let (_, private) = ed25519::generate_keypair(seed);
    ed25519::sign(message, PublicKey::from_bytes(*public), private).to_bytes()
}

/// Verifies an Ed25519 signature over `message` under `public`.
///
/// Returns `false` for any malformed input, non-canonical signature
/// component, or invalid public key, per spec's "verify never panics"
/// contract.
pub fn ed25519_verify(signature: &[u8; 64], public: &[u8; 32], message: &[u8]) -> bool {
    ed25519::verify(
        Signature::from_bytes(*signature),
        message,
        PublicKey::from_bytes(*public),
    )
}

/// Computes the X25519 Diffie-Hellman shared secret `scalar * u`.
pub fn x25519(scalar: &[u8; 32], u: &[u8; 32]) -> [u8; 32] {
    x25519::exchange(scalar, u)
}

/// Computes `scalar * B`, equivalent to `x25519(scalar, 9‖0…0)` but
/// faster.
pub fn x25519_base(scalar: &[u8; 32]) -> [u8; 32] {
    x25519::base(scalar)
}

/// Converts an Ed25519 public key to its X25519 (Montgomery) form.
pub fn ed25519_pk_to_x25519(ed_pub: &[u8; 32]) -> Result<[u8; 32], DecodeError> {
    ed25519::ed25519_pk_to_x25519(ed_pub)
}

/// Converts an Ed25519 private seed to its X25519 secret scalar form.
pub fn ed25519_sk_to_x25519(ed_seed: &[u8; 32]) -> [u8; 32] {
    ed25519::ed25519_sk_to_x25519(ed_seed)
}
