//! Core Ed25519 key and signature types.
//!
//! This module defines the fundamental public and private key structures,
//! along with the signature container used by the Ed25519 digital signature
//! scheme. The implementation follows the standard Ed25519 construction
//! based on twisted Edwards curves over the finite field F_p.
//!
//! The types exposed here are intentionally minimal and explicit, avoiding
//! implicit conversions or hidden state, in order to favor correctness,
//! auditability, and predictable behavior. Seed material is always supplied
//! by the caller: this module performs no randomness generation of its own.

use super::ct::ConstantTimeEq;
pub use super::scalar::Scalar;
use super::group::GeP3;
use crate::error::DecodeError;
use crate::hash::Sha512;
use crate::keys::x25519;

fn sha512(data: &[u8]) -> [u8; 64] {
    let mut h = Sha512::new();
    h.update(data);
    h.finalize()
}

/// Splits a 64-byte SHA-512 digest of a seed into its clamped secret scalar
/// and nonce prefix, per RFC 8032 §5.1.5.
fn expand_seed(seed: &[u8; 32]) -> (Scalar, [u8; 32]) {
    let digest = sha512(seed);

    let mut a_bytes: [u8; 32] = digest[..32].try_into().unwrap();
    a_bytes[0] &= 248;
    a_bytes[31] &= 63;
    a_bytes[31] |= 64;

    let prefix: [u8; 32] = digest[32..].try_into().unwrap();

    (Scalar::from_bytes(&a_bytes), prefix)
}

/// An Ed25519 public key.
///
/// This type wraps the canonical 32-byte compressed encoding of a curve
/// point on the Ed25519 curve. The encoding corresponds to the affine
/// y-coordinate together with a sign bit for x, as defined in RFC 8032.
///
/// A `PublicKey` is immutable and copyable.
#[derive(Clone, Copy)]
pub struct PublicKey([u8; 32]);

impl PublicKey {
    /// Wraps a raw 32-byte compressed Edwards point as a public key.
    ///
    /// No validation is performed at construction time; a malformed point
    /// is caught the first time it is used, by [`GeP3::decompress`] inside
    /// [`verify`] or [`ed25519_pk_to_x25519`].
    #[inline]
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the canonical byte encoding of this public key.
    ///
    /// The returned value is the compressed Edwards point representation
    /// used directly by the Ed25519 verification algorithm.
    #[inline]
    pub fn to_bytes(&self) -> [u8; 32] {
        self.0
    }
}

/// An Ed25519 private key.
///
/// Internally, the private key is represented in its expanded form:
/// - a scalar modulo the group order (used for signing and key agreement),
/// - a 32-byte prefix derived from hashing the original seed, used to
///   generate deterministic nonces during signing.
///
/// This structure corresponds to the expanded private key described
/// in RFC 8032 rather than the raw 32-byte seed.
#[derive(Clone, Copy)]
pub struct PrivateKey {
    scalar: Scalar,
    prefix: [u8; 32],
}

impl PrivateKey {
    /// Returns the secret scalar component of the private key.
    ///
    /// This value is used internally for scalar multiplication on the curve.
    /// It is not exposed publicly to avoid accidental misuse.
    #[inline]
    pub fn scalar(self) -> Scalar {
        self.scalar
    }

    /// Returns the nonce prefix associated with this private key.
    ///
    /// The prefix is used as part of the deterministic nonce derivation
    /// during Ed25519 signature generation.
    #[inline]
    pub fn prefix(&self) -> [u8; 32] {
        self.prefix
    }

    /// Returns the expanded private key as a 64-byte array.
    ///
    /// The first 32 bytes correspond to the secret scalar encoding,
    /// and the remaining 32 bytes contain the nonce prefix.
    ///
    /// This format is primarily intended for internal use and debugging,
    /// not for key serialization or storage.
    pub fn to_bytes(&self) -> [u8; 64] {
        let mut out = [0u8; 64];

        out[..32].copy_from_slice(&self.scalar().to_bytes());
        out[32..].copy_from_slice(&self.prefix());

        out
    }
}

/// An Ed25519 signature.
///
/// A signature consists of two components:
/// - a compressed Edwards point `R` (32 bytes),
/// - a scalar `S` modulo the group order (32 bytes).
///
/// Together, these form the standard 64-byte Ed25519 signature as defined
/// in RFC 8032.
#[derive(Clone, Copy)]
pub struct Signature([u8; 64]);

impl Signature {
    /// Constructs a signature from its raw 64-byte representation.
    ///
    /// No validation is performed at construction time. Structural and
    /// cryptographic validity is checked during signature verification.
    #[inline]
    pub fn from_bytes(bytes: [u8; 64]) -> Self {
        Self(bytes)
    }

    /// Returns the raw byte encoding of this signature.
    ///
    /// The output is compatible with standard Ed25519 implementations
    /// and can be transmitted or stored directly.
    #[inline]
    pub fn to_bytes(&self) -> [u8; 64] {
        self.0
    }
}

/// Derives an Ed25519 keypair from a 32-byte seed.
///
/// The process is:
/// - Hash the seed with SHA-512
/// - Derive the secret scalar from the first half of the hash,
///   applying Ed25519 clamping rules
/// - Use the second half of the hash as the private nonce prefix
/// - Compute the public key as a scalar multiplication of the
///   curve base point
///
/// The returned keys are:
/// - [`PublicKey`]: the encoded Edwards curve point
/// - [`PrivateKey`]: containing the secret scalar and nonce prefix
///
/// This implementation follows the Ed25519 specification (RFC 8032) and
/// mirrors the structure of the reference C implementations, while
/// remaining explicit and auditable. The caller is responsible for
/// supplying a uniformly random, secret seed.
pub fn generate_keypair(seed: &[u8; 32]) -> (PublicKey, PrivateKey) {
    let (scalar, prefix) = expand_seed(seed);

    let public = PublicKey(GeP3::from_scalar_mul(scalar).to_bytes());
    let private = PrivateKey { scalar, prefix };

    (public, private)
}

/// Computes an Ed25519 signature over a message.
///
/// This function implements the Ed25519 signing algorithm as specified
/// in RFC 8032. It produces a deterministic signature using:
/// - the secret scalar derived from the private key
/// - a per-message nonce derived from the private key prefix and message
///
/// The signature is computed as:
/// - R = r · B
/// - S = (r + H(R || A || M) · a) mod ℓ
///
/// where:
/// - `a` is the private scalar
/// - `A` is the public key
/// - `M` is the message
/// - `B` is the curve base point
/// - `ℓ` is the group order
///
/// The returned signature is encoded as `R || S`.
///
/// This implementation mirrors the structure of the reference
/// Ed25519 implementations and avoids side-channel leakage by
/// relying on constant-time primitives.
pub fn sign(message: &[u8], public: PublicKey, private: PrivateKey) -> Signature {
    let a = private.scalar();

    let mut r_input = Vec::with_capacity(32 + message.len());
    r_input.extend_from_slice(&private.prefix());
    r_input.extend_from_slice(message);

    let r = Scalar::reduce(sha512(&r_input));

    let r_bytes = GeP3::from_scalar_mul(r).to_bytes();

    let mut k_input = Vec::with_capacity(64 + message.len());
    k_input.extend_from_slice(&r_bytes);
    k_input.extend_from_slice(&public.to_bytes());
    k_input.extend_from_slice(message);

    let k = Scalar::reduce(sha512(&k_input));

    let s = k.mul_add(a, r);

    let mut signature = [0u8; 64];
    signature[..32].copy_from_slice(&r_bytes);
    signature[32..].copy_from_slice(&s.to_bytes());

    Signature(signature)
}

/// Verifies an Ed25519 signature.
///
/// This function checks that a signature `(R || S)` is a valid Ed25519
/// signature for a given message and public key.
///
/// Verification proceeds as follows:
///
/// - Ensure the scalar `S` is canonically encoded (`< ℓ`)
/// - Decompress the public key `A`
/// - Compute `h = H(R || A || M) mod ℓ`
/// - Check that:
///
///     S · B == R + h · A
///
/// computed as `S · B + h · (−A)` so that the dual-scalar multiplication
/// below only ever adds.
///
/// The function returns `true` if and only if the signature is valid.
/// Any malformed input or verification failure results in `false`.
///
/// This implementation mirrors the reference Ed25519 verification logic
/// and avoids side-channel leakage on the public values it operates on:
/// neither the message, the key, nor the signature are secret at this
/// point, so the dual-scalar multiplication below may branch freely on
/// their derived digits.
pub fn verify(signature: Signature, message: &[u8], public: PublicKey) -> bool {
    let s = Scalar::from_bytes(&signature.0[32..]);
    if !s.is_canonical() {
        return false;
    }

    let (mut a, status) = GeP3::decompress(&public.to_bytes());
    if status != 0 {
        return false;
    }
    a.x = -a.x;
    a.t = -a.t;

    let mut h_input = Vec::with_capacity(64 + message.len());
    h_input.extend_from_slice(&signature.0[..32]); // R
    h_input.extend_from_slice(&public.to_bytes()); // A
    h_input.extend_from_slice(message);

    let h = Scalar::reduce(sha512(&h_input));

    let r_check = GeP3::dual_scale(h, s, &a).to_bytes();

    r_check.ct_eq((&signature.0[..32]).try_into().unwrap())
}

/// Computes a Diffie–Hellman shared secret using X25519.
///
/// This function is a convenience wrapper around the X25519 key
/// agreement implementation provided by the `x25519` module.
///
/// It derives a shared secret from:
/// - the secret scalar contained in an Ed25519 private key, and
/// - a peer public key represented as a 32-byte Curve25519
///   Montgomery coordinate.
///
/// All algorithmic details and security properties are documented
/// in the `x25519` module.
pub fn exchange(private: &PrivateKey, public: &PublicKey) -> [u8; 32] {
    x25519::exchange(&private.scalar().to_bytes(), &public.to_bytes())
}

/// Converts an Ed25519 public key to its X25519 (Montgomery) form.
///
/// Uses the standard birational map between the twisted Edwards and
/// Montgomery models of the same curve, `u = (1+y) / (1-y)`, applied to
/// the affine y-coordinate recovered from decompressing `ed_pub`.
///
/// Returns [`DecodeError::InvalidPoint`] if `ed_pub` is not a valid
/// compressed Edwards point.
pub fn ed25519_pk_to_x25519(ed_pub: &[u8; 32]) -> Result<[u8; 32], DecodeError> {
    let (p, status) = GeP3::decompress(ed_pub);
    if status != 0 {
        return Err(DecodeError::InvalidPoint);
    }

    let u = (p.z + p.y) * (p.z - p.y).invert();
    Ok(u.to_bytes())
}

/// Converts an Ed25519 private seed to its X25519 secret scalar form.
///
/// The result is `SHA-512(seed)[0..32]`, unclamped: callers that feed this
/// into [`x25519::exchange`] get clamping applied there, matching the
/// convention used by `ed25519_pk_to_x25519`'s public-key counterpart.
pub fn ed25519_sk_to_x25519(ed_seed: &[u8; 32]) -> [u8; 32] {
    let digest = sha512(ed_seed);
    digest[..32].try_into().unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_then_verify_roundtrip() {
        let seed = [7u8; 32];
        let (public, private) = generate_keypair(&seed);
        let message = b"test message for ed25519";

        let signature = sign(message, public, private);
        assert!(verify(signature, message, public));
    }

    #[test]
    fn verify_rejects_flipped_message_bit() {
        let seed = [3u8; 32];
        let (public, private) = generate_keypair(&seed);
        let message = b"original message";
        let mut tampered = *message;
        tampered[0] ^= 1;

        let signature = sign(message, public, private);
        assert!(!verify(signature, &tampered, public));
    }

    #[test]
    fn verify_rejects_non_canonical_s() {
        let seed = [9u8; 32];
        let (public, private) = generate_keypair(&seed);
        let message = b"message";

        let mut signature = sign(message, public, private).to_bytes();
        // ell's byte encoding, which is >= ell and therefore non-canonical.
        signature[32..].copy_from_slice(&[
            0xed, 0xd3, 0xf5, 0x5c, 0x1a, 0x63, 0x12, 0x58, 0xd6, 0x9c, 0xf7, 0xa2, 0xde, 0xf9,
            0xde, 0x14, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x10,
        ]);

        assert!(!verify(Signature::from_bytes(signature), message, public));
    }

    #[test]
    fn rfc8032_test_vector_1() {
        let seed: [u8; 32] = [
            0x9d, 0x61, 0xb1, 0x9d, 0xef, 0xfd, 0x5a, 0x60, 0xba, 0x84, 0x4a, 0xf4, 0x92, 0xec,
            0x2c, 0xc4, 0x44, 0x49, 0xc5, 0x69, 0x7b, 0x32, 0x69, 0x19, 0x70, 0x3b, 0xac, 0x03,
            0x1c, 0xae, 0x7f, 0x60,
        ];
        let expect_pub: [u8; 32] = [
            0xd7, 0x5a, 0x98, 0x01, 0x82, 0xb1, 0x0a, 0xb7, 0xd5, 0x4b, 0xfe, 0xd3, 0xc9, 0x64,
            0x07, 0x3a, 0x0e, 0xe1, 0x72, 0xf3, 0xda, 0xa6, 0x23, 0x25, 0xaf, 0x02, 0x1a, 0x68,
            0xf7, 0x07, 0x51, 0x1a,
        ];
        let expect_sig: [u8; 64] = [
            0xe5, 0x56, 0x43, 0x00, 0xc3, 0x60, 0xac, 0x72, 0x90, 0x86, 0xe2, 0xcc, 0x80, 0x6e,
            0x82, 0x8a, 0x84, 0x87, 0x7f, 0x1e, 0xb8, 0xe5, 0xd9, 0x74, 0xd8, 0x73, 0xe0, 0x65,
            0x22, 0x49, 0x01, 0x55, 0x5f, 0xb8, 0x82, 0x15, 0x90, 0xa3, 0x3b, 0xac, 0xc6, 0x1e,
            0x39, 0x70, 0x1c, 0xf9, 0xb4, 0x6b, 0xd2, 0x5b, 0xf5, 0xf0, 0x59, 0x5b, 0xbe, 0x24,
            0x65, 0x51, 0x41, 0x43, 0x8e, 0x7a, 0x10, 0x0b,
        ];

        let (public, private) = generate_keypair(&seed);
        assert_eq!(public.to_bytes(), expect_pub);

        let signature = sign(b"", public, private);
        assert_eq!(signature.to_bytes(), expect_sig);
        assert!(verify(signature, b"", public));
    }

    #[test]
    fn key_conversion_round_trip_agrees_with_exchange() {
        let seed_a = [11u8; 32];
        let seed_b = [22u8; 32];

        let (pub_a, priv_a) = generate_keypair(&seed_a);
        let (pub_b, priv_b) = generate_keypair(&seed_b);

        let x_sec_a = ed25519_sk_to_x25519(&seed_a);
        let x_pub_b = ed25519_pk_to_x25519(&pub_b.to_bytes()).unwrap();

        let x_sec_b = ed25519_sk_to_x25519(&seed_b);
        let x_pub_a = ed25519_pk_to_x25519(&pub_a.to_bytes()).unwrap();

        let shared_from_x25519 = x25519::exchange(&x_sec_a, &x_pub_b);
        let shared_from_x25519_other = x25519::exchange(&x_sec_b, &x_pub_a);

        assert_eq!(shared_from_x25519, shared_from_x25519_other);
        assert_eq!(
            shared_from_x25519,
            exchange(&priv_a, &PublicKey::from_bytes(x_pub_b))
        );
        let _ = priv_b;
    }

    #[test]
    fn ed25519_pk_to_x25519_rejects_invalid_point() {
        let invalid = [0xffu8; 32];
        assert_eq!(
            ed25519_pk_to_x25519(&invalid),
            Err(DecodeError::InvalidPoint)
        );
    }
}
