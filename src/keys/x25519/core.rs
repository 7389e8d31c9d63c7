//! X25519 key exchange (RFC 7748).
//!
//! Computes Diffie-Hellman shared secrets over Curve25519's Montgomery
//! form, plus a fixed-base variant that reuses the Edwards25519
//! precomputed table instead of running the ladder against the known
//! base point.

use crate::keys::ed25519::field::FieldElement;
use crate::keys::ed25519::group::GeP3;
use crate::keys::ed25519::scalar::Scalar;

/// Clamps a 32-byte scalar per RFC 7748 §5.
#[inline]
fn clamp(scalar: &[u8; 32]) -> [u8; 32] {
    let mut e = *scalar;
    e[0] &= 248;
    e[31] &= 127;
    e[31] |= 64;
    e
}

/// Computes the Diffie-Hellman shared secret between a private scalar and
/// a peer public u-coordinate.
///
/// ## Algorithm
///
/// 1. Clamp the 32-byte scalar (`k`) into the RFC 7748 form.
/// 2. Decode the peer public key as a field element `u` (the high bit of
///    byte 31 is masked during decoding, per RFC 7748).
/// 3. Run the Montgomery ladder for 255 bits using constant-time swaps.
/// 4. Convert back to affine form with one inversion and return the result.
///
/// The ladder maintains two points `(x2:z2)` and `(x3:z3)` and updates
/// them at each bit position without leaking scalar bits through branches
/// or memory access patterns.
///
/// Per RFC 7748, the output may be all zeros for certain peer public keys
/// (e.g. low-order points); this function returns that value as-is.
pub fn exchange(private: &[u8; 32], public: &[u8; 32]) -> [u8; 32] {
    let e = clamp(private);
    let x1 = FieldElement::from_bytes(public);

    let mut x2 = FieldElement::ONE;
    let mut z2 = FieldElement::ZERO;
    let mut x3 = x1;
    let mut z3 = FieldElement::ONE;
    let mut tmp0;
    let mut tmp1;

    let mut swap = 0u32;

    for pos in (0..=254).rev() {
        let b = ((e[pos >> 3] >> (pos & 7)) & 1) as u32;
        swap ^= b;

        x2.swap(&mut x3, swap);
        z2.swap(&mut z3, swap);
        swap = b;

        tmp0 = x3 - z3;
        tmp1 = x2 - z2;
        x2 = x2 + z2;
        z2 = x3 + z3;
        z3 = tmp0 * x2;
        z2 = z2 * tmp1;
        tmp0 = tmp1.square();
        tmp1 = x2.square();
        x3 = z3 + z2;
        z2 = z3 - z2;
        x2 = tmp1 * tmp0;
        tmp1 = tmp1 - tmp0;
        z2 = z2.square();
        z3 = tmp1.mul121666();
        x3 = x3.square();
        tmp0 = tmp0 + z3;
        z3 = x1 * z2;
        z2 = tmp1 * tmp0;
    }

    x2.swap(&mut x3, swap);
    z2.swap(&mut z3, swap);

    (x2 * z2.invert()).to_bytes()
}

/// Computes `scalar * B`, where `B` is the Curve25519 base point `u = 9`.
///
/// Equivalent to `exchange(scalar, 9‖0…0)`, but faster: the scalar is
/// multiplied against the Edwards25519 base point using the precomputed
/// fixed-base table, and the resulting point is converted to its
/// Montgomery u-coordinate via `u = (Z+Y) / (Z-Y)`.
pub fn base(scalar: &[u8; 32]) -> [u8; 32] {
    let e = clamp(scalar);
    let p = GeP3::from_scalar_mul(Scalar::from_bytes(&e));

    let u = (p.z + p.y) * (p.z - p.y).invert();
    u.to_bytes()
}
