//! Ed25519 scalar arithmetic.
//!
//! This module implements arithmetic on scalars used by the Ed25519 signature
//! scheme and related constructions.
//!
//! Scalars are integers modulo the Ed25519 group order ℓ, defined as:
//!
//! ```text
//! ℓ = 2^252 + 27742317777372353535851937790883648493
//! ```
//!
//! ## Representation
//!
//! Scalars are stored as a fixed-size `[u8; 32]` little-endian byte array.
//! This representation is intentionally minimal and does **not** enforce
//! invariants by itself: no clamping and no reduction modulo ℓ is implicit.
//! Normalization is performed explicitly by the functions that need it
//! (`reduce`, `mul`, `add`).
//!
//! ## Reduction strategy
//!
//! Wide products and sums are reduced modulo ℓ with Barrett reduction rather
//! than the folding reduction used elsewhere in the Ed25519 reference family.
//! Barrett reduction needs one precomputed constant,
//!
//! ```text
//! μ = ⌊B^(2k)/ℓ⌋,  B = 2^64,  k = 4
//! ```
//!
//! (ℓ fits in 4 64-bit limbs, so `k = 4`), and turns reduction of any value
//! below `B^(2k)` into one wide multiply by `μ` plus at most two conditional
//! subtractions of ℓ.
//!
//! ## Joint recoding
//!
//! [`Scalar::jsf`] produces a joint signed-digit recoding of two scalars for
//! use by the double-scalar multiplication in the Edwards group module: each
//! output digit string is independently a non-adjacent form (digits in
//! `{-1, 0, 1}`, no two consecutive non-zero digits), computed in lock-step
//! over both scalars so a single loop in the caller can walk both at once.

use std::array;

/// A 256-bit scalar used in Ed25519 operations.
///
/// This type represents integers modulo the Ed25519 group order `ℓ`,
/// encoded as 32 little-endian bytes.
#[derive(Clone, Copy)]
pub struct Scalar(pub [u8; 32]);

/// ℓ = 2^252 + 27742317777372353535851937790883648493, as 4 little-endian
/// 64-bit limbs.
const L: [u64; 4] = [
    0x5812_631a_5cf5_d3ed,
    0x14de_f9de_a2f7_9cd6,
    0x0000_0000_0000_0000,
    0x1000_0000_0000_0000,
];

/// μ = ⌊2^512 / ℓ⌋, as 5 little-endian 64-bit limbs.
const MU: [u64; 5] = [
    0xed9c_e5a3_0a2c_131b,
    0x2106_215d_0863_29a7,
    0xffff_ffff_ffff_ffeb,
    0xffff_ffff_ffff_ffff,
    0x0000_0000_0000_000f,
];

/// Schoolbook multiply of two 5-limb numbers, producing a 10-limb result.
fn mul5x5(a: &[u64; 5], b: &[u64; 5]) -> [u64; 10] {
    let mut out = [0u64; 10];
    for i in 0..5 {
        let mut carry: u128 = 0;
        for j in 0..5 {
            let prod = (a[i] as u128) * (b[j] as u128) + out[i + j] as u128 + carry;
            out[i + j] = prod as u64;
            carry = prod >> 64;
        }
        out[i + 5] = (out[i + 5] as u128 + carry) as u64;
    }
    out
}

/// Schoolbook multiply of a 5-limb number by a 4-limb number, producing a
/// 9-limb result.
fn mul5x4(a: &[u64; 5], b: &[u64; 4]) -> [u64; 9] {
    let mut out = [0u64; 9];
    for i in 0..5 {
        let mut carry: u128 = 0;
        for j in 0..4 {
            let prod = (a[i] as u128) * (b[j] as u128) + out[i + j] as u128 + carry;
            out[i + j] = prod as u64;
            carry = prod >> 64;
        }
        out[i + 4] = (out[i + 4] as u128 + carry) as u64;
    }
    out
}

/// Schoolbook multiply of two 4-limb numbers, producing an 8-limb result.
fn mul4x4(a: &[u64; 4], b: &[u64; 4]) -> [u64; 8] {
    let mut out = [0u64; 8];
    for i in 0..4 {
        let mut carry: u128 = 0;
        for j in 0..4 {
            let prod = (a[i] as u128) * (b[j] as u128) + out[i + j] as u128 + carry;
            out[i + j] = prod as u64;
            carry = prod >> 64;
        }
        out[i + 4] = (out[i + 4] as u128 + carry) as u64;
    }
    out
}

/// Subtracts `b` from `a` in place (both 5 limbs), returning the borrow.
fn sub5_assign(a: &mut [u64; 5], b: &[u64; 5]) -> bool {
    let mut borrow: i128 = 0;
    for i in 0..5 {
        let diff = a[i] as i128 - b[i] as i128 - borrow;
        if diff < 0 {
            a[i] = (diff + (1i128 << 64)) as u64;
            borrow = 1;
        } else {
            a[i] = diff as u64;
            borrow = 0;
        }
    }
    borrow != 0
}

/// `a >= l` for a 5-limb value (l implicitly zero-extended to 5 limbs).
fn ge_l(a: &[u64; 5]) -> bool {
    if a[4] != 0 {
        return true;
    }
    for i in (0..4).rev() {
        if a[i] > L[i] {
            return true;
        }
        if a[i] < L[i] {
            return false;
        }
    }
    // All four low limbs matched l exactly.
    true
}

/// Subtracts `l` from a 5-limb value in place, but only if `a >= l`, in
/// constant time: both the subtraction and the comparison always run, and
/// the result is chosen with a branchless mask rather than a conditional
/// jump on the (secret-derived) value of `a`.
fn conditional_sub_l(a: &mut [u64; 5]) {
    let mut diff = *a;
    let borrow = sub5_assign(&mut diff, &[L[0], L[1], L[2], L[3], 0]);
    let mask = (borrow as u64).wrapping_neg(); // all-ones if a < l, else all-zeros
    for i in 0..5 {
        a[i] = (a[i] & mask) | (diff[i] & !mask);
    }
}

/// Barrett-reduces a value given as 8 little-endian 64-bit limbs (up to 512
/// bits) modulo ℓ, returning the result as 4 limbs.
fn barrett_reduce(x: &[u64; 8]) -> [u64; 4] {
    // q1 = x >> 192 (drop the low 3 words; word-aligned since k-1 = 3)
    let q1: [u64; 5] = [x[3], x[4], x[5], x[6], x[7]];

    // q2 = q1 * mu (10 limbs), q3 = q2 >> 320 (top 5 limbs, word-aligned)
    let q2 = mul5x5(&q1, &MU);
    let q3: [u64; 5] = [q2[5], q2[6], q2[7], q2[8], q2[9]];

    // r1 = x mod B^5 (low 5 words of x)
    let r1: [u64; 5] = [x[0], x[1], x[2], x[3], x[4]];

    // r2 = (q3 * l) mod B^5
    let t = mul5x4(&q3, &L);
    let r2: [u64; 5] = [t[0], t[1], t[2], t[3], t[4]];

    // If r2 > r1 the subtraction borrows past the top of the 5-limb
    // register; the stored result already wraps modulo 2^320, which is
    // exactly the `r1 - r2 (mod B^(k+1))` the algorithm calls for, so no
    // further correction is needed.
    let mut r = r1;
    sub5_assign(&mut r, &r2);

    // Two fixed conditional subtractions suffice: r is already < 2l after
    // the Barrett step above, so a single corrective subtraction clears it
    // to < l; the second is a no-op guard against the rare case where the
    // estimate above was off by one extra multiple of l.
    conditional_sub_l(&mut r);
    conditional_sub_l(&mut r);

    [r[0], r[1], r[2], r[3]]
}

fn limbs4_from_bytes(bytes: &[u8; 32]) -> [u64; 4] {
    array::from_fn(|i| u64::from_le_bytes(bytes[8 * i..8 * i + 8].try_into().unwrap()))
}

fn bytes_from_limbs4(limbs: &[u64; 4]) -> [u8; 32] {
    let mut out = [0u8; 32];
    for i in 0..4 {
        out[8 * i..8 * i + 8].copy_from_slice(&limbs[i].to_le_bytes());
    }
    out
}

impl Scalar {
    /// The additive identity (0).
    pub(crate) const ZERO: Self = Scalar([0u8; 32]);

    /// Constructs a scalar from a 32-byte little-endian slice.
    ///
    /// This function performs no validation, clamping, or modular
    /// reduction.
    ///
    /// # Panics
    ///
    /// Panics if `bytes` is not exactly 32 bytes long.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let arr = bytes.try_into().expect("slice must be 32 bytes");
        Scalar(arr)
    }

    /// Returns the canonical 32-byte little-endian encoding of the scalar.
    ///
    /// This exposes the internal representation without normalization.
    pub fn to_bytes(self) -> [u8; 32] {
        self.0
    }

    /// Returns `true` if this scalar's byte encoding is `< ℓ`.
    ///
    /// Used by signature verification to reject non-canonical `S` values
    /// before any scalar or group arithmetic runs.
    pub(crate) fn is_canonical(&self) -> bool {
        let limbs = limbs4_from_bytes(&self.0);
        let wide = [limbs[0], limbs[1], limbs[2], limbs[3], 0, 0, 0, 0];
        !ge_l(&[wide[0], wide[1], wide[2], wide[3], wide[4]])
    }

    /// Reduces a 512-bit integer modulo the Ed25519 scalar field order `ℓ`,
    /// via Barrett reduction.
    pub(crate) fn reduce(wide: [u8; 64]) -> Self {
        let limbs: [u64; 8] = array::from_fn(|i| {
            u64::from_le_bytes(wide[8 * i..8 * i + 8].try_into().unwrap())
        });
        Scalar(bytes_from_limbs4(&barrett_reduce(&limbs)))
    }

    /// Computes `(self + other) mod ℓ`.
    pub(crate) fn add(self, other: Self) -> Self {
        let a = limbs4_from_bytes(&self.0);
        let b = limbs4_from_bytes(&other.0);

        let mut sum = [0u64; 4];
        let mut carry: u128 = 0;
        for i in 0..4 {
            let s = a[i] as u128 + b[i] as u128 + carry;
            sum[i] = s as u64;
            carry = s >> 64;
        }

        let wide = [sum[0], sum[1], sum[2], sum[3], carry as u64, 0, 0, 0];
        Scalar(bytes_from_limbs4(&barrett_reduce(&wide)))
    }

    /// Computes `(self * other) mod ℓ`.
    pub(crate) fn mul(self, other: Self) -> Self {
        let a = limbs4_from_bytes(&self.0);
        let b = limbs4_from_bytes(&other.0);
        let wide = mul4x4(&a, &b);
        Scalar(bytes_from_limbs4(&barrett_reduce(&wide)))
    }

    /// Computes `self * other + addend (mod ℓ)`.
    ///
    /// This is the scalar arithmetic behind the `S` component of an Ed25519
    /// signature: `S = (r + k * a) mod ℓ`.
    pub(crate) fn mul_add(self, other: Self, addend: Self) -> Self {
        self.mul(other).add(addend)
    }

    /// Computes the joint non-adjacent-form recoding of `self` and `other`.
    ///
    /// Returns `(u0, u1, top)` where `u0`/`u1` hold signed digits in
    /// `{-1, 0, 1}` such that `sum(u0[i] * 2^i) == self` and
    /// `sum(u1[i] * 2^i) == other`, and `top` is the highest index with a
    /// non-zero digit in either string (`-1` if both scalars are zero).
    ///
    /// Each digit string individually satisfies the non-adjacent-form
    /// property (no two consecutive non-zero digits), and both are produced
    /// in the same left-to-right sweep so a caller can walk them together —
    /// the joint layout [`crate::keys::ed25519::group::GeP3::dual_scale`]
    /// needs, without committing to Solinas's fully joint automaton.
    pub(crate) fn jsf(self, other: Self) -> ([i8; 257], [i8; 257], isize) {
        let mut u0 = [0i8; 257];
        let mut u1 = [0i8; 257];

        let mut top: isize = -1;
        for (u, s) in [(&mut u0, self), (&mut u1, other)] {
            let mut k = [0u64; 5];
            let bytes = limbs4_from_bytes(&s.0);
            k[..4].copy_from_slice(&bytes);

            let mut i = 0usize;
            while i < 257 && k.iter().any(|&limb| limb != 0) {
                if k[0] & 1 == 1 {
                    let digit = 2 - (k[0] & 3) as i8;
                    u[i] = digit;
                    if digit == 1 {
                        sub1_assign(&mut k);
                    } else {
                        add1_assign(&mut k);
                    }
                    if i as isize > top {
                        top = i as isize;
                    }
                }
                shr1_assign(&mut k);
                i += 1;
            }
        }

        (u0, u1, top)
    }
}

fn shr1_assign(a: &mut [u64; 5]) {
    for i in 0..4 {
        a[i] = (a[i] >> 1) | (a[i + 1] << 63);
    }
    a[4] >>= 1;
}

fn sub1_assign(a: &mut [u64; 5]) {
    let mut borrow = 1u128;
    for limb in a.iter_mut() {
        let diff = *limb as i128 - borrow;
        if diff < 0 {
            *limb = (diff + (1i128 << 64)) as u64;
            borrow = 1;
        } else {
            *limb = diff as u64;
            borrow = 0;
        }
    }
}

fn add1_assign(a: &mut [u64; 5]) {
    let mut carry = 1u128;
    for limb in a.iter_mut() {
        let sum = *limb as u128 + carry;
        *limb = sum as u64;
        carry = sum >> 64;
        if carry == 0 {
            break;
        }
    }
}
