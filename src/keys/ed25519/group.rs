//! Edwards25519 group operations.
//!
//! This module implements group arithmetic for the Edwards25519 elliptic
//! curve used by Ed25519 signatures and X25519 key conversion.
//!
//! The curve is defined over the prime field 𝔽ₚ with:
//!
//! ```text
//! p = 2²⁵⁵ − 19
//! ```
//!
//! and uses the twisted Edwards form:
//!
//! ```text
//! −x² + y² = 1 + d·x²·y²
//! ```
//!
//! ## Coordinate systems
//!
//! - **GeP3** — Extended coordinates `(X : Y : Z : T)`, the primary
//!   working representation; supports complete addition formulas without
//!   inversions.
//! - **GeP1** — Extended intermediate coordinates, a transient result
//!   during additions and doublings, never stored long-term.
//! - **GeP2** — Projective coordinates `(X : Y : Z)`, used mainly for
//!   point doubling.
//! - **GeCached** — Cached extended form, storing precomputed
//!   `(Y±X, Z, 2·d·T)`, optimized for repeated additions/subtractions.
//! - **GePrecomp** — Precomputed affine-like form, backed by the static
//!   base-point table, used for fixed-base scalar multiplication.
//!
//! All algorithms closely follow the Ed25519 reference implementations
//! (ref10 / orlp) and preserve identical arithmetic behavior.
//!
//! ## Security properties
//!
//! - Constant-time with respect to secret scalars.
//! - No secret-dependent branches or memory access during scalar
//!   multiplication; table selection uses explicit conditional moves.
//!
//! Point decompression operates only on public data and may use
//! conditional branches safely.

use super::ct::ConstantTimeEq;
use super::field::FieldElement;
use super::scalar::Scalar;
use super::table::{base_table, d, d2, sqrtm1};

/// Group element in extended projective coordinates (P1 representation).
///
/// `(X : Y : Z : T)` with `X = x/z`, `Y = y/z`, `T = (x*y)/z`. Used only
/// as a transient form during addition and doubling.
pub(crate) struct GeP1 {
    pub(crate) x: FieldElement,
    pub(crate) y: FieldElement,
    pub(crate) z: FieldElement,
    pub(crate) t: FieldElement,
}

impl GeP1 {
    /// `a + b`, with `a` in extended coordinates and `b` cached.
    pub(crate) fn from_sum(a: &GeP3, b: &GeCached) -> Self {
        let mut x = a.y + a.x;
        let mut y = a.y - a.x;
        let mut z = x * b.yplusx;
        let mut t = b.t2d * a.t;

        y = y * b.yminusx;
        x = a.z * b.z;

        let sumx = x + x;

        x = z - y;
        y = z + y;
        z = sumx + t;
        t = sumx - t;

        Self { x, y, z, t }
    }

    /// `a + b`, with `a` in extended coordinates and `b` a precomputed
    /// table entry.
    pub(crate) fn from_mixed_sum(a: &GeP3, b: &GePrecomp) -> Self {
        let mut x = a.y + a.x;
        let mut y = a.y - a.x;
        let mut z = x * b.yplusx;
        let mut t = b.xy2d * a.t;
        let sumz = a.z + a.z;

        y = y * b.yminusx;
        x = z - y;
        y = z + y;
        z = sumz + t;
        t = sumz - t;

        Self { x, y, z, t }
    }

    /// `a - b`, with `a` in extended coordinates and `b` cached.
    pub(crate) fn from_difference(a: &GeP3, b: &GeCached) -> Self {
        let mut x = a.y + a.x;
        let mut y = a.y - a.x;
        let mut z = x * b.yminusx;
        let mut t = b.t2d * a.t;

        y = y * b.yplusx;
        x = a.z * b.z;

        let sumx = x + x;

        x = z - y;
        y = z + y;
        z = sumx - t;
        t = sumx + t;

        Self { x, y, z, t }
    }

    /// `a - b`, with `a` in extended coordinates and `b` a precomputed
    /// table entry.
    pub(crate) fn from_mixed_difference(a: &GeP3, b: &GePrecomp) -> Self {
        let mut x = a.y + a.x;
        let mut y = a.y - a.x;
        let mut z = x * b.yminusx;
        let mut t = b.xy2d * a.t;
        let sumz = a.z + a.z;

        y = y * b.yplusx;
        x = z - y;
        y = z + y;
        z = sumz - t;
        t = sumz + t;

        Self { x, y, z, t }
    }
}

/// A point on the Edwards curve in projective coordinates `(X : Y : Z)`,
/// i.e. the affine point `(X/Z, Y/Z)`. Used as an intermediate form during
/// point doubling.
pub(crate) struct GeP2 {
    pub(crate) x: FieldElement,
    pub(crate) y: FieldElement,
    pub(crate) z: FieldElement,
}

impl GeP2 {
    /// The neutral element, `(0, 1)`.
    pub(crate) const ONE: Self = Self {
        x: FieldElement::ZERO,
        y: FieldElement::ONE,
        z: FieldElement::ONE,
    };

    pub(crate) fn from_gep1(g: &GeP1) -> Self {
        let x = g.x * g.t;
        let y = g.y * g.z;
        let z = g.z * g.t;

        GeP2 { x, y, z }
    }

    pub(crate) fn from_gep3(g: &GeP3) -> Self {
        GeP2 {
            x: g.x,
            y: g.y,
            z: g.z,
        }
    }

    /// Doubles the point, returning the result in `GeP1` form.
    pub(crate) fn double(self) -> GeP1 {
        let mut x = self.x.square();
        let mut z = self.y.square();
        let mut t = self.z.square().scale2();
        let mut y = self.x + self.y;
        let ysquare = y.square();

        y = z + x;
        z = z - x;
        x = ysquare - y;
        t = t - z;

        GeP1 { x, y, z, t }
    }

    /// Encodes the point into its 32-byte compressed Edwards form.
    pub(crate) fn to_bytes(&self) -> [u8; 32] {
        let recip = self.z.invert();
        let x = self.x * recip;
        let y = self.y * recip;

        let mut output = y.to_bytes();
        output[31] ^= (x.is_negative() as u8) << 7;

        output
    }
}

/// A point on the Edwards25519 curve in extended coordinates `(X:Y:Z:T)`,
/// the primary working representation for group operations.
pub(crate) struct GeP3 {
    pub(crate) x: FieldElement,
    pub(crate) y: FieldElement,
    pub(crate) z: FieldElement,
    pub(crate) t: FieldElement,
}

impl GeP3 {
    /// The identity element, `(0, 1)`.
    pub(crate) const ONE: Self = Self {
        x: FieldElement::ZERO,
        y: FieldElement::ONE,
        z: FieldElement::ONE,
        t: FieldElement::ZERO,
    };

    /// Doubles this point, returning the result in `GeP1` form.
    #[inline(always)]
    pub(crate) fn double(&self) -> GeP1 {
        GeP2::from_gep3(self).double()
    }

    pub(crate) fn from_gep1(g: &GeP1) -> Self {
        let x = g.x * g.t;
        let y = g.y * g.z;
        let z = g.z * g.t;
        let t = g.x * g.y;

        Self { x, y, z, t }
    }

    /// Encodes the point into its compressed 32-byte representation.
    pub(crate) fn to_bytes(&self) -> [u8; 32] {
        let recip = self.z.invert();
        let x = self.x * recip;
        let y = self.y * recip;

        let mut output = y.to_bytes();
        output[31] ^= (x.is_negative() as u8) << 7;

        output
    }

    /// Decompresses a point from its 32-byte encoding.
    ///
    /// Reconstructs `x` from the curve equation
    /// `x² ≡ (y² − 1) · (d·y² + 1)⁻¹ (mod p)` via exponentiation by
    /// `(p−5)/8`, correcting by `sqrtm1` if the first candidate is wrong,
    /// then enforces the sign bit stored in `s[31]`.
    ///
    /// Returns `(point, status)` where `status == 0` on success and
    /// `status == -1` if `s` does not encode a valid point; the point
    /// value is unspecified on failure.
    pub(crate) fn decompress(s: &[u8; 32]) -> (Self, i32) {
        let mut h = Self {
            x: FieldElement::ZERO,
            y: FieldElement::from_bytes(s),
            z: FieldElement::ONE,
            t: FieldElement::ZERO,
        };

        let mut u = h.y.square();
        let mut v = u * d();
        u = u - h.z;
        v = v + h.z;

        let v3 = v.square() * v;

        h.x = v3.square();
        h.x = h.x * v;
        h.x = h.x * u;
        h.x = h.x.pow22523();
        h.x = h.x * v3;
        h.x = h.x * u;

        let vxx = h.x.square() * v;
        let mut check = vxx - u;

        if check.is_non_zero() == 1 {
            check = vxx + u;

            if check.is_non_zero() == 1 {
                return (h, -1);
            }

            h.x = h.x * sqrtm1();
        }

        let sign = (s[31] >> 7) as i32;
        if h.x.is_negative() != sign {
            h.x = -h.x;
        }

        h.t = h.x * h.y;

        (h, 0)
    }

    /// Computes `a * B`, where `B` is the Ed25519 base point, using the
    /// precomputed fixed-base table and a signed-radix-16 decomposition of
    /// `a`.
    ///
    /// Each byte of `a` yields two digits in `[0, 15]`; a carry pass
    /// normalizes them to `[-8, 7]`. Odd-position digits are accumulated
    /// first, the accumulator is scaled by 16 (four doublings), then
    /// even-position digits are accumulated — matching the order used by
    /// the reference implementations.
    pub(crate) fn from_scalar_mul(a: Scalar) -> Self {
        let bytes = a.to_bytes();
        let mut e = [0i8; 64];
        for (i, &byte) in bytes.iter().enumerate() {
            e[2 * i] = (byte & 0x0f) as i8;
            e[2 * i + 1] = (byte >> 4) as i8;
        }

        let mut carry = 0i8;
        for v in e.iter_mut().take(63) {
            *v += carry;
            carry = (*v + 8) >> 4;
            *v -= carry << 4;
        }

        e[63] += carry;

        let mut h = Self::ONE;
        for i in (1..64).step_by(2) {
            let t = GePrecomp::select(i / 2, e[i]);
            h = GeP3::from_gep1(&GeP1::from_mixed_sum(&h, &t));
        }

        for _ in 0..4 {
            h = GeP3::from_gep1(&GeP2::from_gep3(&h).double());
        }

        for i in (0..64).step_by(2) {
            let t = GePrecomp::select(i / 2, e[i]);
            h = GeP3::from_gep1(&GeP1::from_mixed_sum(&h, &t));
        }

        h
    }

    /// Computes `s * self + k * B`, where `B` is the Ed25519 base point.
    ///
    /// This is the combination Ed25519 verification needs:
    /// `[8][S]B = [8]R + [8][k]A'` is checked by comparing `S*B` against
    /// `R + k*A`. Rather than the reference implementations' sliding-window
    /// approach, the two scalars are recoded jointly via
    /// [`Scalar::jsf`] into digit strings over `{-1, 0, 1}`, walked from the
    /// most significant digit down, doubling the accumulator at each step
    /// and adding one of four precomputed combinations
    /// (`A`, `B`, `A+B`, `A-B`, or their negations) selected by the digit
    /// pair. This is public-input arithmetic (the caller only uses it on
    /// signature verification, never on a secret scalar), so the selection
    /// below branches freely on the digit values.
    pub(crate) fn dual_scale(s: Scalar, k: Scalar, a: &GeP3) -> GeP2 {
        let base = super::table::base_point_extended();

        let a_cached = GeCached::from_p3(a);
        let b_cached = GeCached::from_p3(&base);

        let a_plus_b = GeCached::from_p3(&GeP3::from_gep1(&GeP1::from_sum(a, &b_cached)));
        let a_minus_b = GeCached::from_p3(&GeP3::from_gep1(&GeP1::from_difference(a, &b_cached)));

        let (u0, u1, top) = s.jsf(k);

        let mut r = GeP2::ONE;

        if top < 0 {
            return r;
        }

        for i in (0..=top as usize).rev() {
            let d0 = u0[i];
            let d1 = u1[i];

            let doubled = r.double();
            let mut acc = GeP3::from_gep1(&doubled);

            match (d0, d1) {
                (0, 0) => {}
                (1, 0) => acc = GeP3::from_gep1(&GeP1::from_sum(&acc, &a_cached)),
                (-1, 0) => acc = GeP3::from_gep1(&GeP1::from_difference(&acc, &a_cached)),
                (0, 1) => acc = GeP3::from_gep1(&GeP1::from_sum(&acc, &b_cached)),
                (0, -1) => acc = GeP3::from_gep1(&GeP1::from_difference(&acc, &b_cached)),
                (1, 1) => acc = GeP3::from_gep1(&GeP1::from_sum(&acc, &a_plus_b)),
                (-1, -1) => acc = GeP3::from_gep1(&GeP1::from_difference(&acc, &a_plus_b)),
                (1, -1) => acc = GeP3::from_gep1(&GeP1::from_sum(&acc, &a_minus_b)),
                (-1, 1) => acc = GeP3::from_gep1(&GeP1::from_difference(&acc, &a_minus_b)),
                _ => unreachable!("jsf digits are always in {{-1, 0, 1}}"),
            }

            r = GeP2::from_gep3(&acc);
        }

        r
    }
}

/// Cached representation of an Edwards curve point: `(Y+X, Y-X, Z, 2dT)`.
/// Optimized for repeated mixed additions/subtractions.
pub(crate) struct GeCached {
    pub(crate) yplusx: FieldElement,
    pub(crate) yminusx: FieldElement,
    pub(crate) z: FieldElement,
    pub(crate) t2d: FieldElement,
}

impl GeCached {
    pub(crate) fn from_p3(g: &GeP3) -> GeCached {
        GeCached {
            yplusx: g.y + g.x,
            yminusx: g.y - g.x,
            z: g.z,
            t2d: g.t * d2(),
        }
    }
}

/// Precomputed representation of an Edwards curve point: `(Y+X, Y-X,
/// 2dXY)`. Used for mixed addition against a `GeP3` point, primarily in
/// fixed-base scalar multiplication.
pub(crate) struct GePrecomp {
    pub(crate) yplusx: FieldElement,
    pub(crate) yminusx: FieldElement,
    pub(crate) xy2d: FieldElement,
}

impl GePrecomp {
    pub(crate) const ZERO: Self = Self {
        yplusx: FieldElement::ZERO,
        yminusx: FieldElement::ZERO,
        xy2d: FieldElement::ZERO,
    };

    pub(crate) const ONE: Self = Self {
        yplusx: FieldElement::ONE,
        yminusx: FieldElement::ONE,
        xy2d: FieldElement::ZERO,
    };

    /// Conditionally replaces `self` with `rhs` in constant time.
    pub(crate) fn conditional_move(&mut self, rhs: &Self, b: u8) {
        self.yplusx.conditional_move(&rhs.yplusx, b as u32);
        self.yminusx.conditional_move(&rhs.yminusx, b as u32);
        self.xy2d.conditional_move(&rhs.xy2d, b as u32);
    }

    /// Selects `b * BASE[pos]` from the fixed-base table in constant time,
    /// where `b` is a signed digit in `[-8, 8]`.
    pub(crate) fn select(pos: usize, b: i8) -> Self {
        let mut minust = GePrecomp::ZERO;
        let mut t = GePrecomp::ONE;

        let bnegative = b.ct_neg();
        let babs = (b as i16 - (((-(bnegative as i16)) & (b as i16)) << 1)) as i8;

        for (i, base_elem) in base_table()[pos].iter().enumerate() {
            t.conditional_move(base_elem, babs.ct_eq(&((i + 1) as i8)) as u8);
        }

        minust.yplusx = t.yminusx;
        minust.yminusx = t.yplusx;
        minust.xy2d = -t.xy2d;

        t.conditional_move(&minust, bnegative);

        t
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::ed25519::table::base_point_extended;

    #[test]
    fn base_point_round_trips_through_encoding() {
        let b = base_point_extended();
        let bytes = b.to_bytes();
        let (decoded, status) = GeP3::decompress(&bytes);
        assert_eq!(status, 0);
        assert_eq!(decoded.to_bytes(), bytes);
    }

    #[test]
    fn scalar_mul_by_zero_is_identity() {
        let h = GeP3::from_scalar_mul(Scalar::ZERO);
        assert_eq!(h.to_bytes(), GeP3::ONE.to_bytes());
    }

    #[test]
    fn scalar_mul_by_one_is_base_point() {
        let mut one = [0u8; 32];
        one[0] = 1;
        let h = GeP3::from_scalar_mul(Scalar::from_bytes(&one));
        assert_eq!(h.to_bytes(), base_point_extended().to_bytes());
    }

    #[test]
    fn dual_scale_with_zero_k_matches_scalar_mul() {
        let mut three = [0u8; 32];
        three[0] = 3;
        let s = Scalar::from_bytes(&three);
        let a = base_point_extended();

        let r = GeP3::dual_scale(s, Scalar::ZERO, &a);
        let expect = GeP3::from_scalar_mul(s);

        assert_eq!(r.to_bytes(), expect.to_bytes());
    }

    #[test]
    fn dual_scale_matches_two_separate_scalar_muls() {
        let mut five = [0u8; 32];
        five[0] = 5;
        let mut seven = [0u8; 32];
        seven[0] = 7;

        let s = Scalar::from_bytes(&five);
        let k = Scalar::from_bytes(&seven);
        let a = GeP3::from_scalar_mul(Scalar::from_bytes(&seven));

        let r = GeP3::dual_scale(s, k, &a);

        // s*A + k*B where A = 7*B, so expected = (s*7 + k)*B = (5*7+7)*B = 42*B
        let mut forty_two = [0u8; 32];
        forty_two[0] = 42;
        let expect = GeP3::from_scalar_mul(Scalar::from_bytes(&forty_two));

        assert_eq!(r.to_bytes(), expect.to_bytes());
    }
}
