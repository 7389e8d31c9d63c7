//! Finite field arithmetic for Ed25519 / Curve25519.
//!
//! This module implements arithmetic in the prime field
//!
//! ```text
//! 𝔽ₚ where p = 2²⁵⁵ − 19
//! ```
//!
//! used by the Ed25519 and Curve25519 elliptic curves.
//!
//! ## Representation
//!
//! Field elements are represented using a 10-limb signed integer format,
//! with alternating limb sizes:
//!
//! ```text
//! [26, 25, 26, 25, 26, 25, 26, 25, 26, 25] bits
//! ```
//!
//! This radix-(2²⁵·⁵) representation matches the original Ed25519 reference
//! implementation and allows efficient carry propagation and reduction.
//!
//! ## Design goals
//!
//! - **Constant-time execution**: no secret-dependent branches or memory access.
//! - **Overflow safety**: all intermediate arithmetic is promoted to `i64`.
//! - **Auditability**: code structure closely follows the Ed25519 reference.
//! - **Deferred reduction**: additions and subtractions may return partially
//!   reduced values, normalized later when required.
//!
//! ## Notes
//!
//! This module is intentionally low-level and explicit.
//! It does not attempt to hide arithmetic details behind abstractions,
//! prioritizing correctness, predictability, and side-channel resistance.

use std::array;
use std::ops::{Add, Mul, Neg, Sub};

use super::ct::ConstantTimeEq;

/// Multiplies two field limbs with explicit promotion to `i64`.
macro_rules! mul {
    ($a:expr, $b:expr) => {
        ($a as i64) * ($b as i64)
    };
}

/// Adds two field limbs with explicit promotion to `i64`.
macro_rules! add {
    ($a:expr, $b:expr) => {
        ($a as i64) + ($b as i64)
    };
}

/// Subtracts two field limbs with explicit promotion to `i64`.
macro_rules! sub {
    ($a:expr, $b:expr) => {
        ($a as i64) - ($b as i64)
    };
}

/// Load 3 bytes from a little-endian byte slice into a `u64`.
#[inline(always)]
pub(crate) fn load_3(input: &[u8]) -> u64 {
    (input[0] as u64) | ((input[1] as u64) << 8) | ((input[2] as u64) << 16)
}

/// Load 4 bytes from a little-endian byte slice into a `u64`.
#[inline(always)]
pub(crate) fn load_4(input: &[u8]) -> u64 {
    (input[0] as u64)
        | ((input[1] as u64) << 8)
        | ((input[2] as u64) << 16)
        | ((input[3] as u64) << 24)
}

/// Field element modulo `2^255 - 19`, represented in radix `(2^25.5)`.
///
/// Internally stored as 10 signed 32-bit limbs:
///
/// ```text
/// [26, 25, 26, 25, 26, 25, 26, 25, 26, 25] bits
/// ```
#[derive(Clone, Copy)]
pub(crate) struct FieldElement(pub(crate) [i32; 10]);

impl FieldElement {
    /// The additive identity (0).
    pub(crate) const ZERO: Self = FieldElement([0i32; 10]);

    /// The multiplicative identity (1).
    pub(crate) const ONE: Self = FieldElement([1, 0, 0, 0, 0, 0, 0, 0, 0, 0]);

    /// Builds a field element from a small non-negative integer.
    pub(crate) fn set_small(value: u32) -> Self {
        let mut limbs = [0i32; 10];
        limbs[0] = value as i32;
        FieldElement(limbs)
    }

    /// Doubles this field element (`2 * self`), without reducing.
    pub(crate) fn scale2(self) -> Self {
        self + self
    }

    /// Scales this field element by a small signed constant, without reducing.
    ///
    /// Used for the curve-specific constant `121666` in the Montgomery ladder
    /// (`(486662 - 2) / 4`), via [`FieldElement::mul121666`], and is kept
    /// general so other small-constant scalings reuse the same carry chain.
    pub(crate) fn scale(self, constant: i32) -> Self {
        let input = self.0.map(|x| x as i64);
        let mut output = input.map(|x| x * constant as i64);

        for index in (1..10).step_by(2) {
            let carry = (output[index] + (1i64 << 24)) >> 25;
            output[index] -= carry << 25;

            if index == 9 {
                output[0] += carry * 19;
            } else {
                output[index + 1] += carry;
            }
        }

        for index in (0..9).step_by(2) {
            let carry = (output[index] + (1i64 << 25)) >> 26;
            output[index] -= carry << 26;
            output[index + 1] += carry;
        }

        FieldElement(output.map(|x| x as i32))
    }

    /// Fully normalizes this element's limbs by round-tripping through its
    /// canonical byte encoding.
    pub(crate) fn reduce(self) -> Self {
        FieldElement::from_bytes(&self.to_bytes())
    }

    /// Constant-time equality test.
    ///
    /// Compares canonical encodings, so elements differing only by an
    /// unreduced limb representation still compare equal.
    pub(crate) fn eq_ct(&self, other: &Self) -> bool {
        self.to_bytes().ct_eq(&other.to_bytes())
    }

    /// Constant-time conditional swap of two field elements.
    pub(crate) fn swap(&mut self, rhs: &mut Self, condition: u32) {
        let mask = -(condition as i32);

        for (s, r) in self.0.iter_mut().zip(rhs.0.iter_mut()) {
            let tmp = (*s ^ *r) & mask;
            *s ^= tmp;
            *r ^= tmp;
        }
    }

    /// Constant-time conditional move.
    pub(crate) fn conditional_move(&mut self, rhs: &Self, condition: u32) {
        let mask = -(condition as i32);

        for (s, r) in self.0.iter_mut().zip(rhs.0.iter()) {
            let tmp = (*s ^ r) & mask;
            *s ^= tmp;
        }
    }

    /// Decode a field element from a 32-byte little-endian encoding.
    pub(crate) fn from_bytes(input: &[u8; 32]) -> FieldElement {
        let load_configs = [
            (0, 4, 0, false),
            (4, 3, 6, false),
            (7, 3, 5, false),
            (10, 3, 3, false),
            (13, 3, 2, false),
            (16, 4, 0, false),
            (20, 3, 7, false),
            (23, 3, 5, false),
            (26, 3, 4, false),
            (29, 3, 2, true),
        ];

        let mut output = [0i64; 10];

        for (index, &(offset, size, shift, mask)) in load_configs.iter().enumerate() {
            let value = if size == 4 {
                load_4(&input[offset..])
            } else {
                load_3(&input[offset..])
            };

            let value = if mask {
                (value & 8_388_607) << shift
            } else {
                value << shift
            };

            output[index] = value as i64;
        }

        for index in (1..10).step_by(2) {
            let carry = (output[index] + (1i64 << 24)) >> 25;
            output[index] -= carry << 25;

            if index == 9 {
                output[0] += carry * 19;
            } else {
                output[index + 1] += carry;
            }
        }

        for index in (0..9).step_by(2) {
            let carry = (output[index] + (1i64 << 25)) >> 26;
            output[index] -= carry << 26;
            output[index + 1] += carry;
        }

        FieldElement(output.map(|x| x as i32))
    }

    /// Encode this field element into its canonical 32-byte little-endian form.
    pub(crate) fn to_bytes(self) -> [u8; 32] {
        let mut input = self.0.map(|x| x as i64);

        let mut carry = (19 * input[9] + (1i64 << 24)) >> 25;

        for (index, ip) in input.iter().take(10).enumerate() {
            let shift = if index % 2 == 0 { 26 } else { 25 };
            carry = (ip + carry) >> shift;
        }

        input[0] += 19 * carry;

        for index in (0..9).step_by(2) {
            carry = input[index] >> 26;
            input[index] -= carry << 26;
            input[index + 1] += carry;
        }

        for index in (1..10).step_by(2) {
            carry = input[index] >> 25;
            input[index] -= carry << 25;

            if index < 9 {
                input[index + 1] += carry;
            }
        }

        let encode_configs = [
            (0, 0, 0, None),
            (1, 0, 8, None),
            (2, 0, 16, None),
            (3, 0, 24, Some((1, 2))),
            (4, 1, 6, None),
            (5, 1, 14, None),
            (6, 1, 22, Some((2, 3))),
            (7, 2, 5, None),
            (8, 2, 13, None),
            (9, 2, 21, Some((3, 5))),
            (10, 3, 3, None),
            (11, 3, 11, None),
            (12, 3, 19, Some((4, 6))),
            (13, 4, 2, None),
            (14, 4, 10, None),
            (15, 4, 18, None),
            (16, 5, 0, None),
            (17, 5, 8, None),
            (18, 5, 16, None),
            (19, 5, 24, Some((6, 1))),
            (20, 6, 7, None),
            (21, 6, 15, None),
            (22, 6, 23, Some((7, 3))),
            (23, 7, 5, None),
            (24, 7, 13, None),
            (25, 7, 21, Some((8, 4))),
            (26, 8, 4, None),
            (27, 8, 12, None),
            (28, 8, 20, Some((9, 6))),
            (29, 9, 2, None),
            (30, 9, 10, None),
            (31, 9, 18, None),
        ];

        let mut output = [0u8; 32];
        for &(index, limb, shift, next) in &encode_configs {
            let value = if let Some((next_limb, next_shift)) = next {
                ((input[limb] >> shift) | (input[next_limb] << next_shift)) as u8
            } else {
                (input[limb] >> shift) as u8
            };

            output[index] = value;
        }

        output
    }

    /// Returns `1` if this field element is non-zero, `0` otherwise.
    #[inline(always)]
    pub(crate) fn is_non_zero(&self) -> i32 {
        (self.to_bytes().iter().fold(0u8, |acc, &b| acc | b) != 0) as i32
    }

    /// Returns `1` if this field element is negative, `0` otherwise.
    ///
    /// The sign of a field element is defined as the least significant bit
    /// of its canonical byte encoding.
    #[inline(always)]
    pub(crate) fn is_negative(&self) -> i32 {
        (self.to_bytes()[0] & 1) as i32
    }

    /// Multiplies this field element by the constant `121666`.
    ///
    /// `121666 = (486662 - 2) / 4`, the Montgomery-ladder constant for
    /// Curve25519's `y^2 = x^3 + 486662x^2 + x`.
    #[inline(always)]
    pub(crate) fn mul121666(&self) -> Self {
        self.scale(121_666)
    }

    /// Computes the square of this field element.
    pub(crate) fn square(self) -> FieldElement {
        let f = self.0;

        let (f_2, f_mult): ([i32; 10], [i32; 10]) = {
            let mut doubles = [0i32; 10];
            let mut mults = [0i32; 10];

            for index in 0..10 {
                doubles[index] = 2 * f[index];
            }

            mults[5] = 38 * f[5];
            mults[6] = 19 * f[6];
            mults[7] = 38 * f[7];
            mults[8] = 19 * f[8];
            mults[9] = 38 * f[9];

            (doubles, mults)
        };

        let (f0f0, f0f1_2, f0f2_2, f0f3_2, f0f4_2, f0f5_2, f0f6_2, f0f7_2, f0f8_2, f0f9_2) = (
            mul!(f[0], f[0]),
            mul!(f_2[0], f[1]),
            mul!(f_2[0], f[2]),
            mul!(f_2[0], f[3]),
            mul!(f_2[0], f[4]),
            mul!(f_2[0], f[5]),
            mul!(f_2[0], f[6]),
            mul!(f_2[0], f[7]),
            mul!(f_2[0], f[8]),
            mul!(f_2[0], f[9]),
        );

        let (f1f1_2, f1f2_2, f1f3_4, f1f4_2, f1f5_4, f1f6_2, f1f7_4, f1f8_2, f1f9_76) = (
            mul!(f_2[1], f[1]),
            mul!(f_2[1], f[2]),
            mul!(f_2[1], f_2[3]),
            mul!(f_2[1], f[4]),
            mul!(f_2[1], f_2[5]),
            mul!(f_2[1], f[6]),
            mul!(f_2[1], f_2[7]),
            mul!(f_2[1], f[8]),
            mul!(f_2[1], f_mult[9]),
        );

        let (f2f2, f2f3_2, f2f4_2, f2f5_2, f2f6_2, f2f7_2, f2f8_38, f2f9_38) = (
            mul!(f[2], f[2]),
            mul!(f_2[2], f[3]),
            mul!(f_2[2], f[4]),
            mul!(f_2[2], f[5]),
            mul!(f_2[2], f[6]),
            mul!(f_2[2], f[7]),
            mul!(f_2[2], f_mult[8]),
            mul!(f[2], f_mult[9]),
        );

        let (f3f3_2, f3f4_2, f3f5_4, f3f6_2, f3f7_76, f3f8_38, f3f9_76) = (
            mul!(f_2[3], f[3]),
            mul!(f_2[3], f[4]),
            mul!(f_2[3], f_2[5]),
            mul!(f_2[3], f[6]),
            mul!(f_2[3], f_mult[7]),
            mul!(f_2[3], f_mult[8]),
            mul!(f_2[3], f_mult[9]),
        );

        let (f4f4, f4f5_2, f4f6_38, f4f7_38, f4f8_38, f4f9_38) = (
            mul!(f[4], f[4]),
            mul!(f_2[4], f[5]),
            mul!(f_2[4], f_mult[6]),
            mul!(f[4], f_mult[7]),
            mul!(f_2[4], f_mult[8]),
            mul!(f[4], f_mult[9]),
        );

        let (f5f5_38, f5f6_38, f5f7_76, f5f8_38, f5f9_76) = (
            mul!(f[5], f_mult[5]),
            mul!(f_2[5], f_mult[6]),
            mul!(f_2[5], f_mult[7]),
            mul!(f_2[5], f_mult[8]),
            mul!(f_2[5], f_mult[9]),
        );

        let (f6f6_19, f6f7_38, f6f8_38, f6f9_38) = (
            mul!(f[6], f_mult[6]),
            mul!(f[6], f_mult[7]),
            mul!(f_2[6], f_mult[8]),
            mul!(f[6], f_mult[9]),
        );

        let (f7f7_38, f7f8_38, f7f9_76) = (
            mul!(f[7], f_mult[7]),
            mul!(f_2[7], f_mult[8]),
            mul!(f_2[7], f_mult[9]),
        );

        let (f8f8_19, f8f9_38, f9f9_38) = (
            mul!(f[8], f_mult[8]),
            mul!(f[8], f_mult[9]),
            mul!(f[9], f_mult[9]),
        );

        let mut h = [
            f0f0 + f1f9_76 + f2f8_38 + f3f7_76 + f4f6_38 + f5f5_38,
            f0f1_2 + f2f9_38 + f3f8_38 + f4f7_38 + f5f6_38,
            f0f2_2 + f1f1_2 + f3f9_76 + f4f8_38 + f5f7_76 + f6f6_19,
            f0f3_2 + f1f2_2 + f4f9_38 + f5f8_38 + f6f7_38,
            f0f4_2 + f1f3_4 + f2f2 + f5f9_76 + f6f8_38 + f7f7_38,
            f0f5_2 + f1f4_2 + f2f3_2 + f6f9_38 + f7f8_38,
            f0f6_2 + f1f5_4 + f2f4_2 + f3f3_2 + f7f9_76 + f8f8_19,
            f0f7_2 + f1f6_2 + f2f5_2 + f3f4_2 + f8f9_38,
            f0f8_2 + f1f7_4 + f2f6_2 + f3f5_4 + f4f4 + f9f9_38,
            f0f9_2 + f1f8_2 + f2f7_2 + f3f6_2 + f4f5_2,
        ];

        for index in [0, 4] {
            let carry = (h[index] + (1i64 << 25)) >> 26;
            h[index + 1] += carry;
            h[index] -= carry << 26;
        }

        for index in [1, 5] {
            let carry = (h[index] + (1i64 << 24)) >> 25;
            h[index + 1] += carry;
            h[index] -= carry << 25;
        }

        for index in [2, 6] {
            let carry = (h[index] + (1i64 << 25)) >> 26;
            h[index + 1] += carry;
            h[index] -= carry << 26;
        }

        for index in [3, 7] {
            let carry = (h[index] + (1i64 << 24)) >> 25;
            h[index + 1] += carry;
            h[index] -= carry << 25;
        }

        let carry4 = (h[4] + (1i64 << 25)) >> 26;
        h[5] += carry4;
        h[4] -= carry4 << 26;

        let carry8 = (h[8] + (1i64 << 25)) >> 26;
        h[9] += carry8;
        h[8] -= carry8 << 26;

        let carry9 = (h[9] + (1i64 << 24)) >> 25;
        h[0] += carry9 * 19;
        h[9] -= carry9 << 25;

        let carry0 = (h[0] + (1i64 << 25)) >> 26;
        h[1] += carry0;
        h[0] -= carry0 << 26;

        FieldElement(h.map(|x| x as i32))
    }

    /// Repeatedly squares this field element `n` times.
    pub(crate) fn n_square(self, n: usize) -> FieldElement {
        (0..n).fold(self, |acc, _| acc.square())
    }

    /// Raises this field element to the power `2^252 - 3`, i.e. `(p-5)/8`.
    ///
    /// Used by point decompression to extract a candidate square root.
    pub(crate) fn pow22523(&self) -> Self {
        let mut t0 = self.square();
        let mut t1 = t0.n_square(2);

        t1 = *self * t1;
        t0 = t0 * t1;

        t0 = t0.square();
        t0 = t1 * t0;

        t1 = t0.n_square(5);
        t0 = t1 * t0;

        t1 = t0.n_square(10);
        t1 = t1 * t0;

        let mut t2 = t1.n_square(20);
        t1 = t2 * t1;

        t1 = t1.n_square(10);
        t0 = t1 * t0;

        t1 = t0.n_square(50);
        t1 = t1 * t0;

        t2 = t1.n_square(100);
        t1 = t2 * t1;

        t1 = t1.n_square(50);
        t0 = t1 * t0;

        t0 = t0.n_square(2);

        t0 * *self
    }

    /// Computes the multiplicative inverse of this field element via Fermat's
    /// little theorem (`self^(p-2)`). Returns zero if `self` is zero.
    pub(crate) fn invert(&self) -> Self {
        let mut t0 = self.square();
        let mut t1 = t0.n_square(2);

        t1 = *self * t1;
        t0 = t0 * t1;

        let mut t2 = t0.square();
        t1 = t1 * t2;

        t2 = t1.n_square(5);
        t1 = t2 * t1;

        t2 = t1.n_square(10);
        t2 = t2 * t1;

        let mut t3 = t2.n_square(20);
        t2 = t3 * t2;

        t2 = t2.n_square(10);
        t1 = t2 * t1;

        t2 = t1.n_square(50);
        t2 = t2 * t1;

        t3 = t2.n_square(100);
        t2 = t3 * t2;

        t2 = t2.n_square(50);
        t1 = t2 * t1;

        t1 = t1.n_square(5);

        t1 * t0
    }
}

impl Add for FieldElement {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        FieldElement(array::from_fn(|index| {
            add!(self.0[index], rhs.0[index]) as i32
        }))
    }
}

impl Sub for FieldElement {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        FieldElement(array::from_fn(|index| {
            sub!(self.0[index], rhs.0[index]) as i32
        }))
    }
}

impl Mul for FieldElement {
    type Output = FieldElement;

    fn mul(self, rhs: Self) -> Self::Output {
        let f = self.0;
        let g = rhs.0;

        let (g_19, f_2): ([i32; 10], [i32; 10]) = {
            let mut g_mult = [0i32; 10];
            let mut f_mult = [0i32; 10];

            for index in 0..10 {
                g_mult[index] = 19 * g[index];
            }

            for index in [1, 3, 5, 7, 9] {
                f_mult[index] = 2 * f[index];
            }

            (g_mult, f_mult)
        };

        macro_rules! mul {
            ($a:expr, $b:expr) => {
                $a as i64 * $b as i64
            };
        }

        let (f0g0, f0g1, f0g2, f0g3, f0g4, f0g5, f0g6, f0g7, f0g8, f0g9) = (
            mul!(f[0], g[0]),
            mul!(f[0], g[1]),
            mul!(f[0], g[2]),
            mul!(f[0], g[3]),
            mul!(f[0], g[4]),
            mul!(f[0], g[5]),
            mul!(f[0], g[6]),
            mul!(f[0], g[7]),
            mul!(f[0], g[8]),
            mul!(f[0], g[9]),
        );

        let (f1g0, f1g1_2, f1g2, f1g3_2, f1g4, f1g5_2, f1g6, f1g7_2, f1g8, f1g9_38) = (
            mul!(f[1], g[0]),
            mul!(f_2[1], g[1]),
            mul!(f[1], g[2]),
            mul!(f_2[1], g[3]),
            mul!(f[1], g[4]),
            mul!(f_2[1], g[5]),
            mul!(f[1], g[6]),
            mul!(f_2[1], g[7]),
            mul!(f[1], g[8]),
            mul!(f_2[1], g_19[9]),
        );

        let (f2g0, f2g1, f2g2, f2g3, f2g4, f2g5, f2g6, f2g7, f2g8_19, f2g9_19) = (
            mul!(f[2], g[0]),
            mul!(f[2], g[1]),
            mul!(f[2], g[2]),
            mul!(f[2], g[3]),
            mul!(f[2], g[4]),
            mul!(f[2], g[5]),
            mul!(f[2], g[6]),
            mul!(f[2], g[7]),
            mul!(f[2], g_19[8]),
            mul!(f[2], g_19[9]),
        );

        let (f3g0, f3g1_2, f3g2, f3g3_2, f3g4, f3g5_2, f3g6, f3g7_38, f3g8_19, f3g9_38) = (
            mul!(f[3], g[0]),
            mul!(f_2[3], g[1]),
            mul!(f[3], g[2]),
            mul!(f_2[3], g[3]),
            mul!(f[3], g[4]),
            mul!(f_2[3], g[5]),
            mul!(f[3], g[6]),
            mul!(f_2[3], g_19[7]),
            mul!(f[3], g_19[8]),
            mul!(f_2[3], g_19[9]),
        );

        let (f4g0, f4g1, f4g2, f4g3, f4g4, f4g5, f4g6_19, f4g7_19, f4g8_19, f4g9_19) = (
            mul!(f[4], g[0]),
            mul!(f[4], g[1]),
            mul!(f[4], g[2]),
            mul!(f[4], g[3]),
            mul!(f[4], g[4]),
            mul!(f[4], g[5]),
            mul!(f[4], g_19[6]),
            mul!(f[4], g_19[7]),
            mul!(f[4], g_19[8]),
            mul!(f[4], g_19[9]),
        );

        let (f5g0, f5g1_2, f5g2, f5g3_2, f5g4, f5g5_38, f5g6_19, f5g7_38, f5g8_19, f5g9_38) = (
            mul!(f[5], g[0]),
            mul!(f_2[5], g[1]),
            mul!(f[5], g[2]),
            mul!(f_2[5], g[3]),
            mul!(f[5], g[4]),
            mul!(f_2[5], g_19[5]),
            mul!(f[5], g_19[6]),
            mul!(f_2[5], g_19[7]),
            mul!(f[5], g_19[8]),
            mul!(f_2[5], g_19[9]),
        );

        let (f6g0, f6g1, f6g2, f6g3, f6g4_19, f6g5_19, f6g6_19, f6g7_19, f6g8_19, f6g9_19) = (
            mul!(f[6], g[0]),
            mul!(f[6], g[1]),
            mul!(f[6], g[2]),
            mul!(f[6], g[3]),
            mul!(f[6], g_19[4]),
            mul!(f[6], g_19[5]),
            mul!(f[6], g_19[6]),
            mul!(f[6], g_19[7]),
            mul!(f[6], g_19[8]),
            mul!(f[6], g_19[9]),
        );

        let (f7g0, f7g1_2, f7g2, f7g3_38, f7g4_19, f7g5_38, f7g6_19, f7g7_38, f7g8_19, f7g9_38) = (
            mul!(f[7], g[0]),
            mul!(f_2[7], g[1]),
            mul!(f[7], g[2]),
            mul!(f_2[7], g_19[3]),
            mul!(f[7], g_19[4]),
            mul!(f_2[7], g_19[5]),
            mul!(f[7], g_19[6]),
            mul!(f_2[7], g_19[7]),
            mul!(f[7], g_19[8]),
            mul!(f_2[7], g_19[9]),
        );

        let (f8g0, f8g1, f8g2_19, f8g3_19, f8g4_19, f8g5_19, f8g6_19, f8g7_19, f8g8_19, f8g9_19) = (
            mul!(f[8], g[0]),
            mul!(f[8], g[1]),
            mul!(f[8], g_19[2]),
            mul!(f[8], g_19[3]),
            mul!(f[8], g_19[4]),
            mul!(f[8], g_19[5]),
            mul!(f[8], g_19[6]),
            mul!(f[8], g_19[7]),
            mul!(f[8], g_19[8]),
            mul!(f[8], g_19[9]),
        );

        let (f9g0, f9g1_38, f9g2_19, f9g3_38, f9g4_19, f9g5_38, f9g6_19, f9g7_38, f9g8_19, f9g9_38) = (
            mul!(f[9], g[0]),
            mul!(f_2[9], g_19[1]),
            mul!(f[9], g_19[2]),
            mul!(f_2[9], g_19[3]),
            mul!(f[9], g_19[4]),
            mul!(f_2[9], g_19[5]),
            mul!(f[9], g_19[6]),
            mul!(f_2[9], g_19[7]),
            mul!(f[9], g_19[8]),
            mul!(f_2[9], g_19[9]),
        );

        let mut h = [
            f0g0 + f1g9_38
                + f2g8_19
                + f3g7_38
                + f4g6_19
                + f5g5_38
                + f6g4_19
                + f7g3_38
                + f8g2_19
                + f9g1_38,
            f0g1 + f1g0
                + f2g9_19
                + f3g8_19
                + f4g7_19
                + f5g6_19
                + f6g5_19
                + f7g4_19
                + f8g3_19
                + f9g2_19,
            f0g2 + f1g1_2
                + f2g0
                + f3g9_38
                + f4g8_19
                + f5g7_38
                + f6g6_19
                + f7g5_38
                + f8g4_19
                + f9g3_38,
            f0g3 + f1g2 + f2g1 + f3g0 + f4g9_19 + f5g8_19 + f6g7_19 + f7g6_19 + f8g5_19 + f9g4_19,
            f0g4 + f1g3_2 + f2g2 + f3g1_2 + f4g0 + f5g9_38 + f6g8_19 + f7g7_38 + f8g6_19 + f9g5_38,
            f0g5 + f1g4 + f2g3 + f3g2 + f4g1 + f5g0 + f6g9_19 + f7g8_19 + f8g7_19 + f9g6_19,
            f0g6 + f1g5_2 + f2g4 + f3g3_2 + f4g2 + f5g1_2 + f6g0 + f7g9_38 + f8g8_19 + f9g7_38,
            f0g7 + f1g6 + f2g5 + f3g4 + f4g3 + f5g2 + f6g1 + f7g0 + f8g9_19 + f9g8_19,
            f0g8 + f1g7_2 + f2g6 + f3g5_2 + f4g4 + f5g3_2 + f6g2 + f7g1_2 + f8g0 + f9g9_38,
            f0g9 + f1g8 + f2g7 + f3g6 + f4g5 + f5g4 + f6g3 + f7g2 + f8g1 + f9g0,
        ];

        for index in [0, 4] {
            let carry = (h[index] + (1i64 << 25)) >> 26;

            h[index + 1] += carry;
            h[index] -= carry << 26;
        }

        for index in [1, 5] {
            let carry = (h[index] + (1i64 << 24)) >> 25;

            h[index + 1] += carry;
            h[index] -= carry << 25;
        }

        for index in [2, 6] {
            let carry = (h[index] + (1i64 << 25)) >> 26;

            h[index + 1] += carry;
            h[index] -= carry << 26;
        }

        for index in [3, 7] {
            let carry = (h[index] + (1i64 << 24)) >> 25;

            h[index + 1] += carry;
            h[index] -= carry << 25;
        }

        let carry4 = (h[4] + (1i64 << 25)) >> 26;
        h[5] += carry4;
        h[4] -= carry4 << 26;

        let carry8 = (h[8] + (1i64 << 25)) >> 26;
        h[9] += carry8;
        h[8] -= carry8 << 26;

        let carry9 = (h[9] + (1i64 << 24)) >> 25;
        h[0] += carry9 * 19;
        h[9] -= carry9 << 25;

        let carry0 = (h[0] + (1i64 << 25)) >> 26;
        h[1] += carry0;
        h[0] -= carry0 << 26;

        FieldElement(h.map(|x| x as i32))
    }
}

impl Neg for FieldElement {
    type Output = Self;

    fn neg(self) -> Self::Output {
        FieldElement(self.0.map(|x| -x))
    }
}
