//! Precomputed curve constants and the fixed-base scalar multiplication
//! table.
//!
//! `d`, `d2`, and `sqrtm1` are the standard Edwards25519 constants, each
//! decoded once from its canonical byte encoding and cached. `base_table`
//! is the signed-radix-16 table consumed by
//! [`super::group::GeP3::from_scalar_mul`]: 32 groups of 8 precomputed
//! multiples `(k+1) * 16^j * B` for `j` in `0..32`, `k` in `0..8`. Rather
//! than hand-transcribing the table's several thousand constants, it is
//! generated once at first use by repeated point addition and doubling
//! from the base point, then cached behind a `OnceLock`.

use std::sync::OnceLock;

use super::field::FieldElement;
use super::group::{GeCached, GeP1, GeP2, GeP3, GePrecomp};

/// `d = -121665/121666`, little-endian.
const D_BYTES: [u8; 32] = [
    0xa3, 0x78, 0x59, 0x13, 0xca, 0x4d, 0xeb, 0x75, 0xab, 0xd8, 0x41, 0x41, 0x4d, 0x0a, 0x70, 0x00,
    0x98, 0xe8, 0x79, 0x77, 0x79, 0x40, 0xc7, 0x8c, 0x73, 0xfe, 0x6f, 0x2b, 0xee, 0x6c, 0x03, 0x52,
];

/// `2 * d`, little-endian.
const D2_BYTES: [u8; 32] = [
    0x59, 0xf1, 0xb2, 0x26, 0x94, 0x9b, 0xd6, 0xeb, 0x56, 0xb1, 0x83, 0x82, 0x9a, 0x14, 0xe0, 0x00,
    0x30, 0xd1, 0xf3, 0xee, 0xf2, 0x80, 0x8e, 0x19, 0xe7, 0xfc, 0xdf, 0x56, 0xdc, 0xd9, 0x06, 0x24,
];

/// A square root of `-1` modulo `p`, little-endian.
const SQRTM1_BYTES: [u8; 32] = [
    0xb0, 0xa0, 0x0e, 0x4a, 0x27, 0x1b, 0xee, 0xc4, 0x78, 0xe4, 0x2f, 0xad, 0x06, 0x18, 0x43, 0x2f,
    0xa7, 0xd7, 0xfb, 0x3d, 0x99, 0x00, 0x4d, 0x2b, 0x0b, 0xdf, 0xc1, 0x4f, 0x80, 0x24, 0x83, 0x2b,
];

/// Canonical compressed encoding of the Ed25519 base point `B`.
const BASE_POINT_BYTES: [u8; 32] = [
    0x58, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66,
    0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66,
    0x66, 0x66,
];

static D_CELL: OnceLock<FieldElement> = OnceLock::new();
static D2_CELL: OnceLock<FieldElement> = OnceLock::new();
static SQRTM1_CELL: OnceLock<FieldElement> = OnceLock::new();

pub(crate) fn d() -> FieldElement {
    *D_CELL.get_or_init(|| FieldElement::from_bytes(&D_BYTES))
}

pub(crate) fn d2() -> FieldElement {
    *D2_CELL.get_or_init(|| FieldElement::from_bytes(&D2_BYTES))
}

pub(crate) fn sqrtm1() -> FieldElement {
    *SQRTM1_CELL.get_or_init(|| FieldElement::from_bytes(&SQRTM1_BYTES))
}

fn base_point() -> GeP3 {
    let (p, status) = GeP3::decompress(&BASE_POINT_BYTES);
    debug_assert_eq!(status, 0);
    p
}

/// The Ed25519 base point `B` in extended coordinates.
pub(crate) fn base_point_extended() -> GeP3 {
    base_point()
}

/// Converts an extended-coordinate point into `GePrecomp` form by clearing
/// its denominator.
fn affine_precompute(p: &GeP3) -> GePrecomp {
    let recip = p.z.invert();
    let x = p.x * recip;
    let y = p.y * recip;
    let xy2d = x * y * d2();

    GePrecomp {
        yplusx: y + x,
        yminusx: y - x,
        xy2d,
    }
}

fn build_base_table() -> [[GePrecomp; 8]; 32] {
    let mut table: Vec<[GePrecomp; 8]> = Vec::with_capacity(32);

    let mut group_base = base_point();

    for _ in 0..32 {
        let mut entries: Vec<GePrecomp> = Vec::with_capacity(8);

        let mut acc = group_base;
        entries.push(affine_precompute(&acc));

        for _ in 1..8 {
            let cached = GeCached::from_p3(&group_base);
            let sum = GeP1::from_sum(&acc, &cached);
            acc = GeP3::from_gep1(&sum);
            entries.push(affine_precompute(&acc));
        }

        table.push(entries.try_into().unwrap_or_else(|_| unreachable!()));

        // Advance group_base from 16^j * B to 16^(j+1) * B.
        for _ in 0..4 {
            let doubled = GeP2::from_gep3(&group_base).double();
            group_base = GeP3::from_gep1(&doubled);
        }
    }

    table.try_into().unwrap_or_else(|_| unreachable!())
}

static BASE_CELL: OnceLock<[[GePrecomp; 8]; 32]> = OnceLock::new();

/// The fixed-base scalar multiplication table, generated on first access.
pub(crate) fn base_table() -> &'static [[GePrecomp; 8]; 32] {
    BASE_CELL.get_or_init(build_base_table)
}
