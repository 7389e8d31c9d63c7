use cryptography::{Sha256, Sha512};

use sha2::Digest;

fn table(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i % 256) as u8).collect()
}

fn sha256_digest(input: &[u8]) -> [u8; 32] {
    let mut h = Sha256::new();
    h.update(input);
    h.finalize()
}

fn sha512_digest(input: &[u8]) -> [u8; 64] {
    let mut h = Sha512::new();
    h.update(input);
    h.finalize()
}

const BOUNDARY_LENGTHS: [usize; 10] = [0, 1, 55, 56, 63, 64, 65, 127, 128, 129];

#[test]
fn sha256_matches_reference_at_boundary_lengths() {
    for &len in &BOUNDARY_LENGTHS {
        let input = table(len);

        let ours = sha256_digest(&input);

        let mut reference = sha2::Sha256::new();
        reference.update(&input);
        let expect: [u8; 32] = reference.finalize().into();

        assert_eq!(ours, expect, "mismatch at length {len}");
    }
}

#[test]
fn sha512_matches_reference_at_boundary_lengths() {
    for &len in &BOUNDARY_LENGTHS {
        let input = table(len);

        let ours = sha512_digest(&input);

        let mut reference = sha2::Sha512::new();
        reference.update(&input);
        let expect: [u8; 64] = reference.finalize().into();

        assert_eq!(ours, expect, "mismatch at length {len}");
    }
}

#[test]
fn sha256_matches_reference_over_many_small_updates() {
    let input = table(5 * 1024 * 1024);

    let mut ours = Sha256::new();
    for chunk in input.chunks(37) {
        ours.update(chunk);
    }
    let ours = ours.finalize();

    let mut reference = sha2::Sha256::new();
    reference.update(&input);
    let expect: [u8; 32] = reference.finalize().into();

    assert_eq!(ours, expect);
}

#[test]
fn sha512_matches_reference_over_many_small_updates() {
    let input = table(5 * 1024 * 1024);

    let mut ours = Sha512::new();
    for chunk in input.chunks(61) {
        ours.update(chunk);
    }
    let ours = ours.finalize();

    let mut reference = sha2::Sha512::new();
    reference.update(&input);
    let expect: [u8; 64] = reference.finalize().into();

    assert_eq!(ours, expect);
}

#[test]
fn sha256_fips_abc_vector() {
    let expect: [u8; 32] = [
        0xba, 0x78, 0x16, 0xbf, 0x8f, 0x01, 0xcf, 0xea, 0x41, 0x41, 0x40, 0xde, 0x5d, 0xae, 0x22,
        0x23, 0xb0, 0x03, 0x61, 0xa3, 0x96, 0x17, 0x7a, 0x9c, 0xb4, 0x10, 0xff, 0x61, 0xf2, 0x00,
        0x15, 0xad,
    ];
    assert_eq!(sha256_digest(b"abc"), expect);
}

#[test]
fn sha512_fips_abc_vector() {
    let expect: [u8; 64] = [
        0xdd, 0xaf, 0x35, 0xa1, 0x93, 0x61, 0x7a, 0xba, 0xcc, 0x41, 0x73, 0x49, 0xae, 0x20, 0x41,
        0x31, 0x12, 0xe6, 0xfa, 0x4e, 0x89, 0xa9, 0x7e, 0xa2, 0x0a, 0x9e, 0xee, 0xe6, 0x4b, 0x55,
        0xd3, 0x9a, 0x21, 0x92, 0x99, 0x2a, 0x27, 0x4f, 0xc1, 0xa8, 0x36, 0xba, 0x3c, 0x23, 0xa3,
        0xfe, 0xeb, 0xbd, 0x45, 0x4d, 0x44, 0x23, 0x64, 0x3c, 0xe8, 0x0e, 0x2a, 0x9a, 0xc9, 0x4f,
        0xa5, 0x4c, 0xa4, 0x9f,
    ];
    assert_eq!(sha512_digest(b"abc"), expect);
}
