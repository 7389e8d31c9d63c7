use cryptography::{ed25519_keygen, ed25519_sign, ed25519_verify};

/// A tiny deterministic PRNG (xorshift64*) used only to generate
/// pseudo-random seeds/messages for property tests; not cryptographic.
struct Xorshift64(u64);

impl Xorshift64 {
    fn new(seed: u64) -> Self {
        Xorshift64(seed | 1)
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x.wrapping_mul(0x2545F4914F6CDD1D)
    }

    fn fill(&mut self, buf: &mut [u8]) {
        for chunk in buf.chunks_mut(8) {
            let word = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&word[..chunk.len()]);
        }
    }
}

#[test]
fn rfc8032_test_1_keygen() {
    let seed: [u8; 32] = [
        0x9d, 0x61, 0xb1, 0x9d, 0xef, 0xfd, 0x5a, 0x60, 0xba, 0x84, 0x4a, 0xf4, 0x92, 0xec, 0x2c,
        0xc4, 0x44, 0x49, 0xc5, 0x69, 0x7b, 0x32, 0x69, 0x19, 0x70, 0x3b, 0xac, 0x03, 0x1c, 0xae,
        0x7f, 0x60,
    ];
    let expect_public: [u8; 32] = [
        0xd7, 0x5a, 0x98, 0x01, 0x82, 0xb1, 0x0a, 0xb7, 0xd5, 0x4b, 0xfe, 0xd3, 0xc9, 0x64, 0x07,
        0x3a, 0x0e, 0xe1, 0x72, 0xf3, 0xda, 0xa6, 0x23, 0x25, 0xaf, 0x02, 0x1a, 0x68, 0xf7, 0x07,
        0x51, 0x1a,
    ];

    assert_eq!(ed25519_keygen(&seed), expect_public);
}

#[test]
fn rfc8032_test_1_sign_empty_message() {
    let seed: [u8; 32] = [
        0x9d, 0x61, 0xb1, 0x9d, 0xef, 0xfd, 0x5a, 0x60, 0xba, 0x84, 0x4a, 0xf4, 0x92, 0xec, 0x2c,
        0xc4, 0x44, 0x49, 0xc5, 0x69, 0x7b, 0x32, 0x69, 0x19, 0x70, 0x3b, 0xac, 0x03, 0x1c, 0xae,
        0x7f, 0x60,
    ];
    let expect_sig: [u8; 64] = [
        0xe5, 0x56, 0x43, 0x00, 0xc3, 0x60, 0xac, 0x72, 0x90, 0x86, 0xe2, 0xcc, 0x80, 0x6e, 0x82,
        0x8a, 0x84, 0x87, 0x7f, 0x1e, 0xb8, 0xe5, 0xd9, 0x74, 0xd8, 0x73, 0xe0, 0x65, 0x22, 0x49,
        0x01, 0x55, 0x5f, 0xb8, 0x82, 0x15, 0x90, 0xa3, 0x3b, 0xac, 0xc6, 0x1e, 0x39, 0x70, 0x1c,
        0xf9, 0xb4, 0x6b, 0xd2, 0x5b, 0xf5, 0xf0, 0x59, 0x5b, 0xbe, 0x24, 0x65, 0x51, 0x41, 0x43,
        0x8e, 0x7a, 0x10, 0x0b,
    ];

    let public = ed25519_keygen(&seed);
    let signature = ed25519_sign(&seed, &public, b"");

    assert_eq!(signature, expect_sig);
    assert!(ed25519_verify(&signature, &public, b""));
}

#[test]
fn rfc8032_test_1_verify_rejects_flipped_signature_byte() {
    let seed: [u8; 32] = [
        0x9d, 0x61, 0xb1, 0x9d, 0xef, 0xfd, 0x5a, 0x60, 0xba, 0x84, 0x4a, 0xf4, 0x92, 0xec, 0x2c,
        0xc4, 0x44, 0x49, 0xc5, 0x69, 0x7b, 0x32, 0x69, 0x19, 0x70, 0x3b, 0xac, 0x03, 0x1c, 0xae,
        0x7f, 0x60,
    ];

    let public = ed25519_keygen(&seed);
    let mut signature = ed25519_sign(&seed, &public, b"");
    signature[0] ^= 1;

    assert!(!ed25519_verify(&signature, &public, b""));
}

#[test]
fn sign_and_verify_variable_length_messages() {
    let seed = [0x42u8; 32];
    let public = ed25519_keygen(&seed);

    let table: Vec<u8> = (0..1024u32).map(|i| (i % 256) as u8).collect();

    for &len in &[0usize, 1, 32, 64, 128, 512, 1023] {
        let message = &table[..len];
        let signature = ed25519_sign(&seed, &public, message);
        assert!(
            ed25519_verify(&signature, &public, message),
            "len {len} should verify"
        );

        for bit in [0usize, 7, message.len().saturating_sub(1) * 8 + 7] {
            if message.is_empty() {
                break;
            }
            let byte = bit / 8;
            let mask = 1u8 << (bit % 8);
            let mut tampered = message.to_vec();
            tampered[byte] ^= mask;
            assert!(
                !ed25519_verify(&signature, &public, &tampered),
                "flipping bit {bit} of a len-{len} message should invalidate the signature"
            );
        }
    }
}

#[test]
fn unforgeability_under_random_bit_flips() {
    let mut rng = Xorshift64::new(0xC0FFEE);

    for _ in 0..64 {
        let mut seed = [0u8; 32];
        rng.fill(&mut seed);
        let public = ed25519_keygen(&seed);

        let mut message = [0u8; 48];
        rng.fill(&mut message);

        let signature = ed25519_sign(&seed, &public, &message);
        assert!(ed25519_verify(&signature, &public, &message));

        // Flip a random bit of the signature.
        let mut bad_sig = signature;
        let byte = (rng.next_u64() % 64) as usize;
        let bit = (rng.next_u64() % 8) as u8;
        bad_sig[byte] ^= 1 << bit;
        assert!(!ed25519_verify(&bad_sig, &public, &message));

        // Flip a random bit of the public key.
        let mut bad_pub = public;
        let byte = (rng.next_u64() % 32) as usize;
        let bit = (rng.next_u64() % 8) as u8;
        bad_pub[byte] ^= 1 << bit;
        assert!(!ed25519_verify(&signature, &bad_pub, &message));

        // Flip a random bit of the message.
        let mut bad_msg = message;
        let byte = (rng.next_u64() % bad_msg.len() as u64) as usize;
        let bit = (rng.next_u64() % 8) as u8;
        bad_msg[byte] ^= 1 << bit;
        assert!(!ed25519_verify(&signature, &public, &bad_msg));
    }
}

#[test]
fn verify_rejects_non_canonical_s() {
    let seed = [0x99u8; 32];
    let public = ed25519_keygen(&seed);
    let message = b"message";

    let mut signature = ed25519_sign(&seed, &public, message);
    // l's own little-endian encoding: >= l, therefore non-canonical.
    signature[32..].copy_from_slice(&[
        0xed, 0xd3, 0xf5, 0x5c, 0x1a, 0x63, 0x12, 0x58, 0xd6, 0x9c, 0xf7, 0xa2, 0xde, 0xf9, 0xde,
        0x14, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x10,
    ]);

    assert!(!ed25519_verify(&signature, &public, message));
}

#[test]
fn verify_rejects_invalid_public_key_encoding() {
    let signature = [0u8; 64];
    let invalid_public = [0xffu8; 32];

    assert!(!ed25519_verify(&signature, &invalid_public, b"anything"));
}
