//! SHA-256 core hashing (FIPS 180-4).
//!
//! `Sha256` buffers input into 64-byte blocks and feeds each complete block
//! through `compress`. `finalize` applies the standard Merkle-Damgard
//! padding (a `0x80` byte, zeros, then the 64-bit big-endian bit length)
//! before producing the digest.

use crate::hash::sha256::H256_INIT;
use crate::hash::sha256::computations::all_rounds;

/// Compresses a single 512-bit message block, updating `state` in place.
pub fn compress(block: &[u8; 64], state: &mut [u32; 8]) {
    let mut w = [0u32; 16];

    for (slot, chunk) in w.iter_mut().zip(block.chunks_exact(4)) {
        *slot = u32::from_be_bytes(chunk.try_into().unwrap());
    }

    all_rounds(state, w);
}

/// Streaming SHA-256 hasher.
#[derive(Clone)]
pub struct Sha256 {
    state: [u32; 8],
    buffer: [u8; 64],
    buffer_len: usize,
    total_len: u64,
}

impl Sha256 {
    /// Creates a new hasher in the initial state `H(0)`.
    pub fn new() -> Self {
        Sha256 {
            state: H256_INIT,
            buffer: [0u8; 64],
            buffer_len: 0,
            total_len: 0,
        }
    }

    /// Absorbs `data` into the running hash state.
    pub fn update(&mut self, mut data: &[u8]) {
        self.total_len = self.total_len.wrapping_add(data.len() as u64);

        if self.buffer_len > 0 {
            let need = 64 - self.buffer_len;
            let take = need.min(data.len());
            self.buffer[self.buffer_len..self.buffer_len + take].copy_from_slice(&data[..take]);
            self.buffer_len += take;
            data = &data[take..];

            if self.buffer_len == 64 {
                let block = self.buffer;
                compress(&block, &mut self.state);
                self.buffer_len = 0;
            }
        }

        while data.len() >= 64 {
            let block: &[u8; 64] = data[..64].try_into().unwrap();
            compress(block, &mut self.state);
            data = &data[64..];
        }

        if !data.is_empty() {
            self.buffer[..data.len()].copy_from_slice(data);
            self.buffer_len = data.len();
        }
    }

    /// Finalizes the hash, consuming the hasher, and returns the digest.
    pub fn finalize(mut self) -> [u8; 32] {
        let bit_len = self.total_len << 3;

        let mut block = [0u8; 64];
        block[..self.buffer_len].copy_from_slice(&self.buffer[..self.buffer_len]);
        block[self.buffer_len] = 0x80;

        if self.buffer_len > 55 {
            compress(&block, &mut self.state);
            block = [0u8; 64];
        }

        block[56..64].copy_from_slice(&bit_len.to_be_bytes());
        compress(&block, &mut self.state);

        let mut out = [0u8; 32];
        for (chunk, word) in out.chunks_exact_mut(4).zip(self.state.iter()) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }
        out
    }
}

impl Default for Sha256 {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::Sha256;

    fn digest(input: &[u8]) -> [u8; 32] {
        let mut h = Sha256::new();
        h.update(input);
        h.finalize()
    }

    #[test]
    fn empty_string() {
        let expect: [u8; 32] = [
            0xe3, 0xb0, 0xc4, 0x42, 0x98, 0xfc, 0x1c, 0x14, 0x9a, 0xfb, 0xf4, 0xc8, 0x99, 0x6f,
            0xb9, 0x24, 0x27, 0xae, 0x41, 0xe4, 0x64, 0x9b, 0x93, 0x4c, 0xa4, 0x95, 0x99, 0x1b,
            0x78, 0x52, 0xb8, 0x55,
        ];
        assert_eq!(digest(b""), expect);
    }

    #[test]
    fn abc_vector() {
        let expect: [u8; 32] = [
            0xba, 0x78, 0x16, 0xbf, 0x8f, 0x01, 0xcf, 0xea, 0x41, 0x41, 0x40, 0xde, 0x5d, 0xae,
            0x22, 0x23, 0xb0, 0x03, 0x61, 0xa3, 0x96, 0x17, 0x7a, 0x9c, 0xb4, 0x10, 0xff, 0x61,
            0xf2, 0x00, 0x15, 0xad,
        ];
        assert_eq!(digest(b"abc"), expect);
    }

    #[test]
    fn streaming_matches_one_shot() {
        let data = vec![0x5au8; 200];
        let mut streamed = Sha256::new();
        for chunk in data.chunks(7) {
            streamed.update(chunk);
        }
        let mut one_shot = Sha256::new();
        one_shot.update(&data);
        assert_eq!(streamed.finalize(), one_shot.finalize());
    }

    #[test]
    fn block_boundary_lengths() {
        for len in [55usize, 56, 57, 63, 64, 65, 119, 120, 128] {
            let data = vec![0x11u8; len];
            let mut h = Sha256::new();
            h.update(&data);
            let _ = h.finalize();
        }
    }
}
