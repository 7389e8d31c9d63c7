//! SHA-512 core hashing (FIPS 180-4).
//!
//! `Sha512` buffers input into 128-byte blocks and feeds each complete
//! block through `compress`. `finalize` applies the standard
//! Merkle-Damgard padding (a `0x80` byte, zeros, then the 128-bit
//! big-endian bit length) before producing the digest.

use crate::hash::sha512::H512_INIT;
use crate::hash::sha512::computations::all_rounds;

/// Compresses a single 1024-bit message block, updating `state` in place.
pub fn compress(block: &[u8; 128], state: &mut [u64; 8]) {
    let mut w = [0u64; 16];

    for (slot, chunk) in w.iter_mut().zip(block.chunks_exact(8)) {
        *slot = u64::from_be_bytes(chunk.try_into().unwrap());
    }

    all_rounds(state, w);
}

/// Streaming SHA-512 hasher.
#[derive(Clone)]
pub struct Sha512 {
    state: [u64; 8],
    buffer: [u8; 128],
    buffer_len: usize,
    total_len: u128,
}

impl Sha512 {
    /// Creates a new hasher in the initial state `H(0)`.
    pub fn new() -> Self {
        Sha512 {
            state: H512_INIT,
            buffer: [0u8; 128],
            buffer_len: 0,
            total_len: 0,
        }
    }

    /// Absorbs `data` into the running hash state.
    pub fn update(&mut self, mut data: &[u8]) {
        self.total_len = self.total_len.wrapping_add(data.len() as u128);

        if self.buffer_len > 0 {
            let need = 128 - self.buffer_len;
            let take = need.min(data.len());
            self.buffer[self.buffer_len..self.buffer_len + take].copy_from_slice(&data[..take]);
            self.buffer_len += take;
            data = &data[take..];

            if self.buffer_len == 128 {
                let block = self.buffer;
                compress(&block, &mut self.state);
                self.buffer_len = 0;
            }
        }

        while data.len() >= 128 {
            let block: &[u8; 128] = data[..128].try_into().unwrap();
            compress(block, &mut self.state);
            data = &data[128..];
        }

        if !data.is_empty() {
            self.buffer[..data.len()].copy_from_slice(data);
            self.buffer_len = data.len();
        }
    }

    /// Finalizes the hash, consuming the hasher, and returns the digest.
    pub fn finalize(mut self) -> [u8; 64] {
        let bit_len = self.total_len << 3;

        let mut block = [0u8; 128];
        block[..self.buffer_len].copy_from_slice(&self.buffer[..self.buffer_len]);
        block[self.buffer_len] = 0x80;

        if self.buffer_len > 111 {
            compress(&block, &mut self.state);
            block = [0u8; 128];
        }

        block[112..128].copy_from_slice(&bit_len.to_be_bytes());
        compress(&block, &mut self.state);

        let mut out = [0u8; 64];
        for (chunk, word) in out.chunks_exact_mut(8).zip(self.state.iter()) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }
        out
    }
}

impl Default for Sha512 {
    fn default() -> Self {
        Self::new()
    }
}
