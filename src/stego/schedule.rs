// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/hushcore

//! Deterministic keyed start-position selection.
//!
//! The SHA-256 digest of the key's UTF-8 bytes seeds a ChaCha20 PRNG; a
//! single draw reduced modulo the bit capacity yields the start offset.
//! Embedder and extractor derive the identical offset from the identical key,
//! with no process-local randomness involved.
//!
//! # Cross-platform portability
//!
//! The draw uses `gen_range` over `u64` (not `usize`) so the consumed PRNG
//! entropy, and therefore the offset, is identical on 32- and 64-bit
//! targets.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use sha2::{Digest, Sha256};
use zeroize::Zeroizing;

/// Derive the start bit for keyed placement: a value in `[0, total_bits)`.
///
/// Returns 0 when `total_bits` is 0.
pub fn keyed_start(key: &str, total_bits: usize) -> usize {
    if total_bits == 0 {
        return 0;
    }
    let seed: Zeroizing<[u8; 32]> = Zeroizing::new(Sha256::digest(key.as_bytes()).into());
    let mut rng = ChaCha20Rng::from_seed(*seed);
    rng.gen_range(0..total_bits as u64) as usize
}
