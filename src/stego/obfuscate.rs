// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/hushcore

//! Stream obfuscation and payload integrity checksum.
//!
//! Obfuscation is a repeating-key XOR over the key's UTF-8 bytes. It is its
//! own inverse and an empty key leaves the data unchanged. This is an
//! obfuscation layer, not authenticated encryption.
//!
//! The integrity checksum is the CRC-32 of the plaintext secret, stored
//! big-endian. The extractor recomputes it after de-obfuscation to tell a
//! wrong key apart from an absent payload.

/// XOR `data` with the repeating UTF-8 bytes of `key`, in place.
pub fn xor_stream(data: &mut [u8], key: &str) {
    let key_bytes = key.as_bytes();
    if key_bytes.is_empty() {
        return;
    }
    for (i, byte) in data.iter_mut().enumerate() {
        *byte ^= key_bytes[i % key_bytes.len()];
    }
}

/// 4-byte big-endian CRC-32 of `data`.
pub fn checksum(data: &[u8]) -> [u8; 4] {
    crc32fast::hash(data).to_be_bytes()
}
