// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/hushcore

//! PCM-chunk container parsing and writing.
//!
//! The container is a 12-byte root (`RIFF` + file size + `WAVE`) followed by
//! typed chunks: 4-byte ASCII tag, 4-byte little-endian size, body, and one
//! pad byte when the size is odd. The `data` chunk body holds contiguous
//! 16-bit little-endian stereo samples; that body is the embeddable payload
//! region. All other chunks (`fmt `, `fact`, `LIST`, ...) are skipped and
//! preserved verbatim.

use super::error::{AudioError, Result};
use std::ops::Range;

/// Minimum size of a well-formed container: 12-byte root + one chunk header.
const MIN_CONTAINER_LEN: usize = 12 + 8;

/// Returns true if `data` starts with the RIFF/WAVE root header.
pub fn is_pcm_container(data: &[u8]) -> bool {
    data.len() >= 12 && &data[0..4] == b"RIFF" && &data[8..12] == b"WAVE"
}

/// Locate the `data` chunk and return its body as a byte range into `data`.
///
/// Walks chunks from offset 12. Chunks are skipped over using their declared
/// little-endian size plus the odd-size pad byte. The first `data` chunk wins.
///
/// # Errors
/// - [`AudioError::TooShort`] if the input cannot hold the root and one chunk.
/// - [`AudioError::TruncatedChunk`] if the `data` chunk's declared size runs
///   past the end of the input.
/// - [`AudioError::MissingDataChunk`] if the chunk walk reaches the end
///   without finding a `data` chunk.
pub fn data_chunk_range(data: &[u8]) -> Result<Range<usize>> {
    if data.len() < MIN_CONTAINER_LEN {
        return Err(AudioError::TooShort);
    }

    let mut off = 12;
    while off + 8 <= data.len() {
        let tag = &data[off..off + 4];
        let size = u32::from_le_bytes([
            data[off + 4],
            data[off + 5],
            data[off + 6],
            data[off + 7],
        ]) as usize;

        if tag == b"data" {
            let body = off + 8;
            let end = body.checked_add(size).ok_or(AudioError::TruncatedChunk)?;
            if end > data.len() {
                return Err(AudioError::TruncatedChunk);
            }
            return Ok(body..end);
        }

        // Skip header + body + pad byte for odd sizes.
        let step = 8 + size + (size & 1);
        match off.checked_add(step) {
            Some(next) => off = next,
            None => return Err(AudioError::TruncatedChunk),
        }
    }

    Err(AudioError::MissingDataChunk)
}

/// Build a PCM container around raw 16-bit little-endian stereo samples.
///
/// Emits the canonical 44-byte header: root, a 16-byte `fmt ` chunk
/// (PCM format tag, 2 channels, 16 bits per sample), then the `data` chunk.
pub fn write_pcm_container(samples_le: &[u8], sample_rate: u32) -> Vec<u8> {
    let data_size = samples_le.len() as u32;
    let file_size = 36 + data_size;
    let byte_rate = sample_rate * 2 * 2;

    let mut out = Vec::with_capacity(44 + samples_le.len());
    out.extend_from_slice(b"RIFF");
    out.extend_from_slice(&file_size.to_le_bytes());
    out.extend_from_slice(b"WAVE");

    out.extend_from_slice(b"fmt ");
    out.extend_from_slice(&16u32.to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes()); // PCM format tag
    out.extend_from_slice(&2u16.to_le_bytes()); // stereo
    out.extend_from_slice(&sample_rate.to_le_bytes());
    out.extend_from_slice(&byte_rate.to_le_bytes());
    out.extend_from_slice(&4u16.to_le_bytes()); // block align
    out.extend_from_slice(&16u16.to_le_bytes()); // bits per sample

    out.extend_from_slice(b"data");
    out.extend_from_slice(&data_size.to_le_bytes());
    out.extend_from_slice(samples_le);

    out
}
