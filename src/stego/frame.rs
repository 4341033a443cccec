// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/hushcore

//! On-stream frame construction and parsing.
//!
//! The frame is the self-describing binary container wrapping the stored
//! secret before bit-serialisation. Layout (all lengths big-endian):
//!
//! ```text
//! [8 bytes ] magic "ASTEGv2\0"
//! [1 byte  ] method (0 = LSB, 1 = parity)
//! [1 byte  ] k (LSB depth 1..4; always 1 for parity)
//! [1 byte  ] flags: bit 0 = obfuscated, bit 1 = keyed start
//! [2 bytes ] filename length
//! [4 bytes ] stored secret length (after obfuscation; includes the 4-byte
//!            checksum prefix when bit 0 is set)
//! [N bytes ] filename (UTF-8)
//! [2 bytes ] metadata length
//! [M bytes ] opaque metadata
//! [S bytes ] stored secret
//! ```
//!
//! The method and k bytes repeat the embedding parameters inside the frame,
//! which lets the extractor confirm a candidate parameter set against what
//! the embedder actually used.
//!
//! Parsing never fails hard: a candidate buffer that is not a frame is a
//! clean [`FrameReject`], and the caller moves on to its next candidate.

use crate::stego::bits::{get_u16_be, get_u32_be};
use crate::stego::error::StegoError;
use crate::stego::Method;

/// Frame magic: version tag, ASCII, zero-terminated.
pub const MAGIC: [u8; 8] = *b"ASTEGv2\0";

/// Fixed prefix: magic(8) + method(1) + k(1) + flags(1) + fname_len(2) +
/// secret_len(4).
pub const FIXED_HEADER_LEN: usize = 17;

/// Flags bit 0: the stored secret is checksum-prefixed and XOR-obfuscated.
pub const FLAG_OBFUSCATED: u8 = 1 << 0;
/// Flags bit 1: the embed start position was derived from the key.
pub const FLAG_KEYED_START: u8 = 1 << 1;

/// Stored in place of an empty filename.
pub const DEFAULT_FILENAME: &str = "secret.bin";

/// Upper bound for the filename and metadata fields.
pub const MAX_FIELD_LEN: usize = u16::MAX as usize;

/// Frame bytes that are not filename, metadata, or secret payload.
const BASE_OVERHEAD: usize = FIXED_HEADER_LEN + 2;

/// A parse candidate that turned out not to hold a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameReject {
    /// No magic, unknown method/k byte, or non-UTF-8 filename.
    NotAFrame,
    /// The magic matched but the declared lengths exceed the buffer.
    Truncated,
}

/// A successfully parsed frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedFrame {
    pub method: Method,
    pub flags: u8,
    pub filename: String,
    pub metadata: Vec<u8>,
    /// Stored secret exactly as embedded (still obfuscated when bit 0 is set).
    pub payload: Vec<u8>,
}

/// Total frame size in bytes for the given fields.
///
/// An empty `filename` is counted as [`DEFAULT_FILENAME`], matching what
/// [`build_frame`] stores. When `obfuscated` is set the stored secret gains a
/// 4-byte checksum prefix. Subtract this from a capacity figure to get the
/// net secret budget.
pub fn frame_overhead(filename: &str, metadata_len: usize, obfuscated: bool) -> usize {
    let name = if filename.is_empty() {
        DEFAULT_FILENAME
    } else {
        filename
    };
    BASE_OVERHEAD + name.len() + metadata_len + if obfuscated { 4 } else { 0 }
}

/// Serialise a frame.
///
/// `payload` is the stored secret (already obfuscated by the caller when
/// applicable). An empty `filename` is replaced with [`DEFAULT_FILENAME`].
///
/// # Errors
/// [`StegoError::FieldTooLarge`] when the filename or metadata exceed 65535
/// bytes or the payload exceeds `u32::MAX`.
pub fn build_frame(
    method: Method,
    flags: u8,
    filename: &str,
    metadata: &[u8],
    payload: &[u8],
) -> Result<Vec<u8>, StegoError> {
    let name = if filename.is_empty() {
        DEFAULT_FILENAME
    } else {
        filename
    };
    let name_bytes = name.as_bytes();

    if name_bytes.len() > MAX_FIELD_LEN {
        return Err(StegoError::FieldTooLarge("filename"));
    }
    if metadata.len() > MAX_FIELD_LEN {
        return Err(StegoError::FieldTooLarge("metadata"));
    }
    if u32::try_from(payload.len()).is_err() {
        return Err(StegoError::FieldTooLarge("secret"));
    }

    let mut frame =
        Vec::with_capacity(BASE_OVERHEAD + name_bytes.len() + metadata.len() + payload.len());
    frame.extend_from_slice(&MAGIC);
    frame.push(method.byte());
    frame.push(method.k());
    frame.push(flags);
    frame.extend_from_slice(&(name_bytes.len() as u16).to_be_bytes());
    frame.extend_from_slice(&(payload.len() as u32).to_be_bytes());
    frame.extend_from_slice(name_bytes);
    frame.extend_from_slice(&(metadata.len() as u16).to_be_bytes());
    frame.extend_from_slice(metadata);
    frame.extend_from_slice(payload);
    Ok(frame)
}

/// Parse a frame from the start of `data`.
///
/// `data` may extend past the frame (the extraction stream usually does);
/// the frame's own length fields bound what is read.
pub fn parse_frame(data: &[u8]) -> Result<ParsedFrame, FrameReject> {
    if data.len() < MAGIC.len() || data[..MAGIC.len()] != MAGIC {
        return Err(FrameReject::NotAFrame);
    }
    if data.len() < FIXED_HEADER_LEN {
        return Err(FrameReject::Truncated);
    }

    let method = Method::from_bytes(data[8], data[9]).map_err(|_| FrameReject::NotAFrame)?;
    let flags = data[10];
    let fname_len = get_u16_be(data, 11) as usize;
    let secret_len = get_u32_be(data, 13) as usize;

    // Length checks in u64: secret_len alone can approach 4 GiB.
    let meta_len_off = FIXED_HEADER_LEN + fname_len;
    if (meta_len_off + 2) as u64 > data.len() as u64 {
        return Err(FrameReject::Truncated);
    }
    let meta_len = get_u16_be(data, meta_len_off) as usize;
    let total = (meta_len_off + 2) as u64 + meta_len as u64 + secret_len as u64;
    if total > data.len() as u64 {
        return Err(FrameReject::Truncated);
    }

    let filename = std::str::from_utf8(&data[FIXED_HEADER_LEN..meta_len_off])
        .map_err(|_| FrameReject::NotAFrame)?
        .to_string();
    let meta_start = meta_len_off + 2;
    let metadata = data[meta_start..meta_start + meta_len].to_vec();
    let payload = data[meta_start + meta_len..meta_start + meta_len + secret_len].to_vec();

    Ok(ParsedFrame {
        method,
        flags,
        filename,
        metadata,
        payload,
    })
}
