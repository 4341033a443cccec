// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/hushcore

//! Audio container codec (std-only, no format libraries).
//!
//! Recognizes two container shapes and enumerates the byte positions the
//! steganography layer is allowed to mutate:
//!
//! - **PCM chunk container** (`wav` module): RIFF/WAVE root with typed chunks;
//!   the `data` chunk body is the payload region.
//! - **Frame-coded container** (`mpeg` module): optional leading ID3 metadata
//!   block, then audio frames located by an 11-bit sync word; the bytes after
//!   each 4-byte frame header up to the next frame form the payload region.
//!
//! Everything outside the payload region is preserved byte-identically by the
//! embedding layer. The `psnr` module measures sample-level distortion.

pub mod error;
pub mod mpeg;
pub mod psnr;
pub mod wav;

use error::{AudioError, Result};
use std::ops::Range;

/// The recognized container shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerKind {
    /// Uncompressed PCM chunk container (RIFF/WAVE).
    Pcm,
    /// Frame-coded compressed container (sync-word framed).
    Framed,
}

/// A parsed audio container: its kind and the byte offsets legal to modify.
///
/// Parsing reads format structure only; the caller keeps ownership of the
/// raw bytes and passes them back for embedding, extraction, and distortion
/// measurement.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioContainer {
    kind: ContainerKind,
    payload_indices: Vec<usize>,
    pcm_range: Range<usize>,
}

impl AudioContainer {
    /// Parse a container from raw bytes.
    ///
    /// Inputs starting with a RIFF/WAVE root take the PCM path and surface
    /// chunk-level errors. Anything else is scanned as a frame-coded stream;
    /// if no valid frame is found the input is rejected.
    ///
    /// # Errors
    /// - [`AudioError::TooShort`] / [`AudioError::TruncatedChunk`] /
    ///   [`AudioError::MissingDataChunk`] from the PCM path.
    /// - [`AudioError::UnrecognizedFormat`] when no frame sync decodes.
    /// - [`AudioError::EmptyPayloadRegion`] when the container parses but
    ///   offers no mutable bytes.
    pub fn parse(data: &[u8]) -> Result<Self> {
        if wav::is_pcm_container(data) {
            let range = wav::data_chunk_range(data)?;
            if range.is_empty() {
                return Err(AudioError::EmptyPayloadRegion);
            }
            return Ok(Self {
                kind: ContainerKind::Pcm,
                payload_indices: range.clone().collect(),
                pcm_range: range,
            });
        }

        let indices = mpeg::payload_indices(data);
        if indices.is_empty() {
            return Err(if data.len() < mpeg::FRAME_HEADER_LEN {
                AudioError::TooShort
            } else {
                AudioError::UnrecognizedFormat
            });
        }
        Ok(Self {
            kind: ContainerKind::Framed,
            payload_indices: indices,
            // No decoded sample buffer exists without transcoding; distortion
            // is measured over the whole byte stream. Frame headers are
            // byte-identical between cover and stego, contributing zero error.
            pcm_range: 0..data.len(),
        })
    }

    /// The detected container shape.
    pub fn kind(&self) -> ContainerKind {
        self.kind
    }

    /// Byte offsets into the input that embedding may mutate, in order.
    pub fn payload_indices(&self) -> &[usize] {
        &self.payload_indices
    }

    /// Number of embeddable payload bytes.
    pub fn payload_len(&self) -> usize {
        self.payload_indices.len()
    }

    /// The byte slice the distortion meter compares as 16-bit samples.
    pub fn pcm_view<'a>(&self, data: &'a [u8]) -> &'a [u8] {
        &data[self.pcm_range.clone()]
    }
}
