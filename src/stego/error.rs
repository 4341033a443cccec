// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/hushcore

//! Error types for the steganography pipeline.
//!
//! [`StegoError`] covers all caller-surfaced failure modes from container
//! parsing through embedding and extraction. Candidate rejects during
//! auto-detection are not errors; only an exhausted search surfaces
//! [`StegoError::NoPayloadFound`] (or [`StegoError::MalformedFrame`] when a
//! magic match was seen with impossible length fields).

use crate::audio::error::AudioError;
use core::fmt;

/// Errors that can occur during embedding, extraction, or capacity queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StegoError {
    /// The cover could not be parsed as a supported audio container, or its
    /// payload region is empty.
    InvalidAudio(AudioError),
    /// The method byte does not name a known embedding scheme.
    InvalidMethod(u8),
    /// The LSB depth is outside 1..=4.
    InvalidLsbCount(u8),
    /// Obfuscation or keyed placement was requested without a key.
    MissingKey,
    /// The frame does not fit the cover's embedding capacity.
    CapacityExceeded {
        needed_bits: usize,
        available_bits: usize,
    },
    /// A frame field exceeds its fixed-width limit.
    FieldTooLarge(&'static str),
    /// Extraction exhausted every candidate without finding a frame.
    NoPayloadFound,
    /// The payload checksum did not match after de-obfuscation.
    WrongKey,
    /// A frame magic was found but its length fields exceed the available
    /// bits.
    MalformedFrame,
}

impl fmt::Display for StegoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidAudio(e) => write!(f, "invalid audio container: {e}"),
            Self::InvalidMethod(b) => write!(f, "unknown embedding method: {b}"),
            Self::InvalidLsbCount(k) => write!(f, "LSB depth must be 1..=4, got {k}"),
            Self::MissingKey => write!(f, "a key is required for this operation"),
            Self::CapacityExceeded {
                needed_bits,
                available_bits,
            } => write!(
                f,
                "payload needs {needed_bits} bits but the cover holds {available_bits}"
            ),
            Self::FieldTooLarge(field) => write!(f, "{field} exceeds its maximum size"),
            Self::NoPayloadFound => write!(f, "no embedded payload found"),
            Self::WrongKey => write!(f, "payload checksum mismatch (wrong key?)"),
            Self::MalformedFrame => write!(f, "embedded frame is malformed"),
        }
    }
}

impl std::error::Error for StegoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidAudio(e) => Some(e),
            _ => None,
        }
    }
}

impl From<AudioError> for StegoError {
    fn from(e: AudioError) -> Self {
        Self::InvalidAudio(e)
    }
}
