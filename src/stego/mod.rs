// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/hushcore

//! Steganographic embedding and extraction.
//!
//! Two interchangeable bit-encoding schemes write into the container's
//! payload region:
//!
//! - **LSB-k** (`lsb` module): k bits per payload byte, packed into the k
//!   lowest bits.
//! - **Parity** (`parity` module): one bit per payload byte, encoded as the
//!   byte's popcount parity with at most a single bit flip.
//!
//! Both schemes carry the same self-describing frame (`frame` module), so
//! extraction auto-detects the method, depth, and start position by trial
//! parsing. Obfuscation is a repeating-key XOR with a checksum prefix
//! (`obfuscate` module); keyed placement derives a deterministic start bit
//! from the key (`schedule` module).

pub mod bits;
pub mod capacity;
pub mod error;
pub mod frame;
pub mod lsb;
pub mod obfuscate;
pub mod parity;
mod pipeline;
pub mod schedule;

pub use capacity::{calculate_capacity, CapacityReport};
pub use error::StegoError;
pub use pipeline::{embed, extract, EmbedOptions, EmbedOutcome, Extracted};

/// An embedding scheme with its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// k bits per payload byte in the k lowest bits, k in 1..=4.
    Lsb { k: u8 },
    /// One bit per payload byte as popcount parity.
    Parity,
}

/// Method identifier bytes as stored in the frame.
const METHOD_LSB: u8 = 0;
const METHOD_PARITY: u8 = 1;

impl Method {
    /// Check the parameters are in range.
    pub fn validate(self) -> Result<(), StegoError> {
        match self {
            Self::Lsb { k } if !(1..=4).contains(&k) => Err(StegoError::InvalidLsbCount(k)),
            _ => Ok(()),
        }
    }

    /// The method identifier byte stored in the frame.
    pub fn byte(self) -> u8 {
        match self {
            Self::Lsb { .. } => METHOD_LSB,
            Self::Parity => METHOD_PARITY,
        }
    }

    /// The k byte stored in the frame: the LSB depth, or 1 for parity.
    pub fn k(self) -> u8 {
        match self {
            Self::Lsb { k } => k,
            Self::Parity => 1,
        }
    }

    /// Reconstruct a method from its frame bytes.
    ///
    /// # Errors
    /// - [`StegoError::InvalidMethod`] for an unknown method byte.
    /// - [`StegoError::InvalidLsbCount`] for an out-of-range k byte (parity
    ///   requires k = 1).
    pub fn from_bytes(method: u8, k: u8) -> Result<Self, StegoError> {
        match method {
            METHOD_LSB => {
                let m = Self::Lsb { k };
                m.validate()?;
                Ok(m)
            }
            METHOD_PARITY => {
                if k != 1 {
                    return Err(StegoError::InvalidLsbCount(k));
                }
                Ok(Self::Parity)
            }
            other => Err(StegoError::InvalidMethod(other)),
        }
    }

    /// The scheme family, ignoring parameters.
    pub fn kind(self) -> MethodKind {
        match self {
            Self::Lsb { .. } => MethodKind::Lsb,
            Self::Parity => MethodKind::Parity,
        }
    }
}

/// A scheme family, used as an advisory extraction hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MethodKind {
    Lsb,
    Parity,
}
