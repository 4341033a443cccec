// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/hushcore

//! Embedding capacity calculation.
//!
//! Capacity in whole bytes for a payload region of |P| bytes:
//! `⌊|P|·k / 8⌋` for LSB-k and `⌊|P| / 8⌋` for parity. Parity capacity
//! always equals LSB-1 capacity, and LSB capacity is monotone in k.

use crate::audio::AudioContainer;
use crate::stego::error::StegoError;
use crate::stego::Method;

/// Embeddable byte counts per method, as reported to collaborators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityReport {
    pub lsb1: usize,
    pub lsb2: usize,
    pub lsb3: usize,
    pub lsb4: usize,
    pub parity: usize,
}

/// Capacity in whole bytes for one method over a payload region of
/// `payload_len` bytes.
pub fn capacity_bytes(payload_len: usize, method: Method) -> usize {
    match method {
        Method::Lsb { k } => payload_len * k as usize / 8,
        Method::Parity => payload_len / 8,
    }
}

/// Parse `data` and report the capacities for every supported method.
///
/// # Errors
/// [`StegoError::InvalidAudio`] when the container does not parse or has an
/// empty payload region.
pub fn calculate_capacity(data: &[u8]) -> Result<CapacityReport, StegoError> {
    let container = AudioContainer::parse(data)?;
    let n = container.payload_len();
    Ok(CapacityReport {
        lsb1: capacity_bytes(n, Method::Lsb { k: 1 }),
        lsb2: capacity_bytes(n, Method::Lsb { k: 2 }),
        lsb3: capacity_bytes(n, Method::Lsb { k: 3 }),
        lsb4: capacity_bytes(n, Method::Lsb { k: 4 }),
        parity: capacity_bytes(n, Method::Parity),
    })
}
