// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/hushcore

//! Embed and extract pipelines.
//!
//! Embedding: build the stored payload (checksum + XOR when obfuscating),
//! wrap it in the on-stream frame, locate the container's payload region,
//! check capacity, derive the start position, and write bits with the chosen
//! coder. Extraction reverses this without being told the parameters: it
//! trials every (method, k) candidate at start 0 and at the keyed start,
//! accepting the first candidate whose frame parses and whose embedded
//! method/k fields confirm the trial parameters.
//!
//! Candidates are independent and read-only, so the `parallel` feature can
//! trial them concurrently; the winner is still chosen in the declared
//! candidate order.

use crate::audio::{psnr, AudioContainer};
use crate::stego::error::StegoError;
use crate::stego::frame::{self, FrameReject, ParsedFrame};
use crate::stego::{bits, capacity, lsb, obfuscate, parity, schedule};
use crate::stego::{Method, MethodKind};

/// Options controlling an embed operation.
#[derive(Debug, Clone)]
pub struct EmbedOptions {
    /// Bit-encoding scheme and its depth.
    pub method: Method,
    /// Key for obfuscation and/or keyed placement. Required when either flag
    /// below is set.
    pub key: Option<String>,
    /// Checksum-prefix and XOR-obfuscate the secret before storage.
    pub obfuscate: bool,
    /// Derive the start bit from the key instead of starting at 0.
    pub keyed_start: bool,
    /// Opaque caller metadata carried in the frame (may be empty).
    pub metadata: Vec<u8>,
}

impl Default for EmbedOptions {
    fn default() -> Self {
        Self {
            method: Method::Lsb { k: 1 },
            key: None,
            obfuscate: false,
            keyed_start: false,
            metadata: Vec::new(),
        }
    }
}

/// Result of a successful embed.
#[derive(Debug, Clone)]
pub struct EmbedOutcome {
    /// The stego container: cover bytes with mutated payload positions.
    pub stego: Vec<u8>,
    /// Distortion versus the cover, over the container's PCM view.
    pub psnr_db: f64,
}

/// Result of a successful extract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extracted {
    /// The recovered secret, byte-for-byte as embedded.
    pub secret: Vec<u8>,
    /// The stored filename.
    pub filename: String,
    /// The stored opaque metadata (empty when none was embedded).
    pub metadata: Vec<u8>,
}

/// Total stream length in bits for a method over `payload_len` bytes.
///
/// This is the modulus for start positions and wrap-around; the byte
/// capacity check floors it to whole bytes separately.
fn stream_bits(payload_len: usize, method: Method) -> usize {
    match method {
        Method::Lsb { k } => lsb::capacity_bits(payload_len, k),
        Method::Parity => payload_len,
    }
}

/// Embed `secret` into `cover`, returning the stego container and its PSNR.
///
/// # Errors
/// - [`StegoError::InvalidLsbCount`] for an LSB depth outside 1..=4.
/// - [`StegoError::MissingKey`] when obfuscation or keyed placement is
///   requested without a key.
/// - [`StegoError::FieldTooLarge`] for oversize filename/metadata/secret.
/// - [`StegoError::InvalidAudio`] when the cover is not a supported container.
/// - [`StegoError::CapacityExceeded`] when the frame does not fit.
pub fn embed(
    cover: &[u8],
    secret: &[u8],
    filename: &str,
    opts: &EmbedOptions,
) -> Result<EmbedOutcome, StegoError> {
    // 1. Validate options before touching the cover.
    opts.method.validate()?;
    let key = opts.key.as_deref().unwrap_or("");
    if (opts.obfuscate || opts.keyed_start) && key.is_empty() {
        return Err(StegoError::MissingKey);
    }

    // 2. Build the stored payload.
    let stored = if opts.obfuscate {
        let mut buf = Vec::with_capacity(4 + secret.len());
        buf.extend_from_slice(&obfuscate::checksum(secret));
        buf.extend_from_slice(secret);
        obfuscate::xor_stream(&mut buf, key);
        buf
    } else {
        secret.to_vec()
    };

    // 3. Build the frame and serialise it to bits.
    let mut flags = 0u8;
    if opts.obfuscate {
        flags |= frame::FLAG_OBFUSCATED;
    }
    if opts.keyed_start {
        flags |= frame::FLAG_KEYED_START;
    }
    let frame_bytes = frame::build_frame(opts.method, flags, filename, &opts.metadata, &stored)?;
    let frame_bits = bits::bytes_to_bits(&frame_bytes);

    // 4. Parse the cover and check capacity.
    let container = AudioContainer::parse(cover)?;
    let n = container.payload_len();
    let available_bits = capacity::capacity_bytes(n, opts.method) * 8;
    if frame_bits.len() > available_bits {
        return Err(StegoError::CapacityExceeded {
            needed_bits: frame_bits.len(),
            available_bits,
        });
    }

    // 5. Start position.
    let total_bits = stream_bits(n, opts.method);
    let start = if opts.keyed_start {
        schedule::keyed_start(key, total_bits)
    } else {
        0
    };

    // 6. Write bits into a copy of the cover and measure distortion.
    let mut stego = cover.to_vec();
    match opts.method {
        Method::Lsb { k } => {
            lsb::embed(&mut stego, container.payload_indices(), &frame_bits, start, k)
        }
        Method::Parity => parity::embed(&mut stego, container.payload_indices(), &frame_bits, start),
    }

    let psnr_db = psnr::psnr_db(container.pcm_view(cover), container.pcm_view(&stego));
    log::debug!(
        "embed: {:?} frame_bits={} capacity_bits={} start={} psnr={psnr_db:.2} dB",
        opts.method,
        frame_bits.len(),
        available_bits,
        start,
    );

    Ok(EmbedOutcome { stego, psnr_db })
}

/// Outcome of trialling one (method, k) candidate.
enum Trial {
    Accepted(Box<Extracted>),
    WrongKey,
    MissingKey,
    Rejected { truncated: bool },
}

/// The fixed auto-detection order, optionally reordered by a hint.
///
/// The hinted method's candidates move to the front; nothing is removed, so
/// a wrong hint costs time, not correctness.
fn candidate_order(hint: Option<MethodKind>) -> Vec<Method> {
    let base = [
        Method::Lsb { k: 1 },
        Method::Lsb { k: 2 },
        Method::Lsb { k: 3 },
        Method::Lsb { k: 4 },
        Method::Parity,
    ];
    match hint {
        None => base.to_vec(),
        Some(kind) => {
            let (hinted, rest): (Vec<Method>, Vec<Method>) =
                base.into_iter().partition(|m| m.kind() == kind);
            hinted.into_iter().chain(rest).collect()
        }
    }
}

/// Trial one candidate: read its full bit stream, try each start position,
/// and parse the rotated stream as a frame.
fn try_candidate(
    stego: &[u8],
    container: &AudioContainer,
    method: Method,
    key: Option<&str>,
) -> Trial {
    let indices = container.payload_indices();
    let stream = match method {
        Method::Lsb { k } => lsb::extract(stego, indices, k),
        Method::Parity => parity::extract(stego, indices),
    };
    let total_bits = stream.len();

    let mut starts = vec![0usize];
    if let Some(k) = key.filter(|k| !k.is_empty()) {
        let keyed = schedule::keyed_start(k, total_bits);
        if keyed != 0 {
            starts.push(keyed);
        }
    }

    let mut truncated = false;
    for start in starts {
        let candidate_bytes = if start == 0 {
            bits::bits_to_bytes(&stream)
        } else {
            let mut rotated = Vec::with_capacity(total_bits);
            rotated.extend_from_slice(&stream[start..]);
            rotated.extend_from_slice(&stream[..start]);
            bits::bits_to_bytes(&rotated)
        };

        match frame::parse_frame(&candidate_bytes) {
            Ok(parsed) if parsed.method == method => {
                log::debug!("extract: accepted {method:?} at start {start}");
                return unpack(parsed, key);
            }
            // Magic collision with mismatched parameters: not this candidate.
            Ok(_) => {}
            Err(FrameReject::Truncated) => truncated = true,
            Err(FrameReject::NotAFrame) => {}
        }
    }
    Trial::Rejected { truncated }
}

/// De-obfuscate and verify an accepted frame's payload.
fn unpack(parsed: ParsedFrame, key: Option<&str>) -> Trial {
    if parsed.flags & frame::FLAG_OBFUSCATED == 0 {
        return Trial::Accepted(Box::new(Extracted {
            secret: parsed.payload,
            filename: parsed.filename,
            metadata: parsed.metadata,
        }));
    }

    let key = match key.filter(|k| !k.is_empty()) {
        Some(k) => k,
        None => return Trial::MissingKey,
    };

    let mut payload = parsed.payload;
    obfuscate::xor_stream(&mut payload, key);
    if payload.len() < 4 {
        // An obfuscated payload always carries the 4-byte checksum prefix.
        return Trial::Rejected { truncated: true };
    }
    let (stored_sum, secret) = payload.split_at(4);
    if stored_sum != obfuscate::checksum(secret) {
        return Trial::WrongKey;
    }
    Trial::Accepted(Box::new(Extracted {
        secret: secret.to_vec(),
        filename: parsed.filename,
        metadata: parsed.metadata,
    }))
}

/// Fold candidate trials into the final result, preserving candidate order.
fn settle(trials: impl IntoIterator<Item = Trial>) -> Result<Extracted, StegoError> {
    let mut saw_truncated = false;
    for trial in trials {
        match trial {
            Trial::Accepted(extracted) => return Ok(*extracted),
            Trial::WrongKey => return Err(StegoError::WrongKey),
            Trial::MissingKey => return Err(StegoError::MissingKey),
            Trial::Rejected { truncated } => saw_truncated |= truncated,
        }
    }
    Err(if saw_truncated {
        StegoError::MalformedFrame
    } else {
        StegoError::NoPayloadFound
    })
}

/// Extract an embedded secret from `stego`, auto-detecting the parameters.
///
/// `key` is needed to locate keyed-start payloads and to de-obfuscate; the
/// `method_hint` only reorders the candidate list.
///
/// # Errors
/// - [`StegoError::InvalidAudio`] when the input is not a supported container.
/// - [`StegoError::MissingKey`] when the found frame is obfuscated and no key
///   was supplied.
/// - [`StegoError::WrongKey`] when de-obfuscation fails the checksum.
/// - [`StegoError::NoPayloadFound`] when every candidate rejects.
/// - [`StegoError::MalformedFrame`] when the only magic matches had
///   impossible length fields.
pub fn extract(
    stego: &[u8],
    key: Option<&str>,
    method_hint: Option<MethodKind>,
) -> Result<Extracted, StegoError> {
    let container = AudioContainer::parse(stego)?;
    let candidates = candidate_order(method_hint);
    run_candidates(stego, &container, &candidates, key)
}

/// Serial candidate loop: stops at the first non-reject outcome.
#[cfg(not(feature = "parallel"))]
fn run_candidates(
    stego: &[u8],
    container: &AudioContainer,
    candidates: &[Method],
    key: Option<&str>,
) -> Result<Extracted, StegoError> {
    settle(
        candidates
            .iter()
            .map(|&method| try_candidate(stego, container, method, key)),
    )
}

/// Parallel candidate trials: all candidates are evaluated concurrently, and
/// the earliest non-reject outcome in candidate order wins, so results match
/// the serial path.
#[cfg(feature = "parallel")]
fn run_candidates(
    stego: &[u8],
    container: &AudioContainer,
    candidates: &[Method],
    key: Option<&str>,
) -> Result<Extracted, StegoError> {
    use rayon::prelude::*;

    let trials: Vec<Trial> = candidates
        .par_iter()
        .map(|&method| try_candidate(stego, container, method, key))
        .collect();
    settle(trials)
}
