// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/hushcore

//! # hush-core
//!
//! Pure-Rust audio steganography engine. Hides arbitrary byte payloads inside
//! digital audio containers and recovers them bit-for-bit while keeping the
//! carrier playable:
//!
//! - **PCM chunk containers** (RIFF/WAVE): embedding mutates bytes of the
//!   `data` chunk only.
//! - **Frame-coded containers** (sync-word framed, optional leading ID3
//!   block): embedding mutates bytes between frame headers; headers and
//!   metadata stay byte-identical.
//!
//! Two coding schemes are available: LSB-k (k = 1..4 bits per payload byte)
//! and parity (one bit per byte, at most one bit flipped). Both carry a
//! self-describing frame, so extraction auto-detects the parameters.
//! Optional extras: repeating-key XOR obfuscation with a checksum, and a
//! key-derived deterministic start position. The audio codec (`audio`
//! module) is std-only; the steganography layer (`stego` module) uses the
//! ecosystem PRNG/digest/checksum crates.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use hush_core::{embed, extract, EmbedOptions, Method};
//!
//! let cover = std::fs::read("track.wav").unwrap();
//! let opts = EmbedOptions { method: Method::Lsb { k: 2 }, ..Default::default() };
//! let out = embed(&cover, b"attack at dawn", "orders.txt", &opts).unwrap();
//! let found = extract(&out.stego, None, None).unwrap();
//! assert_eq!(found.secret, b"attack at dawn");
//! ```

pub mod audio;
pub mod stego;

pub use audio::error::AudioError;
pub use audio::psnr::psnr_db;
pub use audio::{AudioContainer, ContainerKind};
pub use stego::{calculate_capacity, CapacityReport};
pub use stego::{embed, extract, EmbedOptions, EmbedOutcome, Extracted};
pub use stego::{Method, MethodKind, StegoError};
