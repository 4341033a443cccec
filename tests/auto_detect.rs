// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/hushcore

//! Auto-detection of embedding parameters during extraction.

use hush_core::{embed, extract, EmbedOptions, Method, MethodKind, StegoError};

fn pcm_cover(sample_bytes: usize) -> Vec<u8> {
    let mut samples = Vec::with_capacity(sample_bytes);
    for i in 0..sample_bytes / 2 {
        samples.extend_from_slice(&(i as u16).to_le_bytes());
    }
    hush_core::audio::wav::write_pcm_container(&samples, 44100)
}

#[test]
fn every_method_detected_without_hint() {
    let cover = pcm_cover(80_000);
    for method in [
        Method::Lsb { k: 1 },
        Method::Lsb { k: 2 },
        Method::Lsb { k: 3 },
        Method::Lsb { k: 4 },
        Method::Parity,
    ] {
        let options = EmbedOptions {
            method,
            ..Default::default()
        };
        let out = embed(&cover, b"detect me", "d.txt", &options).unwrap();
        let found = extract(&out.stego, None, None).unwrap();
        assert_eq!(found.secret, b"detect me", "auto-detect failed for {method:?}");
    }
}

#[test]
fn wrong_hint_still_succeeds() {
    let cover = pcm_cover(80_000);
    let options = EmbedOptions {
        method: Method::Lsb { k: 3 },
        ..Default::default()
    };
    let out = embed(&cover, b"hinted", "h.txt", &options).unwrap();

    // The hint only reorders candidates; a wrong one must not lose the frame.
    let found = extract(&out.stego, None, Some(MethodKind::Parity)).unwrap();
    assert_eq!(found.secret, b"hinted");
    let found = extract(&out.stego, None, Some(MethodKind::Lsb)).unwrap();
    assert_eq!(found.secret, b"hinted");
}

#[test]
fn keyed_start_found_with_key_lost_without() {
    let cover = pcm_cover(120_000);
    let options = EmbedOptions {
        method: Method::Lsb { k: 3 },
        key: Some("x".to_string()),
        keyed_start: true,
        ..Default::default()
    };
    let out = embed(&cover, b"scattered", "s.txt", &options).unwrap();

    let found = extract(&out.stego, Some("x"), None).unwrap();
    assert_eq!(found.secret, b"scattered");

    // Without the key the start position cannot be derived.
    assert_eq!(extract(&out.stego, Some(""), None), Err(StegoError::NoPayloadFound));
    assert_eq!(extract(&out.stego, None, None), Err(StegoError::NoPayloadFound));

    // A different key derives a different start.
    assert_eq!(
        extract(&out.stego, Some("not-x"), None),
        Err(StegoError::NoPayloadFound)
    );
}

#[test]
fn keyed_start_with_obfuscation_roundtrips() {
    let cover = pcm_cover(120_000);
    let options = EmbedOptions {
        method: Method::Parity,
        key: Some("double-duty".to_string()),
        obfuscate: true,
        keyed_start: true,
        ..Default::default()
    };
    let secret = b"both flags set".to_vec();
    let out = embed(&cover, &secret, "b.txt", &options).unwrap();
    let found = extract(&out.stego, Some("double-duty"), None).unwrap();
    assert_eq!(found.secret, secret);
}

#[test]
fn extraction_key_is_harmless_for_unkeyed_embeds() {
    let cover = pcm_cover(60_000);
    let options = EmbedOptions {
        method: Method::Lsb { k: 2 },
        ..Default::default()
    };
    let out = embed(&cover, b"plain", "p.txt", &options).unwrap();

    // Start 0 is always trialled first, so a supplied key changes nothing.
    let found = extract(&out.stego, Some("irrelevant"), None).unwrap();
    assert_eq!(found.secret, b"plain");
}

#[test]
fn hint_does_not_override_frame_parameters() {
    let cover = pcm_cover(60_000);
    let options = EmbedOptions {
        method: Method::Parity,
        ..Default::default()
    };
    let out = embed(&cover, b"parity bits", "q.txt", &options).unwrap();
    let found = extract(&out.stego, None, Some(MethodKind::Lsb)).unwrap();
    assert_eq!(found.secret, b"parity bits");
}
