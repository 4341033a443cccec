// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/hushcore

//! Round-trip integration tests over PCM chunk containers.

use hush_core::{embed, extract, EmbedOptions, Method, StegoError};

/// A PCM cover whose 16-bit samples count upward: sample i holds `i mod 65536`.
fn counting_cover(sample_bytes: usize) -> Vec<u8> {
    let mut samples = Vec::with_capacity(sample_bytes);
    for i in 0..sample_bytes / 2 {
        samples.extend_from_slice(&(i as u16).to_le_bytes());
    }
    hush_core::audio::wav::write_pcm_container(&samples, 44100)
}

fn opts(method: Method) -> EmbedOptions {
    EmbedOptions {
        method,
        ..Default::default()
    }
}

#[test]
fn lsb2_roundtrip_with_high_fidelity() {
    let cover = counting_cover(200_000);
    let out = embed(&cover, b"hello", "a.txt", &opts(Method::Lsb { k: 2 })).unwrap();

    assert!(out.psnr_db > 60.0, "psnr {} dB too low", out.psnr_db);

    let found = extract(&out.stego, None, None).unwrap();
    assert_eq!(found.secret, b"hello");
    assert_eq!(found.filename, "a.txt");
}

#[test]
fn all_methods_roundtrip() {
    let cover = counting_cover(64_000);
    let secret = b"the quick brown fox \x00\xFF\x80 jumps";

    for method in [
        Method::Lsb { k: 1 },
        Method::Lsb { k: 2 },
        Method::Lsb { k: 3 },
        Method::Lsb { k: 4 },
        Method::Parity,
    ] {
        let out = embed(&cover, secret, "fox.bin", &opts(method)).unwrap();
        let found = extract(&out.stego, None, None).unwrap();
        assert_eq!(found.secret, secret, "failed for {method:?}");
        assert_eq!(found.filename, "fox.bin");
    }
}

#[test]
fn obfuscated_roundtrip_and_wrong_key() {
    let cover = counting_cover(200_000);
    let secret = vec![0xFFu8; 32];
    let options = EmbedOptions {
        method: Method::Lsb { k: 4 },
        key: Some("k".to_string()),
        obfuscate: true,
        ..Default::default()
    };
    let out = embed(&cover, &secret, "bin", &options).unwrap();

    let found = extract(&out.stego, Some("k"), None).unwrap();
    assert_eq!(found.secret, secret);
    assert_eq!(found.filename, "bin");

    assert_eq!(extract(&out.stego, Some("wrong"), None), Err(StegoError::WrongKey));
}

#[test]
fn obfuscated_frame_without_key_reports_missing_key() {
    let cover = counting_cover(64_000);
    let options = EmbedOptions {
        method: Method::Lsb { k: 1 },
        key: Some("sesame".to_string()),
        obfuscate: true,
        ..Default::default()
    };
    let out = embed(&cover, b"locked", "l.txt", &options).unwrap();
    assert_eq!(extract(&out.stego, None, None), Err(StegoError::MissingKey));
}

#[test]
fn empty_secret_roundtrips() {
    let cover = counting_cover(16_000);
    let out = embed(&cover, b"", "nothing.txt", &opts(Method::Parity)).unwrap();
    let found = extract(&out.stego, None, None).unwrap();
    assert!(found.secret.is_empty());
    assert_eq!(found.filename, "nothing.txt");
}

#[test]
fn empty_filename_stored_as_default() {
    let cover = counting_cover(16_000);
    let out = embed(&cover, b"x", "", &opts(Method::Lsb { k: 1 })).unwrap();
    let found = extract(&out.stego, None, None).unwrap();
    assert_eq!(found.filename, "secret.bin");
}

#[test]
fn metadata_roundtrips() {
    let cover = counting_cover(32_000);
    let options = EmbedOptions {
        method: Method::Lsb { k: 2 },
        metadata: b"mime=application/x-test".to_vec(),
        ..Default::default()
    };
    let out = embed(&cover, b"payload", "m.bin", &options).unwrap();
    let found = extract(&out.stego, None, None).unwrap();
    assert_eq!(found.metadata, b"mime=application/x-test");
}

#[test]
fn embedding_is_deterministic() {
    let cover = counting_cover(50_000);
    let options = EmbedOptions {
        method: Method::Lsb { k: 3 },
        key: Some("stable".to_string()),
        obfuscate: true,
        keyed_start: true,
        ..Default::default()
    };
    let a = embed(&cover, b"same inputs", "s.txt", &options).unwrap();
    let b = embed(&cover, b"same inputs", "s.txt", &options).unwrap();
    assert_eq!(a.stego, b.stego);
}

#[test]
fn bytes_outside_data_chunk_untouched() {
    let mut cover = counting_cover(40_000);
    // Trailing chunk after the data chunk: outside the payload region.
    cover.extend_from_slice(b"LIST");
    cover.extend_from_slice(&8u32.to_le_bytes());
    cover.extend_from_slice(b"INFOtail");

    let out = embed(&cover, &[0xA5u8; 1000], "t.bin", &opts(Method::Lsb { k: 1 })).unwrap();
    assert_eq!(out.stego.len(), cover.len());
    assert_eq!(&out.stego[..44], &cover[..44], "header changed");
    let tail = cover.len() - 16;
    assert_eq!(&out.stego[tail..], &cover[tail..], "trailing chunk changed");

    let found = extract(&out.stego, None, None).unwrap();
    assert_eq!(found.secret, vec![0xA5u8; 1000]);
}

#[test]
fn missing_key_rejected_before_any_work() {
    let cover = counting_cover(16_000);
    for (obfuscate, keyed_start) in [(true, false), (false, true), (true, true)] {
        let options = EmbedOptions {
            method: Method::Lsb { k: 1 },
            key: None,
            obfuscate,
            keyed_start,
            ..Default::default()
        };
        assert_eq!(
            embed(&cover, b"x", "x", &options).unwrap_err(),
            StegoError::MissingKey,
            "obfuscate={obfuscate} keyed_start={keyed_start}"
        );
    }
}

#[test]
fn invalid_lsb_depth_rejected() {
    let cover = counting_cover(16_000);
    for k in [0u8, 5, 9] {
        assert_eq!(
            embed(&cover, b"x", "x", &opts(Method::Lsb { k })).unwrap_err(),
            StegoError::InvalidLsbCount(k)
        );
    }
}

#[test]
fn clean_cover_has_no_payload() {
    let cover = counting_cover(32_000);
    assert_eq!(extract(&cover, None, None), Err(StegoError::NoPayloadFound));
    assert_eq!(
        extract(&cover, Some("some-key"), None),
        Err(StegoError::NoPayloadFound)
    );
}
