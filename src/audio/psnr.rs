// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/hushcore

//! Peak signal-to-noise ratio over 16-bit little-endian samples.

/// Maximum magnitude of a 16-bit signed sample.
const MAX_SAMPLE: f64 = 32767.0;

/// Compute the PSNR in dB between two equal-length sample buffers.
///
/// Both buffers are interpreted as 16-bit little-endian signed samples; a
/// trailing odd byte is ignored. Returns `f64::INFINITY` when the buffers are
/// sample-identical, and `0.0` (with a warning) when the lengths differ or
/// there are no complete samples.
pub fn psnr_db(original: &[u8], modified: &[u8]) -> f64 {
    if original.len() != modified.len() {
        log::warn!(
            "psnr: length mismatch (original {} bytes, modified {} bytes)",
            original.len(),
            modified.len()
        );
        return 0.0;
    }

    let sample_count = original.len() / 2;
    if sample_count == 0 {
        return 0.0;
    }

    let mut mse = 0.0f64;
    for (a, b) in original
        .chunks_exact(2)
        .zip(modified.chunks_exact(2))
    {
        let sa = i16::from_le_bytes([a[0], a[1]]) as f64;
        let sb = i16::from_le_bytes([b[0], b[1]]) as f64;
        let diff = sa - sb;
        mse += diff * diff;
    }
    mse /= sample_count as f64;

    if mse == 0.0 {
        return f64::INFINITY;
    }

    let psnr = 10.0 * (MAX_SAMPLE * MAX_SAMPLE / mse).log10();
    log::debug!("psnr: mse={mse:.6} psnr={psnr:.2} dB over {sample_count} samples");
    psnr
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_buffers_are_infinite() {
        let buf = vec![0x12u8, 0x34, 0x56, 0x78];
        assert_eq!(psnr_db(&buf, &buf), f64::INFINITY);
    }

    #[test]
    fn length_mismatch_is_zero() {
        assert_eq!(psnr_db(&[0, 0], &[0, 0, 0, 0]), 0.0);
    }

    #[test]
    fn empty_buffers_are_zero() {
        assert_eq!(psnr_db(&[], &[]), 0.0);
        // A single stray byte holds no complete sample.
        assert_eq!(psnr_db(&[7], &[9]), 0.0);
    }

    #[test]
    fn single_lsb_flip_per_sample() {
        // Every sample differs by exactly 1: MSE = 1.
        let original = vec![0u8, 0, 0, 0];
        let modified = vec![1u8, 0, 1, 0];
        let expected = 10.0 * (32767.0f64 * 32767.0).log10();
        let got = psnr_db(&original, &modified);
        assert!((got - expected).abs() < 1e-9, "got {got}, expected {expected}");
    }

    #[test]
    fn larger_error_lowers_psnr() {
        let original = vec![0u8; 8];
        let small = vec![1u8, 0, 0, 0, 0, 0, 0, 0];
        let large = vec![0u8, 1, 0, 0, 0, 0, 0, 0]; // high-byte flip = 256
        assert!(psnr_db(&original, &small) > psnr_db(&original, &large));
    }
}
