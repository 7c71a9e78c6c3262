//! Integration tests for lsbkit
//!
//! Note: analyze() NEVER fails - "nothing found" is reported through scores.
//! Embedding is all-or-nothing: either the whole message is written or the
//! cover is left exactly as it was.

use image::RgbaImage;
use lsbkit::{
    analyze, bit_plane, capacity_bytes, decompose, embed, embed_bytes, embed_with_key,
    extract_exact, extract_exact_with_key, DecodeError, EmbedError, ExtractedKind, PixelBuffer,
};

/// Deterministic "photo-like" cover with smooth gradients.
fn gradient_image(width: u32, height: u32) -> PixelBuffer {
    PixelBuffer::from_fn(width, height, |x, y| {
        [
            ((x * 255) / width.max(1)) as u8,
            ((y * 255) / height.max(1)) as u8,
            (((x + y) * 127) / (width + height).max(1)) as u8,
            255,
        ]
    })
}

/// Scenario: 64x64 white image carries "HELLO WORLD".
#[test]
fn test_hello_world_scenario() {
    let cover = PixelBuffer::filled(64, 64, [255, 255, 255, 255]);
    assert!(cover.pixel_count() >= 32 + 96 / 3);

    let stego = embed(&cover, "HELLO WORLD").unwrap();
    assert_eq!(extract_exact(&stego).unwrap(), "HELLO WORLD");
}

/// Scenario: the untouched white image scores near zero.
#[test]
fn test_blank_image_low_probability() {
    let cover = PixelBuffer::filled(64, 64, [255, 255, 255, 255]);
    let result = analyze(&cover);

    assert_eq!(result.statistics.lsb_entropy, 0.0);
    assert!(result.statistics.message_probability < 0.1);
    assert!(!result.statistics.unusual_patterns);
    assert!(result.suspicious_areas.is_empty());
    assert!(result.heatmap.is_none());
}

/// Scenario: embedding moves the global LSB entropy away from the cover's.
#[test]
fn test_entropy_shifts_after_embedding() {
    let cover = PixelBuffer::filled(64, 64, [255, 255, 255, 255]);
    let before = analyze(&cover).statistics.lsb_entropy;

    let stego = embed(&cover, "HELLO WORLD").unwrap();
    let after = analyze(&stego).statistics.lsb_entropy;

    assert!(after > before);
    assert!(after > 0.01);
}

/// Round-trip across message sizes up to the capacity of the cover.
#[test]
fn test_roundtrip_various_lengths() {
    let cover = gradient_image(40, 30);
    let capacity = capacity_bytes(&cover);

    for len in [1, 2, 3, 7, 64, 255, capacity] {
        let message: String = (0..len).map(|i| char::from(b' ' + (i % 95) as u8)).collect();
        let stego = embed(&cover, &message).unwrap();
        assert_eq!(extract_exact(&stego).unwrap(), message, "length {}", len);
    }
}

#[test]
fn test_roundtrip_latin1_text() {
    let cover = gradient_image(32, 32);
    let message = "Se\u{f1}or M\u{fc}ller, \u{a1}hola! \u{a9}2024";

    let stego = embed(&cover, message).unwrap();
    assert_eq!(extract_exact(&stego).unwrap(), message);
}

/// Capacity rejection leaves the cover byte-for-byte identical.
#[test]
fn test_capacity_rejection_is_atomic() {
    let cover = gradient_image(16, 16);
    let snapshot = cover.pixels().to_vec();

    let message = "x".repeat(capacity_bytes(&cover) + 1);
    let result = embed(&cover, &message);

    assert!(matches!(result, Err(EmbedError::Capacity { .. })));
    assert_eq!(cover.pixels(), snapshot.as_slice());
}

/// Headers decoding to 0 or above 10000 are refused, never a panic.
#[test]
fn test_header_bounds() {
    let zeros = PixelBuffer::filled(64, 64, [0, 0, 0, 255]);
    assert_eq!(
        extract_exact(&zeros),
        Err(DecodeError::InvalidLength { length: 0 })
    );

    let ones = PixelBuffer::filled(64, 64, [1, 1, 1, 255]);
    assert!(matches!(
        extract_exact(&ones),
        Err(DecodeError::InvalidLength { .. })
    ));
}

/// Random-looking but header-less data never panics the extractor.
#[test]
fn test_extract_on_arbitrary_images() {
    for seed in 0..16u32 {
        let buf = PixelBuffer::from_fn(37, 23, |x, y| {
            let v = (x.wrapping_mul(2_654_435_761) ^ y.wrapping_mul(seed + 1)) as u8;
            [v, v.rotate_left(1), v.rotate_left(2), 255]
        });
        let _ = extract_exact(&buf);
        let _ = analyze(&buf);
    }
}

#[test]
fn test_bit_plane_all_white_when_bit_fixed() {
    let cover = gradient_image(20, 20);
    let raw: Vec<u8> = cover
        .pixels()
        .chunks(4)
        .flat_map(|px| [px[0] | 0x20, px[1] | 0x20, px[2] | 0x20, px[3]])
        .collect();
    let buf = PixelBuffer::new(20, 20, raw).unwrap();

    assert!(bit_plane(&buf, 5)
        .chunks()
        .all(|px| px == [255, 255, 255, 255]));
    assert_eq!(decompose(&buf)[5], bit_plane(&buf, 5));
}

/// A long text payload over a noisy cover is picked up by the detector.
#[test]
fn test_detector_recovers_text_payload() {
    // Cover LSBs are 3/8 ones, which already sits in the near-random band.
    let cover = PixelBuffer::from_fn(64, 64, |x, _| {
        let v = if x % 8 < 3 { 0x41 } else { 0x40 };
        [v, v, v, 255]
    });
    let message = "The quick brown fox jumps over the lazy dog. ".repeat(4);
    let stego = embed(&cover, &message).unwrap();

    let result = analyze(&stego);
    assert!(result.is_suspicious());
    let extracted = result.extracted.unwrap();
    assert_eq!(extracted.kind, ExtractedKind::Text);
    assert!(extracted.data.contains("quick brown fox"));
}

#[test]
fn test_keyed_roundtrip() {
    let cover = gradient_image(50, 50);
    let stego = embed_with_key(&cover, "rendezvous at 0600", b"hunter2").unwrap();

    assert_eq!(
        extract_exact_with_key(&stego, b"hunter2").unwrap(),
        "rendezvous at 0600"
    );
}

/// PNG persistence keeps every pixel value, so the payload survives.
#[test]
fn test_png_roundtrip() {
    use tempfile::tempdir;

    let dir = tempdir().unwrap();
    let path = dir.path().join("stego.png");

    let cover = gradient_image(48, 48);
    let data: Vec<u8> = (0..200).map(|i| (i * 7 % 256) as u8).collect();
    let stego = embed_bytes(&cover, &data).unwrap();

    let image =
        RgbaImage::from_raw(stego.width(), stego.height(), stego.pixels().to_vec()).unwrap();
    image.save(&path).unwrap();

    let loaded = image::open(&path).unwrap().to_rgba8();
    let (width, height) = loaded.dimensions();
    let reloaded = PixelBuffer::new(width, height, loaded.into_raw()).unwrap();

    assert_eq!(reloaded, stego);
    assert_eq!(lsbkit::extract_exact_bytes(&reloaded).unwrap(), data);
}
