//! Tests for PNG encoding, validated by decoding with the image crate.

use renderer::png::{encode_auto, encode_indexed, encode_rgba};

/// Color type byte inside the IHDR chunk.
fn color_type(png: &[u8]) -> u8 {
    png[8 + 8 + 9]
}

#[test]
fn test_rgba_round_trip() {
    let pixels = [
        255, 0, 0, 255, //
        0, 255, 0, 255, //
        0, 0, 255, 255, //
        10, 20, 30, 128, //
    ];
    let png = encode_rgba(&pixels, 2, 2).unwrap();
    assert_eq!(color_type(&png), 6);

    let img = image::load_from_memory(&png).unwrap().to_rgba8();
    assert_eq!(img.dimensions(), (2, 2));
    assert_eq!(img.as_raw().as_slice(), &pixels);
}

#[test]
fn test_auto_picks_indexed_for_few_colors() {
    let pixels = [
        255, 0, 0, 255, //
        0, 255, 0, 255, //
        0, 255, 0, 255, //
        255, 0, 0, 255, //
    ];
    let png = encode_auto(&pixels, 2, 2).unwrap();
    assert_eq!(color_type(&png), 3);

    let img = image::load_from_memory(&png).unwrap().to_rgba8();
    assert_eq!(img.as_raw().as_slice(), &pixels);
}

#[test]
fn test_auto_falls_back_to_rgba_past_palette_limit() {
    // 300 unique colors cannot be indexed
    let mut pixels = Vec::with_capacity(300 * 4);
    for i in 0..300u32 {
        pixels.extend_from_slice(&[(i % 256) as u8, (i / 256) as u8, 77, 255]);
    }

    let png = encode_auto(&pixels, 300, 1).unwrap();
    assert_eq!(color_type(&png), 6);

    let img = image::load_from_memory(&png).unwrap().to_rgba8();
    assert_eq!(img.as_raw().as_slice(), pixels.as_slice());
}

#[test]
fn test_indexed_preserves_transparency() {
    let palette = [(255, 0, 0, 255), (0, 0, 0, 0)];
    let png = encode_indexed(2, 1, &palette, &[0, 1]).unwrap();

    let img = image::load_from_memory(&png).unwrap().to_rgba8();
    assert_eq!(img.get_pixel(0, 0).0, [255, 0, 0, 255]);
    assert_eq!(img.get_pixel(1, 0).0, [0, 0, 0, 0]);
}

#[test]
fn test_ihdr_dimensions() {
    let pixels = vec![0u8; 7 * 3 * 4];
    let png = encode_rgba(&pixels, 7, 3).unwrap();

    // Width and height are the first two IHDR payload words
    assert_eq!(&png[16..20], &7u32.to_be_bytes());
    assert_eq!(&png[20..24], &3u32.to_be_bytes());
}
