//! Synthetic fixtures for unit tests.

use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;

use crate::decode::DecodedImage;

pub const RED: [u8; 3] = [255, 0, 0];
pub const GREEN: [u8; 3] = [0, 255, 0];
pub const BLUE: [u8; 3] = [0, 0, 255];
pub const WHITE: [u8; 3] = [255, 255, 255];

pub fn solid_image(width: u32, height: u32, rgb: [u8; 3]) -> DecodedImage {
    let pixels = rgb
        .iter()
        .copied()
        .cycle()
        .take((width * height * 3) as usize)
        .collect();
    DecodedImage::new(width, height, pixels)
}

/// Four solid quadrants: red top-left, green top-right, blue bottom-left,
/// white bottom-right.
pub fn quadrant_image(width: u32, height: u32) -> DecodedImage {
    let mut pixels = Vec::with_capacity((width * height * 3) as usize);
    for y in 0..height {
        for x in 0..width {
            let color = match (x < width / 2, y < height / 2) {
                (true, true) => RED,
                (false, true) => GREEN,
                (true, false) => BLUE,
                (false, false) => WHITE,
            };
            pixels.extend_from_slice(&color);
        }
    }
    DecodedImage::new(width, height, pixels)
}

/// Every pixel distinct, for exact geometry checks.
pub fn indexed_image(width: u32, height: u32) -> DecodedImage {
    let mut pixels = Vec::with_capacity((width * height * 3) as usize);
    for y in 0..height {
        for x in 0..width {
            pixels.extend_from_slice(&[x as u8, y as u8, (x * 7 + y * 13) as u8]);
        }
    }
    DecodedImage::new(width, height, pixels)
}

pub fn encode_test_jpeg(img: &DecodedImage) -> Vec<u8> {
    let mut out = Vec::new();
    JpegEncoder::new_with_quality(Cursor::new(&mut out), 100)
        .encode(
            &img.pixels,
            img.width,
            img.height,
            image::ExtendedColorType::Rgb8,
        )
        .expect("encode fixture");
    out
}

/// APP1 segment holding a big-endian TIFF block with a single Orientation entry.
pub fn exif_app1(tag: u16) -> Vec<u8> {
    let [hi, lo] = tag.to_be_bytes();
    let mut segment = vec![0xFF, 0xE1, 0x00, 0x22];
    segment.extend_from_slice(b"Exif\0\0");
    segment.extend_from_slice(&[b'M', b'M', 0x00, 0x2A, 0x00, 0x00, 0x00, 0x08]);
    segment.extend_from_slice(&[0x00, 0x01]);
    segment.extend_from_slice(&[0x01, 0x12, 0x00, 0x03, 0x00, 0x00, 0x00, 0x01]);
    segment.extend_from_slice(&[hi, lo, 0x00, 0x00]);
    segment.extend_from_slice(&[0x00, 0x00, 0x00, 0x00]);
    segment
}

/// Splice an orientation APP1 segment right after the SOI marker.
pub fn with_orientation(jpeg: &[u8], tag: u16) -> Vec<u8> {
    assert_eq!(&jpeg[..2], &[0xFF, 0xD8], "not a JPEG");
    let mut out = Vec::with_capacity(jpeg.len() + 36);
    out.extend_from_slice(&jpeg[..2]);
    out.extend_from_slice(&exif_app1(tag));
    out.extend_from_slice(&jpeg[2..]);
    out
}

/// Channel-wise comparison with a JPEG-sized tolerance.
pub fn assert_close(actual: [u8; 3], expected: [u8; 3]) {
    let close = actual
        .iter()
        .zip(expected)
        .all(|(a, e)| (*a as i16 - e as i16).abs() <= 48);
    assert!(close, "expected ~{expected:?}, got {actual:?}");
}
