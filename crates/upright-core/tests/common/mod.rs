//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use upright_core::decode::{decode_image, DecodedImage};
use upright_core::encode::encode_decoded;
use upright_core::transform::{mirror, rotate};
use upright_core::{Orientation, Rotation};

pub const RED: [u8; 3] = [255, 0, 0];
pub const GREEN: [u8; 3] = [0, 255, 0];
pub const BLUE: [u8; 3] = [0, 0, 255];
pub const WHITE: [u8; 3] = [255, 255, 255];

/// Red top-left, green top-right, blue bottom-left, white bottom-right.
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

/// The pixel grid a camera would store for an upright scene under `orientation`.
pub fn stored_for(upright: DecodedImage, orientation: Orientation) -> DecodedImage {
    let transform = orientation.exif_transform();
    let inverse = match transform.rotation {
        Rotation::Deg0 => Rotation::Deg0,
        Rotation::Deg90 => Rotation::Deg270,
        Rotation::Deg180 => Rotation::Deg180,
        Rotation::Deg270 => Rotation::Deg90,
    };
    let unmirrored = mirror(upright, transform.mirror).expect("mirror fixture");
    rotate(unmirrored, inverse).expect("rotate fixture")
}

pub fn jpeg(image: DecodedImage) -> Vec<u8> {
    encode_decoded(image, 100).expect("encode fixture")
}

/// APP1 segment holding a little-endian TIFF block with one Orientation entry.
pub fn exif_app1(tag: u16) -> Vec<u8> {
    let [lo, hi] = tag.to_le_bytes();
    let mut segment = vec![0xFF, 0xE1, 0x00, 0x22];
    segment.extend_from_slice(b"Exif\0\0");
    segment.extend_from_slice(&[b'I', b'I', 0x2A, 0x00, 0x08, 0x00, 0x00, 0x00]);
    segment.extend_from_slice(&[0x01, 0x00]);
    segment.extend_from_slice(&[0x12, 0x01, 0x03, 0x00, 0x01, 0x00, 0x00, 0x00]);
    segment.extend_from_slice(&[lo, hi, 0x00, 0x00]);
    segment.extend_from_slice(&[0x00, 0x00, 0x00, 0x00]);
    segment
}

pub fn tagged_jpeg(image: DecodedImage, tag: u16) -> Vec<u8> {
    let plain = jpeg(image);
    let mut out = Vec::with_capacity(plain.len() + 36);
    out.extend_from_slice(&plain[..2]);
    out.extend_from_slice(&exif_app1(tag));
    out.extend_from_slice(&plain[2..]);
    out
}

pub fn write_source(dir: &Path, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, bytes).expect("write source fixture");
    path
}

pub fn decode_file(path: &Path) -> DecodedImage {
    decode_image(&fs::read(path).expect("read output")).expect("output decodes")
}

pub fn assert_close(actual: [u8; 3], expected: [u8; 3]) {
    let close = actual
        .iter()
        .zip(expected)
        .all(|(a, e)| (*a as i16 - e as i16).abs() <= 48);
    assert!(close, "expected ~{expected:?}, got {actual:?}");
}

/// Corner colors in reading order: top-left, top-right, bottom-left, bottom-right.
pub fn corners(image: &DecodedImage) -> [[u8; 3]; 4] {
    let (w, h) = (image.width - 1, image.height - 1);
    [
        image.pixel(0, 0),
        image.pixel(w, 0),
        image.pixel(0, h),
        image.pixel(w, h),
    ]
}

pub fn assert_corners(image: &DecodedImage, expected: [[u8; 3]; 4]) {
    for (actual, expected) in corners(image).into_iter().zip(expected) {
        assert_close(actual, expected);
    }
}

/// Mean absolute per-channel difference; a cheap similarity score.
pub fn mean_abs_diff(a: &DecodedImage, b: &DecodedImage) -> f64 {
    assert_eq!((a.width, a.height), (b.width, b.height));
    let total: u64 = a
        .pixels
        .iter()
        .zip(&b.pixels)
        .map(|(x, y)| (*x as i16 - *y as i16).unsigned_abs() as u64)
        .sum();
    total as f64 / a.pixels.len() as f64
}
