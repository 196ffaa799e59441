//! Image decoding for the normalizer.
//!
//! This module provides functionality for:
//! - Reading the EXIF orientation tag without decoding pixels
//! - Decoding the compressed source into an owned RGB raster
//!
//! The two are independent: metadata is read from the original bytes, and the
//! decoder never applies orientation itself, so the transform stage stays the
//! single place where pixels are moved.

mod metadata;
mod raster;
mod types;

pub use metadata::read_orientation;
pub use raster::decode_image;
pub use types::{DecodeError, DecodedImage};
