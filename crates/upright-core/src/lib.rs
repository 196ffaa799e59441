//! Upright Core - EXIF orientation normalization
//!
//! Cameras and pickers store pixels in sensor order and record the intended
//! display orientation in the EXIF `Orientation` tag. This crate rewrites such
//! images so the pixels themselves are upright, then re-encodes them as JPEG
//! next to the original.
//!
//! # Pipeline
//!
//! - [`decode::read_orientation`] reads the tag (missing or broken metadata
//!   means "normal")
//! - [`orientation::Orientation::transform`] maps it to a rotation + mirror
//! - [`decode::decode_image`] produces an owned RGB raster
//! - [`transform::apply_transform`] corrects the raster
//! - [`encode::encode_decoded`] re-encodes at quality 100
//! - [`normalize()`] writes `<stem>.rotated.jpg` atomically
//!
//! All operations are synchronous; see `upright-tokio` for running them off
//! an async executor.

pub mod decode;
pub mod encode;
pub mod error;
pub mod normalize;
pub mod orientation;
pub mod output;
pub mod transform;

#[cfg(test)]
mod test_support;

pub use error::NormalizeError;
pub use normalize::{
    normalize, normalize_file, orient_bytes, NormalizeOptions, Normalized, OrientedImage,
};
pub use orientation::{Mirror, Orientation, OrientationPolicy, Rotation, Transform};
pub use output::{rotated_path, EncodedImage};
