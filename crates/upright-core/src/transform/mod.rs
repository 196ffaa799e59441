//! Geometric correction of decoded rasters.
//!
//! # Transform Order
//!
//! A [`Transform`] is applied in this order:
//! 1. Rotation (clockwise, quarter turns, about the image center)
//! 2. Horizontal mirror
//!
//! Every stage takes the raster by value and returns the corrected one.
//! The pixel work is done by `image::imageops`: 90°/270° allocate a new
//! buffer and drop the old one, 180° and the mirror work in place.
//!
//! # Coordinate System
//!
//! - Origin is the top-left corner
//! - Pixels are RGB8, row-major

mod mirror;
mod rotation;

pub use mirror::mirror;
pub use rotation::rotate;

use crate::decode::{DecodeError, DecodedImage};
use crate::orientation::Transform;

/// Apply a full orientation transform.
///
/// # Errors
///
/// `DecodeError::CorruptedFile` if the pixel buffer does not match the
/// image dimensions.
pub fn apply_transform(
    image: DecodedImage,
    transform: Transform,
) -> Result<DecodedImage, DecodeError> {
    if transform.is_identity() {
        return Ok(image);
    }
    let rotated = rotate(image, transform.rotation)?;
    mirror(rotated, transform.mirror)
}


// ============================================================================
// Property-Based Tests
// ============================================================================
