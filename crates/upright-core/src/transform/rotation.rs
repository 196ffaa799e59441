//! Quarter-turn rotation about the image center.
//!
//! Quarter turns are exact pixel permutations, so the `image` crate's
//! `imageops` do the work directly on the decoded buffer:
//!
//! ```text
//! 90° CW:   dst(x, y) = src(y, h - 1 - x)      dst is h × w
//! 270° CW:  dst(x, y) = src(w - 1 - y, x)      dst is h × w
//! 180°:     dst(x, y) = src(w - 1 - x, h - 1 - y)
//! ```
//!
//! 180° keeps the dimensions and runs in place.

use image::imageops;

use crate::decode::{DecodeError, DecodedImage};
use crate::orientation::Rotation;

/// Rotate an image clockwise by a quarter-turn multiple.
///
/// Consumes the input; 0° and 180° reuse its buffer.
///
/// # Errors
///
/// `DecodeError::CorruptedFile` if the pixel buffer does not match the
/// image dimensions.
///
/// # Example
///
/// ```
/// use upright_core::decode::DecodedImage;
/// use upright_core::orientation::Rotation;
/// use upright_core::transform::rotate;
///
/// let image = DecodedImage::new(100, 50, vec![128u8; 100 * 50 * 3]);
/// let rotated = rotate(image, Rotation::Deg90).unwrap();
/// assert_eq!((rotated.width, rotated.height), (50, 100));
/// ```
pub fn rotate(image: DecodedImage, rotation: Rotation) -> Result<DecodedImage, DecodeError> {
    if rotation == Rotation::Deg0 {
        return Ok(image);
    }

    let mut buffer = image.into_rgb_image()?;
    let rotated = match rotation {
        Rotation::Deg0 => buffer,
        Rotation::Deg90 => imageops::rotate90(&buffer),
        Rotation::Deg180 => {
            imageops::rotate180_in_place(&mut buffer);
            buffer
        }
        Rotation::Deg270 => imageops::rotate270(&buffer),
    };
    Ok(DecodedImage::from_rgb_image(rotated))
}
