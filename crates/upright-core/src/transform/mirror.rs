//! Horizontal mirroring.

use image::imageops;

use crate::decode::{DecodeError, DecodedImage};
use crate::orientation::Mirror;

/// Mirror an image in place. `Mirror::Horizontal` reverses every row.
///
/// # Errors
///
/// `DecodeError::CorruptedFile` if the pixel buffer does not match the
/// image dimensions.
pub fn mirror(image: DecodedImage, mirror: Mirror) -> Result<DecodedImage, DecodeError> {
    match mirror {
        Mirror::None => Ok(image),
        Mirror::Horizontal => {
            let mut buffer = image.into_rgb_image()?;
            imageops::flip_horizontal_in_place(&mut buffer);
            Ok(DecodedImage::from_rgb_image(buffer))
        }
    }
}
