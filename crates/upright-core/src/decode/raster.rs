//! Container-sniffing raster decode.

use std::io::Cursor;

use image::{ImageError, ImageReader};
use tracing::debug;

use super::{DecodeError, DecodedImage};

/// Decode an encoded image into an RGB8 raster.
///
/// The container is detected from the bytes; JPEG is always available and
/// PNG is compiled in as well. EXIF orientation is not applied here.
///
/// # Errors
///
/// Returns `DecodeError::InvalidFormat` for empty input or an unrecognized
/// or disabled container, and `DecodeError::CorruptedFile` if the decoder
/// rejects the data.
pub fn decode_image(bytes: &[u8]) -> Result<DecodedImage, DecodeError> {
    if bytes.is_empty() {
        return Err(DecodeError::InvalidFormat);
    }

    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    let Some(format) = reader.format() else {
        return Err(DecodeError::InvalidFormat);
    };

    let img = reader.decode().map_err(|e| match e {
        ImageError::Unsupported(_) => DecodeError::InvalidFormat,
        e => DecodeError::CorruptedFile(e.to_string()),
    })?;

    debug!(
        ?format,
        width = img.width(),
        height = img.height(),
        "decoded source image"
    );

    Ok(DecodedImage::from_rgb_image(img.into_rgb8()))
}
