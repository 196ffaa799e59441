//! EXIF orientation lookup.
//!
//! Metadata problems never fail a normalization: a missing EXIF block, an
//! unreadable one, or an out-of-range tag all resolve to
//! [`Orientation::Normal`].

use std::io::Cursor;

use exif::{In, Reader, Tag};
use tracing::{debug, trace};

use crate::orientation::Orientation;

/// Read the EXIF orientation of an encoded image.
///
/// Supports every container kamadak-exif understands (JPEG, TIFF, PNG, WebP,
/// HEIF). Returns `Orientation::Normal` if no orientation can be determined.
pub fn read_orientation(bytes: &[u8]) -> Orientation {
    match read_orientation_tag(bytes) {
        Ok(Some(value)) => Orientation::from(value),
        Ok(None) => {
            trace!("no orientation tag, assuming normal");
            Orientation::Normal
        }
        Err(exif::Error::NotFound(_)) => {
            trace!("no EXIF block, assuming normal");
            Orientation::Normal
        }
        Err(e) => {
            debug!(error = %e, "unreadable EXIF metadata, assuming normal orientation");
            Orientation::Normal
        }
    }
}

/// Raw orientation tag value from the primary image, if present.
fn read_orientation_tag(bytes: &[u8]) -> Result<Option<u32>, exif::Error> {
    let mut cursor = Cursor::new(bytes);
    let exif = Reader::new().read_from_container(&mut cursor)?;

    Ok(exif
        .get_field(Tag::Orientation, In::PRIMARY)
        .and_then(|field| field.value.get_uint(0)))
}
