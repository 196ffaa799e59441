//! Errors surfaced by the normalization pipeline.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::decode::DecodeError;
use crate::encode::EncodeError;
use crate::orientation::Orientation;

/// Terminal failure of a single normalize call.
///
/// Unreadable orientation metadata never shows up here: it is logged and
/// treated as [`Orientation::Normal`].
#[derive(Debug, Error)]
pub enum NormalizeError {
    /// The source bytes are not a supported raster image.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// The corrected raster could not be re-encoded.
    #[error(transparent)]
    Encode(#[from] EncodeError),

    /// Reading the source or writing the destination failed.
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The orientation needs a mirror and the active policy refuses it.
    #[error("Unsupported orientation {}: mirrored orientations are disabled", .0.value())]
    UnsupportedRotation(Orientation),
}

impl NormalizeError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        NormalizeError::Io {
            path: path.into(),
            source,
        }
    }

    /// True for failures caused by the source content rather than the filesystem.
    pub fn is_decode(&self) -> bool {
        matches!(self, NormalizeError::Decode(_))
    }
}
