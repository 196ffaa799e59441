//! The orientation normalizer.
//!
//! One call runs a single sequential pipeline:
//!
//! ```text
//! read tag → resolve transform → decode → rotate/mirror → encode → write
//! ```
//!
//! Nothing is shared between calls. The raster lives only inside
//! [`orient_bytes`] and is dropped on every exit path. Every fallible stage
//! runs before the destination is touched, and the write itself is atomic, so
//! a failed call never leaves a destination file behind.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::decode::{decode_image, read_orientation};
use crate::encode::{encode_decoded, DEFAULT_QUALITY};
use crate::error::NormalizeError;
use crate::orientation::{Orientation, OrientationPolicy};
use crate::output::{rotated_path, EncodedImage, DEFAULT_SUFFIX};
use crate::transform::apply_transform;

/// Per-call settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizeOptions {
    /// JPEG quality of the output (1-100).
    pub quality: u8,
    /// How mirrored orientation tags are handled.
    pub policy: OrientationPolicy,
    /// Marker inserted into the output file name, `<stem>.<suffix>.jpg`.
    pub suffix: String,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            quality: DEFAULT_QUALITY,
            policy: OrientationPolicy::default(),
            suffix: DEFAULT_SUFFIX.to_string(),
        }
    }
}

/// Upright JPEG produced in memory.
#[derive(Debug, Clone)]
pub struct OrientedImage {
    pub bytes: Vec<u8>,
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// Tag read from the source.
    pub orientation: Orientation,
}

/// Outcome of [`normalize_file`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Normalized {
    /// An upright copy was written to this path.
    Rewritten(PathBuf),
    /// The source is a video and was left untouched.
    PassedThrough(PathBuf),
}

impl Normalized {
    /// The path the caller should hand on.
    pub fn path(&self) -> &Path {
        match self {
            Normalized::Rewritten(path) | Normalized::PassedThrough(path) => path,
        }
    }

    pub fn into_path(self) -> PathBuf {
        match self {
            Normalized::Rewritten(path) | Normalized::PassedThrough(path) => path,
        }
    }
}

/// Produce an upright JPEG from encoded image bytes, without touching disk.
///
/// # Errors
///
/// - `NormalizeError::UnsupportedRotation` under the strict policy
/// - `NormalizeError::Decode` if the bytes are not a supported image
/// - `NormalizeError::Encode` if the encoder rejects the raster
pub fn orient_bytes(
    bytes: &[u8],
    options: &NormalizeOptions,
) -> Result<OrientedImage, NormalizeError> {
    let orientation = read_orientation(bytes);
    let transform = orientation.transform(options.policy)?;

    let raster = decode_image(bytes)?;
    debug!(
        orientation = orientation.value(),
        rotation = transform.rotation.degrees(),
        mirror = ?transform.mirror,
        "applying orientation"
    );

    let upright = apply_transform(raster, transform)?;
    let (width, height) = (upright.width, upright.height);
    let bytes = encode_decoded(upright, options.quality)?;

    Ok(OrientedImage {
        bytes,
        width,
        height,
        orientation,
    })
}

/// Normalize `bytes` (read from `source_path`) and write the upright copy
/// next to the source as `<stem>.<suffix>.jpg`.
///
/// Returns the destination path. The source file is never modified.
///
/// # Errors
///
/// Everything [`orient_bytes`] returns, plus `NormalizeError::Io` if the
/// destination name cannot be derived or written.
#[instrument(skip(bytes, options), fields(len = bytes.len()))]
pub fn normalize(
    bytes: &[u8],
    source_path: &Path,
    options: &NormalizeOptions,
) -> Result<PathBuf, NormalizeError> {
    let destination = rotated_path(source_path, &options.suffix)
        .map_err(|e| NormalizeError::io(source_path, e))?;

    let oriented = orient_bytes(bytes, options)?;
    let encoded = EncodedImage::new(oriented.bytes, destination);
    encoded
        .write()
        .map_err(|e| NormalizeError::io(&encoded.destination, e))?;

    info!(
        destination = %encoded.destination.display(),
        orientation = oriented.orientation.value(),
        width = oriented.width,
        height = oriented.height,
        "normalized image"
    );
    Ok(encoded.destination)
}

/// Read `path` and normalize it, passing videos through untouched.
///
/// Videos are recognized from the file header alone; their body is never
/// read.
///
/// # Errors
///
/// `NormalizeError::Io` if the source cannot be read, otherwise as
/// [`normalize`].
#[instrument(skip(options))]
pub fn normalize_file(
    path: &Path,
    options: &NormalizeOptions,
) -> Result<Normalized, NormalizeError> {
    if is_video_file(path).map_err(|e| NormalizeError::io(path, e))? {
        debug!("video source, passing through");
        return Ok(Normalized::PassedThrough(path.to_path_buf()));
    }

    let bytes = fs::read(path).map_err(|e| NormalizeError::io(path, e))?;
    normalize(&bytes, path, options).map(Normalized::Rewritten)
}

/// Sniff the container from the first few KiB of `path`.
fn is_video_file(path: &Path) -> io::Result<bool> {
    let kind = infer::get_from_path(path)?;
    Ok(kind.is_some_and(|kind| kind.matcher_type() == infer::MatcherType::Video))
}
