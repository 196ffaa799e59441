//! EXIF orientation model and the tag → transform lookup.
//!
//! An EXIF `Orientation` tag (1-8) describes how the stored pixel grid must be
//! rotated and/or mirrored to display upright. [`Transform`] is the geometric
//! form of that instruction: a clockwise rotation in 90° steps, followed by an
//! optional horizontal mirror.
//!
//! # Policies
//!
//! Three policies resolve a tag into a transform:
//!
//! - [`OrientationPolicy::Exif`] applies the complete EXIF model, including the
//!   mirrored variants (2, 4, 5, 7).
//! - [`OrientationPolicy::RotationOnly`] only honors the pure rotations
//!   (3, 6, 8). Mirrored tags resolve to the identity. This matches what older
//!   capture pipelines produced and is kept for output compatibility.
//! - [`OrientationPolicy::Strict`] honors the pure rotations and rejects the
//!   mirrored tags with [`NormalizeError::UnsupportedRotation`].

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::NormalizeError;

/// EXIF orientation values (1-8).
/// See: https://exiftool.org/TagNames/EXIF.html
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum Orientation {
    /// Normal (no transformation needed).
    #[default]
    Normal = 1,
    /// Horizontal flip.
    FlipHorizontal = 2,
    /// Rotate 180 degrees.
    Rotate180 = 3,
    /// Vertical flip.
    FlipVertical = 4,
    /// Transpose (mirror across the top-left to bottom-right diagonal).
    Transpose = 5,
    /// Rotate 90 degrees clockwise.
    Rotate90CW = 6,
    /// Transverse (mirror across the top-right to bottom-left diagonal).
    Transverse = 7,
    /// Rotate 270 degrees clockwise (90 CCW).
    Rotate270CW = 8,
}

impl Orientation {
    /// All eight orientations in tag order.
    pub const ALL: [Orientation; 8] = [
        Orientation::Normal,
        Orientation::FlipHorizontal,
        Orientation::Rotate180,
        Orientation::FlipVertical,
        Orientation::Transpose,
        Orientation::Rotate90CW,
        Orientation::Transverse,
        Orientation::Rotate270CW,
    ];

    /// The raw EXIF tag value.
    #[inline]
    pub fn value(self) -> u8 {
        self as u8
    }

    /// Returns true if correcting this orientation swaps width and height.
    #[inline]
    pub fn swaps_dimensions(self) -> bool {
        matches!(
            self,
            Orientation::Transpose
                | Orientation::Rotate90CW
                | Orientation::Transverse
                | Orientation::Rotate270CW
        )
    }

    /// Returns true for the tags that involve a mirror (2, 4, 5, 7).
    #[inline]
    pub fn is_mirrored(self) -> bool {
        matches!(
            self,
            Orientation::FlipHorizontal
                | Orientation::FlipVertical
                | Orientation::Transpose
                | Orientation::Transverse
        )
    }

    /// The transform that makes an image with this tag display upright,
    /// under the complete EXIF model.
    pub fn exif_transform(self) -> Transform {
        use Mirror::Horizontal;
        use Rotation::*;

        let (rotation, mirror) = match self {
            Orientation::Normal => (Deg0, Mirror::None),
            Orientation::FlipHorizontal => (Deg0, Horizontal),
            Orientation::Rotate180 => (Deg180, Mirror::None),
            Orientation::FlipVertical => (Deg180, Horizontal),
            Orientation::Transpose => (Deg90, Horizontal),
            Orientation::Rotate90CW => (Deg90, Mirror::None),
            Orientation::Transverse => (Deg270, Horizontal),
            Orientation::Rotate270CW => (Deg270, Mirror::None),
        };
        Transform { rotation, mirror }
    }

    /// Resolve the transform for this tag under `policy`.
    ///
    /// # Errors
    ///
    /// Returns `NormalizeError::UnsupportedRotation` for mirrored tags when
    /// `policy` is [`OrientationPolicy::Strict`].
    pub fn transform(self, policy: OrientationPolicy) -> Result<Transform, NormalizeError> {
        if !self.is_mirrored() {
            return Ok(self.exif_transform());
        }

        match policy {
            OrientationPolicy::Exif => Ok(self.exif_transform()),
            OrientationPolicy::RotationOnly => {
                warn!(
                    orientation = self.value(),
                    "mirrored orientation left uncorrected under rotation-only policy"
                );
                Ok(Transform::IDENTITY)
            }
            OrientationPolicy::Strict => Err(NormalizeError::UnsupportedRotation(self)),
        }
    }
}

impl From<u32> for Orientation {
    fn from(value: u32) -> Self {
        match value {
            1 => Orientation::Normal,
            2 => Orientation::FlipHorizontal,
            3 => Orientation::Rotate180,
            4 => Orientation::FlipVertical,
            5 => Orientation::Transpose,
            6 => Orientation::Rotate90CW,
            7 => Orientation::Transverse,
            8 => Orientation::Rotate270CW,
            _ => Orientation::Normal,
        }
    }
}

/// Clockwise rotation in quarter turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Rotation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    pub fn degrees(self) -> u16 {
        match self {
            Rotation::Deg0 => 0,
            Rotation::Deg90 => 90,
            Rotation::Deg180 => 180,
            Rotation::Deg270 => 270,
        }
    }

    /// 90° and 270° rotations swap the output width and height.
    #[inline]
    pub fn swaps_dimensions(self) -> bool {
        matches!(self, Rotation::Deg90 | Rotation::Deg270)
    }
}

/// Mirror applied after the rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Mirror {
    #[default]
    None,
    /// Reverse the order of columns.
    Horizontal,
}

/// A rotation followed by an optional mirror.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Transform {
    pub rotation: Rotation,
    pub mirror: Mirror,
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        rotation: Rotation::Deg0,
        mirror: Mirror::None,
    };

    pub fn new(rotation: Rotation, mirror: Mirror) -> Self {
        Self { rotation, mirror }
    }

    #[inline]
    pub fn is_identity(self) -> bool {
        self == Self::IDENTITY
    }
}

/// How mirrored orientation tags are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrientationPolicy {
    /// Apply every EXIF orientation, mirrors included.
    #[default]
    Exif,
    /// Apply 90/180/270 rotations only; mirrored tags are left as-is.
    RotationOnly,
    /// Apply 90/180/270 rotations only; mirrored tags are an error.
    Strict,
}
