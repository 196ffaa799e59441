//! Destination naming and atomic output writes.

use std::ffi::OsString;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use tracing::debug;

/// Default marker inserted before the `.jpg` extension.
pub const DEFAULT_SUFFIX: &str = "rotated";

/// Encoded output bound to the path it will be written to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    pub bytes: Vec<u8>,
    pub destination: PathBuf,
}

impl EncodedImage {
    pub fn new(bytes: Vec<u8>, destination: PathBuf) -> Self {
        Self { bytes, destination }
    }

    /// Write the bytes to the destination atomically.
    ///
    /// Either the complete file appears under `destination` or nothing does.
    /// An existing file at `destination` is replaced.
    pub fn write(&self) -> io::Result<()> {
        write_atomic(&self.destination, &self.bytes)
    }
}

/// Path of the normalized variant of `source`: same directory,
/// `<stem>.<suffix>.jpg`.
///
/// The result never equals `source`.
///
/// # Errors
///
/// Returns `InvalidInput` if `source` has no file name, or if `suffix` is
/// empty or contains a path separator.
pub fn rotated_path(source: &Path, suffix: &str) -> io::Result<PathBuf> {
    if suffix.is_empty() || suffix.contains(['/', '\\']) {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("invalid output suffix {suffix:?}"),
        ));
    }

    let stem = source.file_stem().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("source path {} has no file name", source.display()),
        )
    })?;

    let mut name = OsString::from(stem);
    name.push(".");
    name.push(suffix);
    name.push(".jpg");

    Ok(source.with_file_name(name))
}

fn build_temp_path(target: &Path) -> PathBuf {
    let parent = target.parent().unwrap_or_else(|| Path::new(""));
    let base = target
        .file_name()
        .map_or_else(|| "upright".to_string(), |s| s.to_string_lossy().into_owned());
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);
    let mut candidate = parent.join(format!(".{base}.{nanos}.tmp"));
    let mut counter = 0u32;
    while candidate.exists() {
        counter = counter.wrapping_add(1);
        candidate = parent.join(format!(".{base}.{nanos}.{counter}.tmp"));
    }
    candidate
}

fn replace_file(tmp_path: &Path, target: &Path) -> io::Result<()> {
    #[cfg(windows)]
    {
        match fs::rename(tmp_path, target) {
            Ok(()) => Ok(()),
            Err(err)
                if matches!(
                    err.kind(),
                    io::ErrorKind::AlreadyExists | io::ErrorKind::PermissionDenied
                ) && target.exists() =>
            {
                fs::remove_file(target)?;
                fs::rename(tmp_path, target)
            }
            Err(err) => Err(err),
        }
    }
    #[cfg(not(windows))]
    {
        fs::rename(tmp_path, target)
    }
}

fn create_temp(tmp_path: &Path) -> io::Result<fs::File> {
    fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(tmp_path)
}

fn fill_temp(mut file: fs::File, data: &[u8]) -> io::Result<()> {
    file.write_all(data)?;
    file.sync_all()
}

pub(crate) fn write_atomic(path: &Path, data: &[u8]) -> io::Result<()> {
    write_via_temp(path, &build_temp_path(path), data)
}

fn write_via_temp(path: &Path, tmp_path: &Path, data: &[u8]) -> io::Result<()> {
    // A temp file this call did not create is never removed
    let file = create_temp(tmp_path)?;

    let result = fill_temp(file, data).and_then(|()| replace_file(tmp_path, path));
    if let Err(err) = result {
        let _ = fs::remove_file(tmp_path);
        return Err(err);
    }

    debug!(path = %path.display(), bytes = data.len(), "wrote output");
    Ok(())
}
