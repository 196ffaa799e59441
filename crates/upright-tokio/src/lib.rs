//! Upright Tokio - async bindings for upright-core
//!
//! Decoding, rotating and re-encoding a multi-megapixel photo takes long
//! enough that it must not run on an async worker thread. These functions
//! move the whole pipeline onto tokio's blocking pool and resolve once it
//! has finished.
//!
//! # Cancellation
//!
//! Dropping a returned future before it resolves does not stop the
//! normalization: the blocking task runs to completion (or failure) and its
//! result is discarded. Callers that want to cancel must do so before calling.
//!
//! # Usage
//!
//! ```ignore
//! use upright_tokio::{normalize_file, NormalizeOptions};
//!
//! let outcome = normalize_file(picked_path, NormalizeOptions::default()).await?;
//! hand_to_app(outcome.into_path());
//! ```

use std::path::PathBuf;

use thiserror::Error;
use tokio::task::{self, JoinError};
use tracing::debug;

pub use upright_core::{NormalizeError, NormalizeOptions, Normalized, OrientedImage};

/// Errors returned by the async entry points.
#[derive(Debug, Error)]
pub enum Error {
    /// The pipeline itself failed.
    #[error(transparent)]
    Normalize(#[from] NormalizeError),

    /// The blocking task panicked or the runtime shut down under it.
    #[error("normalization worker failed: {0}")]
    Worker(#[from] JoinError),
}

impl Error {
    /// The pipeline error, if this is not a worker failure.
    pub fn as_normalize(&self) -> Option<&NormalizeError> {
        match self {
            Error::Normalize(err) => Some(err),
            Error::Worker(_) => None,
        }
    }
}

/// Normalize bytes already read from `source_path`; see [`upright_core::normalize()`].
pub async fn normalize(
    bytes: Vec<u8>,
    source_path: PathBuf,
    options: NormalizeOptions,
) -> Result<PathBuf, Error> {
    run_blocking(move || upright_core::normalize(&bytes, &source_path, &options)).await
}

/// Read and normalize a file, passing videos through; see
/// [`upright_core::normalize_file()`].
pub async fn normalize_file(
    path: PathBuf,
    options: NormalizeOptions,
) -> Result<Normalized, Error> {
    run_blocking(move || upright_core::normalize_file(&path, &options)).await
}

/// In-memory variant; see [`upright_core::orient_bytes()`].
pub async fn orient_bytes(
    bytes: Vec<u8>,
    options: NormalizeOptions,
) -> Result<OrientedImage, Error> {
    run_blocking(move || upright_core::orient_bytes(&bytes, &options)).await
}

async fn run_blocking<T, F>(job: F) -> Result<T, Error>
where
    F: FnOnce() -> Result<T, NormalizeError> + Send + 'static,
    T: Send + 'static,
{
    let span = tracing::Span::current();
    let result = task::spawn_blocking(move || span.in_scope(job)).await?;

    if let Err(err) = &result {
        debug!(error = %err, "normalization failed");
    }
    Ok(result?)
}
