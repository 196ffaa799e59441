//! Image encoding for normalized output.
//!
//! Output is always baseline JPEG, whatever the source container was.

mod jpeg;

pub use jpeg::{encode_decoded, encode_jpeg, EncodeError, DEFAULT_QUALITY};
