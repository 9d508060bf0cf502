#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for I/O operations.
///
/// Defines [`error::IoError`] variants for file access and
/// encoding/decoding failures.
pub mod error;

/// GIF image encoding and decoding.
pub mod gif;
