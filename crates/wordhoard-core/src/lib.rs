//! Core types for wordhoard: probabilistic dictionaries and the pieces every
//! search shares.
//!
//! # Architecture
//!
//! - [`bloom`] -- Bloom filter with a stable hash and binary encoding
//! - [`dictionary`] -- Layered-filter word/prefix oracle (build, query, save, load)
//! - [`format`] -- Binary dictionary header parsing and validation
//! - [`cancel`] -- Deadline/cancellation token checked by every search loop
//! - [`alphabet`] -- Word validation and the Morse / T9 codebooks

pub mod alphabet;
pub mod bloom;
pub mod cancel;
pub mod dictionary;
pub mod format;

pub use cancel::CancelToken;
pub use dictionary::{Dictionary, DictionaryBuilder, DictionaryOptions};

/// Error type for parsing a serialized dictionary.
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    #[error("invalid magic number in dictionary header")]
    InvalidMagic,
    #[error("data too short: expected at least {expected} bytes, got {actual}")]
    TooShort { expected: usize, actual: usize },
    #[error("unsupported dictionary format version {0}")]
    UnsupportedVersion(u16),
    #[error("saved dictionary contains {actual} filters, expected {expected}")]
    FilterCount { expected: usize, actual: usize },
    #[error("invalid filter: {0}")]
    InvalidFilter(String),
}

/// Error type for loading or saving a dictionary.
#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("malformed dictionary: {0}")]
    Format(#[from] FormatError),
    #[error("dictionary I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Error type for searches that were stopped before completing.
///
/// Searches never fail for lack of matches; an empty result is returned
/// instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("search cancelled")]
    Cancelled,
    #[error("search deadline exceeded")]
    DeadlineExceeded,
}
