//! Error types for the magicsift-core library.
//!
//! Every failure the library can report lives in [`Error`]. Almost all of them
//! are configuration errors raised while building a
//! [`SignatureDatabase`](crate::SignatureDatabase); scans themselves never fail.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for magicsift operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for all magicsift operations
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Failed to read an input file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        /// Path to the file that failed to read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to read the hash list
    #[error("failed to read hash list '{path}': {source}")]
    HashListRead {
        /// Path to the hash list
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Hash list is not valid UTF-8
    #[error("hash list '{path}' is not valid UTF-8")]
    InvalidEncoding {
        /// Path to the offending hash list
        path: PathBuf,
    },

    /// A hash list line did not split into exactly two parts
    #[error("malformed hash list record on line {line_number}: expected 2 parts, got {parts}: {line:?}")]
    MalformedRecord {
        /// 1-based line number
        line_number: usize,
        /// The trimmed line content
        line: String,
        /// Number of parts produced by splitting on the separator
        parts: usize,
    },

    /// A hash list digest is not valid hexadecimal
    #[error("invalid hex digest on line {line_number}: {source}")]
    InvalidDigest {
        /// 1-based line number
        line_number: usize,
        /// Underlying decode error
        #[source]
        source: hex::FromHexError,
    },

    /// Signature label is empty
    #[error("signature label must not be empty")]
    EmptyLabel,

    /// Signature pattern is empty
    #[error("signature '{label}' has an empty pattern")]
    EmptyPattern {
        /// Label of the rejected signature
        label: String,
    },
}

impl Error {
    /// Creates a new file read error
    pub fn file_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileRead {
            path: path.into(),
            source,
        }
    }

    /// Creates a new hash list read error
    pub fn hash_list_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::HashListRead {
            path: path.into(),
            source,
        }
    }

    /// Creates a new encoding error
    pub fn invalid_encoding(path: impl Into<PathBuf>) -> Self {
        Self::InvalidEncoding { path: path.into() }
    }

    /// Creates a new malformed record error
    pub fn malformed_record(line_number: usize, line: impl Into<String>, parts: usize) -> Self {
        Self::MalformedRecord {
            line_number,
            line: line.into(),
            parts,
        }
    }

    /// Creates a new digest decode error
    pub fn invalid_digest(line_number: usize, source: hex::FromHexError) -> Self {
        Self::InvalidDigest {
            line_number,
            source,
        }
    }

    /// Creates a new empty pattern error
    pub fn empty_pattern(label: impl Into<String>) -> Self {
        Self::EmptyPattern {
            label: label.into(),
        }
    }

    /// Returns true if this error means the signature database could not be
    /// built. Only reading a scan target is not a configuration error.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::HashListRead { .. }
                | Self::InvalidEncoding { .. }
                | Self::MalformedRecord { .. }
                | Self::InvalidDigest { .. }
                | Self::EmptyLabel
                | Self::EmptyPattern { .. }
        )
    }
}
