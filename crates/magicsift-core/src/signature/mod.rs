//! Signature and match record types.
//!
//! A [`SignatureDef`] pairs a human-readable label with the byte pattern that
//! identifies it. Compiled-in signatures borrow `'static` data so the builtin
//! table costs nothing to expose; signatures loaded at runtime own their bytes.

pub mod builtin;

use crate::error::{Error, Result};
use std::borrow::Cow;
use std::fmt;

/// Suffix appended to the label of a match found in reversed orientation
const REVERSED_SUFFIX: &str = " (reversed)";

/// A named byte pattern to search for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureDef {
    label: Cow<'static, str>,
    pattern: Cow<'static, [u8]>,
}

impl SignatureDef {
    /// Creates a signature from owned data.
    ///
    /// Fails if either the label or the pattern is empty.
    pub fn new(label: impl Into<String>, pattern: impl Into<Vec<u8>>) -> Result<Self> {
        let label = label.into();
        let pattern = pattern.into();

        if label.is_empty() {
            return Err(Error::EmptyLabel);
        }
        if pattern.is_empty() {
            return Err(Error::empty_pattern(label));
        }

        Ok(Self {
            label: Cow::Owned(label),
            pattern: Cow::Owned(pattern),
        })
    }

    /// Creates a signature from static data, usable in const context.
    ///
    /// Panics (at compile time when used in a `static`) if either part is empty.
    pub const fn from_static(label: &'static str, pattern: &'static [u8]) -> Self {
        assert!(!label.is_empty(), "signature label must not be empty");
        assert!(!pattern.is_empty(), "signature pattern must not be empty");

        Self {
            label: Cow::Borrowed(label),
            pattern: Cow::Borrowed(pattern),
        }
    }

    /// Returns the signature label
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the pattern bytes
    pub fn pattern(&self) -> &[u8] {
        &self.pattern
    }

    /// Returns a freshly allocated, byte-reversed copy of the pattern
    pub fn reversed_pattern(&self) -> Vec<u8> {
        reverse_bytes(&self.pattern)
    }
}

/// A signature found in scanned data
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MatchResult {
    /// Label of the matched signature
    pub label: String,
    /// True if the byte-reversed pattern matched
    pub reversed: bool,
}

impl MatchResult {
    /// Creates a new match result
    pub fn new(label: impl Into<String>, reversed: bool) -> Self {
        Self {
            label: label.into(),
            reversed,
        }
    }

    /// Human-readable description: the label, suffixed with ` (reversed)`
    /// for reversed matches
    pub fn description(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for MatchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)?;
        if self.reversed {
            f.write_str(REVERSED_SUFFIX)?;
        }
        Ok(())
    }
}

/// Returns a new buffer holding `bytes` in reverse order
pub fn reverse_bytes(bytes: &[u8]) -> Vec<u8> {
    bytes.iter().rev().copied().collect()
}
