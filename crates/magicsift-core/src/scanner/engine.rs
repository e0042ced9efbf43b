//! Substring matching for a single partition.

use super::partition::Orientation;
use crate::signature::{MatchResult, SignatureDef};
use memchr::memmem;
use std::borrow::Cow;
use tracing::trace;

/// Scan `data` for every signature in `signatures`.
///
/// Each signature contributes at most one result, however often it occurs.
/// Results keep the order of `signatures`.
pub fn scan(data: &[u8], signatures: &[SignatureDef], orientation: Orientation) -> Vec<MatchResult> {
    let reversed = orientation.is_reversed();

    signatures
        .iter()
        .filter(|sig| {
            let needle: Cow<'_, [u8]> = if reversed {
                Cow::Owned(sig.reversed_pattern())
            } else {
                Cow::Borrowed(sig.pattern())
            };
            contains(data, &needle)
        })
        .map(|sig| {
            trace!("Matched '{}' (reversed: {})", sig.label(), reversed);
            MatchResult::new(sig.label(), reversed)
        })
        .collect()
}

/// Returns true if `needle` occurs contiguously in `haystack`
fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    memmem::find(haystack, needle).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sigs() -> Vec<SignatureDef> {
        vec![
            SignatureDef::new("AB", b"AB".to_vec()).unwrap(),
            SignatureDef::new("XYZ", b"XYZ".to_vec()).unwrap(),
            SignatureDef::new("QQ", b"QQ".to_vec()).unwrap(),
        ]
    }

    #[test]
    fn test_contains() {
        assert!(contains(b"hello world", b"lo w"));
        assert!(!contains(b"hello world", b"low"));
        assert!(!contains(b"", b"a"));
    }

    #[test]
    fn test_forward_scan_keeps_table_order() {
        let results = scan(b"..XYZ..AB..", &sigs(), Orientation::Forward);
        assert_eq!(
            results,
            vec![MatchResult::new("AB", false), MatchResult::new("XYZ", false)]
        );
    }

    #[test]
    fn test_reversed_scan() {
        let results = scan(b"..ZYX..AB..", &sigs(), Orientation::Reversed);
        assert_eq!(results, vec![MatchResult::new("XYZ", true)]);
    }

    #[test]
    fn test_palindrome_matches_both_orientations() {
        let data = b"zzQQzz";
        assert_eq!(scan(data, &sigs(), Orientation::Forward), vec![MatchResult::new("QQ", false)]);
        assert_eq!(scan(data, &sigs(), Orientation::Reversed), vec![MatchResult::new("QQ", true)]);
    }

    #[test]
    fn test_repeated_occurrences_reported_once() {
        let results = scan(b"ABABABAB", &sigs(), Orientation::Forward);
        assert_eq!(results, vec![MatchResult::new("AB", false)]);
    }

    #[test]
    fn test_empty_inputs() {
        assert!(scan(b"", &sigs(), Orientation::Forward).is_empty());
        assert!(scan(b"AB", &[], Orientation::Reversed).is_empty());
    }
}
