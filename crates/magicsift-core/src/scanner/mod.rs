//! Searching data for known signatures.
//!
//! A search runs the [`engine`] over the four [`Partition`]s of a
//! [`SignatureDatabase`] and concatenates their results in
//! [`Partition::ALL`] order. The output is fully determined by the input
//! bytes and the database, whichever strategy executes the partitions.
//!
//! ## Algorithm Overview
//!
//! 1. Reject absent input with an empty result
//! 2. Scan every partition (in parallel by default)
//! 3. Wait for all partitions to finish
//! 4. Concatenate: static forward, static reversed, digest forward, digest reversed
//!
//! ## Extensibility
//!
//! The [`SearchStrategy`] trait controls how partitions are executed:
//!
//! ```no_run
//! use magicsift_core::scanner::{SearchStrategy, Searcher};
//! use magicsift_core::{MatchResult, SignatureDatabase};
//!
//! struct Nothing;
//!
//! impl SearchStrategy for Nothing {
//!     fn run(&self, _db: &SignatureDatabase, _data: &[u8]) -> Vec<MatchResult> {
//!         Vec::new()
//!     }
//! }
//!
//! let db = SignatureDatabase::builtin();
//! let searcher = Searcher::with_strategy(&db, Nothing);
//! assert!(searcher.search(Some(&b"%PDF"[..])).is_empty());
//! ```

pub mod engine;
mod partition;

use crate::database::SignatureDatabase;
use crate::error::{Error, Result};
use crate::signature::MatchResult;
use rayon::prelude::*;
use std::path::Path;
use tracing::{debug, trace};

pub use partition::{Orientation, Partition};

/// How the four partitions of a search are executed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Execution {
    /// Scan partitions concurrently on the rayon thread pool
    #[default]
    Parallel,
    /// Scan partitions one after another on the calling thread
    Sequential,
}

/// Configuration for the searcher
#[derive(Debug, Clone, Default)]
pub struct SearcherConfig {
    /// Partition execution mode
    pub execution: Execution,
}

impl SearcherConfig {
    /// Creates a new searcher config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the execution mode
    pub fn execution(mut self, execution: Execution) -> Self {
        self.execution = execution;
        self
    }
}

/// Trait for implementing partition execution strategies
pub trait SearchStrategy: Send + Sync {
    /// Search `data` against every partition of `db`, returning results in
    /// [`Partition::ALL`] order
    fn run(&self, db: &SignatureDatabase, data: &[u8]) -> Vec<MatchResult>;
}

/// Scans all partitions concurrently and joins on their completion
#[derive(Debug, Clone, Copy, Default)]
pub struct ParallelStrategy;

impl SearchStrategy for ParallelStrategy {
    fn run(&self, db: &SignatureDatabase, data: &[u8]) -> Vec<MatchResult> {
        // Indexed collect keeps partition order regardless of scheduling.
        let partials: Vec<Vec<MatchResult>> = Partition::ALL
            .as_slice()
            .par_iter()
            .map(|partition| scan_partition(db, data, partition))
            .collect();
        partials.concat()
    }
}

/// Scans all partitions sequentially on the calling thread
#[derive(Debug, Clone, Copy, Default)]
pub struct SequentialStrategy;

impl SearchStrategy for SequentialStrategy {
    fn run(&self, db: &SignatureDatabase, data: &[u8]) -> Vec<MatchResult> {
        Partition::ALL
            .iter()
            .flat_map(|partition| scan_partition(db, data, partition))
            .collect()
    }
}

fn scan_partition(db: &SignatureDatabase, data: &[u8], partition: &Partition) -> Vec<MatchResult> {
    let matches = engine::scan(data, partition.signatures(db), partition.orientation);
    trace!("Partition {:?}: {} matches", partition, matches.len());
    matches
}

/// Searches data against a signature database
pub struct Searcher<'db> {
    db: &'db SignatureDatabase,
    strategy: Box<dyn SearchStrategy + 'db>,
}

impl<'db> Searcher<'db> {
    /// Creates a new searcher with default configuration
    pub fn new(db: &'db SignatureDatabase) -> Self {
        Self::with_config(db, SearcherConfig::default())
    }

    /// Creates a new searcher with custom configuration
    pub fn with_config(db: &'db SignatureDatabase, config: SearcherConfig) -> Self {
        match config.execution {
            Execution::Parallel => Self::with_strategy(db, ParallelStrategy),
            Execution::Sequential => Self::with_strategy(db, SequentialStrategy),
        }
    }

    /// Creates a new searcher with a custom execution strategy
    pub fn with_strategy(db: &'db SignatureDatabase, strategy: impl SearchStrategy + 'db) -> Self {
        Self {
            db,
            strategy: Box::new(strategy),
        }
    }

    /// Search possibly-absent data.
    ///
    /// `None` yields an empty result without consulting the database. An
    /// empty slice is searched normally.
    pub fn search(&self, data: Option<&[u8]>) -> Vec<MatchResult> {
        let Some(data) = data else {
            trace!("No data supplied, skipping search");
            return Vec::new();
        };
        self.search_bytes(data)
    }

    /// Search a byte slice
    pub fn search_bytes(&self, data: &[u8]) -> Vec<MatchResult> {
        debug!(
            "Searching {} bytes against {} signatures",
            data.len(),
            self.db.len()
        );
        let matches = self.strategy.run(self.db, data);
        debug!("Search complete: {} matches", matches.len());
        matches
    }

    /// Read a file and search its contents
    pub fn search_file(&self, path: impl AsRef<Path>) -> Result<Vec<MatchResult>> {
        let path = path.as_ref();
        let data = std::fs::read(path).map_err(|e| Error::file_read(path, e))?;
        Ok(self.search_bytes(&data))
    }
}

/// Search possibly-absent data for magic file bytes and known digests using
/// the default (parallel) searcher
pub fn search_data_for_magic_file_bytes(
    db: &SignatureDatabase,
    data: Option<&[u8]>,
) -> Vec<MatchResult> {
    Searcher::new(db).search(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signature::{reverse_bytes, SignatureDef};
    use pretty_assertions::assert_eq;

    const PNG: &[u8] = &[0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a];
    const PNG_REVERSED: &[u8] = &[0x0a, 0x1a, 0x0a, 0x0d, 0x47, 0x4e, 0x50, 0x89];
    const EMPTY_MD5_HEX: &str = "d41d8cd98f00b204e9800998ecf8427e";
    const EMPTY_MD5_LABEL: &str = "emptyfile.txt (ripemd160 + sha256 digest)";

    fn digest_db() -> SignatureDatabase {
        SignatureDatabase::from_hash_list(&format!("{}  emptyfile.txt\n", EMPTY_MD5_HEX)).unwrap()
    }

    fn wrap(parts: &[&[u8]]) -> Vec<u8> {
        let mut data = b"::".to_vec();
        for part in parts {
            data.extend_from_slice(part);
            data.extend_from_slice(b"::");
        }
        data
    }

    fn both_strategies(db: &SignatureDatabase, data: &[u8]) -> Vec<MatchResult> {
        let parallel = Searcher::new(db).search_bytes(data);
        let sequential =
            Searcher::with_config(db, SearcherConfig::new().execution(Execution::Sequential))
                .search_bytes(data);
        assert_eq!(parallel, sequential);
        parallel
    }

    #[test]
    fn test_absent_input() {
        let db = digest_db();
        assert!(search_data_for_magic_file_bytes(&db, None).is_empty());
        assert!(Searcher::new(&SignatureDatabase::builtin()).search(None).is_empty());
    }

    #[test]
    fn test_empty_input() {
        let db = digest_db();
        assert!(search_data_for_magic_file_bytes(&db, Some(&[][..])).is_empty());
    }

    #[test]
    fn test_no_signatures() {
        let db = digest_db();
        let data = b"the quick brown fox jumps over the lazy dog";
        assert!(both_strategies(&db, data).is_empty());
    }

    #[test]
    fn test_png_forward() {
        let db = SignatureDatabase::builtin();
        let data = wrap(&[PNG]);
        assert_eq!(both_strategies(&db, &data), vec![MatchResult::new("PNG Header", false)]);
    }

    #[test]
    fn test_png_reversed() {
        let db = SignatureDatabase::builtin();
        let data = wrap(&[PNG_REVERSED]);
        assert_eq!(both_strategies(&db, &data), vec![MatchResult::new("PNG Header", true)]);
    }

    #[test]
    fn test_both_orientations_not_deduplicated() {
        let db = SignatureDatabase::builtin();
        let data = wrap(&[PNG_REVERSED, PNG]);
        assert_eq!(
            both_strategies(&db, &data),
            vec![
                MatchResult::new("PNG Header", false),
                MatchResult::new("PNG Header", true),
            ]
        );
    }

    #[test]
    fn test_static_table_order() {
        let db = SignatureDatabase::builtin();
        let data = wrap(&[&b"%PDF-1.4"[..], &b"GIF89a"[..], &b"PK\x03\x04\x14"[..]]);
        let labels: Vec<String> = both_strategies(&db, &data)
            .into_iter()
            .map(|m| m.label)
            .collect();
        assert_eq!(labels, vec!["ZIP Header", "GIF Header", "PDF Header"]);
    }

    #[test]
    fn test_shared_header_reports_every_format() {
        let db = SignatureDatabase::builtin();
        let data = wrap(&[&[0xd0, 0xcf, 0x11, 0xe0, 0xa1, 0xb1, 0x1a, 0xe1]]);
        let descriptions: Vec<String> = both_strategies(&db, &data)
            .iter()
            .map(MatchResult::description)
            .collect();
        assert_eq!(descriptions, vec!["DOC Header", "XLS Header", "PPT Header"]);
    }

    #[test]
    fn test_digest_forward() {
        let db = digest_db();
        let digest = hex::decode(EMPTY_MD5_HEX).unwrap();
        let data = wrap(&[&digest]);
        assert_eq!(both_strategies(&db, &data), vec![MatchResult::new(EMPTY_MD5_LABEL, false)]);
    }

    #[test]
    fn test_partition_concatenation_order() {
        let db = digest_db();
        let digest = hex::decode(EMPTY_MD5_HEX).unwrap();
        let data = wrap(&[&reverse_bytes(&digest), PNG_REVERSED, &digest, PNG]);

        let results = both_strategies(&db, &data);
        assert_eq!(
            results,
            vec![
                MatchResult::new("PNG Header", false),
                MatchResult::new("PNG Header", true),
                MatchResult::new(EMPTY_MD5_LABEL, false),
                MatchResult::new(EMPTY_MD5_LABEL, true),
            ]
        );
        assert_eq!(results[3].description(), format!("{} (reversed)", EMPTY_MD5_LABEL));
    }

    #[test]
    fn test_deterministic_across_calls() {
        let db = digest_db();
        let data = wrap(&[PNG, b"Wikileaks", b"OggS", PNG_REVERSED]);
        let searcher = Searcher::new(&db);

        let first = searcher.search(Some(data.as_slice()));
        for _ in 0..16 {
            assert_eq!(searcher.search(Some(data.as_slice())), first);
        }
    }

    #[test]
    fn test_injected_database() {
        let db = SignatureDatabase::new(
            vec![
                SignatureDef::new("second", b"CD".to_vec()).unwrap(),
                SignatureDef::new("first", b"AB".to_vec()).unwrap(),
            ],
            Vec::new(),
        );
        let labels: Vec<String> = both_strategies(&db, b"ABCD")
            .into_iter()
            .map(|m| m.label)
            .collect();
        assert_eq!(labels, vec!["second", "first"]);
    }

    #[test]
    fn test_palindromic_pattern_matches_both_partitions() {
        let db = SignatureDatabase::new(
            vec![
                SignatureDef::new("second", b"BB".to_vec()).unwrap(),
                SignatureDef::new("first", b"AA".to_vec()).unwrap(),
            ],
            Vec::new(),
        );
        assert_eq!(
            both_strategies(&db, b"AABB"),
            vec![
                MatchResult::new("second", false),
                MatchResult::new("first", false),
                MatchResult::new("second", true),
                MatchResult::new("first", true),
            ]
        );
    }

    #[test]
    fn test_custom_strategy() {
        struct Fixed;

        impl SearchStrategy for Fixed {
            fn run(&self, _db: &SignatureDatabase, _data: &[u8]) -> Vec<MatchResult> {
                vec![MatchResult::new("fixed", false)]
            }
        }

        let db = SignatureDatabase::builtin();
        let searcher = Searcher::with_strategy(&db, Fixed);
        assert_eq!(searcher.search(Some(&b"anything"[..])), vec![MatchResult::new("fixed", false)]);
        assert!(searcher.search(None).is_empty());
    }

    #[test]
    fn test_search_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blob.bin");
        std::fs::write(&path, wrap(&[PNG])).unwrap();

        let db = SignatureDatabase::builtin();
        let searcher = Searcher::new(&db);
        assert_eq!(
            searcher.search_file(&path).unwrap(),
            vec![MatchResult::new("PNG Header", false)]
        );
        assert!(matches!(
            searcher.search_file(dir.path().join("missing.bin")),
            Err(Error::FileRead { .. })
        ));
    }
}
