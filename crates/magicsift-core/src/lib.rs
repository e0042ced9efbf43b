//! # magicsift-core
//!
//! A library for finding known binary signatures inside arbitrary data.
//!
//! This crate provides the core functionality for:
//! - A compiled-in table of file format magic headers and footers
//! - Loading digest signatures from a hash list
//! - Searching data for every signature in forward and byte-reversed order
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`signature`]: Signature definitions, match records and the builtin table
//! - [`database`]: The immutable signature database and hash list loader
//! - [`scanner`]: Partitioned, concurrent searching
//! - [`error`]: Error types and handling
//!
//! ## Example
//!
//! ```no_run
//! use magicsift_core::{Searcher, SignatureDatabase};
//! use std::fs;
//!
//! // Build the database once, before scanning anything
//! let db = SignatureDatabase::load("./wlhashes/ripemd160-sha256-hashes.txt")?;
//!
//! let data = fs::read("./suspicious.bin")?;
//! for result in Searcher::new(&db).search(Some(data.as_slice())) {
//!     println!("{}", result.description());
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Extensibility
//!
//! - [`SearchStrategy`]: Customize how the scan partitions are executed
//!

#![deny(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unreachable_pub)]

pub mod database;
pub mod error;
pub mod scanner;
pub mod signature;

// Re-export primary types for convenience
pub use database::{SignatureDatabase, Table};
pub use error::{Error, Result};
pub use scanner::{
    search_data_for_magic_file_bytes, Execution, Orientation, Partition, SearchStrategy,
    Searcher, SearcherConfig,
};
pub use signature::{reverse_bytes, MatchResult, SignatureDef};

/// Crate version for programmatic access
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default location of the digest hash list, relative to the working directory
pub const DEFAULT_HASH_LIST: &str = "./wlhashes/ripemd160-sha256-hashes.txt";
