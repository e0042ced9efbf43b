//! The signature database.
//!
//! A [`SignatureDatabase`] holds two ordered tables: the builtin file format
//! signatures and the digest signatures loaded from a hash list. It is built
//! once and never mutated afterwards, so it can be shared freely between scan
//! workers.

pub mod hashlist;

use crate::error::Result;
use crate::signature::{builtin, SignatureDef};
use std::borrow::Cow;
use std::path::Path;
use tracing::debug;

/// Which of the two tables a signature belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    /// Compiled-in file format signatures
    Static,
    /// Signatures loaded from the digest hash list
    Digest,
}

/// Immutable collection of static and digest signatures
#[derive(Debug, Clone)]
pub struct SignatureDatabase {
    static_table: Cow<'static, [SignatureDef]>,
    digest_table: Vec<SignatureDef>,
}

impl Default for SignatureDatabase {
    fn default() -> Self {
        Self::builtin()
    }
}

impl SignatureDatabase {
    /// Creates a database from explicit tables
    pub fn new(static_table: Vec<SignatureDef>, digest_table: Vec<SignatureDef>) -> Self {
        Self {
            static_table: Cow::Owned(static_table),
            digest_table,
        }
    }

    /// Creates a database holding only the builtin signatures
    pub fn builtin() -> Self {
        Self::with_digests(Vec::new())
    }

    /// Creates a database of the builtin signatures plus the given digests
    pub fn with_digests(digest_table: Vec<SignatureDef>) -> Self {
        Self {
            static_table: Cow::Borrowed(builtin::signatures()),
            digest_table,
        }
    }

    /// Builds the database from hash list content
    pub fn from_hash_list(content: &str) -> Result<Self> {
        Ok(Self::with_digests(hashlist::parse(content)?))
    }

    /// Builds the database from a hash list file.
    ///
    /// Any error here means the database must not be used.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let db = Self::with_digests(hashlist::load(path)?);
        debug!(
            "Signature database ready: {} static, {} digest",
            db.static_table.len(),
            db.digest_table.len()
        );
        Ok(db)
    }

    /// Returns the requested table
    pub fn table(&self, table: Table) -> &[SignatureDef] {
        match table {
            Table::Static => &self.static_table,
            Table::Digest => &self.digest_table,
        }
    }

    /// Returns the static signature table
    pub fn static_signatures(&self) -> &[SignatureDef] {
        self.table(Table::Static)
    }

    /// Returns the digest signature table
    pub fn digest_signatures(&self) -> &[SignatureDef] {
        self.table(Table::Digest)
    }

    /// Iterates over all signatures, static table first
    pub fn iter(&self) -> impl Iterator<Item = (Table, &SignatureDef)> + '_ {
        let statics = self.static_table.iter().map(|s| (Table::Static, s));
        let digests = self.digest_table.iter().map(|s| (Table::Digest, s));
        statics.chain(digests)
    }

    /// Total number of signatures in both tables
    pub fn len(&self) -> usize {
        self.static_table.len() + self.digest_table.len()
    }

    /// Returns true if both tables are empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
