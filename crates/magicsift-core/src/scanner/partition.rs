//! Scan partitions.
//!
//! A search is split into four independent units of work, one per
//! combination of table and orientation. [`Partition::ALL`] fixes the order in
//! which their results are concatenated.

use crate::database::{SignatureDatabase, Table};
use crate::signature::SignatureDef;

/// Direction in which a pattern is searched for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// The pattern as stored
    Forward,
    /// The pattern with its byte order reversed
    Reversed,
}

impl Orientation {
    /// Returns true for [`Orientation::Reversed`]
    pub fn is_reversed(self) -> bool {
        matches!(self, Self::Reversed)
    }
}

/// One table scanned in one orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Partition {
    /// Table the partition reads from
    pub table: Table,
    /// Orientation of every pattern in the partition
    pub orientation: Orientation,
}

impl Partition {
    /// All partitions in result order
    pub const ALL: [Partition; 4] = [
        Partition::new(Table::Static, Orientation::Forward),
        Partition::new(Table::Static, Orientation::Reversed),
        Partition::new(Table::Digest, Orientation::Forward),
        Partition::new(Table::Digest, Orientation::Reversed),
    ];

    /// Creates a partition descriptor
    pub const fn new(table: Table, orientation: Orientation) -> Self {
        Self { table, orientation }
    }

    /// Signatures this partition scans for
    pub fn signatures<'db>(&self, db: &'db SignatureDatabase) -> &'db [SignatureDef] {
        db.table(self.table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partition_order() {
        assert_eq!(
            Partition::ALL,
            [
                Partition::new(Table::Static, Orientation::Forward),
                Partition::new(Table::Static, Orientation::Reversed),
                Partition::new(Table::Digest, Orientation::Forward),
                Partition::new(Table::Digest, Orientation::Reversed),
            ]
        );
    }

    #[test]
    fn test_partition_signatures() {
        let db = SignatureDatabase::builtin();
        assert_eq!(Partition::ALL[1].signatures(&db).len(), db.static_signatures().len());
        assert!(Partition::ALL[3].signatures(&db).is_empty());
    }
}
