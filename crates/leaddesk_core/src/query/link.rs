//! Cross-reference resolution with an explicit unknown path.
//!
//! Foreign keys in this data set carry no referential integrity: a deal may
//! point at a contact that was deleted or never existed. Display code needs
//! a typed "unknown" outcome instead of a truthiness check, so resolution
//! never fails and never panics.

use crate::repo::Record;

/// Outcome of resolving an optional record reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Linked<'a, T> {
    /// The reference points at a live record.
    Known(&'a T),
    /// Reference absent, or no record with that id exists.
    Unknown,
}

impl<'a, T> Linked<'a, T> {
    /// Returns the record when known.
    pub fn record(self) -> Option<&'a T> {
        match self {
            Self::Known(record) => Some(record),
            Self::Unknown => None,
        }
    }

    pub fn is_known(self) -> bool {
        matches!(self, Self::Known(_))
    }
}

/// Resolves an optional id against a record snapshot.
pub fn resolve_link<'a, T: Record>(records: &'a [T], id: Option<&str>) -> Linked<'a, T> {
    let Some(id) = id else {
        return Linked::Unknown;
    };
    records
        .iter()
        .find(|record| record.id() == id)
        .map_or(Linked::Unknown, Linked::Known)
}
