//! Record Data Types
//!
//! The record entity and the outcome values reported by store mutations.

use serde::Serialize;
use std::fmt;

/// Store-assigned record identifier.
///
/// Stored ids are always positive. Lookups accept any integer a user types, so a
/// zero or negative id is simply never found.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct RecordId(pub i32);

impl RecordId {
    /// The id handed out by an empty store.
    pub const FIRST: RecordId = RecordId(1);

    /// Saturates at `i32::MAX`; the store never hands out ids past that limit.
    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single sentence-like entry.
///
/// `id` is fixed at construction; only `author` and `content` change afterwards.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Record {
    id: RecordId,
    pub author: String,
    pub content: String,
}

impl Record {
    pub fn new(id: RecordId, author: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id,
            author: author.into(),
            content: content.into(),
        }
    }

    pub fn id(&self) -> RecordId {
        self.id
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ID: {}", self.id)?;
        writeln!(f, "Author: {}", self.author)?;
        writeln!(f, "Data: {}", self.content)
    }
}

/// Result of `RecordStore::remove`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Removal {
    Removed(RecordId),
    NotFound(RecordId),
}

impl fmt::Display for Removal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Removal::Removed(_) => write!(f, "The record was removed."),
            Removal::NotFound(id) => write!(f, "No record found with ID: {}.", id),
        }
    }
}

/// Result of `RecordStore::update`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Update {
    Updated(RecordId),
    NotFound(RecordId),
}

impl fmt::Display for Update {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Update::Updated(id) => write!(f, "Record with ID {} has been updated.", id),
            Update::NotFound(id) => write!(f, "No record found with ID {}.", id),
        }
    }
}
