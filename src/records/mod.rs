//! Record Store Module
//!
//! Owns the in-memory collection of sentence records and provides CRUD over it.
//!
//! ## Core Concepts
//! - **Ordering**: Records are kept in insertion order, never sorted by id.
//! - **Identity**: Ids are assigned by the store as `max(existing) + 1` (or `1` when empty).
//!   Deleting the highest id frees it for the next insert.
//! - **Ownership**: A single `RecordStore` is owned by the console session and borrowed
//!   mutably by ingestion. There is no shared or static state.

pub mod store;
pub mod types;

#[cfg(test)]
mod tests;
