//! Web Records Library
//!
//! This library crate defines the modules behind the `web-records` console binary (`main.rs`).
//!
//! ## Modules
//! - **`records`**: The in-memory record store. Assigns ids and provides add, remove,
//!   update, and listing in insertion order.
//! - **`ingestion`**: Downloads a text document, splits it into sentence fragments, and
//!   bulk-inserts them with synthetic author names.
//! - **`console`**: The interactive menu loop that dispatches user selections to the
//!   store and to ingestion.
//! - **`config`**: Command-line options.

pub mod config;
pub mod console;
pub mod ingestion;
pub mod records;
