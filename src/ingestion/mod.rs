//! Ingestion Module
//!
//! Turns a remote text document into a batch of records.
//!
//! ## Workflow
//! 1. **Allocate**: Reads the store's next id once, before any network traffic.
//! 2. **Download**: Fetches the document body through a `TextSource` (HTTP by default).
//! 3. **Segment**: Splits the body on `.`, drops empty pieces and the trailing piece,
//!    and normalizes whitespace.
//! 4. **Store**: Pairs each fragment with a synthetic author from a `NameSource` and
//!    appends the batch to the `RecordStore`.
//!
//! Transport failures surface as `IngestError` and never touch the store.

pub mod names;
pub mod pipeline;
pub mod segment;
pub mod source;
pub mod types;
