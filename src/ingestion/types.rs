//! Ingestion Data Types
//!
//! The success report and the error type produced by the ingestion pipeline.

use crate::records::types::RecordId;
use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

/// Summary of a successful download.
///
/// Only the fixed success message is shown to the user; the ids are kept for logging
/// and for callers that want to inspect what was created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestReport {
    pub source_url: String,
    pub created: Vec<RecordId>,
}

impl fmt::Display for IngestReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Data was downloaded successfully.")
    }
}

/// Failure to obtain the document text.
///
/// The message is the underlying transport error text, shown to the user verbatim.
/// For HTTP failures it includes every cause in the chain, e.g.
/// `error sending request for url (...): client error (Connect): tcp connect error: Connection refused`.
#[derive(Debug, Error)]
pub enum IngestError {
    /// HTTP request failed or the server answered with an error status.
    #[error("{}", error_chain(.0))]
    Transport(#[from] reqwest::Error),

    /// A non-HTTP text source could not produce the document.
    #[error("{0}")]
    Unavailable(String),
}

/// Joins an error and all of its sources with `: `, skipping causes whose text
/// already appears in the message.
pub fn error_chain(err: &(dyn StdError + 'static)) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}
