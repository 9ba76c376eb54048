use std::io;

use thiserror::Error;

/// Errors from counting an input source.
///
/// All variants are terminal for the invocation: the tool reports the
/// failure and exits rather than emitting partial counts.
#[derive(Error, Debug)]
pub enum CountError {
    /// The named input could not be opened.
    #[error("failed to open '{path}': {source}")]
    Open {
        path: String,
        #[source]
        source: io::Error,
    },

    /// Reading failed mid-stream.
    #[error("read failed: {0}")]
    Stream(#[from] io::Error),

    /// File-size lookup failed while preparing a byte-count report.
    #[error("failed to stat '{path}': {source}")]
    Metadata {
        path: String,
        #[source]
        source: io::Error,
    },
}
