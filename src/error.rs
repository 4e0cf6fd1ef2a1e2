//! Error types crossing the assembler boundary.

use thiserror::Error;

/// Failure modes of a single report build.
///
/// Degraded inputs are not failures: a statistics fetch that comes back empty
/// or an unreadable annotation file both still produce a document.  Only an
/// unusable chart handle or a render or write problem aborts the pipeline.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The chart handle was empty.  Nothing was fetched or written.
    #[error("chart image handle is empty")]
    MissingChart,
    /// Document construction or PDF rendering failed.
    #[error("failed to render report")]
    Render(#[from] genpdf::error::Error),
    /// The destination file could not be created or written.
    #[error("failed to write report file")]
    Io(#[from] std::io::Error),
}
