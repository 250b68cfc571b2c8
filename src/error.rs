//! Error types for the documentation pipeline.
//!
//! Every failure that aborts a run is a `DocError`. Catalog-level failures
//! keep their own type (`CatalogError`, defined alongside the reader) and are
//! wrapped here, so callers can distinguish "the database said no" from
//! "there was nothing to document" or "the output directory is unusable".

use std::path::PathBuf;

use crate::catalog::CatalogError;

/// Result type for pipeline operations.
pub type DocResult<T> = Result<T, DocError>;

/// Top-level error for a documentation run.
///
/// Inference heuristics never raise: a column that cannot be matched simply
/// gets no inferred reference. Everything in this enum is fatal to the run
/// and guarantees no partial output was written.
#[derive(Debug, thiserror::Error)]
pub enum DocError {
    /// No schema name was supplied on the command line.
    #[error("no table schema supplied")]
    Usage,

    /// The ignore list / ignore regex filtered out every table.
    #[error("no tables to document in \"{schema}\"")]
    EmptySchema { schema: String },

    /// A metadata query failed (connectivity, permissions, bad schema name).
    #[error("catalog query failed: {0}")]
    CatalogQuery(#[from] CatalogError),

    /// The output directory could not be deleted or created.
    #[error("could not prepare output directory \"{path}\": {source}")]
    OutputTarget {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl DocError {
    /// Process exit code for this failure.
    ///
    /// Callers get distinct codes for usage errors, an empty admitted table
    /// set, catalog failures and output-target failures.
    pub fn exit_code(&self) -> u8 {
        match self {
            DocError::Usage => 2,
            DocError::EmptySchema { .. } => 3,
            DocError::CatalogQuery(_) => 4,
            DocError::OutputTarget { .. } => 5,
        }
    }
}
