//! Error types for the startup load path.
//!
//! The query path has no error channel of its own: a scan over the
//! immutable in-memory store cannot fail, and "no matches" is a normal
//! empty result. The only failure mode this service owns is the
//! startup dataset load, which the entry point treats as fatal.

use std::path::PathBuf;

use thiserror::Error;

/// Failure while loading the locations dataset at startup.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The dataset file could not be read.
    #[error("failed to read locations dataset {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The dataset file content is malformed.
    #[error("failed to parse locations dataset {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}
