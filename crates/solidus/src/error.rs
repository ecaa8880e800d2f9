//! Failure taxonomy for generation passes.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong while generating the accessor module.
///
/// File-level failures (`InputMissing`, `ReadFailure`, `WriteFailure`) abort
/// a single pass; candidate-level failures (`InvalidSegment`) reject one
/// route and let the pass continue. None of them are fatal to a watch
/// session, which logs and waits for the next change.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The route-tree artifact does not exist at the resolved path.
    #[error("route tree not found at {}", .path.display())]
    InputMissing { path: PathBuf },

    /// The route-tree artifact exists but could not be read.
    #[error("failed to read {}", .path.display())]
    ReadFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The generated module could not be written.
    #[error("failed to write {}", .path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A path segment cannot contribute to a legal accessor identifier or
    /// parameter name.
    #[error("segment `{segment}` cannot form an accessor identifier")]
    InvalidSegment { segment: String },
}
