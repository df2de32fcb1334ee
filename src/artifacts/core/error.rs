use thiserror::Error;

/// Fatal failure classes of a comparison run.
///
/// The engine never prints diagnostics and never exits the process; every
/// failure is carried up to the binary boundary, which renders it once and
/// sets a non-zero exit code.
#[derive(Debug, Error)]
pub enum CompareError {
    #[error("file '{path}' not found")]
    InputNotFound { path: String },
    #[error("cannot read file '{path}': {source}")]
    InputUnreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot extract a name and version from file name '{filename}'")]
    UnparseableIdentity { filename: String },
}
