use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Every failure the model, codec and dataset code can report.
///
/// Nothing in the library terminates the process; callers (such as the
/// `strata-nn` binary) decide whether an error is fatal.
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid sizing: empty shape, a zero or negative dimension, or a size
    /// that does not fit the on-disk integer width.
    #[error("allocation error: {0}")]
    Allocation(String),

    /// A file could not be opened, written, flushed or read.
    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    /// The byte stream ended early or declares values that cannot be valid.
    #[error("corrupt stream: {0}")]
    CorruptStream(String),

    /// Mismatched layer/activation counts or incompatible tensor shapes.
    #[error("shape error: {0}")]
    Shape(String),

    /// A dataset directory could not be read or holds no class folders.
    #[error("directory error: {0}")]
    Directory(String),

    /// Training inputs do not fit the network.
    #[error("training error: {0}")]
    Training(String),

    #[error("not implemented: {0}")]
    NotImplemented(&'static str),

    /// Malformed network configuration JSON.
    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),
}

impl Error {
    /// Wraps an I/O error with the name of the operation that failed.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Error {
        Error::Io { context: context.into(), source }
    }
}
