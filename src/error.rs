use std::io;

/// Errors raised by the word search engine. Every variant is terminal for the
/// call that produced it; the inputs are deterministic so nothing is retried.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Malformed caller input: empty word, non-square board, bad min length...
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The operation needs a loaded dictionary and none has been loaded yet.
    #[error("illegal state: {0}")]
    IllegalState(&'static str),

    /// A dictionary or board source could not be read.
    #[error("cannot access {source_name}: {source}")]
    Config {
        source_name: String,
        #[source]
        source: io::Error,
    },

    /// Writing a report failed.
    #[error("output error: {0}")]
    Io(#[from] io::Error),

    #[error("failed to build dictionary index: {0}")]
    Index(#[from] fst::Error),

    #[error("malformed board file: {0}")]
    Format(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub(crate) fn config(source_name: impl Into<String>, source: io::Error) -> Self {
        Self::Config {
            source_name: source_name.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
