use thiserror::Error;

#[derive(Error, Debug)]
pub enum VocabError {
    /// Non-training lookup of a token the closed vocabulary has never seen.
    #[error("word {0:?} is not in the vocabulary")]
    KeyNotFound(String),

    /// Reverse lookup past the end of the table.
    #[error("index {index} exceeds vocab size {len} and is not a valid word index")]
    IndexOutOfRange { index: usize, len: usize },

    /// Malformed state, configuration or argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Propagated I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Binary snapshot could not be encoded or decoded.
    #[error("codec error: {0}")]
    Codec(String),
}

impl From<serde_json::Error> for VocabError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            return VocabError::Io(err.into());
        }
        VocabError::InvalidArgument(format!("malformed vocabulary state: {err}"))
    }
}

impl From<bincode::Error> for VocabError {
    fn from(err: bincode::Error) -> Self {
        VocabError::Codec(err.to_string())
    }
}
