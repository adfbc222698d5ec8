//! Error reporting for the command line tool.

use std::fmt;
use std::io;
use std::path::Path;

use crate::error::VocabError;

/// Message shown to the user, with the library error kept as its source.
#[derive(Debug)]
pub struct CliError {
    pub msg: String,
    pub source: Option<VocabError>,
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.msg)
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

impl From<VocabError> for CliError {
    fn from(err: VocabError) -> Self {
        CliError {
            msg: cli_hint(&err),
            source: Some(err),
        }
    }
}

fn io_suggestion(kind: io::ErrorKind) -> Option<&'static str> {
    match kind {
        io::ErrorKind::NotFound => Some("Check that the file exists and the path is correct."),
        io::ErrorKind::PermissionDenied => Some("Check permissions on the file."),
        io::ErrorKind::InvalidData => Some("The file is not valid UTF-8 text."),
        _ => None,
    }
}

/// Describe a failed file operation, adding a suggestion for the error
/// kinds a user can act on.
pub fn format_io_error(operation: &str, path: &Path, err: &io::Error) -> String {
    let mut msg = format!("Error {operation} '{}': {err}.", path.display());
    if let Some(suggestion) = io_suggestion(err.kind()) {
        msg.push(' ');
        msg.push_str(suggestion);
    }
    msg
}

/// Wrap an error raised while working on `path`.
pub fn vocab_cli_error(operation: &str, path: &Path, err: VocabError) -> CliError {
    let msg = match &err {
        VocabError::Io(io) => format_io_error(operation, path, io),
        other => format!("Error {operation} '{}': {}", path.display(), cli_hint(other)),
    };
    CliError {
        msg,
        source: Some(err),
    }
}

/// Return an actionable hint for a library error variant.
pub fn cli_hint(err: &VocabError) -> String {
    match err {
        VocabError::KeyNotFound(word) => format!(
            "word {word:?} is not in the vocabulary. Rebuild with --open to map unknown words to <unk>."
        ),
        VocabError::IndexOutOfRange { index, len } => {
            format!("index {index} is outside the vocabulary (size {len}).")
        }
        VocabError::InvalidArgument(msg) => format!("{msg}. Verify the vocabulary file is intact."),
        VocabError::Io(io) => io.to_string(),
        VocabError::Codec(msg) => format!("{msg}. Snapshot is corrupted, rebuild it."),
    }
}
