use std::{fmt::Debug, io, path::PathBuf};

use thiserror::Error;

/// Failure of a file-to-file conversion.
///
/// Every variant is fatal. The destination is never touched when the
/// source cannot be opened; otherwise its contents are unspecified.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("source file not found: {}", path.display())]
    SourceNotFound { path: PathBuf, source: io::Error },

    #[error("cannot read source file: {}", path.display())]
    SourceUnreadable { path: PathBuf, source: io::Error },

    #[error("cannot write destination file: {}", path.display())]
    DestinationUnwritable { path: PathBuf, source: io::Error },
}

impl ConvertError {
    /// Classifies a failure to open or inspect the source path.
    pub(crate) fn source_open(path: PathBuf, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::NotFound => ConvertError::SourceNotFound { path, source },
            _ => ConvertError::SourceUnreadable { path, source },
        }
    }
}

/// A line of record text that is not exactly two lowercase hex digits.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("line {line}: expected 2 hex digits, found {len} characters")]
    InvalidLength { line: usize, len: usize },

    #[error("line {line}: invalid hex digit {found:?}")]
    InvalidDigit { line: usize, found: char },
}

/// Which side of a conversion stream failed.
#[derive(Debug)]
pub enum StreamError<R: Debug, W: Debug> {
    Read(R),
    Write(W),
}
