use super::Format;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O operation failed: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("failed to parse {format} data: {details} (at line ~{line})")]
    Parse {
        format: Format,
        line: usize,
        details: String,
    },

    #[error("{format} header declares {declared} record(s) but {found} were read")]
    CountMismatch {
        format: Format,
        declared: usize,
        found: usize,
    },
}

impl Error {
    pub fn parse(format: Format, line: usize, details: impl Into<String>) -> Self {
        Self::Parse {
            format,
            line,
            details: details.into(),
        }
    }

    /// Returns `true` for malformed content, as opposed to failed file access.
    pub fn is_format_error(&self) -> bool {
        matches!(self, Error::Parse { .. } | Error::CountMismatch { .. })
    }
}
