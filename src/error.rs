//! Conversion errors.

use thiserror::Error;

use crate::line::LineError;

/// List of errors returned by [`convert`](crate::convert).
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Diagnostic that does not point into the in-memory source.
    ///
    /// The message is the engine's wording, unchanged.
    #[error("{message}")]
    Unrecognized {
        /// Raw diagnostic text.
        message: String,
    },

    /// Diagnostic located in the in-memory source.
    #[error(transparent)]
    Source(#[from] SourceError),

    /// Diagnostic referring to a line the source does not have.
    #[error("diagnostic {original:?} does not match the source")]
    Inconsistent {
        /// Raw diagnostic text.
        original: String,
        /// Line extraction error.
        #[source]
        source: LineError,
    },
}

impl ConvertError {
    /// Return the raw diagnostic text produced by the engine.
    pub fn original(&self) -> &str {
        match self {
            Self::Unrecognized { message } => message,
            Self::Source(error) => &error.original,
            Self::Inconsistent { original, .. } => original,
        }
    }

    /// Return the enriched error, if the diagnostic was recognized.
    pub fn as_source(&self) -> Option<&SourceError> {
        match self {
            Self::Source(error) => Some(error),
            _ => None,
        }
    }
}

/// Enriched error pointing at a line of the SCSS source.
///
/// Displays as the title, the offending line indented by a tab, and the
/// engine message, each on its own line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{title}\n\t{line}\n{processed}")]
pub struct SourceError {
    /// Raw diagnostic text.
    pub original: String,

    /// Trimmed engine message.
    pub processed: String,

    /// Summary line, e.g. `An error occurred while parsing the (generated)
    /// SCSS for foo.scss (line: 12):`.
    pub title: String,

    /// Offending source line, trimmed.
    pub line: String,

    /// Line number token as captured from the diagnostic (1-based).
    pub line_nr: String,

    /// Filename label, or an empty string.
    pub file: String,
}
