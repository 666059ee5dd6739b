//! Turn engine diagnostics into readable errors.
//!
//! Diagnostics are expected in the shape `source string:12: error: message`,
//! where `source string` designates the in-memory SCSS source. Anything else
//! is passed through untouched.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    config::Options,
    error::{ConvertError, SourceError},
    line::extract_line,
};

/// Name given by the diagnostics to the in-memory source.
pub const INLINE_SOURCE: &str = "source string";

/// Matches `<name>:<line>: error: <message>` anywhere in a diagnostic.
static DIAGNOSTIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([\w\s]+):(\d+): error: ([\s\S]+)").unwrap());

/// Summary prepended to enriched messages.
const TITLE: &str = "An error occurred while parsing the (generated) SCSS";

/// Build a [`ConvertError`] from a raw diagnostic.
///
/// When the diagnostic points into `source`, the offending line is extracted
/// and the error is enriched with the line, its number, and the filename set
/// in `options`.
pub fn format_error(diagnostic: &str, source: &str, options: &Options) -> ConvertError {
    let Some(captures) = DIAGNOSTIC
        .captures(diagnostic)
        .filter(|captures| &captures[1] == INLINE_SOURCE)
    else {
        tracing::debug!("Unrecognized diagnostic {:?}", diagnostic);
        return ConvertError::Unrecognized {
            message: diagnostic.to_owned(),
        };
    };

    let line_nr = captures[2].to_owned();
    let processed = captures[3].trim().to_owned();

    let line = match extract_line(source, line_nr.as_str()) {
        Ok(line) => line,
        Err(error) => {
            return ConvertError::Inconsistent {
                original: diagnostic.to_owned(),
                source: error,
            }
        }
    };

    let file = options
        .filename
        .as_deref()
        .filter(|filename| !filename.is_empty())
        .unwrap_or_default()
        .to_owned();

    let title = if file.is_empty() {
        format!("{TITLE} (line: {line_nr}):")
    } else {
        format!("{TITLE} for {file} (line: {line_nr}):")
    };

    SourceError {
        original: diagnostic.to_owned(),
        processed,
        title,
        line,
        line_nr,
        file,
    }
    .into()
}
