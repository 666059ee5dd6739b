//! Extract lines from source text.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Any of the newline conventions: CRLF, LF, CR and form feed.
static NEWLINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\r\n|\n|\r|\x0C").unwrap());

/// List of errors for this module.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineError {
    /// The line number is not a positive integer.
    #[error("invalid line number {0:?}")]
    Invalid(String),

    /// The source has fewer lines than requested.
    #[error("line {line_nr} is out of range, source has {line_count} line(s)")]
    OutOfRange {
        /// Requested line number (1-based).
        line_nr: usize,
        /// Number of lines in the source.
        line_count: usize,
    },
}

/// A 1-based line number, given either as text or as an integer.
pub trait LineNumber {
    /// Convert to a 1-based line number.
    fn to_line_nr(&self) -> Result<usize, LineError>;
}

impl LineNumber for str {
    fn to_line_nr(&self) -> Result<usize, LineError> {
        self.trim()
            .parse::<usize>()
            .ok()
            .filter(|line_nr| *line_nr > 0)
            .ok_or_else(|| LineError::Invalid(self.to_owned()))
    }
}

impl LineNumber for String {
    fn to_line_nr(&self) -> Result<usize, LineError> {
        self.as_str().to_line_nr()
    }
}

impl<T> LineNumber for &T
where
    T: LineNumber + ?Sized,
{
    fn to_line_nr(&self) -> Result<usize, LineError> {
        (**self).to_line_nr()
    }
}

macro_rules! impl_line_number {
    ($($t:ty),*) => {
        $(
            impl LineNumber for $t {
                fn to_line_nr(&self) -> Result<usize, LineError> {
                    usize::try_from(*self)
                        .ok()
                        .filter(|line_nr| *line_nr > 0)
                        .ok_or_else(|| LineError::Invalid(self.to_string()))
                }
            }
        )*
    };
}

impl_line_number!(u8, u16, u32, u64, usize, i32, i64);

/// Return the trimmed line at `line_nr` (1-based) in `source`.
pub fn extract_line<N>(source: &str, line_nr: N) -> Result<String, LineError>
where
    N: LineNumber,
{
    let line_nr = line_nr.to_line_nr()?;
    let mut lines = NEWLINE.split(source);

    if let Some(line) = lines.nth(line_nr - 1) {
        return Ok(line.trim().to_owned());
    }

    Err(LineError::OutOfRange {
        line_nr,
        line_count: NEWLINE.split(source).count(),
    })
}
