//! Convert SCSS to CSS with readable error messages.
//!
//! scss2css can be used as both a CLI and a library. Compilation is done by
//! [`grass`]. When it fails, the engine diagnostic is turned into an error
//! pointing at the offending line of the source:
//!
//! ```text
//! An error occurred while parsing the (generated) SCSS for main.scss (line: 2):
//! 	color: $missing;
//! Undefined variable.
//! ```

#![warn(missing_docs)]

pub mod cli;
pub mod config;
pub mod convert;
pub mod diagnostic;
pub mod error;
pub mod format;
pub mod line;
pub mod stats;

mod util;

pub use config::{Options, Style};
pub use convert::{convert, Conversion, Converter};
pub use error::{ConvertError, SourceError};
pub use format::format_error;
pub use line::{extract_line, LineError, LineNumber};
pub use stats::Stats;
