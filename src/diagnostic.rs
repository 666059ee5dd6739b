//! Render engine errors as diagnostic text.
//!
//! This is the only module aware of how [`grass`] structures its errors. The
//! output is parsed back by [`format_error`](crate::format_error).

use crate::format::INLINE_SOURCE;

/// Name [`grass`] gives to sources passed as strings.
const GRASS_INLINE_NAME: &str = "stdin";

/// Render an engine error as `<name>:<line>: error: <message>`.
///
/// Parse errors located in `source` are named [`INLINE_SOURCE`]. Parse
/// errors located in imported files carry the file name. Other errors are
/// rendered with the engine's own wording.
pub fn render(error: Box<grass::Error>, source: &str) -> String {
    let display = error.to_string();

    match (*error).kind() {
        grass::ErrorKind::ParseError { message, loc, .. } => {
            let name = if loc.file.name() == GRASS_INLINE_NAME || loc.file.source() == source {
                INLINE_SOURCE
            } else {
                loc.file.name()
            };

            // Engine lines are 0-based
            format!("{}:{}: error: {}", name, loc.begin.line + 1, message)
        }
        _ => display,
    }
}
