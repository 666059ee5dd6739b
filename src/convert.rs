//! Convert SCSS code to CSS.
//!
//! This module uses [`grass`] under the hood.

use time::OffsetDateTime;

use crate::{
    config::Options,
    diagnostic,
    error::ConvertError,
    format::format_error,
    stats::{RecordingFs, Stats},
};

/// Output of a successful conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    /// Compiled CSS.
    pub css: String,

    /// Compilation statistics.
    pub stats: Stats,
}

/// SCSS to CSS converter.
#[derive(Debug, Default, Clone)]
pub struct Converter {
    options: Options,
}

impl Converter {
    /// Create a converter.
    pub fn new(options: Options) -> Self {
        Self { options }
    }

    /// Return the converter options.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Convert a SCSS string to CSS.
    pub fn convert<S>(&self, source: S) -> Result<Conversion, ConvertError>
    where
        S: AsRef<str>,
    {
        convert(source.as_ref(), &self.options)
    }
}

/// Convert a SCSS string to CSS.
///
/// This function blocks until the engine is done. On failure, the engine
/// error is turned into a [`ConvertError`] by [`format_error`].
pub fn convert(source: &str, options: &Options) -> Result<Conversion, ConvertError> {
    let fs = RecordingFs::default();

    let grass_options = options.include_paths.iter().fold(
        grass::Options::default()
            .fs(&fs)
            .style(options.style.into())
            .quiet(options.quiet),
        |grass_options, path| grass_options.load_path(path),
    );

    tracing::debug!(
        "Compiling SCSS{}",
        options
            .filename
            .as_ref()
            .map(|filename| format!(" for {filename}"))
            .unwrap_or_default()
    );

    let start = OffsetDateTime::now_utc();
    let result = grass::from_string(source, &grass_options);
    let end = OffsetDateTime::now_utc();

    drop(grass_options);

    match result {
        Ok(css) => Ok(Conversion {
            css,
            stats: Stats::new(start, end, fs.into_files()),
        }),
        Err(error) => Err(format_error(
            &diagnostic::render(error, source),
            source,
            options,
        )),
    }
}
