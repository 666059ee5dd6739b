//! Configure the converter.

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;

use crate::util::data::Format;

/// Conversion options.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Options {
    /// Directories searched when resolving `@import` and `@use` rules.
    #[serde(alias = "includePaths")]
    pub include_paths: Vec<PathBuf>,

    /// Label used in error messages.
    ///
    /// This is never read from disk.
    pub filename: Option<String>,

    /// Output style.
    pub style: Style,

    /// Silence warnings and `@debug` output of the engine.
    pub quiet: bool,
}

/// CSS output style.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    /// One declaration per line.
    #[default]
    Expanded,

    /// As little whitespace as possible.
    Compressed,
}

impl From<Style> for grass::OutputStyle {
    fn from(style: Style) -> Self {
        match style {
            Style::Expanded => Self::Expanded,
            Style::Compressed => Self::Compressed,
        }
    }
}

impl Options {
    /// Load options from a file.
    ///
    /// The format is determined by the file extension: `json`, `toml`,
    /// `yaml` or `yml`.
    pub fn from_file<P>(path: P) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();

        let extension = path
            .extension()
            .and_then(|extension| extension.to_str())
            .ok_or_else(|| anyhow!("missing extension for configuration file {path:?}"))?;

        let format = Format::from_extension(extension).ok_or_else(|| {
            anyhow!("unknown extension {extension:?} for configuration file {path:?}")
        })?;

        tracing::debug!("Loading configuration from {:?}", path);

        let options: Result<Self> = format.read_file(path);

        options.with_context(|| format!("loading configuration from {path:?}"))
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::{Options, Style};
    use crate::util::data::Format;

    fn expected() -> Options {
        Options {
            include_paths: vec![PathBuf::from("styles"), PathBuf::from("vendor")],
            filename: Some("main.scss".into()),
            style: Style::Compressed,
            quiet: true,
        }
    }

    #[test]
    fn load_json() {
        const CONTENT: &str = r#"
            {
                "include_paths": ["styles", "vendor"],
                "filename": "main.scss",
                "style": "compressed",
                "quiet": true
            }
        "#;

        let options: Options = Format::Json.read_str(CONTENT).unwrap();
        assert_eq!(options, expected());
    }

    #[test]
    fn load_json_camel_case() {
        let options: Options =
            Format::Json.read_str(r#"{ "includePaths": ["styles"] }"#).unwrap();
        assert_eq!(options.include_paths, vec![PathBuf::from("styles")]);
    }

    #[test]
    fn load_toml() {
        const CONTENT: &str = r#"
            include_paths = ["styles", "vendor"]
            filename = "main.scss"
            style = "compressed"
            quiet = true
        "#;

        let options: Options = Format::Toml.read_str(CONTENT).unwrap();
        assert_eq!(options, expected());
    }

    #[test]
    fn load_yaml() {
        const CONTENT: &str = concat!(
            "include_paths:\n",
            "  - styles\n",
            "  - vendor\n",
            "filename: main.scss\n",
            "style: compressed\n",
            "quiet: true\n",
        );

        let options: Options = Format::Yaml.read_str(CONTENT).unwrap();
        assert_eq!(options, expected());
    }

    #[test]
    fn load_empty() {
        let options: Options = Format::Toml.read_str("").unwrap();
        assert_eq!(options, Options::default());
        assert_eq!(options.style, Style::Expanded);
    }

    #[test]
    fn reject_unknown_fields() {
        assert!(Format::Json.read_str::<Options, _>(r#"{ "output_style": "nested" }"#).is_err());
    }

    #[test]
    fn from_file_unknown_extension() {
        let error = Options::from_file("config.unknown").unwrap_err();
        assert!(error.to_string().contains("extension"), "{error}");
    }
}
