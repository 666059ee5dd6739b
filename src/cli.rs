//! Command line utilities.

use std::{
    io::{Read, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
pub use clap::Parser;

use crate::{
    config::{Options, Style},
    convert::convert,
};

/// Command line usage description.
#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Cli {
    /// SCSS input file, standard input if omitted or `-`
    pub input: Option<PathBuf>,

    /// CSS output file [default: standard output]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Directory searched when resolving imports (repeatable)
    #[arg(short = 'I', long = "include-path")]
    pub include_paths: Vec<PathBuf>,

    /// Name shown in error messages [default: input file]
    #[arg(long)]
    pub filename: Option<String>,

    /// Output style
    #[arg(long, value_enum)]
    pub style: Option<Style>,

    /// Silence engine warnings
    #[arg(long)]
    pub quiet: bool,

    /// Configuration file (JSON, TOML or YAML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Write compilation statistics as JSON to this file
    #[arg(long)]
    pub stats: Option<PathBuf>,
}

impl Cli {
    /// Return the input path, if reading from a file.
    fn input_path(&self) -> Option<&Path> {
        self.input
            .as_deref()
            .filter(|path| *path != Path::new("-"))
    }

    /// Build conversion options.
    ///
    /// Values given on the command line override the configuration file.
    /// Include paths are appended to those of the configuration file.
    pub fn options(&self) -> Result<Options> {
        let options = match self.config.as_ref() {
            Some(path) => Options::from_file(path)?,
            None => Options::default(),
        };

        let filename = self
            .filename
            .clone()
            .or(options.filename)
            .or_else(|| self.input_path().map(|path| path.display().to_string()));

        Ok(Options {
            include_paths: options
                .include_paths
                .into_iter()
                .chain(self.include_paths.iter().cloned())
                .collect(),
            filename,
            style: self.style.unwrap_or(options.style),
            quiet: self.quiet || options.quiet,
        })
    }
}

/// Run the converter.
pub fn run(cli: &Cli) -> Result<()> {
    let options = cli.options()?;

    let source = match cli.input_path() {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading input file {path:?}"))?,
        None => {
            let mut source = String::new();
            std::io::stdin()
                .read_to_string(&mut source)
                .context("reading standard input")?;
            source
        }
    };

    tracing::info!(
        "Converting {}",
        options.filename.as_deref().unwrap_or("standard input")
    );

    let conversion = convert(&source, &options)?;

    match cli.output.as_ref() {
        Some(path) => {
            tracing::info!("Writing {:?}", path);
            std::fs::write(path, &conversion.css)
                .with_context(|| format!("writing output file {path:?}"))?;
        }
        None => std::io::stdout()
            .write_all(conversion.css.as_bytes())
            .context("writing standard output")?,
    }

    if let Some(path) = cli.stats.as_ref() {
        tracing::info!("Writing statistics to {:?}", path);
        let stats = serde_json::to_string_pretty(&conversion.stats)?;
        std::fs::write(path, stats)
            .with_context(|| format!("writing statistics file {path:?}"))?;
    }

    tracing::info!("Converted in {} ms", conversion.stats.duration);

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use assert_fs::prelude::*;

    use super::{Cli, Parser};
    use crate::config::Style;

    #[test]
    fn parse_args() {
        let cli = Cli::parse_from([
            "scss2css",
            "main.scss",
            "-o",
            "main.css",
            "-I",
            "a",
            "--include-path",
            "b",
            "--style",
            "compressed",
        ]);

        assert_eq!(cli.input, Some(PathBuf::from("main.scss")));
        assert_eq!(cli.output, Some(PathBuf::from("main.css")));
        assert_eq!(cli.include_paths, vec![PathBuf::from("a"), PathBuf::from("b")]);
        assert_eq!(cli.style, Some(Style::Compressed));
        assert!(!cli.quiet);
    }

    #[test]
    fn default_filename() {
        let options = Cli::parse_from(["scss2css", "main.scss"]).options().unwrap();
        assert_eq!(options.filename.as_deref(), Some("main.scss"));

        let options = Cli::parse_from(["scss2css", "-"]).options().unwrap();
        assert_eq!(options.filename, None);

        let options = Cli::parse_from(["scss2css", "main.scss", "--filename", "x.scss"])
            .options()
            .unwrap();
        assert_eq!(options.filename.as_deref(), Some("x.scss"));
    }

    #[test]
    fn merge_config() -> Result<(), Box<dyn std::error::Error>> {
        let dir = assert_fs::TempDir::new()?;
        let config = dir.child("scss2css.toml");
        config.write_str(
            r#"
            include_paths = ["from-config"]
            filename = "config.scss"
            style = "compressed"
            "#,
        )?;

        let config_path = config.path().to_str().unwrap();

        let options = Cli::parse_from(["scss2css", "--config", config_path, "-I", "from-cli"])
            .options()?;
        assert_eq!(
            options.include_paths,
            vec![PathBuf::from("from-config"), PathBuf::from("from-cli")]
        );
        assert_eq!(options.filename.as_deref(), Some("config.scss"));
        assert_eq!(options.style, Style::Compressed);

        let options = Cli::parse_from([
            "scss2css",
            "--config",
            config_path,
            "--style",
            "expanded",
            "--filename",
            "cli.scss",
        ])
        .options()?;
        assert_eq!(options.style, Style::Expanded);
        assert_eq!(options.filename.as_deref(), Some("cli.scss"));

        Ok(())
    }
}
