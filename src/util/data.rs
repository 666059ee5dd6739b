//! Read serialized data files.

use std::path::Path;

use serde::de::DeserializeOwned;

/// Supported data formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Format {
    Json,
    Toml,
    Yaml,
}

impl Format {
    /// Determine the format from a file extension.
    pub(crate) fn from_extension(extension: &str) -> Option<Self> {
        match extension {
            "json" => Some(Self::Json),
            "toml" => Some(Self::Toml),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }

    /// Read data from a file.
    pub(crate) fn read_file<T, P>(self, path: P) -> anyhow::Result<T>
    where
        T: DeserializeOwned,
        P: AsRef<Path>,
    {
        let content = std::fs::read_to_string(path.as_ref())?;
        self.read_str(content)
    }

    /// Read data from a string.
    pub(crate) fn read_str<T, S>(self, content: S) -> anyhow::Result<T>
    where
        T: DeserializeOwned,
        S: AsRef<str>,
    {
        let content = content.as_ref();

        Ok(match self {
            Self::Json => serde_json::from_str(content)?,
            Self::Toml => toml::from_str(content)?,
            Self::Yaml => serde_yaml::from_str(content)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::Format;

    #[test]
    fn from_extension() {
        const CASES: [(&str, Option<Format>); 5] = [
            ("json", Some(Format::Json)),
            ("toml", Some(Format::Toml)),
            ("yaml", Some(Format::Yaml)),
            ("yml", Some(Format::Yaml)),
            ("ini", None),
        ];

        for (input, expected) in CASES {
            let result = Format::from_extension(input);
            assert_eq!(
                result, expected,
                "\nfrom_extension({input:?}) expected {expected:?} but received {result:?}"
            );
        }
    }

    #[test]
    fn read_str() {
        let value: serde_json::Value = Format::Yaml.read_str("a: 1").unwrap();
        assert_eq!(value, serde_json::json!({ "a": 1 }));

        let value: serde_json::Value = Format::Toml.read_str("a = 1").unwrap();
        assert_eq!(value, serde_json::json!({ "a": 1 }));
    }
}
