//! Compilation statistics.

use std::{
    io,
    path::{Path, PathBuf},
    sync::Mutex,
};

use grass::Fs;
use serde::Serialize;
use time::OffsetDateTime;

/// Statistics of a successful conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stats {
    /// Kind of entry point, always `data` for in-memory sources.
    pub entry: String,

    /// Start time, in milliseconds since the Unix epoch.
    pub start: i64,

    /// End time, in milliseconds since the Unix epoch.
    pub end: i64,

    /// Compilation time, in milliseconds.
    pub duration: i64,

    /// Files read by the engine while resolving imports, in read order.
    pub included_files: Vec<PathBuf>,
}

impl Stats {
    /// Create statistics for a compilation spanning `start..end`.
    pub(crate) fn new(
        start: OffsetDateTime,
        end: OffsetDateTime,
        included_files: Vec<PathBuf>,
    ) -> Self {
        Self {
            entry: "data".to_owned(),
            start: unix_millis(start),
            end: unix_millis(end),
            duration: (end - start).whole_milliseconds() as i64,
            included_files,
        }
    }
}

/// Convert a date to milliseconds since the Unix epoch.
fn unix_millis(date: OffsetDateTime) -> i64 {
    (date.unix_timestamp_nanos() / 1_000_000) as i64
}

/// File system recording the files read by the engine.
#[derive(Debug, Default)]
pub(crate) struct RecordingFs {
    files: Mutex<Vec<PathBuf>>,
}

impl RecordingFs {
    /// Return the recorded files.
    pub(crate) fn into_files(self) -> Vec<PathBuf> {
        self.files
            .into_inner()
            .unwrap_or_else(|error| error.into_inner())
    }
}

impl Fs for RecordingFs {
    fn is_dir(&self, path: &Path) -> bool {
        grass::StdFs.is_dir(path)
    }

    fn is_file(&self, path: &Path) -> bool {
        grass::StdFs.is_file(path)
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        let content = grass::StdFs.read(path)?;

        tracing::debug!("Including {:?}", path);

        let mut files = self.files.lock().unwrap_or_else(|error| error.into_inner());
        if !files.iter().any(|file| file == path) {
            files.push(path.to_owned());
        }

        Ok(content)
    }
}
