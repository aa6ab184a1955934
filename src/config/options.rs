// src/config/options.rs
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::consts::*;
use crate::{core::sanitize::sanitize_file_stem, csv::Delimiter};

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub scrape: ScrapeOptions,
    pub export: ExportOptions,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ScrapeMode {
    /// Wait for the rendered list and read it through the fixed selectors.
    #[default]
    Live,
    /// One load, then the legacy heuristic strategies (raw/unrendered HTML).
    Heuristic,
}

/// CSS selectors describing the list markup. Defaults match the live site.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectorSet {
    pub container: String,
    pub item: String,
    pub term: String,
    pub definition: String,
    pub header: String,
    pub header_label: String,
}

impl Default for SelectorSet {
    fn default() -> Self {
        Self {
            container: s!(CONTAINER_SELECTOR),
            item: s!(ITEM_SELECTOR),
            term: s!(TERM_SELECTOR),
            definition: s!(DEFINITION_SELECTOR),
            header: s!(HEADER_SELECTOR),
            header_label: s!(HEADER_LABEL_SELECTOR),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PollOptions {
    pub interval: Duration,
    pub timeout: Duration,
}

impl Default for PollOptions {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(POLL_INTERVAL_MS),
            timeout: Duration::from_millis(POLL_TIMEOUT_MS),
        }
    }
}

impl PollOptions {
    pub fn from_millis(interval_ms: u64, timeout_ms: u64) -> Self {
        Self {
            interval: Duration::from_millis(interval_ms.max(1)),
            timeout: Duration::from_millis(timeout_ms),
        }
    }

    /// How many snapshots the wait loop takes before giving up.
    pub fn max_attempts(&self) -> u32 {
        let interval = self.interval.as_millis().max(1);
        let timeout = self.timeout.as_millis();
        u32::try_from(timeout.div_ceil(interval)).unwrap_or(u32::MAX).max(1)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ScrapeOptions {
    pub mode: ScrapeMode,
    pub selectors: SelectorSet,
    pub poll: PollOptions,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub delimiter: Delimiter,
    out_path: OutputPath,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            delimiter: Delimiter::default(),
            out_path: OutputPath::default(),
        }
    }
}

impl ExportOptions {
    pub fn with_delimiter(delimiter: Delimiter) -> Self {
        Self { delimiter, ..Self::default() }
    }

    /// `<dir>/<stem>.<ext>`, extension always follows the delimiter.
    pub fn out_path(&self) -> PathBuf {
        let stem = self.out_path.file_stem.to_string_lossy();
        self.out_path.dir.join(format!("{stem}.{}", self.delimiter.ext()))
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_path.dir
    }

    pub fn file_name(&self) -> String {
        let stem = self.out_path.file_stem.to_string_lossy();
        format!("{stem}.{}", self.delimiter.ext())
    }

    /// Parse user text into dir + stem. A pasted extension is ignored; the delimiter controls it.
    pub fn set_path(&mut self, text: &str) {
        let p = Path::new(text.trim());
        if let Some(parent) = p.parent() {
            self.out_path.dir = parent.to_path_buf();
        }
        if let Some(stem) = p.file_stem() {
            let clean = sanitize_file_stem(&stem.to_string_lossy(), DEFAULT_FILE_STEM);
            self.out_path.file_stem = OsString::from(clean);
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputPath {
    dir: PathBuf,
    file_stem: OsString, // without extension
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_stem: OsString::from(DEFAULT_FILE_STEM),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attempts_round_up() {
        assert_eq!(PollOptions::from_millis(500, 15_000).max_attempts(), 30);
        assert_eq!(PollOptions::from_millis(400, 1_000).max_attempts(), 3);
        assert_eq!(PollOptions::from_millis(500, 0).max_attempts(), 1);
    }

    #[test]
    fn huge_timeout_saturates_instead_of_wrapping() {
        assert_eq!(PollOptions::from_millis(1, 1 << 32).max_attempts(), u32::MAX);
        assert_eq!(PollOptions::from_millis(1, u64::MAX).max_attempts(), u32::MAX);
    }

    #[test]
    fn extension_follows_delimiter() {
        let mut opts = ExportOptions::default();
        opts.set_path("exports/my_list.data");
        opts.delimiter = Delimiter::Comma;
        assert_eq!(opts.out_path(), Path::new("exports").join("my_list.csv"));
        opts.delimiter = Delimiter::Tab;
        assert_eq!(opts.file_name(), "my_list.tsv");
        opts.delimiter = Delimiter::Equals;
        assert_eq!(opts.file_name(), "my_list.txt");
    }
}
