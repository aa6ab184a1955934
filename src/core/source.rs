// src/core/source.rs
//
// Where page HTML comes from. The wait loop asks for a fresh snapshot on
// every tick, so a file still being saved or a page that renders late
// can show up between ticks.
use std::{fs, path::PathBuf};

use reqwest::blocking::Client;

use super::net;
use crate::error::ScrapeError;

pub trait PageSource {
    /// Human-readable origin for logs and status lines.
    fn describe(&self) -> String;

    /// Current HTML of the page.
    fn load(&mut self) -> Result<String, ScrapeError>;
}

/// A page saved to disk (e.g. "Save page as…" from the browser).
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PageSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&mut self) -> Result<String, ScrapeError> {
        let bytes = fs::read(&self.path)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

/// A list page fetched over HTTP on every tick.
pub struct UrlSource {
    url: String,
    client: Client,
}

impl UrlSource {
    pub fn new(url: impl Into<String>) -> Result<Self, ScrapeError> {
        Ok(Self { url: url.into(), client: net::client()? })
    }
}

impl PageSource for UrlSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    fn load(&mut self) -> Result<String, ScrapeError> {
        net::http_get(&self.client, &self.url)
    }
}

/// Fixed snapshots served in order; the last one repeats once the rest are used.
pub struct StaticSource {
    label: String,
    snapshots: Vec<String>,
    next: usize,
    loads: usize,
}

impl StaticSource {
    pub fn new(label: impl Into<String>, html: impl Into<String>) -> Self {
        Self::sequence(label, vec![html.into()])
    }

    pub fn sequence(label: impl Into<String>, snapshots: Vec<String>) -> Self {
        Self { label: label.into(), snapshots, next: 0, loads: 0 }
    }

    /// Number of `load` calls so far.
    pub fn loads(&self) -> usize {
        self.loads
    }
}

impl PageSource for StaticSource {
    fn describe(&self) -> String {
        self.label.clone()
    }

    fn load(&mut self) -> Result<String, ScrapeError> {
        self.loads += 1;
        let Some(last) = self.snapshots.len().checked_sub(1) else {
            return Ok(s!());
        };
        let ix = self.next.min(last);
        self.next = (self.next + 1).min(last);
        Ok(self.snapshots[ix].clone())
    }
}
