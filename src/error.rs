// src/error.rs
use std::io;

use thiserror::Error;

/// Everything that can end an extraction run.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error(
        "Could not find flashcard elements on the page after {waited_ms} ms. \
         They might not have loaded correctly or the page structure has changed."
    )]
    Timeout { waited_ms: u64 },

    #[error("No flashcards found on this page.")]
    NothingFound,

    #[error("Not a supported page: {0}")]
    UnsupportedPage(String),

    #[error("Invalid selector {0:?}")]
    Selector(String),

    #[error("Could not read page: {0}")]
    Io(#[from] io::Error),

    #[error("Could not fetch page: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP error: {status} {url}")]
    HttpStatus { status: u16, url: String },
}

impl ScrapeError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, ScrapeError::Timeout { .. })
    }
}

/// Local JSON record I/O (holding area, settings).
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("malformed record: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum TransferError {
    #[error("Could not save flashcard data: {0}")]
    Write(#[source] StoreError),

    #[error("Could not load flashcard data: {0}")]
    Read(#[source] StoreError),
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("No flashcards to export.")]
    Empty,

    #[error("Path exists but is not a directory: {0}")]
    NotADirectory(String),

    #[error(transparent)]
    Io(#[from] io::Error),
}
