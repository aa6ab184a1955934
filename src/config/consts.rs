// src/config/consts.rs

// Target page (StudyGo list view)
pub const SITE_HOST_SUFFIX: &str = "studygo.com";
pub const CONTAINER_SELECTOR: &str = ".pair-list";
pub const ITEM_SELECTOR: &str = ".pair-list-item";
pub const TERM_SELECTOR: &str = ".col.s-5 .info .show-on-render";
pub const DEFINITION_SELECTOR: &str = ".col.s-7 .info .show-on-render";
pub const HEADER_SELECTOR: &str = ".pair-list-header";
pub const HEADER_LABEL_SELECTOR: &str = ".language-row .label .show-on-render";

// Polling
pub const POLL_INTERVAL_MS: u64 = 500;
pub const POLL_TIMEOUT_MS: u64 = 15_000;

// Net
pub const HTTP_TIMEOUT_SECS: u64 = 15;
pub const USER_AGENT: &str = concat!("studygo_scrape/", env!("CARGO_PKG_VERSION"));

// Local store
pub const STORE_DIR: &str = ".store";
pub const HOLDING_FILE: &str = "flashcard_data.json";
pub const SETTINGS_FILE: &str = "settings.json";
pub const LOG_FILE: &str = "debug.log";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE_STEM: &str = "studygo_flashcards";

pub const UNKNOWN_LANGUAGE: &str = "Unknown";
