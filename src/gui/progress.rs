// src/gui/progress.rs
use std::sync::{Arc, Mutex};

use crate::progress::Progress;

/// Status write; a poisoned lock still accepts the message.
pub fn set_status(status: &Mutex<String>, msg: impl Into<String>) {
    let mut s = status.lock().unwrap_or_else(|e| e.into_inner());
    *s = msg.into();
}

pub fn get_status(status: &Mutex<String>) -> String {
    status.lock().unwrap_or_else(|e| e.into_inner()).clone()
}

pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    max: u32,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>) -> Self {
        Self { status, max: 0 }
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, max_attempts: u32) {
        self.max = max_attempts;
        set_status(&self.status, "Waiting for flashcards to load…");
    }
    fn log(&mut self, msg: &str) {
        set_status(&self.status, msg);
    }
    fn attempt(&mut self, n: u32, found_container: bool) {
        let what = if found_container { "list found, no cards yet" } else { "list not rendered yet" };
        set_status(&self.status, format!("Waiting for flashcards… {what} ({n}/{})", self.max));
    }
    fn finish(&mut self) {
        set_status(&self.status, "Extraction finished");
    }
}
