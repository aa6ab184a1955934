// src/transfer.rs
//
// Single-slot hand-off from the extraction side to the review side.
// One value at a time, later writes replace earlier ones.
use std::path::{Path, PathBuf};

use crate::{
    config::consts::{HOLDING_FILE, STORE_DIR},
    error::TransferError,
    model::ExtractionResult,
    store,
};

pub trait Mailbox {
    /// Store `result`, replacing whatever was there.
    fn put(&mut self, result: &ExtractionResult) -> Result<(), TransferError>;

    /// Read and clear.
    fn take(&mut self) -> Result<Option<ExtractionResult>, TransferError>;

    /// Read without clearing.
    fn peek(&self) -> Result<Option<ExtractionResult>, TransferError>;
}

/// Whatever shows the transferred data (editor window, console table, …).
pub trait ReviewSurface {
    fn open(&mut self);
}

impl<F: FnMut()> ReviewSurface for F {
    fn open(&mut self) {
        self()
    }
}

/* ---------------- File-backed slot ---------------- */

pub struct FileMailbox {
    path: PathBuf,
}

impl Default for FileMailbox {
    fn default() -> Self {
        Self::at(Path::new(STORE_DIR).join(HOLDING_FILE))
    }
}

impl FileMailbox {
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Mailbox for FileMailbox {
    fn put(&mut self, result: &ExtractionResult) -> Result<(), TransferError> {
        store::write_json(&self.path, result).map_err(TransferError::Write)
    }

    fn take(&mut self) -> Result<Option<ExtractionResult>, TransferError> {
        let value = self.peek()?;
        store::remove(&self.path).map_err(TransferError::Read)?;
        Ok(value)
    }

    fn peek(&self) -> Result<Option<ExtractionResult>, TransferError> {
        store::read_json(&self.path).map_err(TransferError::Read)
    }
}

/* ---------------- In-memory slot ---------------- */

#[derive(Default)]
pub struct MemoryMailbox {
    slot: Option<ExtractionResult>,
}

impl Mailbox for MemoryMailbox {
    fn put(&mut self, result: &ExtractionResult) -> Result<(), TransferError> {
        self.slot = Some(result.clone());
        Ok(())
    }

    fn take(&mut self) -> Result<Option<ExtractionResult>, TransferError> {
        Ok(self.slot.take())
    }

    fn peek(&self) -> Result<Option<ExtractionResult>, TransferError> {
        Ok(self.slot.clone())
    }
}

/// Store the result, then open the review surface. The surface is opened
/// exactly once, and only if the write succeeded.
pub fn hand_off(
    mailbox: &mut dyn Mailbox,
    result: &ExtractionResult,
    surface: &mut dyn ReviewSurface,
) -> Result<(), TransferError> {
    if let Err(e) = mailbox.put(result) {
        loge!("Transfer: {}", e);
        return Err(e);
    }
    logf!("Transfer: stored {} pairs, opening review", result.len());
    surface.open();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_slot_is_last_write_wins() {
        let mut mb = MemoryMailbox::default();
        let a = ExtractionResult { flashcards: vec![pair!("a", "1")], ..Default::default() };
        let b = ExtractionResult { flashcards: vec![pair!("b", "2")], ..Default::default() };
        mb.put(&a).unwrap();
        mb.put(&b).unwrap();
        assert_eq!(mb.peek().unwrap(), Some(b.clone()));
        assert_eq!(mb.take().unwrap(), Some(b));
        assert_eq!(mb.take().unwrap(), None);
    }
}
