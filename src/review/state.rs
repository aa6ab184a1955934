// src/review/state.rs
//
// Working copy of one extraction plus the cell being edited, if any.
//
// Edit session:
//   Displayed --begin_edit--> Editing --commit_edit--> Displayed (value stored)
//                                     --cancel_edit--> Displayed (value reverted)
// Starting an edit elsewhere, swapping, or deleting the edited row ends the
// current session first.
use crate::{
    csv::{self, Delimiter},
    model::{ExtractionResult, FlashcardPair, LanguageInfo},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Term,
    Definition,
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct EditSession {
    row: usize,
    field: Field,
    buffer: String,
}

/// A row as shown: 1-based index and both cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RowView<'a> {
    pub index: usize,
    pub term: &'a str,
    pub definition: &'a str,
}

#[derive(Clone, Debug, Default)]
pub struct ReviewState {
    pairs: Vec<FlashcardPair>,
    language: LanguageInfo,
    edit: Option<EditSession>,
}

impl ReviewState {
    /// Fresh working copy; the orientation flag starts cleared.
    pub fn from_result(result: ExtractionResult) -> Self {
        let mut language = result.language_info;
        language.is_swapped = false;
        Self { pairs: result.flashcards, language, edit: None }
    }

    pub fn pairs(&self) -> &[FlashcardPair] {
        &self.pairs
    }

    pub fn language(&self) -> &LanguageInfo {
        &self.language
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn rows(&self) -> impl Iterator<Item = RowView<'_>> {
        self.pairs.iter().enumerate().map(|(i, p)| RowView {
            index: i + 1,
            term: &p.term,
            definition: &p.definition,
        })
    }

    fn cell_mut(&mut self, row: usize, field: Field) -> Option<&mut String> {
        let p = self.pairs.get_mut(row)?;
        Some(match field {
            Field::Term => &mut p.term,
            Field::Definition => &mut p.definition,
        })
    }

    /* ---------------- Editing ---------------- */

    /// Open `row`/`field` for editing (0-based row). Any open edit is committed first.
    /// Returns false for an out-of-range row.
    pub fn begin_edit(&mut self, row: usize, field: Field) -> bool {
        if self.editing() == Some((row, field)) {
            return true;
        }
        self.commit_edit();

        let Some(current) = self.cell_mut(row, field) else { return false };
        let buffer = current.clone();
        self.edit = Some(EditSession { row, field, buffer });
        true
    }

    pub fn editing(&self) -> Option<(usize, Field)> {
        self.edit.as_ref().map(|e| (e.row, e.field))
    }

    pub fn edit_buffer(&self) -> Option<&str> {
        self.edit.as_ref().map(|e| e.buffer.as_str())
    }

    pub fn edit_buffer_mut(&mut self) -> Option<&mut String> {
        self.edit.as_mut().map(|e| &mut e.buffer)
    }

    /// Close the session, storing the trimmed buffer. Empty or unchanged
    /// text leaves the pair as it was. Returns true when a value changed.
    pub fn commit_edit(&mut self) -> bool {
        let Some(EditSession { row, field, buffer }) = self.edit.take() else {
            return false;
        };
        let next = buffer.trim();
        let Some(cell) = self.cell_mut(row, field) else { return false };
        if next.is_empty() || next == cell.as_str() {
            return false;
        }
        logd!("Review: row {} {:?} edited", row + 1, field);
        *cell = s!(next);
        true
    }

    /// Close the session without storing anything.
    pub fn cancel_edit(&mut self) {
        self.edit = None;
    }

    /* ---------------- Row operations ---------------- */

    /// Remove a pair (0-based). No undo. An edit on a later row follows its pair;
    /// an edit on the removed row is dropped.
    pub fn delete(&mut self, row: usize) -> Option<FlashcardPair> {
        if row >= self.pairs.len() {
            return None;
        }
        match self.editing() {
            Some((r, _)) if r == row => self.edit = None,
            Some((r, _)) if r > row => {
                if let Some(e) = self.edit.as_mut() {
                    e.row -= 1;
                }
            }
            _ => {}
        }
        let removed = self.pairs.remove(row);
        logd!("Review: deleted row {}, {} left", row + 1, self.pairs.len());
        Some(removed)
    }

    /// Exchange term and definition everywhere, and the language names.
    pub fn swap(&mut self) {
        self.commit_edit();
        for p in &mut self.pairs {
            p.swap();
        }
        self.language.swap();
        logd!("Review: swapped (is_swapped={})", self.language.is_swapped);
    }

    /* ---------------- Output ---------------- */

    pub fn export_string(&self, delim: Delimiter) -> String {
        csv::to_export_string(&self.pairs, delim)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> ReviewState {
        ReviewState::from_result(ExtractionResult {
            flashcards: vec![pair!("a", "1"), pair!("b", "2"), pair!("c", "3")],
            language_info: LanguageInfo::new("English", "Dutch"),
        })
    }

    #[test]
    fn begin_edit_elsewhere_commits_first() {
        let mut st = state();
        assert!(st.begin_edit(0, Field::Term));
        *st.edit_buffer_mut().unwrap() = s!("  alpha ");
        assert!(st.begin_edit(1, Field::Definition));
        assert_eq!(st.pairs()[0].term, "alpha");
        assert_eq!(st.edit_buffer(), Some("2"));
    }

    #[test]
    fn out_of_range_edit_is_refused() {
        let mut st = state();
        assert!(!st.begin_edit(9, Field::Term));
        assert_eq!(st.editing(), None);
    }

    #[test]
    fn delete_keeps_later_edit_on_its_pair() {
        let mut st = state();
        st.begin_edit(2, Field::Term);
        st.delete(0);
        assert_eq!(st.editing(), Some((1, Field::Term)));
        *st.edit_buffer_mut().unwrap() = s!("C");
        st.commit_edit();
        assert_eq!(st.pairs(), &[pair!("b", "2"), pair!("C", "3")]);
    }
}
