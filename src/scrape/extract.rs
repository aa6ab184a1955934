// src/scrape/extract.rs
//
// Reads the rendered list: container → items → (term, definition).
use scraper::{ElementRef, Html};

use super::{dedup, language, ListSelectors};
use crate::{
    core::sanitize::text_content,
    model::{ExtractionResult, FlashcardPair},
};

/// What one snapshot showed of the list structure.
pub struct ListMatch<'a> {
    pub container: Option<ElementRef<'a>>,
    pub items: Vec<ElementRef<'a>>,
}

impl ListMatch<'_> {
    /// Container present with at least one item.
    pub fn is_ready(&self) -> bool {
        self.container.is_some() && !self.items.is_empty()
    }
}

pub fn find_list<'a>(doc: &'a Html, sel: &ListSelectors) -> ListMatch<'a> {
    let container = doc.select(&sel.container).next();
    let items = container
        .map(|c| c.select(&sel.item).collect())
        .unwrap_or_default();
    ListMatch { container, items }
}

/// Full extraction from one parsed snapshot. `None` while the list is not there yet.
pub fn extract_document(doc: &Html, sel: &ListSelectors) -> Option<ExtractionResult> {
    let list = find_list(doc, sel);
    if !list.is_ready() {
        return None;
    }
    let container = list.container?;

    let language_info = language::detect(doc, Some(container), sel);
    let raw: Vec<FlashcardPair> = list.items.iter().filter_map(|&item| extract_pair(item, sel)).collect();
    let skipped = list.items.len() - raw.len();
    let flashcards = dedup(raw);

    logd!(
        "Extract: items={} skipped={} unique={}",
        list.items.len(),
        skipped,
        flashcards.len()
    );
    Some(ExtractionResult { flashcards, language_info })
}

/// One item → pair. Skips missing sub-elements, a term/definition selector
/// hitting the same element, and fields that trim to nothing.
pub fn extract_pair(item: ElementRef<'_>, sel: &ListSelectors) -> Option<FlashcardPair> {
    let term_el = item.select(&sel.term).next()?;
    let def_el = item.select(&sel.definition).next()?;
    if term_el.id() == def_el.id() {
        return None;
    }

    let term = text_content(term_el);
    let definition = text_content(def_el);
    if term.is_empty() || definition.is_empty() {
        return None;
    }
    Some(FlashcardPair { term, definition })
}
