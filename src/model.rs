// src/model.rs
use serde::{Deserialize, Serialize};

use crate::config::consts::UNKNOWN_LANGUAGE;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FlashcardPair {
    pub term: String,
    pub definition: String,
}

impl FlashcardPair {
    pub fn new(term: impl Into<String>, definition: impl Into<String>) -> Self {
        Self { term: term.into(), definition: definition.into() }
    }

    pub fn swap(&mut self) {
        std::mem::swap(&mut self.term, &mut self.definition);
    }
}

fn unknown() -> String {
    s!(UNKNOWN_LANGUAGE)
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageInfo {
    #[serde(default = "unknown")]
    pub term_language: String,
    #[serde(default = "unknown")]
    pub definition_language: String,
    #[serde(default)]
    pub is_swapped: bool,
}

impl Default for LanguageInfo {
    fn default() -> Self {
        Self { term_language: unknown(), definition_language: unknown(), is_swapped: false }
    }
}

impl LanguageInfo {
    pub fn new(term_language: impl Into<String>, definition_language: impl Into<String>) -> Self {
        Self {
            term_language: term_language.into(),
            definition_language: definition_language.into(),
            is_swapped: false,
        }
    }

    /// Exchange the two names and flip the flag. Applying twice is a no-op.
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.term_language, &mut self.definition_language);
        self.is_swapped = !self.is_swapped;
    }
}

/// One extraction run, as handed from the scraper to the review side.
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionResult {
    pub flashcards: Vec<FlashcardPair>,
    #[serde(default)]
    pub language_info: LanguageInfo,
}

impl ExtractionResult {
    pub fn len(&self) -> usize {
        self.flashcards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flashcards.is_empty()
    }
}
