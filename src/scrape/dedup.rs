// src/scrape/dedup.rs
use std::collections::HashSet;

use crate::model::FlashcardPair;

/// Collapse exact (term, definition) duplicates. First occurrence wins and
/// keeps its position; no case or whitespace folding.
pub fn dedup<I>(pairs: I) -> Vec<FlashcardPair>
where
    I: IntoIterator<Item = FlashcardPair>,
{
    let mut seen: HashSet<FlashcardPair> = HashSet::new();
    let mut out = Vec::new();
    for p in pairs {
        if seen.contains(&p) {
            continue;
        }
        seen.insert(p.clone());
        out.push(p);
    }
    out
}
