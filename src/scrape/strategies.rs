// src/scrape/strategies.rs
//
// Fallback pair finders for pages where the list markup is not available.
// Each one is a guess; the chain keeps the first guess that finds anything.
use scraper::{ElementRef, Html};

use super::selectors::compile;
use crate::{core::sanitize::text_content, model::FlashcardPair};

pub trait Strategy {
    fn name(&self) -> &'static str;
    fn attempt(&self, doc: &Html) -> Vec<FlashcardPair>;
}

const LOGIN_WORDS: [&str; 2] = ["Log in", "Register"];

fn has_login_word(text: &str) -> bool {
    LOGIN_WORDS.iter().any(|w| text.contains(w))
}

/// Short, non-chrome text: 2..=99 chars.
fn is_candidate(text: &str) -> bool {
    let n = text.chars().count();
    n > 1 && n < 100 && !has_login_word(text)
}

/// All elements strictly below `el`, document order.
fn descendant_elements<'a>(el: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    el.descendants().skip(1).filter_map(ElementRef::wrap)
}

fn descendant_texts(el: ElementRef<'_>) -> Vec<String> {
    descendant_elements(el)
        .map(text_content)
        .filter(|t| !t.is_empty())
        .collect()
}

fn parent_element(el: ElementRef<'_>) -> Option<ElementRef<'_>> {
    el.parent().and_then(ElementRef::wrap)
}

/// Deeply nested divs: left half of the texts are terms, right half definitions.
/// One pair per row at most.
pub struct Structural;

impl Strategy for Structural {
    fn name(&self) -> &'static str {
        "structural"
    }

    fn attempt(&self, doc: &Html) -> Vec<FlashcardPair> {
        let Ok(rows) = compile("div > div > div > div") else { return Vec::new() };
        let mut out = Vec::new();

        for row in doc.select(&rows) {
            let texts = descendant_texts(row);
            let (left, right) = texts.split_at(texts.len().div_ceil(2));

            let found = left.iter().find_map(|term| {
                right
                    .iter()
                    .find(|def| {
                        term.chars().count() >= 2
                            && def.chars().count() >= 2
                            && term != *def
                            && !has_login_word(term)
                            && !has_login_word(def)
                    })
                    .map(|def| pair!(term.as_str(), def.as_str()))
            });
            out.extend(found);
        }
        out
    }
}

/// Short texts paired with the short texts of nearby siblings (up to three levels up).
pub struct Proximity;

impl Strategy for Proximity {
    fn name(&self) -> &'static str {
        "proximity"
    }

    fn attempt(&self, doc: &Html) -> Vec<FlashcardPair> {
        let mut out = Vec::new();

        for el in doc.root_element().descendants().filter_map(ElementRef::wrap) {
            let term = text_content(el);
            if !is_candidate(&term) {
                continue;
            }

            let mut parent = parent_element(el);
            for _ in 0..3 {
                let Some(p) = parent else { break };
                for sib in p.children().filter_map(ElementRef::wrap) {
                    if sib.id() == el.id() {
                        continue;
                    }
                    let def = text_content(sib);
                    if is_candidate(&def) && def != term {
                        out.push(pair!(term.as_str(), def));
                    }
                }
                parent = parent_element(p);
            }
        }
        out
    }
}

/// Texts under the first English label's parent zipped with those under the
/// first Dutch label's parent.
pub struct LanguageAnchor;

impl LanguageAnchor {
    fn first_reading<'a>(doc: &'a Html, names: [&str; 2]) -> Option<ElementRef<'a>> {
        doc.root_element()
            .descendants()
            .filter_map(ElementRef::wrap)
            .find(|el| names.contains(&text_content(*el).as_str()))
    }

    fn column(anchor: ElementRef<'_>, names: [&str; 2]) -> Vec<String> {
        let Some(parent) = parent_element(anchor) else { return Vec::new() };
        descendant_texts(parent)
            .into_iter()
            .filter(|t| t.chars().count() > 1 && !names.contains(&t.as_str()))
            .collect()
    }
}

impl Strategy for LanguageAnchor {
    fn name(&self) -> &'static str {
        "language-anchor"
    }

    fn attempt(&self, doc: &Html) -> Vec<FlashcardPair> {
        const EN: [&str; 2] = ["Engels", "English"];
        const NL: [&str; 2] = ["Nederlands", "Dutch"];

        let (Some(en), Some(nl)) = (Self::first_reading(doc, EN), Self::first_reading(doc, NL)) else {
            return Vec::new();
        };
        let terms = Self::column(en, EN);
        let defs = Self::column(nl, NL);
        terms.into_iter().zip(defs).map(|(t, d)| pair!(t, d)).collect()
    }
}

/// `<ol><li>term: definition</li>…</ol>`, also with `=` or ` - ` between.
pub struct Numbered;

impl Numbered {
    const SEPARATORS: [&'static str; 3] = [":", "=", " - "];

    fn split(line: &str) -> Option<FlashcardPair> {
        Self::SEPARATORS.iter().find_map(|sep| {
            let (t, d) = line.split_once(sep)?;
            let (t, d) = (t.trim(), d.trim());
            (!t.is_empty() && !d.is_empty()).then(|| pair!(t, d))
        })
    }
}

impl Strategy for Numbered {
    fn name(&self) -> &'static str {
        "numbered"
    }

    fn attempt(&self, doc: &Html) -> Vec<FlashcardPair> {
        let Ok(items) = compile("ol > li") else { return Vec::new() };
        doc.select(&items)
            .map(text_content)
            .filter(|t| !has_login_word(t))
            .filter_map(|t| Self::split(&t))
            .collect()
    }
}

pub fn default_chain() -> Vec<Box<dyn Strategy>> {
    vec![Box::new(Structural), Box::new(Proximity), Box::new(LanguageAnchor), Box::new(Numbered)]
}

/// First strategy with a non-empty result, and that result.
pub fn run_chain(doc: &Html, chain: &[Box<dyn Strategy>]) -> Option<(&'static str, Vec<FlashcardPair>)> {
    for s in chain {
        let pairs = s.attempt(doc);
        logd!("Strategy {}: {} pairs", s.name(), pairs.len());
        if !pairs.is_empty() {
            return Some((s.name(), pairs));
        }
    }
    None
}
