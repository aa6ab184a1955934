// src/scrape/language.rs
//
// Best-effort language names for the two columns.
// Tier 1: the list header labels. Tier 2: any element reading exactly a
// known language name, first two distinct (normalized) in document order.
use scraper::{ElementRef, Html};

use super::ListSelectors;
use crate::{
    config::consts::UNKNOWN_LANGUAGE,
    core::sanitize::text_content,
    model::LanguageInfo,
};

/// Names recognized on the page (Dutch and English spellings) → normalized name.
const KNOWN_NAMES: [(&str, &str); 10] = [
    ("Engels", "English"),
    ("English", "English"),
    ("Nederlands", "Dutch"),
    ("Dutch", "Dutch"),
    ("Français", "French"),
    ("French", "French"),
    ("Deutsch", "German"),
    ("German", "German"),
    ("Español", "Spanish"),
    ("Spanish", "Spanish"),
];

/// Display flags (editor header); wider than the scan table.
const FLAGS: [(&str, &str); 16] = [
    ("English", "🇬🇧"), ("Engels", "🇬🇧"),
    ("Dutch", "🇳🇱"), ("Nederlands", "🇳🇱"),
    ("French", "🇫🇷"), ("Français", "🇫🇷"),
    ("German", "🇩🇪"), ("Deutsch", "🇩🇪"),
    ("Spanish", "🇪🇸"), ("Español", "🇪🇸"),
    ("Italian", "🇮🇹"), ("Italiano", "🇮🇹"),
    ("Portuguese", "🇵🇹"), ("Português", "🇵🇹"),
    ("Latin", "🇻🇦"),
    ("Greek", "🇬🇷"),
];

pub fn normalize(name: &str) -> Option<&'static str> {
    KNOWN_NAMES.iter().find(|(k, _)| *k == name).map(|(_, v)| *v)
}

pub fn flag(name: &str) -> Option<&'static str> {
    FLAGS.iter().find(|(k, _)| *k == name).map(|(_, v)| *v)
}

pub fn is_unknown(name: &str) -> bool {
    name == UNKNOWN_LANGUAGE
}

pub fn detect(doc: &Html, container: Option<ElementRef<'_>>, sel: &ListSelectors) -> LanguageInfo {
    let mut info = LanguageInfo::default();

    if let Some((a, b)) = container.and_then(|c| from_header(c, sel)) {
        info.term_language = a;
        info.definition_language = b;
    }

    if is_unknown(&info.term_language) || is_unknown(&info.definition_language) {
        logd!("Language: header missing or incomplete, scanning document");
        if let Some((a, b)) = from_anchors(doc) {
            info.term_language = a;
            info.definition_language = b;
        }
    }

    logd!("Language: {} / {}", info.term_language, info.definition_language);
    info
}

/// Header labels inside the list container (needs two).
pub fn from_header(container: ElementRef<'_>, sel: &ListSelectors) -> Option<(String, String)> {
    let header = container.select(&sel.header).next()?;
    let mut labels = header.select(&sel.header_label).map(text_content);
    let a = labels.next()?;
    let b = labels.next()?;
    let or_unknown = |s: String| if s.is_empty() { s!(UNKNOWN_LANGUAGE) } else { s };
    Some((or_unknown(a), or_unknown(b)))
}

/// First two distinct known names anywhere in the document (script/style skipped).
pub fn from_anchors(doc: &Html) -> Option<(String, String)> {
    let mut found: Vec<&'static str> = Vec::with_capacity(2);

    for el in doc.root_element().descendants().filter_map(ElementRef::wrap) {
        let tag = el.value().name();
        if tag == "script" || tag == "style" {
            continue;
        }
        let Some(name) = normalize(&text_content(el)) else { continue };
        if !found.contains(&name) {
            found.push(name);
            if found.len() == 2 {
                return Some((s!(found[0]), s!(found[1])));
            }
        }
    }
    None
}
