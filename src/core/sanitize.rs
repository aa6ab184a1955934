// src/core/sanitize.rs
use scraper::ElementRef;

/// Concatenated descendant text of an element, trimmed (DOM `textContent.trim()`).
pub fn text_content(el: ElementRef<'_>) -> String {
    let raw: String = el.text().collect();
    raw.trim().to_string()
}

/// Replace every line break (`\r\n`, `\r`, `\n`) with a single space.
pub fn single_line(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                out.push(' ');
            }
            '\n' => out.push(' '),
            _ => out.push(ch),
        }
    }
    out
}

/// Make a user-supplied name usable as a file stem.
pub fn sanitize_file_stem(name: &str, fallback: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut last_us = false;
    for ch in name.chars() {
        if ch.is_alphanumeric() { out.push(ch); last_us = false; }
        else if ch.is_whitespace() { if !last_us { out.push('_'); last_us = true; } }
        else if ch=='-' || ch=='_' || ch=='.' { if !(last_us && ch=='_') { out.push(ch); } last_us = ch=='_'; }
    }
    let out = out.trim_matches(|c| c == '_' || c == '.').to_string();
    if out.is_empty() { s!(fallback) } else { out }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_line_collapses_each_break_kind() {
        assert_eq!(single_line("a\r\nb\rc\nd"), "a b c d");
        assert_eq!(single_line("a\n\nb"), "a  b");
        assert_eq!(single_line("plain"), "plain");
    }

    #[test]
    fn file_stem_sanitizing() {
        assert_eq!(sanitize_file_stem("Gone Girl voc", "x"), "Gone_Girl_voc");
        assert_eq!(sanitize_file_stem("  ../..  ", "studygo_flashcards"), "studygo_flashcards");
        assert_eq!(sanitize_file_stem("Woorden: H3/H4", "x"), "Woorden_H3H4");
    }
}
