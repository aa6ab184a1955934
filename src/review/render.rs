// src/review/render.rs
//
// Text/HTML renderings of the review table. Cell text is always treated as
// literal text, never markup.
use std::fmt::Write as _;

use super::ReviewState;
use crate::scrape::language::{flag, is_unknown};

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Column header: "🇳🇱 Dutch", plain "Latvian", or `fallback` when unknown.
pub fn header_label(language: &str, fallback: &str) -> String {
    if is_unknown(language) || language.trim().is_empty() {
        return s!(fallback);
    }
    match flag(language) {
        Some(f) => format!("{f} {language}"),
        None => s!(language),
    }
}

pub fn headers(state: &ReviewState) -> (String, String) {
    let lang = state.language();
    (
        header_label(&lang.term_language, "Term"),
        header_label(&lang.definition_language, "Definition"),
    )
}

pub fn count_label(n: usize) -> String {
    match n {
        1 => s!("1 card"),
        n => format!("{n} cards"),
    }
}

pub fn html_table(state: &ReviewState) -> String {
    let (th_term, th_def) = headers(state);
    let mut out = String::new();
    out.push_str("<table>\n<thead><tr><th>#</th>");
    let _ = write!(out, "<th>{}</th><th>{}</th>", escape_html(&th_term), escape_html(&th_def));
    out.push_str("</tr></thead>\n<tbody>\n");
    for row in state.rows() {
        let _ = writeln!(
            out,
            "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
            row.index,
            escape_html(row.term),
            escape_html(row.definition)
        );
    }
    out.push_str("</tbody>\n</table>\n");
    out
}

fn pad(s: &str, width: usize) -> String {
    let n = s.chars().count();
    format!("{s}{}", " ".repeat(width.saturating_sub(n)))
}

/// Console rendering, columns padded to the widest cell.
pub fn text_table(state: &ReviewState) -> String {
    let (th_term, th_def) = headers(state);
    let idx_w = state.len().to_string().len().max(1);
    let term_w = state
        .rows()
        .map(|r| r.term.chars().count())
        .chain([th_term.chars().count()])
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    let _ = writeln!(out, "{}  {}  {}", pad("#", idx_w), pad(&th_term, term_w), th_def);
    let _ = writeln!(out, "{}", "-".repeat(idx_w + term_w + th_def.chars().count() + 4));
    for row in state.rows() {
        let _ = writeln!(
            out,
            "{:>idx_w$}  {}  {}",
            row.index,
            pad(row.term, term_w),
            row.definition
        );
    }
    let _ = writeln!(out, "{}", count_label(state.len()));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_all_five() {
        assert_eq!(escape_html(r#"<a href="x">'&'</a>"#), "&lt;a href=&quot;x&quot;&gt;&#39;&amp;&#39;&lt;/a&gt;");
    }

    #[test]
    fn header_fallbacks() {
        assert_eq!(header_label("Unknown", "Term"), "Term");
        assert_eq!(header_label("Dutch", "Definition"), "🇳🇱 Dutch");
        assert_eq!(header_label("Latvian", "Term"), "Latvian");
    }
}
