// tests/common/mod.rs
//
// Page fixtures shaped like the rendered StudyGo list view.
#![allow(dead_code)]

pub fn item(term: &str, definition: &str) -> String {
    format!(
        r#"<div class="pair-list-item">
  <div class="col s-5"><div class="info"><span class="show-on-render">{term}</span></div></div>
  <div class="col s-7"><div class="info"><span class="show-on-render">{definition}</span></div></div>
</div>"#
    )
}

pub fn header(term_lang: &str, def_lang: &str) -> String {
    format!(
        r#"<div class="pair-list-header"><div class="language-row">
  <div class="label"><span class="show-on-render">{term_lang}</span></div>
  <div class="label"><span class="show-on-render">{def_lang}</span></div>
</div></div>"#
    )
}

/// Full page with an optional header row and the given items.
pub fn list_page(langs: Option<(&str, &str)>, pairs: &[(&str, &str)]) -> String {
    let head = langs.map(|(a, b)| header(a, b)).unwrap_or_default();
    let body: String = pairs.iter().map(|(t, d)| item(t, d)).collect();
    format!(
        r#"<!doctype html><html><head><title>Woordenlijst</title></head><body>
<nav><a href="/login">Log in</a></nav>
<div class="pair-list">{head}{body}</div>
</body></html>"#
    )
}

/// The app shell before the list has rendered.
pub fn loading_page() -> String {
    s("<!doctype html><html><body><div id=\"app\">Loading…</div></body></html>")
}

fn s(x: &str) -> String {
    x.to_string()
}
