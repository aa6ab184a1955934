// tests/strategies.rs
use scraper::Html;
use studygo_scrape::{
    model::FlashcardPair,
    scrape::strategies::{default_chain, run_chain, LanguageAnchor, Numbered, Proximity, Strategy, Structural},
};

fn p(t: &str, d: &str) -> FlashcardPair {
    FlashcardPair::new(t, d)
}

struct Fixed {
    name: &'static str,
    pairs: Vec<FlashcardPair>,
}

impl Strategy for Fixed {
    fn name(&self) -> &'static str {
        self.name
    }
    fn attempt(&self, _doc: &Html) -> Vec<FlashcardPair> {
        self.pairs.clone()
    }
}

fn fixed(name: &'static str, pairs: Vec<FlashcardPair>) -> Box<Fixed> {
    Box::new(Fixed { name, pairs })
}

#[test]
fn chain_stops_at_first_non_empty() {
    let doc = Html::parse_document("<p>x</p>");
    let chain: Vec<Box<dyn Strategy>> = vec![
        fixed("empty", vec![]),
        fixed("hit", vec![p("a", "1")]),
        fixed("never", vec![p("b", "2")]),
    ];
    let (name, pairs) = run_chain(&doc, &chain).unwrap();
    assert_eq!(name, "hit");
    assert_eq!(pairs, vec![p("a", "1")]);
}

#[test]
fn chain_with_nothing_is_none() {
    let doc = Html::parse_document("<p>x</p>");
    let chain: Vec<Box<dyn Strategy>> = vec![fixed("a", vec![]), fixed("b", vec![])];
    assert!(run_chain(&doc, &chain).is_none());
}

#[test]
fn default_chain_order() {
    let names: Vec<&str> = default_chain().iter().map(|s| s.name()).collect();
    assert_eq!(names, ["structural", "proximity", "language-anchor", "numbered"]);
}

#[test]
fn structural_takes_first_left_right_pair_per_row() {
    let html = r#"<div><div><div><div class="row">
        <span>kernel</span><span>korrel</span>
    </div></div></div></div>"#;
    let doc = Html::parse_document(html);
    assert_eq!(Structural.attempt(&doc), vec![p("kernel", "korrel")]);
}

#[test]
fn structural_skips_login_chrome() {
    let html = r#"<div><div><div><div>
        <a>Log in</a><a>Register now</a>
    </div></div></div></div>"#;
    let doc = Html::parse_document(html);
    assert!(Structural.attempt(&doc).is_empty());
}

#[test]
fn proximity_pairs_siblings() {
    let html = "<section><b>coil</b><i>kronkel</i></section>";
    let doc = Html::parse_document(html);
    let pairs = Proximity.attempt(&doc);
    assert!(pairs.contains(&p("coil", "kronkel")));
    assert!(pairs.contains(&p("kronkel", "coil")));
}

#[test]
fn language_anchor_zips_columns() {
    let html = r#"
        <div class="left"><h3>Engels</h3><p>kernel</p><p>coil</p><p>frail</p></div>
        <div class="right"><h3>Nederlands</h3><p>korrel</p><p>kronkel</p></div>"#;
    let doc = Html::parse_document(html);
    assert_eq!(
        LanguageAnchor.attempt(&doc),
        vec![p("kernel", "korrel"), p("coil", "kronkel")]
    );
}

#[test]
fn language_anchor_needs_both_labels() {
    let doc = Html::parse_document("<div><h3>Engels</h3><p>kernel</p></div>");
    assert!(LanguageAnchor.attempt(&doc).is_empty());
}

#[test]
fn numbered_list_items() {
    let html = "<ol><li>kernel: korrel</li><li>coil = kronkel</li><li>frail - broos</li><li>noise</li></ol>\
                <ul><li>not: numbered</li></ul>";
    let doc = Html::parse_document(html);
    assert_eq!(
        Numbered.attempt(&doc),
        vec![p("kernel", "korrel"), p("coil", "kronkel"), p("frail", "broos")]
    );
}
