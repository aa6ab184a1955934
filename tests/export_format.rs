// tests/export_format.rs
use studygo_scrape::{
    csv::{escape_field, to_export_string, Delimiter},
    model::FlashcardPair,
};

fn p(t: &str, d: &str) -> FlashcardPair {
    FlashcardPair::new(t, d)
}

#[test]
fn comma_quotes_only_fields_that_need_it() {
    let out = to_export_string(&[p("a,b", "c\"d")], Delimiter::Comma);
    assert_eq!(out, "\"a,b\",\"c\"\"d\"\n");

    let out = to_export_string(&[p("plain", "a,b")], Delimiter::Comma);
    assert_eq!(out, "plain,\"a,b\"\n");
}

#[test]
fn tab_leaves_commas_and_quotes_alone() {
    let out = to_export_string(&[p("a,b", "c\"d")], Delimiter::Tab);
    assert_eq!(out, "a,b\tc\"d\n");
}

#[test]
fn delimiter_inside_field_becomes_space() {
    assert_eq!(escape_field("x\ty", Delimiter::Tab), "x y");
    assert_eq!(escape_field("1+1=2", Delimiter::Equals), "1+1 2");
    // Other delimiters' characters are untouched.
    assert_eq!(escape_field("x=y", Delimiter::Tab), "x=y");
}

#[test]
fn line_breaks_flatten_for_every_delimiter() {
    for d in Delimiter::ALL {
        let out = to_export_string(&[p("one\r\ntwo", "three\rfour\nfive")], d);
        let sep = d.as_char();
        assert_eq!(out, format!("one two{sep}three four five\n"), "{d:?}");
    }
}

#[test]
fn one_line_per_pair_no_header() {
    let out = to_export_string(&[p("kernel", "korrel"), p("coil", "kronkel")], Delimiter::Equals);
    assert_eq!(out, "kernel=korrel\ncoil=kronkel\n");
    assert_eq!(to_export_string(&[], Delimiter::Tab), "");
}

#[test]
fn delimiter_names_and_fallback() {
    assert_eq!(Delimiter::from_name("tab"), Some(Delimiter::Tab));
    assert_eq!(Delimiter::from_name("\t"), Some(Delimiter::Tab));
    assert_eq!(Delimiter::from_name("Comma"), Some(Delimiter::Comma));
    assert_eq!(Delimiter::from_name("="), Some(Delimiter::Equals));
    assert_eq!(Delimiter::from_name("semicolon"), None);
    assert_eq!(Delimiter::parse_or_comma("semicolon"), Delimiter::Comma);
    assert_eq!(Delimiter::parse_or_comma("equals"), Delimiter::Equals);
}

#[test]
fn extensions_follow_delimiter() {
    assert_eq!(Delimiter::Comma.ext(), "csv");
    assert_eq!(Delimiter::Tab.ext(), "tsv");
    assert_eq!(Delimiter::Equals.ext(), "txt");
}
