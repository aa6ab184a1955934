// tests/export_file.rs
use std::fs;

use studygo_scrape::{
    config::options::ExportOptions,
    csv::Delimiter,
    error::ExportError,
    file::{resolve_out_path, write_export, write_export_to},
    model::FlashcardPair,
};

fn pairs() -> Vec<FlashcardPair> {
    vec![FlashcardPair::new("kernel", "korrel"), FlashcardPair::new("to embark on", "beginnen aan")]
}

#[test]
fn writes_default_name_with_delimiter_extension() {
    let dir = tempfile::tempdir().unwrap();
    let mut opts = ExportOptions::with_delimiter(Delimiter::Equals);
    opts.set_path(dir.path().join("studygo_flashcards").to_str().unwrap());

    let path = write_export(&opts, &pairs()).unwrap();
    assert_eq!(path.file_name().unwrap(), "studygo_flashcards.txt");
    assert_eq!(fs::read_to_string(&path).unwrap(), "kernel=korrel\nto embark on=beginnen aan\n");
}

#[test]
fn empty_export_is_refused_and_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.tsv");
    let err = write_export_to(&path, &[], Delimiter::Tab).unwrap_err();
    assert!(matches!(err, ExportError::Empty));
    assert!(!path.exists());
}

#[test]
fn creates_missing_parent_dirs() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("a").join("b").join("list.csv");
    write_export_to(&path, &pairs(), Delimiter::Comma).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "kernel,korrel\nto embark on,beginnen aan\n");
}

#[test]
fn directory_hint_gets_default_file_name() {
    let dir = tempfile::tempdir().unwrap();
    let opts = ExportOptions::with_delimiter(Delimiter::Comma);
    let hint = format!("{}/exports/", dir.path().display());
    let p = resolve_out_path(&hint, &opts).unwrap();
    assert_eq!(p.file_name().unwrap(), "studygo_flashcards.csv");
    assert!(p.parent().unwrap().is_dir());
}

#[test]
fn named_file_takes_the_delimiter_extension() {
    let opts = ExportOptions::with_delimiter(Delimiter::Tab);
    let p = resolve_out_path("list.csv", &opts).unwrap();
    assert_eq!(p, std::path::PathBuf::from("list.tsv"));

    let opts = ExportOptions::with_delimiter(Delimiter::Equals);
    assert_eq!(resolve_out_path("words", &opts).unwrap(), std::path::PathBuf::from("words.txt"));
}

#[test]
fn resolved_path_round_trips_through_export_options() {
    let dir = tempfile::tempdir().unwrap();
    let mut opts = ExportOptions::with_delimiter(Delimiter::Tab);
    let given = format!("{}/list.csv", dir.path().display());
    let path = resolve_out_path(&given, &opts).unwrap();
    opts.set_path(&path.to_string_lossy());

    let written = write_export(&opts, &pairs()).unwrap();
    assert_eq!(written.file_name().unwrap(), "list.tsv");
    assert_eq!(fs::read_to_string(&written).unwrap(), "kernel\tkorrel\nto embark on\tbeginnen aan\n");
}
