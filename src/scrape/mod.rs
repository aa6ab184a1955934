// src/scrape/mod.rs
pub mod dedup;
pub mod extract;
pub mod language;
pub mod selectors;
pub mod site;
pub mod strategies;
pub mod wait;

use scraper::Html;

use crate::{
    config::options::{ScrapeMode, ScrapeOptions},
    core::{FileSource, PageSource, UrlSource},
    error::ScrapeError,
    model::ExtractionResult,
    progress::Progress,
};

pub use dedup::dedup;
pub use selectors::ListSelectors;

/// Top-level: load the page, extract according to the mode, refuse empty results.
pub fn run(
    source: &mut dyn PageSource,
    opts: &ScrapeOptions,
    progress: Option<&mut dyn Progress>,
) -> Result<ExtractionResult, ScrapeError> {
    logf!("Scrape: Begin source={} mode={:?}", source.describe(), opts.mode);

    let result = match opts.mode {
        ScrapeMode::Live => wait::wait_and_extract(source, opts, progress)?,
        ScrapeMode::Heuristic => run_heuristic(source, opts, progress)?,
    };

    if result.is_empty() {
        logf!("Scrape: structure found but no usable pairs");
        return Err(ScrapeError::NothingFound);
    }

    logf!(
        "Scrape: OK pairs={} languages={}/{}",
        result.len(),
        result.language_info.term_language,
        result.language_info.definition_language
    );
    Ok(result)
}

fn run_heuristic(
    source: &mut dyn PageSource,
    opts: &ScrapeOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<ExtractionResult, ScrapeError> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(1);
        p.log("Trying fallback strategies…");
    }

    let html = source.load()?;
    let doc = Html::parse_document(&html);
    let sel = ListSelectors::compile(&opts.selectors)?;

    let chain = strategies::default_chain();
    let flashcards = match strategies::run_chain(&doc, &chain) {
        Some((name, pairs)) => {
            logf!("Scrape: strategy {} produced {} raw pairs", name, pairs.len());
            dedup(pairs)
        }
        None => Vec::new(),
    };
    let language_info = language::detect(&doc, None, &sel);

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    Ok(ExtractionResult { flashcards, language_info })
}

/// Build a source from what the user typed: `http(s)://…` → URL, anything else → file.
/// URLs are checked against the supported-page pattern first.
pub fn open_source(text: &str, mode: ScrapeMode) -> Result<Box<dyn PageSource + Send>, ScrapeError> {
    let t = text.trim();
    if site::looks_like_url(t) {
        site::check_url(t, mode)?;
        Ok(Box::new(UrlSource::new(t)?))
    } else {
        Ok(Box::new(FileSource::new(t)))
    }
}
