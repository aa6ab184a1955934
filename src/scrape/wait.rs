// src/scrape/wait.rs
//
// Poll the source until the list renders or the timeout budget runs out.
use std::thread;

use scraper::Html;

use super::{extract, ListSelectors};
use crate::{
    config::options::ScrapeOptions,
    core::PageSource,
    error::ScrapeError,
    model::ExtractionResult,
    progress::Progress,
};

/// Reload, parse and try to extract, every `interval`, at most
/// `ceil(timeout / interval)` times. Load errors abort immediately.
pub fn wait_and_extract(
    source: &mut dyn PageSource,
    opts: &ScrapeOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<ExtractionResult, ScrapeError> {
    let sel = ListSelectors::compile(&opts.selectors)?;
    let max = opts.poll.max_attempts();
    if let Some(p) = progress.as_deref_mut() {
        p.begin(max);
    }

    for n in 1..=max {
        let html = source.load()?;
        let found_container = {
            let doc = Html::parse_document(&html);
            if let Some(res) = extract::extract_document(&doc, &sel) {
                logd!("Wait: list ready on attempt {}/{}", n, max);
                if let Some(p) = progress.as_deref_mut() {
                    p.finish();
                }
                return Ok(res);
            }
            doc.select(&sel.container).next().is_some()
        };

        if let Some(p) = progress.as_deref_mut() {
            p.attempt(n, found_container);
        }
        logd!("Wait: attempt {}/{} not ready (container={})", n, max, found_container);

        if n < max {
            thread::sleep(opts.poll.interval);
        }
    }

    let waited_ms = u64::try_from(opts.poll.timeout.as_millis()).unwrap_or(u64::MAX);
    logw!("Wait: gave up after {} attempts ({} ms)", max, waited_ms);
    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    Err(ScrapeError::Timeout { waited_ms })
}
