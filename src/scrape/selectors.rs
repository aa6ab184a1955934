// src/scrape/selectors.rs
use scraper::Selector;

use crate::{config::options::SelectorSet, error::ScrapeError};

pub fn compile(css: &str) -> Result<Selector, ScrapeError> {
    Selector::parse(css).map_err(|_| ScrapeError::Selector(s!(css)))
}

/// Compiled form of `SelectorSet`.
pub struct ListSelectors {
    pub container: Selector,
    pub item: Selector,
    pub term: Selector,
    pub definition: Selector,
    pub header: Selector,
    pub header_label: Selector,
}

impl ListSelectors {
    pub fn compile(set: &SelectorSet) -> Result<Self, ScrapeError> {
        Ok(Self {
            container: compile(&set.container)?,
            item: compile(&set.item)?,
            term: compile(&set.term)?,
            definition: compile(&set.definition)?,
            header: compile(&set.header)?,
            header_label: compile(&set.header_label)?,
        })
    }

    pub fn studygo() -> Result<Self, ScrapeError> {
        Self::compile(&SelectorSet::default())
    }
}
