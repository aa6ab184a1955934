// src/scrape/site.rs
use reqwest::Url;

use crate::{
    config::{consts::SITE_HOST_SUFFIX, options::ScrapeMode},
    error::ScrapeError,
};

pub fn looks_like_url(text: &str) -> bool {
    let t = text.trim_start();
    t.starts_with("http://") || t.starts_with("https://")
}

fn is_studygo_host(url: &Url) -> bool {
    url.host_str().is_some_and(|h| h.ends_with(SITE_HOST_SUFFIX))
}

/// `…studygo.com/<lang>/learn/lists/<id>/…`
pub fn is_supported_url(url: &str) -> bool {
    let Ok(url) = Url::parse(url) else { return false };
    if !is_studygo_host(&url) {
        return false;
    }
    let segs: Vec<&str> = url
        .path_segments()
        .map(|it| it.filter(|s| !s.is_empty()).collect())
        .unwrap_or_default();
    segs.len() >= 3 && segs[1] == "learn" && segs[2] == "lists"
}

/// Live extraction needs a list page. The heuristic chain is looser and only
/// needs the site itself.
pub fn check_url(url: &str, mode: ScrapeMode) -> Result<(), ScrapeError> {
    let ok = match mode {
        ScrapeMode::Live => is_supported_url(url),
        ScrapeMode::Heuristic => Url::parse(url).is_ok_and(|u| is_studygo_host(&u)),
    };
    if ok {
        Ok(())
    } else {
        logw!("Site: rejected {} ({:?})", url, mode);
        Err(ScrapeError::UnsupportedPage(s!(url)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_pages_only() {
        assert!(is_supported_url("https://www.studygo.com/nl/learn/lists/123/woorden"));
        assert!(is_supported_url("https://studygo.com/en/learn/lists/9"));
        assert!(!is_supported_url("https://www.studygo.com/nl/learn/"));
        assert!(!is_supported_url("https://www.studygo.com/nl/home/lists/1"));
        assert!(!is_supported_url("https://example.com/nl/learn/lists/1"));
        assert!(!is_supported_url("not a url"));
    }

    #[test]
    fn heuristic_accepts_any_site_page() {
        assert!(check_url("https://www.studygo.com/nl/", ScrapeMode::Heuristic).is_ok());
        assert!(check_url("https://www.studygo.com/nl/", ScrapeMode::Live).is_err());
    }
}
