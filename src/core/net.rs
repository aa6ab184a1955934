// src/core/net.rs

// Blocking HTTP GET for list pages.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::config::consts::{HTTP_TIMEOUT_SECS, USER_AGENT};
use crate::error::ScrapeError;

pub fn client() -> Result<Client, ScrapeError> {
    let c = Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
        .build()?;
    Ok(c)
}

pub fn http_get(client: &Client, url: &str) -> Result<String, ScrapeError> {
    let resp = client.get(url).send()?;
    let status = resp.status();
    if !status.is_success() {
        return Err(ScrapeError::HttpStatus { status: status.as_u16(), url: s!(url) });
    }
    Ok(resp.text()?)
}
