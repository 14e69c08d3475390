//! Downloads the source document.

use anyhow::{Context, Result};
use reqwest::header::CONTENT_TYPE;
use tracing::{info, trace};

use crate::utils::{charset_of, string_from_bytes};

/// GETs `url` and returns the body as text.
///
/// Transport failures and non-2xx statuses come back as an error whose
/// message starts with the offending URL. Any 2xx body is decoded, lossily
/// if need be.
pub async fn get_text(client: &reqwest::Client, url: &str) -> Result<String> {
    fetch(client, url)
        .await
        .with_context(|| format!("Error fetching {url}"))
}

async fn fetch(client: &reqwest::Client, url: &str) -> Result<String> {
    trace!("url: {}", url);
    let resp = client.get(url).send().await?.error_for_status()?;
    let charset = resp
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(charset_of)
        .map(str::to_owned);
    let body = resp.bytes().await?;
    info!(url, bytes = body.len(), charset = charset.as_deref(), "fetched document");
    Ok(string_from_bytes(body, charset.as_deref()))
}
