//! Local-file and remote-URL input loading

use crate::error::{Error, Result};
use reqwest::Client;
use tracing::debug;
use url::Url;

/// Check whether an input identifier is a remote URL
pub fn is_url(input: &str) -> bool {
    Url::parse(input).is_ok_and(|url| matches!(url.scheme(), "http" | "https"))
}

/// Fetch the raw bytes for one input identifier
pub async fn fetch_input(client: &Client, input: &str) -> Result<Vec<u8>> {
    if is_url(input) {
        download(client, input).await
    } else {
        read_file(input).await
    }
}

async fn download(client: &Client, url: &str) -> Result<Vec<u8>> {
    debug!(url, "downloading input");
    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(Error::HttpStatus {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }
    Ok(response.bytes().await?.to_vec())
}

async fn read_file(path: &str) -> Result<Vec<u8>> {
    debug!(path, "reading input file");
    tokio::fs::read(path)
        .await
        .map_err(|e| Error::input(path, e.to_string()))
}
