//! Lookup sheet fetching.
//!
//! Lookup sheets are shared spreadsheet links. A link is rewritten to the
//! spreadsheet's CSV export endpoint, fetched with a bounded number of
//! redirects and an absolute timeout, and tokenized into a grid.

use std::time::Duration;

use reqwest::redirect::Policy;
use tracing::debug;

use crate::config::LookupSettings;
use crate::error::{ConverterError, ConverterResult};
use crate::models::Grid;

use super::parse_csv;

const DOCUMENT_PATH: &str = "/spreadsheets/d/";
const USER_AGENT: &str = concat!("shift-converter/", env!("CARGO_PKG_VERSION"));

/// Rewrites a spreadsheet sharing URL to its CSV export URL.
///
/// The document ID is the path segment after `/spreadsheets/d/`; a `gid=`
/// parameter in the query or fragment selects the sub-sheet.
///
/// # Example
///
/// ```
/// use shift_converter::sheets::export_url;
///
/// let url = export_url("https://docs.google.com/spreadsheets/d/abc123/edit#gid=42").unwrap();
/// assert_eq!(url, "https://docs.google.com/spreadsheets/d/abc123/export?format=csv&gid=42");
/// ```
pub fn export_url(sharing_url: &str) -> ConverterResult<String> {
    let invalid = || ConverterError::InvalidLookupUrl {
        url: sharing_url.to_string(),
    };

    let trimmed = sharing_url.trim();
    let doc_start = trimmed.find(DOCUMENT_PATH).ok_or_else(invalid)?;
    let base = &trimmed[..doc_start];
    let rest = &trimmed[doc_start + DOCUMENT_PATH.len()..];

    let id_end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    let document_id = &rest[..id_end];
    if base.is_empty() || document_id.is_empty() {
        return Err(invalid());
    }

    let gid = rest.find("gid=").map(|pos| {
        let digits = &rest[pos + 4..];
        let end = digits
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(digits.len());
        &digits[..end]
    });

    let mut url = format!("{}{}{}/export?format=csv", base, DOCUMENT_PATH, document_id);
    if let Some(gid) = gid.filter(|gid| !gid.is_empty()) {
        url.push_str("&gid=");
        url.push_str(gid);
    }
    Ok(url)
}

/// Fetches lookup sheets over HTTP.
#[derive(Debug, Clone)]
pub struct LookupFetcher {
    client: reqwest::Client,
}

impl LookupFetcher {
    /// Builds a fetcher honoring the configured timeout and redirect limit.
    pub fn new(settings: &LookupSettings) -> ConverterResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(settings.timeout_secs))
            .redirect(Policy::limited(settings.max_redirects))
            .build()
            .map_err(|e| ConverterError::HttpClientError {
                message: e.to_string(),
            })?;

        Ok(Self { client })
    }

    /// Fetches the CSV export of a shared sheet.
    pub async fn fetch_csv(&self, sharing_url: &str) -> ConverterResult<String> {
        let url = export_url(sharing_url)?;
        let failed = |message: String| ConverterError::LookupFetchFailed {
            url: url.clone(),
            message,
        };

        debug!(url = %url, "Fetching lookup sheet");
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| failed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(failed(format!("HTTP status {}", status)));
        }

        response.text().await.map_err(|e| failed(e.to_string()))
    }

    /// Fetches a shared sheet and tokenizes it into a grid.
    pub async fn fetch_grid(&self, sharing_url: &str) -> ConverterResult<Grid> {
        let text = self.fetch_csv(sharing_url).await?;
        let grid = parse_csv(&text)?;
        debug!(rows = grid.len(), "Lookup sheet decoded");
        Ok(grid)
    }
}
