// src/fetch/mod.rs

use reqwest::Client;
use tracing::{debug, instrument};
use url::Url;

use crate::error::{ReportError, Result};

/// GET the published CSV export at `url` and return its body.
///
/// A single attempt: connection and body errors map to
/// [`ReportError::Network`], non-2xx answers to [`ReportError::Status`].
#[instrument(level = "info", skip(client), fields(url = %url))]
pub async fn fetch_csv(client: &Client, url: &Url) -> Result<String> {
    let network = |source| ReportError::Network {
        url: url.to_string(),
        source,
    };

    let resp = client.get(url.clone()).send().await.map_err(network)?;
    let status = resp.status();
    if !status.is_success() {
        return Err(ReportError::Status {
            url: url.to_string(),
            status,
        });
    }

    let body = resp.text().await.map_err(network)?;
    debug!(bytes = body.len(), "fetched sheet");
    Ok(body)
}
