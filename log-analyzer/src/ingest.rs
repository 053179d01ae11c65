use crate::error::FetchError;
use tracing::{debug, info};

/// Downloads the whole log body. Any non-2xx status is an error; nothing is
/// retried.
pub fn fetch(url: &str) -> Result<String, FetchError> {
    info!(%url, "fetching access log");
    let transport = |source| FetchError::Transport {
        url: url.to_string(),
        source,
    };
    let response = reqwest::blocking::get(url).map_err(transport)?;
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status,
        });
    }
    let body = response.text().map_err(transport)?;
    debug!(bytes = body.len(), "fetched access log");
    Ok(body)
}
