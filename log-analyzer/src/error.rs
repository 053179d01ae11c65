use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} answered with HTTP {status}")]
    Status { url: String, status: StatusCode },
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("could not read log rows: {0}")]
    Rows(#[from] csv::Error),

    #[error("could not write report: {0}")]
    Io(#[from] std::io::Error),
}
