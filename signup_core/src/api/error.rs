use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Easy alias for error handling
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can happen while talking to the account service
#[derive(Debug, Error)]
pub enum Error {
    /// We couldn't parse a URL, for example if the base URL was invalid.
    #[error("URL error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// We couldn't send the request or read the response, for example if the
    /// server is down or returned a body we didn't expect.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server rejected the request and told us why.
    #[error("{0}")]
    Client(String),

    /// The server had a problem it didn't tell us about.
    #[error("Server error")]
    Server,

    /// The server returned a status we don't know how to handle (the server
    /// is not supposed to issue redirects or informational responses.)
    #[error("Unexpected status: {0}")]
    Unexpected(StatusCode),
}

/// The body the server sends along with a 4xx.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResp {
    /// What went wrong, suitable for showing to a human
    pub error: String,
}
