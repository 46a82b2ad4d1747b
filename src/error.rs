use axum::http::StatusCode;
use thiserror::Error;

/// Failures a single search request can end in. None of them are retried.
#[derive(Debug, Error)]
pub enum SearchError {
    /// `page` was present but not a positive integer.
    #[error("invalid page number: {0:?}")]
    InvalidPageNumber(String),

    /// Connect, DNS, timeout or body-read failure talking to the news API.
    #[error("news API unreachable: {0}")]
    UpstreamUnreachable(#[source] reqwest::Error),

    /// The body matched neither the article payload nor the error payload.
    #[error("unexpected response from news API: {0}")]
    UpstreamProtocolError(String),

    /// The news API answered with a structured error.
    #[error("{0}")]
    UpstreamRejected(String),
}

impl SearchError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            SearchError::InvalidPageNumber(_) => StatusCode::BAD_REQUEST,
            SearchError::UpstreamUnreachable(_)
            | SearchError::UpstreamProtocolError(_)
            | SearchError::UpstreamRejected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Text shown to the user. Upstream messages are forwarded verbatim,
    /// internal details are not.
    pub fn user_message(&self) -> String {
        match self {
            SearchError::InvalidPageNumber(_) => "Page must be a positive whole number".to_string(),
            SearchError::UpstreamUnreachable(_) | SearchError::UpstreamProtocolError(_) => {
                "Unexpected server error".to_string()
            }
            SearchError::UpstreamRejected(message) => message.clone(),
        }
    }
}
