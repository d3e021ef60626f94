//! NDBC client error types.

/// Ways a realtime report fetch can fail.
///
/// Each variant is a distinct outcome the web layer maps to a response.
#[derive(Debug, thiserror::Error)]
pub enum NdbcError {
    /// Provider has no such station or no current report (HTTP 404)
    #[error("Station not found")]
    NotFound,

    /// Provider answered with some other non-200 status
    #[error("HTTP {status}")]
    Upstream { status: u16 },

    /// Request did not complete within the configured timeout
    #[error("Request timed out")]
    Timeout,

    /// Connection, TLS, or body transfer failure
    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// The HTTP client could not be constructed
    #[error("client setup failed: {0}")]
    Setup(String),
}

impl From<reqwest::Error> for NdbcError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            NdbcError::Timeout
        } else {
            NdbcError::Transport(err)
        }
    }
}
