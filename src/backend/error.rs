use thiserror::Error;

/// Failures surfaced by [`BackendClient`](super::BackendClient).
///
/// None of these are retried; each is shown to the user as a single message.
#[derive(Debug, Error)]
pub enum BackendError {
    /// Rejected locally; no request was sent.
    #[error("Query is required")]
    EmptyQuery,

    /// The transport failed and no response reached us.
    #[error("Unable to reach the INTELLIA backend: {0}")]
    Network(String),

    /// The backend answered with a non-success status.
    #[error("{message}")]
    Backend { status: u16, message: String },

    /// The backend answered 2xx but the body did not decode.
    #[error("Invalid response from backend: {0}")]
    InvalidBody(String),
}

impl BackendError {
    /// The single line shown in the UI for this failure.
    pub fn user_message(&self) -> String {
        self.to_string()
    }

    /// True when the request reached the backend (bad status or bad body).
    pub fn is_backend(&self) -> bool {
        matches!(self, Self::Backend { .. } | Self::InvalidBody(_))
    }

    /// True when no response reached us.
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }
}

impl From<reqwest::Error> for BackendError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::InvalidBody(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}
