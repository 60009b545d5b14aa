use serde::{Deserialize, Serialize};

/// Status line of a failed API response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpError {
    pub status: u16,
    pub reason: String,
}

impl HttpError {
    pub fn new(status: u16, reason: impl Into<String>) -> Self {
        Self {
            status,
            reason: reason.into(),
        }
    }

    /// Client and server errors, i.e. anything in `[400, 600)`.
    pub fn is_error_status(status: u16) -> bool {
        (400..600).contains(&status)
    }
}

impl std::fmt::Display for HttpError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "Server returned {} {}", self.status, self.reason)
    }
}

impl std::error::Error for HttpError {}
