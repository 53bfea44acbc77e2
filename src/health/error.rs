// src/health/error.rs
use std::fmt;

/// Broad failure classes, in the order a check can hit them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// No complete response was obtained.
    Transport,
    /// A response arrived but did not meet expectations.
    Validation,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::Transport => f.write_str("transport error"),
            FailureKind::Validation => f.write_str("validation error"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    #[error("Failed to create HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Request timed out after {secs}s: {source}")]
    Timeout {
        secs: u64,
        #[source]
        source: reqwest::Error,
    },

    #[error("Invalid return-code [{0}]")]
    InvalidStatus(u16),

    #[error("Failed to read response body: {0}")]
    BodyRead(#[source] reqwest::Error),

    #[error("Return doesn't contain [{0}]")]
    MissingSubstring(String),
}

impl CheckError {
    pub fn kind(&self) -> FailureKind {
        match self {
            CheckError::Client(_)
            | CheckError::Transport(_)
            | CheckError::Timeout { .. }
            | CheckError::BodyRead(_) => FailureKind::Transport,
            CheckError::InvalidStatus(_) | CheckError::MissingSubstring(_) => {
                FailureKind::Validation
            }
        }
    }
}
