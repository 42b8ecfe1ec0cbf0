//! Error types for feed loading.
//!
//! # Design
//! Callers only ever see two kinds of failure. `Connectivity` means the
//! request never produced a response; `InvalidData` means a response arrived
//! but could not be turned into feed items (wrong status, malformed body, or
//! a malformed entry). The precise decode reason is logged, not returned.

use thiserror::Error;

/// Errors delivered through a `LoadResult`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LoadError {
    /// The transport failed before a response was received.
    #[error("could not reach the feed server")]
    Connectivity,

    /// A response was received but did not contain a valid feed.
    #[error("the feed server returned invalid data")]
    InvalidData,
}

/// Transport-level failure reported by an `HttpClient`.
///
/// Carries a human-readable cause only; the loader maps every transport
/// failure to `LoadError::Connectivity` regardless of the cause.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("transport failed: {message}")]
pub struct TransportError {
    message: String,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<ureq::Error> for TransportError {
    fn from(err: ureq::Error) -> Self {
        Self::new(err.to_string())
    }
}
