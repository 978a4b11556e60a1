//! Application error taxonomy.
//!
//! Three kinds cover everything that can fail at runtime: the network, the
//! image API, and the key-value store. Search failures surface to the user
//! as one generic message; storage failures never surface at all. The
//! detailed cause stays in `message` and only ever reaches the logs.

use serde::{Deserialize, Serialize};

use crate::FETCH_ERROR_MESSAGE;

/// Broad classification of a runtime failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorKind {
    /// The search request never completed a usable HTTP exchange.
    Network,
    /// The image API answered, but with an error status or a malformed body.
    Api,
    /// Reading or writing the key-value store failed.
    Storage,
}

impl ErrorKind {
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Network => "NETWORK_ERROR",
            Self::Api => "API_ERROR",
            Self::Storage => "STORAGE_ERROR",
        }
    }

    /// Whether failures of this kind are shown to the user at all.
    /// Storage failures fail soft and stay internal.
    #[must_use]
    pub const fn is_surfaced(self) -> bool {
        matches!(self, Self::Network | Self::Api)
    }
}

/// A runtime failure and its internal detail.
///
/// `message` is for logs. The user only ever sees the output of
/// [`AppError::user_message`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppError {
    pub kind: ErrorKind,
    pub message: String,
}

impl AppError {
    #[must_use]
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Network, message)
    }

    #[must_use]
    pub fn api(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Api, message)
    }

    #[must_use]
    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Storage, message)
    }

    #[must_use]
    pub const fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// The generic message shown to the user, or `None` for kinds that are
    /// never surfaced.
    #[must_use]
    pub fn user_message(&self) -> Option<&'static str> {
        if self.kind.is_surfaced() {
            Some(FETCH_ERROR_MESSAGE)
        } else {
            None
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code(), self.message)
    }
}

impl std::error::Error for AppError {}

impl From<crux_http::Error> for AppError {
    fn from(err: crux_http::Error) -> Self {
        use crux_http::Error as HttpError;
        match &err {
            HttpError::Io(_) | HttpError::Timeout => Self::network(err.to_string()),
            // Everything else means the API answered and we could not use
            // the answer: error status, bad JSON, bad URL.
            _ => Self::api(err.to_string()),
        }
    }
}

impl From<crux_kv::error::KeyValueError> for AppError {
    fn from(err: crux_kv::error::KeyValueError) -> Self {
        Self::storage(err.to_string())
    }
}
