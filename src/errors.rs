//! Unified error types and result handling.
//!
//! Failures are split along the taxonomy the console surfaces to the
//! operator: structured rejections and not-found responses carry the
//! server's own message verbatim, while transport problems and anything
//! without a parseable body collapse into a single generic string.

use thiserror::Error;

/// Fixed message shown for transport failures and unstructured server errors.
pub const SERVER_ERROR_MESSAGE: &str = "Server error!";

#[derive(Debug, Error)]
pub enum Error {
    /// Configuration could not be read or parsed.
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// A form field could not be coerced into its wire representation.
    #[error("Invalid form field: {message}")]
    Form { message: String },

    /// The service returned 404 for the requested promotion.
    #[error("{message}")]
    NotFound { message: String },

    /// The service rejected the request (4xx) with a structured message.
    #[error("{message}")]
    Rejected { status: u16, message: String },

    /// The service failed without a structured message (5xx or bad body).
    #[error("Server error!")]
    Server,

    /// The request never completed (connection, DNS, body read, ...).
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// The text shown in the flash area for this failure.
    ///
    /// Structured rejections and not-found responses surface the server's
    /// message verbatim; everything else is the fixed generic string.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::NotFound { message } | Self::Rejected { message, .. } => message.clone(),
            Self::Form { message } => message.clone(),
            Self::Config { message } => message.clone(),
            Self::Server | Self::Transport(_) | Self::Io(_) => SERVER_ERROR_MESSAGE.to_string(),
        }
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
