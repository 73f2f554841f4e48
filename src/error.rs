//! Error taxonomy.
//!
//! Two distinct error worlds, never mixed:
//!
//! - [`Error`] — per-request outcomes. Every variant maps to exactly one
//!   HTTP status; the router's single outer boundary turns it into the
//!   `{"error": "..."}` envelope.
//! - [`ServeError`] — infrastructure failures: binding the port, accepting
//!   a connection. These never reach a client.

use http::StatusCode;
use thiserror::Error;

/// Failures from a collaborator's transport, not its contract.
///
/// An invalid token or an absent record is a normal result, never a
/// `CollabError`. This type is for the identity service being unreachable,
/// the store timing out, the log sink rejecting a write.
pub type CollabError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The outcome of a request that did not produce a success response.
///
/// `Unexpected` carries the raw collaborator or parse message and surfaces
/// it verbatim in the 500 body. Callers of this service are trusted
/// operators behind auth; the message is more useful than a redacted
/// "internal error".
#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid token")]
    InvalidToken,

    #[error("Record not found")]
    RecordNotFound,

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("{0}")]
    Unexpected(String),
}

impl Error {
    /// The HTTP status this error renders as.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidToken => StatusCode::UNAUTHORIZED,
            Self::RecordNotFound => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Unexpected(e.to_string())
    }
}

impl From<CollabError> for Error {
    fn from(e: CollabError) -> Self {
        Self::Unexpected(e.to_string())
    }
}

/// The error type returned by [`Server::serve`](crate::Server::serve).
///
/// Application-level outcomes (401, 404, etc.) are expressed as HTTP
/// responses, not as this type.
#[derive(Debug, Error)]
#[error("io: {0}")]
pub struct ServeError(#[from] std::io::Error);
