//! Access-log collaborator.
//!
//! One entry per successful retrieval, written before the response goes
//! out. Entries are write-only from this service's point of view — nothing
//! here ever reads the log back.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::auth::TokenPayload;
use crate::error::CollabError;
use crate::request::Request;

/// One access event: who read what, when.
#[derive(Clone, Debug, Serialize)]
pub struct AccessEntry {
    pub method: String,
    pub path: String,
    pub subject: String,
    pub timestamp: DateTime<Utc>,
}

impl AccessEntry {
    pub fn new(req: &Request, token: Option<&TokenPayload>) -> Self {
        Self {
            method: req.method().to_string(),
            path: req.path().to_owned(),
            subject: token.map_or_else(|| "unknown".to_owned(), |t| t.subject.clone()),
            timestamp: Utc::now(),
        }
    }
}

/// Appends access events to a log sink.
#[async_trait]
pub trait AccessLogger: Send + Sync {
    async fn log(&self, entry: AccessEntry) -> Result<(), CollabError>;
}

/// Logger that emits each entry as a structured tracing event.
pub struct TracingAccessLogger;

#[async_trait]
impl AccessLogger for TracingAccessLogger {
    async fn log(&self, entry: AccessEntry) -> Result<(), CollabError> {
        tracing::info!(
            method = %entry.method,
            path = %entry.path,
            subject = %entry.subject,
            timestamp = %entry.timestamp.to_rfc3339(),
            "record accessed"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;
    use http::{HeaderMap, Method};

    #[test]
    fn entry_captures_request_metadata_and_subject() {
        let req = Request::new(
            Method::GET,
            "/records/abc".to_owned(),
            HeaderMap::new(),
            Bytes::new(),
        );
        let token = TokenPayload {
            subject: "alice".to_owned(),
            claims: serde_json::Value::Null,
        };

        let entry = AccessEntry::new(&req, Some(&token));
        assert_eq!(entry.method, "GET");
        assert_eq!(entry.path, "/records/abc");
        assert_eq!(entry.subject, "alice");
    }

    #[test]
    fn entry_without_a_decoded_token_marks_the_subject_unknown() {
        let req = Request::new(Method::GET, "/r/1".to_owned(), HeaderMap::new(), Bytes::new());
        assert_eq!(AccessEntry::new(&req, None).subject, "unknown");
    }
}
