//! Bearer-token validation collaborator.
//!
//! The service never decodes or verifies credentials itself. It hands the
//! request to a [`TokenValidator`] and acts on the answer. Deployments
//! implement the trait against their identity service; the shipped
//! [`StaticTokenValidator`] covers local runs and tests.

use std::collections::HashMap;

use async_trait::async_trait;
use serde::Serialize;

use crate::error::CollabError;
use crate::request::Request;

/// The decoded identity behind a valid credential.
#[derive(Clone, Debug, Serialize)]
pub struct TokenPayload {
    /// Who the token belongs to.
    pub subject: String,
    /// Whatever else the validator decoded. Opaque to this service.
    pub claims: serde_json::Value,
}

/// The validator's verdict on one request.
///
/// An invalid credential is a normal verdict, not an error — `Err` from
/// [`TokenValidator::validate`] means the validator itself failed.
pub struct Validation {
    pub is_valid: bool,
    pub token: Option<TokenPayload>,
}

impl Validation {
    pub fn valid(token: TokenPayload) -> Self {
        Self { is_valid: true, token: Some(token) }
    }

    pub fn invalid() -> Self {
        Self { is_valid: false, token: None }
    }
}

/// Decides whether a request carries a valid bearer credential.
#[async_trait]
pub trait TokenValidator: Send + Sync {
    async fn validate(&self, req: &Request) -> Result<Validation, CollabError>;
}

/// A validator backed by a fixed token → subject table.
///
/// Suitable for local runs and single-tenant deployments where tokens are
/// provisioned out of band. Claims are always `null`.
pub struct StaticTokenValidator {
    tokens: HashMap<String, String>,
}

impl StaticTokenValidator {
    pub fn new(tokens: impl IntoIterator<Item = (String, String)>) -> Self {
        Self { tokens: tokens.into_iter().collect() }
    }
}

#[async_trait]
impl TokenValidator for StaticTokenValidator {
    async fn validate(&self, req: &Request) -> Result<Validation, CollabError> {
        match req.bearer_token().and_then(|t| self.tokens.get(t)) {
            Some(subject) => Ok(Validation::valid(TokenPayload {
                subject: subject.clone(),
                claims: serde_json::Value::Null,
            })),
            None => Ok(Validation::invalid()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;
    use http::{HeaderMap, Method};

    fn validator() -> StaticTokenValidator {
        StaticTokenValidator::new([("s3cret".to_owned(), "alice".to_owned())])
    }

    fn request_with_token(token: Option<&str>) -> Request {
        let mut headers = HeaderMap::new();
        if let Some(t) = token {
            headers.insert("authorization", format!("Bearer {t}").parse().unwrap());
        }
        Request::new(Method::GET, "/records/x".to_owned(), headers, Bytes::new())
    }

    #[tokio::test]
    async fn known_token_is_valid_with_its_subject() {
        let verdict = validator()
            .validate(&request_with_token(Some("s3cret")))
            .await
            .unwrap();
        assert!(verdict.is_valid);
        assert_eq!(verdict.token.unwrap().subject, "alice");
    }

    #[tokio::test]
    async fn unknown_or_missing_token_is_invalid_not_an_error() {
        for req in [request_with_token(Some("wrong")), request_with_token(None)] {
            let verdict = validator().validate(&req).await.unwrap();
            assert!(!verdict.is_valid);
            assert!(verdict.token.is_none());
        }
    }
}
