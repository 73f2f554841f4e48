//! The request router.
//!
//! Maps one inbound request to exactly one JSON response. Dispatch is on
//! method alone — `OPTIONS` answers the CORS preflight without touching any
//! collaborator, `POST` stores, `GET` retrieves, everything else is 405.
//!
//! Handlers return `Result<Response, Error>` and the single outer boundary
//! in [`Router::handle`] turns any `Err` into the `{"error": "..."}`
//! envelope. Nothing escapes without a response.

use std::sync::Arc;

use http::Method;

use crate::audit::{AccessEntry, AccessLogger};
use crate::auth::TokenValidator;
use crate::cors::Cors;
use crate::error::Error;
use crate::request::Request;
use crate::response::Response;
use crate::store::RecordStore;

/// The application router.
///
/// Holds no per-request state — only shared handles to the three
/// collaborators and the prebuilt CORS header set. Build it once at
/// startup; pass it to [`Server::serve`](crate::Server::serve).
pub struct Router {
    validator: Arc<dyn TokenValidator>,
    store: Arc<dyn RecordStore>,
    logger: Arc<dyn AccessLogger>,
    cors: Cors,
}

impl Router {
    pub fn new(
        validator: Arc<dyn TokenValidator>,
        store: Arc<dyn RecordStore>,
        logger: Arc<dyn AccessLogger>,
    ) -> Self {
        Self { validator, store, logger, cors: Cors::new() }
    }

    pub(crate) fn cors(&self) -> &Cors {
        &self.cors
    }

    /// Core hot path: one request in, one response out, always.
    pub async fn handle(&self, req: Request) -> Response {
        // Preflight short-circuit: no auth, no logging, no dispatch.
        if req.method() == Method::OPTIONS {
            return Response::empty();
        }

        match self.dispatch(req).await {
            Ok(response) => response,
            Err(e) => Response::error(e.status(), &e.to_string()),
        }
    }

    async fn dispatch(&self, req: Request) -> Result<Response, Error> {
        match req.method() {
            &Method::POST => self.store_record(req).await,
            &Method::GET => self.retrieve_record(req).await,
            _ => Err(Error::MethodNotAllowed),
        }
    }

    /// `POST *` — store the JSON body, answer `{"id": "<assigned>"}`.
    async fn store_record(&self, req: Request) -> Result<Response, Error> {
        let verdict = self.validator.validate(&req).await?;
        if !verdict.is_valid {
            return Err(Error::InvalidToken);
        }

        let payload: serde_json::Value = serde_json::from_slice(req.body())?;
        let id = self.store.store(payload).await?;

        Ok(Response::json(serde_json::to_vec(
            &serde_json::json!({ "id": id }),
        )?))
    }

    /// `GET /<prefix>/<id>` — fetch a record, log the access, answer with
    /// the record itself.
    async fn retrieve_record(&self, req: Request) -> Result<Response, Error> {
        let verdict = self.validator.validate(&req).await?;
        if !verdict.is_valid {
            return Err(Error::InvalidToken);
        }

        // The record id is path segment 2: `/records/abc123` → `abc123`.
        let record = match req.segment(2) {
            Some(id) => self.store.get(id).await?,
            None => None,
        };
        let record = record.ok_or(Error::RecordNotFound)?;

        // Awaited inline: the log write lands before the response leaves,
        // and a failing log sink fails the read.
        self.logger
            .log(AccessEntry::new(&req, verdict.token.as_ref()))
            .await?;

        Ok(Response::json(serde_json::to_vec(&record)?))
    }
}
