//! # relic
//!
//! A minimal HTTP service for opaque JSON records behind bearer-token auth.
//! Nothing more. Nothing less.
//!
//! ## The contract
//!
//! relic owns exactly one thing: mapping an inbound HTTP request to exactly
//! one JSON response. Everything with real machinery behind it — credential
//! verification, record persistence, access-log persistence — sits behind a
//! trait, and the deployment decides what implements it. relic ships
//! in-process implementations so the binary runs out of the box; production
//! swaps them for real backends without touching the router.
//!
//! The HTTP surface:
//!
//! - `OPTIONS *` — CORS preflight, answered immediately. No auth, no logging.
//! - `POST *` — store the JSON body, answer `{"id": "<assigned>"}`.
//! - `GET /<prefix>/<id>` — fetch a record by id; each hit lands in the
//!   access log before the response goes out.
//! - anything else — `405`.
//!
//! Every response carries the fixed CORS header set, and every failure is
//! answered as an `{"error": "..."}` JSON envelope — 401 for a bad
//! credential, 404 for an absent record, 500 for anything unexpected.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use relic::{MemoryStore, Router, Server, StaticTokenValidator, TracingAccessLogger};
//!
//! #[tokio::main]
//! async fn main() {
//!     let router = Router::new(
//!         Arc::new(StaticTokenValidator::new([("s3cret".to_owned(), "alice".to_owned())])),
//!         Arc::new(MemoryStore::new()),
//!         Arc::new(TracingAccessLogger),
//!     );
//!
//!     Server::bind("0.0.0.0:3000").serve(router).await.unwrap();
//! }
//! ```

mod audit;
mod auth;
mod config;
mod cors;
mod error;
mod request;
mod response;
mod router;
mod server;
mod store;

pub use audit::{AccessEntry, AccessLogger, TracingAccessLogger};
pub use auth::{StaticTokenValidator, TokenPayload, TokenValidator, Validation};
pub use config::Config;
pub use cors::Cors;
pub use error::{CollabError, Error, ServeError};
pub use request::Request;
pub use response::Response;
pub use router::Router;
pub use server::Server;
pub use store::{MemoryStore, RecordStore};
