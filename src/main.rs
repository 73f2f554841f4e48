//! The relic binary: in-process collaborators wired from the environment.
//!
//! Run with:
//!   RUST_LOG=info RELIC_TOKENS=s3cret:alice cargo run
//!
//! Try:
//!   curl -X POST http://localhost:3000/records \
//!        -H 'authorization: Bearer s3cret' \
//!        -H 'content-type: application/json' \
//!        -d '{"name":"x"}'
//!   curl http://localhost:3000/records/<id> -H 'authorization: Bearer s3cret'

use std::sync::Arc;

use relic::{Config, MemoryStore, Router, Server, StaticTokenValidator, TracingAccessLogger};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = Config::from_env();
    if config.tokens.is_empty() {
        tracing::warn!("RELIC_TOKENS is empty; every authenticated route will answer 401");
    }

    let router = Router::new(
        Arc::new(StaticTokenValidator::new(config.tokens)),
        Arc::new(MemoryStore::new()),
        Arc::new(TracingAccessLogger),
    );

    Server::bind(&config.addr)
        .serve(router)
        .await
        .expect("server error");
}
