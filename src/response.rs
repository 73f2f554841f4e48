//! Outgoing HTTP response type.
//!
//! Every body this service sends is JSON (or empty, for the preflight
//! short-circuit), so the type is deliberately narrow: a status and bytes.
//! The CORS header set is attached at conversion time, in one place.

use bytes::Bytes;
use http::header::CONTENT_TYPE;
use http::StatusCode;
use http_body_util::Full;

use crate::cors::Cors;

/// An outgoing response: status plus a JSON (or empty) body.
pub struct Response {
    status: StatusCode,
    body: Vec<u8>,
}

impl Response {
    /// `200 OK` with a JSON body.
    ///
    /// Pass bytes from the serialiser directly: `serde_json::to_vec(&val)?`.
    pub fn json(body: Vec<u8>) -> Self {
        Self { status: StatusCode::OK, body }
    }

    /// `200 OK` with no body. Used only for the CORS preflight answer.
    pub fn empty() -> Self {
        Self { status: StatusCode::OK, body: Vec::new() }
    }

    /// The `{"error": "<message>"}` envelope with the given status.
    pub fn error(status: StatusCode, message: &str) -> Self {
        let body = serde_json::json!({ "error": message });
        Self {
            status,
            body: serde_json::to_vec(&body).unwrap_or_default(),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Converts into the hyper response, attaching the content type and the
    /// fixed CORS header set.
    pub(crate) fn into_http(self, cors: &Cors) -> http::Response<Full<Bytes>> {
        let mut builder = http::Response::builder().status(self.status);
        if !self.body.is_empty() {
            builder = builder.header(CONTENT_TYPE, "application/json");
        }
        let mut response = builder
            .body(Full::new(Bytes::from(self.body)))
            .expect("status and static headers are always valid");
        cors.apply(response.headers_mut());
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::header::ACCESS_CONTROL_ALLOW_ORIGIN;

    #[test]
    fn error_renders_the_envelope_shape() {
        let resp = Response::error(StatusCode::NOT_FOUND, "Record not found");
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: serde_json::Value = serde_json::from_slice(resp.body()).unwrap();
        assert_eq!(body, serde_json::json!({ "error": "Record not found" }));
    }

    #[test]
    fn conversion_attaches_cors_and_content_type() {
        let http = Response::json(b"{}".to_vec()).into_http(&Cors::new());
        assert_eq!(http.headers()[ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        assert_eq!(http.headers()[CONTENT_TYPE], "application/json");
    }

    #[test]
    fn empty_body_has_no_content_type_but_keeps_cors() {
        let http = Response::empty().into_http(&Cors::new());
        assert!(http.headers().get(CONTENT_TYPE).is_none());
        assert_eq!(http.headers()[ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    }
}
