//! Incoming HTTP request view.

use bytes::Bytes;
use http::{HeaderMap, Method};

/// An incoming HTTP request with its body fully buffered.
///
/// The server collects the body before dispatch, so handlers and
/// collaborators see a plain byte slice — no streaming, no partial reads.
pub struct Request {
    method: Method,
    path: String,
    headers: HeaderMap,
    body: Bytes,
}

impl Request {
    pub(crate) fn new(method: Method, path: String, headers: HeaderMap, body: Bytes) -> Self {
        Self { method, path, headers, body }
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Header lookup; returns `None` for absent or non-UTF-8 values.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// The credential carried in `Authorization: Bearer <token>`.
    pub fn bearer_token(&self) -> Option<&str> {
        self.header("authorization")?.strip_prefix("Bearer ")
    }

    /// Zero-indexed path segment, split on `/`.
    ///
    /// For `/records/abc123`, segment 0 is the empty string before the
    /// leading slash, segment 1 is `records`, segment 2 is `abc123`.
    /// Empty segments yield `None`.
    pub fn segment(&self, index: usize) -> Option<&str> {
        self.path.split('/').nth(index).filter(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::header::AUTHORIZATION;

    fn request(path: &str, headers: HeaderMap) -> Request {
        Request::new(Method::GET, path.to_owned(), headers, Bytes::new())
    }

    #[test]
    fn segment_is_zero_indexed_across_the_leading_slash() {
        let req = request("/records/abc123", HeaderMap::new());
        assert_eq!(req.segment(1), Some("records"));
        assert_eq!(req.segment(2), Some("abc123"));
        assert_eq!(req.segment(3), None);
    }

    #[test]
    fn missing_or_empty_segment_is_none() {
        assert_eq!(request("/records/", HeaderMap::new()).segment(2), None);
        assert_eq!(request("/records", HeaderMap::new()).segment(2), None);
    }

    #[test]
    fn bearer_token_strips_the_scheme_prefix() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, "Bearer s3cret".parse().unwrap());
        assert_eq!(request("/", headers).bearer_token(), Some("s3cret"));
    }

    #[test]
    fn non_bearer_authorization_is_not_a_token() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, "Basic dXNlcjpwdw==".parse().unwrap());
        assert_eq!(request("/", headers).bearer_token(), None);
        assert_eq!(request("/", HeaderMap::new()).bearer_token(), None);
    }

    #[test]
    fn header_lookup_is_case_insensitive() {
        let mut headers = HeaderMap::new();
        headers.insert("content-type", "application/json".parse().unwrap());
        let req = request("/", headers);
        assert_eq!(req.header("Content-Type"), Some("application/json"));
    }
}
