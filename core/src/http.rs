//! HTTP data crossing the transport boundary.
//!
//! # Design
//! Requests and responses are plain owned data. Headers are an ordered list
//! of pairs rather than a map: order can matter on the wire and duplicate
//! names must survive untouched. Bodies are raw bytes with no assumed
//! encoding.
//!
//! The only invariant enforced here is the status range. A `StatusCode` can
//! only be built for `100..=599`, so an `HttpResponse` never carries a
//! sentinel like 0 standing in for a failure.

use std::fmt;

use crate::error::InvalidStatus;

/// Ordered `(name, value)` pairs. Duplicate names are allowed.
pub type Headers = Vec<(String, String)>;

/// An HTTP status code in `100..=599`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StatusCode(u16);

impl StatusCode {
    pub const MIN: u16 = 100;
    pub const MAX: u16 = 599;

    pub fn new(code: u16) -> Result<Self, InvalidStatus> {
        if (Self::MIN..=Self::MAX).contains(&code) {
            Ok(Self(code))
        } else {
            Err(InvalidStatus(code))
        }
    }

    pub fn as_u16(self) -> u16 {
        self.0
    }

    /// True for 2xx.
    pub fn is_success(self) -> bool {
        (200..300).contains(&self.0)
    }
}

impl TryFrom<u16> for StatusCode {
    type Error = InvalidStatus;

    fn try_from(code: u16) -> Result<Self, Self::Error> {
        Self::new(code)
    }
}

impl From<StatusCode> for u16 {
    fn from(status: StatusCode) -> Self {
        status.0
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An outbound POST described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    pub headers: Headers,
    pub body: Vec<u8>,
}

impl HttpRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            headers: Vec::new(),
            body: Vec::new(),
        }
    }

    /// Append a header. Existing headers with the same name are kept.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        self
    }
}

/// A successful round-trip: any status the server sent, 4xx and 5xx included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub headers: Headers,
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Build a response, rejecting a status outside `100..=599`.
    pub fn new(status: u16, headers: Headers, body: impl Into<Vec<u8>>) -> Result<Self, InvalidStatus> {
        Ok(Self {
            status: StatusCode::new(status)?,
            headers,
            body: body.into(),
        })
    }

    /// First value for `name`, compared case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn into_parts(self) -> (u16, Headers, Vec<u8>) {
        (self.status.as_u16(), self.headers, self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_accepts_range_bounds() {
        assert_eq!(StatusCode::new(100).unwrap().as_u16(), 100);
        assert_eq!(StatusCode::new(599).unwrap().as_u16(), 599);
    }

    #[test]
    fn status_rejects_outside_range() {
        assert_eq!(StatusCode::new(0), Err(InvalidStatus(0)));
        assert_eq!(StatusCode::new(99), Err(InvalidStatus(99)));
        assert_eq!(StatusCode::new(600), Err(InvalidStatus(600)));
        assert!(StatusCode::try_from(u16::MAX).is_err());
    }

    #[test]
    fn status_success_is_2xx_only() {
        assert!(StatusCode::new(200).unwrap().is_success());
        assert!(StatusCode::new(299).unwrap().is_success());
        assert!(!StatusCode::new(199).unwrap().is_success());
        assert!(!StatusCode::new(404).unwrap().is_success());
    }

    #[test]
    fn request_builder_appends_duplicate_headers_in_order() {
        let req = HttpRequest::new("http://localhost/x")
            .header("A", "1")
            .header("B", "2")
            .header("A", "3")
            .body("payload");
        assert_eq!(
            req.headers,
            vec![
                ("A".to_string(), "1".to_string()),
                ("B".to_string(), "2".to_string()),
                ("A".to_string(), "3".to_string()),
            ]
        );
        assert_eq!(req.body, b"payload");
    }

    #[test]
    fn new_request_has_empty_body() {
        let req = HttpRequest::new("http://localhost/x");
        assert!(req.body.is_empty());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn response_rejects_sentinel_status() {
        let err = HttpResponse::new(0, Vec::new(), Vec::new()).unwrap_err();
        assert_eq!(err, InvalidStatus(0));
    }

    #[test]
    fn response_header_lookup_is_case_insensitive() {
        let resp = HttpResponse::new(
            200,
            vec![
                ("Content-Type".to_string(), "text/plain".to_string()),
                ("content-type".to_string(), "ignored".to_string()),
            ],
            "ok",
        )
        .unwrap();
        assert_eq!(resp.header("content-type"), Some("text/plain"));
        assert_eq!(resp.header("x-missing"), None);
    }

    #[test]
    fn into_parts_yields_status_headers_body() {
        let resp = HttpResponse::new(201, vec![("k".to_string(), "v".to_string())], "B").unwrap();
        let (status, headers, body) = resp.into_parts();
        assert_eq!(status, 201);
        assert_eq!(headers, vec![("k".to_string(), "v".to_string())]);
        assert_eq!(body, b"B");
    }
}
