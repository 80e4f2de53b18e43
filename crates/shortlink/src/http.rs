//! Minimal request/response model the handlers work on.

use std::fmt;

use crate::status::{status_for, ErrorKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Head,
    Post,
    Put,
    Delete,
    Options,
    Patch,
}

/// HTTP status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StatusCode(u16);

impl StatusCode {
    pub const OK: StatusCode = StatusCode(200);
    pub const NO_CONTENT: StatusCode = StatusCode(204);
    pub const FOUND: StatusCode = StatusCode(302);
    pub const BAD_REQUEST: StatusCode = StatusCode(400);
    pub const UNAUTHORIZED: StatusCode = StatusCode(401);
    pub const FORBIDDEN: StatusCode = StatusCode(403);
    pub const NOT_FOUND: StatusCode = StatusCode(404);
    pub const METHOD_NOT_ALLOWED: StatusCode = StatusCode(405);
    pub const INTERNAL_SERVER_ERROR: StatusCode = StatusCode(500);

    pub fn as_u16(self) -> u16 {
        self.0
    }

    pub fn is_success(self) -> bool {
        (200..300).contains(&self.0)
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Inbound request as seen by a handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub method: Method,
    pub uri: String,
    pub headers: Vec<(String, String)>,
}

impl Request {
    pub fn new(method: Method, uri: impl Into<String>) -> Self {
        Self {
            method,
            uri: uri.into(),
            headers: Vec::new(),
        }
    }

    pub fn get(uri: impl Into<String>) -> Self {
        Self::new(Method::Get, uri)
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// First header named `name`, compared case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }

    /// Raw value of query parameter `key`.
    pub fn query(&self, key: &str) -> Option<String> {
        shortlink_query::extract(&self.uri, key)
    }
}

/// Handler output: status, headers and a text body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: StatusCode,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl Response {
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: String::new(),
        }
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }

    /// Error response carrying the mapped status and message.
    pub fn from_error(err: &ErrorKind) -> Self {
        let (status, message) = status_for(err);
        Self::new(status).with_body(message)
    }
}

fn find_header<'a>(headers: &'a [(String, String)], name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name))
        .map(|(_, v)| v.as_str())
}

/// Answers CORS preflights and rejects anything but `GET`.
///
/// Returns `None` when the request should reach the handler body.
pub(crate) fn precheck(req: &Request) -> Option<Response> {
    match req.method {
        Method::Get => None,
        Method::Options => {
            tracing::info!("answering CORS preflight");
            Some(
                Response::new(StatusCode::NO_CONTENT)
                    .with_header("Access-Control-Allow-Methods", "GET")
                    .with_header("Access-Control-Allow-Headers", "*"),
            )
        }
        _ => Some(Response::from_error(&ErrorKind::MethodNotAllowed)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_lookup_ignores_case() {
        let req = Request::get("/").with_header("Password", "pw");
        assert_eq!(req.header("password"), Some("pw"));
        assert_eq!(req.header("old_password"), None);
    }

    #[test]
    fn precheck_passes_get_only() {
        assert!(precheck(&Request::get("/")).is_none());

        let preflight = precheck(&Request::new(Method::Options, "/")).unwrap();
        assert_eq!(preflight.status, StatusCode::NO_CONTENT);
        assert_eq!(preflight.header("Access-Control-Allow-Methods"), Some("GET"));

        let rejected = precheck(&Request::new(Method::Post, "/")).unwrap();
        assert_eq!(rejected.status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(rejected.body, "GET method expected");
    }

    #[test]
    fn status_display() {
        assert_eq!(StatusCode::FOUND.to_string(), "302");
        assert!(StatusCode::NO_CONTENT.is_success());
        assert!(!StatusCode::FOUND.is_success());
    }
}
