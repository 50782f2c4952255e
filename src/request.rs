//! Incoming HTTP request type.

use bytes::Bytes;
use http::Method;

/// One incoming request, as seen by a handler.
///
/// The server pre-buffers the body (capped) before any handler runs, so a
/// handler never awaits network I/O for the body. The path carries no query
/// string — that is stripped at the URI layer before routing.
pub struct Request {
    method: Method,
    path: String,
    body: Bytes,
}

impl Request {
    pub fn new(method: Method, path: impl Into<String>, body: Bytes) -> Self {
        Self { method, path: path.into(), body }
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
}
