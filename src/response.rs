//! Outgoing HTTP response type.
//!
//! Handlers build a [`Response`] and return it; the server converts it into
//! the hyper representation at the connection boundary. Every code path in
//! the portal produces exactly one of these per request.

use bytes::Bytes;
use http::header::{CONNECTION, CONTENT_TYPE};
use http::{HeaderValue, StatusCode};
use http_body_util::Full;

/// An outgoing HTTP response: status, content type, body bytes.
pub struct Response {
    status: StatusCode,
    content_type: &'static str,
    body: Vec<u8>,
    close: bool,
}

impl Response {
    /// An HTML document with the given status.
    pub fn html(status: StatusCode, body: String) -> Self {
        Self::with_type(status, "text/html; charset=utf-8", body.into_bytes())
    }

    /// A plain-text response with the given status.
    pub fn text(status: StatusCode, body: impl Into<String>) -> Self {
        Self::with_type(status, "text/plain; charset=utf-8", body.into().into_bytes())
    }

    /// `200 OK` with an explicit content type — used for static assets,
    /// whose type comes from the extension table.
    pub fn bytes(content_type: &'static str, body: Vec<u8>) -> Self {
        Self::with_type(StatusCode::OK, content_type, body)
    }

    /// Marks the response as the last one on its connection.
    pub fn close_connection(mut self) -> Self {
        self.close = true;
        self
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    fn with_type(status: StatusCode, content_type: &'static str, body: Vec<u8>) -> Self {
        Self { status, content_type, body, close: false }
    }

    /// Converts into the hyper response handed back on the wire.
    pub fn into_http(self) -> http::Response<Full<Bytes>> {
        let mut res = http::Response::new(Full::new(Bytes::from(self.body)));
        *res.status_mut() = self.status;
        res.headers_mut()
            .insert(CONTENT_TYPE, HeaderValue::from_static(self.content_type));
        if self.close {
            res.headers_mut()
                .insert(CONNECTION, HeaderValue::from_static("close"));
        }
        res
    }
}
