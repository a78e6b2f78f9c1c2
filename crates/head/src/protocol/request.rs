//! HTTP request head produced by the decoder.
//!
//! [`RequestHead`] keeps the status-line tokens as plain strings, exactly as they
//! were received. Conversion into a typed `http::Request<()>` is available for
//! callers who want to hand the request to the wider `http` ecosystem.

use http::{HeaderName, HeaderValue, Method, Request, Uri};

use crate::protocol::{Headers, ParseError, supports_keep_alive};

/// The decoded request line and header block of one HTTP/1.x request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestHead {
    method: String,
    path: String,
    headers: Headers,
}

impl RequestHead {
    pub fn new(method: impl Into<String>, path: impl Into<String>, headers: Headers) -> Self {
        Self { method: method.into(), path: path.into(), headers }
    }

    /// Returns the method token, e.g. `GET`.
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Returns the raw request target, e.g. `/index.html?a=1`. No URL decoding is applied.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    /// Looks up a header by name, ignoring case.
    ///
    /// The value is returned as received, so it usually keeps the space that
    /// followed the colon.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(&name.to_lowercase()).map(String::as_str)
    }

    /// See [`supports_keep_alive`].
    pub fn keep_alive(&self) -> bool {
        supports_keep_alive(&self.headers)
    }

    /// Consumes the head and returns `(method, path, headers)`.
    pub fn into_parts(self) -> (String, String, Headers) {
        (self.method, self.path, self.headers)
    }
}

impl From<(String, String, Headers)> for RequestHead {
    #[inline]
    fn from((method, path, headers): (String, String, Headers)) -> Self {
        Self { method, path, headers }
    }
}

/// Converts a decoded head into a bodyless `http::Request`.
///
/// The version token is not kept by the decoder, so the request uses the
/// `http` default of HTTP/1.1. Header values are trimmed of optional whitespace.
impl TryFrom<RequestHead> for Request<()> {
    type Error = ParseError;

    fn try_from(head: RequestHead) -> Result<Self, Self::Error> {
        let method = Method::from_bytes(head.method.as_bytes()).map_err(|_| ParseError::InvalidMethod)?;
        let uri = Uri::try_from(head.path.as_str()).map_err(|_| ParseError::InvalidUri)?;

        let mut request = Request::new(());
        *request.method_mut() = method;
        *request.uri_mut() = uri;

        let headers = request.headers_mut();
        headers.reserve(head.headers.len());
        for (name, value) in head.headers {
            let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(ParseError::invalid_header)?;
            let header_value = HeaderValue::from_str(value.trim()).map_err(ParseError::invalid_header)?;
            headers.insert(header_name, header_value);
        }

        Ok(request)
    }
}
