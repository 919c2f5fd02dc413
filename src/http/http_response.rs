use std::fmt::{self, Debug, Display};

use crate::{
    http::{
        http_body::{BodyShape, HttpBody},
        http_header::{HttpHeaders, CONTENT_LENGTH, CONTENT_TYPE},
        http_status::HttpStatus,
    },
    utils::error::Error,
};

/// A response under construction: status, headers and body chunks.
///
/// All body content goes through [`HttpResponse::write`], which keeps
/// `length` and the `Content-Length` header equal to the total number of
/// UTF-8 bytes written. The body is only readable from the outside so the two
/// cannot drift apart.
pub struct HttpResponse {
    status: u16,
    headers: HttpHeaders,
    body: Vec<String>,
    length: usize,
    source: Option<Box<dyn HttpBody>>,
}

impl HttpResponse {
    /// Builds a response from a status, any set of header pairs and a body.
    ///
    /// Header keys and values are stringified. A body that is text becomes a
    /// single chunk, a body that yields parts is written part by part. Any
    /// other body is rejected with an `InvalidInput` error.
    pub fn new<S, H, K, V, B>(status: S, headers: H, body: B) -> anyhow::Result<Self>
    where
        S: Into<u16>,
        H: IntoIterator<Item = (K, V)>,
        K: ToString,
        V: ToString,
        B: HttpBody + 'static,
    {
        let mut response = HttpResponse {
            status: status.into(),
            headers: headers.into_iter().collect(),
            body: Vec::new(),
            length: 0,
            source: None,
        };

        let mut body = body;
        match BodyShape::of(&mut body) {
            BodyShape::Scalar(text) => {
                response.write(text);
            }
            BodyShape::Chunked(parts) => {
                for part in parts {
                    response.write(part);
                }
            }
            BodyShape::Invalid => {
                return Err(Error::invalid_input("stringable or iterable required").into());
            }
        }

        if body.is_closable() {
            response.source = Some(Box::new(body));
        }

        Ok(response)
    }

    pub fn with_status<S: Into<u16>>(status: S) -> Self {
        HttpResponse {
            status: status.into(),
            headers: HttpHeaders::new(),
            body: Vec::new(),
            length: 0,
            source: None,
        }
    }

    pub fn ok() -> Self {
        HttpResponse::with_status(HttpStatus::Ok)
    }

    pub fn found() -> Self {
        HttpResponse::with_status(HttpStatus::Found)
    }

    pub fn not_found() -> Self {
        HttpResponse::with_status(HttpStatus::NotFound)
    }

    pub fn internal_server_error() -> Self {
        HttpResponse::with_status(HttpStatus::InternalServerError)
    }

    pub fn with_header<K: ToString, V: ToString>(mut self, key: K, value: V) -> Self {
        self.set_header(key, value);
        self
    }

    pub fn with_body<T: Display>(mut self, chunk: T) -> Self {
        self.write(chunk);
        self
    }

    /// Appends a chunk and updates `Content-Length`.
    ///
    /// Returns the value that was passed in, not its string form.
    pub fn write<T: Display>(&mut self, chunk: T) -> T {
        let text = chunk.to_string();
        self.length += text.len();
        tracing::trace!(size = text.len(), length = self.length, "body write");

        self.body.push(text);
        self.set_header(CONTENT_LENGTH, self.length);
        chunk
    }

    /// Releases the body source if it supports closing. Calling it again is a no-op.
    pub fn close(&mut self) {
        let Some(mut source) = self.source.take() else {
            return;
        };

        if !source.is_closable() {
            return;
        }

        tracing::trace!("closing body source");
        if let Err(err) = source.close() {
            tracing::warn!("failed to close body source: {:?}", err);
        }
    }

    pub fn set_header<K: ToString, V: ToString>(&mut self, key: K, value: V) {
        self.headers.set(key, value);
    }

    pub fn get_header<T: AsRef<str>>(&self, key: T) -> Option<&str> {
        self.headers.get(key)
    }

    pub fn has_header<T: AsRef<str>>(&self, key: T) -> bool {
        self.headers.contains(key)
    }

    /// Removes a header. Removing `Content-Length` leaves `length` as it is;
    /// the next write puts the header back.
    pub fn delete_header<T: AsRef<str>>(&mut self, key: T) -> Option<String> {
        self.headers.remove(key)
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn set_status<S: Into<u16>>(&mut self, status: S) {
        self.status = status.into();
    }

    /// Reason phrase of the status, when it is a known code.
    pub fn reason(&self) -> Option<&'static str> {
        HttpStatus::from_code(self.status).ok().map(HttpStatus::text)
    }

    /// Total bytes written so far. Only `write` changes it.
    pub fn length(&self) -> usize {
        self.length
    }

    pub fn header(&self) -> &HttpHeaders {
        &self.headers
    }

    pub fn headers(&self) -> &HttpHeaders {
        self.header()
    }

    pub fn body(&self) -> &[String] {
        &self.body
    }

    pub fn chunks(&self) -> impl Iterator<Item = &str> {
        self.body.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn content_type(&self) -> Option<&str> {
        self.get_header(CONTENT_TYPE)
    }

    pub fn set_content_type<T: ToString>(&mut self, content_type: T) {
        self.set_header(CONTENT_TYPE, content_type);
    }

    /// Splits the response into status, headers and body chunks.
    ///
    /// The body source is dropped without being closed.
    pub fn into_parts(self) -> (u16, HttpHeaders, Vec<String>) {
        (self.status, self.headers, self.body)
    }
}

impl Default for HttpResponse {
    fn default() -> Self {
        HttpResponse::ok()
    }
}

impl Debug for HttpResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpResponse")
            .field("status", &self.status)
            .field("headers", &self.headers)
            .field("body", &self.body)
            .field("length", &self.length)
            .field("closable", &self.source.is_some())
            .finish()
    }
}
