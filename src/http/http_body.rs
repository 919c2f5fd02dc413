use std::{borrow::Cow, collections::VecDeque};

/// Capabilities a value can offer when it is used as a response body.
///
/// Every capability is optional. A body is accepted when it can be turned into
/// a single string (`as_text`) or into a sequence of parts (`parts`), checked
/// in that order. A body that also reports `is_closable` is kept by the
/// response so `HttpResponse::close` can release it later.
///
/// ```ignore
/// struct Upload { chunks: Vec<String>, file: std::fs::File }
///
/// impl HttpBody for Upload {
///     fn parts(&mut self) -> Option<Vec<String>> {
///         Some(std::mem::take(&mut self.chunks))
///     }
///
///     fn is_closable(&self) -> bool {
///         true
///     }
///
///     fn close(&mut self) -> std::io::Result<()> {
///         self.file.sync_all()
///     }
/// }
/// ```
pub trait HttpBody: Send {
    fn as_text(&self) -> Option<String> {
        None
    }

    fn parts(&mut self) -> Option<Vec<String>> {
        None
    }

    fn is_closable(&self) -> bool {
        false
    }

    fn close(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// The shape of a body input once its capabilities have been inspected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodyShape {
    Scalar(String),
    Chunked(Vec<String>),
    Invalid,
}

impl BodyShape {
    pub fn of<B: HttpBody + ?Sized>(body: &mut B) -> Self {
        if let Some(text) = body.as_text() {
            return BodyShape::Scalar(text);
        }

        match body.parts() {
            Some(parts) => BodyShape::Chunked(parts),
            None => BodyShape::Invalid,
        }
    }
}

/// Body backed by any iterator of displayable items, consumed on construction.
pub struct ChunkedBody<I> {
    iter: Option<I>,
}

impl<I> ChunkedBody<I>
where
    I: Iterator,
    I::Item: ToString,
{
    pub fn new<T: IntoIterator<IntoIter = I>>(iter: T) -> Self {
        ChunkedBody {
            iter: Some(iter.into_iter()),
        }
    }
}

impl<I> HttpBody for ChunkedBody<I>
where
    I: Iterator + Send,
    I::Item: ToString,
{
    fn parts(&mut self) -> Option<Vec<String>> {
        self.iter.take().map(|iter| iter.map(|item| item.to_string()).collect())
    }
}

impl HttpBody for String {
    fn as_text(&self) -> Option<String> {
        Some(self.clone())
    }
}

impl HttpBody for &str {
    fn as_text(&self) -> Option<String> {
        Some(self.to_string())
    }
}

impl HttpBody for Box<str> {
    fn as_text(&self) -> Option<String> {
        Some(self.to_string())
    }
}

impl HttpBody for Cow<'_, str> {
    fn as_text(&self) -> Option<String> {
        Some(self.to_string())
    }
}

impl HttpBody for () {
    fn parts(&mut self) -> Option<Vec<String>> {
        Some(Vec::new())
    }
}

impl<T: ToString + Send> HttpBody for Vec<T> {
    fn parts(&mut self) -> Option<Vec<String>> {
        Some(self.drain(..).map(|part| part.to_string()).collect())
    }
}

impl<T: ToString + Send> HttpBody for VecDeque<T> {
    fn parts(&mut self) -> Option<Vec<String>> {
        Some(self.drain(..).map(|part| part.to_string()).collect())
    }
}

impl<T: ToString + Send, const N: usize> HttpBody for [T; N] {
    fn parts(&mut self) -> Option<Vec<String>> {
        Some(self.iter().map(|part| part.to_string()).collect())
    }
}

impl<T: ToString + Send> HttpBody for Option<T> {
    fn parts(&mut self) -> Option<Vec<String>> {
        Some(self.take().into_iter().map(|part| part.to_string()).collect())
    }
}

impl<B: HttpBody + ?Sized> HttpBody for Box<B> {
    fn as_text(&self) -> Option<String> {
        (**self).as_text()
    }

    fn parts(&mut self) -> Option<Vec<String>> {
        (**self).parts()
    }

    fn is_closable(&self) -> bool {
        (**self).is_closable()
    }

    fn close(&mut self) -> std::io::Result<()> {
        (**self).close()
    }
}
