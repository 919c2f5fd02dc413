use bytes::Bytes;
use http_body_util::Full;
use hyper::Response;

use crate::http::http_response::HttpResponse;

/// Hands a finished response over to hyper, body chunks joined into one buffer.
impl TryFrom<HttpResponse> for Response<Full<Bytes>> {
    type Error = anyhow::Error;

    fn try_from(res: HttpResponse) -> anyhow::Result<Self> {
        let (status, headers, body) = res.into_parts();

        let mut builder = Response::builder().status(status);
        for (key, value) in headers {
            builder = builder.header(key, value);
        }

        Ok(builder.body(Full::new(Bytes::from(body.concat())))?)
    }
}
