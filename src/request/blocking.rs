use std::io::Read;
use std::time::Duration;

use attohttpc::header::HeaderName;

use super::backend::{BackendRequestBody, SyncService, DEFAULT_REQUEST_TIMEOUT};
use crate::error::S3Error;

/// Blocking transport on top of attohttpc.
///
/// Every call opens its own connection, reads the whole body and drops the
/// connection again, whatever the status.
#[derive(Clone, Debug)]
pub struct AttoBackend {
    request_timeout: Option<Duration>,
}

impl Default for AttoBackend {
    fn default() -> Self {
        Self {
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl AttoBackend {
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout
    }

    pub fn with_request_timeout(&self, request_timeout: Option<Duration>) -> Self {
        Self { request_timeout }
    }

    pub(crate) fn build<'a>(
        &self,
        request: http::Request<BackendRequestBody<'a>>,
    ) -> Result<attohttpc::RequestBuilder<attohttpc::body::Bytes<BackendRequestBody<'a>>>, S3Error>
    {
        let mut session = attohttpc::Session::new();

        for (name, value) in request.headers().iter() {
            let header = HeaderName::from_bytes(name.as_ref())
                .map_err(|e| S3Error::invalid_header(name.as_str(), e))?;
            let value = value
                .to_str()
                .map_err(|e| S3Error::invalid_header(name.as_str(), e))?;
            session.header(header, value);
        }

        if let Some(timeout) = self.request_timeout {
            session.timeout(timeout)
        }

        let url = request.uri().to_string();
        let builder = match *request.method() {
            http::Method::GET => session.get(url),
            http::Method::DELETE => session.delete(url),
            http::Method::PUT => session.put(url),
            http::Method::HEAD => session.head(url),
            ref other => return Err(S3Error::UnsupportedMethod(other.to_string())),
        };

        Ok(builder.bytes(request.into_body()))
    }
}

impl<'a> SyncService<http::Request<BackendRequestBody<'a>>> for AttoBackend {
    type Response = http::Response<Vec<u8>>;
    type Error = S3Error;

    fn call(&mut self, request: http::Request<BackendRequestBody<'a>>) -> Result<Self::Response, S3Error> {
        let response = self.build(request)?.send()?;

        let (status, headers, mut reader) = response.split();
        let mut body = Vec::new();
        reader.read_to_end(&mut body)?;

        let mut response = http::Response::builder()
            .status(http::StatusCode::from_u16(status.as_u16())?)
            .body(body)?;
        *response.headers_mut() = headers;
        Ok(response)
    }
}
