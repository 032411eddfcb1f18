use std::borrow::Cow;
use std::time::Duration;

use crate::error::S3Error;

pub use crate::request::blocking::AttoBackend as DefaultBackend;

/// Default request timeout. Override with `Bucket::with_request_timeout`.
pub const DEFAULT_REQUEST_TIMEOUT: Option<Duration> = Some(Duration::from_secs(60));

pub type BackendRequestBody<'a> = Cow<'a, [u8]>;

/// A simplified version of tower_service::Service without async
pub trait SyncService<R> {
    type Response;
    type Error;

    fn call(&mut self, _: R) -> Result<Self::Response, Self::Error>;
}

/// Anything able to send one signed request and hand back the whole response.
///
/// The request arrives fully assembled, a backend must not add or change
/// headers or the signature no longer matches.
pub trait Backend:
    for<'a> SyncService<
        http::Request<BackendRequestBody<'a>>,
        Response = http::Response<Vec<u8>>,
        Error: Into<S3Error>,
    > + Clone
{
}

impl<T> Backend for T where
    for<'a> T: SyncService<
            http::Request<BackendRequestBody<'a>>,
            Response = http::Response<Vec<u8>>,
            Error: Into<S3Error>,
        > + Clone
{
}
