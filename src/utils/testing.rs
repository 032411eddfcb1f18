use std::cell::RefCell;
use std::rc::Rc;

use crate::request::backend::{BackendRequestBody, SyncService};

/// What a [`StubBackend`] saw of one request.
#[derive(Clone, Debug)]
pub struct RecordedRequest {
    pub method: http::Method,
    pub uri: String,
    pub headers: http::HeaderMap,
    pub body: Vec<u8>,
}

/// Answers every call with a fixed status and body and records the requests.
#[derive(Clone)]
pub struct StubBackend {
    status: u16,
    body: Vec<u8>,
    calls: Rc<RefCell<Vec<RecordedRequest>>>,
}

impl StubBackend {
    pub fn new(status: u16, body: &[u8]) -> Self {
        Self {
            status,
            body: body.to_vec(),
            calls: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn calls(&self) -> Vec<RecordedRequest> {
        self.calls.borrow().clone()
    }

    pub fn last(&self) -> RecordedRequest {
        self.calls.borrow().last().cloned().unwrap()
    }
}

impl<'a> SyncService<http::Request<BackendRequestBody<'a>>> for StubBackend {
    type Response = http::Response<Vec<u8>>;
    type Error = http::Error;

    fn call(
        &mut self,
        request: http::Request<BackendRequestBody<'a>>,
    ) -> Result<Self::Response, Self::Error> {
        self.calls.borrow_mut().push(RecordedRequest {
            method: request.method().clone(),
            uri: request.uri().to_string(),
            headers: request.headers().clone(),
            body: request.body().to_vec(),
        });
        http::Response::builder()
            .status(self.status)
            .header("x-amz-request-id", "stub")
            .body(self.body.clone())
    }
}

#[derive(Clone)]
pub struct AlwaysFailBackend;

impl<R> SyncService<R> for AlwaysFailBackend {
    type Response = http::Response<Vec<u8>>;
    type Error = http::Error;

    fn call(&mut self, _: R) -> Result<Self::Response, Self::Error> {
        http::Response::builder()
            .status(http::StatusCode::IM_A_TEAPOT)
            .body(Vec::new())
    }
}
