pub mod backend;
pub mod blocking;
pub mod builder;

pub use backend::{Backend, DefaultBackend, SyncService, DEFAULT_REQUEST_TIMEOUT};
pub use blocking::AttoBackend;
pub use builder::{build_request, ResponseData};
