//! Simple access to Yandex Object Storage and other S3-compatible APIs,
//! authenticated with [AWS Signature Version 4][sigv4].
//!
//! [sigv4]: https://docs.aws.amazon.com/AmazonS3/latest/API/sig-v4-authenticating-requests.html
//!
//! # Example
//!
//! ```no_run
//! use ycs3::{Bucket, Credentials, Region};
//!
//! let credentials = Credentials::new("YCAJEexampleKeyId", "YCexampleSecretKey");
//! let bucket = Bucket::new("my-bucket", Region::Yandex, credentials);
//!
//! bucket.put_object("/hello.txt", b"hello")?;
//! let data = bucket.get_object("/hello.txt")?;
//! assert_eq!(data.as_slice(), b"hello");
//! # Ok::<(), ycs3::error::S3Error>(())
//! ```
#![forbid(unsafe_code)]

#[macro_use]
extern crate serde_derive;

pub use bucket::Bucket;
pub use command::{HttpMethod, StorageClass};
pub use credentials::Credentials;
pub use error::S3Error;
pub use headers::Headers;
pub use region::Region;
pub use request::ResponseData;
pub use signing::{CanonicalRequest, Signer, SigningScope};

pub mod bucket;
pub mod command;
pub mod credentials;
pub mod error;
pub mod headers;
pub mod region;
pub mod request;
pub mod serde_types;
pub mod signing;
pub mod utils;

const LONG_DATETIME: &[time::format_description::FormatItem<'static>] =
    time::macros::format_description!("[year][month][day]T[hour][minute][second]Z");
const SHORT_DATE: &[time::format_description::FormatItem<'static>] =
    time::macros::format_description!("[year][month][day]");
/// RFC 1123 form used for the `Date` header, e.g. `Thu, 18 Jan 2018 09:57:35 GMT`.
const RFC1123: &[time::format_description::FormatItem<'static>] = time::macros::format_description!(
    "[weekday repr:short], [day] [month repr:short] [year] [hour]:[minute]:[second] GMT"
);
const EMPTY_PAYLOAD_SHA: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";
