use thiserror::Error;

use crate::serde_types::AwsError;

pub type Result<T, E = S3Error> = std::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum S3Error {
    #[error("Unsupported HTTP method {0}, expected one of GET, PUT, HEAD, DELETE")]
    UnsupportedMethod(String),
    #[error("Missing required signing input: {0}")]
    MissingSigningInput(&'static str),
    #[error("Invalid header {name}: {reason}")]
    InvalidHeader { name: String, reason: String },
    #[error("Object key {0} has a '.' or '..' path segment")]
    InvalidObjectKey(String),
    #[error("Missing environment variable {0}")]
    MissingEnvVar(String),
    /// The storage service answered with a non-2xx status. `body` is the raw
    /// response body, `date` the local request timestamp the signature was
    /// computed for.
    #[error("Got HTTP {status} for request signed at {date} with content '{}'", String::from_utf8_lossy(.body))]
    HttpFailWithBody {
        status: u16,
        body: Vec<u8>,
        date: String,
    },
    #[error("sha2 invalid length: {0}")]
    HmacInvalidLength(#[from] sha2::digest::InvalidLength),
    #[error("url parse: {0}")]
    UrlParse(#[from] url::ParseError),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("attohttpc: {0}")]
    Transport(#[from] attohttpc::Error),
    #[error("http: {0}")]
    Http(#[from] http::Error),
    #[error("invalid status code: {0}")]
    InvalidStatusCode(#[from] http::status::InvalidStatusCode),
    #[error("serde xml: {0}")]
    SerdeXml(#[from] quick_xml::de::DeError),
    #[error("Time format error: {0}")]
    TimeFormatError(#[from] time::error::Format),
}

impl S3Error {
    /// HTTP status of a failed remote call, `None` for local errors.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            S3Error::HttpFailWithBody { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Parses the provider's XML error document out of a failed response.
    ///
    /// Returns `None` for local errors and for bodies that are not an S3
    /// `<Error>` document.
    pub fn aws_error(&self) -> Option<AwsError> {
        match self {
            S3Error::HttpFailWithBody { body, .. } => AwsError::from_body(body).ok(),
            _ => None,
        }
    }

    pub(crate) fn invalid_header(name: &str, reason: impl ToString) -> Self {
        S3Error::InvalidHeader {
            name: name.to_string(),
            reason: reason.to_string(),
        }
    }
}
