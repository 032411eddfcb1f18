use std::fmt;
use std::str::FromStr;

use sha2::{Digest, Sha256};

use crate::error::S3Error;
use crate::headers::Headers;
use crate::EMPTY_PAYLOAD_SHA;

/// The HTTP verbs the signer accepts.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum HttpMethod {
    Delete,
    Get,
    Put,
    Head,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpMethod::Delete => write!(f, "DELETE"),
            HttpMethod::Get => write!(f, "GET"),
            HttpMethod::Put => write!(f, "PUT"),
            HttpMethod::Head => write!(f, "HEAD"),
        }
    }
}

impl FromStr for HttpMethod {
    type Err = S3Error;

    /// Case-insensitive; anything outside GET, PUT, HEAD and DELETE is
    /// [`S3Error::UnsupportedMethod`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "DELETE" => Ok(HttpMethod::Delete),
            "GET" => Ok(HttpMethod::Get),
            "PUT" => Ok(HttpMethod::Put),
            "HEAD" => Ok(HttpMethod::Head),
            _ => Err(S3Error::UnsupportedMethod(s.to_string())),
        }
    }
}

impl From<HttpMethod> for http::Method {
    fn from(method: HttpMethod) -> http::Method {
        match method {
            HttpMethod::Delete => http::Method::DELETE,
            HttpMethod::Get => http::Method::GET,
            HttpMethod::Put => http::Method::PUT,
            HttpMethod::Head => http::Method::HEAD,
        }
    }
}

/// Storage classes of Yandex Object Storage, sent as `x-amz-storage-class`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StorageClass {
    Standard,
    Cold,
    Ice,
}

impl fmt::Display for StorageClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageClass::Standard => write!(f, "STANDARD"),
            StorageClass::Cold => write!(f, "COLD"),
            StorageClass::Ice => write!(f, "ICE"),
        }
    }
}

#[derive(Clone, Debug)]
pub enum Command<'a> {
    HeadObject,
    GetObject,
    DeleteObject,
    PutObject {
        content: &'a [u8],
        content_type: &'a str,
        custom_headers: Option<Headers>,
    },
}

impl<'a> Command<'a> {
    pub fn http_verb(&self) -> HttpMethod {
        match *self {
            Command::GetObject => HttpMethod::Get,
            Command::PutObject { .. } => HttpMethod::Put,
            Command::DeleteObject => HttpMethod::Delete,
            Command::HeadObject => HttpMethod::Head,
        }
    }

    pub fn content(&self) -> &'a [u8] {
        match *self {
            Command::PutObject { content, .. } => content,
            _ => &[],
        }
    }

    pub fn content_length(&self) -> usize {
        self.content().len()
    }

    pub fn content_type(&self) -> String {
        match *self {
            Command::PutObject { content_type, .. } => content_type.into(),
            _ => "application/octet-stream".into(),
        }
    }

    pub fn custom_headers(&self) -> Option<&Headers> {
        match self {
            Command::PutObject { custom_headers, .. } => custom_headers.as_ref(),
            _ => None,
        }
    }

    pub fn sha256(&self) -> String {
        match *self {
            Command::PutObject { content, .. } if !content.is_empty() => {
                let mut sha = Sha256::default();
                sha.update(content);
                hex::encode(sha.finalize().as_slice())
            }
            _ => EMPTY_PAYLOAD_SHA.into(),
        }
    }
}
