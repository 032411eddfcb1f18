use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;

use base64::engine::general_purpose;
use base64::Engine;
use bytes::Bytes;
use log::debug;
use percent_encoding::percent_decode_str;
use time::OffsetDateTime;

use crate::bucket::Bucket;
use crate::command::Command;
use crate::error::{Result, S3Error};
use crate::headers::Headers;
use crate::signing::{self, CanonicalRequest, Signer};
use crate::utils::now_utc;
use crate::{LONG_DATETIME, RFC1123};

const HOST: &str = "Host";
const DATE: &str = "Date";
const AUTHORIZATION: &str = "Authorization";
const CONTENT_TYPE: &str = "Content-Type";
const CONTENT_LENGTH: &str = "Content-Length";
const CONTENT_MD5: &str = "Content-MD5";
const CONTENT_SHA256: &str = "x-amz-content-sha256";

#[derive(Debug)]
pub struct ResponseData {
    bytes: Bytes,
    status_code: u16,
    headers: HashMap<String, String>,
}

impl From<ResponseData> for Vec<u8> {
    fn from(data: ResponseData) -> Vec<u8> {
        data.to_vec()
    }
}

impl From<http::Response<Vec<u8>>> for ResponseData {
    fn from(response: http::Response<Vec<u8>>) -> ResponseData {
        let status_code = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|value| (name.as_str().to_string(), value.to_string()))
            })
            .collect();
        ResponseData::new(Bytes::from(response.into_body()), status_code, headers)
    }
}

impl ResponseData {
    pub fn new(bytes: Bytes, status_code: u16, headers: HashMap<String, String>) -> ResponseData {
        ResponseData {
            bytes,
            status_code,
            headers,
        }
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    pub fn to_vec(self) -> Vec<u8> {
        self.bytes.to_vec()
    }

    pub fn bytes(&self) -> &Bytes {
        &self.bytes
    }

    pub fn into_bytes(self) -> Bytes {
        self.bytes
    }

    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    pub fn as_str(&self) -> std::result::Result<&str, std::str::Utf8Error> {
        std::str::from_utf8(self.as_slice())
    }

    pub fn to_string(&self) -> std::result::Result<String, std::str::Utf8Error> {
        self.as_str().map(|s| s.to_string())
    }

    /// Response headers with lowercase names. Values that are not visible
    /// ASCII are left out.
    pub fn headers(&self) -> HashMap<String, String> {
        self.headers.clone()
    }
}

impl fmt::Display for ResponseData {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Status code: {}\n Data: {}",
            self.status_code(),
            self.to_string()
                .unwrap_or_else(|_| "Data could not be cast to UTF string".to_string())
        )
    }
}

/// Assembles and signs one request. The instant is captured once, on
/// construction, and feeds the `Date` header and the signing scope alike.
pub(crate) struct BuildHelper<'temp, 'body, B> {
    pub(crate) bucket: &'temp Bucket<B>,
    pub(crate) path: &'temp str,
    pub(crate) command: Command<'body>,
    pub(crate) datetime: OffsetDateTime,
}

impl<'temp, 'body, B> BuildHelper<'temp, 'body, B> {
    pub(crate) fn new(bucket: &'temp Bucket<B>, path: &'temp str, command: Command<'body>) -> Self {
        BuildHelper {
            bucket,
            path,
            command,
            datetime: now_utc(),
        }
    }

    pub(crate) fn long_date(&self) -> Result<String> {
        Ok(self.datetime.format(LONG_DATETIME)?)
    }

    fn host_header(&self) -> String {
        self.bucket.region.host()
    }

    /// Encoded `/<bucket>/<key>`, shared by the request line and the
    /// canonical request.
    ///
    /// Keys with `.` or `..` segments, plain or escaped, are rejected: the
    /// transport resolves them before sending, so the signed path would no
    /// longer be the one on the wire.
    fn encoded_path(&self) -> Result<String> {
        let key = self.path.strip_prefix('/').unwrap_or(self.path);
        let dot_segment = key.split('/').any(|segment| {
            let segment = percent_decode_str(segment).collect::<Vec<u8>>();
            segment == b"." || segment == b".."
        });
        if dot_segment {
            return Err(S3Error::InvalidObjectKey(key.to_string()));
        }
        Ok(signing::uri_encode(&format!("/{}/{}", self.bucket.name, key)))
    }

    fn uri(&self) -> Result<http::Uri> {
        Ok(http::Uri::builder()
            .scheme(self.bucket.region.scheme().as_str())
            .authority(self.host_header().as_str())
            .path_and_query(self.encoded_path()?)
            .build()?)
    }

    fn headers(&self) -> Result<Headers> {
        // Start with extra_headers, that way our headers replace anything with
        // the same name.
        let caller = match self.command.custom_headers() {
            Some(custom_headers) => self.bucket.extra_headers.merge(custom_headers),
            None => self.bucket.extra_headers.clone(),
        };

        let mut library = Headers::new()
            .with(HOST, self.host_header())
            .with(DATE, self.datetime.format(RFC1123)?);

        let content = self.command.content();
        if !content.is_empty() {
            let digest = md5::compute(content);
            library.insert(CONTENT_SHA256, self.command.sha256());
            library.insert(CONTENT_TYPE, self.command.content_type());
            library.insert(CONTENT_LENGTH, self.command.content_length());
            library.insert(CONTENT_MD5, general_purpose::STANDARD.encode(digest.as_ref()));
        }

        Ok(caller.merge(&library))
    }

    fn authorization(&self, headers: &Headers) -> Result<String> {
        let canonical = CanonicalRequest::with_payload_hash(
            self.command.http_verb(),
            &self.encoded_path()?,
            headers,
            &self.command.sha256(),
        )?;
        let region = self.bucket.region.to_string();
        Signer::new(&self.bucket.credentials, &region, signing::DEFAULT_SERVICE)
            .authorization(&canonical, self.datetime)
    }

    pub(crate) fn build(self) -> Result<http::Request<Cow<'body, [u8]>>> {
        let mut headers = self.headers()?;
        // Must be last, it signs every other header.
        let authorization = self.authorization(&headers)?;
        headers.insert(AUTHORIZATION, authorization);

        let method = http::Method::from(self.command.http_verb());
        let uri = self.uri()?;
        debug!("{} {}", method, uri);

        let mut request = http::Request::builder()
            .method(method)
            .uri(uri)
            .body(Cow::Borrowed(self.command.content()))?;
        *request.headers_mut() = headers.to_header_map()?;
        Ok(request)
    }
}

/// Builds the signed `http::Request` for `command` on `path` in `bucket`.
pub fn build_request<'body, B>(
    bucket: &Bucket<B>,
    path: &str,
    command: Command<'body>,
) -> Result<http::Request<Cow<'body, [u8]>>> {
    BuildHelper::new(bucket, path, command).build()
}
