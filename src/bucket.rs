use std::borrow::Cow;
use std::env;
use std::fmt;
use std::path::Path;
use std::time::Duration;

use log::{debug, warn};

use crate::command::{Command, StorageClass};
use crate::credentials::Credentials;
use crate::error::{Result, S3Error};
use crate::headers::Headers;
use crate::region::Region;
use crate::request::builder::BuildHelper;
use crate::request::{AttoBackend, Backend, DefaultBackend, ResponseData};
use crate::utils::key_for_path;

pub const BUCKET_ENV: &str = "YANDEX_CLOUD_S3_BUCKET";

const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";
const STORAGE_CLASS: &str = "x-amz-storage-class";

/// A bucket in Yandex Object Storage or any other S3-compatible service.
///
/// Every operation assembles, signs and sends exactly one request. Anything
/// but a 2xx answer comes back as [`S3Error::HttpFailWithBody`], nothing is
/// retried.
///
/// # Example
/// ```
/// use ycs3::{Bucket, Credentials, Region};
///
/// let bucket_name = "rust-s3-test";
/// let region = "ru-central1".parse().unwrap();
/// let credentials = Credentials::new("YCAJEexampleKeyId", "YCexampleSecretKey");
///
/// let bucket = Bucket::new(bucket_name, region, credentials);
/// assert_eq!(bucket.region, Region::Yandex);
/// ```
#[derive(Clone)]
pub struct Bucket<B = DefaultBackend> {
    pub name: String,
    pub region: Region,
    pub credentials: Credentials,
    /// Sent with every request. Headers the library sets itself win over
    /// these.
    pub extra_headers: Headers,
    backend: B,
}

impl<B> fmt::Debug for Bucket<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bucket")
            .field("name", &self.name)
            .field("region", &self.region)
            .field("credentials", &self.credentials)
            .field("extra_headers", &self.extra_headers)
            .finish()
    }
}

impl Bucket {
    pub fn new(name: &str, region: Region, credentials: Credentials) -> Bucket {
        Bucket {
            name: name.into(),
            region,
            credentials,
            extra_headers: Headers::new(),
            backend: AttoBackend::default(),
        }
    }

    /// Configuration from the process environment: bucket name from
    /// `YANDEX_CLOUD_S3_BUCKET`, see [`Region::from_default_env`] and
    /// [`Credentials::from_env`] for the rest.
    pub fn from_env() -> Result<Bucket> {
        let name = env::var(BUCKET_ENV).map_err(|_| S3Error::MissingEnvVar(BUCKET_ENV.into()))?;
        Ok(Bucket::new(
            &name,
            Region::from_default_env()?,
            Credentials::from_env()?,
        ))
    }
}

impl Bucket<AttoBackend> {
    /// # Example
    /// ```
    /// use std::time::Duration;
    /// use ycs3::{Bucket, Credentials, Region};
    ///
    /// let credentials = Credentials::new("YCAJEexampleKeyId", "YCexampleSecretKey");
    /// let bucket = Bucket::new("rust-s3-test", Region::Yandex, credentials)
    ///     .with_request_timeout(Duration::from_secs(10));
    ///
    /// assert_eq!(bucket.request_timeout(), Some(Duration::from_secs(10)));
    /// ```
    pub fn with_request_timeout(self, request_timeout: Duration) -> Bucket<AttoBackend> {
        let backend = self.backend.with_request_timeout(Some(request_timeout));
        self.with_backend(backend)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.backend.request_timeout()
    }
}

impl<B> Bucket<B> {
    /// Replace the transport, e.g. with a stub in tests.
    pub fn with_backend<T: Backend>(self, backend: T) -> Bucket<T> {
        Bucket {
            name: self.name,
            region: self.region,
            credentials: self.credentials,
            extra_headers: self.extra_headers,
            backend,
        }
    }

    /// Add an extra header to send with every request to the S3 API.
    pub fn add_header(&mut self, key: &str, value: &str) {
        self.extra_headers.insert(key, value);
    }

    /// Get a reference to the extra headers to be passed to the S3 API.
    pub fn extra_headers(&self) -> &Headers {
        &self.extra_headers
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}

impl<B: Backend> Bucket<B> {
    /// Gets file from an S3 path.
    ///
    /// # Example:
    ///
    /// ```rust,no_run
    /// use ycs3::{Bucket, Credentials, Region};
    ///
    /// let credentials = Credentials::from_env()?;
    /// let bucket = Bucket::new("rust-s3-test", Region::Yandex, credentials);
    ///
    /// let response_data = bucket.get_object("/test.file")?;
    /// println!("{}", response_data);
    /// # Ok::<(), ycs3::S3Error>(())
    /// ```
    pub fn get_object<S: AsRef<str>>(&self, path: S) -> Result<ResponseData> {
        self.execute(path.as_ref(), Command::GetObject)
    }

    /// Metadata of an object, the body is empty.
    pub fn head_object<S: AsRef<str>>(&self, path: S) -> Result<ResponseData> {
        self.execute(path.as_ref(), Command::HeadObject)
    }

    /// Delete file from an S3 path.
    ///
    /// Deleting a key that does not exist succeeds too, the service answers
    /// `204 No Content` either way.
    pub fn delete_object<S: AsRef<str>>(&self, path: S) -> Result<ResponseData> {
        self.execute(path.as_ref(), Command::DeleteObject)
    }

    /// Put into an S3 bucket, with `application/octet-stream` content type.
    ///
    /// # Example:
    ///
    /// ```rust,no_run
    /// use ycs3::{Bucket, Credentials, Region};
    ///
    /// let credentials = Credentials::from_env()?;
    /// let bucket = Bucket::new("rust-s3-test", Region::Yandex, credentials);
    ///
    /// let response_data = bucket.put_object("/test.file", b"I want to go to S3")?;
    /// assert_eq!(response_data.status_code(), 200);
    /// # Ok::<(), ycs3::S3Error>(())
    /// ```
    pub fn put_object<S: AsRef<str>>(&self, path: S, content: &[u8]) -> Result<ResponseData> {
        self.put_object_with_content_type(path, content, DEFAULT_CONTENT_TYPE)
    }

    pub fn put_object_with_content_type<S: AsRef<str>>(
        &self,
        path: S,
        content: &[u8],
        content_type: &str,
    ) -> Result<ResponseData> {
        let command = Command::PutObject {
            content,
            content_type,
            custom_headers: None,
        };
        self.execute(path.as_ref(), command)
    }

    /// Put into an S3 bucket with an explicit storage class.
    ///
    /// # Example:
    ///
    /// ```rust,no_run
    /// use ycs3::{Bucket, Credentials, Region, StorageClass};
    ///
    /// let credentials = Credentials::from_env()?;
    /// let bucket = Bucket::new("rust-s3-test", Region::Yandex, credentials);
    ///
    /// bucket.put_object_with_storage_class("/archive.tar", b"...", StorageClass::Cold)?;
    /// # Ok::<(), ycs3::S3Error>(())
    /// ```
    pub fn put_object_with_storage_class<S: AsRef<str>>(
        &self,
        path: S,
        content: &[u8],
        storage_class: StorageClass,
    ) -> Result<ResponseData> {
        let headers = Headers::new().with(STORAGE_CLASS, storage_class);
        self.put_object_with_headers(path, content, DEFAULT_CONTENT_TYPE, headers)
    }

    /// Put into an S3 bucket with additional headers for this request only,
    /// e.g. `x-amz-meta-*` metadata.
    pub fn put_object_with_headers<S: AsRef<str>>(
        &self,
        path: S,
        content: &[u8],
        content_type: &str,
        custom_headers: Headers,
    ) -> Result<ResponseData> {
        let command = Command::PutObject {
            content,
            content_type,
            custom_headers: Some(custom_headers),
        };
        self.execute(path.as_ref(), command)
    }

    /// Upload a local file, read whole into memory. The object key defaults
    /// to the file name.
    ///
    /// # Example:
    ///
    /// ```rust,no_run
    /// use ycs3::{Bucket, Credentials, Region};
    ///
    /// let credentials = Credentials::from_env()?;
    /// let bucket = Bucket::new("rust-s3-test", Region::Yandex, credentials);
    ///
    /// // stored as "report.csv"
    /// bucket.upload_file("/tmp/report.csv", None)?;
    /// // stored as "reports/2018/report.csv"
    /// bucket.upload_file("/tmp/report.csv", Some("reports/2018/report.csv"))?;
    /// # Ok::<(), ycs3::S3Error>(())
    /// ```
    pub fn upload_file<P: AsRef<Path>>(&self, path: P, key: Option<&str>) -> Result<ResponseData> {
        let path = path.as_ref();
        let key = match key {
            Some(key) => key.to_string(),
            None => key_for_path(path)?,
        };
        let content = std::fs::read(path)?;
        debug!("uploading {} ({} bytes) as {}", path.display(), content.len(), key);
        self.put_object(key, &content)
    }

    fn execute(&self, path: &str, command: Command<'_>) -> Result<ResponseData> {
        let helper = BuildHelper::new(self, path, command);
        let date = helper.long_date()?;
        let request = helper.build()?;
        self.send(request, date)
    }

    fn send(&self, request: http::Request<Cow<'_, [u8]>>, date: String) -> Result<ResponseData> {
        let method = request.method().clone();
        let uri = request.uri().to_string();

        let mut backend = self.backend.clone();
        let response = backend.call(request).map_err(Into::<S3Error>::into)?;

        let status = response.status();
        if !status.is_success() {
            warn!(
                "{} {} failed with HTTP {}, request signed at {}",
                method, uri, status, date
            );
            if status == http::StatusCode::FORBIDDEN {
                warn!("HTTP 403 may mean the local clock is skewed, the signature is only valid for a few minutes around {}", date);
            }
            return Err(S3Error::HttpFailWithBody {
                status: status.as_u16(),
                body: response.into_body(),
                date,
            });
        }

        Ok(ResponseData::from(response))
    }
}
