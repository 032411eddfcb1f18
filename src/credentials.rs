use std::env;
use std::fmt;

use crate::error::{Result, S3Error};

pub const ACCESS_KEY_ID_ENV: &str = "YANDEX_CLOUD_S3_ACCESS_KEY_ID";
pub const SECRET_KEY_ENV: &str = "YANDEX_CLOUD_S3_ACCESS_KEY";

/// Static access key pair used to sign requests.
///
/// The signing core only ever receives credentials as plain values. Reading
/// them from the environment is a one-time step for the application's entry
/// point.
///
/// # Example
///
/// ```
/// use ycs3::Credentials;
///
/// // Load credentials directly
/// let credentials = Credentials::new("YCAJEexampleKeyId", "YCexampleSecretKey");
///
/// // Load credentials from the environment
/// std::env::set_var("YANDEX_CLOUD_S3_ACCESS_KEY_ID", "YCAJEexampleKeyId");
/// std::env::set_var("YANDEX_CLOUD_S3_ACCESS_KEY", "YCexampleSecretKey");
/// let from_env = Credentials::from_env().unwrap();
/// assert_eq!(credentials, from_env);
/// ```
#[derive(Clone, Eq, PartialEq)]
pub struct Credentials {
    /// Public access key id, sent in the `Credential=` field.
    pub access_key: String,
    /// Secret key, only ever used as HMAC input.
    pub secret_key: String,
}

impl Credentials {
    pub fn new(access_key: impl Into<String>, secret_key: impl Into<String>) -> Credentials {
        Credentials {
            access_key: access_key.into(),
            secret_key: secret_key.into(),
        }
    }

    /// Reads `YANDEX_CLOUD_S3_ACCESS_KEY_ID` and `YANDEX_CLOUD_S3_ACCESS_KEY`.
    pub fn from_env() -> Result<Credentials> {
        Credentials::from_env_specific(ACCESS_KEY_ID_ENV, SECRET_KEY_ENV)
    }

    pub fn from_env_specific(access_key_var: &str, secret_key_var: &str) -> Result<Credentials> {
        let access_key = required_var(access_key_var)?;
        let secret_key = required_var(secret_key_var)?;
        Ok(Credentials::new(access_key, secret_key))
    }

    /// Fails with [`S3Error::MissingSigningInput`] if either key is empty.
    pub fn validate(&self) -> Result<()> {
        if self.access_key.is_empty() {
            return Err(S3Error::MissingSigningInput("access key"));
        }
        if self.secret_key.is_empty() {
            return Err(S3Error::MissingSigningInput("secret key"));
        }
        Ok(())
    }
}

fn required_var(var: &str) -> Result<String> {
    env::var(var).map_err(|_| S3Error::MissingEnvVar(var.to_string()))
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key", &self.access_key)
            .field("secret_key", &"** redacted **")
            .finish()
    }
}
