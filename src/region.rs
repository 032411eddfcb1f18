use std::str::FromStr;
use std::{env, fmt};

use crate::error::{Result, S3Error};

pub const REGION_ENV: &str = "YANDEX_CLOUD_S3_REGION";
pub const ENDPOINT_ENV: &str = "YANDEX_CLOUD_S3_ENDPOINT";

/// Storage region: the region name that goes into the signing scope plus the
/// endpoint requests are sent to.
///
/// Any S3-compatible service can be addressed with a custom region, in that
/// case it is up to you to pass a valid endpoint.
///
/// # Example
/// ```
/// use ycs3::Region;
///
/// // Parse from a string
/// let region: Region = "ru-central1".parse().unwrap();
/// assert_eq!(region, Region::Yandex);
///
/// // Custom region requires valid region name and endpoint
/// let region = Region::Custom {
///     region: "us-east-1".to_string(),
///     endpoint: "http://localhost:9000".to_string(),
/// };
/// assert_eq!(region.scheme(), "http");
/// assert_eq!(region.host(), "localhost:9000");
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum Region {
    /// Yandex Object Storage, `ru-central1`
    #[default]
    Yandex,
    /// Custom region
    Custom { region: String, endpoint: String },
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Region::Yandex => write!(f, "ru-central1"),
            Region::Custom { ref region, .. } => write!(f, "{}", region),
        }
    }
}

impl FromStr for Region {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "yandex" | "ru-central1" => Ok(Region::Yandex),
            x => Ok(Region::Custom {
                region: x.to_string(),
                endpoint: x.to_string(),
            }),
        }
    }
}

impl Region {
    pub fn endpoint(&self) -> String {
        match *self {
            Region::Yandex => String::from("storage.yandexcloud.net"),
            Region::Custom { ref endpoint, .. } => endpoint.to_string(),
        }
    }

    pub fn scheme(&self) -> String {
        match *self {
            Region::Custom { ref endpoint, .. } => match endpoint.find("://") {
                Some(pos) => endpoint[..pos].to_string(),
                None => "https".to_string(),
            },
            _ => "https".to_string(),
        }
    }

    /// Value of the `Host` header: the endpoint without scheme or path.
    pub fn host(&self) -> String {
        match *self {
            Region::Custom { ref endpoint, .. } => {
                let host = match endpoint.find("://") {
                    Some(pos) => &endpoint[pos + 3..],
                    None => endpoint.as_str(),
                };
                host.split('/').next().unwrap_or_default().to_string()
            }
            _ => self.endpoint(),
        }
    }

    pub fn from_env(region_env: &str, endpoint_env: Option<&str>) -> Result<Region> {
        let region = env::var(region_env).map_err(|_| S3Error::MissingEnvVar(region_env.into()))?;
        if let Some(endpoint_env) = endpoint_env {
            Ok(Region::Custom {
                region,
                endpoint: env::var(endpoint_env)
                    .map_err(|_| S3Error::MissingEnvVar(endpoint_env.into()))?,
            })
        } else {
            Ok(region.parse().unwrap_or_default())
        }
    }

    /// Builds a region from `YANDEX_CLOUD_S3_REGION` and, when set,
    /// `YANDEX_CLOUD_S3_ENDPOINT`. Falls back to [`Region::Yandex`] when
    /// neither is present.
    pub fn from_default_env() -> Result<Region> {
        match (env::var(REGION_ENV), env::var(ENDPOINT_ENV)) {
            (Ok(region), Ok(endpoint)) => Ok(Region::Custom { region, endpoint }),
            (Ok(region), Err(_)) => Ok(region.parse().unwrap_or_default()),
            (Err(_), Ok(_)) => Err(S3Error::MissingEnvVar(REGION_ENV.to_string())),
            (Err(_), Err(_)) => Ok(Region::Yandex),
        }
    }
}
