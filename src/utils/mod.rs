mod time_utils;

#[cfg(test)]
pub(crate) mod testing;

pub use time_utils::*;

use std::path::Path;

use crate::error::{Result, S3Error};

/// Object key for a local file: its file name.
///
/// # Example
/// ```
/// use ycs3::utils::key_for_path;
///
/// assert_eq!(key_for_path("/tmp/reports/2018.csv").unwrap(), "2018.csv");
/// ```
pub fn key_for_path(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| {
            S3Error::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("{} has no file name", path.display()),
            ))
        })
}
