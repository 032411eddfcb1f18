use std::fmt;

use http::header::{HeaderName, HeaderValue};
use http::HeaderMap;

use crate::error::{Result, S3Error};

/// Ordered list of HTTP headers sent to the storage service.
///
/// Names are unique ignoring ASCII case: setting a header that is already
/// present replaces its value in place. Iteration follows insertion order, the
/// signing code sorts on its own and never depends on it.
///
/// # Example
/// ```
/// use ycs3::Headers;
///
/// let caller = Headers::new()
///     .with("Content-Type", "text/plain")
///     .with("x-amz-meta-owner", "alice");
/// let library = Headers::new().with("content-type", "application/octet-stream");
///
/// let merged = caller.merge(&library);
/// assert_eq!(merged.get("Content-Type"), Some("application/octet-stream"));
/// assert_eq!(merged.get("X-Amz-Meta-Owner"), Some("alice"));
/// // inputs are left untouched
/// assert_eq!(caller.get("content-type"), Some("text/plain"));
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Headers(Vec<(String, String)>);

impl Headers {
    pub fn new() -> Headers {
        Headers(Vec::new())
    }

    /// Builder form of [`Headers::insert`].
    pub fn with(mut self, name: impl Into<String>, value: impl ToString) -> Headers {
        self.insert(name, value);
        self
    }

    /// Sets `name` to `value`, replacing an existing header of the same name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl ToString) {
        let name = name.into();
        let value = value.to_string();
        match self.position(&name) {
            Some(i) => self.0[i] = (name, value),
            None => self.0.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.position(name).map(|i| self.0[i].1.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.position(name).map(|i| self.0.remove(i).1)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns a new list with `overrides` applied on top of `self`.
    ///
    /// Headers of `self` keep their position, overridden ones take the new
    /// value, headers only present in `overrides` are appended.
    pub fn merge(&self, overrides: &Headers) -> Headers {
        let mut merged = self.clone();
        for (name, value) in overrides.iter() {
            merged.insert(name, value);
        }
        merged
    }

    /// Converts to an [`http::HeaderMap`] for the transport, keeping the
    /// caller's spelling of every value.
    pub fn to_header_map(&self) -> Result<HeaderMap> {
        let mut map = HeaderMap::with_capacity(self.len());
        for (name, value) in self.iter() {
            let header_name = HeaderName::from_bytes(name.trim().as_bytes())
                .map_err(|e| S3Error::invalid_header(name, e))?;
            let header_value =
                HeaderValue::from_str(value.trim()).map_err(|e| S3Error::invalid_header(name, e))?;
            map.insert(header_name, header_value);
        }
        Ok(map)
    }

    fn position(&self, name: &str) -> Option<usize> {
        let name = name.trim();
        self.0.iter().position(|(k, _)| k.trim().eq_ignore_ascii_case(name))
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for Headers {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut headers = Headers::new();
        for (name, value) in iter {
            headers.insert(name, value);
        }
        headers
    }
}

impl<'a> IntoIterator for &'a Headers {
    type Item = (&'a str, &'a str);
    type IntoIter = Box<dyn Iterator<Item = (&'a str, &'a str)> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

impl fmt::Display for Headers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, value) in self.iter() {
            writeln!(f, "{}: {}", name, value)?;
        }
        Ok(())
    }
}
