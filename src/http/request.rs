//! Incoming request value.

use std::collections::HashMap;

/// Flat string-to-string query mapping.
pub type Query = HashMap<String, String>;

/// An incoming request: the path and its query parameters.
///
/// Produced once per incoming call by the transport layer and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HttpRequest {
    path: String,
    query: Query,
}

impl HttpRequest {
    /// Creates a request from a path and query mapping.
    pub fn new(path: impl Into<String>, query: Query) -> Self {
        Self {
            path: path.into(),
            query,
        }
    }

    /// Parses a request target such as `/secret.html?email=a%40b.com`.
    ///
    /// Everything before `?` is the path; the rest is decoded as
    /// `application/x-www-form-urlencoded`. When a key repeats, the last
    /// value wins.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use statebind::http::HttpRequest;
    ///
    /// let request = HttpRequest::from_uri("/secret.html?email=a%40b.com&password=test");
    /// assert_eq!(request.path(), "/secret.html");
    /// assert_eq!(request.query_param("email"), Some("a@b.com"));
    /// ```
    pub fn from_uri(uri: &str) -> Self {
        let (path, query) = uri.split_once('?').unwrap_or((uri, ""));
        let query = url::form_urlencoded::parse(query.as_bytes())
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect();
        Self::new(path, query)
    }

    /// The request path, without query string.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// All query parameters.
    pub const fn query(&self) -> &Query {
        &self.query
    }

    /// A single query parameter.
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query.get(name).map(String::as_str)
    }
}
