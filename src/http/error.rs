//! Failure payload of the synchronous edition.

/// A request-level failure rendered as `status` plus `[code] message`.
///
/// # Examples
///
/// ```rust
/// use statebind::http::HttpError;
///
/// let error = HttpError::new(403, 7, "Forbidden");
/// assert_eq!(error.to_string(), "[7] Forbidden");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HttpError {
    status: u16,
    code: i32,
    message: String,
}

impl HttpError {
    /// Creates an error.
    pub fn new(status: u16, code: i32, message: impl Into<String>) -> Self {
        Self {
            status,
            code,
            message: message.into(),
        }
    }

    /// `401`, code `0`, `Unauthorized`.
    pub fn unauthorized() -> Self {
        Self::new(401, 0, "Unauthorized")
    }

    /// The HTTP status to respond with.
    pub const fn status(&self) -> u16 {
        self.status
    }

    /// The application error code.
    pub const fn code(&self) -> i32 {
        self.code
    }

    /// The human-readable message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for HttpError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for HttpError {}
