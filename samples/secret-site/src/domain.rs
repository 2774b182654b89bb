//! Per-request state of the site.

use statebind::control::Maybe;
use statebind::effect::Service;
use statebind::http::HttpError;

/// An authenticated visitor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    email: String,
}

impl User {
    pub fn new(email: impl Into<String>) -> Self {
        Self { email: email.into() }
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

/// State threaded through every page service. Each request starts from
/// [`Environment::anonymous`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Environment {
    auth_user: Maybe<User>,
}

impl Environment {
    pub const fn anonymous() -> Self {
        Self {
            auth_user: Maybe::Nothing,
        }
    }

    pub const fn authenticated(user: User) -> Self {
        Self {
            auth_user: Maybe::Just(user),
        }
    }

    /// The authenticated user as a service step; fails with `401` when the
    /// visitor is anonymous.
    pub fn auth_user(&self) -> Service<Self, HttpError, User> {
        self.auth_user
            .clone()
            .cases(|| Service::error(HttpError::unauthorized()), Service::pure)
    }
}
