//! Page controllers and the site's route table.
//!
//! | Path | Controller | Description |
//! |------|------------|-------------|
//! | `/index.html` | [`index_page`] | Public greeting |
//! | `/secret.html` | [`auth`] then [`secret_page`] | Greets an authenticated user |

use std::sync::Arc;

use statebind::effect::{Service, kleisli};
use statebind::http::{HttpError, HttpRequest, HttpResponse, RouteTable};

use crate::config::AppConfig;
use crate::domain::{Environment, User};

/// A service over the site's [`Environment`] failing with [`HttpError`].
pub type Page<A> = Service<Environment, HttpError, A>;

/// GET /index.html
pub fn index_page(_: HttpRequest) -> Page<HttpResponse> {
    Service::pure(HttpResponse::ok("Hello world!"))
}

/// Auth policy: lets the request through when its `password` query
/// parameter equals `password`, storing the user named by `email` in the
/// environment. Otherwise fails with `401`.
pub fn auth(password: impl Into<Arc<str>>) -> impl Fn(HttpRequest) -> Page<HttpRequest> + Send + Sync + 'static {
    let password: Arc<str> = password.into();
    move |request: HttpRequest| {
        if request.query_param("password") != Some(&*password) {
            tracing::debug!(path = request.path(), "rejecting request without valid password");
            return Service::error(HttpError::unauthorized());
        }
        let user = User::new(request.query_param("email").unwrap_or_default());
        tracing::debug!(email = user.email(), "authenticated");
        Service::write_state(Environment::authenticated(user)).map(move |()| request.clone())
    }
}

/// GET /secret.html, behind [`auth`].
pub fn secret_page(_: HttpRequest) -> Page<HttpResponse> {
    Service::read_state()
        .bind(|environment: Environment| environment.auth_user())
        .map(|user: User| HttpResponse::ok(format!("Hello {}, you found the secret!", user.email())))
}

/// Builds the route table of the site.
pub fn site_routes(config: &AppConfig) -> RouteTable<Environment, HttpError> {
    RouteTable::new()
        .on("/index.html", index_page)
        .on("/secret.html", kleisli(secret_page, auth(config.secret_password.as_str())))
}
