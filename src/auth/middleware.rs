//! Authentication middleware that sends visitors without a session to the log-in page.

use axum::{
    extract::{FromRequestParts, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::{PrivateCookieJar, cookie::Key};
use axum_htmx::HxRedirect;

use crate::session::{CookieSessionStore, SessionStore};

use super::build_log_in_redirect_url;

/// Run the request if the cookies hold a session token, otherwise respond
/// with `get_redirect` applied to the log-in URL.
///
/// Only the presence of a token is checked. Whether the finance API still
/// accepts it is discovered when a handler makes its first request.
async fn auth_guard_internal(
    cookie_key: Key,
    request: Request,
    next: Next,
    get_redirect: impl Fn(&str) -> Response,
) -> Response {
    let log_in_redirect_url = build_log_in_redirect_url(&request);

    let (mut parts, body) = request.into_parts();
    let jar = match PrivateCookieJar::from_request_parts(&mut parts, &cookie_key).await {
        Ok(jar) => jar,
        Err(error) => {
            tracing::error!("Error getting cookie jar: {error:?}. Redirecting to log in page.");
            return get_redirect(&log_in_redirect_url);
        }
    };

    if !CookieSessionStore::new(jar).is_authenticated() {
        tracing::debug!("No session for {}, redirecting to log in page.", parts.uri);
        return get_redirect(&log_in_redirect_url);
    }

    next.run(Request::from_parts(parts, body)).await
}

/// Middleware for pages: redirects to the log-in page when there is no session.
///
/// **Note**: The app state must contain an `axum_extra::extract::cookie::Key` for decrypting the cookies.
pub async fn auth_guard(State(cookie_key): State<Key>, request: Request, next: Next) -> Response {
    auth_guard_internal(cookie_key, request, next, |redirect_url| {
        Redirect::to(redirect_url).into_response()
    })
    .await
}

/// Middleware for htmx endpoints: responds with `HX-Redirect` to the log-in
/// page when there is no session.
///
/// **Note**: The app state must contain an `axum_extra::extract::cookie::Key` for decrypting the cookies.
pub async fn auth_guard_hx(
    State(cookie_key): State<Key>,
    request: Request,
    next: Next,
) -> Response {
    auth_guard_internal(cookie_key, request, next, |redirect_url| {
        (HxRedirect(redirect_url.to_owned()), StatusCode::OK).into_response()
    })
    .await
}

#[cfg(test)]
mod auth_guard_tests {
    use axum::{
        Router,
        http::StatusCode,
        middleware,
        response::Html,
        routing::{get, post},
    };
    use axum_extra::extract::cookie::Key;
    use axum_test::TestServer;

    use crate::test_utils::{session_cookies, test_cookie_key};

    use super::{auth_guard, auth_guard_hx};

    async fn test_handler() -> Html<&'static str> {
        Html("<p>Hello, World!</p>")
    }

    fn get_test_server(key: Key) -> TestServer {
        let app = Router::new()
            .route("/protected", get(test_handler))
            .route_layer(middleware::from_fn_with_state(key.clone(), auth_guard))
            .merge(
                Router::new()
                    .route("/api/protected", post(test_handler))
                    .route_layer(middleware::from_fn_with_state(key.clone(), auth_guard_hx)),
            )
            .with_state(key);

        TestServer::new(app).expect("Could not create test server.")
    }

    #[tokio::test]
    async fn page_without_session_redirects_to_log_in() {
        let server = get_test_server(test_cookie_key());

        let response = server.get("/protected").await;

        response.assert_status(StatusCode::SEE_OTHER);
        assert_eq!(
            response.header("location"),
            "/log_in?redirect_url=%2Fprotected"
        );
    }

    #[tokio::test]
    async fn page_with_session_is_served() {
        let key = test_cookie_key();
        let server = get_test_server(key.clone());

        let mut request = server.get("/protected");
        for cookie in session_cookies(&key, "abc123", "jane@example.com", "Jane Doe") {
            request = request.add_cookie(cookie);
        }
        let response = request.await;

        response.assert_status_ok();
        response.assert_text("<p>Hello, World!</p>");
    }

    #[tokio::test]
    async fn cookies_from_another_key_are_rejected() {
        let server = get_test_server(test_cookie_key());
        let other_key = Key::generate();

        let mut request = server.get("/protected");
        for cookie in session_cookies(&other_key, "abc123", "jane@example.com", "Jane Doe") {
            request = request.add_cookie(cookie);
        }
        let response = request.await;

        response.assert_status(StatusCode::SEE_OTHER);
    }

    #[tokio::test]
    async fn hx_endpoint_without_session_hx_redirects() {
        let server = get_test_server(test_cookie_key());

        let response = server
            .post("/api/protected")
            .add_header("hx-request", "true")
            .add_header("hx-current-url", "http://localhost/transactions")
            .await;

        response.assert_status_ok();
        assert_eq!(
            response.header("hx-redirect"),
            "/log_in?redirect_url=%2Ftransactions"
        );
    }
}
