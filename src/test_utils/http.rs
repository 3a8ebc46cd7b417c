use axum::{
    body::Body,
    http::{StatusCode, header::SET_COOKIE},
    response::{IntoResponse, Response},
};
use axum_extra::extract::{
    PrivateCookieJar,
    cookie::{Cookie, Key},
};
use axum_test::TestRequest;
use time::Duration;

use crate::{
    app_state::create_cookie_key,
    session::{CookieSessionStore, SESSION_EMAIL, SESSION_FULL_NAME, SESSION_TOKEN, SessionStore},
};

/// The cookie key used by handler tests.
pub(crate) fn test_cookie_key() -> Key {
    create_cookie_key("42")
}

/// The encrypted cookies a browser would hold after logging in.
pub(crate) fn session_cookies(
    key: &Key,
    token: &str,
    email: &str,
    full_name: &str,
) -> Vec<Cookie<'static>> {
    let mut session = CookieSessionStore::new(PrivateCookieJar::new(key.clone()));
    session.save(token, email, full_name);

    session
        .into_jar()
        .into_response()
        .headers()
        .get_all(SET_COOKIE)
        .iter()
        .map(|header| {
            let header = header.to_str().expect("Could not convert to str");
            Cookie::parse(header.to_owned()).expect("Could not parse cookie")
        })
        .collect()
}

/// Attach the cookies of a logged in browser whose API token is `token`.
pub(crate) fn with_session(mut request: TestRequest, token: &str) -> TestRequest {
    for cookie in session_cookies(&test_cookie_key(), token, "jane@example.com", "Jane Doe") {
        request = request.add_cookie(cookie);
    }

    request
}

#[track_caller]
pub(crate) fn get_header(response: &Response<Body>, header_name: &str) -> String {
    let header_error_message = format!("Headers missing {header_name}");

    response
        .headers()
        .get(header_name)
        .expect(&header_error_message)
        .to_str()
        .expect("Could not convert to str")
        .to_string()
}

#[track_caller]
pub(crate) fn assert_hx_redirect(response: &Response<Body>, endpoint: &str) {
    assert_eq!(get_header(response, "hx-redirect"), endpoint);
}

#[track_caller]
pub(crate) fn assert_redirect(response: &Response<Body>, endpoint: &str) {
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(get_header(response, "location"), endpoint);
}

/// Assert that the response expires all three session cookies.
#[track_caller]
pub(crate) fn assert_cookies_cleared(response: &Response<Body>) {
    let cookies: Vec<Cookie<'static>> = response
        .headers()
        .get_all(SET_COOKIE)
        .iter()
        .map(|header| {
            let header = header.to_str().expect("Could not convert to str");
            Cookie::parse(header.to_owned()).expect("Could not parse cookie")
        })
        .collect();

    for name in [SESSION_TOKEN, SESSION_EMAIL, SESSION_FULL_NAME] {
        let cookie = cookies
            .iter()
            .find(|cookie| cookie.name() == name)
            .unwrap_or_else(|| panic!("want removal cookie for {name}, got {cookies:?}"));

        assert_eq!(
            cookie.max_age(),
            Some(Duration::ZERO),
            "want {name} cookie to be expired"
        );
    }
}
