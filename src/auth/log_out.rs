//! Log-out route handler that clears the session cookies and redirects users.

use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::PrivateCookieJar;

use crate::{
    endpoints,
    session::{CookieSessionStore, SessionStore},
};

/// Clear the session and redirect the client to the log-in page.
pub async fn get_log_out(jar: PrivateCookieJar) -> Response {
    let mut session = CookieSessionStore::new(jar);
    session.clear();

    (session.into_jar(), Redirect::to(endpoints::LOG_IN_VIEW)).into_response()
}
