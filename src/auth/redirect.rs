//! Where to send the user after they log in.

use axum::{extract::Request, http::Uri};
use serde::Deserialize;

use crate::endpoints;

/// The `redirect_url` query parameter of the log-in page.
#[derive(Debug, Default, Deserialize)]
pub struct RedirectQuery {
    pub redirect_url: Option<String>,
}

/// Only same-site paths are allowed, and never the log-in page itself.
fn is_safe_redirect_path(path_and_query: &str) -> bool {
    if !path_and_query.starts_with('/') || path_and_query.starts_with("//") {
        return false;
    }

    let path = path_and_query
        .split_once('?')
        .map_or(path_and_query, |(path, _)| path);

    path != endpoints::LOG_IN_VIEW && path != endpoints::REGISTER_VIEW
}

/// The path and query of `raw_url` if it is safe to redirect to.
///
/// When `allow_absolute` is set, the scheme and host of an absolute URL are
/// ignored. This is used for the `HX-Current-URL` header, which htmx always
/// sets to the full URL of the current page.
fn normalize(raw_url: &str, allow_absolute: bool) -> Option<String> {
    let uri = raw_url.parse::<Uri>().ok()?;

    if !allow_absolute && (uri.scheme().is_some() || uri.authority().is_some()) {
        return None;
    }

    let path_and_query = uri.path_and_query()?.as_str();

    is_safe_redirect_path(path_and_query).then(|| path_and_query.to_owned())
}

/// Validate a user supplied redirect URL, logging rejected values.
///
/// `source` names where the URL came from for the log message.
pub fn parse_redirect_url(raw_url: Option<&str>, source: &str) -> Option<String> {
    let raw_url = raw_url.filter(|url| !url.is_empty())?;
    let redirect_url = normalize(raw_url, false);

    if redirect_url.is_none() {
        tracing::warn!("Invalid redirect URL from {source}: {raw_url}");
    }

    redirect_url
}

/// The log-in page URL that returns the user to `redirect_target` afterwards.
pub fn log_in_url_with_target(redirect_target: &str) -> String {
    match serde_urlencoded::to_string([("redirect_url", redirect_target)]) {
        Ok(query) => format!("{}?{query}", endpoints::LOG_IN_VIEW),
        Err(error) => {
            tracing::error!("Could not encode redirect URL {redirect_target}: {error}");
            endpoints::LOG_IN_VIEW.to_owned()
        }
    }
}

/// The log-in page URL for a request that was refused for lack of a session.
///
/// Page requests come back to the requested page. Form requests from htmx
/// come back to the page the form was on. Anything else comes back to the
/// dashboard.
pub fn build_log_in_redirect_url(request: &Request) -> String {
    let target = if request.uri().path().starts_with("/api") {
        hx_current_url(request)
    } else {
        request
            .uri()
            .path_and_query()
            .and_then(|path_and_query| normalize(path_and_query.as_str(), false))
    };

    let target = target.unwrap_or_else(|| {
        tracing::warn!(
            "No valid redirect target for {}, falling back to the dashboard.",
            request.uri()
        );
        endpoints::DASHBOARD_VIEW.to_owned()
    });

    log_in_url_with_target(&target)
}

fn hx_current_url(request: &Request) -> Option<String> {
    let headers = request.headers();
    let is_hx_request = headers
        .get("hx-request")
        .and_then(|header| header.to_str().ok())
        .is_some_and(|header| header.eq_ignore_ascii_case("true"));

    if !is_hx_request {
        return None;
    }

    headers
        .get("hx-current-url")
        .and_then(|header| header.to_str().ok())
        .and_then(|current_url| normalize(current_url, true))
}
