//! The log-in page and the endpoint that exchanges credentials for a session.

use axum::{
    Form,
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::PrivateCookieJar;
use axum_htmx::HxRedirect;
use maud::{Markup, html};
use serde::Deserialize;

use crate::{
    Error,
    api::{ApiClient, LOG_IN_FAILED_MESSAGE, LogInRequest},
    endpoints,
    error::CONNECTION_ERROR_MESSAGE,
    html::{
        FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, LINK_STYLE, base, form_error, log_in_register,
        password_input, submit_button,
    },
    session::{CookieSessionStore, SessionStore},
};

use super::{RedirectQuery, parse_redirect_url};

fn log_in_form(email: &str, error_message: Option<&str>, redirect_url: Option<&str>) -> Markup {
    html! {
        form
            hx-post=(endpoints::LOG_IN_API)
            hx-swap="outerHTML"
            hx-disabled-elt="find button"
            class="space-y-4 md:space-y-6"
        {
            @if let Some(redirect_url) = redirect_url {
                input type="hidden" name="redirect_url" value=(redirect_url);
            }

            div
            {
                label for="email" class=(FORM_LABEL_STYLE) { "Email" }

                input
                    type="email"
                    name="email"
                    id="email"
                    placeholder="you@example.com"
                    value=(email)
                    class=(FORM_TEXT_INPUT_STYLE)
                    required
                    autofocus;
            }

            (password_input("password", "Password", 0))

            (form_error(error_message))

            (submit_button("Log in"))

            p class="text-sm font-light text-gray-500 dark:text-gray-400"
            {
                "Don't have an account? "
                a href=(endpoints::REGISTER_VIEW) tabindex="0" class=(LINK_STYLE)
                {
                    "Register here"
                }
            }
        }
    }
}

/// Display the log-in page, or skip it if the user already has a session.
pub async fn get_log_in_page(Query(query): Query<RedirectQuery>, jar: PrivateCookieJar) -> Response {
    let redirect_url = parse_redirect_url(query.redirect_url.as_deref(), "log-in query");

    if CookieSessionStore::new(jar).is_authenticated() {
        let target = redirect_url.as_deref().unwrap_or(endpoints::DASHBOARD_VIEW);
        return Redirect::to(target).into_response();
    }

    let log_in_form = log_in_form("", None, redirect_url.as_deref());
    let content = log_in_register("Log in to your account", &log_in_form);

    base("Log In", &[], &content).into_response()
}

/// The data entered by the user in the log-in form.
#[derive(Debug, Clone, Deserialize)]
pub struct LogInForm {
    pub email: String,
    pub password: String,
    /// Where to go after logging in. Only accepted if it is a local path.
    pub redirect_url: Option<String>,
}

/// Handler for log-in requests via the POST method.
///
/// On success the session cookies are set and the client is redirected to
/// the dashboard, or to `redirect_url` if one was given. Otherwise the form
/// is returned with an error message explaining the problem.
pub async fn post_log_in(
    State(api): State<ApiClient>,
    jar: PrivateCookieJar,
    Form(form): Form<LogInForm>,
) -> Response {
    let redirect_url = parse_redirect_url(form.redirect_url.as_deref(), "log-in form");
    let request = LogInRequest {
        email: &form.email,
        password: &form.password,
    };

    match api.log_in(&request).await {
        Ok(auth) => {
            let mut session = CookieSessionStore::new(jar);
            session.save(&auth.token, &auth.email, &auth.full_name);
            tracing::info!("Logged in {}", auth.email);

            let target = redirect_url.unwrap_or_else(|| endpoints::DASHBOARD_VIEW.to_owned());
            (HxRedirect(target), session.into_jar()).into_response()
        }
        Err(error) => {
            let message = log_in_error_message(error);
            log_in_form(&form.email, Some(&message), redirect_url.as_deref()).into_response()
        }
    }
}

fn log_in_error_message(error: Error) -> String {
    match error {
        Error::Api { message, .. } => message,
        Error::Transport(_) => CONNECTION_ERROR_MESSAGE.to_owned(),
        error => {
            tracing::error!("Unexpected error while logging in: {error}");
            LOG_IN_FAILED_MESSAGE.to_owned()
        }
    }
}
