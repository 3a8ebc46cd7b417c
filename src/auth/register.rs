//! The registration page and the endpoint that creates an account.

use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::PrivateCookieJar;
use axum_htmx::HxRedirect;
use maud::{Markup, html};
use serde::Deserialize;

use crate::{
    Error,
    api::{ApiClient, REGISTER_FAILED_MESSAGE, RegisterRequest},
    endpoints,
    error::CONNECTION_ERROR_MESSAGE,
    html::{
        FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, LINK_STYLE, base, form_error, log_in_register,
        password_input, submit_button,
    },
    session::{CookieSessionStore, SessionStore},
};

/// The minimum number of characters a new password must have.
pub const PASSWORD_MIN_LENGTH: u8 = 6;

const PASSWORDS_DO_NOT_MATCH: &str = "Passwords do not match";
const PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters long";

/// The values to pre-fill when the form is shown again after an error.
#[derive(Default)]
struct RegisterFormValues<'a> {
    full_name: &'a str,
    email: &'a str,
}

fn text_input(name: &str, label: &str, type_: &str, value: &str) -> Markup {
    html! {
        div
        {
            label for=(name) class=(FORM_LABEL_STYLE) { (label) }

            input
                type=(type_)
                name=(name)
                id=(name)
                value=(value)
                class=(FORM_TEXT_INPUT_STYLE)
                required;
        }
    }
}

fn register_form(values: &RegisterFormValues<'_>, error_message: Option<&str>) -> Markup {
    html! {
        form
            hx-post=(endpoints::REGISTER_API)
            hx-swap="outerHTML"
            hx-disabled-elt="find button"
            class="space-y-4 md:space-y-6"
        {
            (text_input("full_name", "Full Name", "text", values.full_name))
            (text_input("email", "Email", "email", values.email))
            (password_input("password", "Password", PASSWORD_MIN_LENGTH))
            (password_input("confirm_password", "Confirm Password", PASSWORD_MIN_LENGTH))

            (form_error(error_message))

            (submit_button("Register"))

            p class="text-sm font-light text-gray-500 dark:text-gray-400"
            {
                "Already have an account? "
                a href=(endpoints::LOG_IN_VIEW) tabindex="0" class=(LINK_STYLE)
                {
                    "Log in here"
                }
            }
        }
    }
}

/// Display the registration page, or go to the dashboard if the user already has a session.
pub async fn get_register_page(jar: PrivateCookieJar) -> Response {
    if CookieSessionStore::new(jar).is_authenticated() {
        return Redirect::to(endpoints::DASHBOARD_VIEW).into_response();
    }

    let form = register_form(&RegisterFormValues::default(), None);
    let content = log_in_register("Create an account", &form);

    base("Register", &[], &content).into_response()
}

/// The data entered by the user in the registration form.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterForm {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterForm {
    /// Check the passwords before bothering the API.
    fn validate(&self) -> Result<(), &'static str> {
        if self.password != self.confirm_password {
            return Err(PASSWORDS_DO_NOT_MATCH);
        }

        // Counted in UTF-16 code units, the way browsers measure `minlength`.
        if self.password.encode_utf16().count() < PASSWORD_MIN_LENGTH as usize {
            return Err(PASSWORD_TOO_SHORT);
        }

        Ok(())
    }
}

/// Handler for registration requests via the POST method.
///
/// On success the new session is saved and the client is redirected to the
/// dashboard. Otherwise the form is returned with an error message.
pub async fn post_register(
    State(api): State<ApiClient>,
    jar: PrivateCookieJar,
    Form(form): Form<RegisterForm>,
) -> Response {
    let values = RegisterFormValues {
        full_name: &form.full_name,
        email: &form.email,
    };

    if let Err(message) = form.validate() {
        return register_form(&values, Some(message)).into_response();
    }

    let request = RegisterRequest {
        full_name: &form.full_name,
        email: &form.email,
        password: &form.password,
    };

    match api.register(&request).await {
        Ok(auth) => {
            let mut session = CookieSessionStore::new(jar);
            session.save(&auth.token, &auth.email, &auth.full_name);
            tracing::info!("Registered {}", auth.email);

            (
                HxRedirect(endpoints::DASHBOARD_VIEW.to_owned()),
                session.into_jar(),
            )
                .into_response()
        }
        Err(error) => {
            let message = match error {
                Error::Api { message, .. } => message,
                Error::Transport(_) => CONNECTION_ERROR_MESSAGE.to_owned(),
                error => {
                    tracing::error!("Unexpected error while registering: {error}");
                    REGISTER_FAILED_MESSAGE.to_owned()
                }
            };

            register_form(&values, Some(&message)).into_response()
        }
    }
}



#[cfg(test)]
mod validate_tests {
    use super::{PASSWORD_TOO_SHORT, PASSWORDS_DO_NOT_MATCH, RegisterForm};

    fn form(password: &str, confirm_password: &str) -> RegisterForm {
        RegisterForm {
            full_name: "Jane Doe".to_owned(),
            email: "jane@example.com".to_owned(),
            password: password.to_owned(),
            confirm_password: confirm_password.to_owned(),
        }
    }

    #[test]
    fn mismatch_is_reported_before_length() {
        assert_eq!(form("abc", "abd").validate(), Err(PASSWORDS_DO_NOT_MATCH));
    }

    #[test]
    fn length_counts_utf16_units() {
        // Each emoji is one char but two UTF-16 units.
        assert_eq!(form("😀😀😀", "😀😀😀").validate(), Ok(()));
        assert_eq!(form("ab😀", "ab😀").validate(), Err(PASSWORD_TOO_SHORT));
        assert_eq!(form("hunter", "hunter").validate(), Ok(()));
    }
}
