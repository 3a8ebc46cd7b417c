//! Defines the app level error type and conversions to rendered HTML pages and alerts.
use axum::{
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::PrivateCookieJar;
use axum_htmx::HxRedirect;

use crate::{
    alert::Alert, api::RequestError, endpoints, internal_server_error::InternalServerError,
    not_found::NotFoundError,
};

/// The message shown when the finance API cannot be reached.
pub const CONNECTION_ERROR_MESSAGE: &str =
    "An error occurred. Please check your connection and try again.";

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The finance API rejected the session token with 401 or 403.
    ///
    /// By the time this error is returned the session has been cleared, so
    /// handlers only need to send the user to the log-in page.
    #[error("the session has expired")]
    AuthExpired,

    /// The finance API could not be reached.
    ///
    /// The error string should only be logged for debugging on the server.
    #[error("could not reach the finance API: {0}")]
    Transport(String),

    /// The finance API refused a request, e.g. because of invalid input.
    ///
    /// `message` comes from the API's response, or is a fallback describing
    /// the failed operation, and is safe to show to the user.
    #[error("the finance API responded with {status}: {message}")]
    Api { status: u16, message: String },

    /// A successful response from the finance API did not have the expected shape.
    #[error("could not parse the response from the finance API: {0}")]
    InvalidResponse(String),

    /// The requested resource was not found.
    ///
    /// For HTTP request handlers, the client should check that the parameters
    /// (e.g., ID) are correct and that the resource has been created.
    #[error("the requested resource could not be found")]
    NotFound,

    /// An error occurred while getting the local timezone from a canonical timezone string.
    #[error("invalid timezone {0}")]
    InvalidTimezoneError(String),

    /// An error occurred while serializing a struct as JSON
    #[error("could not serialize as JSON: {0}")]
    JSONSerializationError(String),
}

impl From<RequestError> for Error {
    fn from(error: RequestError) -> Self {
        match error {
            RequestError::AuthExpired => Error::AuthExpired,
            RequestError::Transport(error) => Error::Transport(error),
        }
    }
}

fn invalid_timezone_fix(timezone: &str) -> String {
    format!(
        "Could not get local timezone \"{timezone}\". Check your server settings and \
        ensure the timezone has been set to valid, canonical timezone string"
    )
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::AuthExpired => Redirect::to(endpoints::LOG_IN_VIEW).into_response(),
            Error::NotFound => NotFoundError.into_response(),
            Error::InvalidTimezoneError(timezone) => InternalServerError {
                description: "Invalid Timezone Settings",
                fix: &invalid_timezone_fix(&timezone),
            }
            .into_response(),
            Error::Transport(error) => {
                tracing::error!("Could not reach the finance API: {error}");
                InternalServerError {
                    description: "Could not reach the finance service.",
                    fix: CONNECTION_ERROR_MESSAGE,
                }
                .into_response()
            }
            Error::Api { status, message } => {
                tracing::error!("The finance API responded with {status}: {message}");
                InternalServerError {
                    description: "The finance service could not load your data.",
                    fix: &message,
                }
                .into_response()
            }
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                InternalServerError::default().into_response()
            }
        }
    }
}

impl Error {
    /// Render the error page along with the changes made to `jar`.
    ///
    /// After [Error::AuthExpired] the jar holds the removal cookies for the
    /// session, so it must reach the browser.
    pub fn into_response_with_jar(self, jar: PrivateCookieJar) -> Response {
        (jar, self.into_response()).into_response()
    }

    /// Like [Error::into_alert_response], but sends the changes made to `jar`.
    pub fn into_alert_response_with_jar(self, jar: PrivateCookieJar) -> Response {
        (jar, self.into_alert_response()).into_response()
    }

    /// Convert the error into an HTTP response with an HTML alert.
    ///
    /// An expired session is the exception: it responds with an `HX-Redirect`
    /// to the log-in page instead.
    pub fn into_alert_response(self) -> Response {
        let (status_code, alert) = match self {
            Error::AuthExpired => {
                return (
                    HxRedirect(endpoints::LOG_IN_VIEW.to_owned()),
                    StatusCode::OK,
                )
                    .into_response();
            }
            Error::Api { status, message } => (
                StatusCode::from_u16(status)
                    .ok()
                    .filter(|status| status.is_client_error() || status.is_server_error())
                    .unwrap_or(StatusCode::BAD_GATEWAY),
                Alert::ErrorSimple { message },
            ),
            Error::Transport(error) => {
                tracing::error!("Could not reach the finance API: {error}");
                (
                    StatusCode::BAD_GATEWAY,
                    Alert::ErrorSimple {
                        message: CONNECTION_ERROR_MESSAGE.to_owned(),
                    },
                )
            }
            Error::NotFound => (
                StatusCode::NOT_FOUND,
                Alert::Error {
                    message: "Transaction not found".to_owned(),
                    details: "Try refreshing the page to see if the transaction has \
                    already been deleted."
                        .to_owned(),
                },
            ),
            Error::InvalidTimezoneError(timezone) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Alert::Error {
                    message: "Invalid Timezone Settings".to_owned(),
                    details: invalid_timezone_fix(&timezone),
                },
            ),
            error => {
                tracing::error!("An unexpected error occurred: {error}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Alert::Error {
                        message: "Something went wrong".to_owned(),
                        details:
                            "An unexpected error occurred, check the server logs for more details."
                                .to_owned(),
                    },
                )
            }
        };

        (status_code, alert.into_html()).into_response()
    }
}
