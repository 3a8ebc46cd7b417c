//! Log-in and registration against the finance API.

use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::Error;

use super::{ApiClient, RequestOptions};

/// The message shown when the API rejects a log-in without explaining why.
pub const LOG_IN_FAILED_MESSAGE: &str = "Login failed. Please try again.";
/// The message shown when the API rejects a registration without explaining why.
pub const REGISTER_FAILED_MESSAGE: &str = "Registration failed. Please try again.";

/// The credentials sent to `POST /auth/login`.
#[derive(Debug, Clone, Serialize)]
pub struct LogInRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// The details sent to `POST /auth/register`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest<'a> {
    pub full_name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

/// The session issued by the API after a successful log-in or registration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub token: String,
    pub email: String,
    pub full_name: String,
}

impl ApiClient {
    /// Exchange an email and password for a session token.
    ///
    /// # Errors
    ///
    /// Returns [Error::Api] with the API's message if the credentials are
    /// rejected and [Error::Transport] if the API cannot be reached.
    pub async fn log_in(&self, request: &LogInRequest<'_>) -> Result<AuthResponse, Error> {
        self.request_unauthenticated("/auth/login", RequestOptions::json(Method::POST, request)?)
            .await?
            .error_for_status(LOG_IN_FAILED_MESSAGE)?
            .json()
    }

    /// Create an account and return a session token for it.
    ///
    /// # Errors
    ///
    /// Returns [Error::Api] with the API's message if the registration is
    /// rejected, e.g. because the email is taken, and [Error::Transport] if
    /// the API cannot be reached.
    pub async fn register(&self, request: &RegisterRequest<'_>) -> Result<AuthResponse, Error> {
        self.request_unauthenticated(
            "/auth/register",
            RequestOptions::json(Method::POST, request)?,
        )
        .await?
        .error_for_status(REGISTER_FAILED_MESSAGE)?
        .json()
    }
}
