//! The authenticated request layer.

use reqwest::{
    Client, Method, StatusCode,
    header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue},
};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::{
    Error,
    session::{SESSION_TOKEN, SessionStore},
};

/// The failures that stop a request before the caller sees a response.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum RequestError {
    /// The API rejected the token with 401 or 403. The session has already
    /// been cleared and the user must log in again.
    #[error("the session has expired")]
    AuthExpired,

    /// The request never produced a response, e.g. the connection was refused.
    #[error("could not reach the finance API: {0}")]
    Transport(String),
}

/// How to send a request: the method, extra headers and an optional body.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// The HTTP method, `GET` by default.
    pub method: Method,
    /// Headers to send in addition to the defaults.
    ///
    /// These override `Content-Type` but never `Authorization` when a token
    /// is present.
    pub headers: HeaderMap,
    /// The request body, already serialized.
    pub body: Option<String>,
}

impl RequestOptions {
    /// Options for a request with `method` and no body.
    pub fn new(method: Method) -> Self {
        Self {
            method,
            ..Default::default()
        }
    }

    /// Options for a request with `method` and `body` serialized as JSON.
    pub fn json<T: Serialize>(method: Method, body: &T) -> Result<Self, Error> {
        let body = serde_json::to_string(body)
            .map_err(|error| Error::JSONSerializationError(error.to_string()))?;

        Ok(Self {
            method,
            body: Some(body),
            ..Default::default()
        })
    }

    /// Add a header to the request.
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }
}

/// A raw response from the API. The body is not parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The response body as text.
    pub body: String,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl ApiResponse {
    /// Whether the status code is in the 2xx range.
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Parse the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, Error> {
        serde_json::from_str(&self.body).map_err(|error| {
            tracing::error!("Could not parse response body from the finance API: {error}");
            Error::InvalidResponse(error.to_string())
        })
    }

    /// The `message` field of a JSON error body, if there is one.
    pub fn error_message(&self) -> Option<String> {
        serde_json::from_str::<ErrorBody>(&self.body)
            .ok()
            .and_then(|body| body.message)
            .filter(|message| !message.is_empty())
    }

    /// Turn a non-success response into [Error::Api].
    ///
    /// The API's own message is kept verbatim, `fallback_message` is used
    /// when the body does not contain one.
    pub fn error_for_status(self, fallback_message: &str) -> Result<Self, Error> {
        if self.is_success() {
            return Ok(self);
        }

        let message = self
            .error_message()
            .unwrap_or_else(|| fallback_message.to_owned());
        tracing::warn!(
            "The finance API responded with {}: {message}",
            self.status
        );

        Err(Error::Api {
            status: self.status.as_u16(),
            message,
        })
    }
}

/// A client for the finance API rooted at a base URL, e.g.
/// "http://localhost:8080/api".
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the API at `base_url`.
    pub fn new(base_url: &str) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    /// The base URL that request paths are appended to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send an authenticated request to `path`.
    ///
    /// The request carries `Content-Type: application/json`, the headers in
    /// `options`, and `Authorization: Bearer <token>` if `session` holds a
    /// token.
    ///
    /// # Errors
    ///
    /// - [RequestError::AuthExpired] if the API responds with 401 or 403.
    ///   `session` is cleared before returning.
    /// - [RequestError::Transport] if no response was received.
    ///
    /// Any other status, including other 4xx and 5xx codes, is returned as an
    /// [ApiResponse] for the caller to interpret.
    pub async fn request(
        &self,
        session: &mut impl SessionStore,
        path: &str,
        options: RequestOptions,
    ) -> Result<ApiResponse, RequestError> {
        let token = session.get(SESSION_TOKEN);
        let headers = build_headers(&options.headers, token.as_deref());
        let response = self.send(path, options, headers).await?;

        if response.status == StatusCode::UNAUTHORIZED || response.status == StatusCode::FORBIDDEN
        {
            tracing::warn!(
                "The finance API rejected the session token with {} for {path}, clearing the session.",
                response.status
            );
            session.clear();
            return Err(RequestError::AuthExpired);
        }

        Ok(response)
    }

    /// Send a request without a token, e.g. to log in.
    ///
    /// Unlike [ApiClient::request], 401 and 403 responses are returned to the
    /// caller as is.
    pub async fn request_unauthenticated(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<ApiResponse, RequestError> {
        let headers = build_headers(&options.headers, None);

        self.send(path, options, headers).await
    }

    async fn send(
        &self,
        path: &str,
        options: RequestOptions,
        headers: HeaderMap,
    ) -> Result<ApiResponse, RequestError> {
        let url = format!("{}{path}", self.base_url);
        let mut request = self.http.request(options.method.clone(), &url).headers(headers);

        if let Some(body) = options.body {
            request = request.body(body);
        }

        let response = request.send().await.map_err(|error| {
            tracing::error!("{} {url} failed: {error}", options.method);
            RequestError::Transport(error.to_string())
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|error| {
            tracing::error!("Could not read the response body of {} {url}: {error}", options.method);
            RequestError::Transport(error.to_string())
        })?;

        tracing::debug!("{} {url} responded with {status}", options.method);

        Ok(ApiResponse { status, body })
    }

    /// Send an authenticated `GET` to `path` and parse the JSON body.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        session: &mut impl SessionStore,
        path: &str,
        fallback_message: &str,
    ) -> Result<T, Error> {
        let options = RequestOptions::new(Method::GET)
            .header(ACCEPT, HeaderValue::from_static("application/json"));

        self.request(session, path, options)
            .await?
            .error_for_status(fallback_message)?
            .json()
    }

    /// Send an authenticated request with an optional JSON body and check
    /// the status. The response body is not parsed.
    pub(crate) async fn send_json<B: Serialize>(
        &self,
        session: &mut impl SessionStore,
        method: Method,
        path: &str,
        body: Option<&B>,
        fallback_message: &str,
    ) -> Result<ApiResponse, Error> {
        let options = match body {
            Some(body) => RequestOptions::json(method, body)?,
            None => RequestOptions::new(method),
        };

        self.request(session, path, options)
            .await?
            .error_for_status(fallback_message)
    }
}

/// Merge the default headers, the caller's headers and the bearer token.
fn build_headers(caller_headers: &HeaderMap, token: Option<&str>) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.extend(caller_headers.clone());

    if let Some(token) = token {
        match HeaderValue::from_str(&format!("Bearer {token}")) {
            Ok(mut value) => {
                value.set_sensitive(true);
                headers.insert(AUTHORIZATION, value);
            }
            Err(error) => {
                tracing::error!("Session token is not a valid header value: {error}");
            }
        }
    }

    headers
}
