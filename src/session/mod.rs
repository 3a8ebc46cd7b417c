//! The client-held session: a bearer token for the finance API plus the
//! cached profile fields of the user it was issued to.
//!
//! Token presence is the only thing that gates access. The session does not
//! know when the token expires; the API tells us by rejecting a request, at
//! which point the session is cleared (see [crate::api::ApiClient::request]).

mod cookie;
mod store;

pub use cookie::CookieSessionStore;
pub use store::{MemorySessionStore, SessionStore};

/// The key under which the bearer token is stored.
pub const SESSION_TOKEN: &str = "token";
/// The key under which the user's email is stored.
pub const SESSION_EMAIL: &str = "userEmail";
/// The key under which the user's full name is stored.
pub const SESSION_FULL_NAME: &str = "userFullName";

/// A snapshot of the values held in a [SessionStore].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    /// The opaque bearer token issued by the finance API.
    pub token: Option<String>,
    /// The email address the user logged in with.
    pub email: Option<String>,
    /// The user's full name, used for the greeting in the page header.
    pub full_name: Option<String>,
}
