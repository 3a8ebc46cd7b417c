//! A [SessionStore] backed by the encrypted cookies of an HTTP request.

use axum_extra::extract::{
    PrivateCookieJar,
    cookie::{Cookie, SameSite},
};

use super::SessionStore;

/// Stores each session field in its own private (encrypted and signed)
/// cookie.
///
/// Changes are recorded in the wrapped jar. Call [CookieSessionStore::into_jar]
/// and return the jar as part of the response so the browser receives the
/// `Set-Cookie` headers.
///
/// The cookies carry no expiry: they last as long as the browser session or
/// until the finance API rejects the token.
#[derive(Debug, Clone)]
pub struct CookieSessionStore {
    jar: PrivateCookieJar,
}

impl CookieSessionStore {
    /// Wrap the cookie jar extracted from a request.
    pub fn new(jar: PrivateCookieJar) -> Self {
        Self { jar }
    }

    /// Return the jar with all the changes made through this store.
    pub fn into_jar(self) -> PrivateCookieJar {
        self.jar
    }
}

impl SessionStore for CookieSessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.jar.get(key).map(|cookie| cookie.value().to_owned())
    }

    fn set(&mut self, key: &str, value: &str) {
        let cookie = Cookie::build((key.to_owned(), value.to_owned()))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Strict)
            .secure(true);

        self.jar = self.jar.clone().add(cookie);
    }

    fn remove(&mut self, key: &str) {
        self.jar = self
            .jar
            .clone()
            .remove(Cookie::build(key.to_owned()).path("/"));
    }
}

#[cfg(test)]
mod tests {
    use axum::{
        http::{HeaderMap, HeaderValue, header::COOKIE, header::SET_COOKIE},
        response::IntoResponse,
    };
    use axum_extra::extract::{
        PrivateCookieJar,
        cookie::{Cookie, Key, SameSite},
    };
    use sha2::{Digest, Sha512};
    use time::Duration;

    use crate::session::{SESSION_EMAIL, SESSION_FULL_NAME, SESSION_TOKEN, Session, SessionStore};

    use super::CookieSessionStore;

    fn get_key() -> Key {
        Key::from(&Sha512::digest("42"))
    }

    fn get_set_cookies(jar: PrivateCookieJar) -> Vec<Cookie<'static>> {
        jar.into_response()
            .headers()
            .get_all(SET_COOKIE)
            .iter()
            .map(|header| {
                Cookie::parse(header.to_str().unwrap().to_owned())
                    .expect("Could not parse Set-Cookie header")
            })
            .collect()
    }

    /// Simulate the browser sending back the cookies set by `jar`.
    fn round_trip(jar: PrivateCookieJar, key: Key) -> PrivateCookieJar {
        let cookie_header = get_set_cookies(jar)
            .iter()
            .map(|cookie| format!("{}={}", cookie.name(), cookie.value()))
            .collect::<Vec<_>>()
            .join("; ");
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_str(&cookie_header).unwrap());

        PrivateCookieJar::from_headers(&headers, key)
    }

    #[test]
    fn empty_jar_is_not_authenticated() {
        let store = CookieSessionStore::new(PrivateCookieJar::new(get_key()));

        assert!(!store.is_authenticated());
        assert_eq!(store.read(), Session::default());
    }

    #[test]
    fn save_sets_private_cookies() {
        let mut store = CookieSessionStore::new(PrivateCookieJar::new(get_key()));

        store.save("abc123", "jane@example.com", "Jane Doe");

        let cookies = get_set_cookies(store.into_jar());
        assert_eq!(cookies.len(), 3, "want 3 cookies, got {cookies:?}");
        for cookie in cookies {
            assert!(
                [SESSION_TOKEN, SESSION_EMAIL, SESSION_FULL_NAME].contains(&cookie.name()),
                "unexpected cookie {}",
                cookie.name()
            );
            assert_ne!(
                cookie.value(),
                "abc123",
                "cookie value should be encrypted"
            );
            assert_eq!(cookie.http_only(), Some(true));
            assert_eq!(cookie.secure(), Some(true));
            assert_eq!(cookie.same_site(), Some(SameSite::Strict));
            assert_eq!(cookie.path(), Some("/"));
        }
    }

    #[test]
    fn session_survives_browser_round_trip() {
        let key = get_key();
        let mut store = CookieSessionStore::new(PrivateCookieJar::new(key.clone()));
        store.save("abc123", "jane@example.com", "Jane Doe");

        let store = CookieSessionStore::new(round_trip(store.into_jar(), key));

        assert!(store.is_authenticated());
        assert_eq!(
            store.read(),
            Session {
                token: Some("abc123".to_owned()),
                email: Some("jane@example.com".to_owned()),
                full_name: Some("Jane Doe".to_owned()),
            }
        );
    }

    #[test]
    fn cookies_encrypted_with_another_key_are_ignored() {
        let mut store = CookieSessionStore::new(PrivateCookieJar::new(get_key()));
        store.save("abc123", "jane@example.com", "Jane Doe");

        let other_key = Key::from(&Sha512::digest("not 42"));
        let store = CookieSessionStore::new(round_trip(store.into_jar(), other_key));

        assert!(!store.is_authenticated());
    }

    #[test]
    fn clear_removes_cookies_from_browser() {
        let key = get_key();
        let mut store = CookieSessionStore::new(PrivateCookieJar::new(key.clone()));
        store.save("abc123", "jane@example.com", "Jane Doe");
        let mut store = CookieSessionStore::new(round_trip(store.into_jar(), key));

        store.clear();

        assert!(!store.is_authenticated());
        assert_eq!(store.read(), Session::default());

        let cookies = get_set_cookies(store.into_jar());
        assert_eq!(cookies.len(), 3, "want 3 removal cookies, got {cookies:?}");
        for cookie in cookies {
            assert_eq!(
                cookie.max_age(),
                Some(Duration::ZERO),
                "cookie {} should have been removed",
                cookie.name()
            );
        }
    }

    #[test]
    fn clear_without_session_sets_no_cookies() {
        let mut store = CookieSessionStore::new(PrivateCookieJar::new(get_key()));

        store.clear();

        assert!(get_set_cookies(store.into_jar()).is_empty());
    }
}
