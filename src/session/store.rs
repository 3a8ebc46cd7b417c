//! The key-value store abstraction that backs a [Session].

use std::collections::HashMap;

use super::{SESSION_EMAIL, SESSION_FULL_NAME, SESSION_TOKEN, Session};

/// A string key-value store that can hold a [Session].
///
/// Implementors only provide raw access to keys. The session operations are
/// provided methods so that every backend behaves the same way.
pub trait SessionStore {
    /// Get the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any existing value.
    fn set(&mut self, key: &str, value: &str);

    /// Remove `key` from the store. Removing a missing key does nothing.
    fn remove(&mut self, key: &str);

    /// Persist a new session, overwriting whatever was stored before.
    ///
    /// No validation is performed on any of the fields.
    fn save(&mut self, token: &str, email: &str, full_name: &str) {
        self.set(SESSION_TOKEN, token);
        self.set(SESSION_EMAIL, email);
        self.set(SESSION_FULL_NAME, full_name);
    }

    /// Read the current session. Unset fields are `None`.
    fn read(&self) -> Session {
        Session {
            token: self.get(SESSION_TOKEN),
            email: self.get(SESSION_EMAIL),
            full_name: self.get(SESSION_FULL_NAME),
        }
    }

    /// Remove all session fields.
    fn clear(&mut self) {
        self.remove(SESSION_TOKEN);
        self.remove(SESSION_EMAIL);
        self.remove(SESSION_FULL_NAME);
    }

    /// Whether a token is present, regardless of whether it is still valid.
    fn is_authenticated(&self) -> bool {
        self.get(SESSION_TOKEN).is_some()
    }
}

/// A [SessionStore] that lives in process memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    values: HashMap<String, String>,
}

impl MemorySessionStore {
    /// Create an empty, unauthenticated store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_owned(), value.to_owned());
    }

    fn remove(&mut self, key: &str) {
        self.values.remove(key);
    }
}
