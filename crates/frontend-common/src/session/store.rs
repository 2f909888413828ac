//! Session store mirrored to persistent storage

use crate::config::SessionConfig;
use crate::storage::KeyValueStorage;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;
use std::rc::Rc;

/// Observable session state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    LoggedOut,
    LoggedIn,
}

/// Current user of the tab, persisted under [`SessionConfig::USER_KEY`]
///
/// The user record is opaque JSON. `is_logged_in` is derived from the
/// presence of a record, so the two can never disagree.
#[derive(Clone)]
pub struct SessionStore {
    storage: Rc<dyn KeyValueStorage>,
    user_info: Option<Value>,
}

impl SessionStore {
    /// Build the store and rehydrate it from storage
    pub fn new(storage: Rc<dyn KeyValueStorage>) -> Self {
        let mut store = Self {
            storage,
            user_info: None,
        };
        store.rehydrate();
        store
    }

    fn rehydrate(&mut self) {
        let Some(stored) = self.storage.get(SessionConfig::USER_KEY) else {
            return;
        };

        match serde_json::from_str::<Value>(&stored) {
            Ok(Value::Null) => {
                self.storage.remove(SessionConfig::USER_KEY);
            }
            Ok(user) => {
                tracing::debug!("Restoring session from storage");
                self.set_user(user);
            }
            Err(err) => {
                tracing::warn!(error = %err, "Discarding unreadable stored session");
                self.storage.remove(SessionConfig::USER_KEY);
            }
        }
    }

    /// Record `user` as the logged-in user and persist it
    ///
    /// A JSON `null` carries no user and is handled as [`logout`](Self::logout).
    pub fn set_user(&mut self, user: Value) {
        if user.is_null() {
            self.logout();
            return;
        }

        if let Err(err) = self.storage.set(SessionConfig::USER_KEY, &user.to_string()) {
            tracing::warn!(error = %err, "Failed to persist session");
        }
        self.user_info = Some(user);
    }

    /// Clear the user and its persisted copy
    pub fn logout(&mut self) {
        self.user_info = None;
        self.storage.remove(SessionConfig::USER_KEY);
    }

    pub fn user_info(&self) -> Option<&Value> {
        self.user_info.as_ref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.user_info.is_some()
    }

    pub fn state(&self) -> SessionState {
        if self.is_logged_in() {
            SessionState::LoggedIn
        } else {
            SessionState::LoggedOut
        }
    }

    /// Typed view of the user record, `None` if absent or of another shape
    pub fn user_as<T: DeserializeOwned>(&self) -> Option<T> {
        self.user_info
            .as_ref()
            .and_then(|user| serde_json::from_value(user.clone()).ok())
    }
}

impl PartialEq for SessionStore {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.storage, &other.storage) && self.user_info == other.user_info
    }
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore")
            .field("user_info", &self.user_info)
            .finish_non_exhaustive()
    }
}
