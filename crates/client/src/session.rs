//! Persistent session state
//!
//! [`SessionStore`] is the single writer of durable storage. Every component
//! that mutates the session does so through `save`/`update_tokens`/`clear`,
//! so there is one choke point for persistence.

use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use thiserror::Error;

/// Storage key for the serialized user profile
pub const USER_KEY: &str = "user";
/// Storage key for the access token
pub const ACCESS_TOKEN_KEY: &str = "accessToken";
/// Storage key for the refresh token
pub const REFRESH_TOKEN_KEY: &str = "refreshToken";

/// Profile of the signed-in user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub email: String,
    #[serde(default, rename = "firstName", skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, rename = "lastName", skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

/// Bearer credential pair as returned by the auth endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

/// In-memory view of the session
///
/// Invariant: `user` is present iff `access_token` is present; they are set
/// and cleared together.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub user: Option<UserProfile>,
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
}

impl Session {
    pub fn is_empty(&self) -> bool {
        self.user.is_none() && self.access_token.is_none() && self.refresh_token.is_none()
    }
}

/// Storage failures
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage backend unavailable")]
    Unavailable,

    #[error("failed to write {key}")]
    Write { key: String },

    #[error("no signed-in user to attach tokens to")]
    NoUser,

    #[error("failed to serialize session state: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Durable key-value storage seam
///
/// The browser implementation sits on localStorage; native callers and tests
/// use [`MemoryStorage`].
pub trait SessionStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str);
}

/// In-memory storage backend
///
/// Clones share the same underlying map, so a second store built over a
/// clone observes what the first one persisted.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// Owner of the session, in memory and in durable storage
///
/// Cheap to clone; clones share the same session.
#[derive(Debug)]
pub struct SessionStore<S> {
    storage: Rc<S>,
    session: Rc<RefCell<Session>>,
}

impl<S> Clone for SessionStore<S> {
    fn clone(&self) -> Self {
        Self {
            storage: self.storage.clone(),
            session: self.session.clone(),
        }
    }
}

impl<S: SessionStorage> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage: Rc::new(storage),
            session: Rc::new(RefCell::new(Session::default())),
        }
    }

    /// Restore the persisted session
    ///
    /// All three entries must be present and the profile must parse;
    /// anything less wipes whatever partial state was found and yields the
    /// empty session.
    pub fn load(&self) -> Session {
        let restored = self
            .storage
            .get(USER_KEY)
            .zip(self.storage.get(ACCESS_TOKEN_KEY))
            .zip(self.storage.get(REFRESH_TOKEN_KEY))
            .and_then(|((user_raw, access_token), refresh_token)| {
                match serde_json::from_str::<UserProfile>(&user_raw) {
                    Ok(user) => Some(Session {
                        user: Some(user),
                        access_token: Some(access_token),
                        refresh_token: Some(refresh_token),
                    }),
                    Err(err) => {
                        tracing::warn!(%err, "stored profile is unparsable, resetting session");
                        None
                    }
                }
            });

        match restored {
            Some(session) => {
                *self.session.borrow_mut() = session.clone();
                session
            }
            None => {
                self.clear();
                Session::default()
            }
        }
    }

    /// Persist a full session
    ///
    /// Either all three entries are committed or none are: a failure midway
    /// removes everything and leaves the session empty.
    pub fn save(&self, user: UserProfile, tokens: TokenPair) -> Result<(), StorageError> {
        let serialized = serde_json::to_string(&user)?;
        let written = self
            .storage
            .set(USER_KEY, &serialized)
            .and_then(|()| self.storage.set(ACCESS_TOKEN_KEY, &tokens.access_token))
            .and_then(|()| self.storage.set(REFRESH_TOKEN_KEY, &tokens.refresh_token));

        match written {
            Ok(()) => {
                *self.session.borrow_mut() = Session {
                    user: Some(user),
                    access_token: Some(tokens.access_token),
                    refresh_token: Some(tokens.refresh_token),
                };
                Ok(())
            }
            Err(err) => {
                tracing::warn!(%err, "session write failed, rolling back");
                self.clear();
                Err(err)
            }
        }
    }

    /// Replace both tokens, keeping the signed-in user
    ///
    /// Without a user there is nothing to attach the tokens to, so the store
    /// is cleared instead.
    pub fn update_tokens(&self, tokens: TokenPair) -> Result<(), StorageError> {
        match self.current_user() {
            Some(user) => self.save(user, tokens),
            None => {
                self.clear();
                Err(StorageError::NoUser)
            }
        }
    }

    /// Remove everything, durable and in-memory
    pub fn clear(&self) {
        self.storage.remove(USER_KEY);
        self.storage.remove(ACCESS_TOKEN_KEY);
        self.storage.remove(REFRESH_TOKEN_KEY);
        *self.session.borrow_mut() = Session::default();
    }

    pub fn current_user(&self) -> Option<UserProfile> {
        self.session.borrow().user.clone()
    }

    pub fn access_token(&self) -> Option<String> {
        self.session.borrow().access_token.clone()
    }

    pub fn refresh_token(&self) -> Option<String> {
        self.session.borrow().refresh_token.clone()
    }

    pub fn snapshot(&self) -> Session {
        self.session.borrow().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> UserProfile {
        UserProfile {
            email: "a@b.com".to_string(),
            first_name: Some("Ada".to_string()),
            last_name: None,
        }
    }

    fn tokens() -> TokenPair {
        TokenPair {
            access_token: "access-1".to_string(),
            refresh_token: "refresh-1".to_string(),
        }
    }

    /// Storage that rejects writes to one key
    struct FlakyStorage {
        inner: MemoryStorage,
        failing_key: &'static str,
    }

    impl SessionStorage for FlakyStorage {
        fn get(&self, key: &str) -> Option<String> {
            self.inner.get(key)
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            if key == self.failing_key {
                return Err(StorageError::Write {
                    key: key.to_string(),
                });
            }
            self.inner.set(key, value)
        }

        fn remove(&self, key: &str) {
            self.inner.remove(key);
        }
    }

    #[test]
    fn save_then_load_round_trips() {
        let storage = MemoryStorage::default();
        let store = SessionStore::new(storage.clone());
        store.save(profile(), tokens()).unwrap();

        // A fresh store over the same storage simulates a page reload.
        let reloaded = SessionStore::new(storage);
        let session = reloaded.load();
        assert_eq!(session.user, Some(profile()));
        assert_eq!(session.access_token.as_deref(), Some("access-1"));
        assert_eq!(session.refresh_token.as_deref(), Some("refresh-1"));
    }

    #[test]
    fn clear_then_load_is_empty() {
        let store = SessionStore::new(MemoryStorage::default());
        store.save(profile(), tokens()).unwrap();
        store.clear();
        assert!(store.load().is_empty());
        assert_eq!(store.current_user(), None);
    }

    #[test]
    fn load_wipes_partial_state() {
        let storage = MemoryStorage::default();
        storage.set(USER_KEY, r#"{"email":"a@b.com"}"#).unwrap();
        storage.set(ACCESS_TOKEN_KEY, "access-1").unwrap();
        // refresh token missing

        let store = SessionStore::new(storage.clone());
        assert!(store.load().is_empty());
        assert_eq!(storage.get(USER_KEY), None);
        assert_eq!(storage.get(ACCESS_TOKEN_KEY), None);
    }

    #[test]
    fn load_wipes_unparsable_profile() {
        let storage = MemoryStorage::default();
        storage.set(USER_KEY, "not json").unwrap();
        storage.set(ACCESS_TOKEN_KEY, "access-1").unwrap();
        storage.set(REFRESH_TOKEN_KEY, "refresh-1").unwrap();

        let store = SessionStore::new(storage.clone());
        assert!(store.load().is_empty());
        assert_eq!(storage.get(ACCESS_TOKEN_KEY), None);
    }

    #[test]
    fn failed_save_commits_nothing() {
        let inner = MemoryStorage::default();
        let store = SessionStore::new(FlakyStorage {
            inner: inner.clone(),
            failing_key: REFRESH_TOKEN_KEY,
        });

        assert!(store.save(profile(), tokens()).is_err());
        assert!(store.snapshot().is_empty());
        assert_eq!(inner.get(USER_KEY), None);
        assert_eq!(inner.get(ACCESS_TOKEN_KEY), None);
    }

    #[test]
    fn update_tokens_keeps_the_user() {
        let store = SessionStore::new(MemoryStorage::default());
        store.save(profile(), tokens()).unwrap();
        store
            .update_tokens(TokenPair {
                access_token: "access-2".to_string(),
                refresh_token: "refresh-2".to_string(),
            })
            .unwrap();

        assert_eq!(store.current_user(), Some(profile()));
        assert_eq!(store.access_token().as_deref(), Some("access-2"));
    }

    #[test]
    fn update_tokens_without_user_clears() {
        let storage = MemoryStorage::default();
        let store = SessionStore::new(storage.clone());
        assert!(store.update_tokens(tokens()).is_err());
        assert_eq!(storage.get(ACCESS_TOKEN_KEY), None);
    }
}
