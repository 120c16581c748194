//! Session store: hydration from persistent storage plus login/logout
//! transitions.
//!
//! ERROR HANDLING
//! ==============
//! No operation here fails. A corrupt or half-missing persisted session is
//! cleared and replaced with the logged-out state; an unavailable storage
//! backend behaves like an empty one. The worst outcome of any anomaly is a
//! redirect to the login page, decided later by the guards.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use crate::config::storage_keys;
use crate::storage::PersistentStorage;

use super::types::{Session, User};

/// Owns the current [`Session`] and the storage backend it persists to.
///
/// Constructed once at application startup via [`SessionStore::hydrate`] and
/// mutated in place by the login/logout/update operations. All mutations are
/// synchronous; a transition completes fully before any guard can observe it.
pub struct SessionStore<S: PersistentStorage> {
    storage: S,
    session: Session,
}

impl<S: PersistentStorage> SessionStore<S> {
    /// Restore the session persisted in `storage`.
    ///
    /// Returns an authenticated session only when both the token and a
    /// parseable user snapshot are present. Anything less clears both keys
    /// and starts logged out. Hydration is synchronous: `is_loading` is
    /// already false on the returned store's session.
    pub fn hydrate(mut storage: S) -> Self {
        let session = restore_session(&mut storage);
        Self { storage, session }
    }

    /// The current session, for guard evaluation and rendering.
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Sign in with an already-validated `token` and `user`.
    ///
    /// Persists both and flips the session to authenticated. No network
    /// activity happens here; obtaining the token is the caller's concern.
    pub fn login(&mut self, token: &str, user: User) {
        self.storage.set(storage_keys::AUTH_TOKEN, token);
        persist_user(&mut self.storage, &user);
        self.session = Session::authenticated(user);
    }

    /// Sign out: remove the persisted token and user, reset the session.
    pub fn logout(&mut self) {
        self.storage.remove(storage_keys::AUTH_TOKEN);
        self.storage.remove(storage_keys::USER);
        self.session = Session::logged_out();
    }

    /// Replace the signed-in user's snapshot (e.g. after a profile edit).
    ///
    /// Leaves `is_authenticated` untouched. A no-op while logged out: user
    /// data is only writable inside an authenticated session.
    pub fn update_user(&mut self, user: User) {
        if !self.session.is_authenticated {
            log::debug!("ignoring user update while logged out");
            return;
        }
        persist_user(&mut self.storage, &user);
        self.session.user = Some(user);
    }
}

fn restore_session<S: PersistentStorage>(storage: &mut S) -> Session {
    let token = storage.get(storage_keys::AUTH_TOKEN);
    let snapshot = storage.get(storage_keys::USER);

    if let (Some(_), Some(raw)) = (token, snapshot) {
        match serde_json::from_str::<User>(&raw) {
            Ok(user) => return Session::authenticated(user),
            Err(err) => log::warn!("discarding corrupt persisted user snapshot: {err}"),
        }
    }

    // Token or snapshot missing, or the snapshot failed to parse: drop both
    // so the next hydration starts from a clean slate.
    storage.remove(storage_keys::AUTH_TOKEN);
    storage.remove(storage_keys::USER);
    Session::logged_out()
}

fn persist_user<S: PersistentStorage>(storage: &mut S, user: &User) {
    let Ok(raw) = serde_json::to_string(user) else {
        return;
    };
    storage.set(storage_keys::USER, &raw);
}
