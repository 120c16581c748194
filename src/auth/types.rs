//! Identity types shared by the session store and the route guards.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Access level of a signed-in user.
///
/// Closed set, matched exhaustively in the guards: adding a role is a
/// compile-time-checked change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Regular account.
    User,
    /// Administrative account with access to `/admin` routes.
    Admin,
}

/// A signed-in user as issued by the auth endpoints.
///
/// Field casing matches the server payload so a snapshot persisted by an
/// earlier frontend build deserializes unchanged.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user identifier (UUID string).
    pub id: String,
    /// Sign-in email address.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Avatar image URL, if set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// Access level.
    pub role: Role,
    /// ISO 8601 creation timestamp.
    pub created_at: String,
    /// ISO 8601 last-update timestamp.
    pub updated_at: String,
}

/// Current identity state consulted by every guard evaluation.
///
/// Invariant: `is_authenticated == user.is_some()`. Build sessions through
/// [`Session::authenticated`] and [`Session::logged_out`] (or the store
/// operations) to keep it that way. `is_loading` is true only inside the
/// startup hydration window and never again afterward.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    /// The signed-in user, if any.
    pub user: Option<User>,
    /// Whether a user is signed in.
    pub is_authenticated: bool,
    /// Whether startup hydration is still in progress.
    pub is_loading: bool,
}

impl Session {
    /// Session for a signed-in `user`.
    #[must_use]
    pub fn authenticated(user: User) -> Self {
        Self {
            user: Some(user),
            is_authenticated: true,
            is_loading: false,
        }
    }

    /// The logged-out session. Also what [`Session::default`] returns.
    #[must_use]
    pub fn logged_out() -> Self {
        Self {
            user: None,
            is_authenticated: false,
            is_loading: false,
        }
    }

    /// Role of the signed-in user, if any.
    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|user| user.role)
    }
}
