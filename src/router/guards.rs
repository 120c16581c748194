//! The three guard variants: auth-required, guest-only, and role-restricted.
//!
//! Every guard checks `is_loading` first so a half-hydrated session renders a
//! neutral placeholder instead of flashing a wrong redirect, and checks
//! authentication before role so an expired session always lands on the login
//! page rather than a role fallback.

#[cfg(test)]
#[path = "guards_test.rs"]
mod guards_test;

use crate::auth::types::{Role, Session};
use crate::config::routes;

/// Outcome of evaluating a guard for one navigation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RouteDecision {
    /// The session is still hydrating; render a loading placeholder and
    /// decide nothing yet.
    Pending,
    /// Render the guarded content.
    Allow,
    /// Navigate away, replacing history so the guarded page is not reachable
    /// via back-navigation.
    Redirect(Redirect),
}

/// Target of a [`RouteDecision::Redirect`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Redirect {
    /// Path to navigate to.
    pub to: String,
    /// The originally requested path, carried so a successful login can send
    /// the user back where they were headed.
    pub return_to: Option<String>,
}

impl Redirect {
    fn to(path: &str) -> Self {
        Self {
            to: path.to_owned(),
            return_to: None,
        }
    }
}

/// Gate a route that requires a signed-in user.
///
/// Unauthenticated sessions are sent to the login page with
/// `requested_path` preserved as the post-login return target.
#[must_use]
pub fn auth_guard(session: &Session, requested_path: &str) -> RouteDecision {
    if session.is_loading {
        return RouteDecision::Pending;
    }
    if !session.is_authenticated {
        return RouteDecision::Redirect(Redirect {
            to: routes::LOGIN.to_owned(),
            return_to: Some(requested_path.to_owned()),
        });
    }
    RouteDecision::Allow
}

/// Gate a route meant only for signed-out visitors (login, register).
///
/// Signed-in users are bounced to the dashboard matching their role.
#[must_use]
pub fn guest_guard(session: &Session) -> RouteDecision {
    if session.is_loading {
        return RouteDecision::Pending;
    }
    if session.is_authenticated {
        let target = match session.role() {
            Some(Role::Admin) => routes::ADMIN_DASHBOARD,
            Some(Role::User) | None => routes::DASHBOARD,
        };
        return RouteDecision::Redirect(Redirect::to(target));
    }
    RouteDecision::Allow
}

/// Gate a route restricted to `allowed_roles`.
///
/// Authentication failure outranks role failure: a signed-out session goes to
/// login, never to `fallback_path`.
#[must_use]
pub fn role_guard(session: &Session, allowed_roles: &[Role], fallback_path: &str) -> RouteDecision {
    if session.is_loading {
        return RouteDecision::Pending;
    }
    if !session.is_authenticated {
        return RouteDecision::Redirect(Redirect::to(routes::LOGIN));
    }
    match session.role() {
        Some(role) if allowed_roles.contains(&role) => RouteDecision::Allow,
        _ => RouteDecision::Redirect(Redirect::to(fallback_path)),
    }
}
