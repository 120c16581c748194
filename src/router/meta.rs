//! Per-route metadata and the guard dispatch it selects.
//!
//! The route table itself lives in the embedding app; this module only reads
//! the requirements it declares per path.

#[cfg(test)]
#[path = "meta_test.rs"]
mod meta_test;

use serde::{Deserialize, Serialize};

use crate::auth::types::{Role, Session};
use crate::config::routes;

use super::guards::{auth_guard, guest_guard, role_guard, RouteDecision};

/// Access requirements a route declares in the route table.
///
/// Field casing matches the route table's JSON form. A default-constructed
/// meta declares nothing and gates nothing.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RouteMeta {
    /// Route requires a signed-in user.
    pub requires_auth: bool,
    /// Route is for signed-out visitors only.
    pub requires_guest: bool,
    /// Roles allowed on this route; empty means any signed-in user.
    pub roles: Vec<Role>,
    /// Presentation title, passed through untouched.
    pub title: Option<String>,
}

/// Evaluate the guard that `meta` selects for one navigation.
///
/// Guest-only routes take the guest guard; role-restricted routes take the
/// role guard (which already enforces authentication first, with the user
/// dashboard as fallback); auth-required routes take the auth guard; routes
/// declaring nothing are allowed outright.
#[must_use]
pub fn evaluate_route(session: &Session, meta: &RouteMeta, requested_path: &str) -> RouteDecision {
    if meta.requires_guest {
        return guest_guard(session);
    }
    if !meta.roles.is_empty() {
        return role_guard(session, &meta.roles, routes::DASHBOARD);
    }
    if meta.requires_auth {
        return auth_guard(session, requested_path);
    }
    RouteDecision::Allow
}
