//! App-wide path and storage-key constants.
//!
//! DESIGN
//! ======
//! Guards and the session store address routes and persisted keys through
//! these constants so redirect targets and storage layout stay in one place.

/// Navigable route paths the guards redirect to.
pub mod routes {
    /// Guest-only sign-in page.
    pub const LOGIN: &str = "/login";
    /// Guest-only registration page.
    pub const REGISTER: &str = "/register";
    /// Default landing page for authenticated users.
    pub const DASHBOARD: &str = "/dashboard";
    /// Landing page for authenticated admins.
    pub const ADMIN_DASHBOARD: &str = "/admin";
    /// Admin user management page.
    pub const ADMIN_USERS: &str = "/admin/users";
    /// Account settings page.
    pub const SETTINGS: &str = "/settings";
}

/// Keys under which the session store persists identity data.
pub mod storage_keys {
    /// Opaque auth token issued by the server.
    pub const AUTH_TOKEN: &str = "auth_token";
    /// JSON-serialized snapshot of the signed-in user.
    pub const USER: &str = "user";
}
