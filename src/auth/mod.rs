//! Session and identity state.
//!
//! DESIGN
//! ======
//! Identity is an explicit state container ([`store::SessionStore`]) built
//! once at the application root and threaded to guards and components by
//! reference. There is no hidden module-level singleton, so the whole flow
//! stays unit-testable against in-memory storage.

pub mod store;
pub mod types;

pub use store::SessionStore;
pub use types::{Role, Session, User};
