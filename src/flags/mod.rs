//! Feature-flag resolution with multi-source precedence.
//!
//! DESIGN
//! ======
//! Reads resolve override → remote → default per key. Overrides are local
//! dev/test tooling and never persist; the remote source is authoritative
//! once loaded and silently absent before that, so early reads fall through
//! to defaults instead of blocking.

pub mod remote;
pub mod store;
pub mod types;

pub use remote::{DisabledRemote, RemoteFlagProvider, StaticRemote};
pub use store::FlagStore;
pub use types::{FlagConfig, FlagKey, FlagValue, UnknownFlagKey};
