//! Remote flag source: the asynchronous authority behind the resolver.
//!
//! ERROR HANDLING
//! ==============
//! A provider that is disabled or not yet loaded answers `None`, never an
//! error, and the resolver falls through to the next source.

#[cfg(test)]
#[path = "remote_test.rs"]
mod remote_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use super::types::{FlagKey, FlagValue};

/// One-shot listener invoked when remote flag data becomes available.
pub type LoadedCallback = Box<dyn FnOnce()>;

/// Asynchronous source of truth for feature flags.
///
/// Implementations signal readiness through [`on_loaded`](Self::on_loaded):
/// each registered callback runs at most once, and runs immediately if the
/// provider already finished loading when the listener registers.
pub trait RemoteFlagProvider {
    /// Whether `key` is enabled remotely, or `None` if the provider has no
    /// answer (disabled, not loaded, or key unset).
    fn is_feature_enabled(&self, key: FlagKey) -> Option<bool>;

    /// The remote value for `key` (multivariate flags included), or `None`
    /// if the provider has no answer.
    fn get_feature_flag(&self, key: FlagKey) -> Option<FlagValue>;

    /// Register a one-shot listener for the load notification.
    fn on_loaded(&self, callback: LoadedCallback);
}

/// The disabled provider: no values, and the load signal never fires.
///
/// Used by builds without a flag backend; resolution degrades to overrides
/// and defaults.
#[derive(Clone, Copy, Debug, Default)]
pub struct DisabledRemote;

impl RemoteFlagProvider for DisabledRemote {
    fn is_feature_enabled(&self, _key: FlagKey) -> Option<bool> {
        None
    }

    fn get_feature_flag(&self, _key: FlagKey) -> Option<FlagValue> {
        None
    }

    fn on_loaded(&self, _callback: LoadedCallback) {}
}

/// A provider backed by a fixed value set with an explicit load trigger.
///
/// Clones share state, so a test (or an offline build) can keep a handle,
/// hand a clone to the flag store, and later flip values or call
/// [`finish_loading`](Self::finish_loading) to simulate the backend's
/// background load completing. Values are invisible until loaded, matching
/// the real backend's behavior before its first response.
#[derive(Clone, Default)]
pub struct StaticRemote {
    inner: Rc<RefCell<StaticRemoteInner>>,
}

#[derive(Default)]
struct StaticRemoteInner {
    values: HashMap<FlagKey, FlagValue>,
    loaded: bool,
    listeners: Vec<LoadedCallback>,
}

impl StaticRemote {
    /// An empty, not-yet-loaded provider.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A provider seeded with `values`, still not loaded.
    #[must_use]
    pub fn with_values(values: impl IntoIterator<Item = (FlagKey, FlagValue)>) -> Self {
        let remote = Self::new();
        remote.inner.borrow_mut().values = values.into_iter().collect();
        remote
    }

    /// Set the remote value for `key`.
    pub fn set(&self, key: FlagKey, value: impl Into<FlagValue>) {
        self.inner.borrow_mut().values.insert(key, value.into());
    }

    /// Whether the load signal has fired.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.inner.borrow().loaded
    }

    /// Mark the provider loaded and fire pending listeners. Idempotent.
    pub fn finish_loading(&self) {
        let listeners = {
            let mut inner = self.inner.borrow_mut();
            if inner.loaded {
                return;
            }
            inner.loaded = true;
            std::mem::take(&mut inner.listeners)
        };
        // Invoked outside the borrow: a listener may query this provider.
        for listener in listeners {
            listener();
        }
    }
}

impl RemoteFlagProvider for StaticRemote {
    fn is_feature_enabled(&self, key: FlagKey) -> Option<bool> {
        self.get_feature_flag(key).map(|value| value.is_enabled())
    }

    fn get_feature_flag(&self, key: FlagKey) -> Option<FlagValue> {
        let inner = self.inner.borrow();
        if !inner.loaded {
            return None;
        }
        inner.values.get(&key).cloned()
    }

    fn on_loaded(&self, callback: LoadedCallback) {
        let already_loaded = self.inner.borrow().loaded;
        if already_loaded {
            callback();
        } else {
            self.inner.borrow_mut().listeners.push(callback);
        }
    }
}
