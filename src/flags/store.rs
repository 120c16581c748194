//! The flag store: per-key resolution over override, remote, and default
//! sources.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::cell::Cell;
use std::collections::HashMap;
use std::rc::Rc;

use super::remote::RemoteFlagProvider;
use super::types::{default_flags, FlagConfig, FlagKey, FlagValue};

/// Resolves feature flags against three sources in priority order:
/// local override, then the remote provider, then the default map.
///
/// Created once at process start. Reads issued before the remote source has
/// loaded fall through to defaults transparently; nothing is queued or
/// blocked. The loaded bit flips false → true exactly once, driven by the
/// provider's one-shot notification.
pub struct FlagStore<P: RemoteFlagProvider> {
    remote: P,
    defaults: HashMap<FlagKey, FlagValue>,
    overrides: HashMap<FlagKey, FlagValue>,
    loaded: Rc<Cell<bool>>,
}

impl<P: RemoteFlagProvider> FlagStore<P> {
    /// Store with built-in defaults and no seeded overrides.
    pub fn new(remote: P) -> Self {
        Self::init(remote, FlagConfig::default())
    }

    /// Store with `config.defaults` merged over the built-in defaults and
    /// `config.overrides` seeding the override map.
    ///
    /// Registers the one-shot loaded listener with `remote` as a side
    /// effect.
    pub fn init(remote: P, config: FlagConfig) -> Self {
        let mut defaults = default_flags();
        defaults.extend(config.defaults);

        let loaded = Rc::new(Cell::new(false));
        let signal = Rc::clone(&loaded);
        remote.on_loaded(Box::new(move || signal.set(true)));

        Self {
            remote,
            defaults,
            overrides: config.overrides,
            loaded,
        }
    }

    /// Whether `key` is enabled.
    ///
    /// Resolution: override (verbatim) → remote boolean → default → `false`.
    /// Total: never errors, never absent.
    #[must_use]
    pub fn is_enabled(&self, key: FlagKey) -> bool {
        if let Some(value) = self.overrides.get(&key) {
            return value.is_enabled();
        }
        if let Some(enabled) = self.remote.is_feature_enabled(key) {
            return enabled;
        }
        self.defaults.get(&key).is_some_and(FlagValue::is_enabled)
    }

    /// The value for `key`, for multivariate flags.
    ///
    /// Same precedence as [`is_enabled`](Self::is_enabled), but yields `None`
    /// when no source has a value. Multivariate flags have no safe universal
    /// default, so absence is not coerced to anything.
    #[must_use]
    pub fn value(&self, key: FlagKey) -> Option<FlagValue> {
        if let Some(value) = self.overrides.get(&key) {
            return Some(value.clone());
        }
        if let Some(value) = self.remote.get_feature_flag(key) {
            return Some(value);
        }
        self.defaults.get(&key).cloned()
    }

    /// Set a local override for `key`, effective for all subsequent reads.
    ///
    /// Dev/test tooling only; overrides never survive a restart.
    pub fn set_override(&mut self, key: FlagKey, value: impl Into<FlagValue>) {
        let value = value.into();
        log::debug!("feature flag override: {key} = {value:?}");
        self.overrides.insert(key, value);
    }

    /// Drop every local override.
    pub fn clear_overrides(&mut self) {
        self.overrides.clear();
    }

    /// The current override map, for dev tooling display.
    #[must_use]
    pub fn overrides(&self) -> &HashMap<FlagKey, FlagValue> {
        &self.overrides
    }

    /// Whether the remote source has finished its background load.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.loaded.get()
    }
}
