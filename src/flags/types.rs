//! Flag keys, values, and resolver configuration.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The closed set of feature flags this build knows about.
///
/// The string form (kebab-case) is the key used by the remote provider and
/// in flag configuration files.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlagKey {
    /// Redesigned dashboard layout.
    NewDashboard,
    /// Second-generation dark theme.
    DarkModeV2,
    /// Gate for features still in beta.
    BetaFeatures,
    /// Site-wide maintenance banner and read-only mode.
    MaintenanceMode,
    /// Multivariate experiment arm (`"a"`, `"b"`, ...). No built-in default:
    /// callers must handle the control case themselves.
    ExperimentVariant,
}

impl FlagKey {
    /// Every known flag, for dev tooling that enumerates the set.
    pub const ALL: [Self; 5] = [
        Self::NewDashboard,
        Self::DarkModeV2,
        Self::BetaFeatures,
        Self::MaintenanceMode,
        Self::ExperimentVariant,
    ];

    /// The stable string key for this flag.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NewDashboard => "new-dashboard",
            Self::DarkModeV2 => "dark-mode-v2",
            Self::BetaFeatures => "beta-features",
            Self::MaintenanceMode => "maintenance-mode",
            Self::ExperimentVariant => "experiment-variant",
        }
    }
}

impl fmt::Display for FlagKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string key names no known flag.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown feature flag key: {0}")]
pub struct UnknownFlagKey(pub String);

impl FromStr for FlagKey {
    type Err = UnknownFlagKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| UnknownFlagKey(s.to_owned()))
    }
}

/// A flag's value: boolean toggles plus string/number variants for
/// multivariate flags.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FlagValue {
    /// Plain on/off toggle.
    Bool(bool),
    /// Numeric variant (e.g. a rollout bucket or limit).
    Num(f64),
    /// String variant (e.g. `"variant-b"`).
    Str(String),
}

impl FlagValue {
    /// The boolean value, if this is a [`FlagValue::Bool`].
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            Self::Num(_) | Self::Str(_) => None,
        }
    }

    /// The numeric value, if this is a [`FlagValue::Num`].
    #[must_use]
    pub fn as_num(&self) -> Option<f64> {
        match self {
            Self::Num(value) => Some(*value),
            Self::Bool(_) | Self::Str(_) => None,
        }
    }

    /// The string value, if this is a [`FlagValue::Str`].
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(value) => Some(value),
            Self::Bool(_) | Self::Num(_) => None,
        }
    }

    /// Whether this value counts as "enabled" for a boolean query.
    ///
    /// Multivariate values follow the remote provider's convention: an active
    /// non-empty variant means the flag is on.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        match self {
            Self::Bool(value) => *value,
            Self::Num(value) => *value != 0.0,
            Self::Str(value) => !value.is_empty(),
        }
    }
}

impl From<bool> for FlagValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for FlagValue {
    fn from(value: f64) -> Self {
        Self::Num(value)
    }
}

impl From<&str> for FlagValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<String> for FlagValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

/// Built-in defaults for the boolean toggles. Used when neither an override
/// nor the remote source yields a value. Multivariate keys deliberately have
/// no entry here: with no safe universal default, their absence must stay
/// observable.
#[must_use]
pub fn default_flags() -> HashMap<FlagKey, FlagValue> {
    HashMap::from([
        (FlagKey::NewDashboard, FlagValue::Bool(false)),
        (FlagKey::DarkModeV2, FlagValue::Bool(false)),
        (FlagKey::BetaFeatures, FlagValue::Bool(false)),
        (FlagKey::MaintenanceMode, FlagValue::Bool(false)),
    ])
}

/// Startup configuration for the flag store.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlagConfig {
    /// Defaults merged over the built-in default map.
    pub defaults: HashMap<FlagKey, FlagValue>,
    /// Seed overrides, for dev/test builds. Never persisted.
    pub overrides: HashMap<FlagKey, FlagValue>,
}
