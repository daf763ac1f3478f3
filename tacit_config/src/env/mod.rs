//! Environment-variable override naming and lookup capabilities.
//!
//! Overrides never mutate the configuration store: a value found under the
//! computed variable name shadows the stored value for one invocation only.
//! Lookups are injected as a capability so resolution stays deterministic and
//! testable rather than reading ambient process state directly.

use std::collections::HashMap;

use crate::declaration::{DefaultKey, Prefix};
use crate::env_segment;


/// Name of the configuration-store section holding configured defaults.
pub const DEFAULTS_SECTION: &str = "defaults";

/// Computes the environment-variable name overriding a configured default.
///
/// The name is `<PREFIX>_DEFAULTS_<KEY>`, each segment sanitized by
/// [`env_segment`]. The convention is fixed here and applied everywhere a
/// configured default is consulted.
///
/// # Examples
///
/// ```rust
/// use tacit_config::{DefaultKey, Prefix, defaults_env_var};
///
/// let name = defaults_env_var(&Prefix::new("az"), &DefaultKey::new("group"));
/// assert_eq!(name, "AZ_DEFAULTS_GROUP");
/// ```
#[must_use]
pub fn defaults_env_var(prefix: &Prefix, key: &DefaultKey) -> String {
    format!(
        "{}_{}_{}",
        prefix.env(),
        env_segment(DEFAULTS_SECTION),
        key.env_key()
    )
}

/// Read-only environment lookup capability.
///
/// Implementations must behave as pure reads: looking a name up twice within
/// one invocation returns the same answer.
pub trait EnvLookup {
    /// Returns the value of the named variable, or `None` when unset or not
    /// valid Unicode.
    fn var(&self, name: &str) -> Option<String>;
}

/// [`EnvLookup`] backed by the real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvLookup for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// In-memory [`EnvLookup`] for tests and hermetic invocations.
///
/// # Examples
///
/// ```rust
/// use tacit_config::{EnvLookup, StaticEnv};
///
/// let env = StaticEnv::from_iter([("AZ_DEFAULTS_GROUP", "myRG")]);
/// assert_eq!(env.var("AZ_DEFAULTS_GROUP").as_deref(), Some("myRG"));
/// assert_eq!(env.var("AZ_DEFAULTS_LOCATION"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticEnv {
    vars: HashMap<String, String>,
}

impl StaticEnv {
    /// Creates an empty lookup.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a variable, replacing any previous value.
    pub fn set(&mut self, name: &str, value: &str) {
        self.vars.insert(name.to_owned(), value.to_owned());
    }
}

impl<N, V> FromIterator<(N, V)> for StaticEnv
where
    N: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(n, v)| (n.into(), v.into()))
                .collect(),
        }
    }
}

impl EnvLookup for StaticEnv {
    fn var(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}
