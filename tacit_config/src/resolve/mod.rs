//! Resolution of effective argument values across override sources.
//!
//! Priority is strict and fixed: a value supplied on the invocation always
//! wins; otherwise a declared configured default is looked up first in the
//! environment (under the name computed by
//! [`defaults_env_var`](crate::defaults_env_var)) and then in the `defaults`
//! section of the configuration store. An argument that remains unset fails
//! resolution when required and is simply omitted when optional.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::debug;

use crate::declaration::{ArgumentDeclaration, Prefix};
use crate::env::{DEFAULTS_SECTION, EnvLookup, defaults_env_var};
use crate::error::{TacitError, TacitResult};
use crate::store::ConfigStore;

mod provided;

pub use provided::ProvidedValues;


/// Mapping from argument name to effective value after resolution.
///
/// Every required argument of a successful resolution has an entry; optional
/// arguments without a value from any source are absent, leaving the command
/// callable's own default (if any) to apply.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedValues {
    values: BTreeMap<String, String>,
}

impl ResolvedValues {
    /// Returns the effective value for `name`, if one was resolved.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Returns `true` when `name` resolved to a value.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Iterates over `(name, value)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Number of resolved arguments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` when no argument resolved to a value.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn insert(&mut self, name: &str, value: String) {
        self.values.insert(name.to_owned(), value);
    }
}

/// Resolves argument values against injected override sources.
///
/// The resolver borrows its environment and store capabilities rather than
/// reading ambient process state, keeping resolution deterministic and
/// side-effect-free: it never writes to the store, and repeated resolution
/// against unchanged sources yields identical results.
///
/// # Examples
///
/// ```rust
/// use tacit_config::{
///     ArgumentDeclaration, MemoryStore, Prefix, ProvidedValues, Resolver, StaticEnv,
/// };
///
/// let decl = ArgumentDeclaration::new("resource_group_name", ["-g"], true)
///     .with_configured_default("group");
/// let prefix = Prefix::new("az");
/// let env = StaticEnv::from_iter([("AZ_DEFAULTS_GROUP", "myRG")]);
/// let store = MemoryStore::new();
/// let resolver = Resolver::new(&prefix, &env, &store);
///
/// let resolved = resolver
///     .resolve_all(std::slice::from_ref(&decl), &ProvidedValues::new())?;
/// assert_eq!(resolved.get("resource_group_name"), Some("myRG"));
/// # Ok::<(), std::sync::Arc<tacit_config::TacitError>>(())
/// ```
#[derive(Clone, Copy)]
pub struct Resolver<'a> {
    prefix: &'a Prefix,
    env: &'a dyn EnvLookup,
    store: &'a dyn ConfigStore,
}

impl<'a> Resolver<'a> {
    /// Creates a resolver over the given override sources.
    #[must_use]
    pub fn new(prefix: &'a Prefix, env: &'a dyn EnvLookup, store: &'a dyn ConfigStore) -> Self {
        Self { prefix, env, store }
    }

    /// Resolves one declaration to its effective value, or `None` when every
    /// tier comes up empty.
    ///
    /// The required flag plays no part here; it only matters for the
    /// unset-value policy applied by [`Resolver::resolve_all`].
    #[must_use]
    pub fn resolve(
        &self,
        decl: &ArgumentDeclaration,
        provided: &ProvidedValues,
    ) -> Option<String> {
        if let Some(value) = provided.get(decl.name()) {
            return Some(value.to_owned());
        }
        let key = decl.configured_default()?;
        let var = defaults_env_var(self.prefix, key);
        if let Some(value) = self.env.var(&var) {
            debug!(argument = decl.name(), %var, "configured default from environment");
            return Some(value);
        }
        let stored = self.store.get(DEFAULTS_SECTION, key.as_str());
        if stored.is_some() {
            debug!(argument = decl.name(), key = key.as_str(), "configured default from store");
        }
        stored
    }

    /// Resolves every declaration, applying the unset-value policy.
    ///
    /// # Errors
    ///
    /// Returns [`TacitError::MissingRequiredArgument`] for the first required
    /// declaration that no tier could satisfy.
    pub fn resolve_all(
        &self,
        declarations: &[ArgumentDeclaration],
        provided: &ProvidedValues,
    ) -> TacitResult<ResolvedValues> {
        let mut resolved = ResolvedValues::default();
        for decl in declarations {
            match self.resolve(decl, provided) {
                Some(value) => resolved.insert(decl.name(), value),
                None if decl.is_required() => {
                    return Err(Arc::new(TacitError::missing_required(decl)));
                }
                None => {}
            }
        }
        Ok(resolved)
    }
}

impl std::fmt::Debug for Resolver<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Resolver")
            .field("prefix", self.prefix)
            .finish_non_exhaustive()
    }
}
