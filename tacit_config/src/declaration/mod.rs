//! Static descriptions of command arguments and their override sources.
//!
//! A command-building facility registers one [`ArgumentDeclaration`] per
//! argument at command-table build time. Declarations are immutable
//! thereafter; the resolver only reads them.

use crate::env_segment;


/// Prefix used when constructing environment-variable names for a hosting
/// CLI.
///
/// Stores the raw prefix as provided by the application alongside the
/// sanitized segment used in environment-variable names.
///
/// # Examples
///
/// ```rust
/// use tacit_config::Prefix;
/// let prefix = Prefix::new("az");
/// assert_eq!(prefix.env(), "AZ");
/// ```
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Prefix {
    raw: String,
    env: String,
}

impl Prefix {
    /// Creates a new `Prefix` from a raw string, storing both the original
    /// and its environment-variable segment.
    #[must_use]
    pub fn new(raw: &str) -> Self {
        Self {
            raw: raw.to_owned(),
            env: env_segment(raw),
        }
    }

    /// Returns the original, unmodified prefix string.
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Returns the sanitized environment-variable segment for this prefix.
    #[must_use]
    pub fn env(&self) -> &str {
        &self.env
    }
}

/// Key under which an argument's configured default is stored.
///
/// References a key within the `defaults` section of the persisted
/// configuration store. Several arguments may share one key (for example a
/// group-wide resource default); each is still resolved independently.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct DefaultKey(String);

impl DefaultKey {
    /// Creates a new `DefaultKey` from the provided raw string.
    #[must_use]
    pub fn new(raw: &str) -> Self {
        Self(raw.to_owned())
    }

    /// Returns the stored key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the key formatted as an environment-variable segment.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tacit_config::DefaultKey;
    /// assert_eq!(DefaultKey::new("vm.image-name").env_key(), "VM_IMAGE_NAME");
    /// ```
    #[must_use]
    pub fn env_key(&self) -> String {
        env_segment(&self.0)
    }
}

/// Static description of a single command argument.
///
/// Holds the argument's name (unique per command), its ordered CLI flag
/// aliases (the first is canonical), whether a value is required, and an
/// optional [`DefaultKey`] naming its configured default.
///
/// # Examples
///
/// ```rust
/// use tacit_config::ArgumentDeclaration;
///
/// let decl = ArgumentDeclaration::new(
///     "resource_group_name",
///     ["--resource-group-name", "-g"],
///     true,
/// )
/// .with_configured_default("group");
/// assert_eq!(decl.canonical_flag(), Some("--resource-group-name"));
/// assert!(decl.is_required());
/// ```
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ArgumentDeclaration {
    name: String,
    flags: Vec<String>,
    required: bool,
    configured_default: Option<DefaultKey>,
}

impl ArgumentDeclaration {
    /// Creates a declaration with no configured default.
    #[must_use]
    pub fn new<I, S>(name: &str, flags: I, required: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.to_owned(),
            flags: flags.into_iter().map(Into::into).collect(),
            required,
            configured_default: None,
        }
    }

    /// Attaches a configured-default key to the declaration.
    #[must_use]
    pub fn with_configured_default(mut self, key: &str) -> Self {
        self.configured_default = Some(DefaultKey::new(key));
        self
    }

    /// Returns the argument name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the ordered CLI flag aliases.
    #[must_use]
    pub fn flags(&self) -> &[String] {
        &self.flags
    }

    /// Returns the canonical (first) flag alias, if any was declared.
    #[must_use]
    pub fn canonical_flag(&self) -> Option<&str> {
        self.flags.first().map(String::as_str)
    }

    /// Returns `true` when the argument must resolve to a value.
    #[must_use]
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Returns the configured-default key, if one was declared.
    #[must_use]
    pub fn configured_default(&self) -> Option<&DefaultKey> {
        self.configured_default.as_ref()
    }

    /// Returns the flag aliases joined for use in diagnostics, for example
    /// `--resource-group-name/-g`.
    #[must_use]
    pub fn flags_display(&self) -> String {
        self.flags.join("/")
    }
}
