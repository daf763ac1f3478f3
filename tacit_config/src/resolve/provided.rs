//! Values the user actually supplied on the invocation.

use std::collections::BTreeMap;

use clap::ArgMatches;
use clap::parser::ValueSource;

/// Mapping from argument name to the value supplied on the command line.
///
/// Only arguments the user actually typed belong here; parser-level defaults
/// must not appear, or they would shadow configured defaults. The
/// [`ProvidedValues::from_matches`] adapter enforces this by admitting only
/// values whose `clap` source is the command line itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProvidedValues {
    values: BTreeMap<String, String>,
}

impl ProvidedValues {
    /// Creates an empty mapping (an invocation supplying no tracked
    /// arguments).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a user-supplied value for `name`.
    pub fn insert(&mut self, name: &str, value: &str) {
        self.values.insert(name.to_owned(), value.to_owned());
    }

    /// Returns the user-supplied value for `name`, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Returns `true` when the invocation supplied no tracked arguments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Extracts user-supplied string values from parsed `clap` matches.
    ///
    /// Values whose source is a parser default (or an environment binding
    /// configured on the `clap` argument itself) are skipped, so configured
    /// defaults still apply to them. Arguments with non-string value parsers
    /// are ignored.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use clap::{Arg, Command};
    /// use tacit_config::ProvidedValues;
    ///
    /// let matches = Command::new("app")
    ///     .arg(Arg::new("group").long("group").default_value("fromDefault"))
    ///     .get_matches_from(["app"]);
    /// let provided = ProvidedValues::from_matches(&matches);
    /// assert_eq!(provided.get("group"), None);
    /// ```
    #[must_use]
    pub fn from_matches(matches: &ArgMatches) -> Self {
        let mut provided = Self::new();
        for id in matches.ids() {
            if matches.value_source(id.as_str()) != Some(ValueSource::CommandLine) {
                continue;
            }
            if let Ok(Some(value)) = matches.try_get_one::<String>(id.as_str()) {
                provided.insert(id.as_str(), value);
            }
        }
        provided
    }
}

impl<N, V> FromIterator<(N, V)> for ProvidedValues
where
    N: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(n, v)| (n.into(), v.into()))
                .collect(),
        }
    }
}
