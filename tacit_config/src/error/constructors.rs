//! Constructor helpers for `TacitError`.

use figment::Error as FigmentError;

use crate::declaration::ArgumentDeclaration;

use super::TacitError;

impl TacitError {
    /// Construct a [`TacitError::MissingRequiredArgument`] naming the
    /// declaration and its flags.
    ///
    /// # Examples
    ///
    /// ```
    /// use tacit_config::{ArgumentDeclaration, TacitError};
    /// let decl = ArgumentDeclaration::new("name", ["--name", "-n"], true);
    /// let e = TacitError::missing_required(&decl);
    /// assert!(e.to_string().contains("--name/-n"));
    /// ```
    #[must_use]
    pub fn missing_required(decl: &ArgumentDeclaration) -> Self {
        Self::MissingRequiredArgument {
            name: decl.name().to_owned(),
            flags: decl.flags_display(),
        }
    }

    /// Construct a [`TacitError::HelpAuthoring`] for the named node.
    #[must_use]
    pub fn help_authoring(node: impl Into<String>, message: impl Into<String>) -> Self {
        Self::HelpAuthoring {
            node: node.into(),
            message: message.into(),
        }
    }

    /// Construct a gathering error from a [`figment::Error`].
    ///
    /// # Examples
    ///
    /// ```
    /// use tacit_config::TacitError;
    /// let fe = figment::Error::from("boom".to_owned());
    /// let e = TacitError::gathering(fe);
    /// assert!(matches!(e, TacitError::Gathering(_)));
    /// ```
    #[must_use]
    pub fn gathering(source: FigmentError) -> Self {
        Self::Gathering(Box::new(source))
    }
}
