//! Primary error enum for resolution and help flows.

use std::sync::Arc;

use figment::Error as FigmentError;
use thiserror::Error;

/// Result alias carrying shared ownership of a [`TacitError`].
///
/// Errors are `Arc`-wrapped so that a single failure can be surfaced to the
/// CLI layer and retained by callers (for example, a help renderer reporting
/// the failure) without cloning the underlying sources.
pub type TacitResult<T> = Result<T, Arc<TacitError>>;

/// Errors that can occur while resolving arguments or building help.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TacitError {
    /// A required argument had no resolvable value after all lookup tiers.
    #[error("missing required argument '{name}' ({flags})")]
    MissingRequiredArgument {
        /// Name of the unresolved argument.
        name: String,
        /// Flag aliases of the unresolved argument, joined for display.
        flags: String,
    },

    /// A node in the command tree could not produce valid help content.
    #[error("help authoring failed for '{node}': {message}")]
    HelpAuthoring {
        /// Name of the offending node.
        node: String,
        /// Description of the underlying authoring failure.
        message: String,
    },

    /// Error reading the configuration-store file.
    #[error("configuration file error in '{}': {source}", path.display())]
    File {
        /// Path that triggered the failure.
        path: std::path::PathBuf,
        /// Underlying error reported while reading the file.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Error while gathering configuration values from providers.
    #[error("failed to gather configuration: {0}")]
    Gathering(#[from] Box<FigmentError>),
}
