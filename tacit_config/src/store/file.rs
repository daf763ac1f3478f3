//! File-backed configuration store.

use std::error::Error;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use figment::{
    Figment,
    providers::{Format, Toml},
};
use tracing::debug;

use crate::{TacitError, TacitResult, TacitResultExt};

use super::{ConfigStore, Sections};

/// Construct a [`TacitError::File`] for a configuration path.
fn file_error(path: &Path, err: impl Into<Box<dyn Error + Send + Sync>>) -> Arc<TacitError> {
    Arc::new(TacitError::File {
        path: path.to_path_buf(),
        source: err.into(),
    })
}

/// [`ConfigStore`] backed by a single local TOML file of string-valued
/// sections.
///
/// The file is read once, in full, when the store is loaded; `get` never
/// touches the filesystem. A missing file yields an empty store, matching
/// the resolution contract that an absent store value is simply "unset". An
/// unreadable or malformed file is a hard error, distinct from any
/// missing-argument failure.
///
/// # Examples
///
/// A defaults file:
///
/// ```toml
/// [defaults]
/// group = "myRG"
/// location = "westus"
/// ```
///
/// ```rust,no_run
/// use tacit_config::{ConfigStore, FileStore};
/// # fn run() -> tacit_config::TacitResult<()> {
/// let store = FileStore::load("defaults.toml".as_ref())?;
/// let group = store.get("defaults", "group");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    sections: Sections,
}

impl FileStore {
    /// Loads the store from `path`.
    ///
    /// # Errors
    ///
    /// Returns [`TacitError::File`] when the file exists but cannot be read,
    /// and [`TacitError::Gathering`] when its contents fail to parse into
    /// string-valued sections.
    pub fn load(path: &Path) -> TacitResult<Self> {
        if !path.is_file() {
            debug!(path = %path.display(), "configuration file absent, using empty store");
            return Ok(Self {
                path: path.to_path_buf(),
                sections: Sections::default(),
            });
        }
        let data = std::fs::read_to_string(path).map_err(|e| file_error(path, e))?;
        let sections: Sections = Figment::from(Toml::string(&data))
            .extract()
            .map_err(Box::new)
            .into_tacit()?;
        Ok(Self {
            path: path.to_path_buf(),
            sections,
        })
    }

    /// Returns the path the store was loaded from.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigStore for FileStore {
    fn get(&self, section: &str, key: &str) -> Option<String> {
        self.sections.get(section)?.get(key).cloned()
    }
}
