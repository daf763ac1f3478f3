//! Core crate for the `tacit_config` CLI framework layer.
//!
//! Two components compose into an argument-resolution layer for command-line
//! tools:
//!
//! - the [`Resolver`], which fills in "configured defaults" for arguments the
//!   user omitted, consulting the invocation, an environment override, and a
//!   persisted configuration store, in that strict order; and
//! - the help subsystem ([`help`]), which derives short and long descriptions
//!   from registered help metadata and builds a flat, name-addressable index
//!   over a command tree.
//!
//! The crate deliberately stops at the seams: argument parsing belongs to
//! `clap` (adapters are provided), and command dispatch belongs to the
//! hosting application.

mod declaration;
mod env;
mod error;
pub mod help;
mod resolve;
mod result_ext;
mod store;

pub use declaration::{ArgumentDeclaration, DefaultKey, Prefix};
pub use env::{DEFAULTS_SECTION, EnvLookup, ProcessEnv, StaticEnv, defaults_env_var};
pub use error::{TacitError, TacitResult};
pub use resolve::{ProvidedValues, ResolvedValues, Resolver};
pub use result_ext::TacitResultExt;
pub use store::{ConfigStore, FileStore, MemoryStore};

/// Convert a raw prefix, section, or key into its environment-variable
/// segment: uppercased ASCII, with every run of non-alphanumeric characters
/// replaced by a single underscore and leading or trailing underscores
/// removed.
///
/// ```rust
/// assert_eq!(tacit_config::env_segment("my-cli"), "MY_CLI");
/// assert_eq!(tacit_config::env_segment("vm.image-name"), "VM_IMAGE_NAME");
/// assert_eq!(tacit_config::env_segment("_app_"), "APP");
/// ```
#[must_use]
pub fn env_segment(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut gap = false;
    for ch in raw.chars() {
        if ch.is_ascii_alphanumeric() {
            if gap && !out.is_empty() {
                out.push('_');
            }
            gap = false;
            out.push(ch.to_ascii_uppercase());
        } else {
            gap = true;
        }
    }
    out
}
