//! Help content derivation and command-tree traversal.
//!
//! Help metadata is attached explicitly to each command or group at
//! registration time via a [`HelpSource`]; docstring-style text is one
//! pluggable source feeding it ([`split_summary`]), not a runtime reflection
//! dependency. [`HelpIndex::build`] walks a [`CommandNode`] tree depth-first
//! and either yields a complete name-addressable index or aborts on the
//! first authoring failure — partial indexes are never returned.

mod node;
mod summary;
mod tree;

pub use node::{HelpNode, HelpSource, HelpText};
pub use summary::split_summary;
pub use tree::{CommandNode, HelpIndex, render_command};
