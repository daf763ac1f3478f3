//! Command-tree construction, traversal, and the flat help index.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::debug;

use crate::error::{TacitError, TacitResult};

use super::node::{HelpNode, HelpSource};

/// Whether a node is a group or a leaf command, decided when the tree is
/// constructed rather than probed at traversal time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NodeKind {
    Command,
    Group,
}

/// One node of the parser tree handed to [`HelpIndex::build`].
///
/// Carries the node's full program string (for example `az vm list`), its
/// registered [`HelpSource`], and, for groups, the child nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandNode {
    prog: String,
    help: HelpSource,
    kind: NodeKind,
    children: Vec<CommandNode>,
}

impl CommandNode {
    /// Creates a leaf command node.
    #[must_use]
    pub fn command(prog: &str, help: HelpSource) -> Self {
        Self {
            prog: prog.to_owned(),
            help,
            kind: NodeKind::Command,
            children: Vec::new(),
        }
    }

    /// Creates a group node with the given children.
    #[must_use]
    pub fn group(prog: &str, help: HelpSource, children: Vec<CommandNode>) -> Self {
        Self {
            prog: prog.to_owned(),
            help,
            kind: NodeKind::Group,
            children,
        }
    }

    /// The node's full program string.
    #[must_use]
    pub fn prog(&self) -> &str {
        &self.prog
    }

    /// Direct children; empty for commands.
    #[must_use]
    pub fn children(&self) -> &[CommandNode] {
        &self.children
    }

    /// Returns `true` for group nodes.
    #[must_use]
    pub fn is_group(&self) -> bool {
        self.kind == NodeKind::Group
    }

    /// Builds a tree from a `clap` command hierarchy.
    ///
    /// A `clap` command with subcommands becomes a group, otherwise a leaf.
    /// `about` text feeds the help source as docstring-style material; when
    /// `long_about` is also set the pair is taken as pre-split short and long
    /// descriptions. A command carrying neither gets [`HelpSource::Missing`],
    /// which [`HelpIndex::build`] reports as an authoring failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use clap::Command;
    /// use tacit_config::help::CommandNode;
    ///
    /// let cmd = Command::new("az")
    ///     .about("Manage things.")
    ///     .subcommand(Command::new("test").about("Short Description."));
    /// let root = CommandNode::from_clap(&cmd);
    /// assert!(root.is_group());
    /// assert_eq!(root.children()[0].prog(), "az test");
    /// ```
    #[must_use]
    pub fn from_clap(cmd: &clap::Command) -> Self {
        Self::from_clap_at(cmd.get_name().to_owned(), cmd)
    }

    fn from_clap_at(prog: String, cmd: &clap::Command) -> Self {
        let about = cmd.get_about().map(ToString::to_string);
        let long_about = cmd.get_long_about().map(ToString::to_string);
        let help = match (about, long_about) {
            (Some(short), Some(long)) => HelpSource::Explicit { short, long },
            (Some(doc), None) | (None, Some(doc)) => HelpSource::Text(doc),
            (None, None) => HelpSource::Missing,
        };
        let children: Vec<CommandNode> = cmd
            .get_subcommands()
            .map(|sub| Self::from_clap_at(format!("{prog} {}", sub.get_name()), sub))
            .collect();
        if children.is_empty() {
            Self::command(&prog, help)
        } else {
            Self::group(&prog, help, children)
        }
    }

    /// Node name with the leading program prefix stripped. The prefix only
    /// counts when followed by a space, so `az` never truncates `azure`.
    fn name_under(&self, program: &str) -> String {
        self.prog
            .strip_prefix(program)
            .filter(|rest| rest.starts_with(' '))
            .map_or(self.prog.as_str(), str::trim_start)
            .to_owned()
    }
}

/// Flat name-addressable lookup over the help content of a command tree.
///
/// Contains one entry per visited node, nested group members included; the
/// root node (the bare program) is not an entry. Suitable for interactive
/// `help <path>` rendering.
#[derive(Debug, Clone, Default)]
pub struct HelpIndex {
    program: String,
    entries: BTreeMap<String, HelpNode>,
}

impl HelpIndex {
    /// Builds the index by walking `root` depth-first.
    ///
    /// Every node is visited exactly once. The walk aborts on the first node
    /// whose help cannot be loaded; no partial index is ever returned.
    ///
    /// # Errors
    ///
    /// Returns [`TacitError::HelpAuthoring`] naming the offending node and
    /// the underlying failure.
    pub fn build(root: &CommandNode) -> TacitResult<Self> {
        let mut index = Self {
            program: root.prog().to_owned(),
            entries: BTreeMap::new(),
        };
        for child in root.children() {
            index.visit(child)?;
        }
        debug!(program = %index.program, entries = index.entries.len(), "help index built");
        Ok(index)
    }

    fn visit(&mut self, node: &CommandNode) -> TacitResult<()> {
        let name = node.name_under(&self.program);
        let text = node
            .help
            .load()
            .map_err(|message| Arc::new(TacitError::help_authoring(&name, message)))?;
        let entry = if node.is_group() {
            HelpNode::Group {
                name: name.clone(),
                text,
                children: node
                    .children()
                    .iter()
                    .map(|child| child.name_under(&self.program))
                    .collect(),
            }
        } else {
            HelpNode::Command {
                name: name.clone(),
                text,
            }
        };
        self.entries.insert(name, entry);
        for child in node.children() {
            self.visit(child)?;
        }
        Ok(())
    }

    /// Returns the help node registered under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&HelpNode> {
        self.entries.get(name)
    }

    /// The program name the index was built for.
    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Iterates over entry names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when the tree had no nodes beneath the root.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Renders a leaf command's help in the conventional layout:
///
/// ```text
///
/// Command
///     <program> <name>: <short>
///         <long>
/// ```
///
/// The trailing long-description line is omitted when the long description
/// is empty. Layout is a convenience for hosts; the short/long split itself
/// is the contract.
#[must_use]
pub fn render_command(program: &str, node: &HelpNode) -> String {
    let text = node.text();
    let mut out = format!("\nCommand\n    {program} {}: {}", node.name(), text.short());
    if !text.long().is_empty() {
        out.push_str("\n        ");
        out.push_str(text.long());
    }
    out
}
