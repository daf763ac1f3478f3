//! Help metadata sources and derived help nodes.

use serde::Serialize;

use super::summary::split_summary;

/// Derived help content for one command or group.
///
/// `short` is a single sentence; `long` is free text with line breaks already
/// collapsed, leaving wrapping to the renderer. Serializable so hosts can
/// emit help as structured data for external tooling.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HelpText {
    short: String,
    long: String,
}

impl HelpText {
    /// Creates help text from already-split descriptions.
    #[must_use]
    pub fn new(short: &str, long: &str) -> Self {
        Self {
            short: short.to_owned(),
            long: long.to_owned(),
        }
    }

    /// The first-sentence summary.
    #[must_use]
    pub fn short(&self) -> &str {
        &self.short
    }

    /// The remainder of the description; may be empty.
    #[must_use]
    pub fn long(&self) -> &str {
        &self.long
    }
}

/// Source material for a node's help content, attached at registration time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HelpSource {
    /// Docstring-style text; split into short and long on load.
    Text(String),
    /// Pre-split descriptions supplied directly by the author.
    Explicit {
        /// First-sentence summary.
        short: String,
        /// Remaining description; may be empty.
        long: String,
    },
    /// No help material was registered. Loading this source is an authoring
    /// failure.
    Missing,
}

impl HelpSource {
    /// Convenience constructor for docstring-style text.
    #[must_use]
    pub fn text(doc: &str) -> Self {
        Self::Text(doc.to_owned())
    }

    /// Loads the source into [`HelpText`].
    ///
    /// # Errors
    ///
    /// Returns a description of the authoring failure when no material was
    /// registered or the material yields an empty short description.
    pub fn load(&self) -> Result<HelpText, String> {
        let text = match self {
            Self::Text(doc) => {
                let (short, long) = split_summary(doc);
                HelpText { short, long }
            }
            Self::Explicit { short, long } => HelpText::new(short.trim(), long.trim()),
            Self::Missing => return Err("no help metadata registered".to_owned()),
        };
        if text.short.is_empty() {
            return Err("help text has an empty short description".to_owned());
        }
        Ok(text)
    }
}

/// Help content for one visited node of the command tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum HelpNode {
    /// A leaf command.
    Command {
        /// Node name with the program prefix stripped.
        name: String,
        /// Derived help content.
        text: HelpText,
    },
    /// A group of commands.
    Group {
        /// Node name with the program prefix stripped.
        name: String,
        /// Derived help content.
        text: HelpText,
        /// Names of the group's direct children, in declaration order. Each
        /// is itself an entry of the owning index.
        children: Vec<String>,
    },
}

impl HelpNode {
    /// The node's name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Command { name, .. } | Self::Group { name, .. } => name,
        }
    }

    /// The node's derived help content.
    #[must_use]
    pub fn text(&self) -> &HelpText {
        match self {
            Self::Command { text, .. } | Self::Group { text, .. } => text,
        }
    }

    /// Returns `true` for group nodes.
    #[must_use]
    pub fn is_group(&self) -> bool {
        matches!(self, Self::Group { .. })
    }
}
