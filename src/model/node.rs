//! Document node types.

use std::fmt;

use super::spacing::Spacing;

/// One element of a parsed license body.
///
/// Variant fields are only reachable through a `match`, so a bullet marker
/// can never be read off a paragraph.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(serde::Serialize))]
#[cfg_attr(feature = "cli", serde(tag = "type", rename_all = "snake_case"))]
pub enum Node {
    /// Normalized character data: trimmed, interior whitespace collapsed.
    CharacterRun { text: String },
    /// `<p>`
    Paragraph { children: Vec<Node> },
    /// `<bullet>`: a literal list marker such as `1.` or `(a)`.
    Bullet {
        marker: String,
        #[cfg_attr(feature = "cli", serde(skip_serializing_if = "is_unspecified"))]
        spacing: Spacing,
    },
    /// `<list>`
    List { items: Vec<ListItem> },
    /// `<optional>`: text that may be omitted without changing the license.
    Optional {
        #[cfg_attr(feature = "cli", serde(skip_serializing_if = "is_unspecified"))]
        spacing: Spacing,
        children: Vec<Node>,
    },
    /// `<alt>`: fixed text that may be replaced by anything matching `pattern`.
    Alternative {
        text: String,
        name: String,
        pattern: String,
        #[cfg_attr(feature = "cli", serde(skip_serializing_if = "is_unspecified"))]
        spacing: Spacing,
    },
    /// `<br/>`
    LineBreak,
    /// `<titleText>`
    TitleBlock { children: Vec<Node> },
    /// `<copyrightText>`
    CopyrightBlock { children: Vec<Node> },
    /// `<standardLicenseHeader>`
    StandardHeaderBlock { children: Vec<Node> },
    /// Element outside the markup vocabulary, kept only in lenient mode.
    Unrecognized { tag: String },
}

/// The content of one `<item>` inside a `<list>`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(serde::Serialize))]
pub struct ListItem {
    pub children: Vec<Node>,
}

impl ListItem {
    pub fn new(children: Vec<Node>) -> Self {
        Self { children }
    }
}

#[cfg(feature = "cli")]
fn is_unspecified(spacing: &Spacing) -> bool {
    *spacing == Spacing::Unspecified
}

/// Variant tag of a [`Node`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    CharacterRun,
    Paragraph,
    Bullet,
    List,
    Optional,
    Alternative,
    LineBreak,
    TitleBlock,
    CopyrightBlock,
    StandardHeaderBlock,
    Unrecognized,
}

impl NodeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::CharacterRun => "CharacterRun",
            NodeKind::Paragraph => "Paragraph",
            NodeKind::Bullet => "Bullet",
            NodeKind::List => "List",
            NodeKind::Optional => "Optional",
            NodeKind::Alternative => "Alternative",
            NodeKind::LineBreak => "LineBreak",
            NodeKind::TitleBlock => "TitleBlock",
            NodeKind::CopyrightBlock => "CopyrightBlock",
            NodeKind::StandardHeaderBlock => "StandardHeaderBlock",
            NodeKind::Unrecognized => "Unrecognized",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Node {
    /// Create a character run from already-normalized text.
    pub fn text(text: impl Into<String>) -> Self {
        Node::CharacterRun { text: text.into() }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Node::CharacterRun { .. } => NodeKind::CharacterRun,
            Node::Paragraph { .. } => NodeKind::Paragraph,
            Node::Bullet { .. } => NodeKind::Bullet,
            Node::List { .. } => NodeKind::List,
            Node::Optional { .. } => NodeKind::Optional,
            Node::Alternative { .. } => NodeKind::Alternative,
            Node::LineBreak => NodeKind::LineBreak,
            Node::TitleBlock { .. } => NodeKind::TitleBlock,
            Node::CopyrightBlock { .. } => NodeKind::CopyrightBlock,
            Node::StandardHeaderBlock { .. } => NodeKind::StandardHeaderBlock,
            Node::Unrecognized { .. } => NodeKind::Unrecognized,
        }
    }

    /// Ordered child nodes.
    ///
    /// Leaves return an empty slice. A `List` also returns an empty slice:
    /// its content is reached through [`Node::items`].
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Paragraph { children }
            | Node::Optional { children, .. }
            | Node::TitleBlock { children }
            | Node::CopyrightBlock { children }
            | Node::StandardHeaderBlock { children } => children,
            Node::CharacterRun { .. }
            | Node::Bullet { .. }
            | Node::List { .. }
            | Node::Alternative { .. }
            | Node::LineBreak
            | Node::Unrecognized { .. } => &[],
        }
    }

    /// List items, empty for every variant but `List`.
    pub fn items(&self) -> &[ListItem] {
        match self {
            Node::List { items } => items,
            _ => &[],
        }
    }
}
