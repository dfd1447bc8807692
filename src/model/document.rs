//! A fully parsed markup body.

use std::slice;

use super::node::{ListItem, Node};

/// Ordered top-level nodes of a `<text>` (or `<notes>`) body.
///
/// Built once by the tree builder and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(serde::Serialize))]
#[cfg_attr(feature = "cli", serde(transparent))]
pub struct Document {
    nodes: Vec<Node>,
}

impl Document {
    pub fn new(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn iter(&self) -> slice::Iter<'_, Node> {
        self.nodes.iter()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Flatten the document to plain text.
    ///
    /// Block nodes start on their own line, `<br/>` forces a newline, and
    /// inline pieces are joined with single spaces. Alternatives contribute
    /// their fixed text and bullets their marker.
    pub fn plain_text(&self) -> String {
        let mut out = TextSink::default();
        for node in &self.nodes {
            out.node(node);
        }
        out.finish()
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Node;
    type IntoIter = slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

impl From<Vec<Node>> for Document {
    fn from(nodes: Vec<Node>) -> Self {
        Self::new(nodes)
    }
}

#[derive(Default)]
struct TextSink {
    lines: Vec<String>,
    current: String,
}

impl TextSink {
    fn word(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if !self.current.is_empty() {
            self.current.push(' ');
        }
        self.current.push_str(text);
    }

    fn newline(&mut self) {
        if !self.current.is_empty() {
            self.lines.push(std::mem::take(&mut self.current));
        }
    }

    fn nodes(&mut self, nodes: &[Node]) {
        for node in nodes {
            self.node(node);
        }
    }

    fn item(&mut self, item: &ListItem) {
        self.newline();
        self.nodes(&item.children);
        self.newline();
    }

    fn node(&mut self, node: &Node) {
        match node {
            Node::CharacterRun { text } => self.word(text),
            Node::Bullet { marker, .. } => self.word(marker),
            Node::Alternative { text, .. } => self.word(text),
            Node::LineBreak => self.newline(),
            Node::List { items } => {
                for item in items {
                    self.item(item);
                }
            }
            Node::Optional { children, .. } => self.nodes(children),
            Node::Paragraph { children }
            | Node::TitleBlock { children }
            | Node::CopyrightBlock { children }
            | Node::StandardHeaderBlock { children } => {
                self.newline();
                self.nodes(children);
                self.newline();
            }
            Node::Unrecognized { .. } => {}
        }
    }

    fn finish(mut self) -> String {
        self.newline();
        self.lines.join("\n")
    }
}
