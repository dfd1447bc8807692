//! Indented outline of a document tree.

use crate::model::{Document, ListItem, Node};

/// Indentation added per nesting level.
const INDENT_STEP: usize = 2;

/// Render a document as an indented outline.
///
/// ```
/// use spdx_markup::{Document, Node, render_tree};
///
/// let doc = Document::new(vec![Node::Paragraph { children: vec![Node::text("Hi")] }]);
/// assert_eq!(render_tree(&doc), "- Paragraph:\n  - CharacterRun: Hi\n");
/// ```
pub fn render_tree(document: &Document) -> String {
    let mut renderer = TreeRenderer::new();
    renderer.document(document);
    renderer.finish()
}

/// Outline renderer (pure string accumulation).
#[derive(Debug, Default)]
pub struct TreeRenderer {
    output: String,
    indent: usize,
}

impl TreeRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn document(&mut self, document: &Document) {
        self.nodes(document.nodes());
    }

    pub fn finish(self) -> String {
        self.output
    }

    fn nodes(&mut self, nodes: &[Node]) {
        for node in nodes {
            self.node(node);
        }
    }

    fn line(&mut self, text: &str) {
        for _ in 0..self.indent {
            self.output.push(' ');
        }
        self.output.push_str("- ");
        self.output.push_str(text);
        self.output.push('\n');
    }

    fn nested(&mut self, f: impl FnOnce(&mut Self)) {
        self.indent += INDENT_STEP;
        f(self);
        self.indent -= INDENT_STEP;
    }

    fn item(&mut self, item: &ListItem) {
        self.line("Item:");
        self.nested(|r| r.nodes(&item.children));
    }

    fn node(&mut self, node: &Node) {
        let kind = node.kind();
        match node {
            Node::CharacterRun { text } => self.line(&format!("{kind}: {text}")),
            Node::Bullet { marker, spacing } => {
                self.line(&format!("{kind} (spacing: {spacing}): {marker}"))
            }
            Node::Alternative {
                text,
                name,
                pattern,
                spacing,
            } => self.line(&format!(
                "{kind} (spacing: {spacing}, name: {name}, match: {pattern}): {text}"
            )),
            Node::LineBreak => self.line(kind.as_str()),
            Node::Unrecognized { tag } => self.line(&format!("{kind} <{tag}>")),
            Node::List { items } => {
                self.line(&format!("{kind}:"));
                self.nested(|r| {
                    for item in items {
                        r.item(item);
                    }
                });
            }
            Node::Optional { spacing, children } => {
                self.line(&format!("{kind} (spacing: {spacing}):"));
                self.nested(|r| r.nodes(children));
            }
            Node::Paragraph { children }
            | Node::TitleBlock { children }
            | Node::CopyrightBlock { children }
            | Node::StandardHeaderBlock { children } => {
                self.line(&format!("{kind}:"));
                self.nested(|r| r.nodes(children));
            }
        }
    }
}
