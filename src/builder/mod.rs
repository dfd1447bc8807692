//! Stack-based tree builder.
//!
//! Consumes the flat [`Token`] sequence of one markup body and rebuilds the
//! nested [`Document`] it encodes. Each open token pushes a frame with its
//! attributes already attached; each close token pops the top frame and
//! routes it into the new top according to that frame's variant. Character
//! data is normalized and routed the same way.
//!
//! Every structural problem is fatal. The builder never returns a partial
//! tree.
//!
//! # Example
//!
//! ```
//! use spdx_markup::{Node, ParseConfig, parse_body};
//!
//! let doc = parse_body("<p>  Permission is   granted </p>", &ParseConfig::new()).unwrap();
//! assert_eq!(
//!     doc.nodes(),
//!     &[Node::Paragraph { children: vec![Node::text("Permission is granted")] }]
//! );
//! ```

use std::iter::Peekable;

use tracing::{debug, trace};

use crate::config::ParseConfig;
use crate::error::{ParseError, Result};
use crate::markup::{BODY_TAG, Tag, normalize_whitespace};
use crate::model::{Document, ListItem, Node, Spacing};
use crate::xml::{Attribute, Token, Tokenizer};

/// Name used for character runs in error messages.
const TEXT_NAME: &str = "#text";

/// Whether the builder wants more tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    /// The body container was closed with nothing left open.
    Done,
}

/// An element under construction, or a finished one on its way to a parent.
#[derive(Debug)]
enum Element {
    Node(Node),
    Item(ListItem),
}

impl Element {
    fn name(&self) -> &str {
        match self {
            Element::Item(_) => Tag::Item.name(),
            Element::Node(node) => element_name(node),
        }
    }
}

/// Element name a node was built from.
fn element_name(node: &Node) -> &str {
    match node {
        Node::CharacterRun { .. } => TEXT_NAME,
        Node::Paragraph { .. } => Tag::Paragraph.name(),
        Node::Bullet { .. } => Tag::Bullet.name(),
        Node::List { .. } => Tag::List.name(),
        Node::Optional { .. } => Tag::Optional.name(),
        Node::Alternative { .. } => Tag::Alt.name(),
        Node::LineBreak => Tag::Br.name(),
        Node::TitleBlock { .. } => Tag::TitleText.name(),
        Node::CopyrightBlock { .. } => Tag::CopyrightText.name(),
        Node::StandardHeaderBlock { .. } => Tag::StandardLicenseHeader.name(),
        Node::Unrecognized { tag } => tag,
    }
}

/// Single-pass builder for one markup body.
#[derive(Debug)]
pub struct TreeBuilder {
    config: ParseConfig,
    /// Element whose close ends the body (`text`, `notes`, ...).
    container: String,
    stack: Vec<Element>,
    output: Vec<Node>,
}

impl TreeBuilder {
    /// Create a builder for a `<text>` body with default configuration.
    pub fn new() -> Self {
        Self::with_config(BODY_TAG, ParseConfig::default())
    }

    /// Create a builder for the body of `container`.
    pub fn with_config(container: impl Into<String>, config: ParseConfig) -> Self {
        Self {
            config,
            container: container.into(),
            stack: Vec::new(),
            output: Vec::new(),
        }
    }

    /// Number of currently open elements.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Feed one token.
    pub fn feed(&mut self, token: Token) -> std::result::Result<Flow, ParseError> {
        match token {
            Token::Open { name, attributes } => self.open(&name, &attributes)?,
            Token::Close { name } => return self.close(&name),
            Token::Text(raw) => {
                if let Some(text) = normalize_whitespace(&raw) {
                    self.place(Element::Node(Node::CharacterRun { text }))?;
                }
            }
            Token::Comment(_) | Token::Directive(_) => {}
            Token::ProcessingInstruction(body) => {
                return Err(ParseError::UnsupportedConstruct {
                    construct: format!("processing instruction <?{}?>", body.trim()),
                });
            }
        }
        Ok(Flow::Continue)
    }

    /// End of input: succeed only if nothing is left open.
    pub fn finish(self) -> std::result::Result<Document, ParseError> {
        if let Some(open) = self.stack.last() {
            return Err(ParseError::UnterminatedBody {
                body: self.container.clone(),
                open: open.name().to_string(),
            });
        }
        debug!(
            container = %self.container,
            nodes = self.output.len(),
            "built document"
        );
        Ok(Document::new(self.output))
    }

    fn open(
        &mut self,
        name: &str,
        attributes: &[Attribute],
    ) -> std::result::Result<(), ParseError> {
        let element = match Tag::from_name(name) {
            Some(tag) => self.element(tag, attributes)?,
            None if self.config.is_strict() => {
                return Err(ParseError::UnknownElement {
                    tag: name.to_string(),
                });
            }
            None => {
                debug!(tag = name, "keeping unrecognized element");
                Element::Node(Node::Unrecognized {
                    tag: name.to_string(),
                })
            }
        };
        trace!(tag = name, depth = self.stack.len(), "open");
        self.stack.push(element);
        Ok(())
    }

    /// Classify a recognized tag and attach its attributes.
    fn element(
        &self,
        tag: Tag,
        attributes: &[Attribute],
    ) -> std::result::Result<Element, ParseError> {
        for attr in attributes {
            if tag.accepts_attribute(&attr.name) {
                continue;
            }
            // Elements without an attribute table only reject in strict mode.
            if self.config.is_strict() || !tag.attributes().is_empty() {
                return Err(ParseError::UnknownAttribute {
                    tag: tag.name().to_string(),
                    attribute: attr.name.clone(),
                });
            }
            debug!(tag = tag.name(), attribute = %attr.name, "ignoring attribute");
        }

        let value = |key: &str| {
            attributes
                .iter()
                .find(|a| a.name == key)
                .map(|a| a.value.as_str())
        };
        let spacing = value("spacing").map_or(Spacing::Unspecified, Spacing::from_attr);

        let node = match tag {
            Tag::Item => return Ok(Element::Item(ListItem::default())),
            Tag::Paragraph => Node::Paragraph {
                children: Vec::new(),
            },
            Tag::Bullet => Node::Bullet {
                marker: String::new(),
                spacing,
            },
            Tag::List => Node::List { items: Vec::new() },
            Tag::Optional => Node::Optional {
                spacing,
                children: Vec::new(),
            },
            Tag::Alt => Node::Alternative {
                text: String::new(),
                name: value("name").unwrap_or_default().to_string(),
                pattern: value("match").unwrap_or_default().to_string(),
                spacing,
            },
            Tag::Br => Node::LineBreak,
            Tag::TitleText => Node::TitleBlock {
                children: Vec::new(),
            },
            Tag::CopyrightText => Node::CopyrightBlock {
                children: Vec::new(),
            },
            Tag::StandardLicenseHeader => Node::StandardHeaderBlock {
                children: Vec::new(),
            },
        };
        Ok(Element::Node(node))
    }

    fn close(&mut self, name: &str) -> std::result::Result<Flow, ParseError> {
        let top = self.stack.last().map(Element::name);

        if name == self.container && top != Some(name) {
            return match top {
                None => Ok(Flow::Done),
                Some(open) => Err(ParseError::UnterminatedBody {
                    body: self.container.clone(),
                    open: open.to_string(),
                }),
            };
        }

        match top {
            None => {
                return Err(ParseError::UnbalancedClose {
                    tag: name.to_string(),
                });
            }
            Some(open) if open != name => {
                return Err(ParseError::StructuralMismatch {
                    expected: open.to_string(),
                    found: name.to_string(),
                });
            }
            Some(_) => {}
        }

        if let Some(element) = self.stack.pop() {
            trace!(tag = name, depth = self.stack.len(), "close");
            self.place(element)?;
        }
        Ok(Flow::Continue)
    }

    /// Attach a finished element to the open element on top of the stack,
    /// or to the document when nothing is open.
    fn place(&mut self, child: Element) -> std::result::Result<(), ParseError> {
        let Some(parent) = self.stack.last_mut() else {
            return match child {
                Element::Node(node) => {
                    self.output.push(node);
                    Ok(())
                }
                Element::Item(_) => Err(ParseError::InvalidChildPlacement {
                    parent: self.container.clone(),
                    child: Tag::Item.name().to_string(),
                }),
            };
        };

        match (parent, child) {
            (
                Element::Node(
                    Node::Paragraph { children }
                    | Node::Optional { children, .. }
                    | Node::TitleBlock { children }
                    | Node::CopyrightBlock { children }
                    | Node::StandardHeaderBlock { children },
                ),
                Element::Node(node),
            ) => children.push(node),
            (Element::Item(item), Element::Node(node)) => item.children.push(node),
            (Element::Node(Node::List { items }), Element::Item(item)) => items.push(item),
            (
                Element::Node(
                    Node::Alternative { text: target, .. } | Node::Bullet { marker: target, .. },
                ),
                Element::Node(Node::CharacterRun { text }),
            ) => {
                if !target.is_empty() {
                    target.push(' ');
                }
                target.push_str(&text);
            }
            (parent, child) => {
                return Err(ParseError::InvalidChildPlacement {
                    parent: parent.name().to_string(),
                    child: child.name().to_string(),
                });
            }
        }
        Ok(())
    }
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the body of `container` from a token stream.
///
/// The stream must be positioned just after the container's open tag.
/// Tokens are consumed up to and including the container's close tag; the
/// rest of the stream is left for the caller. Running out of tokens is
/// accepted when nothing is open, so a bare fragment also parses.
pub fn build_document<I>(tokens: &mut I, container: &str, config: &ParseConfig) -> Result<Document>
where
    I: Iterator<Item = Result<Token>>,
{
    let mut builder = TreeBuilder::with_config(container, config.clone());
    for token in tokens {
        if builder.feed(token?)? == Flow::Done {
            break;
        }
    }
    Ok(builder.finish()?)
}

/// Parse one `<text>` body held in a string.
///
/// The input may be the bare content of the body or the whole `<text>`
/// element. A `</text>` ends the body; only whitespace, comments and
/// directives may follow it.
pub fn parse_body(xml: &str, config: &ParseConfig) -> Result<Document> {
    let mut tokens = Tokenizer::new(xml).peekable();
    let wrapped = open_container(&mut tokens, BODY_TAG);

    let mut builder = TreeBuilder::with_config(BODY_TAG, config.clone());
    let mut closed = false;
    for token in tokens.by_ref() {
        if builder.feed(token?)? == Flow::Done {
            closed = true;
            break;
        }
    }
    let document = builder.finish()?;
    if wrapped && !closed {
        return Err(ParseError::UnterminatedBody {
            body: BODY_TAG.to_string(),
            open: BODY_TAG.to_string(),
        }
        .into());
    }

    for token in tokens {
        let token = token?;
        if !is_insignificant(&token) {
            return Err(trailing_token(token).into());
        }
    }
    Ok(document)
}

/// Consume leading filler and the container's open tag, if present.
fn open_container<I>(tokens: &mut Peekable<I>, container: &str) -> bool
where
    I: Iterator<Item = Result<Token>>,
{
    while let Some(Ok(token)) = tokens.peek() {
        let opens = matches!(token, Token::Open { name, .. } if name == container);
        if !opens && !is_insignificant(token) {
            return false;
        }
        tokens.next();
        if opens {
            return true;
        }
    }
    false
}

/// Tokens that carry no content outside a body.
fn is_insignificant(token: &Token) -> bool {
    match token {
        Token::Comment(_) | Token::Directive(_) => true,
        Token::Text(raw) => normalize_whitespace(raw).is_none(),
        _ => false,
    }
}

fn trailing_token(token: Token) -> ParseError {
    let construct = match token {
        Token::Close { name } => return ParseError::UnbalancedClose { tag: name },
        Token::Open { name, .. } => format!("<{name}> after </{BODY_TAG}>"),
        Token::Text(_) => format!("character data after </{BODY_TAG}>"),
        Token::ProcessingInstruction(body) => {
            format!("processing instruction <?{}?>", body.trim())
        }
        Token::Comment(_) | Token::Directive(_) => format!("markup after </{BODY_TAG}>"),
    };
    ParseError::UnsupportedConstruct { construct }
}

#[cfg(test)]
mod tests;
