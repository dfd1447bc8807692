//! # spdx-markup
//!
//! Parse the SPDX license-list XML markup into a typed document tree.
//!
//! ## Features
//!
//! - Single-pass, stack-based tree builder over XML tokens from quick-xml
//! - Closed node set: paragraphs, bullets, lists, optional clauses,
//!   alternatives, title/copyright/header blocks and line breaks
//! - Whitespace normalization of character data
//! - Fatal, typed structural errors: no partial trees
//! - License collection reader for `SPDXLicenseCollection` files
//!
//! ## Quick Start
//!
//! ```no_run
//! use spdx_markup::{LicenseCollection, render_tree};
//!
//! let collection = LicenseCollection::open("MIT.xml").unwrap();
//! for license in &collection.licenses {
//!     println!("{}", license.license_id);
//!     print!("{}", render_tree(&license.text));
//! }
//! ```
//!
//! ## Parsing a Body
//!
//! ```
//! use spdx_markup::{Node, ParseConfig, Spacing, parse_body};
//!
//! let doc = parse_body(
//!     r#"<optional spacing="after">Copyright <alt name="year" match=".+">2024</alt></optional>"#,
//!     &ParseConfig::new(),
//! )
//! .unwrap();
//!
//! match &doc.nodes()[0] {
//!     Node::Optional { spacing, children } => {
//!         assert_eq!(*spacing, Spacing::After);
//!         assert_eq!(children.len(), 2);
//!     }
//!     _ => unreachable!(),
//! }
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod markup;
pub mod model;
pub mod reader;
pub mod render;
pub(crate) mod util;
pub mod xml;

pub use builder::{Flow, TreeBuilder, build_document, parse_body};
pub use config::{ParseConfig, Strictness};
pub use error::{Error, ParseError, ParseErrorKind, Result};
pub use model::{Document, License, LicenseCollection, ListItem, Node, NodeKind, Spacing};
pub use reader::read_collection;
pub use render::render_tree;
pub use xml::{Token, Tokenizer};
