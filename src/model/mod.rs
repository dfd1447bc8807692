//! Core data model for parsed license markup.
//!
//! This module contains:
//! - Document nodes and their closed set of variants
//! - Spacing qualifiers carried by `optional`, `alt` and `bullet`
//! - License records and the collection that wraps them

mod document;
mod license;
mod node;
mod spacing;

pub use document::Document;
pub use license::{License, LicenseCollection};
pub use node::{ListItem, Node, NodeKind};
pub use spacing::Spacing;
