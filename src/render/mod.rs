//! Read-only rendering of parsed documents.
//!
//! - [`render_tree`]: indented outline of every node, one per line
//!
//! Rendering is a pure function of the tree; no I/O is performed here.

mod tree;

pub use tree::{TreeRenderer, render_tree};
