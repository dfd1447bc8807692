//! The SPDX license-list markup vocabulary.
//!
//! - [`Tag`]: the closed set of body elements and their attribute tables
//! - [`normalize_whitespace`]: the character-data rule applied before a run
//!   becomes a node

mod tag;
mod text;

pub use tag::{BODY_TAG, NOTES_TAG, Tag};
pub use text::normalize_whitespace;
