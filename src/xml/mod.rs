//! XML lexing on top of quick-xml.
//!
//! [`Tokenizer`] turns quick-xml events into the flat [`Token`] sequence the
//! tree builder consumes: self-closing elements become an open/close pair,
//! and adjacent text, CDATA and entity references become one character run.

mod token;
mod tokenizer;

pub use token::{Attribute, Token};
pub use tokenizer::Tokenizer;
