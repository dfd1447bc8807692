//! Error types for spdx-markup operations.

use std::fmt;

use thiserror::Error;

/// Errors that can occur while loading or parsing a license collection.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("XML parsing error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("XML attribute error: {0}")]
    Attribute(#[from] quick_xml::events::attributes::AttrError),

    #[error("XML escape error: {0}")]
    Escape(#[from] quick_xml::escape::EscapeError),

    #[error("UTF-8 decoding error: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    #[error("Unknown entity reference: &{0};")]
    UnknownEntity(String),

    #[error("Invalid value {value:?} for attribute {attribute:?}")]
    InvalidAttribute { attribute: String, value: String },

    #[error("Missing required element: {0}")]
    MissingElement(String),

    #[error("Malformed markup: {0}")]
    Parse(#[from] ParseError),

    #[error("License {license_id:?}: {source}")]
    License {
        license_id: String,
        #[source]
        source: ParseError,
    },
}

impl Error {
    /// The markup error behind this failure, if it was one.
    pub fn parse_error(&self) -> Option<&ParseError> {
        match self {
            Error::Parse(e) | Error::License { source: e, .. } => Some(e),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// Structural error raised by the tree builder.
///
/// Every variant is fatal: the builder never returns a partial tree.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("close tag </{found}> does not match open tag <{expected}>")]
    StructuralMismatch { expected: String, found: String },

    #[error("close tag </{tag}> has no matching open tag")]
    UnbalancedClose { tag: String },

    #[error("<{body}> ended while <{open}> is still open")]
    UnterminatedBody { body: String, open: String },

    #[error("attribute {attribute:?} is not allowed on <{tag}>")]
    UnknownAttribute { tag: String, attribute: String },

    #[error("<{child}> cannot be placed inside <{parent}>")]
    InvalidChildPlacement { parent: String, child: String },

    #[error("unsupported construct: {construct}")]
    UnsupportedConstruct { construct: String },

    #[error("unknown element <{tag}>")]
    UnknownElement { tag: String },
}

impl ParseError {
    pub fn kind(&self) -> ParseErrorKind {
        match self {
            ParseError::StructuralMismatch { .. } => ParseErrorKind::StructuralMismatch,
            ParseError::UnbalancedClose { .. } => ParseErrorKind::UnbalancedClose,
            ParseError::UnterminatedBody { .. } => ParseErrorKind::UnterminatedBody,
            ParseError::UnknownAttribute { .. } => ParseErrorKind::UnknownAttribute,
            ParseError::InvalidChildPlacement { .. } => ParseErrorKind::InvalidChildPlacement,
            ParseError::UnsupportedConstruct { .. } => ParseErrorKind::UnsupportedConstruct,
            ParseError::UnknownElement { .. } => ParseErrorKind::UnknownElement,
        }
    }
}

/// Discriminant of [`ParseError`], for callers that only branch on the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    StructuralMismatch,
    UnbalancedClose,
    UnterminatedBody,
    UnknownAttribute,
    InvalidChildPlacement,
    UnsupportedConstruct,
    UnknownElement,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ParseErrorKind::StructuralMismatch => "structural mismatch",
            ParseErrorKind::UnbalancedClose => "unbalanced close",
            ParseErrorKind::UnterminatedBody => "unterminated body",
            ParseErrorKind::UnknownAttribute => "unknown attribute",
            ParseErrorKind::InvalidChildPlacement => "invalid child placement",
            ParseErrorKind::UnsupportedConstruct => "unsupported construct",
            ParseErrorKind::UnknownElement => "unknown element",
        };
        f.write_str(name)
    }
}
