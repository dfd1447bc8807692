//! Lexical tokens.

/// A decoded attribute: local name and unescaped value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

impl Attribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// One lexical event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Open {
        name: String,
        attributes: Vec<Attribute>,
    },
    Close {
        name: String,
    },
    /// Raw character data with entities resolved, not yet normalized.
    Text(String),
    Comment(String),
    ProcessingInstruction(String),
    /// XML declaration or DOCTYPE.
    Directive(String),
}

impl Token {
    pub fn open(name: impl Into<String>) -> Self {
        Token::Open {
            name: name.into(),
            attributes: Vec::new(),
        }
    }

    pub fn open_with(name: impl Into<String>, attributes: Vec<Attribute>) -> Self {
        Token::Open {
            name: name.into(),
            attributes,
        }
    }

    pub fn close(name: impl Into<String>) -> Self {
        Token::Close { name: name.into() }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Token::Text(text.into())
    }

    /// Find an attribute value on an open token.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        match self {
            Token::Open { attributes, .. } => attributes
                .iter()
                .find(|a| a.name == name)
                .map(|a| a.value.as_str()),
            _ => None,
        }
    }
}
