//! Parser configuration.

/// How the builder treats markup outside the known vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strictness {
    /// Unknown elements and attributes on attribute-less elements are fatal.
    #[default]
    Strict,
    /// Unknown elements become [`Node::Unrecognized`](crate::Node::Unrecognized)
    /// and attributes on attribute-less elements are ignored.
    Lenient,
}

/// Configuration for markup parsing.
#[derive(Debug, Clone, Default)]
pub struct ParseConfig {
    pub strictness: Strictness,
}

impl ParseConfig {
    /// Create a strict configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a lenient configuration.
    pub fn lenient() -> Self {
        Self {
            strictness: Strictness::Lenient,
        }
    }

    pub fn with_strictness(mut self, strictness: Strictness) -> Self {
        self.strictness = strictness;
        self
    }

    pub fn is_strict(&self) -> bool {
        self.strictness == Strictness::Strict
    }
}
