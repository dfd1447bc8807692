//! Spacing qualifier for `optional`, `alt` and `bullet` elements.

use std::fmt;

/// Normalized meaning of a `spacing` attribute.
///
/// `Unspecified` means no value was given; `InvalidValue` means a value
/// outside `none|before|after|both` was given. The two are never merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "cli", derive(serde::Serialize))]
#[cfg_attr(feature = "cli", serde(rename_all = "snake_case"))]
pub enum Spacing {
    #[default]
    Unspecified,
    None,
    Before,
    After,
    Both,
    InvalidValue,
}

impl Spacing {
    /// Classify a raw attribute value. Empty counts as unspecified.
    pub fn from_attr(value: &str) -> Self {
        match value {
            "" => Spacing::Unspecified,
            "none" => Spacing::None,
            "before" => Spacing::Before,
            "after" => Spacing::After,
            "both" => Spacing::Both,
            _ => Spacing::InvalidValue,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Spacing::Unspecified => "unspecified",
            Spacing::None => "none",
            Spacing::Before => "before",
            Spacing::After => "after",
            Spacing::Both => "both",
            Spacing::InvalidValue => "invalid",
        }
    }
}

impl fmt::Display for Spacing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
